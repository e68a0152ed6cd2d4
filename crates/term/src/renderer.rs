//! TerminalRenderer: presents the board framebuffer on a real terminal.
//!
//! Off the mounted board every framebuffer cell is blank, so only the board
//! rectangle is ever printed cell by cell. A redraw clears the screen in the
//! blank style and prints the board rows; later frames print just the runs
//! inside the board that changed, which for a hover move is the block the
//! pointer left and the block it entered.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::TermBounds;

/// The frame currently on screen and where its board was.
struct Shown {
    frame: FrameBuffer,
    board: Option<TermBounds>,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<Shown>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse motion reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        log::debug!("terminal entered");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::debug!("terminal restored");
        Ok(())
    }

    /// Make the next `present` a full redraw (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, whose board occupies `board` (`None` while unmounted).
    ///
    /// The previous frame is diffed against when the board has not moved, then
    /// swapped into `fb`. Callers reset `fb` before painting into it again.
    pub fn present(&mut self, fb: &mut FrameBuffer, board: Option<TermBounds>) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.shown.take() {
            Some(shown) if shown.board == board && same_size(&shown.frame, fb) => {
                encode_changes(&shown.frame, fb, board, &mut self.buf)?;
                shown.frame
            }
            Some(shown) => {
                encode_redraw(fb, board, &mut self.buf)?;
                shown.frame
            }
            None => {
                encode_redraw(fb, board, &mut self.buf)?;
                FrameBuffer::new(0, 0)
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.shown = Some(Shown { frame: prev, board });
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Encode a whole-screen redraw into `out`: clear to blank, then print the
/// board rows.
pub fn encode_redraw(fb: &FrameBuffer, board: Option<TermBounds>, out: &mut Vec<u8>) -> Result<()> {
    CellStyle::BLANK.queue_into(out)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if let Some(b) = board {
        let mut style = Some(CellStyle::BLANK);
        for row in b.top..b.top + b.rows {
            out.queue(cursor::MoveTo(b.left, row))?;
            print_run(fb, b.left, row, b.cols, &mut style, out)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode the runs of board cells that differ between `prev` and `next`.
///
/// Emits nothing at all when the board is unchanged.
pub fn encode_changes(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    board: Option<TermBounds>,
    out: &mut Vec<u8>,
) -> Result<()> {
    let Some(b) = board else {
        return Ok(());
    };

    let mut style = None;
    for_each_changed_run(prev, next, b, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        print_run(next, x, y, len, &mut style, out)
    })?;

    if style.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Print `len` cells of row `y` from column `x`, switching style only when it
/// differs from `current`.
fn print_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    current: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        if *current != Some(cell.style) {
            cell.style.queue_into(out)?;
            *current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

/// Call `f(x, y, len)` for each horizontal run of board cells that changed.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    board: TermBounds,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let right = board.left + board.cols;
    for y in board.top..board.top + board.rows {
        let mut x = board.left;
        while x < right {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < right && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }
    Ok(())
}
