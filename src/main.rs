//! Scrabble board runner (default binary).
//!
//! With no arguments it draws the board in the terminal and highlights the cell
//! under the mouse. `snapshot <path> [--pointer <x> <y>]` paints once into a
//! pixel canvas and writes a PPM file instead.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use scrabble_board::config::{parse_args, AppConfig, Command};
use scrabble_board::host::BoardHost;
use scrabble_board::input::should_quit;
use scrabble_board::logging;
use scrabble_board::snapshot::write_snapshot;
use scrabble_board::term::{FrameBuffer, TerminalRenderer, Viewport};

/// Poll timeout while no repaint is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let config = AppConfig::from_env();

    match command {
        Command::Snapshot { path, pointer } => {
            logging::init(&config, false)?;
            write_snapshot(&path, pointer)
        }
        Command::Interactive => {
            logging::init(&config, true)?;
            log::info!("starting with {:?}", config);

            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let started = Instant::now();
    let mut host = BoardHost::new(config.frame_interval_ms);
    let mut fb = FrameBuffer::new(0, 0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    if !host.mount(viewport) {
        present_blank(term, &mut fb, viewport)?;
    }

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if host.frame(now_ms, viewport, &mut fb) {
            term.present(&mut fb, host.bounds())?;
        }

        let timeout = host
            .time_until_frame(now_ms)
            .map(Duration::from_millis)
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    return Ok(());
                }
                Event::Mouse(mouse) => host.on_mouse(mouse),
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    if !host.mount(viewport) {
                        present_blank(term, &mut fb, viewport)?;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Show an empty screen while the board cannot be mounted.
fn present_blank(term: &mut TerminalRenderer, fb: &mut FrameBuffer, viewport: Viewport) -> Result<()> {
    fb.reset(viewport.width, viewport.height);
    term.present(fb, None)
}
