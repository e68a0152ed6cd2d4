//! TermSurface: a [`Surface`] that draws into a character framebuffer.
//!
//! Surface pixels are mapped onto terminal cells at a fixed scale: one column
//! covers 12 px and one row covers 30 px. A terminal cell takes the colour of
//! the rectangle containing its sample pixel (see [`sample_px`](crate::types::sample_px)), which turns
//! every board cell into a 4x1 block followed by a one-column and one-row gap.
//! Pointer translation uses the same sample pixel, so the highlighted block is
//! always the one under the mouse.

use crate::fb::{CellStyle, FrameBuffer};
use crate::render::geometry::{Point, Rect};
use crate::render::Surface;
use crate::types::{sample_span, Rgb, TermBounds, SURFACE_SIZE};

/// Surface pixels per terminal column.
pub const PX_PER_COL: u32 = 12;

/// Surface pixels per terminal row.
pub const PX_PER_ROW: u32 = 30;

/// Terminal columns covered by the surface.
pub const SURFACE_COLS: u16 = SURFACE_SIZE.div_ceil(PX_PER_COL) as u16;

/// Terminal rows covered by the surface.
pub const SURFACE_ROWS: u16 = SURFACE_SIZE.div_ceil(PX_PER_ROW) as u16;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Bounds of the surface with its top-left corner at `(left, top)`.
pub fn surface_bounds(left: u16, top: u16) -> TermBounds {
    TermBounds {
        left,
        top,
        cols: SURFACE_COLS,
        rows: SURFACE_ROWS,
        px_per_col: PX_PER_COL,
        px_per_row: PX_PER_ROW,
    }
}

/// Centre the surface in `viewport`.
///
/// Returns `None` when the viewport cannot hold the whole surface.
pub fn place_centered(viewport: Viewport) -> Option<TermBounds> {
    if viewport.width < SURFACE_COLS || viewport.height < SURFACE_ROWS {
        return None;
    }
    let left = (viewport.width - SURFACE_COLS) / 2;
    let top = (viewport.height - SURFACE_ROWS) / 2;
    Some(surface_bounds(left, top))
}

/// Borrowed view of a framebuffer region that accepts surface drawing calls.
pub struct TermSurface<'a> {
    fb: &'a mut FrameBuffer,
    bounds: TermBounds,
}

impl<'a> TermSurface<'a> {
    pub fn new(fb: &'a mut FrameBuffer, bounds: TermBounds) -> Self {
        Self { fb, bounds }
    }

    pub fn bounds(&self) -> TermBounds {
        self.bounds
    }

    /// Terminal span `[start, end)` sampling pixels `[px, px + len]`, relative
    /// to the surface and clipped to `limit`.
    fn span(px: u32, len: u32, scale: u32, limit: u16) -> (u16, u16) {
        let (start, end) = sample_span(px, len, scale);
        let limit = limit as u32;
        (start.min(limit) as u16, end.min(limit) as u16)
    }

    fn fill_region(&mut self, cols: (u16, u16), rows: (u16, u16), style: CellStyle) {
        let b = self.bounds;
        self.fb.fill(
            b.left + cols.0..b.left + cols.1,
            b.top + rows.0..b.top + rows.1,
            style,
        );
    }
}

impl Surface for TermSurface<'_> {
    fn clear(&mut self) {
        let b = self.bounds;
        self.fill_region((0, b.cols), (0, b.rows), CellStyle::BLANK);
    }

    fn fill_round_rect(&mut self, rect: Rect, _radius: u32, color: Rgb) {
        let b = self.bounds;
        let cols = Self::span(rect.x, rect.w, b.px_per_col, b.cols);
        let rows = Self::span(rect.y, rect.h, b.px_per_row, b.rows);
        self.fill_region(cols, rows, CellStyle::fill(color));
    }

    fn fill_text(&mut self, center: Point, text: &str, color: Rgb) {
        let b = self.bounds;
        let row = center.y / b.px_per_row;
        if row >= b.rows as u32 {
            return;
        }
        let len = text.chars().count() as u32;
        let col = (center.x / b.px_per_col).saturating_sub(len / 2);

        for (i, ch) in text.chars().enumerate() {
            let c = col + i as u32;
            if c >= b.cols as u32 {
                break;
            }
            let (x, y) = (b.left + c as u16, b.top + row as u16);
            let bg = self.fb.get(x, y).map(|cell| cell.style.bg).unwrap_or_default();
            self.fb.put(x, y, ch, CellStyle::label(color, bg));
        }
    }
}
