//! BoardView: paints the board layout onto a [`Surface`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::core::generate_board;
use crate::geometry::{cell_rect, is_hovered, Rect};
use crate::surface::Surface;
use crate::types::{PointerPosition, Square, CORNER_RADIUS};

/// Stateless board painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    corner_radius: u32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            corner_radius: CORNER_RADIUS,
        }
    }
}

impl BoardView {
    pub fn new(corner_radius: u32) -> Self {
        Self { corner_radius }
    }

    pub fn corner_radius(&self) -> u32 {
        self.corner_radius
    }

    /// Repaint the whole board.
    ///
    /// Clears the surface, regenerates the layout and draws every cell in
    /// row-major order. The cell under `pointer` (if any) gets its hover colour.
    pub fn render_into<S: Surface + ?Sized>(
        &self,
        pointer: Option<PointerPosition>,
        surface: &mut S,
    ) {
        surface.clear();

        let board = generate_board();
        for (col, row, square) in board.iter() {
            let rect = cell_rect(col, row);
            self.draw_cell(surface, rect, square, is_hovered(rect, pointer));
        }
    }

    /// Convenience helper that allocates a new board-sized canvas.
    pub fn render(&self, pointer: Option<PointerPosition>) -> PixelCanvas {
        let mut canvas = PixelCanvas::board_sized();
        self.render_into(pointer, &mut canvas);
        canvas
    }

    fn draw_cell<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        rect: Rect,
        square: Square,
        hovered: bool,
    ) {
        let fill = square.fill_color(hovered);
        surface.fill_round_rect(rect, self.corner_radius, fill);

        if let Some(label) = square.label() {
            surface.fill_text(rect.center(), label, fill.contrast_text());
        }
    }
}
