//! Drawing surface abstraction.

use crate::geometry::{Point, Rect};
use crate::types::Rgb;

/// A 2D target the board can be painted on.
///
/// Coordinates are surface pixels. Implementations clip anything outside
/// their bounds; none of these calls can fail.
pub trait Surface {
    /// Reset every pixel to the surface's empty state.
    fn clear(&mut self);

    /// Fill a rectangle whose corners are rounded by `radius`.
    fn fill_round_rect(&mut self, rect: Rect, radius: u32, color: Rgb);

    /// Draw `text` centred on `center`.
    fn fill_text(&mut self, center: Point, text: &str, color: Rgb);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: u32, color: Rgb) {
        (**self).fill_round_rect(rect, radius, color);
    }

    fn fill_text(&mut self, center: Point, text: &str, color: Rgb) {
        (**self).fill_text(center, text, color);
    }
}
