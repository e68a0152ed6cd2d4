//! Cell geometry and pointer hit testing.
//!
//! Cell `i` along either axis starts at `i * (CELL_SIZE + GAP_SIZE)`. Hover uses the
//! closed rectangle `[origin, origin + CELL_SIZE]`, so the pixel right after a cell
//! still counts as inside it while the remaining gap pixel belongs to no cell.

use crate::types::{PointerPosition, CELL_PITCH, CELL_SIZE, NUM_CELLS};

/// A pixel position on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Closed-interval containment on both axes.
    pub fn contains(&self, p: PointerPosition) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        let (x0, y0) = (self.x as i64, self.y as i64);
        px >= x0 && py >= y0 && px <= x0 + self.w as i64 && py <= y0 + self.h as i64
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Pixel offset of cell `index` along one axis.
#[inline]
pub const fn cell_origin(index: u8) -> u32 {
    index as u32 * CELL_PITCH
}

/// Bounds of the cell at `(col, row)`.
pub const fn cell_rect(col: u8, row: u8) -> Rect {
    Rect::new(cell_origin(col), cell_origin(row), CELL_SIZE, CELL_SIZE)
}

/// Whether an optional pointer lies within `rect`.
pub fn is_hovered(rect: Rect, pointer: Option<PointerPosition>) -> bool {
    pointer.is_some_and(|p| rect.contains(p))
}

/// The `(col, row)` under the pointer, if any.
pub fn hovered_cell(pointer: Option<PointerPosition>) -> Option<(u8, u8)> {
    let p = pointer?;
    Some((axis_cell(p.x)?, axis_cell(p.y)?))
}

fn axis_cell(v: i32) -> Option<u8> {
    if v < 0 {
        return None;
    }
    let v = v as u32;
    let index = v / CELL_PITCH;
    if index >= NUM_CELLS as u32 || v - index * CELL_PITCH > CELL_SIZE {
        return None;
    }
    Some(index as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_step_by_pitch() {
        for i in 0..NUM_CELLS - 1 {
            assert_eq!(cell_origin(i + 1) - cell_origin(i), 60);
        }
        assert_eq!(cell_origin(14), 840);
    }

    #[test]
    fn closed_rect_includes_far_edge() {
        let r = cell_rect(1, 1);
        assert!(r.contains(PointerPosition::new(60, 60)));
        assert!(r.contains(PointerPosition::new(118, 118)));
        assert!(!r.contains(PointerPosition::new(119, 60)));
        assert!(!r.contains(PointerPosition::new(60, 119)));
        assert!(!r.contains(PointerPosition::new(59, 60)));
    }

    #[test]
    fn absent_pointer_hovers_nothing() {
        assert!(!is_hovered(cell_rect(0, 0), None));
        assert_eq!(hovered_cell(None), None);
    }

    #[test]
    fn hovered_cell_agrees_with_rect_test() {
        for v in [-1, 0, 29, 58, 59, 60, 118, 119, 840, 898, 899] {
            let p = PointerPosition::new(v, v);
            let expected = (0..NUM_CELLS)
                .flat_map(|row| (0..NUM_CELLS).map(move |col| (col, row)))
                .find(|&(col, row)| cell_rect(col, row).contains(p));
            assert_eq!(hovered_cell(Some(p)), expected, "pointer at {v}");
        }
    }

    #[test]
    fn center_of_cell() {
        assert_eq!(cell_rect(0, 0).center(), Point::new(29, 29));
        assert_eq!(cell_rect(2, 1).center(), Point::new(149, 89));
    }
}
