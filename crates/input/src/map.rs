//! Mapping from terminal events to pointer updates.

use crate::types::{PointerPosition, TermBounds};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Where a pointer movement landed relative to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Inside(PointerPosition),
    Outside,
}

impl PointerInput {
    /// The surface-local position, absent when off the surface.
    pub fn position(self) -> Option<PointerPosition> {
        match self {
            PointerInput::Inside(p) => Some(p),
            PointerInput::Outside => None,
        }
    }
}

/// Translate a mouse event into a pointer update.
///
/// Only motion (plain moves and drags) counts. Returns `None` for other mouse
/// events, and [`PointerInput::Outside`] when the event is off the surface or no
/// surface is mounted.
pub fn map_mouse_event(event: MouseEvent, bounds: Option<TermBounds>) -> Option<PointerInput> {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {}
        _ => return None,
    }
    let inside = bounds.and_then(|b| b.to_surface(event.column, event.row));
    Some(inside.map_or(PointerInput::Outside, PointerInput::Inside))
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;

    fn bounds() -> TermBounds {
        TermBounds {
            left: 2,
            top: 1,
            cols: 75,
            rows: 30,
            px_per_col: 12,
            px_per_row: 30,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn motion_inside_is_translated() {
        let ev = mouse(MouseEventKind::Moved, 2, 1);
        assert_eq!(
            map_mouse_event(ev, Some(bounds())),
            Some(PointerInput::Inside(PointerPosition::new(11, 29)))
        );

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 7, 3);
        assert_eq!(
            map_mouse_event(drag, Some(bounds())).and_then(PointerInput::position),
            Some(PointerPosition::new(71, 89))
        );
    }

    #[test]
    fn motion_outside_or_unmounted_is_outside() {
        let ev = mouse(MouseEventKind::Moved, 0, 0);
        assert_eq!(map_mouse_event(ev, Some(bounds())), Some(PointerInput::Outside));

        let ev = mouse(MouseEventKind::Moved, 10, 10);
        assert_eq!(map_mouse_event(ev, None), Some(PointerInput::Outside));
    }

    #[test]
    fn clicks_and_scrolls_are_ignored() {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 5, 5);
        let scroll = mouse(MouseEventKind::ScrollDown, 5, 5);
        assert_eq!(map_mouse_event(down, Some(bounds())), None);
        assert_eq!(map_mouse_event(scroll, Some(bounds())), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
