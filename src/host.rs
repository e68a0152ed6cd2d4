//! BoardHost: mounts the board in a terminal viewport and feeds it pointer updates.
//!
//! The host owns the only mutable state the board has: the last known pointer
//! position and the pending repaint. Every repaint receives that position by value.

use crossterm::event::MouseEvent;

use crate::input::map_mouse_event;
use crate::render::{hovered_cell, BoardView};
use crate::term::{place_centered, FrameBuffer, RepaintScheduler, TermSurface, Viewport};
use crate::types::{PointerPosition, TermBounds};

pub struct BoardHost {
    view: BoardView,
    scheduler: RepaintScheduler,
    mount: Option<TermBounds>,
    pointer: Option<PointerPosition>,
    hovered: Option<(u8, u8)>,
}

impl BoardHost {
    pub fn new(frame_interval_ms: u64) -> Self {
        Self {
            view: BoardView::default(),
            scheduler: RepaintScheduler::new(frame_interval_ms),
            mount: None,
            pointer: None,
            hovered: None,
        }
    }

    /// Place the surface in `viewport` and schedule the initial repaint.
    ///
    /// When the viewport is too small there is nothing to draw on: the host
    /// stays unmounted, drops any pending repaint and returns `false`.
    pub fn mount(&mut self, viewport: Viewport) -> bool {
        self.scheduler.reset();
        self.pointer = None;
        self.hovered = None;
        self.mount = place_centered(viewport);

        match self.mount {
            Some(b) => {
                log::debug!(
                    "mounted {}x{} surface at ({}, {}) in {}x{} viewport",
                    b.cols,
                    b.rows,
                    b.left,
                    b.top,
                    viewport.width,
                    viewport.height
                );
                self.scheduler.request(None);
                true
            }
            None => {
                log::debug!(
                    "viewport {}x{} too small; board not mounted",
                    viewport.width,
                    viewport.height
                );
                false
            }
        }
    }

    pub fn bounds(&self) -> Option<TermBounds> {
        self.mount
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Last known surface-local pointer position.
    pub fn pointer(&self) -> Option<PointerPosition> {
        self.pointer
    }

    pub fn hovered(&self) -> Option<(u8, u8)> {
        self.hovered
    }

    pub fn scheduler(&self) -> &RepaintScheduler {
        &self.scheduler
    }

    /// Handle a raw terminal mouse event.
    pub fn on_mouse(&mut self, event: MouseEvent) {
        if let Some(input) = map_mouse_event(event, self.mount) {
            self.on_pointer(input.position());
        }
    }

    /// Record a surface-local pointer position and schedule a repaint.
    pub fn on_pointer(&mut self, pointer: Option<PointerPosition>) {
        if !self.is_mounted() {
            return;
        }
        self.pointer = pointer;

        let hovered = hovered_cell(pointer);
        if hovered != self.hovered {
            log::trace!("hover {:?} -> {:?}", self.hovered, hovered);
            self.hovered = hovered;
        }
        self.scheduler.request(pointer);
    }

    /// Milliseconds until the next repaint is due; `None` when idle.
    pub fn time_until_frame(&self, now_ms: u64) -> Option<u64> {
        self.scheduler.due_in(now_ms)
    }

    /// Run the pending repaint if one is due.
    ///
    /// Returns `true` when `fb` was repainted and should be presented.
    pub fn frame(&mut self, now_ms: u64, viewport: Viewport, fb: &mut FrameBuffer) -> bool {
        let Some(bounds) = self.mount else {
            return false;
        };
        let Some(request) = self.scheduler.poll(now_ms) else {
            return false;
        };

        fb.reset(viewport.width, viewport.height);
        let mut surface = TermSurface::new(fb, bounds);
        self.view.render_into(request.pointer, &mut surface);

        log::trace!(
            "repaint at {}ms pointer {:?} ({} superseded so far)",
            now_ms,
            request.pointer,
            self.scheduler.superseded()
        );
        true
    }
}
