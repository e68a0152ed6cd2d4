//! Per-frame repaint coalescing.
//!
//! Pointer updates can arrive much faster than the display refreshes. Each update
//! replaces the pending request (last write wins) and at most one repaint is
//! released per frame interval.

use crate::types::PointerPosition;

/// A repaint waiting for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepaintRequest {
    pub pointer: Option<PointerPosition>,
}

#[derive(Debug, Clone)]
pub struct RepaintScheduler {
    frame_interval_ms: u64,
    last_frame_ms: Option<u64>,
    pending: Option<RepaintRequest>,
    superseded: u64,
}

impl RepaintScheduler {
    pub fn new(frame_interval_ms: u64) -> Self {
        Self {
            frame_interval_ms: frame_interval_ms.max(1),
            last_frame_ms: None,
            pending: None,
            superseded: 0,
        }
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// Schedule a repaint, replacing any request not yet released.
    pub fn request(&mut self, pointer: Option<PointerPosition>) {
        if self.pending.replace(RepaintRequest { pointer }).is_some() {
            self.superseded += 1;
        }
    }

    /// Drop any pending request and forget frame timing.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_frame_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Requests that were replaced before they ran.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Milliseconds until the pending request may run; `None` when idle.
    pub fn due_in(&self, now_ms: u64) -> Option<u64> {
        self.pending?;
        let Some(last) = self.last_frame_ms else {
            return Some(0);
        };
        let next = last.saturating_add(self.frame_interval_ms);
        Some(next.saturating_sub(now_ms))
    }

    /// Release the pending repaint if a frame boundary has been reached.
    pub fn poll(&mut self, now_ms: u64) -> Option<RepaintRequest> {
        if self.due_in(now_ms)? > 0 {
            return None;
        }
        self.last_frame_ms = Some(now_ms);
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_scheduler_has_nothing_due() {
        let mut s = RepaintScheduler::new(16);
        assert_eq!(s.due_in(0), None);
        assert_eq!(s.poll(100), None);
    }

    #[test]
    fn zero_interval_is_clamped() {
        assert_eq!(RepaintScheduler::new(0).frame_interval_ms(), 1);
    }

    #[test]
    fn reset_drops_pending() {
        let mut s = RepaintScheduler::new(16);
        s.request(None);
        s.reset();
        assert!(!s.is_pending());
        assert_eq!(s.poll(0), None);
    }

    #[test]
    fn due_in_counts_down_to_next_frame() {
        let mut s = RepaintScheduler::new(16);
        s.request(None);
        assert!(s.poll(100).is_some());
        s.request(Some(PointerPosition::new(1, 1)));
        assert_eq!(s.due_in(104), Some(12));
        assert_eq!(s.due_in(116), Some(0));
        assert_eq!(s.due_in(130), Some(0));
    }
}
