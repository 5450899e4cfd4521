//! Scroll offset tracking for the navbar's shadow treatment.
//!
//! Scroll events can fire many times per frame. `FrameGate` keeps only the
//! latest offset and asks for a single animation frame; the frame callback
//! then drains it.

use crate::config::SCROLL_SHADOW_THRESHOLD_PX;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_SHADOW_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: Option<f64>,
}

impl FrameGate {
    /// Record an offset. Returns `true` when the caller must request a frame.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        self.pending.replace(offset_y).is_none()
    }

    /// Drain the latest offset at frame time.
    pub fn on_frame(&mut self) -> Option<bool> {
        self.pending.take().map(is_scrolled)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
