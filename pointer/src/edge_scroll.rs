//! Auto-scroll when the pointer pushes into an edge margin.

#[cfg(test)]
#[path = "edge_scroll_test.rs"]
mod edge_scroll_test;

use crate::consts::{SCROLL_STEP_X_PX, SCROLL_STEP_Y_PX};
use crate::pointer::MoveOutcome;

/// A `window.scrollBy` request in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub dx: f64,
    pub dy: f64,
}

/// Fixed scroll increments per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeScroll {
    pub step_x_px: f64,
    pub step_y_px: f64,
}

impl Default for EdgeScroll {
    fn default() -> Self {
        Self { step_x_px: SCROLL_STEP_X_PX, step_y_px: SCROLL_STEP_Y_PX }
    }
}

impl EdgeScroll {
    /// Scroll requests for one move: one per axis that crossed into its margin,
    /// pointing the way the pointer was travelling.
    #[must_use]
    pub fn requests(&self, outcome: &MoveOutcome, dx: f64, dy: f64) -> Vec<ScrollRequest> {
        let mut out = Vec::new();
        if outcome.edge_x && dx != 0.0 {
            out.push(ScrollRequest { dx: self.step_x_px.copysign(dx), dy: 0.0 });
        }
        if outcome.edge_y && dy != 0.0 {
            out.push(ScrollRequest { dx: 0.0, dy: self.step_y_px.copysign(dy) });
        }
        out
    }
}
