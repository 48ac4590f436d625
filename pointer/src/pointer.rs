//! Authoritative logical pointer position.
//!
//! DESIGN
//! ======
//! `PointerState` is the only position used for hit-testing and edge
//! detection. Every write is clamped to the current viewport. Edge detection
//! looks at the *pre-clamp* target so that pushing against a wall still
//! reports "near the edge" even though the position itself cannot move.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::consts::EDGE_MARGIN_PX;
use crate::geometry::{Point, Viewport};

/// Result of applying one move delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Clamped position after the move.
    pub position: Point,
    /// Pre-clamp x entered the left/right margin in the direction of motion.
    pub edge_x: bool,
    /// Pre-clamp y entered the top/bottom margin in the direction of motion.
    pub edge_y: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Point,
    centered: bool,
    edge_margin_px: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(EDGE_MARGIN_PX)
    }
}

impl PointerState {
    #[must_use]
    pub fn new(edge_margin_px: f64) -> Self {
        Self { position: Point::default(), centered: false, edge_margin_px }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the first recenter has happened.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Place the pointer at the viewport center, once.
    ///
    /// Returns `true` only on the call that actually moved the pointer: the
    /// first one that sees a measured viewport. Later calls never move it.
    pub fn recenter(&mut self, viewport: Viewport) -> bool {
        if self.centered {
            return false;
        }
        let Some(center) = viewport.center() else {
            return false;
        };
        self.position = viewport.clamp(center);
        self.centered = true;
        true
    }

    /// Re-clamp into a (possibly smaller) viewport without recentering.
    ///
    /// Returns `true` if the position changed.
    pub fn fit(&mut self, viewport: Viewport) -> bool {
        if viewport.is_degenerate() || !self.centered {
            return false;
        }
        let clamped = viewport.clamp(self.position);
        let changed = clamped != self.position;
        self.position = clamped;
        changed
    }

    /// Add a delta, clamp, and report edge-margin crossings.
    ///
    /// An unmeasured viewport leaves the pointer where it is and reports no
    /// edges.
    pub fn apply_move(&mut self, dx: f64, dy: f64, viewport: Viewport) -> MoveOutcome {
        if viewport.is_degenerate() {
            return MoveOutcome { position: self.position, edge_x: false, edge_y: false };
        }
        let raw = Point::new(self.position.x + dx, self.position.y + dy);
        let edge_x = crosses_margin(raw.x, dx, f64::from(viewport.width_px), self.edge_margin_px);
        let edge_y = crosses_margin(raw.y, dy, f64::from(viewport.height_px), self.edge_margin_px);
        self.position = viewport.clamp(raw);
        MoveOutcome { position: self.position, edge_x, edge_y }
    }
}

fn crosses_margin(raw: f64, delta: f64, extent: f64, margin: f64) -> bool {
    if delta > 0.0 {
        raw > extent - margin
    } else if delta < 0.0 {
        raw < margin
    } else {
        false
    }
}
