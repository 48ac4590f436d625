#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either container or content space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel size of the container hosting the content renderer.
///
/// A zero width or height means the container has not been measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self { width_px, height_px }
    }

    /// Whether either dimension is still unmeasured.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width_px == 0 || self.height_px == 0
    }

    /// Geometric center, or `None` while unmeasured.
    #[must_use]
    pub fn center(self) -> Option<Point> {
        if self.is_degenerate() {
            return None;
        }
        Some(Point::new(f64::from(self.width_px) / 2.0, f64::from(self.height_px) / 2.0))
    }

    /// Largest valid x coordinate (`width - 1`), floored at zero.
    #[must_use]
    pub fn max_x(self) -> f64 {
        f64::from(self.width_px.saturating_sub(1))
    }

    /// Largest valid y coordinate (`height - 1`), floored at zero.
    #[must_use]
    pub fn max_y(self) -> f64 {
        f64::from(self.height_px.saturating_sub(1))
    }

    /// Clamp a point into `[0, width-1] × [0, height-1]`.
    #[must_use]
    pub fn clamp(self, p: Point) -> Point {
        Point { x: p.x.clamp(0.0, self.max_x()), y: p.y.clamp(0.0, self.max_y()) }
    }
}

/// Container-pixel to content-pixel conversion.
///
/// The container measures physical pixels of the host surface while the
/// embedded document works in CSS pixels; the two differ by the content's
/// device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    dpr: f64,
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self { dpr: 1.0 }
    }
}

impl ContentTransform {
    /// Build a transform for the given device pixel ratio.
    ///
    /// Non-finite or non-positive ratios fall back to 1.0 so the bridge never
    /// receives NaN or infinite coordinates.
    #[must_use]
    pub fn new(dpr: f64) -> Self {
        if dpr.is_finite() && dpr > 0.0 { Self { dpr } } else { Self::default() }
    }

    #[must_use]
    pub fn dpr(self) -> f64 {
        self.dpr
    }

    /// Convert a container-space point to content (CSS) coordinates.
    #[must_use]
    pub fn container_to_content(self, container: Point) -> Point {
        Point { x: container.x / self.dpr, y: container.y / self.dpr }
    }
}
