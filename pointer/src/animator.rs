//! Cursor glide: per-axis tweens from the rendered position to the logical one.
//!
//! The animator is presentation only. Hit-testing never reads it; the
//! authoritative position lives in [`crate::pointer::PointerState`]. Time is
//! supplied by the host's frame clock in milliseconds so tests can step it
//! deterministically.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use crate::consts::{ANIMATION_MS, CURSOR_BORDER_PX, CURSOR_COLOR_ARGB, CURSOR_RADIUS_PX};
use crate::geometry::Point;

/// The visual cursor position, lagging the logical pointer while gliding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderedCursor {
    pub x: f64,
    pub y: f64,
}

impl RenderedCursor {
    /// Top-left corner of a ring of `radius` centered on the cursor, floored at 0.
    #[must_use]
    pub fn overlay_origin(self, radius: f64) -> Point {
        Point::new((self.x - radius).max(0.0), (self.y - radius).max(0.0))
    }
}

/// How the host should draw the cursor ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorStyle {
    pub radius_px: f64,
    pub border_px: f64,
    pub color_argb: u32,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self { radius_px: CURSOR_RADIUS_PX, border_px: CURSOR_BORDER_PX, color_argb: CURSOR_COLOR_ARGB }
    }
}

/// Fast-out-slow-in: cubic Bézier with control points (0.4, 0) and (0.2, 1).
#[must_use]
pub fn fast_out_slow_in(t: f64) -> f64 {
    cubic_bezier(0.4, 0.0, 0.2, 1.0, t)
}

/// Evaluate a CSS-style cubic Bézier timing curve at progress `t`.
///
/// Solves `x(s) = t` for the curve parameter with Newton steps, falling
/// back to bisection when the slope is too flat, then returns `y(s)`.
#[must_use]
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let bez = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    let mut s = t;
    for _ in 0..8 {
        let err = bez(x1, x2, s) - t;
        if err.abs() < 1e-7 {
            return bez(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = t;
    for _ in 0..50 {
        let x = bez(x1, x2, s);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bez(y1, y2, s)
}

/// One axis of the glide.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisTween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl AxisTween {
    fn at_rest(value: f64) -> Self {
        Self { from: value, to: value, start_ms: 0.0, duration_ms: 0.0 }
    }

    fn value_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * fast_out_slow_in(t)
    }

    fn is_settled(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }

    /// Replace this tween with one starting from the value currently shown.
    fn retarget(&mut self, to: f64, now_ms: f64, duration_ms: f64) {
        let from = self.value_at(now_ms);
        *self = Self { from, to, start_ms: now_ms, duration_ms };
    }
}

/// Two independent axis tweens; retargeting replaces rather than queues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorAnimator {
    x: AxisTween,
    y: AxisTween,
    duration_ms: f64,
}

impl Default for CursorAnimator {
    fn default() -> Self {
        Self::new(ANIMATION_MS)
    }
}

impl CursorAnimator {
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self { x: AxisTween::at_rest(0.0), y: AxisTween::at_rest(0.0), duration_ms: duration_ms.max(0.0) }
    }

    /// Jump straight to `p` with no glide.
    pub fn snap(&mut self, p: Point) {
        self.x = AxisTween::at_rest(p.x);
        self.y = AxisTween::at_rest(p.y);
    }

    /// Start gliding toward `target`. Axes whose target is unchanged keep
    /// their current tween.
    #[allow(clippy::float_cmp)]
    pub fn retarget(&mut self, target: Point, now_ms: f64) {
        if target.x != self.x.to {
            self.x.retarget(target.x, now_ms, self.duration_ms);
        }
        if target.y != self.y.to {
            self.y.retarget(target.y, now_ms, self.duration_ms);
        }
    }

    /// Rendered cursor at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> RenderedCursor {
        RenderedCursor { x: self.x.value_at(now_ms), y: self.y.value_at(now_ms) }
    }

    /// Where the cursor is heading.
    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.x.to, self.y.to)
    }

    /// Whether either axis is still moving at `now_ms`.
    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        !(self.x.is_settled(now_ms) && self.y.is_settled(now_ms))
    }
}
