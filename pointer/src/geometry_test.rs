#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Viewport ---

#[test]
fn viewport_default_is_degenerate() {
    assert!(Viewport::default().is_degenerate());
}

#[test]
fn viewport_zero_width_is_degenerate() {
    assert!(Viewport::new(0, 1080).is_degenerate());
    assert!(Viewport::new(1920, 0).is_degenerate());
}

#[test]
fn viewport_center_of_full_hd() {
    assert_eq!(Viewport::new(1920, 1080).center(), Some(Point::new(960.0, 540.0)));
}

#[test]
fn viewport_center_none_when_unmeasured() {
    assert_eq!(Viewport::default().center(), None);
}

#[test]
fn viewport_max_coordinates_are_size_minus_one() {
    let vp = Viewport::new(1920, 1080);
    assert_eq!(vp.max_x(), 1919.0);
    assert_eq!(vp.max_y(), 1079.0);
}

#[test]
fn viewport_max_coordinates_floor_at_zero() {
    let vp = Viewport::default();
    assert_eq!(vp.max_x(), 0.0);
    assert_eq!(vp.max_y(), 0.0);
}

#[test]
fn viewport_clamp_pulls_outside_points_in() {
    let vp = Viewport::new(100, 50);
    assert_eq!(vp.clamp(Point::new(-5.0, 70.0)), Point::new(0.0, 49.0));
    assert_eq!(vp.clamp(Point::new(250.0, -1.0)), Point::new(99.0, 0.0));
}

#[test]
fn viewport_clamp_keeps_inside_points() {
    let vp = Viewport::new(100, 50);
    assert_eq!(vp.clamp(Point::new(12.5, 33.0)), Point::new(12.5, 33.0));
}

#[test]
fn viewport_one_by_one_clamps_to_origin() {
    let vp = Viewport::new(1, 1);
    assert_eq!(vp.clamp(Point::new(40.0, -40.0)), Point::new(0.0, 0.0));
}

// --- ContentTransform ---

#[test]
fn transform_default_is_identity() {
    let t = ContentTransform::default();
    let p = Point::new(960.0, 540.0);
    assert!(point_approx_eq(t.container_to_content(p), p));
}

#[test]
fn transform_divides_by_dpr() {
    let t = ContentTransform::new(2.0);
    assert!(point_approx_eq(t.container_to_content(Point::new(960.0, 540.0)), Point::new(480.0, 270.0)));
}

#[test]
fn transform_fractional_dpr() {
    let t = ContentTransform::new(1.5);
    assert!(point_approx_eq(t.container_to_content(Point::new(300.0, 150.0)), Point::new(200.0, 100.0)));
}

#[test]
fn transform_rejects_zero_dpr() {
    assert_eq!(ContentTransform::new(0.0).dpr(), 1.0);
}

#[test]
fn transform_rejects_negative_dpr() {
    assert_eq!(ContentTransform::new(-2.0).dpr(), 1.0);
}

#[test]
fn transform_rejects_nan_and_infinity() {
    assert_eq!(ContentTransform::new(f64::NAN).dpr(), 1.0);
    assert_eq!(ContentTransform::new(f64::INFINITY).dpr(), 1.0);
}

#[test]
fn transform_handles_fractional_ratio() {
    let t = ContentTransform::new(2.625);
    assert!(point_approx_eq(t.container_to_content(Point::new(1260.0, 567.0)), Point::new(480.0, 216.0)));
}
