//! Point-to-point measurements and rotation.
//!
//! Angles are radians unless a function name says otherwise. Rotation follows the
//! mathematical convention: a positive angle turns counter-clockwise in a y-up frame. In
//! y-down screen space that reads as clockwise, so screen-space callers negate the angle at
//! the call site.

use std::f64::consts::PI;

use crate::foundation::core::{Affine, Point};

/// Euclidean distance between `p1` and `p2`.
pub fn point_distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Angle of the vector from `p1` to `p2`, in radians within `(-π, π]`.
pub fn point_angle(p1: Point, p2: Point) -> f64 {
    (p2 - p1).atan2()
}

/// Rotate `point` about `pivot` by `angle` radians, counter-clockwise for positive angles.
pub fn rotate_point(point: Point, angle: f64, pivot: Point) -> Point {
    if angle == 0.0 {
        return point;
    }
    Affine::rotate_about(angle, pivot) * point
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_angle_deg(degrees: f64) -> f64 {
    let a = degrees.rem_euclid(360.0);
    if a >= 360.0 { 0.0 } else { a }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/point.rs"]
mod tests;
