//! Scalar interpolation, range mapping and cubic Bézier evaluation.
//!
//! Every function here is pure. Interpolating functions do not clamp their parameter, so
//! `t` outside `[0, 1]` extrapolates.

use crate::foundation::core::Point;
use crate::foundation::error::{FluxError, FluxResult};

/// Linear interpolation `start + (end - start) * t`.
#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Restrict `value` to `[min, max]`.
///
/// Requires `min <= max`. When `min > max` the result is unspecified; this implementation
/// returns `min` and never panics, but callers must not rely on it.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    // `f64::clamp` asserts `min <= max`, which would turn a caller error into a panic.
    value.min(max).max(min)
}

/// Affine remap of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// # Errors
///
/// Returns [`FluxError::Domain`] when `in_min == in_max`. Unlike [`normalize`] there is no
/// fallback value.
pub fn map_range(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> FluxResult<f64> {
    let width = in_max - in_min;
    if width == 0.0 {
        return Err(FluxError::domain(format!(
            "map_range input range has zero width ({in_min} == {in_max})"
        )));
    }
    Ok((value - in_min) * (out_max - out_min) / width + out_min)
}

/// Alias of [`map_range`] with the same contract.
#[inline]
pub fn remap(
    value: f64,
    old_min: f64,
    old_max: f64,
    new_min: f64,
    new_max: f64,
) -> FluxResult<f64> {
    map_range(value, old_min, old_max, new_min, new_max)
}

/// Hermite smoothstep `3t² - 2t³` with `t = clamp((x - edge0) / (edge1 - edge0), 0, 1)`.
///
/// Swapping the edges reverses the direction of the ramp. When `edge0 == edge1` the ramp
/// collapses into a hard step: `0.0` below the edge, `1.0` at or above it.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let width = edge1 - edge0;
    if width == 0.0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp((x - edge0) / width, 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Cubic Bernstein-basis Bézier at `t`.
pub fn bezier(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    uu * u * p0 + 3.0 * uu * t * p1 + 3.0 * u * tt * p2 + tt * t * p3
}

/// First derivative of [`bezier`] with respect to `t`.
pub fn bezier_derivative(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// [`bezier`] evaluated independently on each axis.
pub fn bezier_point(t: f64, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    Point::new(
        bezier(t, p0.x, p1.x, p2.x, p3.x),
        bezier(t, p0.y, p1.y, p2.y, p3.y),
    )
}

/// Position of `value` within `[min, max]` as a fraction.
///
/// Returns exactly `0.0` for a zero-width range.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Inverse of [`normalize`]: `min + value * (max - min)`.
#[inline]
pub fn denormalize(value: f64, min: f64, max: f64) -> f64 {
    min + value * (max - min)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
