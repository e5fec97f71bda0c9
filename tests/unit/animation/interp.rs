use super::*;

#[test]
fn lerp_hits_endpoints_and_extrapolates() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(-3.5, 7.25, 0.0), -3.5);
    assert_eq!(lerp(-3.5, 7.25, 1.0), 7.25);
    assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
}

#[test]
fn clamp_restricts_and_tolerates_inverted_bounds() {
    assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(4.0, 0.0, 10.0), 4.0);
    // Unspecified result, but it must not panic.
    let _ = clamp(5.0, 10.0, 0.0);
}

#[test]
fn map_range_remaps_and_rejects_zero_width() {
    assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 50.0);
    assert_eq!(map_range(0.0, -1.0, 1.0, 10.0, 20.0).unwrap(), 15.0);
    assert_eq!(map_range(20.0, 0.0, 10.0, 0.0, 1.0).unwrap(), 2.0);

    let err = map_range(1.0, 3.0, 3.0, 0.0, 1.0).unwrap_err();
    assert!(err.is_domain());
    assert!(remap(1.0, 3.0, 3.0, 0.0, 1.0).unwrap_err().is_domain());
    assert_eq!(remap(5.0, 0.0, 10.0, 100.0, 0.0).unwrap(), 50.0);
}

#[test]
fn smoothstep_edges_and_monotonicity() {
    assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    assert_eq!(smoothstep(0.0, 1.0, -2.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 3.0), 1.0);

    let mut prev = smoothstep(2.0, 6.0, 2.0);
    for i in 1..=100 {
        let x = 2.0 + 4.0 * f64::from(i) / 100.0;
        let v = smoothstep(2.0, 6.0, x);
        assert!(v >= prev, "not monotonic at x={x}");
        prev = v;
    }
}

#[test]
fn smoothstep_swapped_edges_reverse() {
    assert_eq!(smoothstep(1.0, 0.0, 0.0), 1.0);
    assert_eq!(smoothstep(1.0, 0.0, 1.0), 0.0);
    assert!(smoothstep(1.0, 0.0, 0.25) > smoothstep(1.0, 0.0, 0.75));
}

#[test]
fn smoothstep_degenerate_edges_step() {
    assert_eq!(smoothstep(2.0, 2.0, 1.0), 0.0);
    assert_eq!(smoothstep(2.0, 2.0, 2.0), 1.0);
    assert_eq!(smoothstep(2.0, 2.0, 3.0), 1.0);
}

#[test]
fn bezier_endpoints_and_midpoint() {
    for (p0, p1, p2, p3) in [(0.0, 0.0, 1.0, 1.0), (-2.0, 5.0, -7.0, 3.0), (1.0, 1.0, 1.0, 1.0)] {
        assert_eq!(bezier(0.0, p0, p1, p2, p3), p0);
        assert_eq!(bezier(1.0, p0, p1, p2, p3), p3);
    }
    // Symmetric control set passes through the middle.
    assert!((bezier(0.5, 0.0, 0.0, 1.0, 1.0) - 0.5).abs() < 1e-12);
    // Straight-line controls reduce to lerp, including extrapolation.
    assert!((bezier(2.0, 0.0, 1.0, 2.0, 3.0) - 6.0).abs() < 1e-9);
}

#[test]
fn bezier_derivative_matches_finite_difference() {
    let (p0, p1, p2, p3) = (0.0, 0.42, 0.58, 1.0);
    for t in [0.1, 0.35, 0.8] {
        let h = 1e-6;
        let fd = (bezier(t + h, p0, p1, p2, p3) - bezier(t - h, p0, p1, p2, p3)) / (2.0 * h);
        assert!((bezier_derivative(t, p0, p1, p2, p3) - fd).abs() < 1e-6);
    }
}

#[test]
fn bezier_point_is_per_axis() {
    let p0 = Point::new(0.0, 10.0);
    let p1 = Point::new(1.0, 20.0);
    let p2 = Point::new(2.0, 30.0);
    let p3 = Point::new(3.0, 40.0);
    assert_eq!(bezier_point(0.0, p0, p1, p2, p3), p0);
    assert_eq!(bezier_point(1.0, p0, p1, p2, p3), p3);
    let mid = bezier_point(0.5, p0, p1, p2, p3);
    assert!((mid.x - 1.5).abs() < 1e-12);
    assert!((mid.y - 25.0).abs() < 1e-12);
}

#[test]
fn normalize_has_zero_fallback_and_denormalize_inverts() {
    assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
    assert_eq!(normalize(5.0, 3.0, 3.0), 0.0);
    assert_eq!(normalize(15.0, 0.0, 10.0), 1.5);
    assert_eq!(denormalize(0.5, 0.0, 10.0), 5.0);
    assert_eq!(denormalize(0.25, 4.0, 4.0), 4.0);
    assert!((denormalize(normalize(7.3, -2.0, 9.0), -2.0, 9.0) - 7.3).abs() < 1e-12);
}
