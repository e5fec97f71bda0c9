use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn primaries_and_secondaries() {
    assert_eq!(rgb_to_hsl(Rgb8::new(255, 0, 0)), Hsl::new(0.0, 1.0, 0.5));

    let g = rgb_to_hsl(Rgb8::new(0, 255, 0));
    assert!(close(g.h, 120.0) && close(g.s, 1.0) && close(g.l, 0.5));

    let b = rgb_to_hsl(Rgb8::new(0, 0, 255));
    assert!(close(b.h, 240.0));

    // Red-max branch with g < b lands near 360, not negative.
    let m = rgb_to_hsl(Rgb8::new(255, 0, 128));
    assert!(m.h > 300.0 && m.h < 360.0, "{m:?}");
}

#[test]
fn achromatic_has_zero_hue_and_saturation() {
    for v in [0u8, 1, 128, 254, 255] {
        let hsl = rgb_to_hsl(Rgb8::new(v, v, v));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(close(hsl.l, f64::from(v) / 255.0));
    }
}

#[test]
fn hsl_to_rgb_sectors() {
    assert_eq!(hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5)), Rgb8::new(255, 0, 0));
    assert_eq!(hsl_to_rgb(Hsl::new(60.0, 1.0, 0.5)), Rgb8::new(255, 255, 0));
    assert_eq!(hsl_to_rgb(Hsl::new(120.0, 1.0, 0.5)), Rgb8::new(0, 255, 0));
    assert_eq!(hsl_to_rgb(Hsl::new(180.0, 1.0, 0.5)), Rgb8::new(0, 255, 255));
    assert_eq!(hsl_to_rgb(Hsl::new(240.0, 1.0, 0.5)), Rgb8::new(0, 0, 255));
    assert_eq!(hsl_to_rgb(Hsl::new(300.0, 1.0, 0.5)), Rgb8::new(255, 0, 255));
    assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 1.0)), Rgb8::WHITE);
    assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 0.0)), Rgb8::BLACK);
}

#[test]
fn hsl_to_rgb_rounds_instead_of_truncating() {
    // l = 0.5, s = 0 gives 127.5 per channel.
    assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 0.5)), Rgb8::new(128, 128, 128));
}

#[test]
fn hue_outside_range_wraps() {
    assert_eq!(
        hsl_to_rgb(Hsl::new(480.0, 1.0, 0.5)),
        hsl_to_rgb(Hsl::new(120.0, 1.0, 0.5))
    );
    assert_eq!(
        hsl_to_rgb(Hsl::new(-120.0, 1.0, 0.5)),
        hsl_to_rgb(Hsl::new(240.0, 1.0, 0.5))
    );
    assert!(close(Hsl::new(350.0, 1.0, 0.5).rotate_hue(20.0).h, 10.0));
}

#[test]
fn round_trip_within_one_step() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(5) {
                let c = Rgb8::new(r, g, b);
                let back = hsl_to_rgb(rgb_to_hsl(c));
                let close = back.r.abs_diff(c.r) <= 1
                    && back.g.abs_diff(c.g) <= 1
                    && back.b.abs_diff(c.b) <= 1;
                assert!(close, "{c:?} -> {back:?}");
                let h = rgb_to_hsl(c).h;
                assert!((0.0..360.0).contains(&h));
            }
        }
    }
}
