use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).unwrap_err().is_domain());
    assert!(Fps::new(30, 0).unwrap_err().is_domain());
}

#[test]
fn fps_ntsc_rate() {
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97002997).abs() < 1e-6);
    assert!((fps.frame_duration_secs() * fps.as_f64() - 1.0).abs() < 1e-12);
    assert_eq!(fps.to_string(), "30000/1001");
    assert_eq!(Fps::integer(60).unwrap().to_string(), "60");
}

#[test]
fn fps_serde_accepts_integer_and_rational() {
    let fps: Fps = serde_json::from_value(serde_json::json!(24)).unwrap();
    assert_eq!(fps, Fps::integer(24).unwrap());

    let fps: Fps =
        serde_json::from_value(serde_json::json!({ "num": 30000, "den": 1001 })).unwrap();
    assert_eq!(fps, Fps::new(30000, 1001).unwrap());

    assert!(serde_json::from_value::<Fps>(serde_json::json!(0)).is_err());
    assert_eq!(
        serde_json::to_value(Fps::integer(60).unwrap()).unwrap(),
        serde_json::json!(60)
    );
}
