use super::*;

use serde_json::json;

#[test]
fn presets_resolve_sizes() {
    assert_eq!(Resolution::parse("4K").unwrap().size(), (3840, 2160));
    assert_eq!(Resolution::parse("1080p").unwrap().size(), (1920, 1080));
    assert_eq!(Resolution::parse("720p").unwrap().size(), (1280, 720));
    for vertical in ["9:16", "tiktok", "Reels"] {
        assert_eq!(Resolution::parse(vertical).unwrap(), Resolution::Vertical);
    }
    assert!((Resolution::FullHd.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
}

#[test]
fn custom_sizes() {
    assert_eq!(
        Resolution::parse("1280x720").unwrap(),
        Resolution::Custom {
            width: 1280,
            height: 720
        }
    );
    assert_eq!(Resolution::parse("640X480").unwrap().size(), (640, 480));
    for bad in ["", "huge", "0x100", "100x", "x100", "12.5x10", "-5x5"] {
        assert!(Resolution::parse(bad).unwrap_err().is_format(), "{bad:?}");
    }
}

#[test]
fn display_round_trips() {
    for r in [
        Resolution::FourK,
        Resolution::FullHd,
        Resolution::Hd,
        Resolution::Vertical,
        Resolution::Custom {
            width: 800,
            height: 600,
        },
    ] {
        assert_eq!(Resolution::parse(&r.to_string()).unwrap(), r);
    }
}

#[test]
fn setup_builds_explicit_config() {
    let cfg = ProjectConfig::setup("1080p", 60).unwrap();
    assert_eq!(cfg.fps, Fps::integer(60).unwrap());
    assert_eq!((cfg.width(), cfg.height()), (1920, 1080));
    assert_eq!(cfg.output_format, OutputFormat::Mp4);

    assert!(ProjectConfig::setup("1080p", 0).unwrap_err().is_domain());
    assert!(ProjectConfig::setup("nope", 30).unwrap_err().is_format());
}

#[test]
fn json_round_trip_and_defaults() {
    let cfg = ProjectConfig::from_json_str(
        &json!({ "resolution": "9:16", "fps": { "num": 30000, "den": 1001 } }).to_string(),
    )
    .unwrap();
    assert_eq!(cfg.resolution, Resolution::Vertical);
    assert_eq!(cfg.output_format, OutputFormat::Mp4);

    let cfg = cfg.with_output_format(OutputFormat::PngSequence);
    let v: serde_json::Value = serde_json::from_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(
        v,
        json!({
            "resolution": "9:16",
            "fps": { "num": 30000, "den": 1001 },
            "output_format": "png_sequence"
        })
    );
}

#[test]
fn json_errors_are_serde_errors() {
    let err = ProjectConfig::from_json_str(r#"{ "resolution": "1080p", "fps": 0 }"#).unwrap_err();
    assert!(matches!(err, FluxError::Serde(_)));
    let err = ProjectConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, FluxError::Serde(_)));
}

#[test]
fn from_path_reports_missing_file() {
    let err = ProjectConfig::from_path("target/definitely/missing/project.json").unwrap_err();
    assert!(matches!(err, FluxError::Other(_)));
    assert!(format!("{err:#}").contains("open project config"));
}

#[test]
fn output_format_names() {
    assert_eq!("GIF".parse::<OutputFormat>().unwrap(), OutputFormat::Gif);
    assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::PngSequence);
    assert!("avi".parse::<OutputFormat>().unwrap_err().is_format());
}
