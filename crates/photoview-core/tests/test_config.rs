use std::path::Path;

use image::imageops::FilterType;

use photoview_core::config::{BrowseConfig, ResampleFilter, ViewerConfig};
use photoview_core::error::ViewerError;

// ---------------------------------------------------------------------------
// Defaults and validation
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    let config = ViewerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.zoom.min, 1.0);
    assert_eq!(config.zoom.max, 10.0);
    assert_eq!(config.browse.extensions, ["png", "jpg"]);
    assert_eq!(config.pan.threshold, 0.0);
    assert_eq!(config.render.resample, ResampleFilter::Triangle);
}

fn invalid(mutate: impl FnOnce(&mut ViewerConfig)) -> bool {
    let mut config = ViewerConfig::default();
    mutate(&mut config);
    matches!(config.validate(), Err(ViewerError::InvalidConfig(_)))
}

#[test]
fn test_validate_rejects_bad_zoom_limits() {
    assert!(invalid(|c| c.zoom.min = 0.5));
    assert!(invalid(|c| c.zoom.max = 0.9));
    assert!(invalid(|c| c.zoom.max = f64::INFINITY));
    assert!(invalid(|c| c.zoom.step = 0.0));
}

#[test]
fn test_validate_rejects_empty_extensions() {
    assert!(invalid(|c| c.browse.extensions.clear()));
}

#[test]
fn test_validate_rejects_negative_pan_threshold() {
    assert!(invalid(|c| c.pan.threshold = -1.0));
}

#[test]
fn test_validate_rejects_jpeg_quality_zero() {
    assert!(invalid(|c| c.render.jpeg_quality = 0));
    assert!(invalid(|c| c.render.jpeg_quality = 101));
}

#[test]
fn test_validate_requires_min_zoom_of_one() {
    assert!(invalid(|c| {
        c.zoom.min = 2.0;
        c.zoom.max = 2.0;
    }));
    assert!(invalid(|c| c.zoom.min = 1.5));
}

#[test]
fn test_validate_accepts_zoom_disabled() {
    let mut config = ViewerConfig::default();
    config.zoom.max = 1.0;
    assert!(config.validate().is_ok());
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn test_partial_config_fills_defaults() {
    let json = r#"{ "zoom": { "max": 4.0 }, "render": { "resample": "Lanczos3" } }"#;
    let config: ViewerConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.zoom.max, 4.0);
    assert_eq!(config.zoom.min, 1.0);
    assert_eq!(config.render.resample, ResampleFilter::Lanczos3);
    assert_eq!(config.render.jpeg_quality, 90);
    assert_eq!(config.browse, BrowseConfig::default());
}

#[test]
fn test_empty_config_is_default() {
    let config: ViewerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_unknown_filter_rejected() {
    let json = r#"{ "render": { "resample": "Bicubic" } }"#;
    assert!(serde_json::from_str::<ViewerConfig>(json).is_err());
}

// ---------------------------------------------------------------------------
// BrowseConfig
// ---------------------------------------------------------------------------

#[test]
fn test_browse_matches_case_insensitively() {
    let browse = BrowseConfig::default();
    assert!(browse.matches(Path::new("photo.png")));
    assert!(browse.matches(Path::new("dir/PHOTO.JPG")));
    assert!(browse.matches(Path::new("x.Jpg")));
    assert!(!browse.matches(Path::new("photo.jpeg")));
    assert!(!browse.matches(Path::new("photo")));
    assert!(!browse.matches(Path::new("png")));
}

#[test]
fn test_browse_leading_dot_optional() {
    let browse = BrowseConfig {
        extensions: vec![".png".into(), "TIF".into()],
    };
    assert!(browse.matches(Path::new("a.PNG")));
    assert!(browse.matches(Path::new("a.tif")));
    assert_eq!(browse.dialog_extensions(), ["png", "TIF"]);
}

// ---------------------------------------------------------------------------
// ResampleFilter
// ---------------------------------------------------------------------------

#[test]
fn test_resample_filter_display() {
    assert_eq!(format!("{}", ResampleFilter::Nearest), "Nearest");
    assert_eq!(format!("{}", ResampleFilter::CatmullRom), "Catmull-Rom");
    assert_eq!(format!("{}", ResampleFilter::default()), "Triangle");
}

#[test]
fn test_resample_filter_into_filter_type() {
    assert_eq!(FilterType::from(ResampleFilter::Lanczos3), FilterType::Lanczos3);
    assert_eq!(FilterType::from(ResampleFilter::Nearest), FilterType::Nearest);
}
