use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_EXTENSIONS, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM,
    DEFAULT_PAN_THRESHOLD, DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_ZOOM_STEP,
};
use crate::error::{Result, ViewerError};

/// Viewer settings. Every section falls back to its defaults when absent,
/// so a config file only needs the keys it changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub zoom: ZoomConfig,
    pub browse: BrowseConfig,
    pub pan: PanConfig,
    pub render: RenderConfig,
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        let zoom = &self.zoom;
        if !zoom.min.is_finite() || !zoom.max.is_finite() {
            return Err(ViewerError::InvalidConfig("zoom limits must be finite".into()));
        }
        // Selecting an image resets to zoom 1, so it must stay reachable.
        if zoom.min != 1.0 {
            return Err(ViewerError::InvalidConfig(format!(
                "min zoom must be 1, got {}",
                zoom.min
            )));
        }
        if zoom.min > zoom.max {
            return Err(ViewerError::InvalidConfig(format!(
                "min zoom {} exceeds max zoom {}",
                zoom.min, zoom.max
            )));
        }
        if !(zoom.step > 0.0) {
            return Err(ViewerError::InvalidConfig("zoom step must be positive".into()));
        }
        if self.browse.extensions.is_empty() {
            return Err(ViewerError::InvalidConfig("no image extensions configured".into()));
        }
        if !(self.pan.threshold >= 0.0) {
            return Err(ViewerError::InvalidConfig(
                "pan threshold must be zero or positive".into(),
            ));
        }
        if !(1..=100).contains(&self.render.jpeg_quality) {
            return Err(ViewerError::InvalidConfig(format!(
                "JPEG quality {} is outside 1..=100",
                self.render.jpeg_quality
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
    /// Increment applied by wheel notches and zoom keys.
    pub step: f64,
}

impl ZoomConfig {
    /// True if `value` is an acceptable zoom factor. Values outside are rejected, not clamped.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
            step: DEFAULT_ZOOM_STEP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Eligible file extensions, compared case-insensitively. A leading dot is optional.
    pub extensions: Vec<String>,
}

impl BrowseConfig {
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    /// Extensions without leading dots, for file dialog filters.
    pub fn dialog_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect()
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanConfig {
    /// Pan deltas shorter than this are ignored.
    pub threshold: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PAN_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub resample: ResampleFilter,
    pub jpeg_quality: u8,
    pub resize_debounce_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resample: ResampleFilter::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

/// Resampling filter used when scaling the crop to the output size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Triangle"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Gaussian => write!(f, "Gaussian"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
