pub mod config;
pub mod export;
pub mod info;
pub mod render;
pub mod replay;

use std::path::Path;

use anyhow::{bail, Context, Result};
use photoview_core::config::ViewerConfig;
use photoview_core::geometry::{Size, Vector};
use photoview_core::io::decode::FsDecoder;
use photoview_core::viewer::{OffscreenSurface, Viewer};

pub type CliViewer = Viewer<OffscreenSurface, FsDecoder>;

/// Read and validate a TOML config, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ViewerConfig = toml::from_str(&contents)
        .with_context(|| format!("Invalid viewer config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Headless viewer drawing into a surface of `size`.
pub fn build_viewer(config: &ViewerConfig, size: Size) -> Result<CliViewer> {
    let decoder = FsDecoder::new(config.render.resample);
    let viewer = Viewer::new(config.clone(), OffscreenSurface::new(size), decoder)?;
    Ok(viewer)
}

/// Parse `WIDTHxHEIGHT`, e.g. `1920x1080`.
pub fn parse_size(s: &str) -> std::result::Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: u32 = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let height: u32 = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    if width == 0 || height == 0 {
        return Err(format!("surface size must be non-zero, got {width}x{height}"));
    }
    Ok(Size::from_pixels(width, height))
}

/// Parse `X,Y` into a pan delta.
pub fn parse_pan(s: &str) -> std::result::Result<Vector, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid x offset '{x}'"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid y offset '{y}'"))?;
    Ok(Vector::new(x, y))
}

/// Write the frame currently on the surface.
pub fn save_current(viewer: &CliViewer, output: &Path) -> Result<()> {
    let Some(frame) = viewer.surface().frame() else {
        bail!("Nothing was rendered; the surface or image is empty");
    };
    photoview_core::io::export::save_frame(frame, output, viewer.config().render.jpeg_quality)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
