use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};

use crate::error::Result;
use crate::frame::RenderedFrame;

/// Encode a rendered frame as JPEG bytes. Alpha is dropped.
pub fn encode_jpeg(frame: &RenderedFrame, quality: u8) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(frame.pixels.clone()).into_rgb8();
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(rgb)
        .write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))?;
    Ok(bytes)
}

/// Save a rendered frame as 8-bit RGBA PNG.
pub fn save_png(frame: &RenderedFrame, path: &Path) -> Result<()> {
    frame.pixels.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a rendered frame as JPEG.
pub fn save_jpeg(frame: &RenderedFrame, path: &Path, quality: u8) -> Result<()> {
    let bytes = encode_jpeg(frame, quality)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_frame(frame: &RenderedFrame, path: &Path, jpeg_quality: u8) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => save_jpeg(frame, path, jpeg_quality),
        _ => save_png(frame, path),
    }
}
