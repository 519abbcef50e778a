use std::path::PathBuf;

use image::RgbaImage;

use crate::geometry::{CropRect, Rotation};

/// Everything the decoder needs to produce one displayable frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    /// Position of the image in its folder listing.
    pub index: usize,
    pub path: PathBuf,
    /// Region of the source image, in unrotated pixel coordinates.
    pub crop: CropRect,
    /// Size the crop is scaled to before rotation.
    pub output_width: u32,
    pub output_height: u32,
    /// Applied after scaling.
    pub rotation: Rotation,
}

impl RenderRequest {
    /// Dimensions of the presented buffer, after rotation.
    pub fn presented_size(&self) -> (u32, u32) {
        if self.rotation.is_quarter_turn() {
            (self.output_height, self.output_width)
        } else {
            (self.output_width, self.output_height)
        }
    }
}

/// A decoded, cropped, scaled and rotated RGBA buffer ready to present.
#[derive(Clone, Debug)]
pub struct RenderedFrame {
    pub request: RenderRequest,
    pub pixels: RgbaImage,
}

impl RenderedFrame {
    pub fn new(request: RenderRequest, pixels: RgbaImage) -> Self {
        Self { request, pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
