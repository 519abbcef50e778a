use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::config::ResampleFilter;
use crate::error::{Result, ViewerError};
use crate::frame::RenderRequest;
use crate::geometry::Rotation;

use super::cache::SingleEntryCache;

/// Source of image sizes and decoded regions.
pub trait ImageDecoder {
    /// Pixel dimensions of the image at `path`, without decoding pixel data
    /// where the format allows it.
    fn dimensions(&mut self, path: &Path) -> Result<(u32, u32)>;

    /// Decode the request's crop, scaled to its output size, with its rotation applied.
    fn decode(&mut self, request: &RenderRequest) -> Result<RgbaImage>;
}

/// Decodes files with the `image` crate.
///
/// The last fully decoded image is kept, so repeated pans and zooms on the
/// same file only crop and rescale. Opening another file evicts it.
pub struct FsDecoder {
    filter: FilterType,
    source: SingleEntryCache<PathBuf, DynamicImage>,
}

impl FsDecoder {
    pub fn new(filter: ResampleFilter) -> Self {
        Self {
            filter: filter.into(),
            source: SingleEntryCache::new(),
        }
    }

    /// True if `path` is decoded and held in memory.
    pub fn is_cached(&self, path: &Path) -> bool {
        self.source.contains(&path.to_path_buf())
    }
}

impl Default for FsDecoder {
    fn default() -> Self {
        Self::new(ResampleFilter::default())
    }
}

impl ImageDecoder for FsDecoder {
    fn dimensions(&mut self, path: &Path) -> Result<(u32, u32)> {
        if let Some(image) = self.source.get(&path.to_path_buf()) {
            return Ok((image.width(), image.height()));
        }
        image::image_dimensions(path).map_err(|source| ViewerError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn decode(&mut self, request: &RenderRequest) -> Result<RgbaImage> {
        let filter = self.filter;
        let source = self
            .source
            .get_or_try_insert_with(request.path.clone(), |path| {
                debug!(path = %path.display(), "Decoding full image");
                image::open(path).map_err(|source| ViewerError::Decode {
                    path: path.clone(),
                    source,
                })
            })?;
        Ok(render_region(source, request, filter))
    }
}

/// Crop, scale and rotate `source` as described by `request`.
pub fn render_region(source: &DynamicImage, request: &RenderRequest, filter: FilterType) -> RgbaImage {
    let crop = request.crop;
    let region = source.crop_imm(crop.x, crop.y, crop.width, crop.height);

    let scaled = if region.width() == request.output_width
        && region.height() == request.output_height
    {
        region
    } else {
        region.resize_exact(request.output_width, request.output_height, filter)
    };

    let rotated = match request.rotation {
        Rotation::Rotate0 => scaled,
        Rotation::Rotate90 => scaled.rotate90(),
        Rotation::Rotate180 => scaled.rotate180(),
        Rotation::Rotate270 => scaled.rotate270(),
    };

    rotated.into_rgba8()
}
