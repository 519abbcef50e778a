#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use photoview_core::config::ViewerConfig;
use photoview_core::error::{Result, ViewerError};
use photoview_core::frame::RenderRequest;
use photoview_core::geometry::Size;
use photoview_core::io::decode::ImageDecoder;
use photoview_core::io::folder::FolderListing;
use photoview_core::viewer::{OffscreenSurface, Viewer};

/// In-memory decoder: knows a size per path and records every decode.
#[derive(Default)]
pub struct FakeDecoder {
    pub sizes: HashMap<PathBuf, (u32, u32)>,
    /// Paths whose reads fail.
    pub failing: HashSet<PathBuf>,
    pub decoded: Vec<RenderRequest>,
    pub dimension_reads: usize,
}

impl FakeDecoder {
    pub fn with_images(images: &[(&str, u32, u32)]) -> Self {
        let sizes = images
            .iter()
            .map(|&(name, w, h)| (PathBuf::from(name), (w, h)))
            .collect();
        Self {
            sizes,
            ..Default::default()
        }
    }

    fn failure(path: &Path) -> ViewerError {
        ViewerError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "corrupt image",
            )),
        }
    }
}

impl ImageDecoder for FakeDecoder {
    fn dimensions(&mut self, path: &Path) -> Result<(u32, u32)> {
        self.dimension_reads += 1;
        if self.failing.contains(path) {
            return Err(Self::failure(path));
        }
        self.sizes
            .get(path)
            .copied()
            .ok_or_else(|| Self::failure(path))
    }

    fn decode(&mut self, request: &RenderRequest) -> Result<RgbaImage> {
        if self.failing.contains(&request.path) {
            return Err(Self::failure(&request.path));
        }
        self.decoded.push(request.clone());
        let (w, h) = request.presented_size();
        Ok(RgbaImage::new(w, h))
    }
}

pub type FakeViewer = Viewer<OffscreenSurface, FakeDecoder>;

/// Viewer over fake images with the given surface size, nothing selected yet.
pub fn fake_viewer(images: &[(&str, u32, u32)], surface: Size) -> FakeViewer {
    Viewer::new(
        ViewerConfig::default(),
        OffscreenSurface::new(surface),
        FakeDecoder::with_images(images),
    )
    .expect("default config is valid")
}

/// Listing over the fake images, opened at `index`.
pub fn fake_listing(images: &[(&str, u32, u32)], index: usize) -> FolderListing {
    let paths = images.iter().map(|(name, _, _)| PathBuf::from(name)).collect();
    FolderListing::from_paths(paths, index).expect("index within listing")
}

/// Write a `width` x `height` gradient PNG (or JPEG, by extension) into `dir`.
pub fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 128, 255])
    });
    let path = dir.join(name);
    image::DynamicImage::ImageRgba8(img)
        .into_rgb8()
        .save(&path)
        .expect("write test image");
    path
}
