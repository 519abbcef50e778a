use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::frame::{RenderRequest, RenderedFrame};
use crate::geometry::{
    compute_crop, frame_scale, is_unzoomed, next_index_cyclic, output_size, rotate_offset,
    Size, Vector,
};
use crate::io::decode::ImageDecoder;
use crate::io::folder::FolderListing;

use super::command::Command;
use super::redraw::RedrawGate;
use super::state::ViewportState;
use super::surface::RenderSurface;

/// What a recompute did.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutcome {
    /// A new frame was decoded and presented.
    Presented(RenderRequest),
    /// The geometry matched the frame already on the surface.
    Unchanged,
    /// Image, surface or crop had an empty side; the previous frame stays up.
    NotRenderable,
    /// No image is selected.
    NoImage,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ZoomOutcome {
    Applied(RenderOutcome),
    /// The requested factor was outside the configured limits; nothing changed.
    Rejected,
}

/// Viewport state machine.
///
/// Owns the session's [`ViewportState`] and drives the geometry functions,
/// the decoder and the surface. Operations that leave the state unchanged
/// return `Ok(None)` and do not recompute; the others recompute immediately
/// and return the outcome. Decoder failures are returned as errors and leave
/// the state as it was after the operation, so the next recompute retries.
pub struct Viewer<S, D> {
    config: ViewerConfig,
    surface: S,
    decoder: D,
    listing: Option<FolderListing>,
    state: ViewportState,
    image_size: Option<Size>,
    redraw: RedrawGate,
    last_request: Option<RenderRequest>,
}

impl<S: RenderSurface, D: ImageDecoder> Viewer<S, D> {
    pub fn new(config: ViewerConfig, surface: S, decoder: D) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            surface,
            decoder,
            listing: None,
            state: ViewportState::default(),
            image_size: None,
            redraw: RedrawGate::default(),
            last_request: None,
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for surfaces that are resized from outside. Call
    /// [`Viewer::notify_surface_resized`] after changing the size.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn decoder_mut(&mut self) -> &mut D {
        &mut self.decoder
    }

    pub fn listing(&self) -> Option<&FolderListing> {
        self.listing.as_ref()
    }

    pub fn current_path(&self) -> Option<&Path> {
        let index = self.state.current_index?;
        self.listing.as_ref()?.get(index)
    }

    /// `(index, count)` of the current image within its folder.
    pub fn position(&self) -> Option<(usize, usize)> {
        let index = self.state.current_index?;
        Some((index, self.listing.as_ref()?.len()))
    }

    /// Pixel size of the current image, once it has been read.
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// The request behind the frame currently on the surface.
    pub fn last_request(&self) -> Option<&RenderRequest> {
        self.last_request.as_ref()
    }

    /// Open `path` and browse its folder.
    pub fn open(&mut self, path: &Path) -> Result<RenderOutcome> {
        let listing = FolderListing::open(path, &self.config.browse)?;
        self.select(listing)
    }

    /// Select the listing's opened image, resetting rotation, zoom and pan.
    pub fn select(&mut self, listing: FolderListing) -> Result<RenderOutcome> {
        let index = listing.opened_index();
        info!(
            index,
            count = listing.len(),
            path = ?listing.get(index),
            "Image selected"
        );
        self.listing = Some(listing);
        self.switch_to(index);
        self.recompute_and_render()
    }

    /// Move `offset` images forward (or back) through the folder, wrapping around.
    pub fn navigate_by(&mut self, offset: isize) -> Result<Option<RenderOutcome>> {
        let (Some(listing), Some(current)) = (&self.listing, self.state.current_index) else {
            return Ok(None);
        };
        if listing.is_empty() {
            return Ok(None);
        }

        let next = next_index_cyclic(current, offset, listing.len());
        if next == current {
            return Ok(None);
        }

        debug!(from = current, to = next, "Navigating");
        self.switch_to(next);
        self.recompute_and_render().map(Some)
    }

    /// Turn the image by `steps` quarter turns clockwise (negative: counter-clockwise).
    pub fn rotate(&mut self, steps: isize) -> Result<Option<RenderOutcome>> {
        if !self.state.has_image() {
            return Ok(None);
        }

        let rotation = self.state.rotation.rotated_by(steps);
        if rotation == self.state.rotation {
            return Ok(None);
        }

        debug!(from = %self.state.rotation, to = %rotation, "Rotating");
        self.state.rotation = rotation;
        self.recompute_and_render().map(Some)
    }

    /// Set the zoom factor. Values outside the configured limits are rejected.
    pub fn set_zoom(&mut self, value: f64) -> Result<ZoomOutcome> {
        if !value.is_finite() || !self.config.zoom.contains(value) {
            debug!(
                requested = value,
                min = self.config.zoom.min,
                max = self.config.zoom.max,
                "Zoom rejected"
            );
            return Ok(ZoomOutcome::Rejected);
        }

        self.state.zoom = value;
        if is_unzoomed(value) {
            self.state.pan = Vector::ZERO;
        }
        self.recompute_and_render().map(ZoomOutcome::Applied)
    }

    /// Step the zoom by `delta`, saturating at the configured limits.
    ///
    /// Rejected when already at the limit in the direction of `delta`.
    pub fn zoom_by(&mut self, delta: f64) -> Result<ZoomOutcome> {
        let limits = &self.config.zoom;
        let target = (self.state.zoom + delta).clamp(limits.min, limits.max);
        if target == self.state.zoom {
            return Ok(ZoomOutcome::Rejected);
        }
        self.set_zoom(target)
    }

    /// Move the zoomed frame by a delta given in on-screen axes.
    ///
    /// Does nothing at zoom 1. The delta is in virtual-surface units; see
    /// [`Viewer::surface_to_pan`] for converting a drag measured on the surface.
    /// The offset is unchanged when the result is not renderable or fails.
    pub fn pan(&mut self, screen_delta: Vector) -> Result<Option<RenderOutcome>> {
        if is_unzoomed(self.state.zoom) {
            return Ok(None);
        }
        if screen_delta.length() < self.config.pan.threshold {
            return Ok(None);
        }

        // Only a rendered recompute clamps the offset, so keep the previous
        // one when nothing could be computed.
        let previous = self.state.pan;
        self.state.pan += rotate_offset(screen_delta, self.state.rotation);
        match self.recompute_and_render() {
            Ok(RenderOutcome::NotRenderable) => {
                self.state.pan = previous;
                Ok(Some(RenderOutcome::NotRenderable))
            }
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) => {
                self.state.pan = previous;
                Err(e)
            }
        }
    }

    /// Convert a displacement measured on the surface into virtual-surface units.
    pub fn surface_to_pan(&self, delta: Vector) -> Option<Vector> {
        let image = self.image_size?;
        let surface = self.surface.surface_size().oriented(self.state.rotation);
        frame_scale(image, surface, self.state.zoom).map(|scale| delta.scaled(scale))
    }

    /// Record that the surface changed size.
    ///
    /// Returns `true` if the caller must schedule a deferred
    /// [`Viewer::recompute_and_render`]; `false` if one is already owed.
    pub fn notify_surface_resized(&mut self) -> bool {
        let schedule = self.redraw.request();
        if schedule {
            debug!(size = %self.surface.surface_size(), "Redraw scheduled");
        }
        schedule
    }

    pub fn redraw_owed(&self) -> bool {
        self.redraw.is_owed()
    }

    /// Run the geometry for the current state and present the result.
    ///
    /// The clamped pan offset is written back into the state. When the result
    /// is not renderable the surface keeps its previous frame.
    pub fn recompute_and_render(&mut self) -> Result<RenderOutcome> {
        self.redraw.clear();

        let Some(index) = self.state.current_index else {
            return Ok(RenderOutcome::NoImage);
        };
        let Some(path) = self
            .listing
            .as_ref()
            .and_then(|l| l.get(index))
            .map(Path::to_path_buf)
        else {
            return Ok(RenderOutcome::NoImage);
        };

        let image = match self.image_size {
            Some(size) => size,
            None => {
                let (width, height) = self.decoder.dimensions(&path).inspect_err(|e| {
                    warn!(path = %path.display(), error = %e, "Failed to read image size");
                })?;
                let size = Size::from_pixels(width, height);
                self.image_size = Some(size);
                size
            }
        };

        let rotation = self.state.rotation;
        let surface = self.surface.surface_size().oriented(rotation);

        let Some(crop) = compute_crop(image, surface, self.state.zoom, self.state.pan) else {
            debug!(image = %image, surface = %surface, "Not renderable");
            return Ok(RenderOutcome::NotRenderable);
        };
        self.state.pan = crop.pan;

        let Some((output_width, output_height)) = output_size(crop.rect, surface) else {
            debug!(crop = %crop.rect, surface = %surface, "Output size not renderable");
            return Ok(RenderOutcome::NotRenderable);
        };

        let request = RenderRequest {
            index,
            path,
            crop: crop.rect,
            output_width,
            output_height,
            rotation,
        };
        if self.last_request.as_ref() == Some(&request) {
            return Ok(RenderOutcome::Unchanged);
        }

        let pixels = self.decoder.decode(&request).inspect_err(|e| {
            warn!(path = %request.path.display(), error = %e, "Decode failed");
        })?;
        debug!(
            crop = %request.crop,
            width = output_width,
            height = output_height,
            rotation = %rotation,
            "Presenting frame"
        );
        self.surface
            .present(RenderedFrame::new(request.clone(), pixels));
        self.last_request = Some(request.clone());

        Ok(RenderOutcome::Presented(request))
    }

    /// Dispatch a logical command. Returns whether the view changed.
    pub fn apply(&mut self, command: &Command) -> Result<bool> {
        let changed = match command {
            Command::Open(path) => {
                self.open(path)?;
                true
            }
            Command::Navigate(offset) => self.navigate_by(*offset)?.is_some(),
            Command::Rotate(steps) => self.rotate(*steps)?.is_some(),
            Command::SetZoom(value) => {
                matches!(self.set_zoom(*value)?, ZoomOutcome::Applied(_))
            }
            Command::ZoomBy(delta) => matches!(self.zoom_by(*delta)?, ZoomOutcome::Applied(_)),
            Command::Pan(delta) => self.pan(*delta)?.is_some(),
        };
        Ok(changed)
    }

    fn switch_to(&mut self, index: usize) {
        self.state.current_index = Some(index);
        self.state.reset_view();
        self.image_size = None;
        self.last_request = None;
    }
}
