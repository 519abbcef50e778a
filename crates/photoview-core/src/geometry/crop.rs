use tracing::trace;

use crate::consts::ZOOM_EPSILON;

use super::fit::fit_scale;
use super::types::{CropRect, Size, Vector};

/// Result of a crop computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropOutcome {
    /// Region of the source image to display.
    pub rect: CropRect,
    /// Pan offset after clamping the frame to the virtual surface. Callers
    /// persist this instead of the offset they passed in, so the offset never
    /// drifts past the image edge.
    pub pan: Vector,
}

/// True if `zoom` is the unzoomed factor 1.
pub fn is_unzoomed(zoom: f64) -> bool {
    (zoom - 1.0).abs() < ZOOM_EPSILON
}

/// Compute the source rectangle shown for `zoom` and `pan` on `surface`.
///
/// The surface is first re-expressed in image pixels (the virtual surface),
/// the zoomed frame is centered on it and shifted by `pan`, clamped so it
/// stays on the virtual surface, and finally converted to image coordinates
/// and clamped to the image extent. The rectangle is shifted inward rather
/// than shrunk when it would overflow the far edge.
///
/// Returns `None` when nothing can be rendered: a non-positive image or
/// surface size, a non-positive or non-finite zoom, or a degenerate result.
pub fn compute_crop(image: Size, surface: Size, zoom: f64, pan: Vector) -> Option<CropOutcome> {
    if !zoom.is_finite() || zoom <= 0.0 {
        return None;
    }
    let scale = fit_scale(image, surface)?;

    let image_w = image.width.floor() as u32;
    let image_h = image.height.floor() as u32;
    if image_w == 0 || image_h == 0 {
        return None;
    }

    if is_unzoomed(zoom) {
        return Some(CropOutcome {
            rect: CropRect::full(image_w, image_h),
            pan: Vector::ZERO,
        });
    }

    let virtual_surface = surface.scaled(scale);

    // Image position on the virtual surface; negative when the image overhangs
    let img_x = (virtual_surface.width - image.width) / 2.0;
    let img_y = (virtual_surface.height - image.height) / 2.0;

    let frame = virtual_surface.scaled(1.0 / zoom);
    let centered_x = (virtual_surface.width - frame.width) / 2.0;
    let centered_y = (virtual_surface.height - frame.height) / 2.0;

    let (frame_x, pan_x) = clamp_axis(centered_x, pan.x, frame.width, virtual_surface.width);
    let (frame_y, pan_y) = clamp_axis(centered_y, pan.y, frame.height, virtual_surface.height);

    let (x, width) = to_image_axis(frame_x, img_x, frame.width, image_w);
    let (y, height) = to_image_axis(frame_y, img_y, frame.height, image_h);
    let rect = CropRect::new(x, y, width, height);

    trace!(
        zoom,
        scale,
        frame_x,
        frame_y,
        crop = %rect,
        "Crop computed"
    );

    rect.is_renderable().then_some(CropOutcome {
        rect,
        pan: Vector::new(pan_x, pan_y),
    })
}

/// Position a frame of `len` at `start + offset` within `[0, extent]`.
///
/// Returns the clamped position and the offset reduced by the overflow.
fn clamp_axis(start: f64, offset: f64, len: f64, extent: f64) -> (f64, f64) {
    let pos = start + offset;
    if pos < 0.0 {
        (0.0, offset - pos)
    } else if pos + len > extent {
        let overflow = pos + len - extent;
        (extent - len, offset - overflow)
    } else {
        (pos, offset)
    }
}

/// Convert a frame axis on the virtual surface into a whole-pixel span of the image.
fn to_image_axis(frame_pos: f64, img_pos: f64, frame_len: f64, image_len: u32) -> (u32, u32) {
    let len = if frame_len > image_len as f64 {
        image_len
    } else {
        frame_len as u32
    };

    let start = if frame_pos > img_pos {
        (frame_pos - img_pos) as u32
    } else {
        0
    };

    let start = if start.saturating_add(len) > image_len {
        image_len - len
    } else {
        start
    };

    (start, len)
}
