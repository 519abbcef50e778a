use super::types::{CropRect, Size};

/// Slack absorbed before flooring to whole pixels, so 199.99999999 counts as 200.
const PIXEL_SNAP_EPSILON: f64 = 1e-6;

/// Fit scale factor between two sizes: the larger of the two axis ratios.
///
/// Dividing `image` by this factor makes it fit inside `surface` with the
/// aspect ratio preserved; multiplying `surface` by it expresses the surface
/// in image pixels. Returns `None` unless both sizes are renderable.
pub fn fit_scale(image: Size, surface: Size) -> Option<f64> {
    if !image.is_renderable() || !surface.is_renderable() {
        return None;
    }

    // img = 2000x1000, surface = 200x200: 10 > 5, width constrains
    // img = 2000x1000, surface = 200x2:   10 < 50, height constrains
    let width_ratio = image.width / surface.width;
    let height_ratio = image.height / surface.height;
    let scale = width_ratio.max(height_ratio);

    (scale.is_finite() && scale > 0.0).then_some(scale)
}

/// Scale `image` so it fits entirely within `surface`, preserving aspect ratio.
pub fn fit_size(image: Size, surface: Size) -> Option<Size> {
    let scale = fit_scale(image, surface)?;
    Some(Size::new(image.width / scale, image.height / scale))
}

/// Whole-pixel size a crop should be scaled to so it fills `surface`.
///
/// `surface` must already be oriented for the current rotation.
pub fn output_size(crop: CropRect, surface: Size) -> Option<(u32, u32)> {
    let fitted = fit_size(crop.size(), surface)?;
    let width = whole_pixels(fitted.width);
    let height = whole_pixels(fitted.height);

    (width > 0 && height > 0).then_some((width, height))
}

/// Virtual-surface units covered by one surface unit at `zoom`.
///
/// Front ends multiply a drag measured on screen by this to get a pan delta.
pub fn frame_scale(image: Size, surface: Size, zoom: f64) -> Option<f64> {
    if !(zoom > 0.0) {
        return None;
    }
    fit_scale(image, surface).map(|scale| scale / zoom)
}

fn whole_pixels(value: f64) -> u32 {
    (value + PIXEL_SNAP_EPSILON).floor() as u32
}
