use approx::assert_relative_eq;

use photoview_core::geometry::{
    compute_crop, fit_scale, fit_size, frame_scale, output_size, rotate_offset, CropRect,
    Rotation, Size, Vector,
};

const WIDE: Size = Size::new(2000.0, 1000.0);
const SQUARE_SURFACE: Size = Size::new(200.0, 200.0);

// ---------------------------------------------------------------------------
// fit_size
// ---------------------------------------------------------------------------

#[test]
fn test_fit_size_width_constrains() {
    let fitted = fit_size(WIDE, SQUARE_SURFACE).unwrap();
    assert_relative_eq!(fitted.width, 200.0);
    assert_relative_eq!(fitted.height, 100.0);
}

#[test]
fn test_fit_size_height_constrains() {
    let fitted = fit_size(WIDE, Size::new(200.0, 2.0)).unwrap();
    assert_relative_eq!(fitted.width, 4.0);
    assert_relative_eq!(fitted.height, 2.0);
}

#[test]
fn test_fit_size_ratio_fifty() {
    let fitted = fit_size(WIDE, Size::new(200.0, 20.0)).unwrap();
    assert_relative_eq!(fitted.width, 40.0);
    assert_relative_eq!(fitted.height, 20.0);
}

#[test]
fn test_fit_size_preserves_aspect() {
    let image = Size::new(1234.0, 567.0);
    let fitted = fit_size(image, Size::new(333.0, 999.0)).unwrap();
    assert_relative_eq!(
        fitted.width / fitted.height,
        image.width / image.height,
        epsilon = 1e-9
    );
    assert!(fitted.width <= 333.0 + 1e-9);
    assert!(fitted.height <= 999.0 + 1e-9);
}

#[test]
fn test_fit_size_small_image_scales_up() {
    let fitted = fit_size(Size::new(50.0, 25.0), SQUARE_SURFACE).unwrap();
    assert_relative_eq!(fitted.width, 200.0);
    assert_relative_eq!(fitted.height, 100.0);
}

#[test]
fn test_fit_size_rejects_empty_sizes() {
    assert!(fit_size(Size::new(0.0, 100.0), SQUARE_SURFACE).is_none());
    assert!(fit_size(WIDE, Size::new(200.0, 0.0)).is_none());
    assert!(fit_size(WIDE, Size::new(-5.0, 200.0)).is_none());
    assert!(fit_scale(WIDE, Size::new(f64::NAN, 200.0)).is_none());
}

#[test]
fn test_frame_scale_divides_by_zoom() {
    assert_relative_eq!(frame_scale(WIDE, SQUARE_SURFACE, 1.0).unwrap(), 10.0);
    assert_relative_eq!(frame_scale(WIDE, SQUARE_SURFACE, 4.0).unwrap(), 2.5);
    assert!(frame_scale(WIDE, SQUARE_SURFACE, 0.0).is_none());
}

// ---------------------------------------------------------------------------
// output_size
// ---------------------------------------------------------------------------

#[test]
fn test_output_size_full_image() {
    let size = output_size(CropRect::full(2000, 1000), SQUARE_SURFACE);
    assert_eq!(size, Some((200, 100)));
}

#[test]
fn test_output_size_zoomed_crop_fills_surface() {
    let size = output_size(CropRect::new(500, 0, 1000, 1000), SQUARE_SURFACE);
    assert_eq!(size, Some((200, 200)));
}

#[test]
fn test_output_size_third_scale() {
    let size = output_size(CropRect::new(0, 0, 600, 300), Size::new(200.0, 200.0));
    assert_eq!(size, Some((200, 100)));
}

#[test]
fn test_output_size_degenerate_is_none() {
    assert!(output_size(CropRect::new(0, 0, 1000, 1), Size::new(10.0, 10.0)).is_none());
    assert!(output_size(CropRect::new(0, 0, 0, 10), SQUARE_SURFACE).is_none());
}

// ---------------------------------------------------------------------------
// compute_crop
// ---------------------------------------------------------------------------

#[test]
fn test_crop_zoom_one_is_full_image() {
    for pan in [
        Vector::ZERO,
        Vector::new(5000.0, -300.0),
        Vector::new(-1e9, 1e9),
    ] {
        let outcome = compute_crop(WIDE, SQUARE_SURFACE, 1.0, pan).unwrap();
        assert_eq!(outcome.rect, CropRect::new(0, 0, 2000, 1000));
        assert_eq!(outcome.pan, Vector::ZERO);
    }
}

#[test]
fn test_crop_zoom_two_centered() {
    let outcome = compute_crop(WIDE, SQUARE_SURFACE, 2.0, Vector::ZERO).unwrap();
    assert_eq!(outcome.rect, CropRect::new(500, 0, 1000, 1000));
    assert_eq!(outcome.pan, Vector::ZERO);
}

#[test]
fn test_crop_zoom_four_centered() {
    let outcome = compute_crop(WIDE, SQUARE_SURFACE, 4.0, Vector::ZERO).unwrap();
    assert_eq!(outcome.rect, CropRect::new(750, 250, 500, 500));
}

#[test]
fn test_crop_pan_within_bounds_is_kept() {
    let outcome = compute_crop(WIDE, SQUARE_SURFACE, 2.0, Vector::new(120.0, 0.0)).unwrap();
    assert_eq!(outcome.rect, CropRect::new(620, 0, 1000, 1000));
    assert_eq!(outcome.pan, Vector::new(120.0, 0.0));
}

#[test]
fn test_crop_pan_clamped_right() {
    let outcome = compute_crop(WIDE, SQUARE_SURFACE, 2.0, Vector::new(10_000.0, 0.0)).unwrap();
    assert_eq!(outcome.rect, CropRect::new(1000, 0, 1000, 1000));
    assert_relative_eq!(outcome.pan.x, 500.0);
    assert_relative_eq!(outcome.pan.y, 0.0);
}

#[test]
fn test_crop_pan_clamped_left() {
    let outcome =
        compute_crop(WIDE, SQUARE_SURFACE, 2.0, Vector::new(-10_000.0, 0.0)).unwrap();
    assert_eq!(outcome.rect.x, 0);
    assert_relative_eq!(outcome.pan.x, -500.0);
}

#[test]
fn test_crop_pan_clamp_stabilizes() {
    let push = Vector::new(10_000.0, 10_000.0);
    let first = compute_crop(WIDE, SQUARE_SURFACE, 3.0, push).unwrap();

    let mut pan = first.pan;
    for _ in 0..5 {
        let next = compute_crop(WIDE, SQUARE_SURFACE, 3.0, pan + push).unwrap();
        assert_eq!(next.rect, first.rect);
        assert_relative_eq!(next.pan.x, first.pan.x, epsilon = 1e-9);
        assert_relative_eq!(next.pan.y, first.pan.y, epsilon = 1e-9);
        pan = next.pan;
    }
}

#[test]
fn test_crop_letterbox_axis_stays_inside_image() {
    // Tall surface: the image occupies a horizontal band of the virtual surface
    let image = Size::new(1000.0, 500.0);
    let surface = Size::new(100.0, 400.0);
    for pan_y in [-1e6, -100.0, 0.0, 100.0, 1e6] {
        let outcome = compute_crop(image, surface, 2.0, Vector::new(0.0, pan_y)).unwrap();
        assert!(outcome.rect.fits_within(1000, 500), "{}", outcome.rect);
        assert_eq!(outcome.rect.height, 500);
    }
}

#[test]
fn test_crop_containment_grid() {
    let images = [
        Size::new(2000.0, 1000.0),
        Size::new(1000.0, 2000.0),
        Size::new(640.0, 480.0),
        Size::new(17.0, 3.0),
        Size::new(1.0, 1.0),
    ];
    let surfaces = [
        Size::new(200.0, 200.0),
        Size::new(1920.0, 1080.0),
        Size::new(33.0, 517.0),
        Size::new(1.0, 1.0),
    ];
    let zooms = [1.0, 1.25, 2.0, 3.7, 10.0];
    let pans = [
        Vector::ZERO,
        Vector::new(1e6, 1e6),
        Vector::new(-1e6, 1e6),
        Vector::new(13.5, -7.25),
        Vector::new(-1e6, -1e6),
    ];

    for image in images {
        for surface in surfaces {
            for zoom in zooms {
                for pan in pans {
                    let Some(outcome) = compute_crop(image, surface, zoom, pan) else {
                        continue;
                    };
                    assert!(
                        outcome
                            .rect
                            .fits_within(image.width as u32, image.height as u32),
                        "image {image} surface {surface} zoom {zoom} pan {pan:?}: {}",
                        outcome.rect
                    );
                    assert!(outcome.rect.is_renderable());
                }
            }
        }
    }
}

#[test]
fn test_crop_not_renderable() {
    assert!(compute_crop(Size::new(0.0, 10.0), SQUARE_SURFACE, 2.0, Vector::ZERO).is_none());
    assert!(compute_crop(WIDE, Size::new(0.0, 0.0), 2.0, Vector::ZERO).is_none());
    assert!(compute_crop(WIDE, Size::new(-1.0, 100.0), 1.0, Vector::ZERO).is_none());
    assert!(compute_crop(WIDE, SQUARE_SURFACE, 0.0, Vector::ZERO).is_none());
    assert!(compute_crop(WIDE, SQUARE_SURFACE, f64::INFINITY, Vector::ZERO).is_none());
}

// ---------------------------------------------------------------------------
// rotate_offset
// ---------------------------------------------------------------------------

#[test]
fn test_rotate_offset_quarter_turns() {
    let v = Vector::new(3.0, 2.0);
    assert_eq!(rotate_offset(v, Rotation::Rotate0), Vector::new(3.0, 2.0));
    assert_eq!(rotate_offset(v, Rotation::Rotate90), Vector::new(2.0, -3.0));
    assert_eq!(rotate_offset(v, Rotation::Rotate180), Vector::new(-3.0, -2.0));
    assert_eq!(rotate_offset(v, Rotation::Rotate270), Vector::new(-2.0, 3.0));
}

#[test]
fn test_rotate_offset_preserves_length() {
    let v = Vector::new(-7.5, 4.0);
    for rotation in Rotation::ALL {
        assert_relative_eq!(rotate_offset(v, rotation).length(), v.length());
    }
}

#[test]
fn test_oriented_surface_transposes_quarter_turns() {
    let surface = Size::new(300.0, 200.0);
    assert_eq!(surface.oriented(Rotation::Rotate0), surface);
    assert_eq!(surface.oriented(Rotation::Rotate180), surface);
    assert_eq!(surface.oriented(Rotation::Rotate90), Size::new(200.0, 300.0));
    assert_eq!(surface.oriented(Rotation::Rotate270), Size::new(200.0, 300.0));
}
