use image::{Rgba, RgbaImage};

use photoview_core::frame::{RenderRequest, RenderedFrame};
use photoview_core::geometry::{CropRect, Rotation};
use photoview_core::io::export::{encode_jpeg, save_frame};

fn frame(width: u32, height: u32) -> RenderedFrame {
    let request = RenderRequest {
        index: 0,
        path: "source.png".into(),
        crop: CropRect::full(width, height),
        output_width: width,
        output_height: height,
        rotation: Rotation::Rotate0,
    };
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 20) as u8, (y * 20) as u8, 64, 255])
    });
    RenderedFrame::new(request, pixels)
}

#[test]
fn test_encode_jpeg_produces_jpeg_stream() {
    let bytes = encode_jpeg(&frame(8, 6), 90).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
}

#[test]
fn test_encode_jpeg_quality_changes_size() {
    let source = frame(32, 32);
    let low = encode_jpeg(&source, 5).unwrap();
    let high = encode_jpeg(&source, 100).unwrap();
    assert!(low.len() < high.len());
}

#[test]
fn test_save_frame_png_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.png");
    let original = frame(5, 3);

    save_frame(&original, &path, 90).unwrap();

    let loaded = image::open(&path).unwrap().into_rgba8();
    assert_eq!(loaded.dimensions(), (5, 3));
    assert_eq!(loaded, original.pixels);
}

#[test]
fn test_save_frame_picks_jpeg_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.JPEG");

    save_frame(&frame(4, 4), &path, 80).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(image::image_dimensions(&path).unwrap(), (4, 4));
}

#[test]
fn test_presented_size_swaps_for_quarter_turns() {
    let mut request = frame(8, 6).request;
    request.output_width = 30;
    request.output_height = 10;
    assert_eq!(request.presented_size(), (30, 10));

    request.rotation = Rotation::Rotate270;
    assert_eq!(request.presented_size(), (10, 30));

    request.rotation = Rotation::Rotate180;
    assert_eq!(request.presented_size(), (30, 10));
}
