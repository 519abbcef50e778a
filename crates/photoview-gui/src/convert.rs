use photoview_core::frame::RenderedFrame;

/// Convert a rendered RGBA frame to an egui ColorImage.
pub fn frame_to_color_image(frame: &RenderedFrame) -> egui::ColorImage {
    let size = [frame.width() as usize, frame.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, frame.pixels.as_raw())
}
