use photoview_core::frame::RenderedFrame;
use photoview_core::geometry::Size;
use photoview_core::viewer::RenderSurface;

use crate::convert::frame_to_color_image;

/// Render surface backed by an egui texture.
///
/// The size is in physical pixels so frames are rendered at screen resolution.
/// The last presented frame is kept for "Save View As".
pub struct EguiSurface {
    ctx: egui::Context,
    size: Size,
    texture: Option<egui::TextureHandle>,
    frame: Option<RenderedFrame>,
}

impl EguiSurface {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            size: Size::default(),
            texture: None,
            frame: None,
        }
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    pub fn frame(&self) -> Option<&RenderedFrame> {
        self.frame.as_ref()
    }
}

impl RenderSurface for EguiSurface {
    fn surface_size(&self) -> Size {
        self.size
    }

    fn present(&mut self, frame: RenderedFrame) {
        let image = frame_to_color_image(&frame);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(self.ctx.load_texture(
                    "viewport",
                    image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
        self.frame = Some(frame);
        self.ctx.request_repaint();
    }
}
