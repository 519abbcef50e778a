use crate::frame::RenderedFrame;
use crate::geometry::Size;

/// Where rendered frames end up.
///
/// Implementors report the current drawable size and take ownership of each
/// frame presented. A surface that is not laid out yet may report a zero or
/// negative size; the viewer then skips rendering.
pub trait RenderSurface {
    fn surface_size(&self) -> Size;

    fn present(&mut self, frame: RenderedFrame);
}

/// Headless surface keeping the last presented frame in memory.
#[derive(Debug, Default)]
pub struct OffscreenSurface {
    size: Size,
    frame: Option<RenderedFrame>,
    presented: usize,
}

impl OffscreenSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            frame: None,
            presented: 0,
        }
    }

    /// Change the reported size. The viewer must still be notified.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn frame(&self) -> Option<&RenderedFrame> {
        self.frame.as_ref()
    }

    /// Number of frames presented so far.
    pub fn presented_count(&self) -> usize {
        self.presented
    }
}

impl RenderSurface for OffscreenSurface {
    fn surface_size(&self) -> Size {
        self.size
    }

    fn present(&mut self, frame: RenderedFrame) {
        self.presented += 1;
        self.frame = Some(frame);
    }
}
