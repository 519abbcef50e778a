use crate::geometry::{Rotation, Vector};

/// The mutable view of one viewer session.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    /// Index into the folder listing; `None` until an image is selected.
    pub current_index: Option<usize>,
    pub rotation: Rotation,
    pub zoom: f64,
    /// Accumulated frame displacement in virtual-surface units.
    pub pan: Vector,
}

impl ViewportState {
    pub fn has_image(&self) -> bool {
        self.current_index.is_some()
    }

    /// Back to 0°, zoom 1 and no pan. Applied whenever another image is selected.
    pub fn reset_view(&mut self) {
        self.rotation = Rotation::Rotate0;
        self.zoom = 1.0;
        self.pan = Vector::ZERO;
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            current_index: None,
            rotation: Rotation::Rotate0,
            zoom: 1.0,
            pan: Vector::ZERO,
        }
    }
}
