pub mod crop;
pub mod cyclic;
pub mod fit;
pub mod rotate;
pub mod types;

pub use crop::{compute_crop, is_unzoomed, CropOutcome};
pub use cyclic::next_index_cyclic;
pub use fit::{fit_scale, fit_size, frame_scale, output_size};
pub use rotate::rotate_offset;
pub use types::{CropRect, Rotation, Size, Vector};
