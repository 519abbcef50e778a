use super::types::{Rotation, Vector};

/// Map a pan delta from on-screen axes into unrotated image axes.
///
/// The crop is always computed in image space, while a drag is expressed in
/// the rotated screen space, so every incremental delta goes through here
/// before it is accumulated.
pub fn rotate_offset(offset: Vector, rotation: Rotation) -> Vector {
    match rotation {
        Rotation::Rotate0 => offset,
        Rotation::Rotate90 => Vector::new(offset.y, -offset.x),
        Rotation::Rotate180 => Vector::new(-offset.x, -offset.y),
        Rotation::Rotate270 => Vector::new(-offset.y, offset.x),
    }
}
