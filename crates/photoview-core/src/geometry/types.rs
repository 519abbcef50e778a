use std::fmt;
use std::ops::{Add, AddAssign, Neg};

use crate::consts::ROTATION_STEPS;

use super::cyclic::next_index_cyclic;

/// Width/height pair used for both image and surface extents.
///
/// Surfaces report fractional sizes (logical points), images report whole
/// pixels; both are carried as `f64` so the geometry is computed once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// Both sides strictly positive. NaN sides are not renderable.
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    pub fn transposed(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// The surface as seen from unrotated image space: quarter turns swap
    /// the axes so the rotated output still fills the real surface.
    pub fn oriented(&self, rotation: Rotation) -> Self {
        if rotation.is_quarter_turn() {
            self.transposed()
        } else {
            *self
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A 2-D displacement. Pan offsets are kept in virtual-surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// A rectangle in source-image pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole image.
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn is_renderable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// True if the rectangle lies entirely inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }

    pub fn size(&self) -> Size {
        Size::from_pixels(self.width, self.height)
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// Clockwise rotation applied to the displayed image, in 90° steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    pub const ALL: [Rotation; ROTATION_STEPS] = [
        Rotation::Rotate0,
        Rotation::Rotate90,
        Rotation::Rotate180,
        Rotation::Rotate270,
    ];

    /// Rotation after `steps` quarter turns from 0°, wrapping modulo 4.
    pub fn from_steps(steps: usize) -> Self {
        Self::ALL[steps % ROTATION_STEPS]
    }

    pub fn steps(&self) -> usize {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 1,
            Self::Rotate180 => 2,
            Self::Rotate270 => 3,
        }
    }

    pub fn degrees(&self) -> u32 {
        self.steps() as u32 * 90
    }

    /// Advance by `steps` quarter turns; negative steps turn counter-clockwise.
    pub fn rotated_by(&self, steps: isize) -> Self {
        Self::from_steps(next_index_cyclic(self.steps(), steps, ROTATION_STEPS))
    }

    pub fn is_quarter_turn(&self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{b0}", self.degrees())
    }
}
