use crate::numeric::format::{rounded, PART_DECIMALS};
use crate::numeric::ComplexNumber;

/// A position in plane-canvas coordinates (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps between canvas positions and complex-plane coordinates.
/// Constant for the lifetime of a session.
#[derive(Debug, Clone, Copy)]
pub struct PlaneTransform {
    /// Canvas units per complex unit.
    pub scale: f64,
    /// Canvas position of the complex origin.
    pub origin: PlanePoint,
}

impl PlaneTransform {
    pub fn new(scale: f64, origin: PlanePoint) -> Self {
        Self { scale, origin }
    }

    /// Canvas position → complex number, rounded to two decimals per axis.
    pub fn to_complex(&self, position: PlanePoint) -> ComplexNumber {
        ComplexNumber::cartesian(
            rounded((position.x - self.origin.x) / self.scale, PART_DECIMALS),
            rounded((position.y - self.origin.y) / self.scale, PART_DECIMALS),
        )
    }

    /// Complex number → canvas position. Exact inverse of `to_complex`
    /// up to its rounding.
    pub fn to_position(&self, z: &ComplexNumber) -> PlanePoint {
        PlanePoint {
            x: z.re_or_zero() * self.scale + self.origin.x,
            y: z.im_or_zero() * self.scale + self.origin.y,
        }
    }
}
