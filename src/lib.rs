#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod physics;
pub mod vector;

// Re-export main types
pub use physics::{FieldDirection, field_direction, field_direction_into};
pub use vector::Vector3;

/// Floating-point type used for vector components, angles and magnitudes
///
/// `f32` by default; `f64` with the `f64` feature.
#[cfg(not(feature = "f64"))]
pub type Scalar = f32;

/// Floating-point type used for vector components, angles and magnitudes
///
/// `f32` by default; `f64` with the `f64` feature.
#[cfg(feature = "f64")]
pub type Scalar = f64;

#[cfg(not(feature = "f64"))]
use core::f32::consts::PI;
#[cfg(feature = "f64")]
use core::f64::consts::PI;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: Scalar = 180.0 / PI;

/// Degrees in a full compass circle
pub const FULL_CIRCLE_DEG: Scalar = 360.0;

/// Field direction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The sample has zero magnitude and has no direction
    DegenerateInput,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DegenerateInput => f.write_str("field sample has zero magnitude"),
        }
    }
}

impl core::error::Error for Error {}
