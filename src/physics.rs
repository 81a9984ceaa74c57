//! Geomagnetic field direction
//!
//! Converts one raw (unscaled) 3-axis magnetometer sample into a horizontal
//! heading, a vertical inclination and the net field strength.
//!
//! Angles assume the sensor is mounted level. No tilt compensation,
//! calibration or filtering is applied.
//!
//! # Axis conventions
//!
//! - Heading (`theta`) is measured from the +Y axis and increases clockwise,
//!   in degrees within `[0, 360)`.
//! - Inclination (`delta`) is positive when the field points downward (-Z),
//!   in degrees within `[-90, 90]`.
//!
//! # Example
//!
//! ```
//! use geomag::{Vector3, physics::field_direction};
//!
//! let mut sample = Vector3::new(3.0, 4.0, 0.0);
//! let direction = field_direction(&mut sample).unwrap();
//!
//! assert!((direction.strength - 5.0).abs() < 1e-4);
//! assert!(direction.delta.abs() < 1e-4);
//! // The sample now holds the unit direction vector
//! assert!((sample.magnitude() - 1.0).abs() < 1e-4);
//! ```

use crate::vector::Vector3;
use crate::{Error, FULL_CIRCLE_DEG, RAD_TO_DEG, Scalar};

type Math = libm::Libm<Scalar>;

/// Direction and strength of a magnetic field sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldDirection {
    /// Heading in degrees `[0, 360)`, clockwise from +Y
    pub theta: Scalar,
    /// Inclination in degrees `[-90, 90]`, positive downward
    pub delta: Scalar,
    /// Field magnitude in the units of the raw sample
    pub strength: Scalar,
}

impl FieldDirection {
    /// Build the result from an already normalized direction vector
    ///
    /// `strength` is stored as given.
    #[must_use]
    pub fn from_unit(direction: &Vector3, strength: Scalar) -> Self {
        Self {
            theta: heading(direction),
            delta: inclination(direction),
            strength,
        }
    }
}

/// Heading of a unit direction vector in degrees `[0, 360)`
///
/// The angle is taken relative to the +Y axis, so the `atan2` arguments are
/// `(x, y)` rather than `(y, x)`, and the sign is inverted so that positive
/// angles are clockwise.
#[must_use]
pub fn heading(direction: &Vector3) -> Scalar {
    let mut theta = -Math::atan2(direction.x, direction.y) * RAD_TO_DEG;

    if theta < 0.0 {
        theta += FULL_CIRCLE_DEG;
        // A tiny negative angle rounds up to exactly 360
        if theta >= FULL_CIRCLE_DEG {
            theta = 0.0;
        }
    }

    // Folds -0.0 into +0.0
    theta + 0.0
}

/// Inclination of a unit direction vector in degrees `[-90, 90]`
///
/// Positive values mean the field points downward. `z` is clamped to
/// `[-1, 1]` first so rounding left over from normalization stays inside the
/// `asin` domain; a NaN component still yields NaN.
#[must_use]
pub fn inclination(direction: &Vector3) -> Scalar {
    let z = direction.z.clamp(-1.0, 1.0);
    // Keeps +/-90 exact after the degree conversion rounds
    (-Math::asin(z) * RAD_TO_DEG).clamp(-90.0, 90.0) + 0.0
}

/// Calculate direction, inclination and strength of a raw field sample
///
/// **The sample is normalized in place**: on success `field` holds the unit
/// direction vector and the returned [`FieldDirection::strength`] holds its
/// original magnitude.
///
/// # Errors
///
/// Returns [`Error::DegenerateInput`] if the sample has zero magnitude. In
/// that case `field` is left unmodified.
pub fn field_direction(field: &mut Vector3) -> Result<FieldDirection, Error> {
    let Some(magnitude) = field.normalize() else {
        #[cfg(feature = "defmt")]
        defmt::debug!("Rejected zero-magnitude field sample");

        return Err(Error::DegenerateInput);
    };

    let direction = FieldDirection::from_unit(field, magnitude);

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "Field direction: theta={} delta={} strength={}",
        direction.theta,
        direction.delta,
        direction.strength
    );

    Ok(direction)
}

/// Out-parameter form of [`field_direction`]
///
/// Returns `true` and writes `theta`, `delta` and `strength` on success.
/// Returns `false` for a zero-magnitude sample, in which case neither the
/// outputs nor `field` are written.
pub fn field_direction_into(
    field: &mut Vector3,
    theta: &mut Scalar,
    delta: &mut Scalar,
    strength: &mut Scalar,
) -> bool {
    match field_direction(field) {
        Ok(direction) => {
            *theta = direction.theta;
            *delta = direction.delta;
            *strength = direction.strength;
            true
        }
        Err(_) => false,
    }
}
