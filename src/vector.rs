//! Three-component vector primitives
//!
//! [`Vector3`] holds one 3-axis sample, either raw (sensor units) or
//! normalized to unit length. Only the operations the field direction
//! calculation needs are provided: magnitude, in-place uniform scaling and
//! normalization.

use crate::Scalar;

type Math = libm::Libm<Scalar>;

/// A 3-axis vector sample
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    /// X-axis component
    pub x: Scalar,
    /// Y-axis component
    pub y: Scalar,
    /// Z-axis component
    pub z: Scalar,
}

impl Vector3 {
    /// The zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm √(x² + y² + z²)
    ///
    /// Components are divided by the largest absolute component before
    /// squaring, so finite samples neither overflow nor underflow. Returns 0
    /// for the zero vector.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        let peak = Math::fabs(self.x)
            .max(Math::fabs(self.y))
            .max(Math::fabs(self.z));

        // Zero, infinite or NaN-only peaks take the plain path
        if peak == 0.0 || !peak.is_finite() {
            return Math::sqrt(self.dot(self));
        }

        let (x, y, z) = (self.x / peak, self.y / peak, self.z / peak);
        peak * Math::sqrt(x * x + y * y + z * z)
    }

    /// Dot product with another vector
    #[must_use]
    pub fn dot(&self, other: &Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Multiply every component by `factor` in place
    pub fn scale(&mut self, factor: Scalar) {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
    }

    /// Check whether all components are exactly zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Normalize the vector to unit length in place
    ///
    /// Returns the magnitude the vector had before scaling. If the magnitude
    /// is zero, returns `None` and leaves the vector unmodified.
    pub fn normalize(&mut self) -> Option<Scalar> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return None;
        }

        let factor = 1.0 / magnitude;
        if factor.is_finite() {
            self.scale(factor);
        } else {
            // Subnormal magnitude: the reciprocal overflows
            self.x /= magnitude;
            self.y /= magnitude;
            self.z /= magnitude;
        }

        Some(magnitude)
    }

    /// Return a unit-length copy of the vector, or `None` for the zero vector
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let mut unit = *self;
        unit.normalize().map(|_| unit)
    }
}

impl From<[Scalar; 3]> for Vector3 {
    fn from([x, y, z]: [Scalar; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(Scalar, Scalar, Scalar)> for Vector3 {
    fn from((x, y, z): (Scalar, Scalar, Scalar)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [Scalar; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// Euclidean norm of `v`
///
/// Free-function form of [`Vector3::magnitude`].
#[must_use]
pub fn magnitude(v: &Vector3) -> Scalar {
    v.magnitude()
}

/// Scale `v` by `factor` in place
///
/// Free-function form of [`Vector3::scale`].
pub fn scale(v: &mut Vector3, factor: Scalar) {
    v.scale(factor);
}
