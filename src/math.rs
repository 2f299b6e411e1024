//! Angle helpers and nalgebra extensions for the compass heading library

use nalgebra::{ComplexField, Vector3};

/// Mathematical constants
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Wrap an angle in degrees into [0, 360)
///
/// Uses `(degrees + 360) mod 360` followed by a Euclidean fold, so any
/// finite input lands in range, including values below -360.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = (degrees + FULL_TURN) % FULL_TURN;
    if wrapped < 0.0 { wrapped + FULL_TURN } else { wrapped }
}

/// Most decimal places an `f64` heading can carry
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Round to a fixed number of decimal places, ties to even
///
/// `places` is capped at [`MAX_DECIMAL_PLACES`].
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let scale = ComplexField::powi(10.0f64, places.min(MAX_DECIMAL_PLACES) as i32);
    let scaled = value * scale;

    let rounded = if ComplexField::abs(ComplexField::fract(scaled)) == 0.5 {
        2.0 * ComplexField::round(scaled / 2.0)
    } else {
        ComplexField::round(scaled)
    };

    rounded / scale
}

/// Extension trait for Vector3 operations
pub trait Vector3Ext {
    /// Normalize the vector, returning zero vector if magnitude is zero
    fn safe_normalize(&self) -> Vector3<f32>;

    /// Whether every component is finite
    fn all_finite(&self) -> bool;
}

impl Vector3Ext for Vector3<f32> {
    fn safe_normalize(&self) -> Vector3<f32> {
        let magnitude_squared = self.magnitude_squared();

        if magnitude_squared == 0.0 {
            return Vector3::zeros();
        }

        *self * (1.0 / ComplexField::sqrt(magnitude_squared))
    }

    fn all_finite(&self) -> bool {
        self.iter().all(|component| component.is_finite())
    }
}
