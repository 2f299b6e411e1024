//! Device orientation from gravity and the geomagnetic field
//!
//! The rotation matrix maps device coordinates into an East-North-Up world
//! frame. Its rows are the world axes expressed in device coordinates:
//!
//! ```text
//!     | Hx Hy Hz |   H = east  (E x A, normalised)
//! R = | Mx My Mz |   M = north (A x H)
//!     | Ax Ay Az |   A = up    (gravity reaction, normalised)
//! ```
//!
//! # Example
//! ```
//! use nalgebra::Vector3;
//! use compass_heading::rotation::{GravityMagneticRotation, RotationProvider, orientation};
//!
//! let gravity = Vector3::new(0.0, 0.0, 9.81);     // lying flat, screen up
//! let field = Vector3::new(0.0, 22.0, -40.0);     // top edge towards magnetic north
//!
//! let rotation = GravityMagneticRotation::default()
//!     .rotation_matrix(gravity, field)
//!     .unwrap();
//! let angles = orientation(&rotation);
//! assert!(angles.azimuth.abs() < 1e-6);
//! ```

use nalgebra::{ComplexField, Matrix3, RealField, Vector3};

use crate::error::CompassError;
use crate::math::{RAD_TO_DEG, Vector3Ext};

/// Capability that turns gravity and geomagnetic vectors into a rotation
/// matrix
///
/// Hosts that already expose such a routine can plug it in here instead of
/// [`GravityMagneticRotation`].
pub trait RotationProvider {
    /// Rotation matrix from device frame to the East-North-Up world frame
    ///
    /// # Arguments
    /// * `gravity` - Accelerometer reading while the device is at rest
    /// * `geomagnetic` - Magnetometer reading
    fn rotation_matrix(
        &self,
        gravity: Vector3<f32>,
        geomagnetic: Vector3<f32>,
    ) -> Result<Matrix3<f32>, CompassError>;
}

/// Rotation matrix built from the cross products of gravity and the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityMagneticRotation {
    /// Smallest accepted magnitude of `E x A` before normalisation
    pub min_horizontal_field: f32,
}

impl GravityMagneticRotation {
    pub fn new(min_horizontal_field: f32) -> Self {
        Self {
            min_horizontal_field,
        }
    }

    /// Magnetic inclination (dip) in radians
    ///
    /// Positive when the field points below the horizon, as it does in the
    /// northern hemisphere.
    pub fn inclination(
        &self,
        gravity: Vector3<f32>,
        geomagnetic: Vector3<f32>,
    ) -> Result<f32, CompassError> {
        let rotation = self.rotation_matrix(gravity, geomagnetic)?;
        let world = rotation * geomagnetic;

        Ok(-world.z.atan2(world.y))
    }
}

impl Default for GravityMagneticRotation {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl RotationProvider for GravityMagneticRotation {
    fn rotation_matrix(
        &self,
        gravity: Vector3<f32>,
        geomagnetic: Vector3<f32>,
    ) -> Result<Matrix3<f32>, CompassError> {
        if !gravity.all_finite() || !geomagnetic.all_finite() {
            return Err(CompassError::NonFiniteSample);
        }

        let east = geomagnetic.cross(&gravity);
        if east.norm() < self.min_horizontal_field || gravity.norm_squared() == 0.0 {
            return Err(CompassError::DegenerateField);
        }

        let east = east.safe_normalize();
        let up = gravity.safe_normalize();
        let north = up.cross(&east);

        Ok(Matrix3::from_rows(&[
            east.transpose(),
            north.transpose(),
            up.transpose(),
        ]))
    }
}

/// Orientation angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the up axis, 0 at magnetic north, positive towards east
    pub azimuth: f32,
    /// Rotation about the east axis, -90° with the device upright
    pub pitch: f32,
    /// Rotation about the north axis
    pub roll: f32,
}

impl Orientation {
    /// Azimuth in degrees, range -180° to +180°
    pub fn azimuth_degrees(&self) -> f32 {
        self.azimuth * RAD_TO_DEG
    }
}

/// Extract azimuth, pitch and roll from a device-to-world rotation matrix
pub fn orientation(rotation: &Matrix3<f32>) -> Orientation {
    let azimuth = rotation[(0, 1)].atan2(rotation[(1, 1)]);
    // Clamp guards asin against rounding just past ±1
    let pitch = ComplexField::asin((-rotation[(2, 1)]).clamp(-1.0, 1.0));
    let roll = (-rotation[(2, 0)]).atan2(rotation[(2, 2)]);

    Orientation {
        azimuth,
        pitch,
        roll,
    }
}
