//! Compass heading from accelerometer and magnetometer samples

use nalgebra::Vector3;

use crate::direction::{Direction, classify_direction};
use crate::error::CompassError;
use crate::rotation::{GravityMagneticRotation, RotationProvider, orientation};
use crate::types::{CompassSettings, Heading, HeadingUpdate};

/// Turns one accelerometer sample and one magnetometer sample into a heading
///
/// Stateless: the calculator holds only its settings and the rotation
/// routine, so the same inputs always give the same heading.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_heading::{Direction, HeadingCalculator};
///
/// let calculator = HeadingCalculator::new();
///
/// let accelerometer = Vector3::new(0.0, 0.0, 9.81);  // flat, screen up
/// let magnetometer = Vector3::new(-22.0, 0.0, -40.0); // top edge east
///
/// let update = calculator.update(accelerometer, magnetometer).unwrap();
/// assert!((update.heading.degrees() - 90.0).abs() < 0.01);
/// assert_eq!(update.direction, Direction::E);
/// ```
#[derive(Debug, Clone)]
pub struct HeadingCalculator<R = GravityMagneticRotation> {
    settings: CompassSettings,
    rotation: R,
}

impl HeadingCalculator<GravityMagneticRotation> {
    /// Create a calculator with default settings
    pub fn new() -> Self {
        Self::with_settings(CompassSettings::default())
    }

    /// Create a calculator with specified settings
    pub fn with_settings(settings: CompassSettings) -> Self {
        let rotation = GravityMagneticRotation::new(settings.min_horizontal_field);
        Self::with_rotation(settings, rotation)
    }
}

impl Default for HeadingCalculator<GravityMagneticRotation> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RotationProvider> HeadingCalculator<R> {
    /// Create a calculator around a host-provided rotation routine
    pub fn with_rotation(settings: CompassSettings, rotation: R) -> Self {
        Self { settings, rotation }
    }

    pub fn settings(&self) -> CompassSettings {
        self.settings
    }

    /// Compute the heading for the latest pair of samples
    ///
    /// The azimuth is converted to degrees, offset by the declination,
    /// wrapped into [0, 360) and rounded to the configured decimal places.
    ///
    /// # Arguments
    /// * `accelerometer` - Latest accelerometer reading
    /// * `magnetometer` - Latest magnetometer reading
    ///
    /// # Errors
    /// [`CompassError::NonFiniteSample`] or [`CompassError::DegenerateField`]
    /// when the samples cannot define a horizontal plane.
    pub fn compute_heading(
        &self,
        accelerometer: Vector3<f32>,
        magnetometer: Vector3<f32>,
    ) -> Result<Heading, CompassError> {
        let rotation = self.rotation.rotation_matrix(accelerometer, magnetometer)?;
        let azimuth = orientation(&rotation).azimuth;

        let degrees = f64::from(azimuth).to_degrees() + self.settings.declination;
        Heading::from_degrees(degrees, self.settings.decimal_places)
    }

    /// Eight-point direction of a heading, see [`SECTORS`](crate::direction::SECTORS)
    ///
    /// Classifies the rounded heading, not the raw azimuth, so a label never
    /// disagrees with the angle published beside it.
    pub fn classify_direction(&self, heading: Heading) -> Direction {
        classify_direction(heading)
    }

    /// Compute the heading and its compass direction
    pub fn update(
        &self,
        accelerometer: Vector3<f32>,
        magnetometer: Vector3<f32>,
    ) -> Result<HeadingUpdate, CompassError> {
        let heading = self.compute_heading(accelerometer, magnetometer)?;

        Ok(HeadingUpdate {
            heading,
            direction: classify_direction(heading),
        })
    }
}
