//! Core types and settings for the compass heading library

use core::fmt;

use nalgebra::ComplexField;

use crate::direction::Direction;
use crate::error::CompassError;
use crate::math::{FULL_TURN, normalize_degrees, round_to_places};

/// Compass heading in degrees
///
/// Always finite and inside [0, 360). 0° is north, angles grow clockwise
/// (90° is east).
///
/// # Example
/// ```
/// use compass_heading::Heading;
///
/// let heading = Heading::from_degrees(-90.0, 2).unwrap();
/// assert_eq!(heading.degrees(), 270.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Heading(f64);

impl Heading {
    /// North
    pub const NORTH: Heading = Heading(0.0);

    /// Build a heading from any finite angle in degrees
    ///
    /// The angle is wrapped into [0, 360) and rounded to `decimal_places`
    /// with ties to even. `decimal_places` is capped at
    /// [`MAX_DECIMAL_PLACES`](crate::MAX_DECIMAL_PLACES). A value that rounds
    /// up to 360 folds back to 0.
    pub fn from_degrees(degrees: f64, decimal_places: u32) -> Result<Self, CompassError> {
        if !degrees.is_finite() {
            return Err(CompassError::NonFiniteSample);
        }

        let rounded = round_to_places(normalize_degrees(degrees), decimal_places);
        if !rounded.is_finite() {
            return Err(CompassError::NonFiniteSample);
        }
        if rounded >= FULL_TURN {
            return Ok(Self::NORTH);
        }

        Ok(Heading(rounded))
    }

    /// Heading angle in degrees
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Rotation, in degrees, that points an on-screen needle north
    pub fn needle_rotation(self) -> f32 {
        -(self.0 as f32)
    }
}

/// Whole angles keep one decimal place: `90.0`, `359.71`
impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if ComplexField::fract(self.0) == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One heading as handed to the presentation sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingUpdate {
    pub heading: Heading,
    pub direction: Direction,
}

impl HeadingUpdate {
    /// Rotation, in degrees, applied to the compass needle
    pub fn needle_rotation(&self) -> f32 {
        self.heading.needle_rotation()
    }
}

/// Renders as `"{angle}  {direction}"`, the on-screen heading label
impl fmt::Display for HeadingUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.heading, self.direction)
    }
}

/// Kind of sensor that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Accelerometer,
    MagneticField,
    /// Any sensor the compass does not consume
    Other,
}

/// Raw sample delivered by the host's sensor source
///
/// `values` holds at least the three axis readings; some hosts append extra
/// fields (accuracy, uncalibrated bias) which are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorEvent<'a> {
    pub kind: SensorKind,
    pub values: &'a [f32],
}

impl<'a> SensorEvent<'a> {
    pub fn new(kind: SensorKind, values: &'a [f32]) -> Self {
        Self { kind, values }
    }
}

/// Which sensors the host found when the service was created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorAvailability {
    pub accelerometer: bool,
    pub magnetometer: bool,
}

impl Default for SensorAvailability {
    fn default() -> Self {
        Self {
            accelerometer: true,
            magnetometer: true,
        }
    }
}

/// Compass settings
///
/// # Example
/// ```
/// use compass_heading::CompassSettings;
///
/// let settings = CompassSettings {
///     declination: 11.5,       // true north is 11.5° east of magnetic north
///     decimal_places: 1,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassSettings {
    /// Magnetic declination in degrees, added to the magnetic azimuth
    ///
    /// Zero reports magnetic north.
    pub declination: f64,
    /// Decimal places kept in the published heading (typically 2)
    pub decimal_places: u32,
    /// Smallest horizontal field magnitude accepted when building the
    /// rotation matrix
    ///
    /// Readings below this mean free fall or a field parallel to gravity.
    pub min_horizontal_field: f32,
    /// Identifier of the persistent notification
    pub notification_id: u32,
    /// Notification title
    pub title: &'static str,
}

impl Default for CompassSettings {
    fn default() -> Self {
        Self {
            declination: 0.0,
            decimal_places: 2,
            min_horizontal_field: 0.1,
            notification_id: 1,
            title: "Compass",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_wraps_and_rounds() {
        assert_eq!(Heading::from_degrees(370.256, 2).unwrap().degrees(), 10.26);
        assert_eq!(Heading::from_degrees(-0.2865, 2).unwrap().degrees(), 359.71);
        assert_eq!(Heading::from_degrees(359.999, 2).unwrap(), Heading::NORTH);
    }

    #[test]
    fn test_heading_rounds_ties_to_even() {
        assert_eq!(Heading::from_degrees(0.125, 2).unwrap().degrees(), 0.12);
        assert_eq!(Heading::from_degrees(80.125, 2).unwrap().degrees(), 80.12);
        assert_eq!(Heading::from_degrees(80.375, 2).unwrap().degrees(), 80.38);
        assert_eq!(Heading::from_degrees(-279.875, 2).unwrap().degrees(), 80.12);
    }

    #[test]
    fn test_heading_stays_finite_for_any_decimal_places() {
        for places in [16, 400, i32::MAX as u32 + 1, u32::MAX] {
            let heading = Heading::from_degrees(123.4, places).unwrap();
            assert!(heading.degrees().is_finite(), "{} places", places);
            assert!((heading.degrees() - 123.4).abs() < 1e-9);
            assert_eq!(crate::direction::classify_direction(heading), Direction::SE);
        }
    }

    #[test]
    fn test_heading_display_keeps_a_decimal() {
        let mut text: heapless::String<16> = heapless::String::new();
        core::fmt::write(&mut text, format_args!("{}", Heading::NORTH)).unwrap();
        assert_eq!(text.as_str(), "0.0");

        text.clear();
        let heading = Heading::from_degrees(90.0, 2).unwrap();
        core::fmt::write(&mut text, format_args!("{}", heading)).unwrap();
        assert_eq!(text.as_str(), "90.0");

        text.clear();
        let heading = Heading::from_degrees(359.71, 2).unwrap();
        core::fmt::write(&mut text, format_args!("{}", heading)).unwrap();
        assert_eq!(text.as_str(), "359.71");
    }

    #[test]
    fn test_heading_rejects_non_finite() {
        assert_eq!(
            Heading::from_degrees(f64::NAN, 2),
            Err(CompassError::NonFiniteSample)
        );
        assert_eq!(
            Heading::from_degrees(f64::NEG_INFINITY, 2),
            Err(CompassError::NonFiniteSample)
        );
    }

    #[test]
    fn test_needle_rotation_is_negated_angle() {
        let update = HeadingUpdate {
            heading: Heading::from_degrees(45.5, 2).unwrap(),
            direction: Direction::NE,
        };
        assert_eq!(update.needle_rotation(), -45.5);
    }

    #[test]
    fn test_default_settings() {
        let settings = CompassSettings::default();
        assert_eq!(settings.declination, 0.0);
        assert_eq!(settings.decimal_places, 2);
        assert_eq!(settings.min_horizontal_field, 0.1);
        assert_eq!(settings.notification_id, 1);
    }
}
