#![no_std]

//! Compass Heading - magnetic heading from an accelerometer and a magnetometer
//!
//! The library fuses the latest gravity and geomagnetic samples into a
//! device-to-world rotation matrix, reads the azimuth from it and publishes
//! it as a heading in [0°, 360°) together with an eight-point compass
//! direction.
//!
//! # Features
//!
//! - Tilt-compensated heading from a gravity/geomagnetic rotation matrix
//! - Eight-sector direction label from an explicit sector table
//! - Pluggable rotation routine through [`RotationProvider`]
//! - Host-agnostic [`CompassService`] with broadcast and background
//!   notification through [`PresentationSink`]
//! - `#![no_std]`, no allocation
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use compass_heading::{Direction, HeadingCalculator};
//!
//! let calculator = HeadingCalculator::new();
//!
//! // Sensor readings
//! let accelerometer = Vector3::new(0.0, 0.0, 9.81);  // m/s², lying flat
//! let magnetometer = Vector3::new(0.0, 22.0, -40.0); // µT
//!
//! let heading = calculator.compute_heading(accelerometer, magnetometer).unwrap();
//! let direction = calculator.classify_direction(heading);
//!
//! assert_eq!(heading.degrees(), 0.0);
//! assert_eq!(direction, Direction::N);
//! ```

pub mod compass;
pub mod direction;
mod error;
mod math;
pub mod notification;
pub mod rotation;
pub mod service;
mod sink;
mod types;

// Re-export all public types and functions
pub use compass::HeadingCalculator;
pub use direction::{Direction, classify_direction};
pub use error::CompassError;
pub use math::{MAX_DECIMAL_PLACES, RAD_TO_DEG, Vector3Ext, normalize_degrees, round_to_places};
pub use notification::{Notification, NotificationAction};
pub use rotation::{GravityMagneticRotation, Orientation, RotationProvider, orientation};
pub use service::{CompassService, LifecycleEvent, ServiceState, StartMode};
pub use sink::PresentationSink;
pub use types::*;
