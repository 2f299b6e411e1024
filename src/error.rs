//! Error type for the compass heading library

use thiserror::Error;

/// Errors produced while turning sensor samples into a heading
///
/// None of these are fatal to [`CompassService`](crate::CompassService): it
/// logs them and drops the sample, so the last published heading stays on
/// screen until a usable sample arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompassError {
    /// A sample component was NaN or infinite
    #[error("sensor sample contains a non-finite component")]
    NonFiniteSample,

    /// Gravity and the geomagnetic field do not span a horizontal plane
    ///
    /// Happens in free fall, when the field is parallel to gravity, or when
    /// either vector is zero.
    #[error("gravity and geomagnetic vectors are degenerate")]
    DegenerateField,

    /// A sensor event carried fewer than three axis values
    #[error("sensor event has {len} values, expected at least 3")]
    MalformedEvent {
        /// Number of values in the rejected event
        len: usize,
    },

    /// A notification text did not fit its fixed capacity
    #[error("notification text exceeds its capacity")]
    TextOverflow,
}
