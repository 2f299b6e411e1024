//! Persistent notification shown while the compass runs in the background

use core::fmt::{self, Write};

use heapless::String;

use crate::error::CompassError;
use crate::types::{Heading, HeadingUpdate};

/// Capacity of the notification title
pub const TITLE_CAPACITY: usize = 32;
/// Capacity of the notification body
pub const BODY_CAPACITY: usize = 64;

/// Direction text shown before the first heading is known
pub const NOT_AVAILABLE: &str = "not available";

/// Action button offered by the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    /// Stops the compass service and removes the notification
    Stop,
}

impl NotificationAction {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationAction::Stop => "Stop",
        }
    }
}

/// Notification content: title, "direction under angle" body, stop action
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: String<TITLE_CAPACITY>,
    pub body: String<BODY_CAPACITY>,
    pub action: NotificationAction,
}

impl Notification {
    /// Notification for a known heading
    ///
    /// # Example
    /// ```
    /// use compass_heading::{Direction, Heading, HeadingUpdate, Notification};
    ///
    /// let update = HeadingUpdate {
    ///     heading: Heading::from_degrees(92.5, 2).unwrap(),
    ///     direction: Direction::E,
    /// };
    /// let notification = Notification::for_update(1, "Compass", &update).unwrap();
    /// assert_eq!(notification.body.as_str(), "You are facing E at 92.5");
    /// ```
    pub fn for_update(id: u32, title: &str, update: &HeadingUpdate) -> Result<Self, CompassError> {
        Self::build(id, title, update.direction, update.heading)
    }

    /// Placeholder shown when the service starts, before any sample
    pub fn placeholder(id: u32, title: &str) -> Result<Self, CompassError> {
        Self::build(id, title, NOT_AVAILABLE, Heading::NORTH)
    }

    fn build(
        id: u32,
        title: &str,
        direction: impl fmt::Display,
        heading: Heading,
    ) -> Result<Self, CompassError> {
        let mut title_text = String::new();
        title_text
            .push_str(title)
            .map_err(|_| CompassError::TextOverflow)?;

        let mut body = String::new();
        write!(body, "You are facing {} at {}", direction, heading)
            .map_err(|_| CompassError::TextOverflow)?;

        Ok(Self {
            id,
            title: title_text,
            body,
            action: NotificationAction::Stop,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn test_placeholder_body() {
        let notification = Notification::placeholder(1, "Compass").unwrap();
        assert_eq!(notification.id, 1);
        assert_eq!(notification.title.as_str(), "Compass");
        assert_eq!(notification.body.as_str(), "You are facing not available at 0.0");
        assert_eq!(notification.action, NotificationAction::Stop);
        assert_eq!(notification.action.label(), "Stop");
    }

    #[test]
    fn test_body_carries_direction_and_angle() {
        let update = HeadingUpdate {
            heading: Heading::from_degrees(359.71, 2).unwrap(),
            direction: Direction::N,
        };
        let notification = Notification::for_update(7, "Compass", &update).unwrap();
        assert_eq!(notification.id, 7);
        assert_eq!(notification.body.as_str(), "You are facing N at 359.71");
    }

    #[test]
    fn test_title_overflow_is_reported() {
        let long_title = "a compass title that is far too long to fit";
        assert_eq!(
            Notification::placeholder(1, long_title),
            Err(CompassError::TextOverflow)
        );
    }
}
