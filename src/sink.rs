//! Presentation side of the compass service

use crate::notification::Notification;
use crate::types::HeadingUpdate;

/// Receives what the compass service has to show
///
/// Implemented by the host: a screen that renders the heading text and
/// rotates a needle, and a notification tray.
pub trait PresentationSink {
    /// Broadcast a freshly computed heading
    fn publish(&mut self, update: &HeadingUpdate);

    /// Post or replace the persistent notification
    fn show_notification(&mut self, notification: &Notification);

    /// Remove the notification with the given id
    fn cancel_notification(&mut self, id: u32);
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn publish(&mut self, update: &HeadingUpdate) {
        (**self).publish(update);
    }

    fn show_notification(&mut self, notification: &Notification) {
        (**self).show_notification(notification);
    }

    fn cancel_notification(&mut self, id: u32) {
        (**self).cancel_notification(id);
    }
}
