//! Compass service: sensor listener, heading broadcast and notification
//!
//! The host forwards sensor events and lifecycle changes; the service keeps
//! the latest accelerometer and magnetometer readings, recomputes the heading
//! after every stored sample and hands the result to a [`PresentationSink`].
//!
//! # Example
//! ```
//! use compass_heading::{
//!     CompassService, HeadingCalculator, HeadingUpdate, LifecycleEvent, Notification,
//!     PresentationSink, SensorAvailability, SensorEvent, SensorKind,
//! };
//!
//! #[derive(Default)]
//! struct Screen {
//!     last: Option<HeadingUpdate>,
//! }
//!
//! impl PresentationSink for Screen {
//!     fn publish(&mut self, update: &HeadingUpdate) {
//!         self.last = Some(*update);
//!     }
//!     fn show_notification(&mut self, _notification: &Notification) {}
//!     fn cancel_notification(&mut self, _id: u32) {}
//! }
//!
//! let mut service = CompassService::new(HeadingCalculator::new(), Screen::default());
//! service.on_create(SensorAvailability::default());
//! service.on_lifecycle(LifecycleEvent::Resumed);
//!
//! service.on_sensor_changed(Some(&SensorEvent::new(SensorKind::Accelerometer, &[0.0, 0.0, 9.81])));
//! service.on_sensor_changed(Some(&SensorEvent::new(SensorKind::MagneticField, &[0.0, 22.0, -40.0])));
//!
//! let update = service.sink().last.unwrap();
//! assert_eq!(update.heading.degrees(), 0.0);
//! ```

use log::{debug, info, trace, warn};
use nalgebra::Vector3;

use crate::compass::HeadingCalculator;
use crate::error::CompassError;
use crate::math::Vector3Ext;
use crate::notification::Notification;
use crate::rotation::{GravityMagneticRotation, RotationProvider};
use crate::sink::PresentationSink;
use crate::types::{HeadingUpdate, SensorAvailability, SensorEvent, SensorKind};

/// Number of axis values consumed from each sensor event
pub const NUM_OF_AXES: usize = 3;

/// Service run state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// Constructed, `on_create` not yet called
    Idle,
    Running,
    /// Stopped from the notification; sensor events are ignored
    Stopped,
}

/// What the host should do if it kills the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Recreate the service once resources allow, without the last command
    Sticky,
}

/// Screen visibility changes reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The compass screen came to the front
    Resumed,
    /// The compass screen went to the background
    Paused,
    /// The compass screen was torn down
    Destroyed,
}

/// Long-running compass service
pub struct CompassService<S, R = GravityMagneticRotation> {
    calculator: HeadingCalculator<R>,
    sink: S,
    state: ServiceState,
    availability: SensorAvailability,
    /// Latest readings, overwritten in place per event
    accelerometer: Option<Vector3<f32>>,
    magnetometer: Option<Vector3<f32>>,
    background: bool,
    notification_visible: bool,
    last_update: Option<HeadingUpdate>,
}

impl<S: PresentationSink, R: RotationProvider> CompassService<S, R> {
    pub fn new(calculator: HeadingCalculator<R>, sink: S) -> Self {
        Self {
            calculator,
            sink,
            state: ServiceState::Idle,
            availability: SensorAvailability::default(),
            accelerometer: None,
            magnetometer: None,
            background: false,
            notification_visible: false,
            last_update: None,
        }
    }

    /// Start the service in the foreground with a placeholder notification
    ///
    /// Missing sensors are tolerated: the service runs, it just never
    /// publishes a heading.
    pub fn on_create(&mut self, availability: SensorAvailability) {
        self.availability = availability;

        if !availability.accelerometer {
            warn!("No accelerometer available, compass heading disabled");
        }
        if !availability.magnetometer {
            warn!("No magnetometer available, compass heading disabled");
        }

        self.state = ServiceState::Running;
        info!("Compass service created");

        let settings = self.calculator.settings();
        match Notification::placeholder(settings.notification_id, settings.title) {
            Ok(notification) => self.show(&notification),
            Err(err) => warn!("Placeholder notification not shown: {}", err),
        }
    }

    /// Apply a start command carrying the optional background flag
    ///
    /// A missing flag means foreground. Starting a stopped service creates
    /// it again with the sensors it last reported.
    pub fn on_start_command(&mut self, background: Option<bool>) -> StartMode {
        if self.state != ServiceState::Running {
            self.on_create(self.availability);
        }

        self.background = background.unwrap_or(false);
        debug!("Compass service background = {}", self.background);

        StartMode::Sticky
    }

    /// Translate a screen lifecycle change into a start command
    pub fn on_lifecycle(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Resumed => {
                self.on_start_command(Some(false));
            }
            LifecycleEvent::Paused => {
                self.on_start_command(Some(true));
            }
            LifecycleEvent::Destroyed => {
                info!("Compass screen destroyed, service keeps running");
            }
        }
    }

    /// Handle one sensor event
    ///
    /// Returns the heading that was published, if any. `None` events,
    /// events from other sensors and malformed events are dropped.
    pub fn on_sensor_changed(&mut self, event: Option<&SensorEvent<'_>>) -> Option<HeadingUpdate> {
        if self.state != ServiceState::Running {
            return None;
        }

        let event = event?;
        match self.store_sample(event) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                debug!("Dropped {:?} event: {}", event.kind, err);
                return None;
            }
        }

        self.update_orientation()
    }

    /// Accuracy changes do not affect the heading
    pub fn on_accuracy_changed(&mut self, kind: SensorKind, accuracy: i32) {
        trace!("{:?} accuracy changed to {}", kind, accuracy);
    }

    /// Handle the notification's stop action
    pub fn stop(&mut self) {
        if self.state == ServiceState::Stopped {
            return;
        }

        self.state = ServiceState::Stopped;
        self.accelerometer = None;
        self.magnetometer = None;
        self.last_update = None;

        let id = self.calculator.settings().notification_id;
        self.sink.cancel_notification(id);
        self.notification_visible = false;

        info!("Compass service stopped");
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn is_background(&self) -> bool {
        self.background
    }

    /// Last heading published to the sink
    pub fn last_update(&self) -> Option<HeadingUpdate> {
        self.last_update
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Copy the first three values into the matching reading buffer
    ///
    /// `Ok(false)` means the event came from a sensor the compass ignores.
    fn store_sample(&mut self, event: &SensorEvent<'_>) -> Result<bool, CompassError> {
        let slot = match event.kind {
            SensorKind::Accelerometer => &mut self.accelerometer,
            SensorKind::MagneticField => &mut self.magnetometer,
            SensorKind::Other => return Ok(false),
        };

        if event.values.len() < NUM_OF_AXES {
            return Err(CompassError::MalformedEvent {
                len: event.values.len(),
            });
        }

        let reading = Vector3::from_column_slice(&event.values[..NUM_OF_AXES]);
        if !reading.all_finite() {
            return Err(CompassError::NonFiniteSample);
        }

        *slot = Some(reading);
        Ok(true)
    }

    fn update_orientation(&mut self) -> Option<HeadingUpdate> {
        let (accelerometer, magnetometer) = (self.accelerometer?, self.magnetometer?);

        let update = match self.calculator.update(accelerometer, magnetometer) {
            Ok(update) => update,
            Err(err) => {
                debug!("No heading for current samples: {}", err);
                return None;
            }
        };

        trace!("Heading {}", update);
        self.sink.publish(&update);
        self.last_update = Some(update);

        if self.background {
            let settings = self.calculator.settings();
            match Notification::for_update(settings.notification_id, settings.title, &update) {
                Ok(notification) => self.show(&notification),
                Err(err) => warn!("Heading notification not shown: {}", err),
            }
        } else if self.notification_visible {
            self.sink
                .cancel_notification(self.calculator.settings().notification_id);
            self.notification_visible = false;
        }

        Some(update)
    }

    fn show(&mut self, notification: &Notification) {
        self.sink.show_notification(notification);
        self.notification_visible = true;
    }
}
