//! Sensor acquisition state machine.
//!
//! ```text
//! AwaitingPermission --granted--> AwaitingLocation --fix--> AwaitingOrientation --reading--> Ready
//!        |    ^                          |
//!     denied  retry                   failed
//!        v    |                          v
//!   PermissionDenied             LocationUnavailable
//! ```
//!
//! The machine only moves forward. [`Acquisition::reset`] is the one way
//! back to the start. `LocationUnavailable` is terminal until reset;
//! `PermissionDenied` blocks until the user asks to retry.
//!
//! Readings are retained even when they do not cause a transition: a
//! location fix that arrives before the permission prompt is answered, or
//! an orientation reading that arrives before the fix, is kept so that the
//! machine can skip straight past the matching state later.

use serde::{Deserialize, Serialize};
use skystory_core::ObserverLocation;

use crate::heading::OrientationReading;
use crate::observer::ObserverState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcquisitionState {
    #[default]
    AwaitingPermission,
    AwaitingLocation,
    AwaitingOrientation,
    Ready,
    LocationUnavailable,
    PermissionDenied,
}

impl AcquisitionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, AcquisitionState::Ready)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AcquisitionState::LocationUnavailable)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AcquisitionState::AwaitingPermission => "awaiting-permission",
            AcquisitionState::AwaitingLocation => "awaiting-location",
            AcquisitionState::AwaitingOrientation => "awaiting-orientation",
            AcquisitionState::Ready => "ready",
            AcquisitionState::LocationUnavailable => "location-unavailable",
            AcquisitionState::PermissionDenied => "permission-denied",
        }
    }
}

impl std::fmt::Display for AcquisitionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input from the permission prompt, geolocation or orientation callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SensorEvent {
    PermissionGranted,
    PermissionDenied,
    RetryPermission,
    LocationFix { latitude: f64, longitude: f64 },
    LocationFailed,
    Orientation(OrientationReading),
}

impl SensorEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            SensorEvent::PermissionGranted => "permission-granted",
            SensorEvent::PermissionDenied => "permission-denied",
            SensorEvent::RetryPermission => "retry-permission",
            SensorEvent::LocationFix { .. } => "location-fix",
            SensorEvent::LocationFailed => "location-failed",
            SensorEvent::Orientation(_) => "orientation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The machine is in `LocationUnavailable`.
    Terminal,
    /// The event has no meaning in the current state.
    Unexpected,
    /// Latitude or longitude out of range or not finite.
    InvalidLocation,
    /// Orientation event with neither heading field.
    NoHeading,
    /// Orientation readings need the permission first.
    NoPermission,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IgnoreReason::Terminal => "location unavailable until reset",
            IgnoreReason::Unexpected => "not expected in this state",
            IgnoreReason::InvalidLocation => "invalid coordinates",
            IgnoreReason::NoHeading => "no heading field",
            IgnoreReason::NoPermission => "orientation permission not granted",
        };
        f.write_str(s)
    }
}

/// What an event did to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Entered {
        from: AcquisitionState,
        to: AcquisitionState,
    },
    /// The snapshot changed but the state did not.
    Updated,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Default)]
pub struct Acquisition {
    state: AcquisitionState,
    observer: ObserverState,
}

impl Acquisition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AcquisitionState {
        self.state
    }

    pub fn observer(&self) -> &ObserverState {
        &self.observer
    }

    pub fn reset(&mut self) {
        self.state = AcquisitionState::AwaitingPermission;
        self.observer.clear();
    }

    pub fn handle(&mut self, event: &SensorEvent) -> Transition {
        use AcquisitionState as S;

        if self.state.is_terminal() {
            return Transition::Ignored(IgnoreReason::Terminal);
        }

        match *event {
            SensorEvent::PermissionGranted => match self.state {
                S::AwaitingPermission => self.enter(self.after_permission()),
                _ => Transition::Ignored(IgnoreReason::Unexpected),
            },
            SensorEvent::PermissionDenied => match self.state {
                S::AwaitingPermission => self.enter(S::PermissionDenied),
                _ => Transition::Ignored(IgnoreReason::Unexpected),
            },
            SensorEvent::RetryPermission => match self.state {
                S::PermissionDenied => self.enter(S::AwaitingPermission),
                _ => Transition::Ignored(IgnoreReason::Unexpected),
            },
            SensorEvent::LocationFix {
                latitude,
                longitude,
            } => {
                let Ok(location) = ObserverLocation::from_degrees(latitude, longitude) else {
                    return Transition::Ignored(IgnoreReason::InvalidLocation);
                };
                self.observer.set_location(location);
                match self.state {
                    S::AwaitingLocation => self.enter(self.after_location()),
                    _ => Transition::Updated,
                }
            }
            SensorEvent::LocationFailed => {
                if self.observer.has_location() {
                    Transition::Ignored(IgnoreReason::Unexpected)
                } else {
                    self.enter(S::LocationUnavailable)
                }
            }
            SensorEvent::Orientation(reading) => {
                if matches!(self.state, S::AwaitingPermission | S::PermissionDenied) {
                    return Transition::Ignored(IgnoreReason::NoPermission);
                }
                let Some(attitude) = reading.attitude() else {
                    return Transition::Ignored(IgnoreReason::NoHeading);
                };
                self.observer.set_attitude(attitude);
                match self.state {
                    S::AwaitingOrientation => self.enter(S::Ready),
                    _ => Transition::Updated,
                }
            }
        }
    }

    fn after_permission(&self) -> AcquisitionState {
        if self.observer.has_location() {
            self.after_location()
        } else {
            AcquisitionState::AwaitingLocation
        }
    }

    fn after_location(&self) -> AcquisitionState {
        if self.observer.has_attitude() {
            AcquisitionState::Ready
        } else {
            AcquisitionState::AwaitingOrientation
        }
    }

    fn enter(&mut self, to: AcquisitionState) -> Transition {
        let from = self.state;
        self.state = to;
        Transition::Entered { from, to }
    }
}
