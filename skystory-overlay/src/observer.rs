use serde::Serialize;
use skystory_core::ObserverLocation;

use crate::heading::DeviceAttitude;

/// Latest sensor snapshot. Each half is replaced as a whole value when a new
/// reading arrives and stays `None` until first acquired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ObserverState {
    location: Option<ObserverLocation>,
    attitude: Option<DeviceAttitude>,
}

impl ObserverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<&ObserverLocation> {
        self.location.as_ref()
    }

    pub fn attitude(&self) -> Option<&DeviceAttitude> {
        self.attitude.as_ref()
    }

    pub fn set_location(&mut self, location: ObserverLocation) {
        self.location = Some(location);
    }

    pub fn set_attitude(&mut self, attitude: DeviceAttitude) {
        self.attitude = Some(attitude);
    }

    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    pub fn has_attitude(&self) -> bool {
        self.attitude.is_some()
    }

    /// Both halves, or `None` while either is still missing.
    pub fn snapshot(&self) -> Option<(ObserverLocation, DeviceAttitude)> {
        Some((self.location?, self.attitude?))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
