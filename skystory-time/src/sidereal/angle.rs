use skystory_core::angle::wrap_0_24;
use skystory_core::constants::DEGREES_PER_HOUR;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A time-like angle held in hours, always in [0, 24).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealAngle {
    hours: f64,
}

impl SiderealAngle {
    pub fn from_hours(hours: f64) -> Self {
        Self {
            hours: wrap_0_24(hours),
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_hours(degrees / DEGREES_PER_HOUR)
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn degrees(&self) -> f64 {
        self.hours * DEGREES_PER_HOUR
    }

    pub fn radians(&self) -> f64 {
        self.degrees().to_radians()
    }

    /// Hour angle of a target in hours: positive west of the meridian.
    ///
    /// Not reduced; callers take sines and cosines of it.
    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        self.hours - target_ra_hours
    }
}

impl fmt::Display for SiderealAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_seconds = self.hours * 3600.0;
        let h = (total_seconds / 3600.0).floor();
        let m = ((total_seconds - h * 3600.0) / 60.0).floor();
        let s = total_seconds - h * 3600.0 - m * 60.0;
        write!(f, "{:02}h{:02}m{:06.3}s", h as u32, m as u32, s)
    }
}
