//! Device orientation and the two compass conventions.
//!
//! Browsers report heading in one of two ways. iOS Safari exposes
//! `webkitCompassHeading`, already a compass bearing (0 = north, clockwise).
//! Everything else exposes the W3C `alpha` angle, which grows
//! counter-clockwise, so the bearing is `360 - alpha`. The convention is
//! carried as a [`HeadingReading`] tag and resolved once, here, so the
//! projection code only ever sees compass bearings.

use serde::{Deserialize, Serialize};
use skystory_core::angle::{clamp_pm_90, wrap_0_360};

/// A raw heading value tagged with the convention it was reported in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "convention", content = "value", rename_all = "snake_case")]
pub enum HeadingReading {
    /// Compass bearing, 0 = north, increasing clockwise.
    ClockwiseFromNorth(f64),
    /// W3C `alpha`, increasing counter-clockwise.
    CcwAlpha(f64),
}

impl HeadingReading {
    /// Compass bearing in [0, 360).
    pub fn compass_degrees(&self) -> f64 {
        match *self {
            HeadingReading::ClockwiseFromNorth(v) => wrap_0_360(v),
            HeadingReading::CcwAlpha(alpha) => wrap_0_360(360.0 - alpha),
        }
    }
}

/// One `deviceorientation` event as delivered by the browser.
///
/// Any field may be missing. `beta` is the front-to-back tilt, 90 when the
/// phone is held upright facing the horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationReading {
    #[serde(alias = "webkitCompassHeading")]
    pub webkit_compass_heading: Option<f64>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

impl OrientationReading {
    pub fn compass(heading: f64, beta: f64) -> Self {
        Self {
            webkit_compass_heading: Some(heading),
            alpha: None,
            beta: Some(beta),
        }
    }

    pub fn w3c(alpha: f64, beta: f64) -> Self {
        Self {
            webkit_compass_heading: None,
            alpha: Some(alpha),
            beta: Some(beta),
        }
    }

    /// Picks the heading convention from the fields present, preferring the
    /// compass heading. Non-finite values count as absent.
    pub fn heading(&self) -> Option<HeadingReading> {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        finite(self.webkit_compass_heading)
            .map(HeadingReading::ClockwiseFromNorth)
            .or_else(|| finite(self.alpha).map(HeadingReading::CcwAlpha))
    }

    /// Resolves the reading into a camera attitude, or `None` when it
    /// carries no usable heading. A missing tilt means the camera faces the
    /// horizon.
    pub fn attitude(&self) -> Option<DeviceAttitude> {
        let heading = self.heading()?;
        let pitch = self
            .beta
            .filter(|b| b.is_finite())
            .map_or(0.0, DeviceAttitude::pitch_from_beta);
        Some(DeviceAttitude::new(heading.compass_degrees(), pitch))
    }
}

/// Where the camera points: compass heading and elevation above the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceAttitude {
    heading_deg: f64,
    pitch_deg: f64,
}

impl DeviceAttitude {
    pub fn new(heading_deg: f64, pitch_deg: f64) -> Self {
        Self {
            heading_deg: wrap_0_360(heading_deg),
            pitch_deg: clamp_pm_90(pitch_deg),
        }
    }

    /// Camera elevation from the raw `beta` tilt, clamped to [-90, 90].
    pub fn pitch_from_beta(beta: f64) -> f64 {
        clamp_pm_90(beta - 90.0)
    }

    pub fn heading_degrees(&self) -> f64 {
        self.heading_deg
    }

    pub fn pitch_degrees(&self) -> f64 {
        self.pitch_deg
    }
}

impl std::fmt::Display for DeviceAttitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "heading {:.1}°, pitch {:+.1}°",
            self.heading_deg, self.pitch_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_passes_through() {
        assert_eq!(HeadingReading::ClockwiseFromNorth(90.0).compass_degrees(), 90.0);
        assert_eq!(HeadingReading::ClockwiseFromNorth(360.0).compass_degrees(), 0.0);
        assert_eq!(HeadingReading::ClockwiseFromNorth(-10.0).compass_degrees(), 350.0);
    }

    #[test]
    fn test_alpha_is_mirrored() {
        assert_eq!(HeadingReading::CcwAlpha(90.0).compass_degrees(), 270.0);
        assert_eq!(HeadingReading::CcwAlpha(270.0).compass_degrees(), 90.0);
        assert_eq!(HeadingReading::CcwAlpha(0.0).compass_degrees(), 0.0);
        assert_eq!(HeadingReading::CcwAlpha(360.0).compass_degrees(), 0.0);
    }

    #[test]
    fn test_compass_heading_preferred() {
        let reading = OrientationReading {
            webkit_compass_heading: Some(45.0),
            alpha: Some(45.0),
            beta: Some(90.0),
        };
        assert_eq!(
            reading.heading(),
            Some(HeadingReading::ClockwiseFromNorth(45.0))
        );
        assert_eq!(reading.attitude().unwrap().heading_degrees(), 45.0);
    }

    #[test]
    fn test_falls_back_to_alpha() {
        let reading = OrientationReading {
            webkit_compass_heading: Some(f64::NAN),
            alpha: Some(30.0),
            beta: None,
        };
        assert_eq!(reading.heading(), Some(HeadingReading::CcwAlpha(30.0)));
        let attitude = reading.attitude().unwrap();
        assert_eq!(attitude.heading_degrees(), 330.0);
        assert_eq!(attitude.pitch_degrees(), 0.0);
    }

    #[test]
    fn test_no_heading_fields() {
        let reading = OrientationReading {
            beta: Some(120.0),
            ..Default::default()
        };
        assert!(reading.heading().is_none());
        assert!(reading.attitude().is_none());
    }

    #[test]
    fn test_pitch_from_beta() {
        assert_eq!(DeviceAttitude::pitch_from_beta(90.0), 0.0);
        assert_eq!(DeviceAttitude::pitch_from_beta(135.0), 45.0);
        assert_eq!(DeviceAttitude::pitch_from_beta(0.0), -90.0);
        assert_eq!(DeviceAttitude::pitch_from_beta(-180.0), -90.0);
        assert_eq!(DeviceAttitude::pitch_from_beta(270.0), 90.0);
    }

    #[test]
    fn test_reading_from_browser_json() {
        let reading: OrientationReading =
            serde_json::from_str(r#"{"webkitCompassHeading": 12.5, "beta": 100}"#).unwrap();
        assert_eq!(reading.webkit_compass_heading, Some(12.5));
        assert_eq!(reading.alpha, None);
        let attitude = reading.attitude().unwrap();
        assert_eq!(attitude.heading_degrees(), 12.5);
        assert_eq!(attitude.pitch_degrees(), 10.0);
    }

    #[test]
    fn test_heading_tag_json() {
        let json = serde_json::to_value(HeadingReading::CcwAlpha(10.0)).unwrap();
        assert_eq!(json["convention"], "ccw_alpha");
        assert_eq!(json["value"], 10.0);
    }
}
