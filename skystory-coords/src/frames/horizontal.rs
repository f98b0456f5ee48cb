use crate::{CoordError, CoordResult};
use skystory_core::angle::{clamp_pm_90, wrap_0_360};
use skystory_core::constants::DEGREES_PER_HOUR;
use skystory_core::math::clamped_acos;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Azimuth/altitude as seen by an observer.
///
/// Azimuth is measured from north through east and always lies in [0, 360);
/// altitude lies in [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalPosition {
    azimuth_deg: f64,
    altitude_deg: f64,
}

impl HorizontalPosition {
    /// Azimuth is wrapped into [0, 360); altitude must already be in range.
    pub fn from_degrees(azimuth_deg: f64, altitude_deg: f64) -> CoordResult<Self> {
        if !azimuth_deg.is_finite() || !altitude_deg.is_finite() {
            return Err(CoordError::invalid_coordinate(
                "azimuth and altitude must be finite",
            ));
        }
        if altitude_deg.abs() > 90.0 {
            return Err(CoordError::invalid_coordinate(format!(
                "altitude {}° outside [-90, 90]",
                altitude_deg
            )));
        }
        Ok(Self {
            azimuth_deg: wrap_0_360(azimuth_deg),
            altitude_deg,
        })
    }

    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth_deg
    }

    pub fn altitude_degrees(&self) -> f64 {
        self.altitude_deg
    }

    pub fn zenith_angle_degrees(&self) -> f64 {
        90.0 - self.altitude_deg
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }

    pub fn cardinal_direction(&self) -> &'static str {
        let az_deg = self.azimuth_deg;
        if !(22.5..337.5).contains(&az_deg) {
            "N"
        } else if az_deg < 67.5 {
            "NE"
        } else if az_deg < 112.5 {
            "E"
        } else if az_deg < 157.5 {
            "SE"
        } else if az_deg < 202.5 {
            "S"
        } else if az_deg < 247.5 {
            "SW"
        } else if az_deg < 292.5 {
            "W"
        } else {
            "NW"
        }
    }
}

impl std::fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Horizontal(Az={:.2}° {}, Alt={:.2}°)",
            self.azimuth_deg,
            self.cardinal_direction(),
            self.altitude_deg
        )
    }
}

/// Converts equatorial coordinates to azimuth/altitude for a given LST.
///
/// ```text
/// HA       = (LST - RA) × 15°
/// sin(alt) = sin(dec)·sin(lat) + cos(dec)·cos(lat)·cos(HA)
/// cos(Az)  = (sin(dec) - sin(alt)·sin(lat)) / (cos(alt)·cos(lat))
/// Az       = 360° - Az   when sin(HA) > 0
/// ```
///
/// The `cos(Az)` ratio is clamped to [-1, 1] before `acos`. When the
/// denominator vanishes (observer at a pole, star at the zenith) the azimuth
/// is ill-conditioned and may jitter from frame to frame; the altitude stays
/// exact. A 0/0 ratio yields azimuth 0.
pub fn horizontal_from_lst(
    ra_hours: f64,
    dec_deg: f64,
    lat_deg: f64,
    lst_hours: f64,
) -> HorizontalPosition {
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let hour_angle = ((lst_hours - ra_hours) * DEGREES_PER_HOUR).to_radians();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * hour_angle.cos()).clamp(-1.0, 1.0);
    let altitude = sin_alt.asin();

    let cos_az = (sin_dec - sin_alt * sin_lat) / (altitude.cos() * cos_lat);
    let mut azimuth_deg = clamped_acos(cos_az).to_degrees();

    // acos only covers [0°, 180°]; a star west of the meridian is in the other half.
    if hour_angle.sin() > 0.0 {
        azimuth_deg = 360.0 - azimuth_deg;
    }

    HorizontalPosition {
        azimuth_deg: wrap_0_360(azimuth_deg),
        altitude_deg: clamp_pm_90(altitude.to_degrees()),
    }
}
