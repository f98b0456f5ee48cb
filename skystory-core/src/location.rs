//! Observer position from device geolocation.
//!
//! Geolocation callbacks report decimal degrees, north and east positive.
//! Values are kept in degrees because every formula downstream (sidereal
//! time longitude correction, the horizontal transform) starts from degrees.

use crate::errors::{MathErrorKind, SkyError, SkyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl ObserverLocation {
    /// Creates a location from degrees.
    ///
    /// # Errors
    ///
    /// Returns a [`SkyError::MathError`] if either value is non-finite, the
    /// latitude is outside [-90, 90] or the longitude outside [-180, 180].
    ///
    /// ```
    /// use skystory_core::ObserverLocation;
    ///
    /// let london = ObserverLocation::from_degrees(51.5, -0.13)?;
    /// assert_eq!(london.latitude_degrees(), 51.5);
    /// # Ok::<(), skystory_core::SkyError>(())
    /// ```
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> SkyResult<Self> {
        if !lat_deg.is_finite() {
            return Err(SkyError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Latitude degrees must be finite",
            ));
        }
        if !lon_deg.is_finite() {
            return Err(SkyError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Longitude degrees must be finite",
            ));
        }
        if lat_deg.abs() > 90.0 {
            return Err(SkyError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Latitude outside valid range [-90, 90] degrees",
            ));
        }
        if lon_deg.abs() > 180.0 {
            return Err(SkyError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Longitude outside valid range [-180, 180] degrees",
            ));
        }

        Ok(Self {
            latitude_deg: lat_deg,
            longitude_deg: lon_deg,
        })
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude_deg
    }

    pub fn latitude_radians(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude expressed as a time offset from Greenwich, in hours.
    pub fn longitude_hours(&self) -> f64 {
        self.longitude_deg / crate::constants::DEGREES_PER_HOUR
    }

    /// The Royal Observatory, Greenwich.
    pub fn greenwich() -> Self {
        Self {
            latitude_deg: 51.4769,
            longitude_deg: 0.0,
        }
    }

    /// The geographic north pole.
    pub fn north_pole() -> Self {
        Self {
            latitude_deg: 90.0,
            longitude_deg: 0.0,
        }
    }
}

impl std::fmt::Display for ObserverLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude_deg >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude_deg >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude_deg.abs(),
            ns,
            self.longitude_deg.abs(),
            ew
        )
    }
}
