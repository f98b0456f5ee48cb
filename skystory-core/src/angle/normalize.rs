//! Wrapping and clamping for the three angular ranges the overlay uses.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Azimuth, compass heading | [0, 360) | [`wrap_0_360`] |
//! | Sidereal time, right ascension | [0, 24) | [`wrap_0_24`] |
//! | Azimuth difference | [-180, +180] | [`shortest_arc_deg`] |
//! | Altitude, pitch, latitude | [-90, +90] | [`clamp_pm_90`] |
//!
//! The wrapping functions go through [`crate::math::fmod`], which keeps the
//! sign of the dividend, and then shift negative results into range.

use crate::math::fmod;

/// Wraps an angle in degrees to [0, 360).
///
/// ```
/// use skystory_core::angle::wrap_0_360;
///
/// assert_eq!(wrap_0_360(-90.0), 270.0);
/// assert_eq!(wrap_0_360(360.0), 0.0);
/// ```
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    let w = fmod(deg, 360.0);
    let w = if w < 0.0 { w + 360.0 } else { w };
    // -1e-17 + 360.0 rounds to 360.0
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Wraps a time-like angle in hours to [0, 24).
#[inline]
pub fn wrap_0_24(hours: f64) -> f64 {
    let w = fmod(hours, 24.0);
    let w = if w < 0.0 { w + 24.0 } else { w };
    if w >= 24.0 {
        0.0
    } else {
        w
    }
}

/// Reduces an angular difference in degrees to the shortest signed arc.
///
/// The result lies in [-180, +180]. A raw difference past ±180 has 360
/// added or subtracted so that points either side of north (359° and 1°)
/// come out 2° apart instead of 358°.
///
/// ```
/// use skystory_core::angle::shortest_arc_deg;
///
/// assert_eq!(shortest_arc_deg(1.0 - 359.0), 2.0);
/// assert_eq!(shortest_arc_deg(359.0 - 1.0), -2.0);
/// assert_eq!(shortest_arc_deg(180.0), 180.0);
/// ```
#[inline]
pub fn shortest_arc_deg(delta: f64) -> f64 {
    let d = fmod(delta, 360.0);
    if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        d
    }
}

/// Clamps an angle in degrees to [-90, +90].
///
/// Used for quantities with hard physical limits: latitude, altitude and
/// camera pitch cannot go past the poles or the zenith.
#[inline]
pub fn clamp_pm_90(deg: f64) -> f64 {
    deg.clamp(-90.0, 90.0)
}
