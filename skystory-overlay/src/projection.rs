//! Linear horizontal-to-screen projection.
//!
//! The camera image is treated as a flat patch of sky centred on the device
//! attitude. Angular offsets from the view centre map to pixel offsets with
//! a fixed scale per axis:
//!
//! ```text
//! hfov  = vfov * width / height
//! x     = width/2  + Δaz  * (width  / hfov)
//! y     = height/2 - Δalt * (height / vfov)
//! ```
//!
//! `Δaz` is reduced to the shortest arc so a view centred near north wraps
//! correctly. No lens or spherical correction is applied; at phone-camera
//! fields of view the error is well below a marker radius near the centre.

use serde::{Deserialize, Serialize};
use skystory_coords::HorizontalPosition;
use skystory_core::angle::{clamp_pm_90, shortest_arc_deg, wrap_0_360};

use crate::errors::{OverlayError, OverlayResult};
use crate::heading::DeviceAttitude;

/// Drawing surface size in pixels. Only [`Viewport::new`] builds one, so both
/// sides are always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    width_px: f64,
    height_px: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64) -> OverlayResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width_px) || !valid(height_px) {
            return Err(OverlayError::InvalidViewport {
                width: width_px,
                height: height_px,
            });
        }
        Ok(Self {
            width_px,
            height_px,
        })
    }

    pub fn width(&self) -> f64 {
        self.width_px
    }

    pub fn height(&self) -> f64 {
        self.height_px
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: self.width_px / 2.0,
            y: self.height_px / 2.0,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width_px / self.height_px
    }

    /// True when the point lies inside the viewport grown by `margin_px` on
    /// every side.
    pub fn contains(&self, point: ScreenPoint, margin_px: f64) -> bool {
        point.x >= -margin_px
            && point.x <= self.width_px + margin_px
            && point.y >= -margin_px
            && point.y <= self.height_px + margin_px
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// The sky direction drawn at the screen centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewCenter {
    pub azimuth_deg: f64,
    pub altitude_deg: f64,
}

impl ViewCenter {
    pub fn new(azimuth_deg: f64, altitude_deg: f64) -> Self {
        Self {
            azimuth_deg: wrap_0_360(azimuth_deg),
            altitude_deg: clamp_pm_90(altitude_deg),
        }
    }
}

impl From<&DeviceAttitude> for ViewCenter {
    fn from(attitude: &DeviceAttitude) -> Self {
        Self::new(attitude.heading_degrees(), attitude.pitch_degrees())
    }
}

/// Signed azimuth offset of a star from the view centre, in [-180, 180].
pub fn azimuth_delta(star_az_deg: f64, view_az_deg: f64) -> f64 {
    shortest_arc_deg(star_az_deg - view_az_deg)
}

/// Per-frame projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    viewport: Viewport,
    center: ViewCenter,
    vertical_fov_deg: f64,
    horizontal_fov_deg: f64,
    px_per_deg_x: f64,
    px_per_deg_y: f64,
}

impl Projection {
    /// `vertical_fov_deg` must be positive; [`crate::OverlayConfig::validate`]
    /// enforces this for configured values.
    pub fn new(viewport: Viewport, center: ViewCenter, vertical_fov_deg: f64) -> Self {
        let horizontal_fov_deg = vertical_fov_deg * viewport.aspect_ratio();
        Self {
            viewport,
            center,
            vertical_fov_deg,
            horizontal_fov_deg,
            px_per_deg_x: viewport.width() / horizontal_fov_deg,
            px_per_deg_y: viewport.height() / vertical_fov_deg,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn center(&self) -> &ViewCenter {
        &self.center
    }

    pub fn vertical_fov_degrees(&self) -> f64 {
        self.vertical_fov_deg
    }

    pub fn horizontal_fov_degrees(&self) -> f64 {
        self.horizontal_fov_deg
    }

    pub fn pixels_per_degree(&self) -> (f64, f64) {
        (self.px_per_deg_x, self.px_per_deg_y)
    }

    pub fn project_degrees(&self, azimuth_deg: f64, altitude_deg: f64) -> ScreenPoint {
        let d_az = azimuth_delta(azimuth_deg, self.center.azimuth_deg);
        let d_alt = altitude_deg - self.center.altitude_deg;
        let c = self.viewport.center();
        ScreenPoint {
            x: c.x + d_az * self.px_per_deg_x,
            y: c.y - d_alt * self.px_per_deg_y,
        }
    }

    pub fn project(&self, position: &HorizontalPosition) -> ScreenPoint {
        self.project_degrees(position.azimuth_degrees(), position.altitude_degrees())
    }

    pub fn is_visible(&self, point: ScreenPoint, margin_px: f64) -> bool {
        self.viewport.contains(point, margin_px)
    }
}
