//! Overlay tuning knobs.
//!
//! Every field has a default, so a JSON file only needs the keys it wants
//! to change:
//!
//! ```
//! use skystory_overlay::OverlayConfig;
//!
//! let config: OverlayConfig = serde_json::from_str(r#"{"max_magnitude": 2.5}"#).unwrap();
//! assert_eq!(config.max_magnitude, 2.5);
//! assert_eq!(config.vertical_fov_deg, 60.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{OverlayError, OverlayResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Vertical field of view of the camera, in degrees.
    pub vertical_fov_deg: f64,
    /// How far outside the viewport a point may fall and still be drawn.
    pub offscreen_margin_px: f64,
    /// Stars fainter than this are not drawn.
    pub max_magnitude: f64,
    pub hide_below_horizon: bool,
    pub marker_base_radius: f64,
    pub marker_min_radius: f64,
    pub marker_max_radius: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            vertical_fov_deg: 60.0,
            offscreen_margin_px: 48.0,
            max_magnitude: 4.0,
            hide_below_horizon: true,
            marker_base_radius: 3.0,
            marker_min_radius: 0.8,
            marker_max_radius: 4.5,
        }
    }
}

impl OverlayConfig {
    pub fn from_json(json: &str) -> OverlayResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !(self.vertical_fov_deg.is_finite()
            && self.vertical_fov_deg > 0.0
            && self.vertical_fov_deg <= 180.0)
        {
            return Err(OverlayError::invalid_config(format!(
                "vertical_fov_deg must be in (0, 180], got {}",
                self.vertical_fov_deg
            )));
        }
        if !(self.offscreen_margin_px.is_finite() && self.offscreen_margin_px >= 0.0) {
            return Err(OverlayError::invalid_config(format!(
                "offscreen_margin_px must be finite and non-negative, got {}",
                self.offscreen_margin_px
            )));
        }
        if !self.max_magnitude.is_finite() {
            return Err(OverlayError::invalid_config("max_magnitude must be finite"));
        }
        let radii = [
            self.marker_base_radius,
            self.marker_min_radius,
            self.marker_max_radius,
        ];
        if radii.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(OverlayError::invalid_config(
                "marker radii must be finite and positive",
            ));
        }
        if self.marker_min_radius > self.marker_max_radius {
            return Err(OverlayError::invalid_config(format!(
                "marker_min_radius {} exceeds marker_max_radius {}",
                self.marker_min_radius, self.marker_max_radius
            )));
        }
        Ok(())
    }

    /// Marker radius for a star of the given magnitude; brighter is larger.
    pub fn marker_radius(&self, magnitude: f64) -> f64 {
        (self.marker_base_radius - 0.5 * magnitude)
            .clamp(self.marker_min_radius, self.marker_max_radius)
    }

    pub fn marker_opacity(&self, magnitude: f64) -> f64 {
        (1.0 - 0.15 * magnitude).clamp(0.3, 1.0)
    }
}
