use skystory_catalog::StarCatalog;
use skystory_time::UtcInstant;
use tracing::{debug, info, warn};

use crate::acquisition::{Acquisition, AcquisitionState, SensorEvent, Transition};
use crate::config::OverlayConfig;
use crate::errors::OverlayResult;
use crate::frame::{build_frame, OverlayFrame};
use crate::observer::ObserverState;
use crate::projection::Viewport;

/// Owns the sensor snapshot and renders frames once both halves are known.
#[derive(Debug, Clone)]
pub struct SkyOverlay {
    catalog: StarCatalog,
    config: OverlayConfig,
    acquisition: Acquisition,
}

impl Default for SkyOverlay {
    fn default() -> Self {
        Self {
            catalog: StarCatalog::builtin(),
            config: OverlayConfig::default(),
            acquisition: Acquisition::new(),
        }
    }
}

impl SkyOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OverlayConfig) -> OverlayResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn catalog(&self) -> &StarCatalog {
        &self.catalog
    }

    pub fn state(&self) -> AcquisitionState {
        self.acquisition.state()
    }

    pub fn observer(&self) -> &ObserverState {
        self.acquisition.observer()
    }

    pub fn handle_event(&mut self, event: &SensorEvent) -> Transition {
        let transition = self.acquisition.handle(event);
        match transition {
            Transition::Entered { from, to } => match to {
                AcquisitionState::LocationUnavailable => {
                    warn!(%from, "location unavailable, overlay disabled until reset")
                }
                AcquisitionState::PermissionDenied => {
                    warn!(%from, "orientation permission denied")
                }
                _ => info!(%from, %to, event = event.kind(), "acquisition state changed"),
            },
            Transition::Updated => debug!(event = event.kind(), "observer snapshot updated"),
            Transition::Ignored(reason) => {
                debug!(state = %self.state(), event = event.kind(), %reason, "ignored sensor event")
            }
        }
        transition
    }

    pub fn reset(&mut self) {
        info!(from = %self.state(), "acquisition reset");
        self.acquisition.reset();
    }

    /// Builds the frame for `instant`, or `None` until acquisition is ready.
    pub fn frame(&self, instant: &UtcInstant, viewport: &Viewport) -> Option<OverlayFrame> {
        if !self.state().is_ready() {
            return None;
        }
        let (location, attitude) = self.observer().snapshot()?;
        Some(build_frame(
            &self.catalog,
            &location,
            &attitude,
            instant,
            viewport,
            &self.config,
        ))
    }

    pub fn frame_now(&self, viewport: &Viewport) -> Option<OverlayFrame> {
        self.frame(&UtcInstant::now(), viewport)
    }
}
