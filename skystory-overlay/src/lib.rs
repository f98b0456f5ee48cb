//! Camera overlay engine for SkyStory.
//!
//! Sensor callbacks feed [`SensorEvent`]s into a [`SkyOverlay`], which
//! tracks permission, geolocation and orientation through the
//! [`AcquisitionState`] machine. Once every input is known,
//! [`SkyOverlay::frame`] projects the built-in catalog onto the camera view
//! and returns an [`OverlayFrame`] of star markers and constellation
//! segments ready for a drawing surface.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`heading`] | Compass conventions, raw orientation readings, [`DeviceAttitude`] |
//! | [`observer`] | [`ObserverState`], the latest sensor snapshot |
//! | [`acquisition`] | The acquisition state machine |
//! | [`projection`] | [`Viewport`] and the horizontal-to-screen mapping |
//! | [`config`] | [`OverlayConfig`] |
//! | [`frame`] | [`build_frame`] and its output types |
//! | [`session`] | [`SkyOverlay`] |
//!
//! ```
//! use skystory_overlay::{OrientationReading, SensorEvent, SkyOverlay, Viewport};
//! use skystory_time::UtcInstant;
//!
//! let mut overlay = SkyOverlay::new();
//! overlay.handle_event(&SensorEvent::PermissionGranted);
//! overlay.handle_event(&SensorEvent::LocationFix { latitude: 51.5, longitude: -0.1 });
//! overlay.handle_event(&SensorEvent::Orientation(OrientationReading::compass(180.0, 120.0)));
//!
//! let viewport = Viewport::new(1080.0, 1920.0).unwrap();
//! let instant = UtcInstant::from_calendar(2024, 1, 15, 22, 0, 0.0).unwrap();
//! let frame = overlay.frame(&instant, &viewport).unwrap();
//! assert!(frame.marker("Sirius").is_some());
//! ```

pub mod acquisition;
pub mod config;
pub mod errors;
pub mod frame;
pub mod heading;
pub mod observer;
pub mod projection;
pub mod session;

pub use acquisition::{Acquisition, AcquisitionState, IgnoreReason, SensorEvent, Transition};
pub use config::OverlayConfig;
pub use errors::{OverlayError, OverlayResult};
pub use frame::{build_frame, LineSegment, OverlayFrame, StarMarker};
pub use heading::{DeviceAttitude, HeadingReading, OrientationReading};
pub use observer::ObserverState;
pub use projection::{azimuth_delta, Projection, ScreenPoint, ViewCenter, Viewport};
pub use session::SkyOverlay;
