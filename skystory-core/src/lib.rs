//! Shared building blocks for the SkyStory star overlay.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Epochs, unit conversions, sidereal-rate coefficients |
//! | [`angle`] | Wrapping and clamping of degrees, radians and hours |
//! | [`math`] | Floating-point helpers shared by the other crates |
//! | [`errors`] | [`SkyError`] and [`MathErrorKind`] |
//! | [`location`] | [`ObserverLocation`], a validated latitude/longitude pair |

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use errors::{MathErrorKind, SkyError, SkyResult};
pub use location::ObserverLocation;
