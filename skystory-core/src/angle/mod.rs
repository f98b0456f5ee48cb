//! Angle normalization helpers.
//!
//! The overlay works in degrees and hours throughout, so these helpers take
//! and return plain `f64` values in those units rather than a wrapper type.

mod normalize;

pub use normalize::{clamp_pm_90, shortest_arc_deg, wrap_0_24, wrap_0_360};
