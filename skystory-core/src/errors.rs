//! Error type shared by the SkyStory crates.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidDate`](SkyError::InvalidDate) | calendar validation |
//! | [`MathError`](SkyError::MathError) | non-finite or out-of-range inputs |
//!
//! The coordinate math itself never fails: ill-conditioned geometry is
//! handled by clamping. Errors only come from validating inputs at the
//! construction boundary.
//!
//! ```
//! use skystory_core::{MathErrorKind, SkyError};
//!
//! fn checked_altitude(alt_deg: f64) -> Result<f64, SkyError> {
//!     if alt_deg.abs() > 90.0 {
//!         return Err(SkyError::math_error(
//!             "checked_altitude",
//!             MathErrorKind::OutOfRange,
//!             "altitude outside [-90, 90]",
//!         ));
//!     }
//!     Ok(alt_deg)
//! }
//! assert!(checked_altitude(95.0).is_err());
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input or result is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum SkyError {
    /// Invalid calendar date (e.g., February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

pub type SkyResult<T> = Result<T, SkyError>;

impl SkyError {
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] for math errors.
    pub fn math_kind(&self) -> Option<&MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
