pub mod julian;
pub mod parsing;
pub mod sidereal;
pub mod utc;

pub use julian::JulianDate;
pub use sidereal::{Gmst, Lst, SiderealAngle};
pub use utc::UtcInstant;

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] skystory_core::SkyError),

    #[error("Parse error: {0}")]
    ParseError(String),
}
