pub mod errors;
pub mod frames;

pub use errors::{CoordError, CoordResult};
pub use frames::{horizontal_from_lst, EquatorialPosition, HorizontalPosition};

pub use skystory_core::ObserverLocation;
pub use skystory_time::{Lst, UtcInstant};
