mod equatorial;
mod horizontal;

pub use equatorial::EquatorialPosition;
pub use horizontal::{horizontal_from_lst, HorizontalPosition};
