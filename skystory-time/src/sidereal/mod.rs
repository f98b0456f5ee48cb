//! Sidereal time from the linear GMST model.
//!
//! ```text
//! GMST(h) = 18.697374558 + 24.06570982441908 × d      d = days since J2000.0
//! LST(h)  = GMST + longitude / 15                     reduced to [0, 24)
//! ```
//!
//! The model ignores nutation and the UT1-UTC offset; it is accurate to a
//! fraction of a second of time over several decades around J2000, which is
//! far below what is visible on a phone screen.

mod angle;
mod gmst;
mod lst;

pub use angle::SiderealAngle;
pub use gmst::Gmst;
pub use lst::Lst;
