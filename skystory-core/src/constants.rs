pub const J2000_JD: f64 = 2451545.0;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;

/// One hour of right ascension or sidereal time spans 15 degrees.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Length of one mean sidereal day in SI seconds.
pub const SIDEREAL_DAY_SECONDS: f64 = 86_164.0905;

/// GMST in hours at J2000.0 for the linear sidereal-time model.
pub const GMST_AT_J2000_HOURS: f64 = 18.697374558;

/// Sidereal hours elapsed per solar day.
pub const SIDEREAL_HOURS_PER_DAY: f64 = 24.06570982441908;
