//! UTC instants.
//!
//! The overlay recomputes star positions every frame from "now", but every
//! function that needs a time takes a [`UtcInstant`] argument. Only
//! [`UtcInstant::now`] reads the system clock, which keeps the math
//! reproducible in tests.
//!
//! Leap seconds are ignored: the linear sidereal-time model used by the
//! overlay is far coarser than the one second UTC-UT1 difference.

use crate::julian::JulianDate;
use crate::parsing::parse_iso8601;
use crate::{TimeError, TimeResult};
use skystory_core::constants::{
    NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY, SECONDS_PER_DAY_F64, UNIX_EPOCH_JD,
};
use skystory_core::SkyError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtcInstant(JulianDate);

impl UtcInstant {
    /// Creates an instant from a Unix timestamp.
    ///
    /// Whole days and the sub-day remainder are split before conversion so
    /// the fractional part keeps full precision.
    pub fn from_unix(seconds: i64, nanos: u32) -> Self {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let remainder_seconds = seconds.rem_euclid(SECONDS_PER_DAY);
        let jd1 = UNIX_EPOCH_JD + days as f64;
        let jd2 = (remainder_seconds as f64 + nanos as f64 / NANOSECONDS_PER_SECOND_F64)
            / SECONDS_PER_DAY_F64;
        Self(JulianDate::new(jd1, jd2))
    }

    /// Creates an instant from calendar components, validating each field.
    pub fn from_calendar(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(invalid(year, month, day, "month out of range"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(invalid(year, month, day, "day out of range for month"));
        }
        if hour > 23 || minute > 59 {
            return Err(invalid(year, month, day, "time of day out of range"));
        }
        if !(0.0..61.0).contains(&second) {
            return Err(invalid(year, month, day, "seconds out of range"));
        }
        Ok(Self(JulianDate::from_calendar(
            year, month, day, hour, minute, second,
        )))
    }

    /// J2000.0, 2000-01-01T12:00:00.
    pub fn j2000() -> Self {
        Self(JulianDate::j2000())
    }

    /// Reads the system clock.
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_unix(duration.as_secs() as i64, duration.subsec_nanos())
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn days_since_j2000(&self) -> f64 {
        self.0.days_since_j2000()
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0.add_days(days))
    }

    /// Splits the instant back into (year, month, day, seconds of day).
    pub fn to_calendar(&self) -> (i32, u8, u8, f64) {
        let JulianDate { jd1, jd2 } = self.0;
        // Shift to a midnight-based day before separating whole and fraction.
        let shifted1 = jd1 + 0.5;
        let whole1 = shifted1.floor();
        let mut frac = (shifted1 - whole1) + jd2;
        let extra = frac.floor();
        frac -= extra;
        let jdn = (whole1 + extra) as i64;

        let (year, month, day) = civil_from_jdn(jdn);
        (year, month, day, frac * SECONDS_PER_DAY_F64)
    }

    /// Formats as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    pub fn to_iso8601(&self) -> String {
        let (mut year, mut month, mut day, seconds_of_day) = self.to_calendar();
        let mut millis = (seconds_of_day * 1000.0).round() as i64;
        if millis >= SECONDS_PER_DAY * 1000 {
            // Rounded up past midnight: the date belongs to the next day.
            (year, month, day, _) = self.add_seconds(1.0).to_calendar();
            millis -= SECONDS_PER_DAY * 1000;
        }
        let hour = millis / 3_600_000;
        let minute = (millis / 60_000) % 60;
        let second = (millis / 1000) % 60;
        let ms = millis % 1000;
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year, month, day, hour, minute, second, ms
        )
    }
}

impl fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}

impl FromStr for UtcInstant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let p = parse_iso8601(s)?;
        Self::from_calendar(p.year, p.month, p.day, p.hour, p.minute, p.second)
    }
}

fn invalid(year: i32, month: u8, day: u8, reason: &str) -> TimeError {
    SkyError::invalid_date(year, month as i32, day as i32, reason).into()
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Fliegel & Van Flandern (1968), Julian Day Number to Gregorian date.
fn civil_from_jdn(jdn: i64) -> (i32, u8, u8) {
    let mut l = jdn + 68569;
    let n = 4 * l / 146097;
    l -= (146097 * n + 3) / 4;
    let i = 4000 * (l + 1) / 1461001;
    l = l - 1461 * i / 4 + 31;
    let k = 80 * l / 2447;
    let day = l - 2447 * k / 80;
    l = k / 11;
    let month = k + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year as i32, month as u8, day as u8)
}
