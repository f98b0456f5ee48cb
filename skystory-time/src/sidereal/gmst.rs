use super::angle::SiderealAngle;
use crate::UtcInstant;
use skystory_core::constants::{GMST_AT_J2000_HOURS, SIDEREAL_HOURS_PER_DAY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Greenwich Mean Sidereal Time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gmst(SiderealAngle);

impl Gmst {
    pub fn at(instant: &UtcInstant) -> Self {
        Self::from_days_since_j2000(instant.days_since_j2000())
    }

    pub fn from_days_since_j2000(days: f64) -> Self {
        Self(SiderealAngle::from_hours(gmst_hours_unreduced(days)))
    }

    pub fn from_hours(hours: f64) -> Self {
        Self(SiderealAngle::from_hours(hours))
    }

    pub fn angle(&self) -> SiderealAngle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.0.degrees()
    }
}

impl std::fmt::Display for Gmst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {}", self.0)
    }
}

pub(crate) fn gmst_hours_unreduced(days_since_j2000: f64) -> f64 {
    GMST_AT_J2000_HOURS + SIDEREAL_HOURS_PER_DAY * days_since_j2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmst_j2000() {
        let gmst = Gmst::at(&UtcInstant::j2000());
        assert_eq!(gmst.hours(), GMST_AT_J2000_HOURS);
    }

    #[test]
    fn test_gmst_advances_faster_than_solar_time() {
        let a = Gmst::from_days_since_j2000(0.0);
        let b = Gmst::from_days_since_j2000(1.0);
        let gain = b.hours() - a.hours();
        // 24.0657 h per solar day, reduced mod 24
        assert!((gain - 0.06570982441908).abs() < 1e-9, "gain = {}", gain);
    }

    #[test]
    fn test_gmst_known_value() {
        // 2024-03-20T00:00:00Z, near the March equinox GMST at 0h UT is ≈ 11h52m
        let instant = UtcInstant::from_calendar(2024, 3, 20, 0, 0, 0.0).unwrap();
        let gmst = Gmst::at(&instant);
        let expected = 11.0 + 52.0 / 60.0;
        assert!(
            (gmst.hours() - expected).abs() < 1.0 / 60.0,
            "GMST = {}",
            gmst
        );
    }

    #[test]
    fn test_gmst_in_range_before_j2000() {
        let gmst = Gmst::from_days_since_j2000(-10957.5);
        assert!((0.0..24.0).contains(&gmst.hours()));
    }

    #[test]
    fn test_display() {
        assert!(Gmst::from_hours(12.0).to_string().starts_with("GMST 12h00m"));
    }
}
