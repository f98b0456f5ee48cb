use super::angle::SiderealAngle;
use super::gmst::{gmst_hours_unreduced, Gmst};
use crate::UtcInstant;
use skystory_core::constants::DEGREES_PER_HOUR;
use skystory_core::ObserverLocation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local (mean) sidereal time for an observer longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lst {
    angle: SiderealAngle,
    longitude_deg: f64,
}

impl Lst {
    /// LST for a longitude in degrees (east positive) at `instant`.
    ///
    /// The longitude offset is added to the unreduced GMST and the sum is
    /// reduced to [0, 24) once, so no error accumulates from reducing twice.
    pub fn from_longitude(longitude_deg: f64, instant: &UtcInstant) -> Self {
        let gmst = gmst_hours_unreduced(instant.days_since_j2000());
        Self {
            angle: SiderealAngle::from_hours(gmst + longitude_deg / DEGREES_PER_HOUR),
            longitude_deg,
        }
    }

    pub fn at(location: &ObserverLocation, instant: &UtcInstant) -> Self {
        Self::from_longitude(location.longitude_degrees(), instant)
    }

    pub fn from_hours(hours: f64, longitude_deg: f64) -> Self {
        Self {
            angle: SiderealAngle::from_hours(hours),
            longitude_deg,
        }
    }

    pub fn angle(&self) -> SiderealAngle {
        self.angle
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude_deg
    }

    pub fn hours(&self) -> f64 {
        self.angle.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.angle.degrees()
    }

    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        self.angle.hour_angle_to_target(target_ra_hours)
    }

    pub fn to_gmst(&self) -> Gmst {
        Gmst::from_hours(self.hours() - self.longitude_deg / DEGREES_PER_HOUR)
    }
}

impl std::fmt::Display for Lst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LST {} at {:.4}°", self.angle, self.longitude_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skystory_core::constants::SIDEREAL_DAY_SECONDS;

    fn spring_evening() -> UtcInstant {
        UtcInstant::from_calendar(2024, 3, 20, 21, 0, 0.0).unwrap()
    }

    fn circular_diff_hours(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(24.0 - d)
    }

    #[test]
    fn test_lst_at_greenwich_equals_gmst() {
        let instant = spring_evening();
        let lst = Lst::from_longitude(0.0, &instant);
        let gmst = Gmst::at(&instant);
        assert!(
            (lst.hours() - gmst.hours()).abs() < 1e-12,
            "LST={}, GMST={}",
            lst.hours(),
            gmst.hours()
        );
    }

    #[test]
    fn test_lst_longitude_correction() {
        // 15 degrees of longitude = 1 hour of sidereal time
        let instant = spring_evening();
        let greenwich = Lst::from_longitude(0.0, &instant);
        let east = Lst::from_longitude(15.0, &instant);
        let west = Lst::from_longitude(-15.0, &instant);

        let diff_east = circular_diff_hours(east.hours(), greenwich.hours() + 1.0);
        let diff_west = circular_diff_hours(west.hours(), greenwich.hours() - 1.0);
        assert!(diff_east < 1e-10, "15°E should be +1 hour: {}", diff_east);
        assert!(diff_west < 1e-10, "15°W should be -1 hour: {}", diff_west);
    }

    #[test]
    fn test_lst_always_in_range() {
        let mut instant = UtcInstant::from_unix(0, 0);
        for lon in [-180.0, -155.4783, -0.1, 0.0, 0.1, 139.69, 180.0] {
            for _ in 0..50 {
                let lst = Lst::from_longitude(lon, &instant);
                assert!(
                    (0.0..24.0).contains(&lst.hours()),
                    "LST out of range: {}",
                    lst.hours()
                );
                instant = instant.add_seconds(7_919.0);
            }
        }
    }

    #[test]
    fn test_lst_periodic_over_one_sidereal_day() {
        let t0 = spring_evening();
        let t1 = t0.add_seconds(SIDEREAL_DAY_SECONDS);
        for lon in [-122.42, 0.0, 151.21] {
            let a = Lst::from_longitude(lon, &t0);
            let b = Lst::from_longitude(lon, &t1);
            let diff = circular_diff_hours(a.hours(), b.hours());
            assert!(diff < 1e-5, "LST drifted {} h over a sidereal day", diff);
        }
    }

    #[test]
    fn test_lst_from_location() {
        let location = ObserverLocation::from_degrees(19.8283, -155.4783).unwrap();
        let instant = spring_evening();
        let from_loc = Lst::at(&location, &instant);
        let from_lon = Lst::from_longitude(-155.4783, &instant);
        assert_eq!(from_loc, from_lon);
    }

    #[test]
    fn test_to_gmst_round_trip() {
        let instant = spring_evening();
        let lst = Lst::from_longitude(-75.0, &instant);
        let gmst = Gmst::at(&instant);
        let diff = circular_diff_hours(lst.to_gmst().hours(), gmst.hours());
        assert!(diff < 1e-10);
    }

    #[test]
    fn test_display() {
        let lst = Lst::from_hours(6.0, -15.0);
        assert_eq!(lst.to_string(), "LST 06h00m00.000s at -15.0000°");
    }
}
