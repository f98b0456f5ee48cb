use super::horizontal::{horizontal_from_lst, HorizontalPosition};
use crate::{CoordError, CoordResult};
use skystory_core::constants::DEGREES_PER_HOUR;
use skystory_core::ObserverLocation;
use skystory_time::{Lst, UtcInstant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right ascension (hours) and declination (degrees), J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialPosition {
    ra_hours: f64,
    dec_deg: f64,
}

impl EquatorialPosition {
    pub fn new(ra_hours: f64, dec_deg: f64) -> CoordResult<Self> {
        if !(0.0..24.0).contains(&ra_hours) {
            return Err(CoordError::invalid_coordinate(format!(
                "right ascension {}h outside [0, 24)",
                ra_hours
            )));
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(CoordError::invalid_coordinate(format!(
                "declination {}° outside [-90, 90]",
                dec_deg
            )));
        }
        Ok(Self { ra_hours, dec_deg })
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    pub fn ra_degrees(&self) -> f64 {
        self.ra_hours * DEGREES_PER_HOUR
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec_deg
    }

    /// Hour angle in hours, reduced to [-12, 12): positive west of the meridian.
    pub fn hour_angle_hours(&self, lst: &Lst) -> f64 {
        let ha = lst.hour_angle_to_target(self.ra_hours);
        (ha + 12.0).rem_euclid(24.0) - 12.0
    }

    pub fn to_horizontal(&self, location: &ObserverLocation, lst: &Lst) -> HorizontalPosition {
        horizontal_from_lst(
            self.ra_hours,
            self.dec_deg,
            location.latitude_degrees(),
            lst.hours(),
        )
    }

    /// Horizontal position for `location` at `instant`.
    pub fn horizontal_at(
        &self,
        location: &ObserverLocation,
        instant: &UtcInstant,
    ) -> HorizontalPosition {
        let lst = Lst::at(location, instant);
        self.to_horizontal(location, &lst)
    }

    /// Never sets for an observer at `lat_deg`.
    pub fn is_circumpolar(&self, lat_deg: f64) -> bool {
        if lat_deg >= 0.0 {
            self.dec_deg > 90.0 - lat_deg
        } else {
            self.dec_deg < -90.0 - lat_deg
        }
    }

    /// Never rises for an observer at `lat_deg`.
    pub fn never_rises(&self, lat_deg: f64) -> bool {
        if lat_deg >= 0.0 {
            self.dec_deg < lat_deg - 90.0
        } else {
            self.dec_deg > 90.0 + lat_deg
        }
    }
}

impl std::fmt::Display for EquatorialPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Equatorial(RA={:.4}h, Dec={:+.4}°)",
            self.ra_hours, self.dec_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greenwich() -> ObserverLocation {
        ObserverLocation::from_degrees(51.5, 0.0).unwrap()
    }

    #[test]
    fn test_validation() {
        assert!(EquatorialPosition::new(0.0, 0.0).is_ok());
        assert!(EquatorialPosition::new(23.999, -90.0).is_ok());
        assert!(EquatorialPosition::new(24.0, 0.0).is_err());
        assert!(EquatorialPosition::new(-0.1, 0.0).is_err());
        assert!(EquatorialPosition::new(1.0, 90.5).is_err());
        assert!(EquatorialPosition::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_ra_conversion() {
        let pos = EquatorialPosition::new(6.0, 0.0).unwrap();
        assert_eq!(pos.ra_degrees(), 90.0);
    }

    #[test]
    fn test_hour_angle_wraps() {
        let pos = EquatorialPosition::new(23.0, 0.0).unwrap();
        let lst = Lst::from_hours(1.0, 0.0);
        assert!((pos.hour_angle_hours(&lst) - 2.0).abs() < 1e-12);

        let pos = EquatorialPosition::new(1.0, 0.0).unwrap();
        let lst = Lst::from_hours(23.0, 0.0);
        assert!((pos.hour_angle_hours(&lst) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_horizontal_on_meridian() {
        // dec 38.78 < lat 51.5, so Vega culminates due south at 77.28°
        let vega = EquatorialPosition::new(18.6156, 38.7837).unwrap();
        let lst = Lst::from_hours(18.6156, 0.0);
        let pos = vega.to_horizontal(&greenwich(), &lst);
        assert!((pos.altitude_degrees() - (90.0 - (51.5 - 38.7837))).abs() < 1e-9);
        assert!((pos.azimuth_degrees() - 180.0).abs() < 1e-5);
    }

    #[test]
    fn test_horizontal_at_matches_lst_path() {
        let sirius = EquatorialPosition::new(6.7525, -16.7161).unwrap();
        let instant = UtcInstant::from_calendar(2024, 1, 15, 22, 0, 0.0).unwrap();
        let location = greenwich();
        let direct = sirius.horizontal_at(&location, &instant);
        let via_lst = sirius.to_horizontal(&location, &Lst::at(&location, &instant));
        assert_eq!(direct, via_lst);
        // Mid-January at 22h UT Sirius is up over southern England
        assert!(direct.is_above_horizon());
    }

    #[test]
    fn test_circumpolar_and_never_rises() {
        let polaris = EquatorialPosition::new(2.5302, 89.2641).unwrap();
        assert!(polaris.is_circumpolar(51.5));
        assert!(polaris.never_rises(-33.9));

        let acrux = EquatorialPosition::new(12.4433, -63.0991).unwrap();
        assert!(acrux.never_rises(51.5));
        assert!(acrux.is_circumpolar(-33.9));
        assert!(!acrux.is_circumpolar(51.5));
    }

    #[test]
    fn test_display() {
        let pos = EquatorialPosition::new(6.0, -16.5).unwrap();
        assert_eq!(pos.to_string(), "Equatorial(RA=6.0000h, Dec=-16.5000°)");
    }
}
