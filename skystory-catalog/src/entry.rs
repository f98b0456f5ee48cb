use skystory_coords::{horizontal_from_lst, CoordResult, EquatorialPosition, HorizontalPosition};
use skystory_core::ObserverLocation;
use skystory_time::Lst;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One star of the built-in catalog.
///
/// Positions are J2000.0; proper motion is ignored since none of these stars
/// moves by a visible amount on a phone screen over a human lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StarCatalogEntry {
    name: &'static str,
    ra_hours: f64,
    dec_deg: f64,
    magnitude: f64,
    constellation: Option<&'static str>,
}

impl StarCatalogEntry {
    pub const fn new(
        name: &'static str,
        ra_hours: f64,
        dec_deg: f64,
        magnitude: f64,
        constellation: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            ra_hours,
            dec_deg,
            magnitude,
            constellation,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec_deg
    }

    /// Apparent visual magnitude; smaller is brighter.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// IAU three-letter constellation abbreviation, if the star is part of
    /// one of the drawn figures.
    pub fn constellation_code(&self) -> Option<&'static str> {
        self.constellation
    }

    pub fn equatorial(&self) -> CoordResult<EquatorialPosition> {
        EquatorialPosition::new(self.ra_hours, self.dec_deg)
    }

    pub fn horizontal(&self, location: &ObserverLocation, lst: &Lst) -> HorizontalPosition {
        horizontal_from_lst(
            self.ra_hours,
            self.dec_deg,
            location.latitude_degrees(),
            lst.hours(),
        )
    }
}

impl std::fmt::Display for StarCatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (RA={:.4}h, Dec={:+.4}°, mag {:.2}",
            self.name, self.ra_hours, self.dec_deg, self.magnitude
        )?;
        if let Some(code) = self.constellation {
            write!(f, ", {}", code)?;
        }
        write!(f, ")")
    }
}

/// An unordered pair of star names joined by a line in a constellation figure.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConstellationLink {
    a: &'static str,
    b: &'static str,
}

impl ConstellationLink {
    pub const fn new(a: &'static str, b: &'static str) -> Self {
        Self { a, b }
    }

    pub fn endpoints(&self) -> (&'static str, &'static str) {
        (self.a, self.b)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.a.eq_ignore_ascii_case(name) || self.b.eq_ignore_ascii_case(name)
    }
}

impl PartialEq for ConstellationLink {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for ConstellationLink {}
