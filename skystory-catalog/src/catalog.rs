//! Lookups over the built-in star table.
//!
//! [`StarCatalog`] is a zero-sized handle onto the static tables in this
//! crate. Name lookups are case-insensitive. [`CatalogQuery`] combines the
//! constellation and magnitude filters the way the overlay and the CLI use
//! them, returning entries brightest first.

use crate::data::{LINKS, STARS};
use crate::entry::{ConstellationLink, StarCatalogEntry};
use crate::errors::{CatalogError, CatalogResult};

/// Filters for [`StarCatalog::search`].
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// If set, keep only stars of this constellation (IAU code, any case).
    pub constellation: Option<String>,
    /// If set, exclude stars fainter than this magnitude.
    pub max_mag: Option<f64>,
    /// If set, return at most this many results (brightest first).
    pub max_results: Option<usize>,
}

impl CatalogQuery {
    pub fn matches(&self, entry: &StarCatalogEntry) -> bool {
        if let Some(code) = &self.constellation {
            match entry.constellation_code() {
                Some(c) if c.eq_ignore_ascii_case(code) => {}
                _ => return false,
            }
        }
        if let Some(limit) = self.max_mag {
            if entry.magnitude() > limit {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StarCatalog {
    _private: (),
}

impl StarCatalog {
    pub fn builtin() -> Self {
        Self { _private: () }
    }

    pub fn stars(&self) -> &'static [StarCatalogEntry] {
        STARS
    }

    pub fn links(&self) -> &'static [ConstellationLink] {
        LINKS
    }

    pub fn len(&self) -> usize {
        STARS.len()
    }

    pub fn is_empty(&self) -> bool {
        STARS.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&'static StarCatalogEntry> {
        let name = name.trim();
        STARS.iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }

    pub fn require(&self, name: &str) -> CatalogResult<&'static StarCatalogEntry> {
        self.find(name).ok_or_else(|| CatalogError::unknown_star(name))
    }

    pub fn constellation<'a>(
        &self,
        code: &'a str,
    ) -> impl Iterator<Item = &'static StarCatalogEntry> + 'a {
        STARS.iter().filter(move |s| {
            s.constellation_code()
                .is_some_and(|c| c.eq_ignore_ascii_case(code))
        })
    }

    /// Stars at or brighter than `max_mag`.
    pub fn brighter_than(&self, max_mag: f64) -> impl Iterator<Item = &'static StarCatalogEntry> {
        STARS.iter().filter(move |s| s.magnitude() <= max_mag)
    }

    /// Links with both endpoints looked up. Links naming an unknown star are
    /// skipped; [`StarCatalog::validate`] reports them.
    pub fn resolved_links(
        &self,
    ) -> impl Iterator<Item = (&'static StarCatalogEntry, &'static StarCatalogEntry)> + '_ {
        LINKS.iter().filter_map(move |link| {
            let (a, b) = link.endpoints();
            Some((self.find(a)?, self.find(b)?))
        })
    }

    pub fn validate(&self) -> CatalogResult<()> {
        for link in LINKS {
            let (a, b) = link.endpoints();
            if self.find(a).is_none() || self.find(b).is_none() {
                return Err(CatalogError::DanglingLink {
                    from: a.to_string(),
                    to: b.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn search(&self, query: &CatalogQuery) -> Vec<&'static StarCatalogEntry> {
        let mut results: Vec<_> = STARS.iter().filter(|s| query.matches(s)).collect();
        results.sort_by(|a, b| a.magnitude().total_cmp(&b.magnitude()));
        if let Some(max) = query.max_results {
            results.truncate(max);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_links_resolve() {
        let catalog = StarCatalog::builtin();
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.resolved_links().count(), catalog.links().len());
    }

    #[test]
    fn test_positions_in_range() {
        for star in StarCatalog::builtin().stars() {
            assert!(
                (0.0..24.0).contains(&star.ra_hours()),
                "{} has RA {}",
                star.name(),
                star.ra_hours()
            );
            assert!((-90.0..=90.0).contains(&star.dec_degrees()), "{}", star);
            assert!(star.equatorial().is_ok());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for star in StarCatalog::builtin().stars() {
            assert!(seen.insert(star.name().to_ascii_lowercase()), "{}", star.name());
        }
    }

    #[test]
    fn test_links_are_unique_and_within_one_figure() {
        let catalog = StarCatalog::builtin();
        let links = catalog.links();
        for (i, link) in links.iter().enumerate() {
            assert!(!links[i + 1..].contains(link), "duplicate {:?}", link);
        }
        for (a, b) in catalog.resolved_links() {
            assert!(a.constellation_code().is_some());
            assert_eq!(a.constellation_code(), b.constellation_code());
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = StarCatalog::builtin();
        assert_eq!(catalog.find("SIRIUS").map(|s| s.name()), Some("Sirius"));
        assert_eq!(
            catalog.find(" rigil kentaurus ").map(|s| s.name()),
            Some("Rigil Kentaurus")
        );
        assert!(catalog.find("Vulcan").is_none());
        assert_eq!(
            catalog.require("Vulcan"),
            Err(CatalogError::unknown_star("Vulcan"))
        );
    }

    #[test]
    fn test_constellation_filter() {
        let catalog = StarCatalog::builtin();
        let names: Vec<_> = catalog.constellation("cru").map(|s| s.name()).collect();
        assert_eq!(names, vec!["Acrux", "Mimosa", "Gacrux", "Imai"]);
        assert_eq!(catalog.constellation("UMa").count(), 7);
        assert_eq!(catalog.constellation("Xyz").count(), 0);
    }

    #[test]
    fn test_brighter_than() {
        let catalog = StarCatalog::builtin();
        let names: HashSet<_> = catalog.brighter_than(0.0).map(|s| s.name()).collect();
        assert_eq!(
            names,
            HashSet::from(["Sirius", "Canopus", "Arcturus", "Rigil Kentaurus"])
        );
    }

    #[test]
    fn test_search_sorted_and_truncated() {
        let catalog = StarCatalog::builtin();
        let query = CatalogQuery {
            constellation: Some("Ori".into()),
            max_mag: Some(2.0),
            max_results: Some(3),
        };
        let names: Vec<_> = catalog.search(&query).iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Rigel", "Betelgeuse", "Bellatrix"]);

        let all = catalog.search(&CatalogQuery::default());
        assert_eq!(all.len(), catalog.len());
        assert_eq!(all[0].name(), "Sirius");
    }
}
