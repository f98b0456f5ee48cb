//! Static bright-star catalog for the camera overlay.
//!
//! The catalog is compiled in: the brightest naked-eye stars
//! with J2000.0 positions, plus the line segments ("links") that draw the
//! stick figures of the constellations they belong to. Nothing is loaded at
//! run time and nothing is ever mutated.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`entry`] | [`StarCatalogEntry`] and [`ConstellationLink`] |
//! | [`catalog`] | [`StarCatalog`] lookups and [`CatalogQuery`] filtering |
//!
//! ```
//! use skystory_catalog::StarCatalog;
//!
//! let catalog = StarCatalog::builtin();
//! let vega = catalog.find("vega").unwrap();
//! assert_eq!(vega.constellation_code(), Some("Lyr"));
//! ```

pub mod catalog;
mod data;
pub mod entry;
pub mod errors;

pub use catalog::{CatalogQuery, StarCatalog};
pub use entry::{ConstellationLink, StarCatalogEntry};
pub use errors::{CatalogError, CatalogResult};
