//! One render tick of the overlay.
//!
//! [`build_frame`] is pure: the same catalog, observer, attitude, instant,
//! viewport and config always produce the same frame. Stars are placed in
//! catalog order; segments follow the catalog's link order.

use serde::Serialize;
use skystory_catalog::{StarCatalog, StarCatalogEntry};
use skystory_coords::HorizontalPosition;
use skystory_core::ObserverLocation;
use skystory_time::{Lst, UtcInstant};
use tracing::trace;

use crate::config::OverlayConfig;
use crate::heading::DeviceAttitude;
use crate::projection::{Projection, ScreenPoint, ViewCenter, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarMarker {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
    pub magnitude: f64,
    pub azimuth_deg: f64,
    pub altitude_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSegment {
    pub from: &'static str,
    pub to: &'static str,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub time_utc: String,
    pub lst_hours: f64,
    pub center: ViewCenter,
    pub viewport: Viewport,
    pub markers: Vec<StarMarker>,
    pub segments: Vec<LineSegment>,
}

impl OverlayFrame {
    pub fn marker(&self, name: &str) -> Option<&StarMarker> {
        self.markers
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.segments.is_empty()
    }
}

struct Placed {
    horizontal: HorizontalPosition,
    point: ScreenPoint,
}

fn place(
    entry: &StarCatalogEntry,
    location: &ObserverLocation,
    lst: &Lst,
    projection: &Projection,
) -> Placed {
    let horizontal = entry.horizontal(location, lst);
    Placed {
        point: projection.project(&horizontal),
        horizontal,
    }
}

pub fn build_frame(
    catalog: &StarCatalog,
    location: &ObserverLocation,
    attitude: &DeviceAttitude,
    instant: &UtcInstant,
    viewport: &Viewport,
    config: &OverlayConfig,
) -> OverlayFrame {
    let lst = Lst::at(location, instant);
    let center = ViewCenter::from(attitude);
    let projection = Projection::new(*viewport, center, config.vertical_fov_deg);
    let margin = config.offscreen_margin_px;

    let mut below_horizon = 0usize;
    let mut too_faint = 0usize;
    let mut off_screen = 0usize;
    let mut markers = Vec::new();

    for entry in catalog.stars() {
        if entry.magnitude() > config.max_magnitude {
            too_faint += 1;
            continue;
        }
        let placed = place(entry, location, &lst, &projection);
        if config.hide_below_horizon && !placed.horizontal.is_above_horizon() {
            below_horizon += 1;
            continue;
        }
        if !projection.is_visible(placed.point, margin) {
            off_screen += 1;
            continue;
        }
        markers.push(StarMarker {
            name: entry.name(),
            x: placed.point.x,
            y: placed.point.y,
            radius: config.marker_radius(entry.magnitude()),
            opacity: config.marker_opacity(entry.magnitude()),
            magnitude: entry.magnitude(),
            azimuth_deg: placed.horizontal.azimuth_degrees(),
            altitude_deg: placed.horizontal.altitude_degrees(),
        });
    }

    let mut segments = Vec::new();
    for (a, b) in catalog.resolved_links() {
        let pa = place(a, location, &lst, &projection);
        let pb = place(b, location, &lst, &projection);
        if !projection.is_visible(pa.point, margin) && !projection.is_visible(pb.point, margin) {
            continue;
        }
        segments.push(LineSegment {
            from: a.name(),
            to: b.name(),
            x1: pa.point.x,
            y1: pa.point.y,
            x2: pb.point.x,
            y2: pb.point.y,
        });
    }

    trace!(
        lst_hours = lst.hours(),
        markers = markers.len(),
        segments = segments.len(),
        below_horizon,
        too_faint,
        off_screen,
        "built overlay frame"
    );

    OverlayFrame {
        time_utc: instant.to_iso8601(),
        lst_hours: lst.hours(),
        center,
        viewport: *viewport,
        markers,
        segments,
    }
}
