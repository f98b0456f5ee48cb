use std::io::Write;

use skystory_catalog::StarCatalog;
use skystory_coords::horizontal_from_lst;
use skystory_core::ObserverLocation;
use skystory_overlay::{
    build_frame, AcquisitionState, DeviceAttitude, OrientationReading, OverlayConfig, SensorEvent,
    SkyOverlay, Transition, Viewport,
};
use skystory_time::{Lst, UtcInstant};

const SYDNEY: (f64, f64) = (-33.8688, 151.2093);

fn sydney_night() -> UtcInstant {
    UtcInstant::from_calendar(2024, 4, 15, 12, 0, 0.0).unwrap()
}

fn phone() -> Viewport {
    Viewport::new(1080.0, 1920.0).unwrap()
}

fn ready_overlay(reading: OrientationReading) -> SkyOverlay {
    let mut overlay = SkyOverlay::new();
    overlay.handle_event(&SensorEvent::PermissionGranted);
    overlay.handle_event(&SensorEvent::LocationFix {
        latitude: SYDNEY.0,
        longitude: SYDNEY.1,
    });
    overlay.handle_event(&SensorEvent::Orientation(reading));
    assert_eq!(overlay.state(), AcquisitionState::Ready);
    overlay
}

fn acrux_horizontal() -> (f64, f64) {
    let location = ObserverLocation::from_degrees(SYDNEY.0, SYDNEY.1).unwrap();
    let acrux = StarCatalog::builtin().find("Acrux").unwrap();
    let pos = acrux.horizontal(&location, &Lst::at(&location, &sydney_night()));
    (pos.azimuth_degrees(), pos.altitude_degrees())
}

// --- Sensor pipeline ---

#[test]
fn southern_cross_drawn_from_w3c_alpha() {
    let (az, _) = acrux_horizontal();
    // alpha grows counter-clockwise; beta 150 puts the camera 60° up.
    let overlay = ready_overlay(OrientationReading::w3c(360.0 - az, 150.0));
    let frame = overlay.frame(&sydney_night(), &phone()).unwrap();

    assert!((frame.center.azimuth_deg - az).abs() < 1e-9);
    assert_eq!(frame.center.altitude_deg, 60.0);
    for name in ["Acrux", "Mimosa", "Gacrux", "Imai"] {
        assert!(frame.marker(name).is_some(), "{} missing", name);
    }
    assert!(frame
        .segments
        .iter()
        .any(|s| s.from == "Acrux" && s.to == "Gacrux"));
    assert!(frame
        .segments
        .iter()
        .any(|s| s.from == "Mimosa" && s.to == "Imai"));
}

#[test]
fn target_star_lands_on_screen_centre() {
    let (az, alt) = acrux_horizontal();
    let overlay = ready_overlay(OrientationReading::compass(az, alt + 90.0));
    let frame = overlay.frame(&sydney_night(), &phone()).unwrap();
    let acrux = frame.marker("acrux").unwrap();
    assert!((acrux.x - 540.0).abs() < 1e-6);
    assert!((acrux.y - 960.0).abs() < 1e-6);
}

#[test]
fn segments_culled_when_both_ends_off_screen() {
    // Facing the northern horizon, the Southern Cross is behind the viewer.
    let overlay = ready_overlay(OrientationReading::compass(0.0, 90.0));
    let frame = overlay.frame(&sydney_night(), &phone()).unwrap();
    assert!(frame.marker("Acrux").is_none());
    assert!(frame
        .segments
        .iter()
        .all(|s| !["Acrux", "Mimosa", "Gacrux", "Imai"].contains(&s.from)));

    let (w, h) = (frame.viewport.width(), frame.viewport.height());
    let margin = overlay.config().offscreen_margin_px;
    let inside = |x: f64, y: f64| x >= -margin && x <= w + margin && y >= -margin && y <= h + margin;
    for s in &frame.segments {
        assert!(inside(s.x1, s.y1) || inside(s.x2, s.y2));
    }
}

#[test]
fn view_wraps_across_north() {
    let location = ObserverLocation::from_degrees(51.5, 0.0).unwrap();
    let instant = UtcInstant::from_calendar(2024, 1, 15, 22, 0, 0.0).unwrap();
    let polaris = StarCatalog::builtin().find("Polaris").unwrap();
    let pos = polaris.horizontal(&location, &Lst::at(&location, &instant));

    // Two degrees to the left of Polaris, whichever side of north it is on.
    let attitude = DeviceAttitude::new(pos.azimuth_degrees() - 2.0, pos.altitude_degrees());
    let config = OverlayConfig::default();
    let frame = build_frame(
        &StarCatalog::builtin(),
        &location,
        &attitude,
        &instant,
        &phone(),
        &config,
    );
    let marker = frame.marker("Polaris").unwrap();
    let hfov = config.vertical_fov_deg * 1080.0 / 1920.0;
    let expected_x = 540.0 + 2.0 * 1080.0 / hfov;
    assert!((marker.x - expected_x).abs() < 1e-6);
    assert!((marker.y - 960.0).abs() < 1e-6);
}

#[test]
fn denied_permission_then_retry() {
    let mut overlay = SkyOverlay::new();
    overlay.handle_event(&SensorEvent::PermissionDenied);
    assert_eq!(overlay.state(), AcquisitionState::PermissionDenied);
    assert!(overlay.frame(&sydney_night(), &phone()).is_none());

    overlay.handle_event(&SensorEvent::RetryPermission);
    overlay.handle_event(&SensorEvent::PermissionGranted);
    overlay.handle_event(&SensorEvent::Orientation(OrientationReading::compass(0.0, 90.0)));
    assert_eq!(overlay.state(), AcquisitionState::AwaitingLocation);

    let transition = overlay.handle_event(&SensorEvent::LocationFix {
        latitude: SYDNEY.0,
        longitude: SYDNEY.1,
    });
    assert_eq!(
        transition,
        Transition::Entered {
            from: AcquisitionState::AwaitingLocation,
            to: AcquisitionState::Ready
        }
    );
    assert!(overlay.frame(&sydney_night(), &phone()).is_some());
}

#[test]
fn location_failure_withholds_rendering() {
    let mut overlay = SkyOverlay::new();
    overlay.handle_event(&SensorEvent::PermissionGranted);
    overlay.handle_event(&SensorEvent::LocationFailed);
    overlay.handle_event(&SensorEvent::LocationFix {
        latitude: SYDNEY.0,
        longitude: SYDNEY.1,
    });
    overlay.handle_event(&SensorEvent::Orientation(OrientationReading::compass(0.0, 90.0)));
    assert_eq!(overlay.state(), AcquisitionState::LocationUnavailable);
    assert!(overlay.frame(&sydney_night(), &phone()).is_none());

    overlay.reset();
    assert_eq!(overlay.state(), AcquisitionState::AwaitingPermission);
}

// --- Configuration ---

#[test]
fn config_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "vertical_fov_deg": 90.0, "max_magnitude": 1.0, "offscreen_margin_px": 0 }}"#
    )
    .unwrap();

    let config = OverlayConfig::load(file.path()).unwrap();
    assert_eq!(config.vertical_fov_deg, 90.0);
    assert!(config.hide_below_horizon);

    let (az, alt) = acrux_horizontal();
    let mut overlay = SkyOverlay::with_config(config).unwrap();
    overlay.handle_event(&SensorEvent::PermissionGranted);
    overlay.handle_event(&SensorEvent::LocationFix {
        latitude: SYDNEY.0,
        longitude: SYDNEY.1,
    });
    overlay.handle_event(&SensorEvent::Orientation(OrientationReading::compass(az, alt + 90.0)));
    let frame = overlay.frame(&sydney_night(), &phone()).unwrap();
    assert!(frame.marker("Acrux").is_some());
    assert!(frame.marker("Gacrux").is_none());
    assert!(frame.markers.iter().all(|m| m.magnitude <= 1.0));
}

#[test]
fn invalid_config_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "vertical_fov_deg": -10 }}"#).unwrap();
    assert!(OverlayConfig::load(file.path()).is_err());
    assert!(OverlayConfig::load("/nonexistent/skystory.json").is_err());
}

// --- Celestial math across crates ---

#[test]
fn pole_altitude_equals_declination() {
    let pole = ObserverLocation::north_pole();
    for hours in [0.0, 5.5, 13.0, 23.9] {
        let instant = UtcInstant::j2000().add_seconds(hours * 3600.0);
        let lst = Lst::at(&pole, &instant);
        for star in StarCatalog::builtin().stars() {
            let pos = star.horizontal(&pole, &lst);
            assert!(
                (pos.altitude_degrees() - star.dec_degrees()).abs() < 1e-9,
                "{}",
                star.name()
            );
        }
    }
}

#[test]
fn meridian_transit_at_mid_latitude() {
    for star in StarCatalog::builtin().stars() {
        let pos = horizontal_from_lst(star.ra_hours(), star.dec_degrees(), 51.5, star.ra_hours());
        let expected_alt = 90.0 - (51.5 - star.dec_degrees()).abs();
        assert!((pos.altitude_degrees() - expected_alt).abs() < 1e-9, "{}", star.name());
        // acos is ill-conditioned next to the zenith.
        if star.dec_degrees() < 51.5 && pos.altitude_degrees() < 80.0 {
            assert!((pos.azimuth_degrees() - 180.0).abs() < 1e-4, "{}", star.name());
        }
    }
}

#[test]
fn lst_repeats_after_one_sidereal_day() {
    let start = sydney_night();
    let later = start.add_seconds(86164.0905);
    let a = Lst::from_longitude(SYDNEY.1, &start).hours();
    let b = Lst::from_longitude(SYDNEY.1, &later).hours();
    let diff = (a - b).abs();
    assert!(diff.min(24.0 - diff) < 1e-5);
}
