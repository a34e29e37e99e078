//! End-to-end acceptance tests over the public API.
//!
//! Each test pins a published figure for a real satellite, or an
//! invariant property every front end relies on, so a regression in the
//! core is caught here even if every unit test is rewritten.

use satorb::orbit::prelude::*;
use satorb::orbit::{classify, compute_orbit};
use satorb::visualization::OrbitSnapshot;

/// ISS-class orbit: 1000 kg at 400 km circles at ~7.67 km/s every ~92.5 min.
#[test]
fn leo_matches_published_figures() {
    let params = compute_orbit(1000.0, 400.0).expect("valid request");

    assert!(
        (params.velocity_ms - 7670.0).abs() < 20.0,
        "velocity = {} m/s",
        params.velocity_ms
    );
    assert!(
        (params.period_minutes() - 92.5).abs() < 1.0,
        "period = {} min",
        params.period_minutes()
    );
    assert_eq!(classify_orbit(400.0).band, OrbitBand::Leo);
}

/// GPS orbit: 2000 kg at 20200 km circles at ~3.87 km/s every ~11.97 h.
#[test]
fn gps_orbit_matches_published_figures() {
    let params = compute_orbit(2000.0, 20_200.0).expect("valid request");

    assert!(
        (params.velocity_ms - 3873.0).abs() < 10.0,
        "velocity = {} m/s",
        params.velocity_ms
    );
    assert!(
        (params.period_hours() - 11.97).abs() < 0.05,
        "period = {} h",
        params.period_hours()
    );
    assert_eq!(classify_orbit(20_200.0).band, OrbitBand::Meo);
}

/// Geostationary orbit: one sidereal day, classified GEO.
#[test]
fn geostationary_period_is_one_sidereal_day() {
    let params = compute_orbit(5000.0, 35_786.0).expect("valid request");

    let hours = params.period_hours();
    assert!(hours > 23.9 && hours < 24.0, "period = {hours} h");
    assert_eq!(classify_orbit(35_786.0).band, OrbitBand::Geo);
}

/// Below 160 km the band flags the orbit as unstable.
#[test]
fn suborbital_altitude_is_flagged_unstable() {
    let class = classify_orbit(100.0);
    assert_eq!(class.band, OrbitBand::VeryLow);
    assert!(!class.band.is_stable());
}

/// Higher orbits are always slower and take longer, across the whole
/// supported range.
#[test]
fn velocity_decreases_and_period_increases_with_altitude() {
    let mut prev_velocity = f64::INFINITY;
    let mut prev_period = 0.0;

    let mut altitude_km = 1.0;
    while altitude_km < 1_000_000.0 {
        let velocity = orbital_velocity(Altitude::from_km(altitude_km));
        let period = orbital_period(Altitude::from_km(altitude_km));

        assert!(velocity < prev_velocity, "velocity rose at {altitude_km} km");
        assert!(period > prev_period, "period fell at {altitude_km} km");

        prev_velocity = velocity;
        prev_period = period;
        altitude_km *= 1.7;
    }
}

/// Every altitude gets exactly one band, with no gaps at the thresholds.
#[test]
fn classification_partitions_all_altitudes() {
    let boundary_probes = [
        0.0,
        classify::UNSTABLE_ALTITUDE_KM - 0.001,
        classify::UNSTABLE_ALTITUDE_KM,
        classify::LEO_CEILING_KM,
        classify::LEO_CEILING_KM + 0.001,
        GEO_ALTITUDE_KM - classify::GEO_WINDOW_KM,
        GEO_ALTITUDE_KM - classify::GEO_WINDOW_KM + 0.001,
        GEO_ALTITUDE_KM,
        GEO_ALTITUDE_KM + classify::GEO_WINDOW_KM - 0.001,
        GEO_ALTITUDE_KM + classify::GEO_WINDOW_KM,
        1e7,
    ];

    let expected = [
        OrbitBand::VeryLow,
        OrbitBand::VeryLow,
        OrbitBand::Leo,
        OrbitBand::Leo,
        OrbitBand::Meo,
        OrbitBand::Meo,
        OrbitBand::Geo,
        OrbitBand::Geo,
        OrbitBand::Geo,
        OrbitBand::Heo,
        OrbitBand::Heo,
    ];

    for (altitude, band) in boundary_probes.iter().zip(expected) {
        assert_eq!(
            classify_orbit(*altitude).band,
            band,
            "wrong band at {altitude} km"
        );
    }
}

/// The GEO window is reachable from both sides of the nominal altitude.
#[test]
fn geo_window_spans_both_sides() {
    for offset in [-99.0, -50.0, 0.0, 50.0, 99.0] {
        assert_eq!(
            classify_orbit(GEO_ALTITUDE_KM + offset).band,
            OrbitBand::Geo,
            "offset {offset}"
        );
    }
}

/// The scaler keeps every altitude inside the pixel budget.
#[test]
fn scaler_clamps_every_altitude_into_budget() {
    let config = ScaleConfig::default();
    for altitude_km in [0.0, 150.0, 400.0, 1000.0, 2000.0, 35_786.0, 100_000.0, 1e8] {
        let px = scale_for_display(altitude_km, &config);
        assert!(px >= config.min_orbit_px(), "too small at {altitude_km} km");
        assert!(px <= config.max_orbit_px(), "too big at {altitude_km} km");
    }
}

/// LEO and GEO stay visually distinguishable despite the 90x altitude gap.
#[test]
fn scaler_separates_leo_from_geo_on_screen() {
    let config = ScaleConfig::default();
    let leo_px = scale_for_display(400.0, &config);
    let geo_px = scale_for_display(35_786.0, &config);

    assert!(geo_px - leo_px > 20.0, "LEO {leo_px} px vs GEO {geo_px} px");
    assert!(geo_px < config.max_orbit_px());
}

/// Out-of-range requests are clamped at the boundary, never rejected.
#[test]
fn altitude_is_clamped_not_rejected() {
    let request = OrbitRequest::new(1000.0, -250.0).expect("clamped request");
    assert!((request.altitude().as_km() - 0.0).abs() < 1e-9);

    let params = OrbitalParameters::compute(&request);
    assert!(params.is_finite());
}

/// A snapshot is internally consistent: physics, band, analysis and
/// geometry all describe the same request.
#[test]
fn snapshot_sections_agree() {
    let request = OrbitRequest::new(420_000.0, 408.0).expect("valid request");
    let snap = OrbitSnapshot::capture(&request, &ScaleConfig::default(), 0.0, false);

    assert_eq!(snap.classification.band, OrbitBand::Leo);
    assert!((snap.parameters.velocity_ms - orbital_velocity(request.altitude())).abs() < 1e-9);
    assert!(snap
        .analysis
        .risk_factors
        .contains(&"heavy payload raises launch cost"));
    assert!(snap.geometry.orbit_px >= snap.geometry.earth_px + 15.0);

    let json = snap.to_json().expect("serializable");
    assert!(json.contains("\"Leo\""));
}

/// Every preset produces finite physics and its published band.
#[test]
fn presets_compute_cleanly() {
    for preset in PRESETS {
        let request = preset.to_request().expect("preset request");
        let params = OrbitalParameters::compute(&request);
        assert!(params.is_finite(), "{} broke the engine", preset.name);
        assert!(params.velocity_ms > 0.0);
    }

    assert_eq!(
        classify_orbit(find_preset("Geostationary").expect("preset").altitude_km).band,
        OrbitBand::Geo
    );
}

/// Energy, escape velocity and force keep their analytic relationships.
#[test]
fn physics_quantities_are_mutually_consistent() {
    for altitude_km in [200.0, 550.0, 5000.0, 20_200.0, 35_786.0] {
        let altitude = Altitude::from_km(altitude_km);
        let mass = SatMass::from_kg(1234.0);

        // E = -1/2 m v² for a circular orbit
        let energy = orbital_energy(mass, altitude);
        let kinetic = 0.5 * mass.as_kg() * orbital_velocity(altitude).powi(2);
        assert!((energy + kinetic).abs() / kinetic < 1e-12, "at {altitude_km} km");

        // v_esc = sqrt(2) v
        let ratio = escape_velocity(altitude) / orbital_velocity(altitude);
        assert!((ratio - std::f64::consts::SQRT_2).abs() < 1e-12);

        // F = m ω² r
        let r = altitude.orbital_radius_m();
        let from_omega = mass.as_kg() * angular_velocity(altitude).powi(2) * r;
        let force = centripetal_force(mass, altitude);
        assert!((force - from_omega).abs() / force < 1e-12);
    }
}
