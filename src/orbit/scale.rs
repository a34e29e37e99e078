//! Adaptive screen-space scaling for orbit display.
//!
//! Keeps orbits from 150 km to 100 000 km visible on a fixed canvas by
//! switching from linear to logarithmic radius growth above a threshold.
//! Linear scale alone would either pin GEO off-screen or flatten LEO onto
//! the planet's surface. This is a presentation heuristic, not a physical
//! law; it is deliberately independent of the physics engine.

use serde::{Deserialize, Serialize};

/// Tuning for the display scaler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Pixel radius of the drawn planet.
    pub base_radius_px: f64,
    /// Pixel budget available beyond the planet's rim.
    pub available_px: f64,
    /// Altitudes up to this grow linearly (km).
    pub linear_threshold_km: f64,
    /// Altitude mapped to the full pixel budget in the log regime (km).
    pub max_altitude_km: f64,
    /// Minimum gap between planet rim and orbit circle (px).
    pub min_margin_px: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            base_radius_px: 60.0,
            available_px: 300.0,
            linear_threshold_km: 1000.0,
            max_altitude_km: 100_000.0,
            min_margin_px: 15.0,
        }
    }
}

impl ScaleConfig {
    /// Derive a config from a canvas size, leaving room for margins.
    #[must_use]
    pub fn for_canvas(width_px: f64, height_px: f64) -> Self {
        let base = (width_px.min(height_px) / 8.0).clamp(30.0, 100.0);
        let available = (width_px.min(height_px) / 2.0 - base - 20.0).max(40.0);
        Self {
            base_radius_px: base,
            available_px: available,
            ..Self::default()
        }
    }

    /// Smallest radius the scaler will ever return.
    #[must_use]
    pub fn min_orbit_px(&self) -> f64 {
        self.base_radius_px + self.min_margin_px
    }

    /// Largest radius the scaler will ever return.
    #[must_use]
    pub fn max_orbit_px(&self) -> f64 {
        self.base_radius_px + self.available_px
    }
}

/// Screen-space geometry for one orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayGeometry {
    /// Planet radius (px).
    pub earth_px: f64,
    /// Orbit circle radius (px).
    pub orbit_px: f64,
}

impl DisplayGeometry {
    /// Compute the geometry for an altitude under the given config.
    #[must_use]
    pub fn compute(altitude_km: f64, config: &ScaleConfig) -> Self {
        Self {
            earth_px: config.base_radius_px,
            orbit_px: scale_for_display(altitude_km, config),
        }
    }

    /// Ratio of orbit radius to planet radius, shown on info panels.
    #[must_use]
    pub fn scale_ratio(&self) -> f64 {
        self.orbit_px / self.earth_px
    }

    /// Marker size for the satellite dot, shrinking with tight orbits.
    #[must_use]
    pub fn satellite_marker_px(&self) -> f64 {
        (self.orbit_px / 20.0).clamp(4.0, 10.0)
    }

    /// Trail buffer capacity proportional to the orbit circumference.
    #[must_use]
    pub fn trail_capacity(&self) -> usize {
        (self.orbit_px * 3.0).clamp(100.0, 400.0) as usize
    }
}

/// Map an altitude to an orbit circle radius in pixels.
///
/// Below `linear_threshold_km` the radius grows linearly with altitude;
/// above it, with the base-10 logarithm of altitude normalized against
/// `max_altitude_km`. The result is always clamped into
/// `[base + margin, base + available]`, whatever the altitude.
#[must_use]
pub fn scale_for_display(altitude_km: f64, config: &ScaleConfig) -> f64 {
    let altitude_km = altitude_km.max(0.0);

    let raw = if altitude_km <= config.linear_threshold_km {
        let px_per_km = config.available_px / config.linear_threshold_km;
        config.base_radius_px + altitude_km * px_per_km
    } else {
        let normalized = (altitude_km.log10() / config.max_altitude_km.log10()).min(1.0);
        config.base_radius_px + config.available_px * normalized
    };

    raw.clamp(config.min_orbit_px(), config.max_orbit_px())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn config() -> ScaleConfig {
        ScaleConfig::default()
    }

    #[test]
    fn test_sea_level_clamps_to_minimum_margin() {
        let px = scale_for_display(0.0, &config());
        assert!((px - config().min_orbit_px()).abs() < EPSILON);
    }

    #[test]
    fn test_linear_regime() {
        // 500 km at 300 px / 1000 km = 150 px past the rim
        let px = scale_for_display(500.0, &config());
        assert!((px - 210.0).abs() < EPSILON);
    }

    #[test]
    fn test_threshold_fills_budget() {
        let px = scale_for_display(1000.0, &config());
        assert!((px - config().max_orbit_px()).abs() < EPSILON);
    }

    #[test]
    fn test_log_regime() {
        // log10(2000)/log10(100000) = 0.6602…
        let px = scale_for_display(2000.0, &config());
        let expected = 60.0 + 300.0 * (2000.0_f64.log10() / 100_000.0_f64.log10());
        assert!((px - expected).abs() < 1e-6);
        assert!(px < config().max_orbit_px());
    }

    #[test]
    fn test_ceiling_altitude_fills_budget() {
        let px = scale_for_display(100_000.0, &config());
        assert!((px - config().max_orbit_px()).abs() < 1e-6);
    }

    #[test]
    fn test_beyond_ceiling_stays_clamped() {
        let px = scale_for_display(100_000_000.0, &config());
        assert!((px - config().max_orbit_px()).abs() < EPSILON);
    }

    #[test]
    fn test_clamped_for_every_altitude() {
        let cfg = config();
        let mut altitude = 0.0;
        while altitude < 200_000.0 {
            let px = scale_for_display(altitude, &cfg);
            assert!(px >= cfg.min_orbit_px() - EPSILON, "too small at {altitude}");
            assert!(px <= cfg.max_orbit_px() + EPSILON, "too big at {altitude}");
            altitude += 93.7;
        }
    }

    #[test]
    fn test_monotonic_within_each_regime() {
        let cfg = config();
        // Linear side
        let mut prev = scale_for_display(60.0, &cfg);
        for alt in [100.0, 300.0, 600.0, 900.0] {
            let px = scale_for_display(alt, &cfg);
            assert!(px > prev);
            prev = px;
        }
        // Log side
        let mut prev = scale_for_display(1500.0, &cfg);
        for alt in [3000.0, 10_000.0, 35_786.0, 90_000.0] {
            let px = scale_for_display(alt, &cfg);
            assert!(px > prev);
            prev = px;
        }
    }

    #[test]
    fn test_for_canvas_fits_window() {
        let cfg = ScaleConfig::for_canvas(1400.0, 900.0);
        assert!(cfg.base_radius_px >= 30.0 && cfg.base_radius_px <= 100.0);
        assert!(cfg.max_orbit_px() <= 900.0 / 2.0 + cfg.base_radius_px);

        // Tiny window still yields a usable budget
        let small = ScaleConfig::for_canvas(200.0, 120.0);
        assert!(small.available_px >= 40.0);
    }

    #[test]
    fn test_geometry_invariant() {
        let cfg = config();
        for alt in [0.0, 150.0, 400.0, 2000.0, 35_786.0, 1e7] {
            let geo = DisplayGeometry::compute(alt, &cfg);
            assert!(geo.orbit_px >= geo.earth_px + cfg.min_margin_px - EPSILON);
            assert!(geo.orbit_px <= geo.earth_px + cfg.available_px + EPSILON);
        }
    }

    #[test]
    fn test_marker_and_trail_bounds() {
        let cfg = config();
        let tight = DisplayGeometry::compute(0.0, &cfg);
        let wide = DisplayGeometry::compute(100_000.0, &cfg);

        assert!(tight.satellite_marker_px() >= 4.0);
        assert!(wide.satellite_marker_px() <= 10.0);
        assert!(tight.trail_capacity() >= 100);
        assert!(wide.trail_capacity() <= 400);
    }

    #[test]
    fn test_scale_ratio() {
        let geo = DisplayGeometry::compute(1000.0, &config());
        assert!((geo.scale_ratio() - 6.0).abs() < EPSILON);
    }
}
