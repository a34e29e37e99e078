//! WASM bindings for the browser canvas dashboard.
//!
//! Exposes a JavaScript-drivable orbit view with the same physics,
//! classification and scaling as the native front ends.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { OrbitVisualizer } from 'satorb';
//!
//! async function main() {
//!     await init();
//!
//!     const view = new OrbitVisualizer(720, 720);
//!     view.set_altitude_km(408);
//!     view.set_mass_kg(420000);
//!     setInterval(() => {
//!         view.tick(0.033);
//!         drawCircle(view.sat_x(), view.sat_y(), view.marker_px());
//!     }, 33);
//! }
//! ```

// WASM-bindgen exports don't need #[must_use] - values returned to JS
#![allow(clippy::must_use_candidate, clippy::unwrap_used)]

use wasm_bindgen::prelude::*;

use crate::orbit::classify::classify_orbit;
use crate::orbit::physics::{OrbitRequest, OrbitalParameters};
use crate::orbit::presets::find_preset;
use crate::orbit::render::{render_scene, satellite_position, OrbitTrail};
use crate::orbit::scale::{DisplayGeometry, ScaleConfig};
use crate::orbit::units::EARTH_MU;
use crate::visualization::OrbitSnapshot;

/// Animation speed-up so one LEO lap takes seconds instead of an hour.
const VISUAL_MULTIPLIER: f64 = 5000.0;

/// WASM-exported orbit view state.
#[wasm_bindgen]
pub struct OrbitVisualizer {
    request: OrbitRequest,
    scale: ScaleConfig,
    center: (f64, f64),
    angle: f64,
    running: bool,
    speed: f64,
    trail: OrbitTrail,
}

#[wasm_bindgen]
impl OrbitVisualizer {
    /// Create a view for a canvas of the given pixel size, showing the
    /// default LEO orbit.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let request = OrbitRequest::new(1000.0, 400.0).unwrap();
        let scale = ScaleConfig::for_canvas(canvas_width, canvas_height);
        let trail = OrbitTrail::new(
            DisplayGeometry::compute(request.altitude().as_km(), &scale).trail_capacity(),
        );
        Self {
            request,
            scale,
            center: (canvas_width / 2.0, canvas_height / 2.0),
            angle: 0.0,
            running: false,
            speed: 1.0,
            trail,
        }
    }

    /// Update the satellite mass (kg). Invalid values are ignored and the
    /// last valid request stays on display.
    pub fn set_mass_kg(&mut self, mass_kg: f64) {
        if let Ok(request) = OrbitRequest::new(mass_kg, self.request.altitude().as_km()) {
            self.request = request;
        }
    }

    /// Update the orbit altitude (km). Invalid values are ignored.
    pub fn set_altitude_km(&mut self, altitude_km: f64) {
        if let Ok(request) = OrbitRequest::new(self.request.mass().as_kg(), altitude_km) {
            self.request = request;
            self.clear_trail_for_new_circle();
        }
    }

    /// Apply a named preset. Returns false for unknown names.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        match find_preset(name).and_then(|p| p.to_request().ok()) {
            Some(request) => {
                self.request = request;
                self.clear_trail_for_new_circle();
                true
            }
            None => false,
        }
    }

    fn clear_trail_for_new_circle(&mut self) {
        self.trail.clear();
        self.trail.resize(self.geometry().trail_capacity());
    }

    /// Start or stop the animation.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Set the speed multiplier, clamped to `[0.1, 10]`.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed.clamp(0.1, 10.0);
        }
    }

    /// Advance the animation by `dt_seconds` of wall-clock time.
    pub fn tick(&mut self, dt_seconds: f64) {
        if !self.running || !dt_seconds.is_finite() {
            return;
        }
        let r = self.request.altitude().orbital_radius_m();
        let omega = (EARTH_MU / r.powi(3)).sqrt() * VISUAL_MULTIPLIER * self.speed;
        self.angle = (self.angle + omega * dt_seconds) % std::f64::consts::TAU;

        let (x, y) = satellite_position(self.center, &self.geometry(), self.angle);
        self.trail.push(x, y);
    }

    /// Reset the satellite to angle zero.
    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.trail.clear();
    }

    /// The full scene as a JSON list of draw commands, for canvases that
    /// replay commands instead of using the individual accessors.
    pub fn render_commands_json(&self) -> String {
        let band = classify_orbit(self.request.altitude().as_km()).band;
        let commands = render_scene(self.center, &self.geometry(), self.angle, band, &self.trail);
        serde_json::to_string(&commands).unwrap_or_else(|_| "[]".to_string())
    }

    // ---- screen-space accessors ----

    /// Planet radius (px).
    pub fn earth_px(&self) -> f64 {
        self.geometry().earth_px
    }

    /// Orbit circle radius (px).
    pub fn orbit_px(&self) -> f64 {
        self.geometry().orbit_px
    }

    /// Satellite marker radius (px).
    pub fn marker_px(&self) -> f64 {
        self.geometry().satellite_marker_px()
    }

    /// Satellite screen X (px).
    pub fn sat_x(&self) -> f64 {
        satellite_position(self.center, &self.geometry(), self.angle).0
    }

    /// Satellite screen Y (px).
    pub fn sat_y(&self) -> f64 {
        satellite_position(self.center, &self.geometry(), self.angle).1
    }

    /// Planet center X (px).
    pub fn center_x(&self) -> f64 {
        self.center.0
    }

    /// Planet center Y (px).
    pub fn center_y(&self) -> f64 {
        self.center.1
    }

    // ---- physics accessors ----

    /// Current angle on the orbit circle (rad).
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Whether the animation is advancing.
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Orbital velocity (m/s).
    pub fn velocity_ms(&self) -> f64 {
        self.parameters().velocity_ms
    }

    /// Orbital period (s).
    pub fn period_s(&self) -> f64 {
        self.parameters().period_s
    }

    /// Short band label ("LEO", "GEO", ...).
    pub fn band_label(&self) -> String {
        classify_orbit(self.request.altitude().as_km())
            .band
            .label()
            .to_string()
    }

    /// Full snapshot as a JSON string for rich dashboards.
    pub fn snapshot_json(&self) -> String {
        OrbitSnapshot::capture(&self.request, &self.scale, self.angle, self.running)
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn geometry(&self) -> DisplayGeometry {
        DisplayGeometry::compute(self.request.altitude().as_km(), &self.scale)
    }

    fn parameters(&self) -> OrbitalParameters {
        OrbitalParameters::compute(&self.request)
    }
}
