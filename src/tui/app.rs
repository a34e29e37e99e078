//! Animated orbit display: application state and logic.
//!
//! All UI state (running flag, parameter values, trail buffer) is
//! explicit struct state driven through [`OrbitApp::handle_key`] and
//! [`OrbitApp::update`]; the binary only translates terminal events and
//! draws snapshots.

use crossterm::event::KeyCode;

use crate::config::VizConfig;
use crate::orbit::physics::{angular_velocity, OrbitRequest, OrbitalParameters};
use crate::orbit::presets::PRESETS;
use crate::orbit::render::{satellite_position, OrbitTrail};
use crate::orbit::scale::{DisplayGeometry, ScaleConfig};
use crate::visualization::OrbitSnapshot;

/// Altitude step for one arrow-key press (km).
const ALTITUDE_STEP_KM: f64 = 10.0;

/// Coarse altitude step for page keys (km).
const ALTITUDE_PAGE_KM: f64 = 1000.0;

/// Mass step for one arrow-key press (kg).
const MASS_STEP_KG: f64 = 100.0;

/// Application state for the animated orbit display.
pub struct OrbitApp {
    /// Current orbit request; always the last valid one.
    request: OrbitRequest,
    /// Cached parameters, recomputed when the request changes.
    params: OrbitalParameters,
    /// Scaler for the canvas.
    scale: ScaleConfig,
    /// Front-end configuration.
    config: VizConfig,
    /// Satellite position on its circle (rad).
    pub angle: f64,
    /// Whether the animation is advancing.
    pub running: bool,
    /// Speed multiplier.
    pub speed: f64,
    /// Past screen positions (planet-centered coordinates).
    pub trail: OrbitTrail,
    /// Frame counter.
    pub frame_count: u64,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl OrbitApp {
    /// Create the app with the default LEO orbit.
    ///
    /// # Panics
    ///
    /// Never panics: the built-in default request is valid.
    #[must_use]
    #[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
    pub fn new(config: VizConfig) -> Self {
        let request = OrbitRequest::new(1000.0, 400.0).unwrap();
        let params = OrbitalParameters::compute(&request);
        let scale = config.scale_config();
        let geometry = DisplayGeometry::compute(request.altitude().as_km(), &scale);
        let speed = config.simulation.default_speed;

        Self {
            request,
            params,
            scale,
            config,
            angle: 0.0,
            running: false,
            speed,
            trail: OrbitTrail::new(geometry.trail_capacity()),
            frame_count: 0,
            should_quit: false,
        }
    }

    /// Current request.
    #[must_use]
    pub const fn request(&self) -> &OrbitRequest {
        &self.request
    }

    /// Cached orbital parameters.
    #[must_use]
    pub const fn params(&self) -> &OrbitalParameters {
        &self.params
    }

    /// Screen geometry for the current altitude.
    #[must_use]
    pub fn geometry(&self) -> DisplayGeometry {
        DisplayGeometry::compute(self.request.altitude().as_km(), &self.scale)
    }

    /// Full snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot::capture(&self.request, &self.scale, self.angle, self.running)
    }

    /// Replace the altitude, clamping into the configured range. The
    /// request only changes if the new value is valid.
    pub fn set_altitude_km(&mut self, altitude_km: f64) {
        let clamped = self.config.input.clamp_altitude(altitude_km);
        if let Ok(request) = OrbitRequest::new(self.request.mass().as_kg(), clamped) {
            self.apply_request(request);
        }
    }

    /// Replace the mass, clamping into the configured range.
    pub fn set_mass_kg(&mut self, mass_kg: f64) {
        let clamped = self.config.input.clamp_mass(mass_kg);
        if let Ok(request) = OrbitRequest::new(clamped, self.request.altitude().as_km()) {
            self.apply_request(request);
        }
    }

    fn apply_request(&mut self, request: OrbitRequest) {
        let altitude_changed =
            (request.altitude().as_km() - self.request.altitude().as_km()).abs() > f64::EPSILON;
        self.request = request;
        self.params = OrbitalParameters::compute(&self.request);
        if altitude_changed {
            // New circle: the old trail would cut across it
            self.trail.clear();
            self.trail.resize(self.geometry().trail_capacity());
        }
    }

    /// Reset the animation, keeping the parameters.
    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.frame_count = 0;
        self.trail.clear();
    }

    /// Update the animation for one frame.
    pub fn update(&mut self) {
        if !self.running {
            return;
        }

        let dt = self.config.simulation.tick_ms / 1000.0;
        let omega = angular_velocity(self.request.altitude())
            * self.config.simulation.visual_multiplier
            * self.speed;
        self.angle = (self.angle + omega * dt) % std::f64::consts::TAU;

        let geometry = self.geometry();
        let (x, y) = satellite_position((0.0, 0.0), &geometry, self.angle);
        self.trail.push(x, y);

        self.frame_count += 1;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter => self.running = !self.running,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Up => self.set_altitude_km(self.request.altitude().as_km() + ALTITUDE_STEP_KM),
            KeyCode::Down => {
                self.set_altitude_km(self.request.altitude().as_km() - ALTITUDE_STEP_KM);
            }
            KeyCode::PageUp => {
                self.set_altitude_km(self.request.altitude().as_km() + ALTITUDE_PAGE_KM);
            }
            KeyCode::PageDown => {
                self.set_altitude_km(self.request.altitude().as_km() - ALTITUDE_PAGE_KM);
            }
            KeyCode::Right => self.set_mass_kg(self.request.mass().as_kg() + MASS_STEP_KG),
            KeyCode::Left => self.set_mass_kg(self.request.mass().as_kg() - MASS_STEP_KG),
            KeyCode::Char('+' | '=') => {
                self.speed = (self.speed * 2.0).min(10.0);
            }
            KeyCode::Char('-') => {
                self.speed = (self.speed / 2.0).max(0.1);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(preset) = PRESETS.get(index) {
                    let mass = self.config.input.clamp_mass(preset.mass_kg);
                    let altitude = self.config.input.clamp_altitude(preset.altitude_km);
                    if let Ok(request) = OrbitRequest::new(mass, altitude) {
                        self.apply_request(request);
                    }
                }
            }
            _ => {}
        }
    }
}

impl Default for OrbitApp {
    fn default() -> Self {
        Self::new(VizConfig::default())
    }
}
