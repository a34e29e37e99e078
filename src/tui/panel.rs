//! Control panel: parameter entry with a background simulation thread.
//!
//! The panel owns text fields for mass and altitude; the animation runs
//! on a separate thread so typing never stalls the orbit. The thread
//! reads the latest valid parameters from shared state, advances the
//! satellite angle, and publishes snapshots. Cancellation is nothing
//! more than clearing the loop-continue flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::KeyCode;

use crate::config::VizConfig;
use crate::orbit::physics::{angular_velocity, OrbitRequest};
use crate::orbit::presets::PRESETS;
use crate::orbit::scale::ScaleConfig;
use crate::visualization::OrbitSnapshot;

/// State shared between the panel and its simulation thread.
#[derive(Debug)]
pub struct SharedSim {
    /// Latest valid request.
    request: RwLock<OrbitRequest>,
    /// Satellite angle (rad), written by the thread.
    angle: RwLock<f64>,
    /// Whether the animation advances.
    running: AtomicBool,
    /// Loop-continue flag; clearing it is the whole shutdown protocol.
    alive: AtomicBool,
}

impl SharedSim {
    fn new(request: OrbitRequest) -> Self {
        Self {
            request: RwLock::new(request),
            angle: RwLock::new(0.0),
            running: AtomicBool::new(false),
            alive: AtomicBool::new(true),
        }
    }

    /// Latest valid request.
    pub fn request(&self) -> OrbitRequest {
        self.request
            .read()
            .map_or_else(|e| *e.into_inner(), |guard| *guard)
    }

    /// Current animation angle (rad).
    pub fn angle(&self) -> f64 {
        self.angle
            .read()
            .map_or_else(|e| *e.into_inner(), |guard| *guard)
    }

    /// Whether the animation is advancing.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    fn set_request(&self, request: OrbitRequest) {
        if let Ok(mut guard) = self.request.write() {
            *guard = request;
        }
    }

    fn set_angle(&self, angle: f64) {
        if let Ok(mut guard) = self.angle.write() {
            *guard = angle;
        }
    }
}

/// Which text field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Mass,
    Altitude,
}

/// Control-panel application state.
pub struct ControlPanel {
    shared: Arc<SharedSim>,
    handle: Option<JoinHandle<()>>,
    config: VizConfig,
    scale: ScaleConfig,
    /// Text being edited for the mass field.
    pub mass_input: String,
    /// Text being edited for the altitude field.
    pub altitude_input: String,
    /// Focused field.
    pub focus: Field,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl ControlPanel {
    /// Create the panel and spawn its simulation thread.
    ///
    /// # Panics
    ///
    /// Never panics: the built-in default request is valid.
    #[must_use]
    #[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
    pub fn new(config: VizConfig) -> Self {
        let request = OrbitRequest::new(1000.0, 400.0).unwrap();
        let shared = Arc::new(SharedSim::new(request));
        let scale = config.scale_config();

        let handle = spawn_sim_thread(
            Arc::clone(&shared),
            config.simulation.tick_ms,
            config.simulation.visual_multiplier,
        );

        Self {
            shared,
            handle: Some(handle),
            config,
            scale,
            mass_input: "1000".to_string(),
            altitude_input: "400".to_string(),
            focus: Field::Altitude,
            should_quit: false,
        }
    }

    /// Shared state handle, used by the render loop.
    #[must_use]
    pub fn shared(&self) -> Arc<SharedSim> {
        Arc::clone(&self.shared)
    }

    /// Snapshot of the simulation for rendering.
    #[must_use]
    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot::capture(
            &self.shared.request(),
            &self.scale,
            self.shared.angle(),
            self.shared.is_running(),
        )
    }

    /// Start or stop the animation.
    pub fn toggle_running(&self) {
        let now = !self.shared.running.load(Ordering::Relaxed);
        self.shared.running.store(now, Ordering::Relaxed);
    }

    /// Apply the text fields.
    ///
    /// Non-numeric input is ignored locally: the offending field keeps
    /// its text, but the simulation holds the last valid parameters.
    /// Out-of-range values are clamped to the configured bounds.
    pub fn apply_inputs(&mut self) {
        let mass: Option<f64> = self.mass_input.trim().parse().ok();
        let altitude: Option<f64> = self.altitude_input.trim().parse().ok();

        let current = self.shared.request();
        let mass_kg = mass.map_or_else(
            || current.mass().as_kg(),
            |m| self.config.input.clamp_mass(m),
        );
        let altitude_km = altitude.map_or_else(
            || current.altitude().as_km(),
            |a| self.config.input.clamp_altitude(a),
        );

        if let Ok(request) = OrbitRequest::new(mass_kg, altitude_km) {
            self.shared.set_request(request);
            // Echo the clamped values back into the fields
            self.mass_input = format_value(request.mass().as_kg());
            self.altitude_input = format_value(request.altitude().as_km());
        }
    }

    /// Apply a preset by table index.
    pub fn apply_preset(&mut self, index: usize) {
        if let Some(preset) = PRESETS.get(index) {
            self.mass_input = format_value(preset.mass_kg);
            self.altitude_input = format_value(preset.altitude_km);
            self.apply_inputs();
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Field::Mass => Field::Altitude,
                    Field::Altitude => Field::Mass,
                };
            }
            KeyCode::Enter => self.apply_inputs(),
            KeyCode::Char(' ') => self.toggle_running(),
            KeyCode::Char(c @ '0'..='9') | KeyCode::Char(c @ '.') => {
                self.focused_field_mut().push(c);
            }
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
            }
            KeyCode::Char(c @ '!'..='~') if !c.is_ascii_digit() => {
                // Letters select presets by initial; anything else is noise
                if let Some(index) = PRESETS
                    .iter()
                    .position(|p| p.name.to_ascii_lowercase().starts_with(c.to_ascii_lowercase()))
                {
                    self.apply_preset(index);
                }
            }
            _ => {}
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Mass => &mut self.mass_input,
            Field::Altitude => &mut self.altitude_input,
        }
    }

    /// Stop the simulation thread and wait for it to exit.
    pub fn shutdown(&mut self) {
        self.shared.alive.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ControlPanel {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Spawn the background simulation loop.
///
/// The loop reads the latest request each tick, advances the angle when
/// running, and exits as soon as the alive flag clears.
fn spawn_sim_thread(
    shared: Arc<SharedSim>,
    tick_ms: f64,
    visual_multiplier: f64,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let dt = tick_ms / 1000.0;
        let tick = Duration::from_millis(tick_ms as u64);

        while shared.alive.load(Ordering::Relaxed) {
            if shared.running.load(Ordering::Relaxed) {
                let request = shared.request();
                let omega = angular_velocity(request.altitude()) * visual_multiplier;
                let angle = (shared.angle() + omega * dt) % std::f64::consts::TAU;
                shared.set_angle(angle);
            }
            std::thread::sleep(tick);
        }
    })
}
