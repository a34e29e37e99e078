//! Front-end configuration with YAML schema and validation.
//!
//! Mistake-proofing through type-safe structs, serde schema checking
//! (`deny_unknown_fields`) and runtime semantic validation. The core
//! physics needs no configuration; everything here tunes presentation
//! and input clamping.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{SatError, SatResult};
use crate::orbit::scale::ScaleConfig;

/// Top-level visualizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Window geometry for the animated display.
    #[validate(nested)]
    #[serde(default)]
    pub window: WindowConfig,

    /// Accepted input ranges; values outside are clamped, not rejected.
    #[validate(nested)]
    #[serde(default)]
    pub input: InputRanges,

    /// Animation tuning.
    #[validate(nested)]
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Display scaler tuning.
    #[serde(default)]
    pub scale: ScaleTuning,

    /// Web dashboard settings.
    #[validate(nested)]
    #[serde(default)]
    pub web: WebConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            input: InputRanges::default(),
            simulation: SimulationConfig::default(),
            scale: ScaleTuning::default(),
            web: WebConfig::default(),
        }
    }
}

/// Window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// Canvas width in pixels.
    #[validate(range(min = 200.0, max = 7680.0))]
    pub width_px: f64,
    /// Canvas height in pixels.
    #[validate(range(min = 120.0, max = 4320.0))]
    pub height_px: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width_px: 1400.0,
            height_px: 900.0,
        }
    }
}

/// Input clamping ranges for the interactive front ends.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct InputRanges {
    /// Minimum satellite mass (kg).
    #[validate(range(min = 0.001))]
    pub mass_min_kg: f64,
    /// Maximum satellite mass (kg).
    pub mass_max_kg: f64,
    /// Minimum altitude (km).
    #[validate(range(min = 0.0))]
    pub altitude_min_km: f64,
    /// Maximum altitude (km).
    pub altitude_max_km: f64,
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            mass_min_kg: 1.0,
            mass_max_kg: 500_000.0,
            altitude_min_km: 150.0,
            altitude_max_km: 100_000.0,
        }
    }
}

impl InputRanges {
    /// Clamp a mass into the accepted range.
    #[must_use]
    pub fn clamp_mass(&self, mass_kg: f64) -> f64 {
        mass_kg.clamp(self.mass_min_kg, self.mass_max_kg)
    }

    /// Clamp an altitude into the accepted range.
    #[must_use]
    pub fn clamp_altitude(&self, altitude_km: f64) -> f64 {
        altitude_km.clamp(self.altitude_min_km, self.altitude_max_km)
    }
}

/// Animation tuning.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Frame interval (ms).
    #[validate(range(min = 1.0, max = 1000.0))]
    pub tick_ms: f64,
    /// Starting speed multiplier.
    #[validate(range(min = 0.1, max = 10.0))]
    pub default_speed: f64,
    /// Extra speed-up so slow orbits stay watchable.
    #[validate(range(min = 1.0))]
    pub visual_multiplier: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 33.0,
            default_speed: 1.0,
            visual_multiplier: 50.0,
        }
    }
}

/// Display scaler tuning, mirrored into [`ScaleConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleTuning {
    /// Linear-to-logarithmic transition altitude (km).
    pub linear_threshold_km: f64,
    /// Altitude mapped to the full pixel budget (km).
    pub max_altitude_km: f64,
    /// Gap kept between planet rim and tightest orbit (px).
    pub min_margin_px: f64,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        let scale = ScaleConfig::default();
        Self {
            linear_threshold_km: scale.linear_threshold_km,
            max_altitude_km: scale.max_altitude_km,
            min_margin_px: scale.min_margin_px,
        }
    }
}

/// Web dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WebConfig {
    /// Listen port.
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,
    /// Snapshot broadcast interval (ms).
    #[validate(range(min = 10.0, max = 5000.0))]
    pub stream_interval_ms: f64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            stream_interval_ms: 100.0,
        }
    }
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> SatResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SatResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantics()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SatResult<String> {
        serde_yaml::to_string(self).map_err(SatError::YamlParse)
    }

    /// Cross-field checks that per-field validators cannot express.
    fn validate_semantics(&self) -> SatResult<()> {
        if self.input.mass_max_kg <= self.input.mass_min_kg {
            return Err(SatError::config(format!(
                "mass_max_kg ({}) must exceed mass_min_kg ({})",
                self.input.mass_max_kg, self.input.mass_min_kg
            )));
        }
        if self.input.altitude_max_km <= self.input.altitude_min_km {
            return Err(SatError::config(format!(
                "altitude_max_km ({}) must exceed altitude_min_km ({})",
                self.input.altitude_max_km, self.input.altitude_min_km
            )));
        }
        if self.scale.max_altitude_km <= self.scale.linear_threshold_km {
            return Err(SatError::config(
                "scale.max_altitude_km must exceed scale.linear_threshold_km",
            ));
        }
        if self.scale.min_margin_px < 0.0 {
            return Err(SatError::config("scale.min_margin_px must not be negative"));
        }
        Ok(())
    }

    /// Build the scaler configuration for the configured window.
    #[must_use]
    pub fn scale_config(&self) -> ScaleConfig {
        let mut scale = ScaleConfig::for_canvas(self.window.width_px, self.window.height_px);
        scale.linear_threshold_km = self.scale.linear_threshold_km;
        scale.max_altitude_km = self.scale.max_altitude_km;
        scale.min_margin_px = self.scale.min_margin_px;
        scale
    }
}
