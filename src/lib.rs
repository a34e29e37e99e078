//! # satorb
//!
//! Interactive satellite-orbit simulator for education.
//!
//! Computes classical two-body circular-orbit mechanics from a satellite
//! mass and altitude, classifies the orbit into a named band
//! (LEO/MEO/GEO/HEO), and drives several interchangeable front ends off
//! the same pure-function core:
//!
//! - a real-time animated terminal display (`tui::app`, feature `tui`)
//! - a control-panel view with a background simulation thread
//!   (`tui::panel`, feature `tui`)
//! - a web dashboard with a JSON API and WebSocket stream
//!   (`visualization::web`, feature `web`)
//! - a browser canvas dashboard (`orbit::wasm`, feature `wasm`)
//!
//! ## Example
//!
//! ```rust
//! use satorb::prelude::*;
//!
//! let request = OrbitRequest::new(1000.0, 400.0)?;
//! let params = OrbitalParameters::compute(&request);
//! let class = classify_orbit(request.altitude().as_km());
//!
//! assert!(params.velocity_ms > 7000.0);
//! assert_eq!(class.band, OrbitBand::Leo);
//! # Ok::<(), satorb::SatError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,  // Closed-form orbital equations stay in textbook form
    clippy::imprecise_flops,   // Numerical code choices are intentional
    clippy::too_many_lines,
    clippy::missing_const_for_fn  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod orbit;
pub mod visualization;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{SatError, SatResult};
    pub use crate::orbit::analysis::MissionAnalysis;
    pub use crate::orbit::classify::{classify_orbit, OrbitBand, OrbitClassification};
    pub use crate::orbit::physics::{OrbitRequest, OrbitalParameters};
    pub use crate::orbit::presets::SatellitePreset;
    pub use crate::orbit::scale::{scale_for_display, DisplayGeometry, ScaleConfig};
    pub use crate::orbit::units::{Altitude, SatMass, EARTH_MASS, EARTH_MU, EARTH_RADIUS_KM, G};
}

/// Re-export for public API
pub use error::{SatError, SatResult};
