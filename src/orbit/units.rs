//! Type-safe physical quantities and constants.
//!
//! Scalar newtype wrappers over the `uom` crate keep kilometers and meters
//! (and kilograms and tonnes) from being mixed up at compile time. The
//! orbital equations extract raw SI values at the last moment, compute in
//! `f64`, and wrap the results again.

use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Mass};
use uom::si::length::{kilometer, meter};
use uom::si::mass::kilogram;

/// Gravitational constant (m³ kg⁻¹ s⁻²).
pub const G: f64 = 6.674_30e-11;

/// Earth mass in kilograms.
pub const EARTH_MASS: f64 = 5.972e24;

/// Standard gravitational parameter for Earth, G·M (m³/s²).
pub const EARTH_MU: f64 = G * EARTH_MASS;

/// Earth mean radius (m).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Earth mean radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Eastward surface speed at the equator (m/s), used for launch delta-v.
pub const SURFACE_ROTATION_MPS: f64 = 465.0;

/// Geostationary altitude (km).
pub const GEO_ALTITUDE_KM: f64 = 35_786.0;

/// Highest altitude any front end accepts (km).
pub const MAX_SUPPORTED_ALTITUDE_KM: f64 = 100_000_000.0;

/// Altitude above Earth's mean surface.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Altitude(Length);

impl Altitude {
    /// Create an altitude from kilometers.
    #[must_use]
    pub fn from_km(km: f64) -> Self {
        Self(Length::new::<kilometer>(km))
    }

    /// Create an altitude from meters.
    #[must_use]
    pub fn from_meters(m: f64) -> Self {
        Self(Length::new::<meter>(m))
    }

    /// Altitude in kilometers.
    #[must_use]
    pub fn as_km(&self) -> f64 {
        self.0.get::<kilometer>()
    }

    /// Altitude in meters.
    #[must_use]
    pub fn as_meters(&self) -> f64 {
        self.0.get::<meter>()
    }

    /// Distance from Earth's center (m): Earth radius plus altitude.
    #[must_use]
    pub fn orbital_radius_m(&self) -> f64 {
        EARTH_RADIUS_M + self.as_meters()
    }

    /// Clamp into the given kilometer range.
    #[must_use]
    pub fn clamp_km(&self, min_km: f64, max_km: f64) -> Self {
        Self::from_km(self.as_km().clamp(min_km, max_km))
    }

    /// Check the value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.as_meters().is_finite()
    }
}

/// Satellite mass.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SatMass(Mass);

impl SatMass {
    /// Create a mass from kilograms.
    #[must_use]
    pub fn from_kg(kg: f64) -> Self {
        Self(Mass::new::<kilogram>(kg))
    }

    /// Mass in kilograms.
    #[must_use]
    pub fn as_kg(&self) -> f64 {
        self.0.get::<kilogram>()
    }

    /// Mass in metric tonnes.
    #[must_use]
    pub fn as_tonnes(&self) -> f64 {
        self.as_kg() / 1000.0
    }

    /// Clamp into the given kilogram range.
    #[must_use]
    pub fn clamp_kg(&self, min_kg: f64, max_kg: f64) -> Self {
        Self::from_kg(self.as_kg().clamp(min_kg, max_kg))
    }

    /// Check the value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.as_kg().is_finite()
    }
}
