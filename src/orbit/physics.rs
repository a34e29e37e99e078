//! Orbital physics engine for circular two-body orbits.
//!
//! Every quantity is a closed-form pure function of mass and altitude.
//! The free functions are individually queryable because the front ends
//! consume different subsets; [`OrbitalParameters::compute`] bundles them
//! for callers that want everything at once.

use serde::{Deserialize, Serialize};

use crate::error::{SatError, SatResult};
use crate::orbit::units::{
    Altitude, SatMass, EARTH_MU, MAX_SUPPORTED_ALTITUDE_KM, SURFACE_ROTATION_MPS,
};

/// A single orbit computation request.
///
/// Immutable once built: mass must be positive and finite, altitude is
/// clamped into `[0, MAX_SUPPORTED_ALTITUDE_KM]` so the engine can never
/// see a negative orbital radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitRequest {
    mass: SatMass,
    altitude: Altitude,
}

impl OrbitRequest {
    /// Create a request from raw kilogram / kilometer values.
    ///
    /// # Errors
    ///
    /// Returns [`SatError::InvalidParameter`] if the mass is non-positive
    /// and [`SatError::NonFiniteValue`] if either input is NaN or infinite.
    /// Negative altitudes are clamped to zero rather than rejected.
    pub fn new(mass_kg: f64, altitude_km: f64) -> SatResult<Self> {
        if !mass_kg.is_finite() {
            return Err(SatError::NonFiniteValue {
                location: "mass_kg".to_string(),
            });
        }
        if !altitude_km.is_finite() {
            return Err(SatError::NonFiniteValue {
                location: "altitude_km".to_string(),
            });
        }
        if mass_kg <= 0.0 {
            return Err(SatError::InvalidParameter {
                name: "mass_kg",
                value: mass_kg,
                reason: "must be positive",
            });
        }

        Ok(Self {
            mass: SatMass::from_kg(mass_kg),
            altitude: Altitude::from_km(altitude_km.clamp(0.0, MAX_SUPPORTED_ALTITUDE_KM)),
        })
    }

    /// Satellite mass.
    #[must_use]
    pub const fn mass(&self) -> SatMass {
        self.mass
    }

    /// Orbit altitude.
    #[must_use]
    pub const fn altitude(&self) -> Altitude {
        self.altitude
    }
}

/// Circular orbital velocity (m/s): `v = sqrt(GM/r)`.
#[must_use]
pub fn orbital_velocity(altitude: Altitude) -> f64 {
    (EARTH_MU / altitude.orbital_radius_m()).sqrt()
}

/// Orbital period (s): `T = 2π·sqrt(r³/GM)`.
#[must_use]
pub fn orbital_period(altitude: Altitude) -> f64 {
    let r = altitude.orbital_radius_m();
    2.0 * std::f64::consts::PI * (r.powi(3) / EARTH_MU).sqrt()
}

/// Centripetal force (N) holding the satellite on its circle: `F = mv²/r`.
#[must_use]
pub fn centripetal_force(mass: SatMass, altitude: Altitude) -> f64 {
    let r = altitude.orbital_radius_m();
    let v = orbital_velocity(altitude);
    mass.as_kg() * v * v / r
}

/// Total mechanical orbital energy (J): `E = −GM·m/(2r)`.
///
/// Negative for every bound orbit.
#[must_use]
pub fn orbital_energy(mass: SatMass, altitude: Altitude) -> f64 {
    -EARTH_MU * mass.as_kg() / (2.0 * altitude.orbital_radius_m())
}

/// Angular velocity (rad/s): `ω = v/r`.
#[must_use]
pub fn angular_velocity(altitude: Altitude) -> f64 {
    orbital_velocity(altitude) / altitude.orbital_radius_m()
}

/// Escape velocity at the orbital radius (m/s): `v_esc = sqrt(2GM/r)`.
#[must_use]
pub fn escape_velocity(altitude: Altitude) -> f64 {
    (2.0 * EARTH_MU / altitude.orbital_radius_m()).sqrt()
}

/// Gravitational acceleration at the orbital radius (m/s²): `g = GM/r²`.
#[must_use]
pub fn gravitational_acceleration(altitude: Altitude) -> f64 {
    let r = altitude.orbital_radius_m();
    EARTH_MU / (r * r)
}

/// Launch delta-v (m/s): orbital velocity minus the equatorial surface
/// speed an eastward launch gets for free.
#[must_use]
pub fn launch_delta_v(altitude: Altitude) -> f64 {
    orbital_velocity(altitude) - SURFACE_ROTATION_MPS
}

/// All derived orbital parameters for one request.
///
/// No independent identity; recomputed from the request, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParameters {
    /// Circular orbital velocity (m/s).
    pub velocity_ms: f64,
    /// Orbital period (s).
    pub period_s: f64,
    /// Centripetal force (N).
    pub centripetal_force_n: f64,
    /// Total mechanical energy (J).
    pub orbital_energy_j: f64,
    /// Angular velocity (rad/s).
    pub angular_velocity_rad_s: f64,
    /// Escape velocity at the orbital radius (m/s).
    pub escape_velocity_ms: f64,
    /// Distance from Earth's center (km).
    pub orbital_radius_km: f64,
    /// Launch-to-orbit velocity gap (m/s).
    pub delta_v_ms: f64,
    /// Gravitational acceleration at altitude (m/s²).
    pub g_at_altitude_ms2: f64,
}

impl OrbitalParameters {
    /// Compute every parameter for the given request.
    #[must_use]
    pub fn compute(request: &OrbitRequest) -> Self {
        let altitude = request.altitude();
        let mass = request.mass();

        Self {
            velocity_ms: orbital_velocity(altitude),
            period_s: orbital_period(altitude),
            centripetal_force_n: centripetal_force(mass, altitude),
            orbital_energy_j: orbital_energy(mass, altitude),
            angular_velocity_rad_s: angular_velocity(altitude),
            escape_velocity_ms: escape_velocity(altitude),
            orbital_radius_km: altitude.orbital_radius_m() / 1000.0,
            delta_v_ms: launch_delta_v(altitude),
            g_at_altitude_ms2: gravitational_acceleration(altitude),
        }
    }

    /// Velocity in km/s.
    #[must_use]
    pub fn velocity_kms(&self) -> f64 {
        self.velocity_ms / 1000.0
    }

    /// Period in minutes.
    #[must_use]
    pub fn period_minutes(&self) -> f64 {
        self.period_s / 60.0
    }

    /// Period in hours.
    #[must_use]
    pub fn period_hours(&self) -> f64 {
        self.period_s / 3600.0
    }

    /// Period in days.
    #[must_use]
    pub fn period_days(&self) -> f64 {
        self.period_s / 86_400.0
    }

    /// Escape velocity in km/s.
    #[must_use]
    pub fn escape_velocity_kms(&self) -> f64 {
        self.escape_velocity_ms / 1000.0
    }

    /// All values are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.velocity_ms,
            self.period_s,
            self.centripetal_force_n,
            self.orbital_energy_j,
            self.angular_velocity_rad_s,
            self.escape_velocity_ms,
            self.orbital_radius_km,
            self.delta_v_ms,
            self.g_at_altitude_ms2,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
