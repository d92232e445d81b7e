//! Deflection methods and the delta-v they impart.
//!
//! Implements:
//! - Kinetic impactor: momentum transfer at a fixed 12 km/s closing speed
//! - Gravity tractor: continuous gravitational tug from a hovering spacecraft
//!
//! [`evaluate_deflection`] grades a post-deflection path by how far it stays
//! from Earth.
//!
//! Delta-v values are in km/s throughout, matching asteroid velocities.

use bevy::log::info;
use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFLECTION_EFFICIENCY, GRAVITY_TRACTOR_DISTANCE_M, KINETIC_IMPACTOR_VELOCITY_KM_S,
};
use crate::error::{InvalidParameterError, require_positive};
use crate::trajectory::earth_intersection;
use crate::types::{G, GeoPoint, KM_TO_M, RAD_TO_DEG, SECONDS_PER_DAY};

/// Miss distance per unit of delta-v: 0.1 km/s per 1000 km.
const DELTA_V_PER_KM_MISS: f64 = 0.1 / 1000.0;

/// A way of nudging an asteroid off a collision course.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum DeflectionMethod {
    /// Spacecraft rammed into the asteroid.
    ///
    /// Δv = η · m · v_imp / M, with η = 0.5 and v_imp = 12 km/s.
    KineticImpactor {
        /// Impactor mass (kg).
        impactor_mass_kg: f64,
    },

    /// Spacecraft holding station 100 m from the asteroid.
    ///
    /// a = G · m / d², Δv = a · t.
    GravityTractor {
        /// Tractor mass (kg).
        tractor_mass_kg: f64,
        /// Time spent hovering (days).
        duration_days: f64,
    },
}

impl DeflectionMethod {
    pub fn kinetic_impactor(impactor_mass_kg: f64) -> Self {
        Self::KineticImpactor { impactor_mass_kg }
    }

    pub fn gravity_tractor(tractor_mass_kg: f64, duration_days: f64) -> Self {
        Self::GravityTractor {
            tractor_mass_kg,
            duration_days,
        }
    }

    /// Delta-v imparted to an asteroid of `asteroid_mass_kg`, in km/s.
    pub fn delta_v_km_s(&self, asteroid_mass_kg: f64) -> Result<f64, InvalidParameterError> {
        require_positive("asteroid_mass_kg", asteroid_mass_kg)?;
        match *self {
            DeflectionMethod::KineticImpactor { impactor_mass_kg } => {
                require_positive("impactor_mass_kg", impactor_mass_kg)?;
                Ok(DEFLECTION_EFFICIENCY * impactor_mass_kg * KINETIC_IMPACTOR_VELOCITY_KM_S
                    / asteroid_mass_kg)
            }
            DeflectionMethod::GravityTractor {
                tractor_mass_kg,
                duration_days,
            } => {
                require_positive("tractor_mass_kg", tractor_mass_kg)?;
                require_positive("duration_days", duration_days)?;
                // The asteroid's own mass cancels out of its acceleration
                let acceleration_m_s2 =
                    G * tractor_mass_kg / (GRAVITY_TRACTOR_DISTANCE_M * GRAVITY_TRACTOR_DISTANCE_M);
                let delta_v_m_s = acceleration_m_s2 * duration_days * SECONDS_PER_DAY;
                Ok(delta_v_m_s / 1000.0)
            }
        }
    }

    /// Delta-v and the resulting turn of the velocity vector.
    pub fn deflect(
        &self,
        asteroid_mass_kg: f64,
        asteroid_velocity_km_s: f64,
    ) -> Result<DeflectionResult, InvalidParameterError> {
        require_positive("asteroid_velocity_km_s", asteroid_velocity_km_s)?;
        let delta_v_km_s = self.delta_v_km_s(asteroid_mass_kg)?;
        Ok(DeflectionResult {
            delta_v_km_s,
            deflection_angle_deg: deflection_angle_deg(delta_v_km_s, asteroid_velocity_km_s),
        })
    }

    pub fn description(&self) -> String {
        match self {
            DeflectionMethod::KineticImpactor { impactor_mass_kg } => {
                format!("Kinetic Impactor ({:.0} kg)", impactor_mass_kg)
            }
            DeflectionMethod::GravityTractor {
                tractor_mass_kg,
                duration_days,
            } => format!(
                "Gravity Tractor ({:.0} kg, {:.0} days)",
                tractor_mass_kg, duration_days
            ),
        }
    }
}

/// Outcome of applying a deflection method.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeflectionResult {
    pub delta_v_km_s: f64,
    /// Angle between the old and new velocity vectors
    pub deflection_angle_deg: f64,
}

/// atan(Δv / v) in degrees, assuming Δv is applied perpendicular to v.
pub fn deflection_angle_deg(delta_v_km_s: f64, asteroid_velocity_km_s: f64) -> f64 {
    (delta_v_km_s / asteroid_velocity_km_s).atan() * RAD_TO_DEG
}

/// How comfortably a deflected path clears Earth, by miss distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissMargin {
    /// 100 km or less
    Low,
    /// Over 100 km
    Moderate,
    /// Over 1000 km
    High,
    /// Over 10000 km
    Complete,
}

impl MissMargin {
    pub fn from_miss_distance_km(miss_distance_km: f64) -> Self {
        if miss_distance_km > 10_000.0 {
            Self::Complete
        } else if miss_distance_km > 1000.0 {
            Self::High
        } else if miss_distance_km > 100.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Risk left over after a deflection attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainingRisk {
    Low,
    Moderate,
    High,
}

/// Verdict on a deflected trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MitigationOutcome {
    /// The path still reaches the surface.
    StillImpacting { entry: GeoPoint },
    /// The path stays clear of the surface.
    Avoided {
        /// Closest approach to the surface (km)
        miss_distance_km: f64,
        margin: MissMargin,
    },
}

impl MitigationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Avoided { .. })
    }

    /// High while still impacting; Low once the miss exceeds 1000 km.
    pub fn remaining_risk(&self) -> RemainingRisk {
        match *self {
            Self::StillImpacting { .. } => RemainingRisk::High,
            Self::Avoided {
                miss_distance_km, ..
            } if miss_distance_km > 1000.0 => RemainingRisk::Low,
            Self::Avoided { .. } => RemainingRisk::Moderate,
        }
    }
}

/// Closest approach of an Earth-centered path (meters) to a surface of
/// `earth_radius_m`, in km. Zero when the path touches or enters it.
///
/// Segments are measured, not just samples, so a coarse flyby is not
/// overestimated.
pub fn minimum_distance_to_earth_km(
    path: &[DVec3],
    earth_radius_m: f64,
) -> Result<f64, InvalidParameterError> {
    require_positive("earth_radius_m", earth_radius_m)?;
    let closest_m = match path {
        [] => {
            return Err(InvalidParameterError::TooFewSamples {
                name: "path",
                value: 0,
                min: 1,
            });
        }
        [only] => only.length(),
        _ => path
            .windows(2)
            .map(|pair| distance_to_origin(pair[0], pair[1]))
            .fold(f64::INFINITY, f64::min),
    };
    Ok((closest_m - earth_radius_m).max(0.0) / KM_TO_M)
}

/// Distance from the origin to the segment a→b.
fn distance_to_origin(a: DVec3, b: DVec3) -> f64 {
    let d = b - a;
    let len_sq = d.length_squared();
    if len_sq == 0.0 {
        return a.length();
    }
    let t = (-a.dot(d) / len_sq).clamp(0.0, 1.0);
    (a + d * t).length()
}

/// Grade a deflected, Earth-centered path (meters).
pub fn evaluate_deflection(
    path: &[DVec3],
    earth_radius_m: f64,
) -> Result<MitigationOutcome, InvalidParameterError> {
    let miss_distance_km = minimum_distance_to_earth_km(path, earth_radius_m)?;
    let outcome = match earth_intersection(path, earth_radius_m) {
        Some(hit) => MitigationOutcome::StillImpacting {
            entry: hit.location,
        },
        None => MitigationOutcome::Avoided {
            miss_distance_km,
            margin: MissMargin::from_miss_distance_km(miss_distance_km),
        },
    };
    info!(
        "Deflection {}: closest approach {:.1} km",
        if outcome.is_success() { "succeeded" } else { "failed" },
        miss_distance_km
    );
    Ok(outcome)
}

/// Delta-v needed to turn a hit into a miss by `miss_distance_km`.
pub fn required_delta_v_km_s(miss_distance_km: f64) -> Result<f64, InvalidParameterError> {
    require_positive("miss_distance_km", miss_distance_km)?;
    Ok(miss_distance_km * DELTA_V_PER_KM_MISS)
}

/// Impactor mass delivering `delta_v_km_s`. Inverse of the kinetic impactor.
pub fn required_impactor_mass_kg(
    delta_v_km_s: f64,
    asteroid_mass_kg: f64,
) -> Result<f64, InvalidParameterError> {
    require_positive("delta_v_km_s", delta_v_km_s)?;
    require_positive("asteroid_mass_kg", asteroid_mass_kg)?;
    Ok(delta_v_km_s * asteroid_mass_kg / (DEFLECTION_EFFICIENCY * KINETIC_IMPACTOR_VELOCITY_KM_S))
}

/// Tractor mass delivering `delta_v_km_s` over `duration_days`. Inverse of the
/// gravity tractor.
pub fn required_tractor_mass_kg(
    delta_v_km_s: f64,
    duration_days: f64,
) -> Result<f64, InvalidParameterError> {
    require_positive("delta_v_km_s", delta_v_km_s)?;
    require_positive("duration_days", duration_days)?;
    let acceleration_m_s2 = delta_v_km_s * 1000.0 / (duration_days * SECONDS_PER_DAY);
    Ok(acceleration_m_s2 * GRAVITY_TRACTOR_DISTANCE_M * GRAVITY_TRACTOR_DISTANCE_M / G)
}
