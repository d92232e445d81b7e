//! Impact energy, damage and severity.
//!
//! Data flows one way: [`AsteroidParameters`] → [`compute_energy`] →
//! [`damage::compute_damage`] → [`classify::classify`]. [`assess_impact`] runs
//! the whole chain for one asteroid/impact pair.

pub mod classify;
pub mod damage;

#[cfg(test)]
mod proptest_impact;

use bevy::log::info;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::config::ScalingConfig;
use crate::constants::EARTH_ORBITAL_VELOCITY_KM_S;
use crate::error::{InvalidParameterError, require_non_negative, require_positive};
use crate::types::{AsteroidParameters, ImpactParameters, JOULES_PER_MEGATON, KM_TO_M};

pub use classify::{Severity, classify};
pub use damage::{AtmosphericEffects, DamageEstimate, TsunamiAssessment, atmospheric_effects, compute_damage};

/// Energy delivered by an impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactEnergyResult {
    pub mass_kg: f64,
    pub kinetic_energy_joules: f64,
    pub tnt_equivalent_megatons: f64,
}

impl ImpactEnergyResult {
    /// Energy of a body of `mass_kg` arriving at `velocity_km_s`.
    pub fn from_mass_and_velocity(mass_kg: f64, velocity_km_s: f64) -> Self {
        let kinetic_energy_joules = kinetic_energy(mass_kg, velocity_km_s);
        Self {
            mass_kg,
            kinetic_energy_joules,
            tnt_equivalent_megatons: joules_to_megatons(kinetic_energy_joules),
        }
    }
}

/// Mass, kinetic energy and TNT yield of an asteroid arriving at
/// `impact_velocity_km_s`.
///
/// mass = 4/3·π·(d·500)³·ρ, with d·500 the radius in meters.
pub fn compute_energy(
    asteroid: &AsteroidParameters,
    impact_velocity_km_s: f64,
) -> Result<ImpactEnergyResult, InvalidParameterError> {
    asteroid.validate()?;
    require_positive("impact_velocity_km_s", impact_velocity_km_s)?;

    let mass_kg = mass_from_diameter(asteroid.diameter_km, asteroid.density_kg_m3);
    Ok(ImpactEnergyResult::from_mass_and_velocity(
        mass_kg,
        impact_velocity_km_s,
    ))
}

/// Mass of a homogeneous sphere (kg).
pub fn mass_from_diameter(diameter_km: f64, density_kg_m3: f64) -> f64 {
    let radius_m = diameter_km * 500.0;
    4.0 / 3.0 * PI * radius_m.powi(3) * density_kg_m3
}

/// E = ½·m·v² in joules, with v given in km/s.
pub fn kinetic_energy(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let velocity_m_s = velocity_km_s * KM_TO_M;
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

pub fn joules_to_megatons(energy_joules: f64) -> f64 {
    energy_joules / JOULES_PER_MEGATON
}

pub fn megatons_to_joules(energy_megatons: f64) -> f64 {
    energy_megatons * JOULES_PER_MEGATON
}

/// Approach speed combining the asteroid's speed with Earth's orbital
/// motion, assuming perpendicular velocities.
pub fn approach_velocity_km_s(orbital_velocity_km_s: f64) -> f64 {
    orbital_velocity_km_s.hypot(EARTH_ORBITAL_VELOCITY_KM_S)
}

/// Ram pressure at contact, ρ·v² (Pa).
pub fn impact_pressure_pa(velocity_km_s: f64, density_kg_m3: f64) -> f64 {
    let velocity_m_s = velocity_km_s * KM_TO_M;
    density_kg_m3 * velocity_m_s * velocity_m_s
}

/// Shock front speed in the target (km/s).
pub fn shock_wave_velocity_km_s(impact_velocity_km_s: f64) -> f64 {
    impact_velocity_km_s * 1.5
}

/// Typical ejecta launch speed; larger craters throw material more slowly.
pub fn ejecta_velocity_km_s(
    impact_velocity_km_s: f64,
    crater_diameter_km: f64,
) -> Result<f64, InvalidParameterError> {
    require_non_negative("impact_velocity_km_s", impact_velocity_km_s)?;
    require_positive("crater_diameter_km", crater_diameter_km)?;
    Ok(impact_velocity_km_s * 0.1 / crater_diameter_km)
}

/// Everything a renderer needs to stage one impact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactAssessment {
    pub energy: ImpactEnergyResult,
    pub damage: DamageEstimate,
    pub severity: Severity,
    pub atmosphere: AtmosphericEffects,
    /// Present for ocean impacts only
    pub tsunami: Option<TsunamiAssessment>,
}

/// Run energy → damage → classification for one impact.
pub fn assess_impact(
    asteroid: &AsteroidParameters,
    impact: &ImpactParameters,
    config: &ScalingConfig,
) -> Result<ImpactAssessment, InvalidParameterError> {
    impact.validate()?;
    let energy = compute_energy(asteroid, impact.impact_velocity_km_s)?;
    let damage = config.damage(
        &energy,
        asteroid.diameter_km,
        impact.impact_angle_deg,
        impact.target_material,
    )?;
    let severity = classify(asteroid.diameter_km, energy.tnt_equivalent_megatons);
    let atmosphere = atmospheric_effects(energy.tnt_equivalent_megatons, impact.target_material);
    let tsunami = config.assess_tsunami(&energy, impact.impact_location, impact.target_material);

    info!(
        "{} impact: {:.3} km body at {:.1} km/s, {:.3e} Mt, crater {:.2} km",
        severity,
        asteroid.diameter_km,
        impact.impact_velocity_km_s,
        energy.tnt_equivalent_megatons,
        damage.crater_diameter_km,
    );

    Ok(ImpactAssessment {
        energy,
        damage,
        severity,
        atmosphere,
        tsunami,
    })
}
