//! Damage scaling laws: crater, blast, thermal, seismic and tsunami
//! magnitudes as pure functions of impact energy.
//!
//! The exponents and coefficients live in [`ScalingConfig`]. They are
//! visualization calibration constants and make no claim of physical
//! accuracy; the defaults must stay as they are for the rendered effects to
//! keep their current look.

use serde::{Deserialize, Serialize};

use super::ImpactEnergyResult;
use crate::config::ScalingConfig;
use crate::constants::{
    ACID_RAIN_THRESHOLD_MT, ATMOSPHERIC_THRESHOLD_MT, COASTAL_SLOPE, DUST_TONS_PER_MEGATON,
    IMPACT_WINTER_THRESHOLD_MT, MAX_COOLING_C, OZONE_DEPLETION_THRESHOLD_MT,
};
use crate::error::{InvalidParameterError, require_in_range, require_positive};
use crate::geography::{RegionTravelTime, tsunami_travel_times};
use crate::types::{DEG_TO_RAD, GeoPoint, TargetMaterial};

/// Physical magnitudes derived from an impact's energy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageEstimate {
    pub crater_diameter_km: f64,
    pub crater_depth_km: f64,
    pub blast_radius_km: f64,
    pub thermal_radius_km: f64,
    /// Richter-equivalent magnitude
    pub seismic_magnitude: f64,
    /// Only present for water impacts
    pub tsunami_wave_height_m: Option<f64>,
}

/// [`ScalingConfig::damage`] with the default calibration.
pub fn compute_damage(
    energy: &ImpactEnergyResult,
    asteroid_diameter_km: f64,
    impact_angle_deg: f64,
    target: TargetMaterial,
) -> Result<DamageEstimate, InvalidParameterError> {
    ScalingConfig::default().damage(energy, asteroid_diameter_km, impact_angle_deg, target)
}

impl ScalingConfig {
    /// Derive every damage magnitude for one impact.
    ///
    /// The asteroid diameter does not enter the scaling laws (energy already
    /// accounts for size) but is validated so callers cannot pair an energy
    /// with a nonsensical body.
    pub fn damage(
        &self,
        energy: &ImpactEnergyResult,
        asteroid_diameter_km: f64,
        impact_angle_deg: f64,
        target: TargetMaterial,
    ) -> Result<DamageEstimate, InvalidParameterError> {
        require_positive("asteroid_diameter_km", asteroid_diameter_km)?;
        require_in_range("impact_angle_deg", impact_angle_deg, 0.0, 90.0)?;
        let joules = require_positive("kinetic_energy_joules", energy.kinetic_energy_joules)?;
        let megatons = require_positive("tnt_equivalent_megatons", energy.tnt_equivalent_megatons)?;

        let crater_diameter_km = self.crater_diameter_km(megatons, impact_angle_deg);
        let blast_radius_km = self.blast_radius_km(megatons);

        Ok(DamageEstimate {
            crater_diameter_km,
            crater_depth_km: crater_diameter_km * self.crater_depth_ratio,
            blast_radius_km,
            thermal_radius_km: blast_radius_km * self.thermal_to_blast_ratio,
            seismic_magnitude: self.seismic_magnitude(joules),
            tsunami_wave_height_m: target
                .is_water()
                .then(|| self.tsunami_wave_height_m(joules)),
        })
    }

    /// D = 1.2 · Mt^0.294 · sin(θ)^0.5 (km). Zero for a grazing (0°) impact.
    pub fn crater_diameter_km(&self, energy_megatons: f64, impact_angle_deg: f64) -> f64 {
        let angle_factor = (impact_angle_deg * DEG_TO_RAD)
            .sin()
            .max(0.0)
            .powf(self.crater_angle_exponent);
        self.crater_coefficient_km * energy_megatons.powf(self.crater_energy_exponent) * angle_factor
    }

    /// R = 1.8 · Mt^(1/3) (km).
    pub fn blast_radius_km(&self, energy_megatons: f64) -> f64 {
        self.blast_coefficient_km * energy_megatons.powf(self.blast_energy_exponent)
    }

    /// M = (log10(E) - 4.8) / 1.5 with E in joules.
    pub fn seismic_magnitude(&self, energy_joules: f64) -> f64 {
        (energy_joules.log10() - self.seismic_log_offset) / self.seismic_log_divisor
    }

    /// H = 100 · (E / 1e15)^0.3 (m).
    pub fn tsunami_wave_height_m(&self, energy_joules: f64) -> f64 {
        self.tsunami_coefficient_m
            * (energy_joules / self.tsunami_reference_energy_j).powf(self.tsunami_energy_exponent)
    }

    /// Full tsunami picture for an ocean impact; `None` on land or ice.
    pub fn assess_tsunami(
        &self,
        energy: &ImpactEnergyResult,
        location: GeoPoint,
        target: TargetMaterial,
    ) -> Option<TsunamiAssessment> {
        if !target.is_water() {
            return None;
        }
        let wave_height_m = self.tsunami_wave_height_m(energy.kinetic_energy_joules);
        Some(TsunamiAssessment {
            wave_height_m,
            inundation_distance_km: inundation_distance_km(wave_height_m),
            affected_coastlines: affected_coastlines(location.lat_deg, wave_height_m),
            travel_times: tsunami_travel_times(location),
        })
    }
}

/// Ocean impact consequences beyond the raw wave height.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TsunamiAssessment {
    pub wave_height_m: f64,
    /// How far inland the wave runs up
    pub inundation_distance_km: f64,
    pub affected_coastlines: Vec<&'static str>,
    pub travel_times: Vec<RegionTravelTime>,
}

/// Run-up distance over a uniform 1% coastal slope.
pub fn inundation_distance_km(wave_height_m: f64) -> f64 {
    wave_height_m / COASTAL_SLOPE / 1000.0
}

/// Coastlines reached by a wave of the given height.
pub fn affected_coastlines(lat_deg: f64, wave_height_m: f64) -> Vec<&'static str> {
    if wave_height_m > 10.0 {
        vec!["Global"]
    } else if wave_height_m > 5.0 {
        if lat_deg > 0.0 {
            vec!["North America", "Europe", "Asia"]
        } else {
            vec!["South America", "Africa", "Australia"]
        }
    } else if wave_height_m > 1.0 {
        vec!["Local region"]
    } else {
        Vec::new()
    }
}

/// Dust, cooling and chemistry consequences of an impact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericEffects {
    /// Dust lofted into the stratosphere (metric tons)
    pub dust_ejected_tons: f64,
    /// Global mean cooling (°C)
    pub cooling_effect_c: f64,
    pub ozone_depletion: bool,
    pub acid_rain: bool,
    pub impact_winter: bool,
}

/// Atmospheric effects; impacts at or below 1 Mt leave no lasting trace.
pub fn atmospheric_effects(energy_megatons: f64, target: TargetMaterial) -> AtmosphericEffects {
    if energy_megatons <= ATMOSPHERIC_THRESHOLD_MT {
        return AtmosphericEffects::default();
    }
    AtmosphericEffects {
        dust_ejected_tons: energy_megatons * DUST_TONS_PER_MEGATON,
        cooling_effect_c: (energy_megatons / 100.0).min(MAX_COOLING_C),
        ozone_depletion: energy_megatons > OZONE_DEPLETION_THRESHOLD_MT,
        acid_rain: target.is_water() && energy_megatons > ACID_RAIN_THRESHOLD_MT,
        impact_winter: energy_megatons > IMPACT_WINTER_THRESHOLD_MT,
    }
}
