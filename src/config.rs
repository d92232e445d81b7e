//! Runtime scaling configuration, optionally overlaid from a TOML file.
//!
//! [`ScalingConfig`] mirrors the calibration constants in
//! [`crate::constants`], which remain the authoritative defaults. A TOML file
//! only needs the keys it wants to change:
//!
//! ```toml
//! crater_coefficient_km = 1.5
//! tsunami_energy_exponent = 0.28
//! ```
//!
//! Inside a Bevy app, [`ImpactPhysicsPlugin`] inserts the config as a
//! resource and applies the overlay at startup.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Default location of the optional overlay file.
pub const DEFAULT_CONFIG_PATH: &str = "assets/impact.toml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scaling config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scaling constant {name} = {value} must be finite and positive")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("scaling constant {name} = {value} must be finite")]
    NonFiniteConstant { name: &'static str, value: f64 },
}

/// Empirical scaling-law constants used by the damage model.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    // ── Crater ───────────────────────────────────────────────────────────────
    pub crater_coefficient_km: f64,
    pub crater_energy_exponent: f64,
    pub crater_angle_exponent: f64,
    pub crater_depth_ratio: f64,

    // ── Blast / thermal ──────────────────────────────────────────────────────
    pub blast_coefficient_km: f64,
    pub blast_energy_exponent: f64,
    pub thermal_to_blast_ratio: f64,

    // ── Seismic ──────────────────────────────────────────────────────────────
    pub seismic_log_offset: f64,
    pub seismic_log_divisor: f64,

    // ── Tsunami ──────────────────────────────────────────────────────────────
    pub tsunami_coefficient_m: f64,
    pub tsunami_reference_energy_j: f64,
    pub tsunami_energy_exponent: f64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            crater_coefficient_km: CRATER_COEFFICIENT_KM,
            crater_energy_exponent: CRATER_ENERGY_EXPONENT,
            crater_angle_exponent: CRATER_ANGLE_EXPONENT,
            crater_depth_ratio: CRATER_DEPTH_RATIO,
            blast_coefficient_km: BLAST_COEFFICIENT_KM,
            blast_energy_exponent: BLAST_ENERGY_EXPONENT,
            thermal_to_blast_ratio: THERMAL_TO_BLAST_RATIO,
            seismic_log_offset: SEISMIC_LOG_OFFSET,
            seismic_log_divisor: SEISMIC_LOG_DIVISOR,
            tsunami_coefficient_m: TSUNAMI_COEFFICIENT_M,
            tsunami_reference_energy_j: TSUNAMI_REFERENCE_ENERGY_J,
            tsunami_energy_exponent: TSUNAMI_ENERGY_EXPONENT,
        }
    }
}

impl ScalingConfig {
    /// Parse a (possibly partial) TOML document over the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Every constant must be finite. All but the seismic offset must also be
    /// strictly positive; a zero divisor or exponent would silently flatten
    /// the visuals. The offset only shifts magnitudes and may be any sign.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.seismic_log_offset.is_finite() {
            return Err(ConfigError::NonFiniteConstant {
                name: "seismic_log_offset",
                value: self.seismic_log_offset,
            });
        }
        let positive = [
            ("crater_coefficient_km", self.crater_coefficient_km),
            ("crater_energy_exponent", self.crater_energy_exponent),
            ("crater_angle_exponent", self.crater_angle_exponent),
            ("crater_depth_ratio", self.crater_depth_ratio),
            ("blast_coefficient_km", self.blast_coefficient_km),
            ("blast_energy_exponent", self.blast_energy_exponent),
            ("thermal_to_blast_ratio", self.thermal_to_blast_ratio),
            ("seismic_log_divisor", self.seismic_log_divisor),
            ("tsunami_coefficient_m", self.tsunami_coefficient_m),
            ("tsunami_reference_energy_j", self.tsunami_reference_energy_j),
            ("tsunami_energy_exponent", self.tsunami_energy_exponent),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }
        Ok(())
    }
}

/// Where [`load_scaling_config`] looks for the overlay file.
#[derive(Resource, Debug, Clone)]
pub struct ScalingConfigPath(pub PathBuf);

impl Default for ScalingConfigPath {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

/// Startup system: overlay the TOML file onto the [`ScalingConfig`] resource.
///
/// A missing file keeps the compiled defaults. A malformed file is logged and
/// also keeps the defaults.
pub fn load_scaling_config(path: Res<ScalingConfigPath>, mut config: ResMut<ScalingConfig>) {
    let path = path.0.as_path();
    match ScalingConfig::load(path) {
        Ok(loaded) => {
            *config = loaded;
            info!("Loaded impact scaling config from {}", path.display());
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No {} found; using calibration defaults", path.display());
        }
        Err(e) => {
            warn!("Failed to load {}: {e}; using calibration defaults", path.display());
        }
    }
}

/// Plugin installing the scaling configuration for downstream renderers.
#[derive(Default)]
pub struct ImpactPhysicsPlugin {
    /// Overlay file; `None` uses [`DEFAULT_CONFIG_PATH`].
    pub config_path: Option<PathBuf>,
}

impl Plugin for ImpactPhysicsPlugin {
    fn build(&self, app: &mut App) {
        let path = self
            .config_path
            .clone()
            .map(ScalingConfigPath)
            .unwrap_or_default();
        app.insert_resource(ScalingConfig::default())
            .insert_resource(path)
            .add_systems(Startup, load_scaling_config);
    }
}
