//! Core physical constants and the value records that flow through the
//! impact and orbit calculations.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidParameterError, require_in_range, require_positive};

// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Sun's standard gravitational parameter (m³/s²)
pub const GM_SUN: f64 = 1.32712440018e20;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Kilometers to meters
pub const KM_TO_M: f64 = 1000.0;

/// Energy released by one megaton of TNT (J)
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Mean Earth radius (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth radius (m)
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * KM_TO_M;

/// Bulk composition of an asteroid.
///
/// Only used to pick a default density; the damage scaling laws do not
/// otherwise distinguish between compositions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    /// Stony (S-type and most unclassified bodies).
    #[default]
    Rock,
    /// Metallic (M-type).
    Iron,
    /// Carbon-rich (C/B-type), low density rubble piles.
    Carbonaceous,
}

impl Composition {
    /// Default bulk density in kg/m³.
    pub fn default_density(self) -> f64 {
        match self {
            Composition::Rock => 3000.0,
            Composition::Iron => 8000.0,
            Composition::Carbonaceous => 2000.0,
        }
    }

    /// Lenient parse of free-form composition labels ("stony", "metallic", ...).
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        if label.contains("iron") || label.contains("metal") || label.contains("nickel") {
            Some(Composition::Iron)
        } else if label.contains("carbon") {
            Some(Composition::Carbonaceous)
        } else if label.contains("rock") || label.contains("ston") || label.contains("silic") {
            Some(Composition::Rock)
        } else {
            None
        }
    }

    /// Map a Tholen/SMASS spectral type to a composition.
    ///
    /// C, B, D, F, G and P classes are treated as carbonaceous, M and X as
    /// metallic, everything else as rock.
    pub fn from_spectral_type(spectral_type: &str) -> Self {
        match spectral_type.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('C' | 'B' | 'D' | 'F' | 'G' | 'P') => Composition::Carbonaceous,
            Some('M' | 'X') => Composition::Iron,
            _ => Composition::Rock,
        }
    }
}

/// Surface material at the impact site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetMaterial {
    #[default]
    Land,
    Water,
    Ice,
}

impl TargetMaterial {
    /// Whether an impact on this material displaces an ocean.
    pub fn is_water(self) -> bool {
        matches!(self, TargetMaterial::Water)
    }
}

/// Geographic position in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat_deg: f64,
    /// Longitude in degrees, positive east
    pub lon_deg: f64,
}

impl GeoPoint {
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        require_in_range("lat_deg", self.lat_deg, -90.0, 90.0)?;
        require_in_range("lon_deg", self.lon_deg, -180.0, 180.0)?;
        Ok(())
    }
}

/// Physical description of an asteroid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AsteroidParameters {
    /// Mean diameter in kilometers
    pub diameter_km: f64,
    /// Heliocentric or approach velocity in km/s
    pub velocity_km_s: f64,
    /// Bulk density in kg/m³
    pub density_kg_m3: f64,
    pub composition: Composition,
}

impl AsteroidParameters {
    /// Create parameters with the density implied by `composition`.
    pub fn new(
        diameter_km: f64,
        velocity_km_s: f64,
        composition: Composition,
    ) -> Result<Self, InvalidParameterError> {
        let params = Self {
            diameter_km,
            velocity_km_s,
            density_kg_m3: composition.default_density(),
            composition,
        };
        params.validate()?;
        Ok(params)
    }

    /// Override the composition default density.
    pub fn with_density(mut self, density_kg_m3: f64) -> Result<Self, InvalidParameterError> {
        self.density_kg_m3 = require_positive("density_kg_m3", density_kg_m3)?;
        Ok(self)
    }

    /// Re-check the invariants; fields are public so a record may have been
    /// edited or deserialized since construction.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        require_positive("diameter_km", self.diameter_km)?;
        require_positive("velocity_km_s", self.velocity_km_s)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        Ok(())
    }

    /// Radius in meters.
    pub fn radius_m(&self) -> f64 {
        self.diameter_km * 0.5 * KM_TO_M
    }
}

/// Default impact angle when none is given (degrees above the horizon).
pub const DEFAULT_IMPACT_ANGLE_DEG: f64 = 45.0;

/// Conditions at the moment of impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Velocity relative to the surface in km/s
    pub impact_velocity_km_s: f64,
    /// Angle above the horizon: 0 = grazing, 90 = vertical
    pub impact_angle_deg: f64,
    pub impact_location: GeoPoint,
    pub target_material: TargetMaterial,
}

impl ImpactParameters {
    pub fn new(
        impact_velocity_km_s: f64,
        impact_angle_deg: f64,
        impact_location: GeoPoint,
        target_material: TargetMaterial,
    ) -> Result<Self, InvalidParameterError> {
        let params = Self {
            impact_velocity_km_s,
            impact_angle_deg,
            impact_location,
            target_material,
        };
        params.validate()?;
        Ok(params)
    }

    /// Impact at the asteroid's own velocity, 45° onto land at (0, 0).
    pub fn head_on(asteroid: &AsteroidParameters) -> Self {
        Self {
            impact_velocity_km_s: asteroid.velocity_km_s,
            impact_angle_deg: DEFAULT_IMPACT_ANGLE_DEG,
            impact_location: GeoPoint::default(),
            target_material: TargetMaterial::Land,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        require_positive("impact_velocity_km_s", self.impact_velocity_km_s)?;
        require_in_range("impact_angle_deg", self.impact_angle_deg, 0.0, 90.0)?;
        self.impact_location.validate()
    }
}
