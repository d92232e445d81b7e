//! Asteroid catalog records and the built-in fallback list.
//!
//! Catalog JSON is either a bare array of entries or an object with an
//! `asteroids` array. Entries are converted to validated
//! [`AsteroidParameters`] and [`OrbitalElements`] on demand, so a single bad
//! record does not reject the whole document.

use bevy::log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;
use crate::orbit::{
    DEFAULT_ECCENTRICITY, DEFAULT_INCLINATION_DEG, DEFAULT_SEMI_MAJOR_AXIS_M, OrbitalElements,
};
use crate::types::{AsteroidParameters, Composition, METERS_TO_AU};

/// Catalog loading errors.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog entry {designation}: {source}")]
    Invalid {
        designation: String,
        #[source]
        source: InvalidParameterError,
    },
}

/// One asteroid as published by an external catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub designation: String,
    #[serde(default)]
    pub name: Option<String>,
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    #[serde(default)]
    pub is_potentially_hazardous: bool,
    #[serde(default)]
    pub absolute_magnitude: Option<f64>,
    #[serde(default)]
    pub spectral_type: Option<String>,
    /// Free-form label such as "stony" or "carbonaceous"
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub orbital_elements: Option<CatalogOrbit>,
}

/// Orbital elements in catalog units (AU and degrees). Missing values fall
/// back to the defaults of [`OrbitalElements`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOrbit {
    pub semi_major_axis: Option<f64>,
    pub eccentricity: Option<f64>,
    pub inclination: Option<f64>,
    pub argument_of_perihelion: Option<f64>,
    pub longitude_of_ascending_node: Option<f64>,
    pub mean_anomaly: Option<f64>,
}

impl CatalogEntry {
    /// Display name, or the designation when the body is unnamed.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.designation)
    }

    /// Composition from the label, else from the spectral type, else rock.
    pub fn resolved_composition(&self) -> Composition {
        self.composition
            .as_deref()
            .and_then(Composition::parse_label)
            .or_else(|| self.spectral_type.as_deref().map(Composition::from_spectral_type))
            .unwrap_or_default()
    }

    pub fn to_parameters(&self) -> Result<AsteroidParameters, CatalogError> {
        AsteroidParameters::new(
            self.diameter_km,
            self.velocity_km_s,
            self.resolved_composition(),
        )
        .map_err(|source| self.invalid(source))
    }

    pub fn to_orbital_elements(&self) -> Result<OrbitalElements, CatalogError> {
        let orbit = self.orbital_elements.unwrap_or_default();
        OrbitalElements::from_degrees(
            orbit
                .semi_major_axis
                .unwrap_or(DEFAULT_SEMI_MAJOR_AXIS_M * METERS_TO_AU),
            orbit.eccentricity.unwrap_or(DEFAULT_ECCENTRICITY),
            orbit.inclination.unwrap_or(DEFAULT_INCLINATION_DEG),
            orbit.argument_of_perihelion.unwrap_or(0.0),
            orbit.longitude_of_ascending_node.unwrap_or(0.0),
            orbit.mean_anomaly.unwrap_or(0.0),
        )
        .map_err(|source| self.invalid(source))
    }

    fn invalid(&self, source: InvalidParameterError) -> CatalogError {
        CatalogError::Invalid {
            designation: self.designation.clone(),
            source,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<CatalogEntry>),
    Wrapped { asteroids: Vec<CatalogEntry> },
}

/// Parse a catalog document.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let entries = match serde_json::from_str(json)? {
        CatalogDocument::List(entries) => entries,
        CatalogDocument::Wrapped { asteroids } => asteroids,
    };
    Ok(entries)
}

/// Parse `json` if given and well-formed, otherwise use [`fallback_catalog`].
pub fn catalog_or_fallback(json: Option<&str>) -> Vec<CatalogEntry> {
    let Some(json) = json else {
        info!("No asteroid catalog supplied, using built-in list");
        return fallback_catalog();
    };
    match parse_catalog(json) {
        Ok(entries) if !entries.is_empty() => entries,
        Ok(_) => {
            warn!("Asteroid catalog is empty, using built-in list");
            fallback_catalog()
        }
        Err(e) => {
            warn!("Failed to parse asteroid catalog: {e}; using built-in list");
            fallback_catalog()
        }
    }
}

/// A well-known asteroid shipped with the library.
#[derive(Clone, Copy, Debug)]
pub struct KnownAsteroid {
    pub designation: &'static str,
    pub name: &'static str,
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub is_potentially_hazardous: bool,
    pub absolute_magnitude: f64,
    pub spectral_type: &'static str,
    /// (a [AU], e, i, ω, Ω, M) with angles in degrees
    pub orbit: (f64, f64, f64, f64, f64, f64),
}

impl KnownAsteroid {
    pub fn to_entry(&self) -> CatalogEntry {
        let (a, e, i, w, node, m) = self.orbit;
        CatalogEntry {
            designation: self.designation.to_owned(),
            name: Some(self.name.to_owned()),
            diameter_km: self.diameter_km,
            velocity_km_s: self.velocity_km_s,
            is_potentially_hazardous: self.is_potentially_hazardous,
            absolute_magnitude: Some(self.absolute_magnitude),
            spectral_type: Some(self.spectral_type.to_owned()),
            composition: None,
            orbital_elements: Some(CatalogOrbit {
                semi_major_axis: Some(a),
                eccentricity: Some(e),
                inclination: Some(i),
                argument_of_perihelion: Some(w),
                longitude_of_ascending_node: Some(node),
                mean_anomaly: Some(m),
            }),
        }
    }
}

/// Built-in asteroids used when no catalog is available.
pub static KNOWN_ASTEROIDS: &[KnownAsteroid] = &[BENNU, APOPHIS, DIDYMOS, RYUGU, ITOKAWA, EROS];

/// OSIRIS-REx sample return target.
pub static BENNU: KnownAsteroid = KnownAsteroid {
    designation: "101955",
    name: "Bennu",
    diameter_km: 0.492,
    velocity_km_s: 28.0,
    is_potentially_hazardous: true,
    absolute_magnitude: 20.12,
    spectral_type: "B",
    orbit: (1.126, 0.204, 6.035, 66.223, 2.061, 0.0),
};

/// 2029 close approach inside geostationary altitude.
pub static APOPHIS: KnownAsteroid = KnownAsteroid {
    designation: "99942",
    name: "Apophis",
    diameter_km: 0.37,
    velocity_km_s: 30.73,
    is_potentially_hazardous: true,
    absolute_magnitude: 19.7,
    spectral_type: "Sq",
    orbit: (0.922, 0.191, 3.331, 126.404, 204.446, 0.0),
};

/// Primary of the DART target system.
pub static DIDYMOS: KnownAsteroid = KnownAsteroid {
    designation: "65803",
    name: "Didymos",
    diameter_km: 0.78,
    velocity_km_s: 23.7,
    is_potentially_hazardous: true,
    absolute_magnitude: 18.16,
    spectral_type: "S",
    orbit: (1.644, 0.384, 3.408, 319.3, 73.2, 0.0),
};

pub static RYUGU: KnownAsteroid = KnownAsteroid {
    designation: "162173",
    name: "Ryugu",
    diameter_km: 0.866,
    velocity_km_s: 27.64,
    is_potentially_hazardous: true,
    absolute_magnitude: 19.25,
    spectral_type: "Cb",
    orbit: (1.189, 0.190, 5.884, 211.446, 251.592, 0.0),
};

pub static ITOKAWA: KnownAsteroid = KnownAsteroid {
    designation: "25143",
    name: "Itokawa",
    diameter_km: 0.535,
    velocity_km_s: 29.73,
    is_potentially_hazardous: false,
    absolute_magnitude: 19.2,
    spectral_type: "S",
    orbit: (1.324, 0.280, 1.621, 162.815, 69.095, 0.0),
};

/// Largest near-Earth asteroid in the list; a dinosaur-killer class body.
pub static EROS: KnownAsteroid = KnownAsteroid {
    designation: "433",
    name: "Eros",
    diameter_km: 16.84,
    velocity_km_s: 24.36,
    is_potentially_hazardous: false,
    absolute_magnitude: 11.16,
    spectral_type: "S",
    orbit: (1.458, 0.223, 10.829, 178.664, 304.401, 0.0),
};

pub fn fallback_catalog() -> Vec<CatalogEntry> {
    KNOWN_ASTEROIDS.iter().map(KnownAsteroid::to_entry).collect()
}

/// Look up a built-in asteroid by name or designation (case-insensitive).
pub fn find_known(query: &str) -> Option<&'static KnownAsteroid> {
    let query = query.trim();
    KNOWN_ASTEROIDS.iter().find(|asteroid| {
        asteroid.name.eq_ignore_ascii_case(query) || asteroid.designation == query
    })
}
