//! Common test utilities for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use bevy::math::DVec3;
use asteroid_impact::orbit::OrbitalElements;
use asteroid_impact::types::{AsteroidParameters, Composition};

/// Bennu-sized body with rock density: 0.49 km at 17.8 km/s.
pub fn bennu_like() -> AsteroidParameters {
    AsteroidParameters::new(0.49, 17.8, Composition::Carbonaceous)
        .and_then(|a| a.with_density(3000.0))
        .unwrap()
}

/// Moderately eccentric, inclined test orbit.
pub fn inclined_orbit(eccentricity: f64) -> OrbitalElements {
    OrbitalElements::from_degrees(1.5, eccentricity, 12.0, 75.0, 130.0, 0.0).unwrap()
}

/// Largest deviation of any point from the orbital plane of `elements`.
pub fn max_out_of_plane(path: &[DVec3], elements: &OrbitalElements) -> f64 {
    let (si, ci) = elements.inclination.sin_cos();
    let (sn, cn) = elements.longitude_of_ascending_node.sin_cos();
    let normal = DVec3::new(sn * si, -cn * si, ci);
    path.iter().map(|p| p.dot(normal).abs()).fold(0.0, f64::max)
}

/// Write `contents` to a fresh file in the temp dir.
pub fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "asteroid-impact-{}-{name}.toml",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}
