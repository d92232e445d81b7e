//! Test utilities for impact and orbit tests.
//!
//! Provides fixtures for well-known bodies and energies, and assertions for
//! the monotonicity and closure properties the calculations must keep.

use bevy::math::DVec3;

use crate::impact::{ImpactEnergyResult, joules_to_megatons, megatons_to_joules};
use crate::types::{AsteroidParameters, Composition};

/// Fixtures for creating test inputs.
pub mod fixtures {
    use super::*;

    /// Bennu-sized rocky body: 0.49 km at 17.8 km/s, 3000 kg/m³.
    pub fn bennu() -> AsteroidParameters {
        AsteroidParameters {
            diameter_km: 0.49,
            velocity_km_s: 17.8,
            density_kg_m3: 3000.0,
            composition: Composition::Carbonaceous,
        }
    }

    /// Chicxulub-class impactor: 10 km rock at 20 km/s.
    pub fn chicxulub() -> AsteroidParameters {
        AsteroidParameters {
            diameter_km: 10.0,
            velocity_km_s: 20.0,
            density_kg_m3: 3000.0,
            composition: Composition::Rock,
        }
    }

    /// An energy record with the given TNT yield. Mass is set to 1 kg.
    pub fn energy_from_megatons(megatons: f64) -> ImpactEnergyResult {
        ImpactEnergyResult {
            mass_kg: 1.0,
            kinetic_energy_joules: megatons_to_joules(megatons),
            tnt_equivalent_megatons: megatons,
        }
    }

    /// An energy record with the given kinetic energy. Mass is set to 1 kg.
    pub fn energy_from_joules(joules: f64) -> ImpactEnergyResult {
        ImpactEnergyResult {
            mass_kg: 1.0,
            kinetic_energy_joules: joules,
            tnt_equivalent_megatons: joules_to_megatons(joules),
        }
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Assert that `values` strictly increase.
    ///
    /// # Panics
    /// Panics at the first pair that does not increase.
    pub fn assert_strictly_increasing(values: &[f64]) {
        for (i, pair) in values.windows(2).enumerate() {
            assert!(
                pair[1] > pair[0],
                "Not strictly increasing at {i}: {:.6e} -> {:.6e}",
                pair[0],
                pair[1]
            );
        }
    }

    /// Assert that a sampled path ends where it started.
    ///
    /// # Panics
    /// Panics if the gap between first and last point exceeds `tolerance`.
    pub fn assert_path_closed(path: &[DVec3], tolerance: f64) {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            panic!("Empty path cannot be closed");
        };
        let gap = (*last - *first).length();
        assert!(
            gap <= tolerance,
            "Path not closed: gap={gap:.6e}, tolerance={tolerance:.6e}"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImpactPhysicsPlugin, ScalingConfig};
    use approx::assert_relative_eq;

    #[test]
    fn test_energy_fixtures_agree() {
        let a = fixtures::energy_from_megatons(2.0);
        let b = fixtures::energy_from_joules(a.kinetic_energy_joules);
        assert_relative_eq!(b.tnt_equivalent_megatons, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_bodies_are_valid() {
        fixtures::bennu().validate().unwrap();
        fixtures::chicxulub().validate().unwrap();
    }

    #[test]
    fn test_strictly_increasing_accepts_sorted() {
        assertions::assert_strictly_increasing(&[1.0, 2.0, 2.5]);
        assertions::assert_strictly_increasing(&[]);
    }

    #[test]
    #[should_panic(expected = "Not strictly increasing")]
    fn test_strictly_increasing_rejects_plateau() {
        assertions::assert_strictly_increasing(&[1.0, 1.0]);
    }

    #[test]
    fn test_headless_app_runs_plugin() {
        let mut app = bevy_test::headless_app();
        app.add_plugins(ImpactPhysicsPlugin {
            config_path: Some("does/not/exist.toml".into()),
        });
        app.update();
        assert_eq!(
            *app.world().resource::<ScalingConfig>(),
            ScalingConfig::default()
        );
    }
}
