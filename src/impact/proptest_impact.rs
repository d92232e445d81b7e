//! Property-based tests for the energy → damage → classification chain.

use proptest::prelude::*;

use super::{atmospheric_effects, classify, compute_energy};
use crate::config::ScalingConfig;
use crate::constants::MAX_COOLING_C;
use crate::types::{AsteroidParameters, Composition, TargetMaterial};

fn composition() -> impl Strategy<Value = Composition> {
    prop_oneof![
        Just(Composition::Rock),
        Just(Composition::Iron),
        Just(Composition::Carbonaceous),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Same inputs give bit-identical outputs.
    #[test]
    fn prop_energy_is_idempotent(
        diameter in 0.001f64..50.0,
        velocity in 1.0f64..72.0,
        composition in composition(),
    ) {
        let asteroid = AsteroidParameters::new(diameter, velocity, composition).unwrap();
        let first = compute_energy(&asteroid, velocity).unwrap();
        let second = compute_energy(&asteroid, velocity).unwrap();

        prop_assert_eq!(first.mass_kg.to_bits(), second.mass_kg.to_bits());
        prop_assert_eq!(
            first.kinetic_energy_joules.to_bits(),
            second.kinetic_energy_joules.to_bits()
        );
        prop_assert_eq!(
            first.tnt_equivalent_megatons.to_bits(),
            second.tnt_equivalent_megatons.to_bits()
        );
    }

    /// Doubling the impact velocity quadruples the energy.
    #[test]
    fn prop_energy_scales_with_velocity_squared(
        diameter in 0.01f64..10.0,
        velocity in 1.0f64..30.0,
    ) {
        let asteroid = AsteroidParameters::new(diameter, velocity, Composition::Rock).unwrap();
        let slow = compute_energy(&asteroid, velocity).unwrap();
        let fast = compute_energy(&asteroid, 2.0 * velocity).unwrap();

        let ratio = fast.kinetic_energy_joules / slow.kinetic_energy_joules;
        prop_assert!((ratio - 4.0).abs() < 1e-9, "ratio = {}", ratio);
    }

    /// Crater diameter grows strictly with energy at any non-grazing angle.
    #[test]
    fn prop_crater_strictly_increasing_in_energy(
        megatons in 1e-3f64..1e6,
        factor in 1.01f64..100.0,
        angle in 1.0f64..=90.0,
    ) {
        let config = ScalingConfig::default();
        let smaller = config.crater_diameter_km(megatons, angle);
        let larger = config.crater_diameter_km(megatons * factor, angle);
        prop_assert!(larger > smaller, "{} Mt -> {} km, {} Mt -> {} km",
            megatons, smaller, megatons * factor, larger);
    }

    /// Seismic magnitude grows strictly with energy.
    #[test]
    fn prop_seismic_strictly_increasing_in_energy(
        joules in 1e6f64..1e25,
        factor in 1.01f64..100.0,
    ) {
        let config = ScalingConfig::default();
        prop_assert!(config.seismic_magnitude(joules * factor) > config.seismic_magnitude(joules));
    }

    /// A vertical impact digs the largest crater for a given energy.
    #[test]
    fn prop_vertical_impact_maximizes_crater(
        megatons in 1e-3f64..1e6,
        angle in 0.0f64..=90.0,
    ) {
        let config = ScalingConfig::default();
        prop_assert!(
            config.crater_diameter_km(megatons, angle) <= config.crater_diameter_km(megatons, 90.0)
        );
    }

    /// More energy never lowers the severity tier.
    #[test]
    fn prop_severity_monotone_in_energy(
        diameter in 0.001f64..20.0,
        megatons in 0.0f64..1e5,
        extra in 0.0f64..1e5,
    ) {
        prop_assert!(classify(diameter, megatons) <= classify(diameter, megatons + extra));
    }

    /// Cooling saturates at the configured ceiling.
    #[test]
    fn prop_cooling_is_bounded(megatons in 0.0f64..1e9) {
        let effects = atmospheric_effects(megatons, TargetMaterial::Land);
        prop_assert!(effects.cooling_effect_c >= 0.0);
        prop_assert!(effects.cooling_effect_c <= MAX_COOLING_C);
        prop_assert!(!effects.acid_rain);
    }
}
