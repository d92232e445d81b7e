//! Property-based tests for the Kepler solver and orbital transform.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::kepler::{eccentric_to_true_anomaly, solve_kepler, solve_kepler_detailed};
use super::transform::{conic_radius, to_cartesian};
use super::OrbitalElements;
use crate::types::AU_TO_METERS;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The solver satisfies Kepler's equation to 1e-4 within the iteration
    /// cap for every bound eccentricity up to 0.9.
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..=0.9,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;
        let e_anom = solve_kepler(mean_anomaly, eccentricity);

        let error = (e_anom - eccentricity * e_anom.sin() - mean_anomaly).abs();
        prop_assert!(
            error < 1e-4,
            "Kepler solver failed: M={}, e={}, E={}, error={}",
            mean_anomaly, eccentricity, e_anom, error
        );
    }

    /// Reported residual is the actual residual of the returned anomaly.
    #[test]
    fn prop_kepler_residual_is_honest(
        mean_anomaly in 0.0f64..TAU,
        eccentricity in 0.0f64..0.99,
    ) {
        let solution = solve_kepler_detailed(mean_anomaly, eccentricity);
        let e = solution.eccentric_anomaly;
        let actual = (e - eccentricity * e.sin() - mean_anomaly).abs();
        prop_assert_eq!(solution.residual, actual);
    }

    /// With zero inclination, perihelion argument and node the transform is a
    /// plain polar-to-Cartesian conversion.
    #[test]
    fn prop_planar_transform_is_polar(
        true_anomaly in 0.0f64..TAU,
        eccentricity in 0.0f64..0.95,
        semi_major_axis_au in 0.3f64..30.0,
    ) {
        let a = semi_major_axis_au * AU_TO_METERS;
        let r = conic_radius(true_anomaly, a, eccentricity);
        let p = to_cartesian(true_anomaly, a, eccentricity, 0.0, 0.0, 0.0);

        prop_assert!((p.x - r * true_anomaly.cos()).abs() <= 1e-9 * r);
        prop_assert!((p.y - r * true_anomaly.sin()).abs() <= 1e-9 * r);
        prop_assert!(p.z.abs() <= 1e-9 * r);
    }

    /// Rotations preserve distance from the focus.
    #[test]
    fn prop_transform_preserves_radius(
        true_anomaly in 0.0f64..TAU,
        eccentricity in 0.0f64..0.95,
        inclination in 0.0f64..std::f64::consts::PI,
        argument_of_perihelion in 0.0f64..TAU,
        node in 0.0f64..TAU,
    ) {
        let p = to_cartesian(true_anomaly, AU_TO_METERS, eccentricity, inclination, argument_of_perihelion, node);
        let r = conic_radius(true_anomaly, AU_TO_METERS, eccentricity);
        prop_assert!(((p.length() - r) / r).abs() < 1e-12);
    }

    /// Every sampled position lies between perihelion and aphelion.
    #[test]
    fn prop_position_within_apsides(
        mean_anomaly in 0.0f64..TAU,
        eccentricity in 0.0f64..0.9,
        inclination in 0.0f64..1.5,
    ) {
        let elements = OrbitalElements::new(AU_TO_METERS, eccentricity, inclination, 0.3, 1.1, 0.0).unwrap();
        let r = elements.position_at_mean_anomaly(mean_anomaly).length();
        let slack = 1e-6 * AU_TO_METERS;
        prop_assert!(r >= elements.perihelion() - slack);
        prop_assert!(r <= elements.aphelion() + slack);
    }

    /// True anomaly is ahead of eccentric anomaly on the outbound leg.
    #[test]
    fn prop_true_anomaly_leads_on_outbound_leg(
        e_anom in 0.01f64..3.1,
        eccentricity in 0.01f64..0.95,
    ) {
        let nu = eccentric_to_true_anomaly(e_anom, eccentricity);
        prop_assert!(nu >= e_anom);
    }
}
