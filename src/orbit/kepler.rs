//! Kepler equation solver using Newton's method.

use bevy::log::debug;
use std::f64::consts::TAU;

use crate::types::GM_SUN;

/// Newton iteration cap.
pub const KEPLER_MAX_ITERATIONS: usize = 10;

/// Residual |E - e·sin(E) - M| below which the solve stops early.
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Result of a Kepler solve, with diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E in radians
    pub eccentric_anomaly: f64,
    /// Final |E - e·sin(E) - M|
    pub residual: f64,
    /// Newton steps taken
    pub iterations: usize,
}

impl KeplerSolution {
    pub fn converged(&self) -> bool {
        self.residual < KEPLER_TOLERANCE
    }
}

/// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E.
///
/// # Arguments
/// * `mean_anomaly` - Mean anomaly M in radians
/// * `eccentricity` - Orbital eccentricity, expected in [0, 1)
///
/// # Returns
/// Eccentric anomaly E in radians. After [`KEPLER_MAX_ITERATIONS`] steps the
/// best estimate is returned even if the tolerance was not reached; near
/// parabolic eccentricities may therefore be inaccurate.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    solve_kepler_detailed(mean_anomaly, eccentricity).eccentric_anomaly
}

/// Same as [`solve_kepler`] but also reports the residual and step count.
pub fn solve_kepler_detailed(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let m = mean_anomaly;
    let mut e_anomaly = m;
    let mut iterations = 0;

    // f(E) = E - e*sin(E) - M
    let mut f = e_anomaly - eccentricity * e_anomaly.sin() - m;

    while f.abs() >= KEPLER_TOLERANCE && iterations < KEPLER_MAX_ITERATIONS {
        // f'(E) = 1 - e*cos(E)
        let f_prime = 1.0 - eccentricity * e_anomaly.cos();
        e_anomaly -= f / f_prime;
        iterations += 1;
        f = e_anomaly - eccentricity * e_anomaly.sin() - m;
    }

    let solution = KeplerSolution {
        eccentric_anomaly: e_anomaly,
        residual: f.abs(),
        iterations,
    };

    if !solution.converged() {
        debug!(
            "Kepler solve did not converge: M={mean_anomaly}, e={eccentricity}, residual={:.3e}",
            solution.residual
        );
    }

    solution
}

/// Compute true anomaly from eccentric anomaly.
///
/// Uses atan2 for full quadrant coverage:
/// ν = 2 * atan2(sqrt(1+e) * sin(E/2), sqrt(1-e) * cos(E/2))
pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half_e = eccentric_anomaly / 2.0;
    let y = (1.0 + eccentricity).sqrt() * half_e.sin();
    let x = (1.0 - eccentricity).sqrt() * half_e.cos();
    2.0 * y.atan2(x)
}

/// Distance from the focus for a given eccentric anomaly.
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Heliocentric orbital period in seconds (Kepler's third law).
pub fn orbital_period(semi_major_axis: f64) -> f64 {
    TAU * (semi_major_axis.powi(3) / GM_SUN).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AU_TO_METERS, SECONDS_PER_DAY};
    use approx::assert_relative_eq;

    #[test]
    fn test_kepler_solver_circular() {
        // For circular orbit, E = M
        let m = 1.0;
        let solution = solve_kepler_detailed(m, 0.0);
        assert_eq!(solution.eccentric_anomaly, m);
        assert_eq!(solution.iterations, 0);
        assert!(solution.converged());
    }

    #[test]
    fn test_kepler_solver_moderate_eccentricity() {
        let e_anom = solve_kepler(1.0, 0.2);
        let m_check = e_anom - 0.2 * e_anom.sin();
        assert!(
            (m_check - 1.0).abs() < 1e-6,
            "Kepler equation not satisfied: {m_check}"
        );
        assert_relative_eq!(e_anom, 1.1854, epsilon = 1e-3);
    }

    #[test]
    fn test_kepler_solver_high_eccentricity() {
        for m in [0.1, 0.5, 1.0, 2.0, 3.0, 5.0] {
            let solution = solve_kepler_detailed(m, 0.9);
            let m_check = solution.eccentric_anomaly - 0.9 * solution.eccentric_anomaly.sin();
            assert!(
                (m_check - m).abs() < 1e-4,
                "High eccentricity: Kepler equation not satisfied for M={m}: {m_check}"
            );
        }
    }

    #[test]
    fn test_mean_anomaly_is_not_normalized() {
        // Shifting M by a full turn shifts E by a full turn
        let e0 = solve_kepler(0.7, 0.3);
        let e1 = solve_kepler(0.7 + TAU, 0.3);
        assert_relative_eq!(e1 - e0, TAU, epsilon = 1e-5);
    }

    #[test]
    fn test_non_convergence_returns_best_estimate() {
        // e close to 1 near perihelion is the classic slow case for the M seed
        let solution = solve_kepler_detailed(0.001, 0.9999);
        assert!(solution.iterations <= KEPLER_MAX_ITERATIONS);
        assert!(solution.eccentric_anomaly.is_finite());
        if !solution.converged() {
            assert_eq!(solution.iterations, KEPLER_MAX_ITERATIONS);
        }
    }

    #[test]
    fn test_true_anomaly_at_apsides() {
        assert_relative_eq!(eccentric_to_true_anomaly(0.0, 0.5), 0.0);
        assert_relative_eq!(
            eccentric_to_true_anomaly(std::f64::consts::PI, 0.5).abs(),
            std::f64::consts::PI,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_true_anomaly_full_orbit() {
        for e_deg in [0.0, 45.0, 90.0, 135.0, 179.0, 180.0, 181.0, 270.0, 359.0] {
            let e_rad = e_deg * std::f64::consts::PI / 180.0;
            let nu = eccentric_to_true_anomaly(e_rad, 0.5);
            assert!(nu.is_finite(), "True anomaly should be finite for E = {e_deg} deg");
        }
    }

    #[test]
    fn test_radius_at_perihelion_and_aphelion() {
        let a = AU_TO_METERS;
        assert_relative_eq!(orbital_radius(a, 0.2, 0.0), 0.8 * a, max_relative = 1e-12);
        assert_relative_eq!(
            orbital_radius(a, 0.2, std::f64::consts::PI),
            1.2 * a,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_earth_orbital_period() {
        let period_days = orbital_period(AU_TO_METERS) / SECONDS_PER_DAY;
        assert!(
            (period_days - 365.25).abs() < 1.0,
            "Earth orbital period should be ~365.25 days, got {period_days} days"
        );
    }
}
