//! Keplerian orbit elements, the Kepler solver and the orbital-plane
//! transform.

pub mod kepler;
pub mod transform;

#[cfg(test)]
mod proptest_orbit;

use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{
    InvalidParameterError, require_finite, require_in_range, require_non_negative, require_positive,
};
use crate::types::{AU_TO_METERS, DEG_TO_RAD, GM_SUN, SECONDS_PER_DAY};

pub use kepler::{
    KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE, KeplerSolution, eccentric_to_true_anomaly,
    orbital_period, orbital_radius, solve_kepler, solve_kepler_detailed,
};
pub use transform::{cartesian_to_lat_lon, conic_radius, to_cartesian};

/// Semi-major axis used when an orbit is not specified (1 AU).
pub const DEFAULT_SEMI_MAJOR_AXIS_M: f64 = AU_TO_METERS;

/// Eccentricity used when an orbit is not specified.
pub const DEFAULT_ECCENTRICITY: f64 = 0.2;

/// Inclination used when an orbit is not specified (degrees).
pub const DEFAULT_INCLINATION_DEG: f64 = 5.0;

/// Keplerian orbital elements of a bound heliocentric orbit.
/// Angles in radians, distances in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis in meters
    pub semi_major_axis: f64,
    /// Eccentricity, 0 ≤ e < 1
    pub eccentricity: f64,
    pub inclination: f64,
    pub argument_of_perihelion: f64,
    pub longitude_of_ascending_node: f64,
    /// Mean anomaly at the reference epoch
    pub mean_anomaly: f64,
}

impl Default for OrbitalElements {
    fn default() -> Self {
        Self {
            semi_major_axis: DEFAULT_SEMI_MAJOR_AXIS_M,
            eccentricity: DEFAULT_ECCENTRICITY,
            inclination: DEFAULT_INCLINATION_DEG * DEG_TO_RAD,
            argument_of_perihelion: 0.0,
            longitude_of_ascending_node: 0.0,
            mean_anomaly: 0.0,
        }
    }
}

impl OrbitalElements {
    /// Create validated elements from SI values.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        argument_of_perihelion: f64,
        longitude_of_ascending_node: f64,
        mean_anomaly: f64,
    ) -> Result<Self, InvalidParameterError> {
        let elements = Self {
            semi_major_axis,
            eccentricity,
            inclination,
            argument_of_perihelion,
            longitude_of_ascending_node,
            mean_anomaly,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// Create validated elements from catalog-style units.
    ///
    /// # Arguments
    /// * `semi_major_axis_au` - Semi-major axis in AU
    /// * `eccentricity` - Orbital eccentricity in [0, 1)
    /// * `inclination_deg` - Inclination in degrees
    /// * `argument_of_perihelion_deg` - Argument of perihelion in degrees
    /// * `longitude_of_ascending_node_deg` - Longitude of ascending node in degrees
    /// * `mean_anomaly_deg` - Mean anomaly at epoch in degrees
    pub fn from_degrees(
        semi_major_axis_au: f64,
        eccentricity: f64,
        inclination_deg: f64,
        argument_of_perihelion_deg: f64,
        longitude_of_ascending_node_deg: f64,
        mean_anomaly_deg: f64,
    ) -> Result<Self, InvalidParameterError> {
        Self::new(
            semi_major_axis_au * AU_TO_METERS,
            eccentricity,
            inclination_deg * DEG_TO_RAD,
            argument_of_perihelion_deg * DEG_TO_RAD,
            longitude_of_ascending_node_deg * DEG_TO_RAD,
            mean_anomaly_deg * DEG_TO_RAD,
        )
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        require_positive("semi_major_axis", self.semi_major_axis)?;
        require_non_negative("eccentricity", self.eccentricity)?;
        if self.eccentricity >= 1.0 {
            return Err(InvalidParameterError::UnboundOrbit(self.eccentricity));
        }
        require_finite("inclination", self.inclination)?;
        require_finite("argument_of_perihelion", self.argument_of_perihelion)?;
        require_finite("longitude_of_ascending_node", self.longitude_of_ascending_node)?;
        require_finite("mean_anomaly", self.mean_anomaly)?;
        Ok(())
    }

    /// Position at the given mean anomaly, in meters.
    pub fn position_at_mean_anomaly(&self, mean_anomaly: f64) -> DVec3 {
        let e_anomaly = solve_kepler(mean_anomaly, self.eccentricity);
        let true_anomaly = eccentric_to_true_anomaly(e_anomaly, self.eccentricity);
        self.position_at_true_anomaly(true_anomaly)
    }

    /// Position at the given true anomaly, in meters.
    pub fn position_at_true_anomaly(&self, true_anomaly: f64) -> DVec3 {
        to_cartesian(
            true_anomaly,
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.argument_of_perihelion,
            self.longitude_of_ascending_node,
        )
    }

    /// Position `days` after the reference epoch, in meters.
    ///
    /// The mean anomaly advances linearly at [`Self::mean_motion`]; negative
    /// `days` propagate backwards.
    pub fn position_at_time(&self, days: f64) -> DVec3 {
        let mean_anomaly = self.mean_anomaly + self.mean_motion() * days * SECONDS_PER_DAY;
        self.position_at_mean_anomaly(mean_anomaly)
    }

    /// Mean motion n = √(GM/a³) in rad/s.
    pub fn mean_motion(&self) -> f64 {
        (GM_SUN / self.semi_major_axis.powi(3)).sqrt()
    }

    /// Orbital speed at heliocentric distance `radius_m`, in m/s.
    ///
    /// Vis-viva: v = √(GM·(2/r − 1/a)). Bound orbits never reach past 2a,
    /// so larger radii are rejected.
    pub fn velocity_at_radius(&self, radius_m: f64) -> Result<f64, InvalidParameterError> {
        require_positive("radius_m", radius_m)?;
        require_in_range("radius_m", radius_m, 0.0, 2.0 * self.semi_major_axis)?;
        let v_squared = GM_SUN * (2.0 / radius_m - 1.0 / self.semi_major_axis);
        Ok(v_squared.max(0.0).sqrt())
    }

    /// Perihelion distance (closest approach to Sun).
    pub fn perihelion(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Aphelion distance (farthest from Sun).
    pub fn aphelion(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Orbital period in seconds.
    pub fn period(&self) -> f64 {
        orbital_period(self.semi_major_axis)
    }

    /// Orbital period in days.
    pub fn period_days(&self) -> f64 {
        self.period() / SECONDS_PER_DAY
    }
}
