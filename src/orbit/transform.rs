//! Orbital-plane to Cartesian conversion.

use bevy::math::DVec3;

use crate::types::{GeoPoint, RAD_TO_DEG};

/// Radius from the focus via the conic equation r = a(1-e²)/(1+e·cos ν).
pub fn conic_radius(true_anomaly: f64, semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * true_anomaly.cos())
}

/// Position for a true anomaly on an orbit, in the reference (ecliptic) frame.
///
/// Applies the 3-1-3 rotation R_z(Ω)·R_x(i)·R_z(ω) to the perifocal position
/// `(r cos ν, r sin ν, 0)`. Angles in radians, output in the units of
/// `semi_major_axis`. No input checking: eccentricity must be below 1.
pub fn to_cartesian(
    true_anomaly: f64,
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    argument_of_perihelion: f64,
    longitude_of_ascending_node: f64,
) -> DVec3 {
    let r = conic_radius(true_anomaly, semi_major_axis, eccentricity);

    // Argument of latitude
    let u = argument_of_perihelion + true_anomaly;
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_node, cos_node) = longitude_of_ascending_node.sin_cos();

    DVec3::new(
        r * (cos_node * cos_u - sin_node * sin_u * cos_i),
        r * (sin_node * cos_u + cos_node * sin_u * cos_i),
        r * (sin_u * sin_i),
    )
}

/// Latitude/longitude of the direction of `position` from the origin.
///
/// # Returns
/// `None` if the position is at the origin
pub fn cartesian_to_lat_lon(position: DVec3) -> Option<GeoPoint> {
    let r = position.length();
    if r <= f64::EPSILON {
        return None;
    }
    let lat = (position.z / r).clamp(-1.0, 1.0).asin();
    let lon = position.y.atan2(position.x);
    Some(GeoPoint::new(lat * RAD_TO_DEG, lon * RAD_TO_DEG))
}
