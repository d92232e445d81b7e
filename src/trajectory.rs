//! Renderable orbit paths and cosmetic approach/impact sub-paths.
//!
//! The full orbit is sampled analytically from [`OrbitalElements`]. The impact
//! sub-path is a visual interpolation (a straight blend with a sine arc), not
//! a gravitational trajectory.

use bevy::log::debug;
use bevy::math::DVec3;
use std::f64::consts::{PI, TAU};
use std::iter::FusedIterator;

use crate::error::{InvalidParameterError, require_finite, require_in_range};
use crate::orbit::{OrbitalElements, cartesian_to_lat_lon, eccentric_to_true_anomaly, solve_kepler};
use crate::types::GeoPoint;

/// Lazy sequence of positions around one full revolution.
///
/// Holds `sample_count + 1` points: the last point lies one full revolution
/// after the first, so the path is closed. Cloning (or [`OrbitPath::restart`])
/// yields an independent sequence from the first point.
#[derive(Clone, Debug)]
pub struct OrbitPath {
    elements: OrbitalElements,
    sample_count: usize,
    next: usize,
}

impl OrbitPath {
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Number of intervals the revolution is divided into.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// A fresh copy of this path starting from the first point.
    pub fn restart(&self) -> Self {
        Self {
            next: 0,
            ..self.clone()
        }
    }

    /// Position of sample `step` (0 ≤ step ≤ sample_count), in meters.
    pub fn point_at(&self, step: usize) -> DVec3 {
        let e = self.elements.eccentricity;
        let mean_anomaly = self.elements.mean_anomaly + step as f64 * (TAU / self.sample_count as f64);
        let e_anomaly = solve_kepler(mean_anomaly, e);
        let true_anomaly = eccentric_to_true_anomaly(e_anomaly, e);
        self.elements.position_at_true_anomaly(true_anomaly)
    }
}

impl Iterator for OrbitPath {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        if self.next > self.sample_count {
            return None;
        }
        let point = self.point_at(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.sample_count + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrbitPath {}

impl FusedIterator for OrbitPath {}

/// Sample one full orbit.
///
/// Mean anomaly advances uniformly from the elements' epoch value in
/// `sample_count` steps of 2π/sample_count.
pub fn generate_orbit(
    elements: &OrbitalElements,
    sample_count: usize,
) -> Result<OrbitPath, InvalidParameterError> {
    elements.validate()?;
    if sample_count == 0 {
        return Err(InvalidParameterError::TooFewSamples {
            name: "sample_count",
            value: 0,
            min: 1,
        });
    }
    Ok(OrbitPath {
        elements: *elements,
        sample_count,
        next: 0,
    })
}

/// Float error tolerated in the sample count of [`approach_subpath`].
const SUBPATH_ROUNDING_SLACK: f64 = 1e-9;

/// The trailing `fraction` of an orbit, e.g. 0.2 for the last 20%.
///
/// The count is rounded up so any positive fraction keeps at least one point.
/// Products within rounding noise of an integer are not rounded up, so 7% of
/// 100 points is 7 points even though `100.0 * 0.07` is slightly above 7.
pub fn approach_subpath(orbit: &[DVec3], fraction: f64) -> Result<&[DVec3], InvalidParameterError> {
    require_in_range("fraction", fraction, 0.0, 1.0)?;
    if fraction == 0.0 {
        return Err(InvalidParameterError::NotPositive {
            name: "fraction",
            value: fraction,
        });
    }
    let exact = orbit.len() as f64 * fraction;
    let keep = ((exact - SUBPATH_ROUNDING_SLACK).ceil().max(1.0) as usize).min(orbit.len());
    Ok(&orbit[orbit.len() - keep..])
}

/// Cosmetic descent from `start` to `target` in `steps` intervals.
///
/// Positions are a linear blend of the endpoints with a sine bump of
/// `arc_height` added on the y axis: y(t) = lerp(y_start, y_target, t) + sin(tπ)·h.
/// Both endpoints are included, so the result has `steps + 1` points.
pub fn impact_subpath(
    start: DVec3,
    target: DVec3,
    steps: usize,
    arc_height: f64,
) -> Result<Vec<DVec3>, InvalidParameterError> {
    if steps == 0 {
        return Err(InvalidParameterError::TooFewSamples {
            name: "steps",
            value: 0,
            min: 1,
        });
    }
    require_finite("arc_height", arc_height)?;

    let path = (0..=steps)
        .map(|k| {
            let t = k as f64 / steps as f64;
            let mut point = start.lerp(target, t);
            point.y += (t * PI).sin() * arc_height;
            point
        })
        .collect();
    Ok(path)
}

/// Where a sampled path first enters a sphere centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceIntersection {
    /// Entry point, in the units of the path
    pub point: DVec3,
    pub location: GeoPoint,
    /// Index of the segment `path[i]..path[i + 1]` that crosses the surface
    pub segment_index: usize,
}

/// Find the first path segment that pierces a sphere of `radius` at the origin.
pub fn earth_intersection(path: &[DVec3], radius: f64) -> Option<SurfaceIntersection> {
    path.windows(2).enumerate().find_map(|(segment_index, pair)| {
        let point = segment_sphere_intersection(pair[0], pair[1], DVec3::ZERO, radius)?;
        let location = cartesian_to_lat_lon(point)?;
        debug!(
            "Path enters surface on segment {segment_index} at lat {:.2}, lon {:.2}",
            location.lat_deg, location.lon_deg
        );
        Some(SurfaceIntersection {
            point,
            location,
            segment_index,
        })
    })
}

/// Nearest intersection of the segment p1→p2 with a sphere, if any.
fn segment_sphere_intersection(p1: DVec3, p2: DVec3, center: DVec3, radius: f64) -> Option<DVec3> {
    let d = p2 - p1;
    let f = p1 - center;

    let a = d.length_squared();
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * f.dot(d);
    let c = f.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t_near = (-b - sqrt_disc) / (2.0 * a);
    let t_far = (-b + sqrt_disc) / (2.0 * a);

    // Entering hit first; a segment that starts inside reports its exit
    [t_near, t_far]
        .into_iter()
        .find(|t| (0.0..=1.0).contains(t))
        .map(|t| p1 + d * t)
}
