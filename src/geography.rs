//! Great-circle geography: distances, nearby population centres and
//! tsunami arrival times.

use serde::Serialize;

use crate::constants::TSUNAMI_DEEP_OCEAN_SPEED_M_S;
use crate::types::{DEG_TO_RAD, EARTH_RADIUS_KM, GeoPoint, KM_TO_M};

/// Major population centres checked against a devastation radius.
pub static POPULATION_CENTERS: &[(&str, GeoPoint)] = &[
    ("New York", GeoPoint::new(40.7128, -74.0060)),
    ("London", GeoPoint::new(51.5074, -0.1278)),
    ("Tokyo", GeoPoint::new(35.6762, 139.6503)),
    ("Beijing", GeoPoint::new(39.9042, 116.4074)),
    ("Moscow", GeoPoint::new(55.7558, 37.6176)),
    ("São Paulo", GeoPoint::new(-23.5505, -46.6333)),
    ("Mumbai", GeoPoint::new(19.0760, 72.8777)),
    ("Cairo", GeoPoint::new(30.0444, 31.2357)),
    ("Sydney", GeoPoint::new(-33.8688, 151.2093)),
    ("Los Angeles", GeoPoint::new(34.0522, -118.2437)),
];

/// Reference points for continental coastlines.
pub static TSUNAMI_REGIONS: &[(&str, GeoPoint)] = &[
    ("North America", GeoPoint::new(40.0, -100.0)),
    ("Europe", GeoPoint::new(50.0, 10.0)),
    ("Asia", GeoPoint::new(35.0, 100.0)),
    ("South America", GeoPoint::new(-20.0, -60.0)),
    ("Africa", GeoPoint::new(0.0, 20.0)),
    ("Australia", GeoPoint::new(-25.0, 135.0)),
];

/// Great-circle distance in km (haversine formula).
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat_deg * DEG_TO_RAD;
    let lat2 = to.lat_deg * DEG_TO_RAD;
    let delta_lat = (to.lat_deg - from.lat_deg) * DEG_TO_RAD;
    let delta_lon = (to.lon_deg - from.lon_deg) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Population centres within `radius_km` of `point`.
pub fn affected_cities(point: GeoPoint, radius_km: f64) -> Vec<&'static str> {
    POPULATION_CENTERS
        .iter()
        .filter(|(_, city)| haversine_km(point, *city) <= radius_km)
        .map(|(name, _)| *name)
        .collect()
}

/// Tsunami arrival time at one coastline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegionTravelTime {
    pub region: &'static str,
    pub distance_km: f64,
    pub hours: f64,
}

/// Deep-ocean arrival times from `origin` to every reference coastline.
pub fn tsunami_travel_times(origin: GeoPoint) -> Vec<RegionTravelTime> {
    TSUNAMI_REGIONS
        .iter()
        .map(|(region, point)| {
            let distance_km = haversine_km(origin, *point);
            RegionTravelTime {
                region: *region,
                distance_km,
                hours: distance_km * KM_TO_M / (TSUNAMI_DEEP_OCEAN_SPEED_M_S * 3600.0),
            }
        })
        .collect()
}
