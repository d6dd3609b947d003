//! Haversine distance oracle (fallback when no routing service is available).
//!
//! Uses great-circle distance to estimate travel time in seconds.
//! Less accurate than OSRM (ignores roads) but always available.

use std::collections::HashMap;

use crate::error::DistanceError;
use crate::traits::{DistanceOracle, Location};

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance oracle over known location coordinates.
#[derive(Debug, Clone)]
pub struct HaversineOracle {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
    coordinates: HashMap<Location, (f64, f64)>,
}

impl Default for HaversineOracle {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_KMH)
    }
}

impl HaversineOracle {
    pub fn new(speed_kmh: f64) -> Self {
        Self {
            speed_kmh,
            coordinates: HashMap::new(),
        }
    }

    /// Register the (lat, lng) of a location.
    pub fn with_location(mut self, location: Location, lat_lng: (f64, f64)) -> Self {
        self.coordinates.insert(location, lat_lng);
        self
    }

    fn coordinates_of(&self, location: Location) -> Result<(f64, f64), DistanceError> {
        self.coordinates
            .get(&location)
            .copied()
            .ok_or(DistanceError::UnknownLocation(location))
    }

    /// Calculate haversine distance between two points in kilometers.
    fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Convert distance in km to travel time in whole seconds.
    fn km_to_seconds(&self, km: f64) -> f64 {
        (km / self.speed_kmh * 3600.0).round()
    }
}

impl DistanceOracle for HaversineOracle {
    fn distance(&self, _at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
        if from == to {
            return Ok(0.0);
        }
        let km = Self::haversine_km(self.coordinates_of(from)?, self.coordinates_of(to)?);
        Ok(self.km_to_seconds(km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn las_vegas() -> HaversineOracle {
        HaversineOracle::default()
            .with_location(Location::HOME, (36.1, -115.1))
            .with_location(Location(1), (36.2, -115.2))
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = HaversineOracle::haversine_km((36.1, -115.1), (36.1, -115.1));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Las Vegas (36.17, -115.14) to Los Angeles (34.05, -118.24)
        // Actual distance ~370 km
        let dist = HaversineOracle::haversine_km((36.17, -115.14), (34.05, -118.24));
        assert!(dist > 350.0 && dist < 400.0, "LV to LA should be ~370km, got {}", dist);
    }

    #[test]
    fn test_symmetric() {
        let oracle = las_vegas();
        let there = oracle.distance(0, Location::HOME, Location(1)).unwrap();
        let back = oracle.distance(0, Location(1), Location::HOME).unwrap();
        assert_eq!(there, back);
        assert!(there > 0.0);
    }

    #[test]
    fn test_reasonable_travel_time() {
        let oracle = HaversineOracle::new(40.0);
        // 10 km at 40 km/h = 0.25 hours = 900 seconds
        assert_eq!(oracle.km_to_seconds(10.0), 900.0);
    }

    #[test]
    fn test_unknown_location() {
        let oracle = las_vegas();
        assert_eq!(
            oracle.distance(0, Location::HOME, Location(9)),
            Err(DistanceError::UnknownLocation(Location(9)))
        );
    }
}
