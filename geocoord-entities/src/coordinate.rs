use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Mean radius of the earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical position given as latitude and longitude in degrees.
///
/// The value `(0, 0)` is reserved as a sentinel for "no coordinate".
/// Neither the constructor nor the setters validate the ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

/// How the distance between two coordinates is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Planar distance that treats degrees like cartesian units.
    ///
    /// This is a rough approximation that is only
    /// useful for small areas.
    Euclidean,
    /// Great-circle distance in kilometers.
    #[default]
    Haversine,
}

impl Coordinate {
    /// Create a coordinate from degrees without any range checks.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Replace the latitude, leaving the longitude untouched.
    pub fn set_lat(&mut self, lat: f64) {
        self.lat = lat;
    }

    /// Replace the longitude, leaving the latitude untouched.
    pub fn set_lon(&mut self, lon: f64) {
        self.lon = lon;
    }

    /// Both axes are non-zero.
    ///
    /// A coordinate with exactly one zero axis is
    /// neither valid nor empty.
    pub fn is_valid(&self) -> bool {
        self.lat != 0.0 && self.lon != 0.0
    }

    /// Both axes are zero, i.e. the sentinel value.
    pub fn is_empty(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }

    /// Planar distance to `(lat, lon)` in degrees (see [`DistanceMetric::Euclidean`]).
    pub fn euclidean_distance(&self, lat: f64, lon: f64) -> f64 {
        let dlat = self.lat - lat;
        let dlon = self.lon - lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }

    /// Calculate the great-circle distance in kilometers
    /// on the surface of the earth using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn haversine_distance(&self, lat: f64, lon: f64) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = lon.to_radians() - self.lon.to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Distance to `other` measured with the given metric.
    pub fn distance_to(&self, metric: DistanceMetric, other: &Coordinate) -> f64 {
        match metric {
            DistanceMetric::Euclidean => self.euclidean_distance(other.lat, other.lon),
            DistanceMetric::Haversine => self.haversine_distance(other.lat, other.lon),
        }
    }

    /// Keep all candidates within `threshold` of `self`.
    ///
    /// The unit of the threshold depends on the metric: kilometers
    /// for [`DistanceMetric::Haversine`] and degrees for
    /// [`DistanceMetric::Euclidean`].
    /// The order of the candidates is preserved.
    pub fn nearby_coordinates(
        &self,
        threshold: i32,
        metric: DistanceMetric,
        candidates: &[Coordinate],
    ) -> Vec<Coordinate> {
        let threshold = f64::from(threshold);
        candidates
            .iter()
            .filter(|c| self.distance_to(metric, c) <= threshold)
            .copied()
            .collect()
    }

    /// The arithmetic mean of all latitudes and all longitudes.
    ///
    /// Returns `None` if there are no coordinates at all.
    pub fn centroid(coordinates: &[Coordinate]) -> Option<Self> {
        if coordinates.is_empty() {
            return None;
        }
        let count = coordinates.len() as f64;
        let (lat_sum, lon_sum) = coordinates
            .iter()
            .fold((0.0, 0.0), |(lat, lon), c| (lat + c.lat, lon + c.lon));
        Some(Self::new(lat_sum / count, lon_sum / count))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateParseError {
    #[error("Expected '<lat>,<lon>' but got '{0}'")]
    Format(String),
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lon(String),
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lon_str)) = s
            .split(',')
            .map(str::trim)
            .collect_tuple::<(&str, &str)>()
        else {
            return Err(CoordinateParseError::Format(s.to_string()));
        };
        let lat = lat_str
            .parse::<f64>()
            .map_err(|_| CoordinateParseError::Lat(lat_str.to_string()))?;
        let lon = lon_str
            .parse::<f64>()
            .map_err(|_| CoordinateParseError::Lon(lon_str.to_string()))?;
        Ok(Self::new(lat, lon))
    }
}
