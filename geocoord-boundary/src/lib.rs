use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    Euclidean,
    Haversine,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Distance {
    pub from: Coordinate,
    pub to: Coordinate,
    pub metric: DistanceMetric,
    pub value: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NearbyCoordinates {
    pub origin: Coordinate,
    pub metric: DistanceMetric,
    pub threshold: i32,
    pub coordinates: Vec<Coordinate>,
}
