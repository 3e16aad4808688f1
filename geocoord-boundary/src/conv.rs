use super::*;
use geocoord_entities as e;

impl From<e::coordinate::Coordinate> for Coordinate {
    fn from(from: e::coordinate::Coordinate) -> Self {
        Self {
            lat: from.lat(),
            lon: from.lon(),
        }
    }
}

impl From<Coordinate> for e::coordinate::Coordinate {
    fn from(from: Coordinate) -> Self {
        let Coordinate { lat, lon } = from;
        Self::new(lat, lon)
    }
}

impl From<e::coordinate::DistanceMetric> for DistanceMetric {
    fn from(from: e::coordinate::DistanceMetric) -> Self {
        use e::coordinate::DistanceMetric as E;
        match from {
            E::Euclidean => Self::Euclidean,
            E::Haversine => Self::Haversine,
        }
    }
}

impl From<DistanceMetric> for e::coordinate::DistanceMetric {
    fn from(from: DistanceMetric) -> Self {
        use DistanceMetric as B;
        match from {
            B::Euclidean => Self::Euclidean,
            B::Haversine => Self::Haversine,
        }
    }
}
