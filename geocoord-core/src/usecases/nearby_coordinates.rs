use super::prelude::*;

/// Filter the candidates that are within `threshold` of `origin`.
pub fn nearby_coordinates(
    origin: Coordinate,
    threshold: i32,
    metric: DistanceMetric,
    candidates: &[Coordinate],
) -> Vec<Coordinate> {
    let nearby = origin.nearby_coordinates(threshold, metric, candidates);
    log::debug!(
        "{} of {} candidate(s) are within {} of {} ({:?})",
        nearby.len(),
        candidates.len(),
        threshold,
        origin,
        metric
    );
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_metric() {
        let origin = Coordinate::new(1.0, 1.0);
        let candidates = [Coordinate::new(4.0, 5.0), Coordinate::new(1.0, 7.0)];
        assert_eq!(
            vec![candidates[0]],
            nearby_coordinates(origin, 5, DistanceMetric::Euclidean, &candidates)
        );
        // more than 550 km away
        assert!(
            nearby_coordinates(origin, 500, DistanceMetric::Haversine, &candidates).is_empty()
        );
        assert_eq!(
            candidates.to_vec(),
            nearby_coordinates(origin, 1_000, DistanceMetric::Haversine, &candidates)
        );
    }
}
