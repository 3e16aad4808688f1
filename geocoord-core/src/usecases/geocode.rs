use super::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Query<'a> {
    Address(&'a str),
    PostalCode(&'a str),
}

impl<'a> Query<'a> {
    const fn text(self) -> &'static str {
        match self {
            Self::Address(_) => "address",
            Self::PostalCode(_) => "postal code",
        }
    }

    const fn as_str(self) -> &'a str {
        match self {
            Self::Address(s) | Self::PostalCode(s) => s,
        }
    }

    fn not_found(self) -> Error {
        match self {
            Self::Address(_) => Error::AddressNotFound,
            Self::PostalCode(_) => Error::PostalCodeNotFound,
        }
    }
}

/// Resolve a free-text address into a single position.
///
/// If the service knows several places for the address
/// their centroid is returned.
pub fn geocode_address<G>(gw: &G, address: &str) -> Result<Coordinate>
where
    G: GeoCodingGateway,
{
    resolve(gw, Query::Address(address))
}

/// Resolve a postal code into a single position.
///
/// A postal code often covers several administrative areas,
/// so the centroid of all of them stands in for the code.
pub fn geocode_postal_code<G>(gw: &G, postal_code: &str) -> Result<Coordinate>
where
    G: GeoCodingGateway,
{
    resolve(gw, Query::PostalCode(postal_code))
}

fn resolve<G>(gw: &G, query: Query) -> Result<Coordinate>
where
    G: GeoCodingGateway,
{
    let q = query.as_str();
    if q.trim().is_empty() {
        log::debug!("Refusing to resolve an empty {}", query.text());
        return Err(query.not_found());
    }
    let candidates = gw.search(q).map_err(|err| {
        log::warn!("Failed to resolve {} '{}': {}", query.text(), q, err);
        err
    })?;
    log::debug!(
        "Found {} candidate(s) for {} '{}'",
        candidates.len(),
        query.text(),
        q
    );
    match Coordinate::centroid(&candidates) {
        Some(pos) if !pos.is_empty() => {
            log::debug!("Resolved {} '{}': {}", query.text(), q, pos);
            Ok(pos)
        }
        _ => Err(query.not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gateways::geocode,
        usecases::tests::{MockGeoCodingGateway, MockResponse},
    };

    #[test]
    fn average_all_candidates() {
        let gw = MockGeoCodingGateway::with_candidates(vec![
            Coordinate::new(10.0, 20.0),
            Coordinate::new(12.0, 22.0),
        ]);
        assert_eq!(
            Coordinate::new(11.0, 21.0),
            geocode_address(&gw, "Hanoi").unwrap()
        );
        assert_eq!(
            Coordinate::new(11.0, 21.0),
            geocode_postal_code(&gw, "100000").unwrap()
        );
        assert_eq!(vec!["Hanoi", "100000"], gw.queries());
    }

    #[test]
    fn single_candidate() {
        let pos = Coordinate::new(21.0285, 105.8542);
        let gw = MockGeoCodingGateway::with_candidates(vec![pos]);
        assert_eq!(pos, geocode_address(&gw, "Hoan Kiem, Hanoi").unwrap());
    }

    #[test]
    fn no_candidates() {
        let gw = MockGeoCodingGateway::with_candidates(vec![]);
        let err = geocode_address(&gw, "Nowhere").unwrap_err();
        assert!(matches!(err, Error::AddressNotFound));
        assert_eq!("cannot find the address", err.to_string());

        let err = geocode_postal_code(&gw, "00000").unwrap_err();
        assert!(matches!(err, Error::PostalCodeNotFound));
        assert_eq!("cannot find the postal code", err.to_string());
    }

    #[test]
    fn centroid_at_null_island() {
        let gw = MockGeoCodingGateway::with_candidates(vec![
            Coordinate::new(1.0, -1.0),
            Coordinate::new(-1.0, 1.0),
        ]);
        assert!(geocode_address(&gw, "x").unwrap_err().is_not_found());
        assert!(geocode_postal_code(&gw, "x").unwrap_err().is_not_found());
    }

    #[test]
    fn only_one_zero_axis_is_found() {
        let pos = Coordinate::new(0.0, 32.5);
        let gw = MockGeoCodingGateway::with_candidates(vec![pos]);
        assert_eq!(pos, geocode_address(&gw, "Equator").unwrap());
    }

    #[test]
    fn blank_query_is_not_sent() {
        let gw = MockGeoCodingGateway::with_candidates(vec![Coordinate::new(1.0, 1.0)]);
        assert!(matches!(
            geocode_address(&gw, "  "),
            Err(Error::AddressNotFound)
        ));
        assert!(matches!(
            geocode_postal_code(&gw, ""),
            Err(Error::PostalCodeNotFound)
        ));
        assert!(gw.queries().is_empty());
    }

    #[test]
    fn propagate_transport_failures() {
        let gw = MockGeoCodingGateway::new(MockResponse::TransportFailure);
        let err = geocode_address(&gw, "Hanoi").unwrap_err();
        assert!(!err.is_not_found());
        assert!(matches!(
            err,
            Error::GeoCoding(geocode::Error::Transport(_))
        ));
        let err = geocode_postal_code(&gw, "100000").unwrap_err();
        assert!(matches!(
            err,
            Error::GeoCoding(geocode::Error::Transport(_))
        ));
    }

    #[test]
    fn propagate_parse_failures() {
        let gw = MockGeoCodingGateway::new(MockResponse::ParseFailure);
        assert!(matches!(
            geocode_address(&gw, "Hanoi"),
            Err(Error::GeoCoding(geocode::Error::Parse(_)))
        ));
        assert!(matches!(
            geocode_postal_code(&gw, "100000"),
            Err(Error::GeoCoding(geocode::Error::Parse(_)))
        ));
    }
}
