use crate::entities::Coordinate;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The geocoding service could not be reached")]
    Transport(#[source] BoxError),
    #[error("The geocoding service responded with an invalid result")]
    Parse(#[source] BoxError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait GeoCodingGateway {
    /// Search all places matching a free-text query
    /// and return their positions in the order of the service.
    fn search(&self, query: &str) -> Result<Vec<Coordinate>>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn search(&self, query: &str) -> Result<Vec<Coordinate>> {
        (**self).search(query)
    }
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn search(&self, query: &str) -> Result<Vec<Coordinate>> {
        (**self).search(query)
    }
}
