use crate::gateways::geocode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find the address")]
    AddressNotFound,
    #[error("cannot find the postal code")]
    PostalCodeNotFound,
    #[error(transparent)]
    GeoCoding(#[from] geocode::Error),
}

impl Error {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::AddressNotFound | Self::PostalCodeNotFound)
    }
}
