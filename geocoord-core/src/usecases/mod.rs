mod error;
mod geocode;
mod nearby_coordinates;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, geocode::*, nearby_coordinates::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway};
}
