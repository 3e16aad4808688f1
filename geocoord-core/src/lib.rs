pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use geocoord_entities::coordinate::*;
}
