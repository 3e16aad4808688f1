use crate::{
    entities::*,
    gateways::geocode::{self, GeoCodingGateway},
};
use std::{cell::RefCell, io};

pub enum MockResponse {
    Candidates(Vec<Coordinate>),
    TransportFailure,
    ParseFailure,
}

pub struct MockGeoCodingGateway {
    response: MockResponse,
    queries: RefCell<Vec<String>>,
}

impl MockGeoCodingGateway {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            queries: Default::default(),
        }
    }

    pub fn with_candidates(candidates: Vec<Coordinate>) -> Self {
        Self::new(MockResponse::Candidates(candidates))
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl GeoCodingGateway for MockGeoCodingGateway {
    fn search(&self, query: &str) -> geocode::Result<Vec<Coordinate>> {
        self.queries.borrow_mut().push(query.to_string());
        match &self.response {
            MockResponse::Candidates(candidates) => Ok(candidates.clone()),
            MockResponse::TransportFailure => Err(geocode::Error::Transport(Box::new(
                io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            ))),
            MockResponse::ParseFailure => Err(geocode::Error::Parse(
                "expected value at line 1 column 1".into(),
            )),
        }
    }
}
