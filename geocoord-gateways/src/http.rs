use geocoord_core::gateways::geocode::{Error, Result};
use std::time::Duration;

/// Perform a single GET request and return the raw response body.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F> Fetch for &F
where
    F: Fetch + ?Sized,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}

/// A blocking HTTP client.
///
/// Any failure (connection, non-2xx status, reading
/// the body) is reported as [`Error::Transport`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Without a `timeout` requests may block forever.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::Transport(Box::new(err))
}

impl Fetch for HttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().map_err(transport_error)?;
        log::debug!("Geocoding service response: {:?}", response.status());
        let body = response
            .error_for_status()
            .and_then(|response| response.bytes())
            .map_err(transport_error)?;
        Ok(body.to_vec())
    }
}
