use geocoord_core::gateways::geocode::{Error, GeoCodingGateway, Result};
use geocoord_entities::coordinate::Coordinate;
use serde::{Deserialize, Deserializer};
use url::{form_urlencoded, Url};

use crate::http::{Fetch, HttpClient};

/// Search endpoint of the public OpenStreetMap Nominatim instance.
///
/// The (percent-encoded) query is appended directly.
pub const DEFAULT_BASE_URL: &str =
    "https://nominatim.openstreetmap.org/search.php?polygon_geojson=1&format=jsonv2&q=";

pub const DEFAULT_USER_AGENT: &str = concat!("geocoord/", env!("CARGO_PKG_VERSION"));

/// A geocoding gateway based on [Nominatim](https://nominatim.org).
#[derive(Debug, Clone)]
pub struct Nominatim<F = HttpClient> {
    base_url: String,
    fetch: F,
}

impl<F> Nominatim<F> {
    pub fn new(base_url: &str, fetch: F) -> std::result::Result<Self, url::ParseError> {
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.to_string(),
            fetch,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_url(&self, query: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{}", self.base_url, encoded)
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    #[serde(deserialize_with = "deserialize_degrees")]
    lat: f64,
    #[serde(deserialize_with = "deserialize_degrees")]
    lon: f64,
    #[serde(default)]
    display_name: Option<String>,
}

// Nominatim sends the degrees as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Degrees {
    Number(f64),
    Text(String),
}

fn deserialize_degrees<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let deg = match Degrees::deserialize(deserializer)? {
        Degrees::Number(deg) => deg,
        Degrees::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid degrees '{s}'")))?,
    };
    if !deg.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "non-finite degrees '{deg}'"
        )));
    }
    Ok(deg)
}

fn parse_places(body: &[u8]) -> Result<Vec<Place>> {
    serde_json::from_slice(body).map_err(|err| Error::Parse(Box::new(err)))
}

impl<F> GeoCodingGateway for Nominatim<F>
where
    F: Fetch,
{
    fn search(&self, query: &str) -> Result<Vec<Coordinate>> {
        let url = self.request_url(query);
        log::debug!("Searching places: {url}");
        let body = self.fetch.fetch(&url)?;
        let places = parse_places(&body)?;
        Ok(places
            .into_iter()
            .map(|place| {
                let Place {
                    lat,
                    lon,
                    display_name,
                } = place;
                log::debug!(
                    "Found place '{}' at {lat},{lon}",
                    display_name.as_deref().unwrap_or_default()
                );
                Coordinate::new(lat, lon)
            })
            .collect())
    }
}
