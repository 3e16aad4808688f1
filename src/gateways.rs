use crate::config;
use anyhow::{Context as _, Result};
use geocoord_gateways::{http::HttpClient, nominatim::Nominatim};

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Nominatim> {
    match &cfg.gateway {
        Some(config::GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            timeout,
        }) => {
            log::debug!("Use Nominatim geocoding gateway");
            let client = HttpClient::new(user_agent, *timeout)
                .context("Unable to initialize the HTTP client")?;
            Nominatim::new(base_url, client)
                .with_context(|| format!("Invalid geocoding base URL '{base_url}'"))
        }
        None => anyhow::bail!("No geocoding gateway configured"),
    }
}
