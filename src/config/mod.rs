use anyhow::{Context as _, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geocoord.toml";

const ENV_NAME_GEOCODING_BASE_URL: &str = "GEOCODING_BASE_URL";

#[derive(Debug)]
pub struct Config {
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => {
                    return Err(err).with_context(|| {
                        format!("Unable to read configuration file {}", file_path.display())
                    })
                }
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(base_url) = env::var(ENV_NAME_GEOCODING_BASE_URL) {
            cfg.geocoding.override_base_url(base_url);
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

impl Geocoding {
    fn override_base_url(&mut self, url: String) {
        match &mut self.gateway {
            Some(GeocodingGateway::Nominatim { base_url, .. }) => {
                log::info!("Use geocoding base URL from {ENV_NAME_GEOCODING_BASE_URL}");
                *base_url = url;
            }
            None => {
                log::warn!(
                    "Ignoring {ENV_NAME_GEOCODING_BASE_URL}: no geocoding gateway configured"
                );
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Nominatim {
        base_url: String,
        user_agent: String,
        timeout: Option<Duration>,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { geocoding, gateway } = from;

        let geo_gateway = match geocoding.unwrap_or_default().gateway {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let defaults = raw::Nominatim::default();
                        let raw::Nominatim {
                            base_url,
                            user_agent,
                            timeout,
                        } = gateway.nominatim.unwrap_or_else(|| defaults.clone());
                        let base_url = base_url
                            .or(defaults.base_url)
                            .context("Missing Nominatim base URL")?;
                        let user_agent = user_agent
                            .or(defaults.user_agent)
                            .context("Missing Nominatim user agent")?;
                        log::debug!("Use Nominatim geocoding gateway ({base_url})");
                        GeocodingGateway::Nominatim {
                            base_url,
                            user_agent,
                            timeout,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        Ok(Self { geocoding })
    }
}
