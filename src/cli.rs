use crate::{config::Config, gateways};
use anyhow::Result;
use clap::{Parser, Subcommand};
use geocoord_boundary as json;
use geocoord_core::{
    entities::{Coordinate, DistanceMetric},
    usecases,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Print the results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve an address into a coordinate
    Address { address: String },

    /// Resolve a postal code into a coordinate
    PostalCode { postal_code: String },

    /// Distance between two coordinates ('<lat>,<lon>')
    ///
    /// Use '--' before negative coordinates.
    Distance {
        from: Coordinate,
        to: Coordinate,
        /// Planar distance in degrees instead of kilometers
        #[arg(long)]
        euclidean: bool,
    },

    /// Keep all candidates ('<lat>,<lon>') that are near the origin
    ///
    /// Use '--' before negative coordinates.
    Nearby {
        origin: Coordinate,
        /// Maximum distance (kilometers or degrees with --euclidean)
        #[arg(long, allow_negative_numbers = true)]
        threshold: i32,
        /// Planar distance in degrees instead of kilometers
        #[arg(long)]
        euclidean: bool,
        #[arg(required = true)]
        candidates: Vec<Coordinate>,
    },
}

const fn metric(euclidean: bool) -> DistanceMetric {
    if euclidean {
        DistanceMetric::Euclidean
    } else {
        DistanceMetric::Haversine
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let output = execute(args)?;
    println!("{output}");
    Ok(())
}

fn execute(args: Args) -> Result<String> {
    let Args {
        config_file,
        json,
        command,
    } = args;
    match command {
        Command::Address { address } => {
            let gw = geocoding_gateway(config_file)?;
            let pos = usecases::geocode_address(&gw, &address)?;
            log::info!("Resolved address '{address}': {pos}");
            render_coordinate(pos, json)
        }
        Command::PostalCode { postal_code } => {
            let gw = geocoding_gateway(config_file)?;
            let pos = usecases::geocode_postal_code(&gw, &postal_code)?;
            log::info!("Resolved postal code '{postal_code}': {pos}");
            render_coordinate(pos, json)
        }
        Command::Distance {
            from,
            to,
            euclidean,
        } => render_distance(from, to, metric(euclidean), json),
        Command::Nearby {
            origin,
            threshold,
            euclidean,
            candidates,
        } => {
            let metric = metric(euclidean);
            let nearby = usecases::nearby_coordinates(origin, threshold, metric, &candidates);
            render_nearby(origin, threshold, metric, nearby, json)
        }
    }
}

fn geocoding_gateway(
    config_file: Option<PathBuf>,
) -> Result<geocoord_gateways::nominatim::Nominatim> {
    let cfg = Config::try_load_from_file_or_default(config_file)?;
    gateways::geocoding_gateway(&cfg.geocoding)
}

fn render_coordinate(pos: Coordinate, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&json::Coordinate::from(pos))?)
    } else {
        Ok(pos.to_string())
    }
}

fn render_distance(
    from: Coordinate,
    to: Coordinate,
    metric: DistanceMetric,
    json: bool,
) -> Result<String> {
    let value = from.distance_to(metric, &to);
    if json {
        let distance = json::Distance {
            from: from.into(),
            to: to.into(),
            metric: metric.into(),
            value,
        };
        return Ok(serde_json::to_string(&distance)?);
    }
    Ok(match metric {
        DistanceMetric::Haversine => format!("{value:.6} km"),
        DistanceMetric::Euclidean => format!("{value:.6}"),
    })
}

fn render_nearby(
    origin: Coordinate,
    threshold: i32,
    metric: DistanceMetric,
    nearby: Vec<Coordinate>,
    json: bool,
) -> Result<String> {
    if json {
        let nearby = json::NearbyCoordinates {
            origin: origin.into(),
            metric: metric.into(),
            threshold,
            coordinates: nearby.into_iter().map(Into::into).collect(),
        };
        return Ok(serde_json::to_string(&nearby)?);
    }
    Ok(nearby
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
