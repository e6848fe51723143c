//! Command implementations for the geospatial analytics CLI.
//!
//! One subcommand per analytics endpoint. Each prints the same figures the
//! dashboard panels show, or the raw response with `--json`.

use anyhow::Context;
use clap::Subcommand;
use geo_api::endpoints::Endpoint;
use geo_api::{ApiClient, ApiError};
use log::info;
use serde::Serialize;

pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Generate AI insights for a location
    Insights {
        /// Locality name or address
        location: String,
    },

    /// Carbon sequestration, emissions and net impact within the buffer radius
    Carbon {
        /// Locality name or address
        location: String,
    },

    /// Property, tourism, agricultural and health value of the land cover
    Economic {
        /// Locality name or address
        location: String,

        /// Population of the area, used for health cost savings
        #[arg(short, long)]
        population: Option<u64>,
    },

    /// Yearly land-cover composition and changes over the period
    TimeSeries {
        /// Locality name or address
        location: String,
    },
}

/// Print `response` as JSON, or as report lines built by `render`.
fn emit<T: Serialize>(
    endpoint: Endpoint,
    result: Result<T, ApiError>,
    json: bool,
    render: impl FnOnce(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    let response = result
        .map_err(|e| anyhow::anyhow!(e.user_message(endpoint.fallback_message())))
        .with_context(|| format!("POST {} failed", endpoint.path()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for line in render(&response) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub async fn run(command: Command, api_url: &str, json: bool) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url);
    info!("Using analytics API at {}", client.base_url());

    match command {
        Command::Insights { location } => emit(
            Endpoint::AiInsights,
            client.ai_insights(&location).await,
            json,
            report::insights_report,
        ),
        Command::Carbon { location } => emit(
            Endpoint::CarbonFootprint,
            client.carbon_footprint(&location).await,
            json,
            report::carbon_report,
        ),
        Command::Economic {
            location,
            population,
        } => emit(
            Endpoint::EconomicImpact,
            client.economic_impact(&location, population).await,
            json,
            |response| report::economic_report(response, population),
        ),
        Command::TimeSeries { location } => emit(
            Endpoint::TimeSeries,
            client.time_series(&location).await,
            json,
            report::time_series_report,
        ),
    }
}
