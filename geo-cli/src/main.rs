//! Geo CLI - Command line tool for the geospatial analytics API.

use clap::Parser;
use geo_api::config::DEFAULT_API_URL;

#[derive(Parser)]
#[command(
    name = "geo-cli",
    version,
    about = "Geospatial analytics toolkit: insights, carbon, economic and land-cover reports"
)]
struct Cli {
    /// Base URL of the analytics API
    #[arg(long, env = "GEO_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Print the raw JSON response instead of a report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: geo_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    geo_cmd::run(cli.command, &cli.api_url, cli.json).await
}
