use crate::render::{run_listing, run_search, ListingArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pgpoint::config::AppConfig;
use pgpoint::error::AppError;
use pgpoint::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "PGPoint",
    about = "Serve and query the PGPoint paying-guest listing site",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Search the catalog with the same filters as the website
    Search(SearchArgs),
    /// Show a single listing by slug or identifier
    Listing(ListingArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured property catalog (JSON)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = prepare()?;

    match command {
        Command::Serve(args) => server::run(args, config).await,
        Command::Search(args) => run_search(args, &config),
        Command::Listing(args) => run_listing(args, &config),
    }
}

/// Load configuration and install logging before any command runs.
fn prepare() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}
