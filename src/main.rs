//! SemiTrace - supply-chain risk data service.
//!
//! Serves the commodity dashboard collections over HTTP, or dumps a one-shot
//! JSON snapshot with `--snapshot`. The catalog is validated at startup;
//! invalid catalog data is a fatal configuration error.

mod config;

use std::sync::Arc;

use catalog::Catalog;
use clap::Parser;
use server::{ServerState, create_app};
use service::MarketDataService;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::AppConfig;

/// SemiTrace - materials supply-chain data service
#[derive(Parser, Debug)]
#[command(name = "semitrace")]
#[command(about = "Supply-chain risk data service for semiconductor-critical materials")]
#[command(version)]
struct Args {
    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Print a JSON snapshot of all collections and exit
    #[arg(long)]
    snapshot: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env().with_overrides(args.host, args.port);

    let catalog = match Catalog::load() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            error!(%err, "catalog validation failed");
            std::process::exit(1);
        }
    };
    info!(materials = catalog.len(), "catalog loaded");

    let service = Arc::new(MarketDataService::new(catalog, config.feed.clone()));

    if args.snapshot {
        run_snapshot(&service).await;
        return;
    }

    run_server(service, &config).await;
}

/// Dump all four collections as JSON to stdout.
async fn run_snapshot(service: &MarketDataService) {
    let snapshot = service.snapshot().await;
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(%err, "snapshot serialization failed");
            std::process::exit(1);
        }
    }
}

/// Serve the REST API until interrupted.
async fn run_server(service: Arc<MarketDataService>, config: &AppConfig) {
    let state = ServerState::new(service);
    let app = create_app(state);

    let addr = config.server.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%err, %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(%addr, "serving dashboard data API");
    if let Err(err) = axum::serve(listener, app).await {
        error!(%err, "server exited with error");
        std::process::exit(1);
    }
}
