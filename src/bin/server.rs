//! ewma-server - HTTP front end for the average and EWMA computations
//!
//! Usage:
//!   ewma-server                        # 0.0.0.0:8000, CORS and metrics on
//!   ewma-server --port 9000 --no-cors
//!   RUST_LOG=debug ewma-server --no-metrics

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ewma_api::{config::ServerConfig, metrics::Metrics, server};

#[derive(Parser)]
#[command(name = "ewma-server")]
#[command(about = "EWMA and average computation API")]
struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Disable the permissive CORS headers
    #[arg(long)]
    no_cors: bool,

    /// Disable request metrics and the /metrics route
    #[arg(long)]
    no_metrics: bool,

    /// Largest accepted request body in bytes
    #[arg(long, default_value = "33554432")]
    max_body_bytes: usize,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            cors_enabled: !cli.no_cors,
            metrics_enabled: !cli.no_metrics,
            max_body_bytes: cli.max_body_bytes,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from(Cli::parse());
    info!("Initializing EWMA API");

    let metrics = if config.metrics_enabled {
        match Metrics::new() {
            Ok(m) => Some(m),
            Err(e) => {
                error!(error = %e, "Failed to register metrics");
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    if let Err(e) = server::serve(config, metrics).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
