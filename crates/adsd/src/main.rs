//! adsd - ADS Gateway Daemon
//!
//! Serves the ADS REST gateway over a simulated PLC runtime.
//!
//! # Usage
//!
//! ```bash
//! # Demo program on 0.0.0.0:18090
//! ./adsd
//!
//! # Config file, mounted under /ads with the old route names as well
//! ./adsd config/adsd.toml --base-path /ads --legacy-routes
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use ads_api::{attach, Gateway};
use ads_sim::SimulatedDevice;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::DaemonConfig;

#[derive(Parser, Debug)]
#[command(name = "adsd")]
#[command(about = "REST gateway for ADS automation devices")]
struct Args {
    /// Configuration file path (TOML format)
    config: Option<PathBuf>,

    /// Listen address (overrides the config file)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Path prefix for the gateway routes (overrides the config file)
    #[arg(long)]
    base_path: Option<String>,

    /// Also serve /device/info and /symbol/... routes
    #[arg(long)]
    legacy_routes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "adsd=debug,ads_api=debug,ads_sim=debug,tower_http=debug"
    } else {
        "adsd=info,ads_api=info,ads_sim=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting adsd (ADS Gateway Daemon)");

    let mut config = if let Some(ref path) = args.config {
        info!("Loading config from: {}", path.display());
        DaemonConfig::load(path)?
    } else {
        info!("No config file provided, using demo device");
        DaemonConfig::default()
    };

    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(base_path) = args.base_path {
        config.server.base_path = base_path;
    }
    if args.legacy_routes {
        config.server.legacy_routes = true;
    }

    let app = build_app(&config)?;

    let addr = config.server.listen;
    info!(
        base_path = %config.server.base_path,
        legacy_routes = config.server.legacy_routes,
        "Listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

/// Host router: health check plus the gateway routes
fn build_app(config: &DaemonConfig) -> Result<Router> {
    let device = SimulatedDevice::from_config(&config.device)?;
    let gateway = Gateway::new(device);

    let host = Router::new().route("/health", get(|| async { "OK" }));
    let app = attach(host, gateway, &config.gateway_options()).layer(TraceLayer::new_for_http());
    Ok(app)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
