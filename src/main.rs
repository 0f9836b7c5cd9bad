//! Conference Site Server
//!
//! Renders the conference website: static marketing pages, the
//! session/speaker schedule, and AMP-optimized popup pages.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 SITE SERVER                   │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ routing  │──▶│  render   │  │
//!                    │  │ server  │   │ resolver │   │scope+engine│ │
//!                    │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!                    │       │                             │        │
//!                    │       │ fixed routes          ┌─────▼─────┐  │
//!                    │       ├─ /sw.js               │ schedule  │  │
//!                    │       ├─ /schedule.json       │  dataset  │  │
//!                    │       ├─ /sitemap.xml         │ + days    │  │
//!                    │       └─ static mounts        └───────────┘  │
//!                    │                                               │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns         │  │
//!                    │  │  config │ amp css cache │ security hdrs │  │
//!                    │  │  observability (tracing + metrics)      │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conf_site::config::loader::{apply_env_overrides, load_config};
use conf_site::config::SiteConfig;
use conf_site::http::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "conf-site", about = "Conference website server")]
struct Args {
    /// Path to a TOML config file; defaults are used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "conf_site=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("conf-site v0.1.0 starting");

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    apply_env_overrides(&mut config);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        production = config.production,
        stage = config.site.stage.as_str(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            conf_site::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    Ok(())
}
