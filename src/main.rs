//! Caja de Herramientas server.
//!
//! Entry point: loads configuration, initializes logging and serves the app.

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

use toolbox::config::AppConfig;
use toolbox::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    telemetry::init();

    let config = AppConfig::load().context("loading configuration")?;

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        weather = %config.weather.label,
        "Configuration loaded"
    );

    server::start_server(Arc::new(config)).await
}
