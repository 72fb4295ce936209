//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

mod config;
mod handlers;
mod middleware;
mod server;
mod state;
mod telemetry;

use config::AppConfig;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    let service = server::start(config).await?;
    tracing::info!("Quill API server listening on {}", service.addr());

    // The handle owns shutdown: wait for Ctrl-C, then stop serving and
    // release the store.
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    service.stop().await
}
