// ABOUTME: Server binary for the vehicle registry API
// ABOUTME: Loads configuration, prepares storage and auth, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Veiculos API Server Binary
//!
//! Starts the vehicle registry REST API with administrator authentication
//! and SQLite-backed storage.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use veiculos_api::{
    auth::AuthManager,
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{ApiServer, ServerResources},
};

#[derive(Parser)]
#[command(name = "veiculos-api")]
#[command(about = "Vehicle registry REST API with token-gated administration")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment; this refuses to proceed when
    // JWT_SECRET is absent rather than falling back to a known key
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Veiculos API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    if config.database.seed_default_admin {
        ApiServer::seed_default_admin(&database).await?;
    }

    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_expiry_hours,
    )?;
    info!("Authentication manager initialized");

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config),
    ));
    let server = ApiServer::new(resources);

    display_available_endpoints(http_port);

    if let Err(e) = server.run(http_port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints with their port
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    info!("=== Available API Endpoints ===");
    info!("Authentication:");
    info!("   Login:               POST   http://{host}:{port}/administradores/login");
    info!("Administrators:");
    info!("   List Administrators: GET    http://{host}:{port}/administradores");
    info!("   Get Administrator:   GET    http://{host}:{port}/administradores/{{id}}");
    info!("   Create Administrator: POST  http://{host}:{port}/administradores");
    info!("Vehicles:");
    info!("   List Vehicles:       GET    http://{host}:{port}/veiculos");
    info!("   Get Vehicle:         GET    http://{host}:{port}/veiculos/{{id}}");
    info!("   Create Vehicle:      POST   http://{host}:{port}/veiculos");
    info!("   Update Vehicle:      PUT    http://{host}:{port}/veiculos/{{id}}");
    info!("   Delete Vehicle:      DELETE http://{host}:{port}/veiculos/{{id}}");
    info!("Monitoring:");
    info!("   Health Check:        GET    http://{host}:{port}/health");
    info!("   Readiness:           GET    http://{host}:{port}/ready");
    #[cfg(feature = "openapi")]
    info!("   Swagger UI:          GET    http://{host}:{port}/swagger-ui");
    info!("=== End of Endpoint List ===");
}
