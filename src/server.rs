// ABOUTME: HTTP server assembly wiring routes, middleware, and shared resources
// ABOUTME: Owns router construction, startup seeding, and the serve loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Server Resources and HTTP assembly
//!
//! Centralized resource container for dependency injection plus the axum
//! router. The bearer gate is applied as a route layer around every
//! protected route; login, the root, and health checks stay open.

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::constants::defaults;
use crate::database::Database;
use crate::middleware::require_bearer;
use crate::models::Role;
use crate::routes;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Administrator and vehicle storage
    pub database: Arc<Database>,
    /// Token issuer and validator
    pub auth_manager: Arc<AuthManager>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            config,
        }
    }
}

/// HTTP API server
pub struct ApiServer {
    resources: Arc<ServerResources>,
}

impl ApiServer {
    /// Create a new server from shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    ///
    /// Protected routes are grouped behind the bearer-token layer; the
    /// login, root, and health routes bypass it.
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        let protected = Router::new()
            .route(
                "/administradores",
                get(routes::administrators::list).post(routes::administrators::create),
            )
            .route(
                "/administradores/:id",
                get(routes::administrators::get_by_id),
            )
            .route(
                "/veiculos",
                get(routes::vehicles::list).post(routes::vehicles::create),
            )
            .route(
                "/veiculos/:id",
                get(routes::vehicles::get_by_id)
                    .put(routes::vehicles::update)
                    .delete(routes::vehicles::remove),
            )
            .route_layer(from_fn_with_state(resources.clone(), require_bearer));

        let router = Router::new()
            .route("/", get(routes::home::home))
            .route("/administradores/login", post(routes::auth::login))
            .merge(routes::health::HealthRoutes::routes())
            .merge(protected);

        #[cfg(feature = "openapi")]
        let router = router.merge(routes::openapi::OpenApiRoutes::routes());

        router
            .layer(TraceLayer::new_for_http())
            .layer(Self::cors_layer(&resources.config))
            .with_state(resources)
    }

    /// Build the CORS layer from the configured origins
    fn cors_layer(config: &ServerConfig) -> CorsLayer {
        let origins = &config.cors.origins;

        if origins.iter().any(|origin| origin == "*") {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parsed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }

    /// Seed the default administrator when the store is empty
    ///
    /// Called from the server binary only; library consumers and tests
    /// start from a clean store.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage queries fail
    pub async fn seed_default_admin(database: &Database) -> Result<()> {
        if database.count_administrators().await? == 0 {
            database
                .create_administrator(
                    defaults::SEED_ADMIN_EMAIL,
                    defaults::SEED_ADMIN_SENHA,
                    Role::Admin,
                )
                .await?;
            warn!(
                "Seeded default administrator '{}' with well-known credentials - replace them before exposing this API",
                defaults::SEED_ADMIN_EMAIL
            );
        }
        Ok(())
    }

    /// Run the server until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if binding the listener or serving fails
    pub async fn run(self, port: u16) -> Result<()> {
        let router = Self::router(self.resources);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

        info!("HTTP server listening on {addr}");

        axum::serve(listener, router)
            .await
            .context("HTTP server terminated")?;

        Ok(())
    }
}
