// ABOUTME: OpenAPI documentation endpoint with Swagger UI
// ABOUTME: Provides machine-readable API spec and interactive docs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `OpenAPI` documentation routes
//!
//! This module provides `OpenAPI` 3.0 specification generation and Swagger UI
//! for exploring and testing the API.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::models::{AdministratorView, Role, ValidationErrors, Vehicle};
use crate::routes::administrators::CreateAdministratorRequest;
use crate::routes::auth::{LoginRequest, LoginResponse};
use crate::routes::home::Home;
use crate::routes::vehicles::VehiclePayload;

/// `OpenAPI` documentation for the vehicle registry API
///
/// Path annotations require standalone functions, so only schema definitions
/// are currently generated.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Veiculos API",
        version = "0.1.0",
        description = "Vehicle registry REST API with JWT-gated administration",
        license(name = "MIT OR Apache-2.0")
    ),
    tags(
        (name = "administradores", description = "Login and administrator management"),
        (name = "veiculos", description = "Vehicle registry CRUD")
    ),
    components(
        schemas(
            Home,
            Role,
            LoginRequest,
            LoginResponse,
            CreateAdministratorRequest,
            AdministratorView,
            VehiclePayload,
            Vehicle,
            ValidationErrors,
        )
    )
)]
pub struct ApiDoc;

/// `OpenAPI` routes provider
pub struct OpenApiRoutes;

impl OpenApiRoutes {
    /// Create `OpenAPI` documentation routes
    ///
    /// Provides:
    /// - `/swagger-ui` - Interactive Swagger UI documentation
    /// - `/api-docs/openapi.json` - Raw `OpenAPI` 3.0 JSON specification
    pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }
}
