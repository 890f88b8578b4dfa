// ABOUTME: Route module organization for the HTTP endpoints
// ABOUTME: Provides route definitions organized by resource with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route modules
//!
//! Each resource gets its own module containing request/response types and
//! thin handler functions that delegate to the storage and auth layers.

/// Administrator management routes
pub mod administrators;
/// Login and session issuance routes
pub mod auth;
/// Health check and system status routes
pub mod health;
/// API root welcome route
pub mod home;
/// `OpenAPI` documentation routes (feature-gated)
#[cfg(feature = "openapi")]
pub mod openapi;
/// Vehicle CRUD routes
pub mod vehicles;

/// Administrator creation payload
pub use administrators::CreateAdministratorRequest;
/// Login request payload
pub use auth::LoginRequest;
/// Login response with token
pub use auth::LoginResponse;
/// Health check route handlers
pub use health::HealthRoutes;
/// Welcome payload
pub use home::Home;
/// `OpenAPI` documentation route handlers (feature-gated)
#[cfg(feature = "openapi")]
pub use openapi::OpenApiRoutes;
/// Vehicle creation/update payload
pub use vehicles::VehiclePayload;
