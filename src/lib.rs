// ABOUTME: Main library entry point for the vehicle registry API
// ABOUTME: Provides a REST API for vehicles with JWT-gated administration
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Veiculos API
//!
//! A minimal REST API exposing CRUD operations for vehicles and
//! login/administration for administrators, backed by SQLite and gated by
//! HMAC-SHA-256 bearer tokens.
//!
//! ## Architecture
//!
//! - **Models**: administrators, vehicles, and access profiles
//! - **Auth**: token issuance, validation, and the operation access policy
//! - **Database**: storage queries including the credential lookup
//! - **Middleware**: the bearer gate applied to protected routes
//! - **Routes**: thin handlers per resource
//! - **Config**: environment-based configuration, fail-fast on a missing
//!   signing key
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use veiculos_api::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration; refuses to proceed without JWT_SECRET
//!     let config = ServerConfig::from_env()?;
//!     println!("Veiculos API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Token issuance, validation, and the operation access policy
pub mod auth;

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Administrator and vehicle storage
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request authentication
pub mod middleware;

/// Common data models for administrators and vehicles
pub mod models;

/// `HTTP` routes for login, administrators, and vehicles
pub mod routes;

/// Server resources and HTTP assembly
pub mod server;
