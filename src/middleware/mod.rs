// ABOUTME: HTTP middleware for request authentication
// ABOUTME: Groups the middleware applied to protected routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP middleware

/// Bearer token authentication for protected routes
pub mod auth;

pub use auth::require_bearer;
