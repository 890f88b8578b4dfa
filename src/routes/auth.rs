// ABOUTME: Administrator login route and session issuance
// ABOUTME: Verifies submitted credentials and mints bearer tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Login route
//!
//! Credential verification is a single exact-match lookup; a successful
//! login answers with the administrator's email, profile, and a fresh
//! bearer token.

use crate::errors::{AppError, AppResult};
use crate::models::Role;
use crate::server::ServerResources;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Administrator login request
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Login secret
    pub senha: String,
}

/// Administrator login response
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LoginResponse {
    /// Authenticated email
    pub email: String,
    /// Authenticated profile
    pub perfil: Role,
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Handle `POST /administradores/login`
///
/// # Errors
///
/// Returns 401 when no stored administrator matches the submitted pair. The
/// response does not reveal whether the email or the secret was wrong.
pub async fn login(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    tracing::info!("Administrator login attempt for email: {}", request.email);

    let administrator = resources
        .database
        .find_administrator_by_credentials(&request.email, &request.senha)
        .await
        .map_err(|e| AppError::database(format!("Credential lookup failed: {e}")))?
        .ok_or_else(|| AppError::auth_invalid("Invalid email or password"))?;

    let token = resources
        .auth_manager
        .generate_token(&administrator)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(
        "Administrator logged in successfully: {} ({})",
        administrator.email,
        administrator.id
    );

    Ok(Json(LoginResponse {
        email: administrator.email,
        perfil: administrator.perfil,
        token,
    }))
}
