// ABOUTME: Bearer token authentication middleware for protected routes
// ABOUTME: Validates Authorization headers and attaches decoded claims to requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::auth::{Claims, JwtValidationError};
use crate::errors::{AppError, AppResult};
use crate::server::ServerResources;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Authenticate a request from its headers, returning the decoded claims
///
/// Every protected operation is allowed iff token validation succeeds;
/// the failure reason is logged but never surfaced to the caller beyond a
/// single unauthorized response.
///
/// # Errors
///
/// Returns an error if:
/// - The authorization header is missing
/// - The header does not carry a `Bearer` scheme
/// - The token fails signature, structure, or expiry validation
pub fn authenticate_request(
    resources: &ServerResources,
    headers: &HeaderMap,
) -> AppResult<Claims> {
    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());

    let Some(auth_str) = auth_header else {
        tracing::warn!("Authentication failed: missing authorization header");
        return Err(AppError::auth_required());
    };

    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        tracing::warn!("Authentication failed: authorization header is not a Bearer token");
        return Err(AppError::auth_invalid(
            "Authorization header must be 'Bearer <token>'",
        ));
    };

    match resources.auth_manager.validate_token_detailed(token) {
        Ok(claims) => {
            tracing::debug!("Bearer token accepted for administrator: {}", claims.email);
            Ok(claims)
        }
        Err(e) => {
            tracing::warn!("Bearer token rejected: {e}");
            Err(match e {
                JwtValidationError::TokenExpired { .. } => AppError::auth_expired(),
                JwtValidationError::TokenInvalid { .. } => {
                    AppError::auth_invalid("Token signature verification failed")
                }
                JwtValidationError::TokenMalformed { .. } => AppError::auth_malformed(),
            })
        }
    }
}

/// Axum middleware guarding every protected route
///
/// On success the decoded [`Claims`] are inserted as a request extension for
/// handlers to consult the access policy.
///
/// # Errors
///
/// Returns an unauthorized error when [`authenticate_request`] rejects the
/// request
pub async fn require_bearer(
    State(resources): State<Arc<ServerResources>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate_request(&resources, request.headers())?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
