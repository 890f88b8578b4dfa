// ABOUTME: Administrator management route handlers
// ABOUTME: Provides listing, lookup, and creation of administrator accounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Administrator management routes
//!
//! All handlers sit behind the bearer gate and consult the access policy.
//! Responses use [`AdministratorView`]: the stored secret never leaves the
//! storage layer.

use crate::auth::{Claims, Operation};
use crate::errors::{AppError, AppResult};
use crate::models::{Administrator, AdministratorView, Role, ValidationErrors};
use crate::server::ServerResources;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Administrator creation request
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateAdministratorRequest {
    /// Login email
    pub email: String,
    /// Login secret
    pub senha: String,
    /// Access profile; absent means `Editor`
    pub perfil: Option<Role>,
}

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationQuery {
    /// 1-based page number; absent means the first page
    pub pagina: Option<u32>,
}

fn validate_payload(request: &CreateAdministratorRequest) -> ValidationErrors {
    let mut validation = ValidationErrors::new();

    if request.email.is_empty() {
        validation.push("Email não pode ser vazio");
    }

    if request.senha.is_empty() {
        validation.push("Senha não pode ser vazia");
    }

    validation
}

/// Handle `GET /administradores`
///
/// # Errors
///
/// Returns an error if the access policy rejects the caller or the storage
/// query fails
pub async fn list(
    State(resources): State<Arc<ServerResources>>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<Vec<AdministratorView>>> {
    Operation::ListAdministrators.authorize(&claims)?;

    let page = query.pagina.unwrap_or(1);
    let administrators = resources
        .database
        .list_administrators(page)
        .await
        .map_err(|e| AppError::database(format!("Failed to list administrators: {e}")))?;

    Ok(Json(
        administrators.iter().map(Administrator::view).collect(),
    ))
}

/// Handle `GET /administradores/{id}`
///
/// # Errors
///
/// Returns an error if the access policy rejects the caller, the record does
/// not exist, or the storage query fails
pub async fn get_by_id(
    State(resources): State<Arc<ServerResources>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> AppResult<Json<AdministratorView>> {
    Operation::GetAdministrator.authorize(&claims)?;

    let administrator = resources
        .database
        .get_administrator(id)
        .await
        .map_err(|e| AppError::database(format!("Failed to get administrator: {e}")))?
        .ok_or_else(|| AppError::not_found("Administrator"))?;

    Ok(Json(administrator.view()))
}

/// Handle `POST /administradores`
///
/// An absent profile defaults to `Editor`.
///
/// # Errors
///
/// Returns an error if the access policy rejects the caller, the email is
/// already registered, or the storage operation fails
pub async fn create(
    State(resources): State<Arc<ServerResources>>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateAdministratorRequest>,
) -> AppResult<Response> {
    Operation::CreateAdministrator.authorize(&claims)?;

    let validation = validate_payload(&request);
    if !validation.is_empty() {
        return Ok((StatusCode::BAD_REQUEST, Json(validation)).into_response());
    }

    let existing = resources
        .database
        .get_administrator_by_email(&request.email)
        .await
        .map_err(|e| AppError::database(format!("Failed to check administrator email: {e}")))?;
    if existing.is_some() {
        return Err(AppError::already_exists("Email already in use"));
    }

    let perfil = request.perfil.unwrap_or(Role::Editor);
    let administrator = resources
        .database
        .create_administrator(&request.email, &request.senha, perfil)
        .await
        .map_err(|e| AppError::database(format!("Failed to create administrator: {e}")))?;

    tracing::info!(
        "Administrator created: {} ({}) with profile {}",
        administrator.email,
        administrator.id,
        administrator.perfil
    );

    Ok((StatusCode::CREATED, Json(administrator.view())).into_response())
}
