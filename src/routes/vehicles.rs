// ABOUTME: Vehicle CRUD route handlers
// ABOUTME: Validates payloads and delegates to the vehicle storage queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vehicle CRUD routes
//!
//! Payload validation accumulates every failed rule so a caller sees the
//! full list of problems in one round trip. Validation messages keep the
//! original API's wording.

use crate::auth::{Claims, Operation};
use crate::constants::limits::MIN_VEHICLE_YEAR;
use crate::errors::{AppError, AppResult};
use crate::models::{ValidationErrors, Vehicle};
use crate::server::ServerResources;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Vehicle creation and update payload
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VehiclePayload {
    /// Model name
    pub nome: String,
    /// Manufacturer
    pub marca: String,
    /// Model year
    pub ano: i32,
}

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationQuery {
    /// 1-based page number; absent means the first page
    pub pagina: Option<u32>,
}

fn validate_payload(payload: &VehiclePayload) -> ValidationErrors {
    let mut validation = ValidationErrors::new();

    if payload.nome.is_empty() {
        validation.push("O Nome não pode ser vazio");
    }

    if payload.marca.is_empty() {
        validation.push("A Marca não pode ficar em branco");
    }

    if payload.ano < MIN_VEHICLE_YEAR {
        validation.push("Veículo muito antigo, aceito somente anos superiores a 1950");
    }

    validation
}

/// Handle `GET /veiculos`
///
/// # Errors
///
/// Returns an error if the access policy rejects the caller or the storage
/// query fails
pub async fn list(
    State(resources): State<Arc<ServerResources>>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<Vec<Vehicle>>> {
    Operation::ListVehicles.authorize(&claims)?;

    let page = query.pagina.unwrap_or(1);
    let vehicles = resources
        .database
        .list_vehicles(page)
        .await
        .map_err(|e| AppError::database(format!("Failed to list vehicles: {e}")))?;

    Ok(Json(vehicles))
}

/// Handle `GET /veiculos/{id}`
///
/// # Errors
///
/// Returns an error if the access policy rejects the caller, the record does
/// not exist, or the storage query fails
pub async fn get_by_id(
    State(resources): State<Arc<ServerResources>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vehicle>> {
    Operation::GetVehicle.authorize(&claims)?;

    let vehicle = resources
        .database
        .get_vehicle(id)
        .await
        .map_err(|e| AppError::database(format!("Failed to get vehicle: {e}")))?
        .ok_or_else(|| AppError::not_found("Vehicle"))?;

    Ok(Json(vehicle))
}

/// Handle `POST /veiculos`
///
/// # Errors
///
/// Returns an error if the access policy rejects the caller or the storage
/// operation fails
pub async fn create(
    State(resources): State<Arc<ServerResources>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<VehiclePayload>,
) -> AppResult<Response> {
    Operation::CreateVehicle.authorize(&claims)?;

    let validation = validate_payload(&payload);
    if !validation.is_empty() {
        return Ok((StatusCode::BAD_REQUEST, Json(validation)).into_response());
    }

    let vehicle = resources
        .database
        .create_vehicle(&payload.nome, &payload.marca, payload.ano)
        .await
        .map_err(|e| AppError::database(format!("Failed to create vehicle: {e}")))?;

    tracing::info!("Vehicle created: {} ({})", vehicle.nome, vehicle.id);

    let location = [(header::LOCATION, format!("/veiculos/{}", vehicle.id))];
    Ok((StatusCode::CREATED, location, Json(vehicle)).into_response())
}

/// Handle `PUT /veiculos/{id}`
///
/// # Errors
///
/// Returns an error if the access policy rejects the caller, the record does
/// not exist, or the storage operation fails
pub async fn update(
    State(resources): State<Arc<ServerResources>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<VehiclePayload>,
) -> AppResult<Response> {
    Operation::UpdateVehicle.authorize(&claims)?;

    let mut vehicle = resources
        .database
        .get_vehicle(id)
        .await
        .map_err(|e| AppError::database(format!("Failed to get vehicle: {e}")))?
        .ok_or_else(|| AppError::not_found("Vehicle"))?;

    let validation = validate_payload(&payload);
    if !validation.is_empty() {
        return Ok((StatusCode::BAD_REQUEST, Json(validation)).into_response());
    }

    vehicle.nome = payload.nome;
    vehicle.marca = payload.marca;
    vehicle.ano = payload.ano;

    resources
        .database
        .update_vehicle(&vehicle)
        .await
        .map_err(|e| AppError::database(format!("Failed to update vehicle: {e}")))?;

    Ok((StatusCode::OK, Json(vehicle)).into_response())
}

/// Handle `DELETE /veiculos/{id}`
///
/// # Errors
///
/// Returns an error if the access policy rejects the caller, the record does
/// not exist, or the storage operation fails
pub async fn remove(
    State(resources): State<Arc<ServerResources>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    Operation::DeleteVehicle.authorize(&claims)?;

    let removed = resources
        .database
        .delete_vehicle(id)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete vehicle: {e}")))?;

    if !removed {
        return Err(AppError::not_found("Vehicle"));
    }

    tracing::info!("Vehicle deleted: {id}");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_accumulates_all_messages() {
        let payload = VehiclePayload {
            nome: String::new(),
            marca: String::new(),
            ano: 1949,
        };

        let validation = validate_payload(&payload);
        assert_eq!(validation.mensagens.len(), 3);
        assert!(validation
            .mensagens
            .contains(&"O Nome não pode ser vazio".to_string()));
        assert!(validation
            .mensagens
            .contains(&"A Marca não pode ficar em branco".to_string()));
    }

    #[test]
    fn test_validation_year_boundary() {
        let payload = VehiclePayload {
            nome: "Civic".into(),
            marca: "Honda".into(),
            ano: 1950,
        };

        assert!(validate_payload(&payload).is_empty());
    }
}
