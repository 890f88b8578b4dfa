// ABOUTME: API root welcome route
// ABOUTME: Points callers at the interactive documentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API root route

use axum::Json;
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Welcome payload returned at the API root
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Home {
    /// Welcome message
    pub mensagem: String,
    /// Where to find the interactive documentation
    pub documentacao: String,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            mensagem: "Bem vindo a API de veículos".into(),
            documentacao: "/swagger-ui".into(),
        }
    }
}

/// Handle `GET /`
pub async fn home() -> Json<Home> {
    Json(Home::default())
}
