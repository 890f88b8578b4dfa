// ABOUTME: Core domain models for administrators, vehicles, and access profiles
// ABOUTME: Wire field names follow the original Portuguese API contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common data models for administrators and vehicles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Administrator access profile
///
/// Carried in token claims and stored with each administrator record. The
/// wire and storage value for the administrative profile is `"Adm"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum Role {
    /// Full administrative profile
    #[serde(rename = "Adm")]
    Admin,
    /// Restricted editorial profile
    Editor,
}

impl Role {
    /// Wire and storage representation of this profile
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Adm",
            Self::Editor => "Editor",
        }
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adm" => Ok(Self::Admin),
            "Editor" => Ok(Self::Editor),
            other => Err(anyhow::anyhow!("unknown profile: {other}")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stored administrator record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    /// Record identifier
    pub id: i64,
    /// Unique login email
    pub email: String,
    /// Login secret, compared verbatim against the submitted value
    #[serde(skip_serializing)]
    pub senha: String,
    /// Access profile
    pub perfil: Role,
}

impl Administrator {
    /// Public view of this record, without the secret
    #[must_use]
    pub fn view(&self) -> AdministratorView {
        AdministratorView {
            id: self.id,
            email: self.email.clone(),
            perfil: self.perfil,
        }
    }
}

/// Administrator as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AdministratorView {
    /// Record identifier
    pub id: i64,
    /// Login email
    pub email: String,
    /// Access profile
    pub perfil: Role,
}

/// Stored vehicle record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Vehicle {
    /// Record identifier
    pub id: i64,
    /// Model name
    pub nome: String,
    /// Manufacturer
    pub marca: String,
    /// Model year
    pub ano: i32,
}

/// Accumulated field validation messages returned with 400 responses
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ValidationErrors {
    /// One message per failed rule
    pub mensagens: Vec<String>,
}

impl ValidationErrors {
    /// Create an empty message list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed validation rule
    pub fn push(&mut self, mensagem: impl Into<String>) {
        self.mensagens.push(mensagem.into());
    }

    /// True when every rule passed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mensagens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("Adm".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Editor".parse::<Role>().unwrap(), Role::Editor);
        assert_eq!(Role::Admin.to_string(), "Adm");
        assert_eq!(Role::Editor.to_string(), "Editor");
        assert!("adm".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_wire_value() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"Adm\"");
        assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "\"Editor\"");
    }

    #[test]
    fn test_administrator_never_serializes_secret() {
        let administrator = Administrator {
            id: 1,
            email: "login@test.com".into(),
            senha: "123456".into(),
            perfil: Role::Admin,
        };

        let json = serde_json::to_string(&administrator).unwrap();
        assert!(!json.contains("senha"));
        assert!(!json.contains("123456"));

        let json = serde_json::to_string(&administrator.view()).unwrap();
        assert!(!json.contains("senha"));
        assert!(json.contains("login@test.com"));
        assert!(json.contains("Adm"));
    }

    #[test]
    fn test_validation_errors_accumulate() {
        let mut validation = ValidationErrors::new();
        assert!(validation.is_empty());

        validation.push("first");
        validation.push("second");
        assert_eq!(validation.mensagens.len(), 2);
        assert!(!validation.is_empty());
    }

    #[test]
    fn test_vehicle_serde_fields() {
        let vehicle = Vehicle {
            id: 1,
            nome: "Corolla".into(),
            marca: "Toyota".into(),
            ano: 2023,
        };

        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["nome"], "Corolla");
        assert_eq!(json["marca"], "Toyota");
        assert_eq!(json["ano"], 2023);
    }
}
