// ABOUTME: JWT-based administrator authentication and the operation access policy
// ABOUTME: Handles token generation, validation, and per-operation authorization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Authentication and Access Policy
//!
//! HMAC-SHA-256 bearer tokens for authenticated administrators. No session
//! state is stored server side: token validity is a pure function of the
//! token bytes, the signing key, and the clock.

use crate::errors::{AppError, AppResult};
use crate::models::{Administrator, Role};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
        /// Current time for reference
        current_time: DateTime<Utc>,
    },
    /// Token signature is invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenExpired {
                expired_at,
                current_time,
            } => {
                let duration_expired = current_time.signed_duration_since(*expired_at);
                write!(
                    f,
                    "JWT token expired {} minutes ago at {}",
                    duration_expired.num_minutes(),
                    expired_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
            }
            Self::TokenInvalid { reason } => {
                write!(f, "JWT token signature is invalid: {reason}")
            }
            Self::TokenMalformed { details } => {
                write!(f, "JWT token is malformed: {details}")
            }
        }
    }
}

impl std::error::Error for JwtValidationError {}

/// `JWT` claims for administrator authentication
///
/// Claim key casing follows the original API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Administrator email
    #[serde(rename = "Email")]
    pub email: String,
    /// Administrator profile, carried for the access policy
    #[serde(rename = "Perfil")]
    pub perfil: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Parse the profile claim into a known role
    ///
    /// # Errors
    /// Returns an error if the claim does not name a known profile
    pub fn role(&self) -> Result<Role> {
        self.perfil.parse()
    }
}

/// Authentication manager for administrator bearer tokens
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager from the configured signing key
    ///
    /// # Errors
    ///
    /// Returns an error if the signing key is empty. There is no embedded
    /// fallback key: startup must fail instead.
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Result<Self> {
        if secret.is_empty() {
            return Err(anyhow!(
                "JWT signing key is empty - refusing to issue unsigned tokens"
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        })
    }

    /// Generate a `JWT` token for an authenticated administrator
    ///
    /// Claims carry the email and profile; expiry is issuance time plus the
    /// configured lifetime, absolute, with no sliding window.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT` encoding fails
    pub fn generate_token(&self, administrator: &Administrator) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        let claims = Claims {
            email: administrator.email.clone(),
            perfil: administrator.perfil.as_str().to_owned(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(token)
    }

    /// Validate a `JWT` token with detailed error information
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] if:
    /// - Token signature is invalid
    /// - Token has expired
    /// - Token is malformed or not valid `JWT` format
    /// - Token claims cannot be deserialized
    pub fn validate_token_detailed(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let claims = self.decode_token_claims(token)?;
        Self::validate_claims_expiry(&claims)?;
        Ok(claims)
    }

    /// Decode `JWT` token claims without expiration validation
    fn decode_token_claims(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))
    }

    /// Validate claims expiration
    ///
    /// The expiry instant must be strictly in the future: a token presented
    /// at exactly its `exp` timestamp is already expired.
    fn validate_claims_expiry(claims: &Claims) -> Result<(), JwtValidationError> {
        let current_time = Utc::now();
        let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);

        if current_time.timestamp() >= claims.exp {
            tracing::warn!(
                "JWT token expired for administrator: {} at {}",
                claims.email,
                expired_at.to_rfc3339()
            );
            return Err(JwtValidationError::TokenExpired {
                expired_at,
                current_time,
            });
        }
        Ok(())
    }

    /// Convert `JWT` library errors to detailed validation errors
    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> JwtValidationError {
        use jsonwebtoken::errors::ErrorKind;
        tracing::warn!("JWT token validation failed: {:?}", e);

        match e.kind() {
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
                details: "Token format is invalid".into(),
            },
            ErrorKind::Base64(base64_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid base64: {base64_err}"),
            },
            ErrorKind::Json(json_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid JSON: {json_err}"),
            },
            ErrorKind::Utf8(utf8_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid UTF-8: {utf8_err}"),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }
}

/// Protected operations subject to the access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// List administrators page by page
    ListAdministrators,
    /// Fetch one administrator by id
    GetAdministrator,
    /// Create an administrator
    CreateAdministrator,
    /// List vehicles page by page
    ListVehicles,
    /// Fetch one vehicle by id
    GetVehicle,
    /// Create a vehicle
    CreateVehicle,
    /// Update a vehicle
    UpdateVehicle,
    /// Delete a vehicle
    DeleteVehicle,
}

impl Operation {
    /// Roles allowed to perform this operation
    ///
    /// An empty slice admits any authenticated role. No operation restricts
    /// by profile today; the claim is carried so that tightening this table
    /// is a data change, not a gate change.
    #[must_use]
    pub const fn required_roles(self) -> &'static [Role] {
        match self {
            Self::ListAdministrators
            | Self::GetAdministrator
            | Self::CreateAdministrator
            | Self::ListVehicles
            | Self::GetVehicle
            | Self::CreateVehicle
            | Self::UpdateVehicle
            | Self::DeleteVehicle => &[],
        }
    }

    /// Decide whether validated claims may perform this operation
    ///
    /// # Errors
    ///
    /// Returns an error if the profile claim does not name a known role, or
    /// if the policy table requires a role the claims do not carry.
    pub fn authorize(self, claims: &Claims) -> AppResult<Role> {
        let role = claims
            .role()
            .map_err(|_| AppError::auth_invalid(format!("Unknown profile claim: {}", claims.perfil)))?;

        let required = self.required_roles();
        if required.is_empty() || required.contains(&role) {
            Ok(role)
        } else {
            Err(AppError::permission_denied(format!(
                "Profile {role} may not perform {self:?}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_profile(perfil: &str) -> Claims {
        Claims {
            email: "login@test.com".into(),
            perfil: perfil.into(),
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[test]
    fn test_empty_signing_key_rejected() {
        assert!(AuthManager::new(b"", 24).is_err());
    }

    #[test]
    fn test_policy_admits_both_profiles() {
        let operations = [
            Operation::ListAdministrators,
            Operation::GetAdministrator,
            Operation::CreateAdministrator,
            Operation::ListVehicles,
            Operation::GetVehicle,
            Operation::CreateVehicle,
            Operation::UpdateVehicle,
            Operation::DeleteVehicle,
        ];

        for operation in operations {
            assert_eq!(
                operation.authorize(&claims_with_profile("Adm")).unwrap(),
                Role::Admin
            );
            assert_eq!(
                operation.authorize(&claims_with_profile("Editor")).unwrap(),
                Role::Editor
            );
        }
    }

    #[test]
    fn test_policy_rejects_unknown_profile() {
        let result = Operation::ListVehicles.authorize(&claims_with_profile("Root"));
        assert!(result.is_err());
    }
}
