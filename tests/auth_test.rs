// ABOUTME: Integration tests for bearer token generation and validation
// ABOUTME: Covers the token lifecycle including expiry, tampering, and key mismatch

use veiculos_api::auth::{AuthManager, JwtValidationError};
use veiculos_api::models::{Administrator, Role};

const SECRET: &[u8] = b"test-signing-key-0123456789abcdef";

fn administrator() -> Administrator {
    Administrator {
        id: 1,
        email: "login@test.com".into(),
        senha: "123456".into(),
        perfil: Role::Admin,
    }
}

#[test]
fn test_token_generation_and_validation() {
    let auth_manager = AuthManager::new(SECRET, 24).unwrap();

    let token = auth_manager.generate_token(&administrator()).unwrap();

    // Compact JWS: three base64url segments joined by dots
    assert_eq!(token.split('.').count(), 3);

    let claims = auth_manager.validate_token_detailed(&token).unwrap();
    assert_eq!(claims.email, "login@test.com");
    assert_eq!(claims.perfil, "Adm");
    assert_eq!(claims.role().unwrap(), Role::Admin);
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
}

#[test]
fn test_editor_profile_carried_in_claims() {
    let auth_manager = AuthManager::new(SECRET, 24).unwrap();
    let editor = Administrator {
        perfil: Role::Editor,
        ..administrator()
    };

    let token = auth_manager.generate_token(&editor).unwrap();
    let claims = auth_manager.validate_token_detailed(&token).unwrap();

    assert_eq!(claims.perfil, "Editor");
    assert_eq!(claims.role().unwrap(), Role::Editor);
}

#[test]
fn test_expired_token_rejection() {
    // Negative lifetime puts the expiry 25 hours in the past at issuance
    let auth_manager = AuthManager::new(SECRET, -25).unwrap();
    let token = auth_manager.generate_token(&administrator()).unwrap();

    let result = auth_manager.validate_token_detailed(&token);
    assert!(matches!(
        result,
        Err(JwtValidationError::TokenExpired { .. })
    ));
}

#[test]
fn test_tampered_signature_rejection() {
    let auth_manager = AuthManager::new(SECRET, 24).unwrap();
    let token = auth_manager.generate_token(&administrator()).unwrap();

    let (head, signature) = token.rsplit_once('.').unwrap();
    let flipped = if signature.as_bytes()[0] == b'A' {
        'B'
    } else {
        'A'
    };
    let tampered = format!("{head}.{flipped}{}", &signature[1..]);
    assert_ne!(token, tampered);

    let result = auth_manager.validate_token_detailed(&tampered);
    assert!(matches!(
        result,
        Err(JwtValidationError::TokenInvalid { .. })
    ));
}

#[test]
fn test_token_signed_with_other_key_rejection() {
    let issuer = AuthManager::new(SECRET, 24).unwrap();
    let validator = AuthManager::new(b"a-completely-different-signing-key", 24).unwrap();

    let token = issuer.generate_token(&administrator()).unwrap();

    let result = validator.validate_token_detailed(&token);
    assert!(matches!(
        result,
        Err(JwtValidationError::TokenInvalid { .. })
    ));
}

#[test]
fn test_malformed_token_rejection() {
    let auth_manager = AuthManager::new(SECRET, 24).unwrap();

    for garbage in ["", "not-a-jwt", "one.two", "a.b.c.d"] {
        let result = auth_manager.validate_token_detailed(garbage);
        assert!(
            matches!(result, Err(JwtValidationError::TokenMalformed { .. })),
            "{garbage:?} should be rejected as malformed"
        );
    }
}

#[tokio::test]
async fn test_tokens_differ_across_issuance_times() {
    let auth_manager = AuthManager::new(SECRET, 24).unwrap();
    let admin = administrator();

    let first = auth_manager.generate_token(&admin).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let second = auth_manager.generate_token(&admin).unwrap();

    // Distinct issued-at and expiry instants, both independently valid
    assert_ne!(first, second);
    assert!(auth_manager.validate_token_detailed(&first).is_ok());
    assert!(auth_manager.validate_token_detailed(&second).is_ok());
}
