// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Covers fail-fast behavior on missing or invalid settings

use serial_test::serial;
use veiculos_api::config::environment::ServerConfig;
use veiculos_api::constants::limits;

const CONFIG_KEYS: [&str; 7] = [
    "HTTP_PORT",
    "LOG_LEVEL",
    "DATABASE_URL",
    "SEED_DEFAULT_ADMIN",
    "JWT_SECRET",
    "JWT_EXPIRY_HOURS",
    "CORS_ORIGINS",
];

fn clear_env() {
    for key in CONFIG_KEYS {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_requires_signing_key() {
    clear_env();

    // No JWT_SECRET: the server must refuse to start rather than fall back
    // to an embedded key
    assert!(ServerConfig::from_env().is_err());

    std::env::set_var("JWT_SECRET", "   ");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    std::env::set_var("JWT_SECRET", "config-test-secret");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, limits::DEFAULT_HTTP_PORT);
    assert_eq!(config.auth.jwt_expiry_hours, limits::DEFAULT_JWT_EXPIRY_HOURS);
    assert!(config.database.seed_default_admin);
    assert_eq!(config.cors.origins, vec!["*".to_string()]);
    assert!(!config.database.url.is_memory());

    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_values() {
    clear_env();
    std::env::set_var("JWT_SECRET", "config-test-secret");

    std::env::set_var("JWT_EXPIRY_HOURS", "not-a-number");
    assert!(ServerConfig::from_env().is_err());

    std::env::set_var("JWT_EXPIRY_HOURS", "0");
    assert!(ServerConfig::from_env().is_err());

    std::env::set_var("JWT_EXPIRY_HOURS", "24");
    std::env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var("JWT_SECRET", "config-test-secret");
    std::env::set_var("DATABASE_URL", "sqlite::memory:");
    std::env::set_var("HTTP_PORT", "9090");
    std::env::set_var("SEED_DEFAULT_ADMIN", "false");
    std::env::set_var("CORS_ORIGINS", "http://localhost:3000, http://localhost:5173");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.database.url.is_memory());
    assert_eq!(config.http_port, 9090);
    assert!(!config.database.seed_default_admin);
    assert_eq!(
        config.cors.origins,
        vec![
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string()
        ]
    );

    clear_env();
}
