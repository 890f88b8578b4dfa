// ABOUTME: Application constants and configuration defaults
// ABOUTME: Centralizes limits, default values, and seed data used across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application constants and configuration values

/// Operational limits and fixed sizes
pub mod limits {
    /// Bearer token lifetime in hours
    pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

    /// Fixed page size for every list endpoint
    pub const PAGE_SIZE: i64 = 10;

    /// Oldest accepted vehicle model year
    pub const MIN_VEHICLE_YEAR: i32 = 1950;

    /// Default HTTP API port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Default configuration values
pub mod defaults {
    /// Default database location when `DATABASE_URL` is unset
    pub const DATABASE_URL: &str = "sqlite:./data/veiculos.db";

    /// Email of the administrator seeded into an empty store
    pub const SEED_ADMIN_EMAIL: &str = "administrador@teste.com";

    /// Secret of the seeded administrator
    pub const SEED_ADMIN_SENHA: &str = "123456";
}
