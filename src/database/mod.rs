// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! This module provides storage for administrators and vehicles. Schema
//! creation is idempotent and runs at connection time.

mod administrators;
mod vehicles;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for administrator and vehicle storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist;
        // in-memory URLs take no connection parameters
        let connection_options = if database_url.ends_with(":memory:") {
            database_url.to_string()
        } else if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };

        // Run migrations
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_administrators().await?;
        self.migrate_vehicles().await?;
        Ok(())
    }

    /// Human-readable backend description for startup logs
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        "SQLite"
    }
}
