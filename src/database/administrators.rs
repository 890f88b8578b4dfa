// ABOUTME: Administrator storage operations
// ABOUTME: Credential lookups and administrator management queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Database;
use crate::constants::limits::PAGE_SIZE;
use crate::models::{Administrator, Role};
use anyhow::Result;
use sqlx::Row;

impl Database {
    /// Create the administrators table
    ///
    /// Table and column names follow the original schema:
    /// `Administradores(id, email unique, senha, perfil)`.
    pub(super) async fn migrate_administrators(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS administradores (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT UNIQUE NOT NULL,
                senha TEXT NOT NULL,
                perfil TEXT NOT NULL CHECK (perfil IN ('Adm', 'Editor'))
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_administradores_email ON administradores(email)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find the administrator whose stored credentials exactly equal the
    /// submitted pair
    ///
    /// The comparison is a single read query, case-sensitive on both
    /// columns, with no normalization and no hashing. This query is the only
    /// place that knows the comparison rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_administrator_by_credentials(
        &self,
        email: &str,
        senha: &str,
    ) -> Result<Option<Administrator>> {
        let row = sqlx::query(
            "SELECT id, email, senha, perfil FROM administradores \
             WHERE email = $1 AND senha = $2 LIMIT 1",
        )
        .bind(email)
        .bind(senha)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_administrator).transpose()
    }

    /// Insert a new administrator, returning the stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already in use or the insert fails
    pub async fn create_administrator(
        &self,
        email: &str,
        senha: &str,
        perfil: Role,
    ) -> Result<Administrator> {
        let result =
            sqlx::query("INSERT INTO administradores (email, senha, perfil) VALUES ($1, $2, $3)")
                .bind(email)
                .bind(senha)
                .bind(perfil.as_str())
                .execute(&self.pool)
                .await?;

        Ok(Administrator {
            id: result.last_insert_rowid(),
            email: email.to_owned(),
            senha: senha.to_owned(),
            perfil,
        })
    }

    /// Get an administrator by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_administrator(&self, id: i64) -> Result<Option<Administrator>> {
        let row =
            sqlx::query("SELECT id, email, senha, perfil FROM administradores WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.as_ref().map(Self::row_to_administrator).transpose()
    }

    /// Get an administrator by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_administrator_by_email(&self, email: &str) -> Result<Option<Administrator>> {
        let row =
            sqlx::query("SELECT id, email, senha, perfil FROM administradores WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        row.as_ref().map(Self::row_to_administrator).transpose()
    }

    /// List one page of administrators, ordered by id
    ///
    /// Pages are 1-based with a fixed size of ten records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_administrators(&self, page: u32) -> Result<Vec<Administrator>> {
        let offset = i64::from(page.saturating_sub(1)) * PAGE_SIZE;

        let rows = sqlx::query(
            "SELECT id, email, senha, perfil FROM administradores \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(PAGE_SIZE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_administrator).collect()
    }

    /// Get total administrator count
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_administrators(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM administradores")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Convert a database row to an Administrator struct
    fn row_to_administrator(row: &sqlx::sqlite::SqliteRow) -> Result<Administrator> {
        let perfil: String = row.get("perfil");

        Ok(Administrator {
            id: row.get("id"),
            email: row.get("email"),
            senha: row.get("senha"),
            perfil: perfil.parse()?,
        })
    }
}
