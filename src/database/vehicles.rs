// ABOUTME: Vehicle storage operations
// ABOUTME: CRUD queries and pagination for the vehicle registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Database;
use crate::constants::limits::PAGE_SIZE;
use crate::models::Vehicle;
use anyhow::Result;
use sqlx::Row;

impl Database {
    /// Create the vehicles table
    pub(super) async fn migrate_vehicles(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS veiculos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nome TEXT NOT NULL,
                marca TEXT NOT NULL,
                ano INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a new vehicle, returning the stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_vehicle(&self, nome: &str, marca: &str, ano: i32) -> Result<Vehicle> {
        let result = sqlx::query("INSERT INTO veiculos (nome, marca, ano) VALUES ($1, $2, $3)")
            .bind(nome)
            .bind(marca)
            .bind(ano)
            .execute(&self.pool)
            .await?;

        Ok(Vehicle {
            id: result.last_insert_rowid(),
            nome: nome.to_owned(),
            marca: marca.to_owned(),
            ano,
        })
    }

    /// Get a vehicle by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_vehicle(&self, id: i64) -> Result<Option<Vehicle>> {
        let row = sqlx::query("SELECT id, nome, marca, ano FROM veiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(Self::row_to_vehicle))
    }

    /// List one page of vehicles, ordered by id
    ///
    /// Pages are 1-based with a fixed size of ten records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_vehicles(&self, page: u32) -> Result<Vec<Vehicle>> {
        let offset = i64::from(page.saturating_sub(1)) * PAGE_SIZE;

        let rows =
            sqlx::query("SELECT id, nome, marca, ano FROM veiculos ORDER BY id LIMIT $1 OFFSET $2")
                .bind(PAGE_SIZE)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.iter().map(Self::row_to_vehicle).collect())
    }

    /// Update every field of an existing vehicle
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn update_vehicle(&self, vehicle: &Vehicle) -> Result<()> {
        sqlx::query("UPDATE veiculos SET nome = $2, marca = $3, ano = $4 WHERE id = $1")
            .bind(vehicle.id)
            .bind(&vehicle.nome)
            .bind(&vehicle.marca)
            .bind(vehicle.ano)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a vehicle by id, returning whether a record was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn delete_vehicle(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM veiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get total vehicle count
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_vehicles(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM veiculos")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Convert a database row to a Vehicle struct
    fn row_to_vehicle(row: &sqlx::sqlite::SqliteRow) -> Vehicle {
        Vehicle {
            id: row.get("id"),
            nome: row.get("nome"),
            marca: row.get("marca"),
            ano: row.get("ano"),
        }
    }
}
