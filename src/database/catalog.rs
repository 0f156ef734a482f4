// ABOUTME: Database operations for the fruit catalog (display names and nutrition lookup keys)
// ABOUTME: Reads preserve table order; writes are used only by seeding and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::FruitOption;
use smoothie_core::constants::tables;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::time::Instant;

/// Fruit catalog database operations manager
pub struct CatalogManager {
    pool: SqlitePool,
}

impl CatalogManager {
    /// Create a new catalog manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every catalog entry in table order
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_fruit_options(&self) -> AppResult<Vec<FruitOption>> {
        let started = Instant::now();
        let result = sqlx::query(
            r"
            SELECT FRUIT_NAME, SEARCH_ON
            FROM fruit_options
            ORDER BY rowid ASC
            ",
        )
        .fetch_all(&self.pool)
        .await;

        AppLogger::log_database_operation(
            "select",
            tables::FRUIT_OPTIONS,
            result.is_ok(),
            elapsed_ms(started),
        );

        let rows =
            result.map_err(|e| AppError::database(format!("Failed to list fruit options: {e}")))?;
        Ok(rows.iter().map(row_to_fruit_option).collect())
    }

    /// Number of rows in the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM fruit_options")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count fruit options: {e}")))?;

        Ok(row.get("total"))
    }

    /// Replace the whole catalog in a single transaction
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; the previous catalog is kept in that case
    pub async fn replace_catalog(&self, options: &[FruitOption]) -> AppResult<usize> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM fruit_options")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear fruit options: {e}")))?;

        for option in options {
            sqlx::query("INSERT INTO fruit_options (FRUIT_NAME, SEARCH_ON) VALUES ($1, $2)")
                .bind(&option.name)
                .bind(&option.lookup_key)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::database(format!(
                        "Failed to insert fruit option {}: {e}",
                        option.name
                    ))
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit catalog: {e}")))?;

        Ok(options.len())
    }
}

fn row_to_fruit_option(row: &SqliteRow) -> FruitOption {
    FruitOption {
        name: row.get("FRUIT_NAME"),
        lookup_key: row.get("SEARCH_ON"),
    }
}

pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
