// ABOUTME: SQLite connection management and schema migrations for the order server
// ABOUTME: Owns the pool shared by the fruit catalog and order managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Two tables back the order form: `fruit_options` (read-mostly catalog) and
//! `orders` (append-only). Each table has a manager that owns its SQL and a
//! repository trait that the services depend on.

/// Fruit catalog table operations
pub mod catalog;
/// Orders table operations
pub mod orders;
/// Repository traits and their SQLite implementations
pub mod repositories;

pub use catalog::CatalogManager;
pub use orders::OrderManager;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

/// Database handle for catalog and order storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database described by `url`
    ///
    /// File databases are created on first use. In-memory databases are pinned to
    /// a single connection so every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the connection fails
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&url.to_connection_string())
                .await
                .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?,
            DatabaseUrl::SQLite { path } => {
                ensure_parent_dir(path)?;
                // Ensure SQLite creates the database file if it doesn't exist
                let connection_options = format!("{}?mode=rwc", url.to_connection_string());
                SqlitePool::connect(&connection_options)
                    .await
                    .map_err(|e| AppError::database(format!("Failed to connect to {url}: {e}")))?
            }
        };

        info!(database = %url, "Database connection established");
        Ok(Self { pool })
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any `CREATE TABLE` statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_fruit_options().await?;
        self.migrate_orders().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    /// Round-trip a trivial query to confirm the database is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        Ok(())
    }

    async fn migrate_fruit_options(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS fruit_options (
                FRUIT_NAME TEXT NOT NULL,
                SEARCH_ON TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create fruit_options table: {e}")))?;

        Ok(())
    }

    async fn migrate_orders(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS orders (
                order_uid INTEGER PRIMARY KEY AUTOINCREMENT,
                ingredients TEXT NOT NULL,
                name_on_order TEXT NOT NULL,
                order_ts TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                order_filled BOOLEAN NOT NULL DEFAULT false
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create orders table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_filled ON orders(order_filled, order_ts)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create orders index: {e}")))?;

        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            }),
        _ => Ok(()),
    }
}
