// ABOUTME: Database operations for smoothie orders
// ABOUTME: Orders are append-only; the server timestamps each row and marks it unfilled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::catalog::elapsed_ms;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{NewOrder, OrderRecord};
use smoothie_core::constants::tables;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::time::Instant;

/// Orders database operations manager
pub struct OrderManager {
    pool: SqlitePool,
}

impl OrderManager {
    /// Create a new order manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one order row and return its `order_uid`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn insert_order(&self, order: &NewOrder) -> AppResult<i64> {
        let started = Instant::now();
        let result = sqlx::query(
            r"
            INSERT INTO orders (ingredients, name_on_order, order_ts, order_filled)
            VALUES ($1, $2, CURRENT_TIMESTAMP, false)
            ",
        )
        .bind(&order.ingredients)
        .bind(&order.name_on_order)
        .execute(&self.pool)
        .await;

        AppLogger::log_database_operation("insert", tables::ORDERS, result.is_ok(), elapsed_ms(started));

        let done = result.map_err(|e| AppError::database(format!("Failed to insert order: {e}")))?;
        Ok(done.last_insert_rowid())
    }

    /// Fetch a single order by id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_order(&self, order_uid: i64) -> AppResult<Option<OrderRecord>> {
        let row = sqlx::query(
            r"
            SELECT order_uid, ingredients, name_on_order, order_ts, order_filled
            FROM orders
            WHERE order_uid = $1
            ",
        )
        .bind(order_uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get order: {e}")))?;

        row.map(|r| row_to_order(&r)).transpose()
    }

    /// Orders not yet filled, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_pending_orders(&self) -> AppResult<Vec<OrderRecord>> {
        let rows = sqlx::query(
            r"
            SELECT order_uid, ingredients, name_on_order, order_ts, order_filled
            FROM orders
            WHERE order_filled = false
            ORDER BY order_ts ASC, order_uid ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list pending orders: {e}")))?;

        rows.iter().map(row_to_order).collect()
    }
}

fn row_to_order(row: &SqliteRow) -> AppResult<OrderRecord> {
    Ok(OrderRecord {
        order_uid: row.try_get("order_uid")?,
        ingredients: row.try_get("ingredients")?,
        name_on_order: row.try_get("name_on_order")?,
        order_ts: row.try_get("order_ts")?,
        order_filled: row.try_get("order_filled")?,
    })
}
