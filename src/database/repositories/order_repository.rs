// ABOUTME: SQLite implementation of the order repository
// ABOUTME: Inserts and pending-order reads run under the configured database timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::OrderRepository;
use crate::database::{Database, OrderManager};
use crate::errors::AppResult;
use crate::models::{NewOrder, OrderRecord};
use crate::utils::route_timeout::with_database_timeout;
use async_trait::async_trait;
use std::time::Duration;

/// SQLite implementation of `OrderRepository`
pub struct SqliteOrderRepository {
    db: Database,
    timeout: Duration,
}

impl SqliteOrderRepository {
    /// Create a new order repository with the given database connection
    #[must_use]
    pub const fn new(db: Database, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    fn get_manager(&self) -> OrderManager {
        OrderManager::new(self.db.pool().clone())
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn insert_order(&self, order: &NewOrder) -> AppResult<i64> {
        let manager = self.get_manager();
        with_database_timeout(self.timeout, manager.insert_order(order)).await
    }

    async fn list_pending_orders(&self) -> AppResult<Vec<OrderRecord>> {
        let manager = self.get_manager();
        with_database_timeout(self.timeout, manager.list_pending_orders()).await
    }
}
