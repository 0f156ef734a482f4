// ABOUTME: Repository traits that decouple the order form services from SQLite
// ABOUTME: Services depend on these traits so tests can substitute counting in-memory stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod catalog_repository;
mod order_repository;

pub use catalog_repository::SqliteCatalogRepository;
pub use order_repository::SqliteOrderRepository;

use crate::errors::AppResult;
use crate::models::{FruitOption, NewOrder, OrderRecord};
use async_trait::async_trait;

/// Read access to the fruit catalog
#[async_trait]
pub trait FruitCatalogRepository: Send + Sync {
    /// All catalog entries in store order
    async fn list_fruit_options(&self) -> AppResult<Vec<FruitOption>>;
}

/// Append-only access to smoothie orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert one order and return its generated id
    async fn insert_order(&self, order: &NewOrder) -> AppResult<i64>;

    /// Orders with `order_filled = false`, oldest first
    async fn list_pending_orders(&self) -> AppResult<Vec<OrderRecord>>;
}
