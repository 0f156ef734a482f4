// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, counting stores, and server resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `smoothie_order_server`

use async_trait::async_trait;
use smoothie_order_server::{
    config::{DatabaseUrl, ServerConfig},
    database::{repositories::FruitCatalogRepository, repositories::OrderRepository, CatalogManager, Database},
    errors::{AppError, AppResult},
    external::NutritionProvider,
    models::{FruitOption, NewOrder, OrderRecord},
    resources::ServerResources,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use tokio::sync::Mutex;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Catalog used across tests; "Kiwi" appears twice to exercise first-match lookup
pub fn sample_catalog() -> Vec<FruitOption> {
    vec![
        FruitOption::new("Apples", "Apple"),
        FruitOption::new("Banana", "banana"),
        FruitOption::new("Kiwi", "kiwi"),
        FruitOption::new("Lime", "lime"),
        FruitOption::new("Mango", "mango"),
        FruitOption::new("Papaya", "papaya"),
        FruitOption::new("Watermelon", "watermelon"),
        FruitOption::new("Kiwi", "kiwifruit"),
    ]
}

/// Migrated in-memory database
pub async fn create_test_database() -> Database {
    init_test_logging();
    let database = Database::new(&DatabaseUrl::Memory)
        .await
        .expect("Failed to open in-memory database");
    database.migrate().await.expect("Failed to migrate");
    database
}

/// Migrated in-memory database holding [`sample_catalog`]
pub async fn create_seeded_database() -> Database {
    let database = create_test_database().await;
    CatalogManager::new(database.pool().clone())
        .replace_catalog(&sample_catalog())
        .await
        .expect("Failed to seed catalog");
    database
}

/// Catalog store that counts reads and can be switched into failure
pub struct CountingCatalogStore {
    options: Vec<FruitOption>,
    loads: AtomicUsize,
    failing: AtomicBool,
}

impl CountingCatalogStore {
    pub fn new(options: Vec<FruitOption>) -> Self {
        Self {
            options,
            loads: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let store = Self::new(Vec::new());
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FruitCatalogRepository for CountingCatalogStore {
    async fn list_fruit_options(&self) -> AppResult<Vec<FruitOption>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::database("connection refused"));
        }
        Ok(self.options.clone())
    }
}

/// Order store that records inserts in memory and can be switched into failure
#[derive(Default)]
pub struct RecordingOrderStore {
    inserted: Mutex<Vec<NewOrder>>,
    failing: AtomicBool,
}

impl RecordingOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    pub async fn inserted(&self) -> Vec<NewOrder> {
        self.inserted.lock().await.clone()
    }
}

#[async_trait]
impl OrderRepository for RecordingOrderStore {
    async fn insert_order(&self, order: &NewOrder) -> AppResult<i64> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::database("database is locked"));
        }
        let mut inserted = self.inserted.lock().await;
        inserted.push(order.clone());
        Ok(i64::try_from(inserted.len()).unwrap())
    }

    async fn list_pending_orders(&self) -> AppResult<Vec<OrderRecord>> {
        Ok(Vec::new())
    }
}

/// Resources backed by a seeded in-memory SQLite database
pub async fn sqlite_resources(provider: Arc<dyn NutritionProvider>) -> Arc<ServerResources> {
    let database = create_seeded_database().await;
    Arc::new(ServerResources::new(
        Arc::new(ServerConfig::default()),
        database,
        provider,
    ))
}

/// Resources over explicit stores
pub async fn resources_with_stores(
    catalog: Arc<dyn FruitCatalogRepository>,
    orders: Arc<dyn OrderRepository>,
    provider: Arc<dyn NutritionProvider>,
) -> Arc<ServerResources> {
    let database = create_test_database().await;
    Arc::new(ServerResources::with_stores(
        Arc::new(ServerConfig::default()),
        database,
        catalog,
        orders,
        provider,
    ))
}
