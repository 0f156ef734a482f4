// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Wires the database, catalog cache, nutrition lookup, and order submitter together once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::CatalogCache;
use crate::config::ServerConfig;
use crate::database::repositories::{
    FruitCatalogRepository, OrderRepository, SqliteCatalogRepository, SqliteOrderRepository,
};
use crate::database::Database;
use crate::external::NutritionProvider;
use crate::services::{NutritionLookup, OrderSubmitter};
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Cloning is cheap: every field is reference counted, and the catalog cache is
/// shared so all requests see the same cached entry.
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Database handle, used directly for readiness checks
    pub database: Database,
    /// Read-through fruit catalog
    pub catalog: Arc<CatalogCache>,
    /// Order storage
    pub orders: Arc<dyn OrderRepository>,
    /// Nutrition lookup service
    pub nutrition: NutritionLookup,
    /// Order submission service
    pub submitter: OrderSubmitter,
}

impl ServerResources {
    /// Create resources backed by SQLite repositories
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        database: Database,
        provider: Arc<dyn NutritionProvider>,
    ) -> Self {
        let timeout = config.database.timeout();
        let catalog_repository: Arc<dyn FruitCatalogRepository> =
            Arc::new(SqliteCatalogRepository::new(database.clone(), timeout));
        let order_repository: Arc<dyn OrderRepository> =
            Arc::new(SqliteOrderRepository::new(database.clone(), timeout));

        Self::with_stores(config, database, catalog_repository, order_repository, provider)
    }

    /// Create resources over explicit stores
    #[must_use]
    pub fn with_stores(
        config: Arc<ServerConfig>,
        database: Database,
        catalog_repository: Arc<dyn FruitCatalogRepository>,
        order_repository: Arc<dyn OrderRepository>,
        provider: Arc<dyn NutritionProvider>,
    ) -> Self {
        let catalog = Arc::new(CatalogCache::new(
            catalog_repository,
            config.catalog.cache_ttl(),
        ));
        let submitter = OrderSubmitter::new(
            Arc::clone(&order_repository),
            config.orders.ingredients_delimiter.clone(),
        );

        Self {
            config,
            database,
            catalog,
            orders: order_repository,
            nutrition: NutritionLookup::new(provider),
            submitter,
        }
    }
}
