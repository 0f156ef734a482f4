// ABOUTME: SQLite implementation of the fruit catalog repository
// ABOUTME: Bounds every catalog read by the configured database timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FruitCatalogRepository;
use crate::database::{CatalogManager, Database};
use crate::errors::AppResult;
use crate::models::FruitOption;
use crate::utils::route_timeout::with_database_timeout;
use async_trait::async_trait;
use std::time::Duration;

/// SQLite implementation of `FruitCatalogRepository`
pub struct SqliteCatalogRepository {
    db: Database,
    timeout: Duration,
}

impl SqliteCatalogRepository {
    /// Create a new catalog repository with the given database connection
    #[must_use]
    pub const fn new(db: Database, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    fn get_manager(&self) -> CatalogManager {
        CatalogManager::new(self.db.pool().clone())
    }
}

#[async_trait]
impl FruitCatalogRepository for SqliteCatalogRepository {
    async fn list_fruit_options(&self) -> AppResult<Vec<FruitOption>> {
        let manager = self.get_manager();
        with_database_timeout(self.timeout, manager.list_fruit_options()).await
    }
}
