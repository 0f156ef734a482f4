// ABOUTME: Read-through cache of the fruit catalog with explicit invalidation and optional TTL
// ABOUTME: Loads from the catalog repository once per cache window; failed loads are never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::catalog::elapsed_ms;
use crate::database::repositories::FruitCatalogRepository;
use crate::errors::{AppError, AppResult};
use crate::models::FruitOption;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Cache entry with optional expiration time
struct CacheEntry {
    options: Arc<[FruitOption]>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(options: Vec<FruitOption>, ttl: Option<Duration>) -> Self {
        Self {
            options: options.into(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// Single-entry read-through cache in front of a [`FruitCatalogRepository`]
///
/// Readers share one `RwLock`. A miss takes the write lock and re-checks before
/// loading, so concurrent misses hit the store once.
pub struct CatalogCache {
    repository: Arc<dyn FruitCatalogRepository>,
    ttl: Option<Duration>,
    entry: RwLock<Option<CacheEntry>>,
    store_loads: AtomicU64,
}

impl CatalogCache {
    /// Create an empty cache; `ttl` of `None` keeps entries until [`Self::invalidate`]
    #[must_use]
    pub fn new(repository: Arc<dyn FruitCatalogRepository>, ttl: Option<Duration>) -> Self {
        Self {
            repository,
            ttl,
            entry: RwLock::new(None),
            store_loads: AtomicU64::new(0),
        }
    }

    /// The catalog, loading it from the store on a miss
    ///
    /// # Errors
    ///
    /// Returns a catalog-unavailable error if the store read fails
    pub async fn fruit_options(&self) -> AppResult<Arc<[FruitOption]>> {
        {
            let guard = self.entry.read().await;
            if let Some(entry) = guard.as_ref().filter(|entry| !entry.is_expired()) {
                return Ok(Arc::clone(&entry.options));
            }
        }

        let mut guard = self.entry.write().await;
        if let Some(entry) = guard.as_ref().filter(|entry| !entry.is_expired()) {
            return Ok(Arc::clone(&entry.options));
        }

        let started = Instant::now();
        self.store_loads.fetch_add(1, Ordering::Relaxed);
        let options = self.repository.list_fruit_options().await.map_err(|e| {
            warn!(error = %e, "Fruit catalog load failed");
            AppError::catalog_unavailable(e.message.clone()).with_source(e)
        })?;

        info!(
            catalog.entries = options.len(),
            catalog.duration_ms = elapsed_ms(started),
            "Fruit catalog loaded"
        );

        let entry = CacheEntry::new(options, self.ttl);
        let options = Arc::clone(&entry.options);
        *guard = Some(entry);
        Ok(options)
    }

    /// Drop the cached catalog so the next read goes to the store
    pub async fn invalidate(&self) {
        let mut guard = self.entry.write().await;
        if guard.take().is_some() {
            info!("Fruit catalog cache invalidated");
        }
    }

    /// Number of times the store has been queried
    #[must_use]
    pub fn store_loads(&self) -> u64 {
        self.store_loads.load(Ordering::Relaxed)
    }
}
