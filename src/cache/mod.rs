// ABOUTME: Process-local caching for data that is read on every render turn
// ABOUTME: Currently holds the read-through fruit catalog cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Read-through cache of the fruit catalog
pub mod catalog;

pub use catalog::CatalogCache;
