// ABOUTME: Fruit catalog model mapping display names to nutrition service lookup keys
// ABOUTME: Provides deterministic first-match lookup over the cached catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A selectable fruit and the key used to query the nutrition service for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitOption {
    /// Display name, also the selection key (`FRUIT_NAME`)
    pub name: String,
    /// Path segment for the nutrition service (`SEARCH_ON`)
    pub lookup_key: String,
}

impl FruitOption {
    /// Create a catalog entry
    pub fn new(name: impl Into<String>, lookup_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lookup_key: lookup_key.into(),
        }
    }
}

/// Resolve the lookup key for `fruit` by exact name match.
///
/// Returns the first matching entry so catalogs with duplicate names resolve
/// the same way on every call.
#[must_use]
pub fn find_lookup_key<'a>(options: &'a [FruitOption], fruit: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.name == fruit)
        .map(|option| option.lookup_key.as_str())
}
