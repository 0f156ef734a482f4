// ABOUTME: Per-fruit warnings raised while resolving lookup keys and fetching nutrition data
// ABOUTME: Warnings are recovered locally so remaining fruits in the selection are still processed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use thiserror::Error;

/// Non-fatal problem with a single selected fruit
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupWarning {
    /// Selected fruit has no entry in the cached catalog
    #[error("No lookup key found for {fruit}; skipping nutrition lookup")]
    LookupKeyMissing {
        /// Selected fruit name
        fruit: String,
    },
    /// The nutrition service failed, timed out, or returned a body that is not JSON
    #[error("Nutrition data for {fruit} is unavailable: {detail}")]
    NutritionServiceError {
        /// Selected fruit name
        fruit: String,
        /// Lookup key sent to the service
        lookup_key: String,
        /// Transport error or status line
        detail: String,
        /// Truncated raw response body, when one was received
        #[serde(skip_serializing_if = "Option::is_none")]
        excerpt: Option<String>,
    },
}

impl LookupWarning {
    /// Fruit the warning refers to
    #[must_use]
    pub fn fruit(&self) -> &str {
        match self {
            Self::LookupKeyMissing { fruit } | Self::NutritionServiceError { fruit, .. } => fruit,
        }
    }

    /// Raw body excerpt, if any
    #[must_use]
    pub fn excerpt(&self) -> Option<&str> {
        match self {
            Self::LookupKeyMissing { .. } => None,
            Self::NutritionServiceError { excerpt, .. } => excerpt.as_deref(),
        }
    }
}

/// Cut `body` down to at most `max_chars` characters, marking the cut with an ellipsis
#[must_use]
pub fn truncate_excerpt(body: &str, max_chars: usize) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_owned(),
    }
}
