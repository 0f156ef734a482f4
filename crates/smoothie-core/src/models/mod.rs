// ABOUTME: Core data models for the smoothie order form
// ABOUTME: Fruit catalog entries, order drafts and records, and nutrition lookup results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fruit catalog entries and lookup-key resolution
pub mod fruit;
/// Nutrition lookup results and their tabular rendering
pub mod nutrition;
/// Order drafts, new-order payloads, and persisted order records
pub mod order;

pub use fruit::{find_lookup_key, FruitOption};
pub use nutrition::{NutritionResult, NutritionTable};
pub use order::{NewOrder, OrderDraft, OrderRecord, SubmittedOrder};
