// ABOUTME: Domain service layer for the order form logic extracted from route handlers
// ABOUTME: Nutrition lookup and order submission, shared by the HTML form and the JSON API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are protocol-agnostic so the server-rendered form and the JSON API
//! apply the same rules.

/// Per-fruit nutrition lookups with warnings instead of failures
pub mod nutrition_lookup;

/// Order validation and insertion
pub mod order_submitter;

pub use nutrition_lookup::{LookupOutcome, NutritionLookup};
pub use order_submitter::OrderSubmitter;
