// ABOUTME: Core types and constants for the smoothie order server
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Smoothie Core
//!
//! Foundation crate providing shared types and constants for the smoothie order
//! server. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and order/lookup errors
//! - **constants**: Limits, defaults, table names, and user-facing messages
//! - **models**: Fruit catalog, order, and nutrition data types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FruitOption`, `OrderDraft`, `OrderRecord`, `NutritionResult`)
pub mod models;
