// ABOUTME: Main library entry point for the smoothie order server
// ABOUTME: Fruit catalog, per-fruit nutrition lookup, and order submission behind one web form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Smoothie Order Server
//!
//! A single-page order form. A customer names their smoothie, picks up to five
//! fruits from a catalog, sees nutrition data for each pick, and submits the
//! order into an append-only `orders` table.
//!
//! ## Architecture
//!
//! Each HTTP request runs one render turn:
//! - **Cache**: read-through fruit catalog (`fruit_options` table)
//! - **Form**: widget values rebuilt from the request, bounded to five ingredients
//! - **Services**: serial nutrition lookups and order submission
//! - **Render**: page model and server-side HTML
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smoothie_order_server::config::ServerConfig;
//! use smoothie_order_server::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("{}", config.summary());
//!     Ok(())
//! }
//! ```

/// Read-through caches
pub mod cache;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// SQLite storage for the catalog and orders
pub mod database;

/// Unified error handling
pub mod errors;

/// External API clients
pub mod external;

/// Selection form state
pub mod form;

/// Logging configuration
pub mod logging;

/// Core data models
pub mod models;

/// Render turn and HTML output
pub mod render;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Domain services
pub mod services;

/// Shared utilities
pub mod utils;
