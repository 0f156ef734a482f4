// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads HTTP, database, nutrition service, catalog cache, and order settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the smoothie order server
//!
//! Configuration is environment-only:
//!
//! - **Environment**: `ServerConfig` composed from the sections below
//! - **Database**: `DATABASE_URL`, migrations, operation timeout
//! - **API providers**: nutrition service base URL and timeouts

/// External nutrition service configuration
pub mod api_providers;
/// Database connection configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use api_providers::NutritionServiceConfig;
pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CatalogConfig, Environment, HttpConfig, OrderConfig, ServerConfig};
