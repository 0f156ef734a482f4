// ABOUTME: Shared HTTP client construction with connection pooling and timeout configuration
// ABOUTME: Builds the reqwest client used for nutrition lookups from service configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::NutritionServiceConfig;
use crate::errors::{AppError, AppResult};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client with custom timeout settings
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn create_client_with_timeout(timeout: Duration, connect_timeout: Duration) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(concat!("smoothie-order-server/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))
}

/// Create the client used for nutrition lookups
///
/// # Errors
///
/// Returns an error if the client cannot be built
pub fn nutrition_client(config: &NutritionServiceConfig) -> AppResult<Client> {
    create_client_with_timeout(config.timeout(), config.connect_timeout())
}
