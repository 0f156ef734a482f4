// ABOUTME: External API provider configuration for the fruit nutrition service
// ABOUTME: Holds base URL, request and connect timeouts, and the no-retry policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::environment::{env_parse_or, env_var_or};
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Nutrition service (`SmoothieFroot`) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionServiceConfig {
    /// Base URL; lookups go to `{base_url}/api/fruit/{lookup_key}`
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for NutritionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::NUTRITION_BASE_URL.to_owned(),
            timeout_secs: defaults::NUTRITION_TIMEOUT_SECS,
            connect_timeout_secs: defaults::NUTRITION_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl NutritionServiceConfig {
    /// Load nutrition service configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout variable is not a number or is zero
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            base_url: env_var_or("NUTRITION_BASE_URL", defaults::NUTRITION_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            timeout_secs: env_parse_or("NUTRITION_TIMEOUT_SECS", defaults::NUTRITION_TIMEOUT_SECS)?,
            connect_timeout_secs: env_parse_or(
                "NUTRITION_CONNECT_TIMEOUT_SECS",
                defaults::NUTRITION_CONNECT_TIMEOUT_SECS,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject timeouts that would fail every lookup before it starts
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if either timeout is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_invalid(
                "NUTRITION_TIMEOUT_SECS must be at least 1 second",
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(AppError::config_invalid(
                "NUTRITION_CONNECT_TIMEOUT_SECS must be at least 1 second",
            ));
        }
        Ok(())
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
