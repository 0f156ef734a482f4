// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use super::api_providers::NutritionServiceConfig;
use super::database::DatabaseConfig;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment type for logging and other deployment-dependent behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: defaults::HTTP_HOST.to_owned(),
            port: defaults::HTTP_PORT,
        }
    }
}

/// Order submission settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Text placed between fruit names in the stored ingredients string
    pub ingredients_delimiter: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            ingredients_delimiter: defaults::INGREDIENTS_DELIMITER.to_owned(),
        }
    }
}

/// Fruit catalog cache settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Cache lifetime in seconds; `None` keeps the catalog until it is invalidated
    pub cache_ttl_secs: Option<u64>,
}

impl CatalogConfig {
    /// Cache lifetime as a `Duration`
    #[must_use]
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.map(Duration::from_secs)
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// HTTP listener
    pub http: HttpConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Nutrition service configuration
    pub nutrition: NutritionServiceConfig,
    /// Catalog cache configuration
    pub catalog: CatalogConfig,
    /// Order submission configuration
    pub orders: OrderConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any numeric or boolean variable fails to parse
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let cache_ttl_secs = match env::var("CATALOG_CACHE_TTL_SECS") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_value("CATALOG_CACHE_TTL_SECS", &raw)?),
            _ => None,
        };

        Ok(Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            http: HttpConfig {
                host: env_var_or("HTTP_HOST", defaults::HTTP_HOST),
                port: env_parse_or("HTTP_PORT", defaults::HTTP_PORT)?,
            },
            database: DatabaseConfig::from_env()?,
            nutrition: NutritionServiceConfig::from_env()?,
            catalog: CatalogConfig { cache_ttl_secs },
            orders: OrderConfig {
                ingredients_delimiter: env::var("INGREDIENTS_DELIMITER")
                    .unwrap_or_else(|_| defaults::INGREDIENTS_DELIMITER.to_owned()),
            },
        })
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Smoothie Order Server Configuration:\n\
             - Environment: {}\n\
             - HTTP: {}:{}\n\
             - Database: {}\n\
             - Nutrition Service: {} (timeout {}s, no retry)\n\
             - Catalog Cache TTL: {}\n\
             - Ingredients Delimiter: {:?}",
            self.environment,
            self.http.host,
            self.http.port,
            self.database.url,
            self.nutrition.base_url,
            self.nutrition.timeout_secs,
            self.catalog
                .cache_ttl_secs
                .map_or_else(|| "until invalidated".to_owned(), |secs| format!("{secs}s")),
            self.orders.ingredients_delimiter,
        )
    }
}

/// Get environment variable or default value
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse environment variable, falling back to `default` when unset
pub(crate) fn env_parse_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
}
