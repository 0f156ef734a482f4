// ABOUTME: SmoothieFroot nutrition API client used to fetch per-fruit nutrition data
// ABOUTME: Returns raw status and body so the caller decides how to report bad payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! SmoothieFroot Nutrition API Client
//!
//! One `GET {base_url}/api/fruit/{lookup_key}` per selected fruit. The client is
//! built with a bounded request and connect timeout and never retries: a failed
//! lookup is reported once and the page moves on to the next fruit.
//!
//! # Example
//! ```rust,no_run
//! use smoothie_order_server::config::NutritionServiceConfig;
//! use smoothie_order_server::external::{NutritionProvider, SmoothieFrootClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SmoothieFrootClient::new(&NutritionServiceConfig::default())?;
//! let response = client.fetch_fruit("watermelon").await?;
//! println!("{} {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

use crate::config::NutritionServiceConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::http_client::nutrition_client;
use async_trait::async_trait;
use reqwest::Url;
use std::collections::HashMap;
use tokio::sync::Mutex;

const SERVICE_NAME: &str = "SmoothieFroot API";

/// Raw reply from the nutrition service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl NutritionResponse {
    /// Whether the status is 2xx
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Source of nutrition data for a lookup key
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    /// Fetch the raw nutrition document for `lookup_key`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or timeout. Non-success statuses are
    /// returned as a normal [`NutritionResponse`].
    async fn fetch_fruit(&self, lookup_key: &str) -> AppResult<NutritionResponse>;
}

/// HTTP client for the SmoothieFroot nutrition API
#[derive(Clone)]
pub struct SmoothieFrootClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl SmoothieFrootClient {
    /// Create a client from service configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built
    pub fn new(config: &NutritionServiceConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::config_invalid(format!(
                "Invalid NUTRITION_BASE_URL '{}': {e}",
                config.base_url
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::config_invalid(format!(
                "NUTRITION_BASE_URL '{}' cannot be used as a base URL",
                config.base_url
            )));
        }

        Ok(Self {
            base_url,
            http_client: nutrition_client(config)?,
        })
    }

    /// URL for one fruit; the lookup key is percent-encoded as a single path segment
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot take path segments
    pub fn fruit_url(&self, lookup_key: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::config_invalid("Nutrition base URL cannot take a path"))?
            .pop_if_empty()
            .extend(["api", "fruit", lookup_key]);
        Ok(url)
    }
}

#[async_trait]
impl NutritionProvider for SmoothieFrootClient {
    async fn fetch_fruit(&self, lookup_key: &str) -> AppResult<NutritionResponse> {
        let url = self.fruit_url(lookup_key)?;

        let response = self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::external_unavailable(SERVICE_NAME, format!("request timed out: {e}"))
            } else if e.is_connect() {
                AppError::external_unavailable(SERVICE_NAME, format!("connection failed: {e}"))
            } else {
                AppError::external_service(SERVICE_NAME, e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("failed to read response body: {e}"))
        })?;

        Ok(NutritionResponse { status, body })
    }
}

/// Canned reply for [`MockNutritionProvider`]
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with this JSON document
    Json(serde_json::Value),
    /// Arbitrary status and body text
    Raw {
        /// HTTP status code
        status: u16,
        /// Body text
        body: String,
    },
    /// Transport failure with this message
    Unreachable(String),
}

/// Mock nutrition provider for testing (no network calls); records every lookup key it sees
#[derive(Default)]
pub struct MockNutritionProvider {
    replies: HashMap<String, MockReply>,
    calls: Mutex<Vec<String>>,
}

impl MockNutritionProvider {
    /// Create a mock that answers 404 for every key
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the reply for `lookup_key`
    #[must_use]
    pub fn with_reply(mut self, lookup_key: impl Into<String>, reply: MockReply) -> Self {
        self.replies.insert(lookup_key.into(), reply);
        self
    }

    /// Lookup keys requested so far, in call order
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl NutritionProvider for MockNutritionProvider {
    async fn fetch_fruit(&self, lookup_key: &str) -> AppResult<NutritionResponse> {
        self.calls.lock().await.push(lookup_key.to_owned());

        match self.replies.get(lookup_key) {
            Some(MockReply::Json(value)) => Ok(NutritionResponse {
                status: 200,
                body: value.to_string(),
            }),
            Some(MockReply::Raw { status, body }) => Ok(NutritionResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(MockReply::Unreachable(message)) => {
                Err(AppError::external_unavailable(SERVICE_NAME, message.clone()))
            }
            None => Ok(NutritionResponse {
                status: 404,
                body: r#"{"error":"Not found"}"#.to_owned(),
            }),
        }
    }
}
