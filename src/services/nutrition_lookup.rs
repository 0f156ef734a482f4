// ABOUTME: Resolves lookup keys and fetches nutrition data for each selected fruit in order
// ABOUTME: Every per-fruit failure becomes a warning so the remaining fruits are still looked up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::NUTRITION_EXCERPT_CHARS;
use crate::database::catalog::elapsed_ms;
use crate::errors::lookup::truncate_excerpt;
use crate::errors::LookupWarning;
use crate::external::NutritionProvider;
use crate::logging::AppLogger;
use crate::models::{find_lookup_key, FruitOption, NutritionResult};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// Results and warnings from one pass over a selection
#[derive(Debug, Clone, Default, Serialize)]
pub struct LookupOutcome {
    /// One entry per fruit that had a lookup key, in selection order
    pub results: Vec<NutritionResult>,
    /// Per-fruit problems, in selection order
    pub warnings: Vec<LookupWarning>,
}

/// Serial nutrition lookups against a [`NutritionProvider`]
#[derive(Clone)]
pub struct NutritionLookup {
    provider: Arc<dyn NutritionProvider>,
}

impl NutritionLookup {
    /// Create a lookup service over `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn NutritionProvider>) -> Self {
        Self { provider }
    }

    /// Look up every fruit in `fruits`, one request at a time
    ///
    /// Nothing is cached between calls; the same selection fetched twice makes
    /// the same requests twice.
    pub async fn lookup_selection(&self, catalog: &[FruitOption], fruits: &[String]) -> LookupOutcome {
        let mut outcome = LookupOutcome::default();

        for fruit in fruits {
            let Some(lookup_key) = find_lookup_key(catalog, fruit) else {
                warn!(nutrition.fruit = %fruit, "No lookup key for selected fruit");
                outcome.warnings.push(LookupWarning::LookupKeyMissing {
                    fruit: fruit.clone(),
                });
                continue;
            };

            let (payload, warning) = self.fetch_one(fruit, lookup_key).await;
            if let Some(warning) = warning {
                outcome.warnings.push(warning);
            }
            outcome.results.push(NutritionResult {
                fruit_name: fruit.clone(),
                lookup_key: lookup_key.to_owned(),
                payload,
            });
        }

        outcome
    }

    async fn fetch_one(&self, fruit: &str, lookup_key: &str) -> (Option<Value>, Option<LookupWarning>) {
        let started = Instant::now();
        let response = self.provider.fetch_fruit(lookup_key).await;
        let duration_ms = elapsed_ms(started);

        let service_error = |detail: String, excerpt: Option<String>| LookupWarning::NutritionServiceError {
            fruit: fruit.to_owned(),
            lookup_key: lookup_key.to_owned(),
            detail,
            excerpt,
        };

        let warning = match response {
            Err(e) => service_error(e.message, None),
            Ok(response) if !response.is_success() => service_error(
                format!("service returned HTTP {}", response.status),
                Some(truncate_excerpt(&response.body, NUTRITION_EXCERPT_CHARS)),
            ),
            Ok(response) => match serde_json::from_str::<Value>(&response.body) {
                Ok(payload) => {
                    AppLogger::log_nutrition_lookup(fruit, lookup_key, true, duration_ms);
                    return (Some(payload), None);
                }
                Err(e) => service_error(
                    format!("response is not valid JSON: {e}"),
                    Some(truncate_excerpt(&response.body, NUTRITION_EXCERPT_CHARS)),
                ),
            },
        };

        AppLogger::log_nutrition_lookup(fruit, lookup_key, false, duration_ms);
        warn!(nutrition.fruit = %fruit, warning = %warning, "Nutrition lookup failed");
        (None, Some(warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::{MockNutritionProvider, MockReply};
    use serde_json::json;

    fn catalog() -> Vec<FruitOption> {
        vec![
            FruitOption::new("Banana", "banana"),
            FruitOption::new("Watermelon", "watermelon"),
        ]
    }

    #[tokio::test]
    async fn test_missing_key_warns_without_calling_service() {
        let provider = Arc::new(MockNutritionProvider::new());
        let lookup = NutritionLookup::new(provider.clone());

        let outcome = lookup
            .lookup_selection(&catalog(), &["Durian".to_owned()])
            .await;

        assert!(outcome.results.is_empty());
        assert_eq!(
            outcome.warnings,
            vec![LookupWarning::LookupKeyMissing {
                fruit: "Durian".to_owned()
            }]
        );
        assert!(provider.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_carries_excerpt() {
        let provider = Arc::new(MockNutritionProvider::new().with_reply(
            "banana",
            MockReply::Raw {
                status: 500,
                body: "upstream exploded".to_owned(),
            },
        ));
        let lookup = NutritionLookup::new(provider);

        let outcome = lookup
            .lookup_selection(&catalog(), &["Banana".to_owned()])
            .await;

        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].excerpt(), Some("upstream exploded"));
        assert_eq!(outcome.results[0].payload, None);
    }

    #[tokio::test]
    async fn test_success_keeps_payload() {
        let provider = Arc::new(
            MockNutritionProvider::new()
                .with_reply("watermelon", MockReply::Json(json!({"name": "Watermelon"}))),
        );
        let lookup = NutritionLookup::new(provider);

        let outcome = lookup
            .lookup_selection(&catalog(), &["Watermelon".to_owned()])
            .await;

        assert!(outcome.warnings.is_empty());
        assert_eq!(
            outcome.results[0].payload,
            Some(json!({"name": "Watermelon"}))
        );
    }
}
