// ABOUTME: JSON API mirroring the order form for programmatic clients
// ABOUTME: Catalog listing and invalidation, nutrition lookup, order submission, and pending orders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, LookupWarning};
use crate::form::SelectionForm;
use crate::models::{FruitOption, NutritionTable, OrderRecord, SubmittedOrder};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Body of `POST /api/orders`
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    /// Name on the smoothie
    #[serde(default)]
    pub name: String,
    /// Selected fruit names
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Body of `POST /api/nutrition`
#[derive(Debug, Deserialize)]
pub struct NutritionRequest {
    /// Selected fruit names
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Catalog listing
#[derive(Debug, Serialize)]
pub struct FruitOptionsResponse {
    /// Entries in catalog order
    pub fruit_options: Vec<FruitOption>,
}

/// One fruit's nutrition result with its tabular view
#[derive(Debug, Serialize)]
pub struct NutritionEntry {
    /// Selected fruit name
    pub fruit_name: String,
    /// Key sent to the nutrition service
    pub lookup_key: String,
    /// Raw payload, absent when the lookup failed
    pub payload: Option<Value>,
    /// Flattened table, absent when the lookup failed
    pub table: Option<NutritionTable>,
}

/// Nutrition lookup response
#[derive(Debug, Serialize)]
pub struct NutritionResponse {
    /// Results in selection order
    pub results: Vec<NutritionEntry>,
    /// Per-fruit warnings
    pub warnings: Vec<LookupWarning>,
}

/// Pending orders listing
#[derive(Debug, Serialize)]
pub struct PendingOrdersResponse {
    /// Unfilled orders, oldest first
    pub orders: Vec<OrderRecord>,
    /// Number of orders listed
    pub total: usize,
}

/// JSON API routes handler
pub struct ApiRoutes;

impl ApiRoutes {
    /// Create all JSON API routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/fruit-options", get(Self::handle_fruit_options))
            .route("/api/catalog/invalidate", post(Self::handle_invalidate_catalog))
            .route("/api/nutrition", post(Self::handle_nutrition))
            .route("/api/orders", post(Self::handle_create_order))
            .route("/api/orders/pending", get(Self::handle_pending_orders))
            .with_state(resources)
    }

    /// Handle GET /api/fruit-options - cached catalog
    async fn handle_fruit_options(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<FruitOptionsResponse>, AppError> {
        let catalog = resources.catalog.fruit_options().await?;
        Ok(Json(FruitOptionsResponse {
            fruit_options: catalog.to_vec(),
        }))
    }

    /// Handle POST /api/catalog/invalidate - drop the cached catalog
    async fn handle_invalidate_catalog(State(resources): State<Arc<ServerResources>>) -> Response {
        resources.catalog.invalidate().await;
        (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "invalidated" })),
        )
            .into_response()
    }

    /// Handle POST /api/nutrition - look up every fruit in a selection
    async fn handle_nutrition(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<NutritionRequest>,
    ) -> Result<Json<NutritionResponse>, AppError> {
        let catalog = resources.catalog.fruit_options().await?;
        let draft = SelectionForm::draft("", body.ingredients, &catalog)?;
        let outcome = resources
            .nutrition
            .lookup_selection(&catalog, &draft.selected_fruits)
            .await;

        let results = outcome
            .results
            .into_iter()
            .map(|result| NutritionEntry {
                table: result.table(),
                fruit_name: result.fruit_name,
                lookup_key: result.lookup_key,
                payload: result.payload,
            })
            .collect();

        Ok(Json(NutritionResponse {
            results,
            warnings: outcome.warnings,
        }))
    }

    /// Handle POST /api/orders - check the selection against the catalog, then insert one order
    async fn handle_create_order(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<OrderRequest>,
    ) -> Result<Response, AppError> {
        let catalog = resources.catalog.fruit_options().await?;
        let draft = SelectionForm::draft(&body.name, body.ingredients, &catalog)?;
        let order: SubmittedOrder = resources
            .submitter
            .submit(&draft.customer_name, &draft.selected_fruits)
            .await?;

        Ok((StatusCode::CREATED, Json(order)).into_response())
    }

    /// Handle GET /api/orders/pending - unfilled orders
    async fn handle_pending_orders(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<PendingOrdersResponse>, AppError> {
        let orders = resources.orders.list_pending_orders().await?;
        Ok(Json(PendingOrdersResponse {
            total: orders.len(),
            orders,
        }))
    }
}
