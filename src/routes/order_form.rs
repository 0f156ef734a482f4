// ABOUTME: Server-rendered order form routes; each request runs exactly one render turn
// ABOUTME: GET renders the form for the query string, POST renders it and runs the submit step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::form::FormInput;
use crate::render::{render_error_page, render_order_page, render_pending_orders, render_turn};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::{Form, Query};
use std::sync::Arc;
use tracing::error;

/// Order form routes handler
pub struct OrderFormRoutes;

impl OrderFormRoutes {
    /// Create the HTML routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_show).post(Self::handle_submit))
            .route("/orders/pending", get(Self::handle_pending))
            .with_state(resources)
    }

    /// Handle GET / - render the form for the current widget values
    async fn handle_show(
        State(resources): State<Arc<ServerResources>>,
        Query(input): Query<FormInput>,
    ) -> Response {
        Self::render(&resources, input.with_submit(false)).await
    }

    /// Handle POST / - render the form and submit the order
    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        Form(input): Form<FormInput>,
    ) -> Response {
        Self::render(&resources, input.with_submit(true)).await
    }

    /// Handle GET /orders/pending - read-only list of unfilled orders
    async fn handle_pending(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.orders.list_pending_orders().await {
            Ok(orders) => Html(render_pending_orders(&orders)).into_response(),
            Err(e) => Self::error_response(&e),
        }
    }

    async fn render(resources: &ServerResources, input: FormInput) -> Response {
        match render_turn(resources, input).await {
            Ok(page) => Html(render_order_page(&page)).into_response(),
            Err(e) => Self::error_response(&e),
        }
    }

    fn error_response(error: &AppError) -> Response {
        error!(code = ?error.code, error = %error, "Page could not be rendered");
        let status =
            StatusCode::from_u16(error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Html(render_error_page(error))).into_response()
    }
}
