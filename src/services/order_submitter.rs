// ABOUTME: Validates a selection and inserts exactly one order row on submit
// ABOUTME: Name is checked before ingredients; store errors are reported once and never retried
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::repositories::OrderRepository;
use crate::errors::{SubmitError, ValidationError};
use crate::models::{NewOrder, SubmittedOrder};
use std::sync::Arc;
use tracing::{error, info};

/// Order submission service
#[derive(Clone)]
pub struct OrderSubmitter {
    orders: Arc<dyn OrderRepository>,
    delimiter: String,
}

impl OrderSubmitter {
    /// Create a submitter that joins ingredients with `delimiter`
    pub fn new(orders: Arc<dyn OrderRepository>, delimiter: impl Into<String>) -> Self {
        Self {
            orders,
            delimiter: delimiter.into(),
        }
    }

    /// Validate and persist one order
    ///
    /// A name made only of whitespace counts as empty. The stored name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] without touching the store when the name or
    /// the selection is empty, and [`SubmitError::Write`] when the insert fails.
    pub async fn submit(&self, name: &str, fruits: &[String]) -> Result<SubmittedOrder, SubmitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired.into());
        }
        if fruits.is_empty() {
            return Err(ValidationError::IngredientsRequired.into());
        }

        let order = NewOrder::from_selection(name, fruits, &self.delimiter);
        let order_uid = self.orders.insert_order(&order).await.map_err(|e| {
            error!(error = %e, name_on_order = %name, "Order insert failed");
            SubmitError::Write(e.message)
        })?;

        info!(
            order.uid = order_uid,
            order.name = %name,
            order.ingredients = %order.ingredients,
            "Smoothie order submitted"
        );

        Ok(SubmittedOrder {
            order_uid,
            ingredients: order.ingredients,
            name_on_order: order.name_on_order,
            message: SubmittedOrder::confirmation_message(name),
        })
    }
}
