// ABOUTME: Order models spanning the draft built from form state to the persisted record
// ABOUTME: Drafts are bounded to the ingredient limit; records are append-only rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::MAX_INGREDIENTS;
use crate::errors::SelectionError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Order being composed on the form; rebuilt from widget values every render turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Free-text name on the smoothie
    pub customer_name: String,
    /// Selected fruit names in selection order
    pub selected_fruits: Vec<String>,
}

impl OrderDraft {
    /// Build a draft, rejecting selections larger than [`MAX_INGREDIENTS`]
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::TooManyIngredients` when more than five fruits are selected
    pub fn new(
        customer_name: impl Into<String>,
        selected_fruits: Vec<String>,
    ) -> Result<Self, SelectionError> {
        if selected_fruits.len() > MAX_INGREDIENTS {
            return Err(SelectionError::too_many(selected_fruits.len()));
        }

        Ok(Self {
            customer_name: customer_name.into(),
            selected_fruits,
        })
    }

    /// True once a name has been typed
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.customer_name.is_empty()
    }

    /// True once at least one fruit is selected
    #[must_use]
    pub fn has_ingredients(&self) -> bool {
        !self.selected_fruits.is_empty()
    }
}

/// Values written by a single order insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    /// Selected fruits joined with the configured delimiter
    pub ingredients: String,
    /// Name on the smoothie
    pub name_on_order: String,
}

impl NewOrder {
    /// Join `fruits` with `delimiter` into the stored ingredients string
    #[must_use]
    pub fn from_selection(name: &str, fruits: &[String], delimiter: &str) -> Self {
        Self {
            ingredients: fruits.join(delimiter),
            name_on_order: name.to_owned(),
        }
    }
}

/// A persisted order row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Row identifier assigned by the store
    pub order_uid: i64,
    /// Delimited ingredient list
    pub ingredients: String,
    /// Name on the smoothie
    pub name_on_order: String,
    /// Server-assigned insert time (UTC)
    pub order_ts: NaiveDateTime,
    /// Whether the order has been made; always false when written by this service
    pub order_filled: bool,
}

/// Confirmation returned after a successful insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedOrder {
    /// Row identifier assigned by the store
    pub order_uid: i64,
    /// Stored ingredients string
    pub ingredients: String,
    /// Name on the smoothie
    pub name_on_order: String,
    /// Confirmation banner text
    pub message: String,
}

impl SubmittedOrder {
    /// Confirmation banner for `name`
    #[must_use]
    pub fn confirmation_message(name: &str) -> String {
        format!("Your Smoothie is ordered, {name}!")
    }
}
