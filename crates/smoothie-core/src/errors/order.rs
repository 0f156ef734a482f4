// ABOUTME: Selection and order submission error types for the smoothie order form
// ABOUTME: Distinguishes blocked submissions (validation) from failed inserts (write errors)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AppError;
use crate::constants::limits::MAX_INGREDIENTS;
use thiserror::Error;

/// Reasons a submission is blocked before any store call is attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name on the smoothie was empty
    #[error("name required")]
    NameRequired,
    /// No fruits were selected
    #[error("at least one ingredient required")]
    IngredientsRequired,
}

impl ValidationError {
    /// Banner text shown on the order form
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NameRequired => "Please enter a name for your Smoothie before submitting.",
            Self::IngredientsRequired => "Please choose at least one ingredient before submitting.",
        }
    }
}

/// Selection rejected by the form layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// More fruits were chosen than a smoothie can hold
    #[error("at most {max} ingredients may be chosen, got {count}")]
    TooManyIngredients {
        /// Number of fruits submitted
        count: usize,
        /// Allowed maximum
        max: usize,
    },
    /// A selected name is not one of the catalog's fruits
    #[error("{fruit} is not on the menu")]
    UnknownIngredient {
        /// Name as submitted
        fruit: String,
    },
    /// The same fruit was selected more than once
    #[error("{fruit} was chosen more than once")]
    DuplicateIngredient {
        /// Repeated fruit name
        fruit: String,
    },
}

impl SelectionError {
    /// Build the error for an oversized selection
    #[must_use]
    pub const fn too_many(count: usize) -> Self {
        Self::TooManyIngredients {
            count,
            max: MAX_INGREDIENTS,
        }
    }
}

/// Outcome of a failed `submit` call
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Preconditions failed; nothing was written
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The orders store rejected the insert; not retried
    #[error("order could not be saved: {0}")]
    Write(String),
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::missing_field(error.to_string())
    }
}

impl From<SelectionError> for AppError {
    fn from(error: SelectionError) -> Self {
        match error {
            SelectionError::TooManyIngredients { .. } => Self::out_of_range(error.to_string()),
            SelectionError::UnknownIngredient { .. } | SelectionError::DuplicateIngredient { .. } => {
                Self::invalid_input(error.to_string())
            }
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(error: SubmitError) -> Self {
        match error {
            SubmitError::Validation(validation) => validation.into(),
            SubmitError::Write(message) => Self::database(format!("Order insert failed: {message}")),
        }
    }
}
