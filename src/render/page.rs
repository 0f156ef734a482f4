// ABOUTME: Page model for the order form and the render turn that produces it
// ABOUTME: Stage is re-derived from widget values on every request; nothing carries over between turns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use crate::errors::{AppResult, LookupWarning, SubmitError};
use crate::form::{FormInput, IngredientChoice, SelectionForm};
use crate::models::{NutritionResult, OrderDraft};
use crate::resources::ServerResources;
use serde::Serialize;
use tracing::debug;

/// Furthest point the form reached during a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStage {
    /// Nothing entered yet
    Idle,
    /// A name is present but no ingredients
    NameEntered,
    /// Ingredients chosen but no nutrition table could be shown
    IngredientsSelected,
    /// At least one nutrition table is shown
    NutritionDisplayed,
    /// More ingredients than allowed were chosen
    SelectionRejected,
    /// Submit pressed but validation blocked it
    SubmitRejected,
    /// Order row inserted
    Submitted,
    /// Insert attempted and failed
    SubmitFailed,
}

/// Status banner shown above the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "text", rename_all = "snake_case")]
pub enum Banner {
    /// Neutral prompt
    Info(String),
    /// Order saved
    Success(String),
    /// Recoverable problem with the input
    Warning(String),
    /// Store failure
    Error(String),
}

/// Everything the order form shows for one turn
#[derive(Debug, Clone, Serialize)]
pub struct OrderPage {
    /// Final stage of the turn
    pub stage: RenderStage,
    /// Name echoed back into the input and the echo line
    pub customer_name: String,
    /// Multi-select options
    pub choices: Vec<IngredientChoice>,
    /// Nutrition results in selection order
    pub nutrition: Vec<NutritionResult>,
    /// Per-fruit lookup warnings
    pub warnings: Vec<LookupWarning>,
    /// Status banner, if any
    pub banner: Option<Banner>,
}

/// Run one render turn
///
/// The catalog read is the only fatal step. Lookup problems become warnings and
/// submit problems become banners; the page is still rendered.
///
/// # Errors
///
/// Returns a catalog-unavailable error if the fruit catalog cannot be loaded
pub async fn render_turn(resources: &ServerResources, input: FormInput) -> AppResult<OrderPage> {
    let catalog = resources.catalog.fruit_options().await?;
    let submit_pressed = input.submit_pressed();
    let choices = SelectionForm::choices(&catalog, &input.ingredients);

    let draft = match SelectionForm::draft(&input.name, input.ingredients, &catalog) {
        Ok(draft) => draft,
        Err(e) => {
            debug!(error = %e, "Selection rejected");
            return Ok(OrderPage {
                stage: RenderStage::SelectionRejected,
                customer_name: input.name.trim().to_owned(),
                choices,
                nutrition: Vec::new(),
                warnings: Vec::new(),
                banner: Some(Banner::Warning(format!("{}.", capitalize(&e.to_string())))),
            });
        }
    };

    let mut page = OrderPage {
        stage: initial_stage(&draft),
        customer_name: draft.customer_name.clone(),
        choices,
        nutrition: Vec::new(),
        warnings: Vec::new(),
        banner: None,
    };

    if draft.has_ingredients() {
        let outcome = resources
            .nutrition
            .lookup_selection(&catalog, &draft.selected_fruits)
            .await;
        if outcome.results.iter().any(|result| result.payload.is_some()) {
            page.stage = RenderStage::NutritionDisplayed;
        }
        page.nutrition = outcome.results;
        page.warnings = outcome.warnings;
    } else {
        page.banner = Some(Banner::Info(messages::SELECT_PROMPT.to_owned()));
    }

    if submit_pressed {
        apply_submit(resources, &draft, &mut page).await;
    }

    Ok(page)
}

async fn apply_submit(resources: &ServerResources, draft: &OrderDraft, page: &mut OrderPage) {
    match resources
        .submitter
        .submit(&draft.customer_name, &draft.selected_fruits)
        .await
    {
        Ok(order) => {
            page.stage = RenderStage::Submitted;
            page.banner = Some(Banner::Success(order.message));
        }
        Err(SubmitError::Validation(validation)) => {
            page.stage = RenderStage::SubmitRejected;
            page.banner = Some(Banner::Warning(validation.user_message().to_owned()));
        }
        Err(e @ SubmitError::Write(_)) => {
            page.stage = RenderStage::SubmitFailed;
            page.banner = Some(Banner::Error(capitalize(&e.to_string())));
        }
    }
}

fn initial_stage(draft: &OrderDraft) -> RenderStage {
    if draft.has_ingredients() {
        RenderStage::IngredientsSelected
    } else if draft.has_name() {
        RenderStage::NameEntered
    } else {
        RenderStage::Idle
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_stage_follows_widgets() {
        let empty = OrderDraft::default();
        assert_eq!(initial_stage(&empty), RenderStage::Idle);

        let named = OrderDraft::new("Alice", Vec::new()).unwrap();
        assert_eq!(initial_stage(&named), RenderStage::NameEntered);

        let selected = OrderDraft::new("", vec!["Kiwi".to_owned()]).unwrap();
        assert_eq!(initial_stage(&selected), RenderStage::IngredientsSelected);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("order could not be saved"), "Order could not be saved");
        assert_eq!(capitalize(""), "");
    }
}
