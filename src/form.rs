// ABOUTME: Selection form state rebuilt from request parameters on every render turn
// ABOUTME: Enforces the ingredient limit and builds the multi-select widget model from the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::SelectionError;
use crate::models::{FruitOption, OrderDraft};
use serde::{Deserialize, Serialize};

/// Raw widget values posted by the order form
///
/// `ingredients` repeats once per selected option (`ingredients=Kiwi&ingredients=Lime`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormInput {
    /// "Name on Smoothie" text input
    #[serde(default)]
    pub name: String,
    /// Selected fruit names in selection order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Present when the submit button was pressed
    #[serde(default)]
    pub submit: Option<String>,
}

impl FormInput {
    /// Whether this turn was triggered by the submit button
    #[must_use]
    pub const fn submit_pressed(&self) -> bool {
        self.submit.is_some()
    }

    /// Force the submit flag; `GET` turns never submit and `POST` turns always do
    #[must_use]
    pub fn with_submit(mut self, pressed: bool) -> Self {
        self.submit = pressed.then(|| "1".to_owned());
        self
    }
}

/// One option of the ingredient multi-select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientChoice {
    /// Fruit name, used as both label and value
    pub name: String,
    /// Whether the option is currently selected
    pub selected: bool,
}

/// The name input plus the bounded ingredient multi-select
pub struct SelectionForm;

impl SelectionForm {
    /// Build the draft for this turn
    ///
    /// Every selected name must be a catalog fruit and may appear only once.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::TooManyIngredients`] when more than five fruits are selected,
    /// [`SelectionError::UnknownIngredient`] for a name outside `catalog`, and
    /// [`SelectionError::DuplicateIngredient`] for a repeated name
    pub fn draft(
        name: &str,
        fruits: Vec<String>,
        catalog: &[FruitOption],
    ) -> Result<OrderDraft, SelectionError> {
        let draft = OrderDraft::new(name.trim(), fruits)?;

        for (index, fruit) in draft.selected_fruits.iter().enumerate() {
            if !catalog.iter().any(|option| option.name == *fruit) {
                return Err(SelectionError::UnknownIngredient {
                    fruit: fruit.clone(),
                });
            }
            if draft.selected_fruits[..index].contains(fruit) {
                return Err(SelectionError::DuplicateIngredient {
                    fruit: fruit.clone(),
                });
            }
        }

        Ok(draft)
    }

    /// Multi-select options in catalog order, one per distinct fruit name
    #[must_use]
    pub fn choices(catalog: &[FruitOption], selected: &[String]) -> Vec<IngredientChoice> {
        let mut choices: Vec<IngredientChoice> = Vec::with_capacity(catalog.len());
        for option in catalog {
            if choices.iter().any(|choice| choice.name == option.name) {
                continue;
            }
            choices.push(IngredientChoice {
                name: option.name.clone(),
                selected: selected.contains(&option.name),
            });
        }
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| (*name).to_owned()).collect()
    }

    fn catalog() -> Vec<FruitOption> {
        ["Apples", "Banana", "Kiwi", "Lime", "Mango", "Papaya"]
            .iter()
            .map(|name| FruitOption::new(*name, name.to_lowercase()))
            .collect()
    }

    #[test]
    fn test_draft_trims_name() {
        let draft = SelectionForm::draft("  Alice ", names(&["Kiwi"]), &catalog()).unwrap();
        assert_eq!(draft.customer_name, "Alice");
    }

    #[test]
    fn test_draft_limit() {
        let five = names(&["Apples", "Banana", "Kiwi", "Lime", "Mango"]);
        assert!(SelectionForm::draft("A", five, &catalog()).is_ok());

        let six = names(&["Apples", "Banana", "Kiwi", "Lime", "Mango", "Papaya"]);
        assert_eq!(
            SelectionForm::draft("A", six, &catalog()),
            Err(SelectionError::too_many(6))
        );
    }

    #[test]
    fn test_draft_rejects_names_outside_catalog() {
        let result = SelectionForm::draft("A", names(&["Kiwi", "<script>"]), &catalog());

        assert_eq!(
            result,
            Err(SelectionError::UnknownIngredient {
                fruit: "<script>".to_owned()
            })
        );
    }

    #[test]
    fn test_draft_matches_catalog_names_exactly() {
        let result = SelectionForm::draft("A", names(&["kiwi"]), &catalog());
        assert!(matches!(result, Err(SelectionError::UnknownIngredient { .. })));
    }

    #[test]
    fn test_draft_rejects_repeated_fruit() {
        let result = SelectionForm::draft("A", names(&["Kiwi", "Lime", "Kiwi"]), &catalog());

        assert_eq!(
            result,
            Err(SelectionError::DuplicateIngredient {
                fruit: "Kiwi".to_owned()
            })
        );
    }

    #[test]
    fn test_choices_dedupe_and_mark_selection() {
        let catalog = vec![
            FruitOption::new("Kiwi", "kiwi"),
            FruitOption::new("Lime", "lime"),
            FruitOption::new("Kiwi", "kiwifruit"),
        ];

        let choices = SelectionForm::choices(&catalog, &names(&["Lime"]));

        assert_eq!(choices.len(), 2);
        assert!(!choices[0].selected);
        assert!(choices[1].selected);
    }
}
