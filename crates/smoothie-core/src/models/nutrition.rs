// ABOUTME: Nutrition lookup result model and its single-row tabular view
// ABOUTME: Payloads are opaque JSON; nested objects flatten to dotted column names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use serde_json::Value;

/// Nutrition data fetched for one selected fruit during one render turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionResult {
    /// Selected fruit name
    pub fruit_name: String,
    /// Key sent to the nutrition service
    pub lookup_key: String,
    /// Parsed response body; absent when the lookup failed
    pub payload: Option<Value>,
}

impl NutritionResult {
    /// Tabular view of the payload, if there is one
    #[must_use]
    pub fn table(&self) -> Option<NutritionTable> {
        self.payload.as_ref().map(NutritionTable::from_payload)
    }
}

/// Column/row view of a nutrition payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NutritionTable {
    /// Column headers
    pub columns: Vec<String>,
    /// Cell text, one entry per column
    pub rows: Vec<Vec<String>>,
}

impl NutritionTable {
    /// Build a table from an arbitrary JSON payload.
    ///
    /// An object becomes a single row, an array becomes one row per element,
    /// and a bare scalar becomes a single `value` cell.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let records: Vec<Vec<(String, String)>> = match payload {
            Value::Array(items) => items.iter().map(flatten_record).collect(),
            other => vec![flatten_record(other)],
        };

        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for (column, _) in record {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        record
                            .iter()
                            .find(|(name, _)| name == column)
                            .map(|(_, cell)| cell.clone())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }
}

fn flatten_record(value: &Value) -> Vec<(String, String)> {
    let mut cells = Vec::new();
    match value {
        Value::Object(_) => flatten_into("", value, &mut cells),
        scalar => cells.push(("value".to_owned(), cell_text(scalar))),
    }
    cells
}

fn flatten_into(prefix: &str, value: &Value, cells: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let column = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&column, child, cells);
            }
        }
        leaf => cells.push((prefix.to_owned(), cell_text(leaf))),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_object_is_one_row() {
        let table = NutritionTable::from_payload(&json!({
            "name": "Banana",
            "id": 1,
            "carbs": 22.0
        }));

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.columns.len(), 3);
        let name_index = table.columns.iter().position(|c| c == "name").unwrap();
        assert_eq!(table.rows[0][name_index], "Banana");
    }

    #[test]
    fn test_nested_object_flattens_to_dotted_columns() {
        let table = NutritionTable::from_payload(&json!({
            "name": "Watermelon",
            "nutrition": { "carbs": 8, "sugar": 6.2 }
        }));

        assert_eq!(table.rows.len(), 1);
        assert!(table.columns.contains(&"nutrition.carbs".to_owned()));
        assert!(table.columns.contains(&"nutrition.sugar".to_owned()));
    }

    #[test]
    fn test_array_is_one_row_per_element_with_union_columns() {
        let table = NutritionTable::from_payload(&json!([
            { "name": "Kiwi", "fat": 0.5 },
            { "name": "Lime", "protein": 0.7 }
        ]));

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.columns.len(), 3);
        let fat_index = table.columns.iter().position(|c| c == "fat").unwrap();
        assert_eq!(table.rows[0][fat_index], "0.5");
        assert_eq!(table.rows[1][fat_index], "");
    }

    #[test]
    fn test_scalar_payload() {
        let table = NutritionTable::from_payload(&json!("not much"));

        assert_eq!(table.columns, vec!["value"]);
        assert_eq!(table.rows, vec![vec!["not much".to_owned()]]);
    }
}
