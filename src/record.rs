// src/record.rs
//
// The one record shape every source format is funneled into.
// Normalization is a total function: any combination of absent or blank
// fields yields a fully populated Record, so downstream code never does
// ad-hoc presence checks.

use crate::consts::{NAME_UNSPECIFIED, UNKNOWN_PROVINCE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub province: String,
    pub ingredients: String,
    pub description: String,
    pub image_path: String,
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => s!(default),
    }
}

impl Record {
    /// Build a Record from whatever fields a source managed to produce.
    /// Blank and absent values are equivalent.
    pub fn normalized(
        name: Option<&str>,
        province: Option<&str>,
        ingredients: Option<&str>,
        description: Option<&str>,
        image_path: Option<&str>,
    ) -> Self {
        Self {
            name: or_default(name, NAME_UNSPECIFIED),
            province: or_default(province, UNKNOWN_PROVINCE),
            ingredients: or_default(ingredients, ""),
            description: or_default(description, ""),
            image_path: or_default(image_path, ""),
        }
    }

    /// Row shape used by the CLI export (matches the CSV source header).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.province.clone(),
            self.ingredients.clone(),
            self.description.clone(),
            self.image_path.clone(),
        ]
    }
}
