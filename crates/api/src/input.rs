//! Wire shapes accepted from the console and their conversion into core
//! records.
//!
//! Brand and category arrive either as plain strings or as `{ "nombre": ... }`
//! objects depending on the screen that produced them; both collapse to a
//! plain string here so the core only ever sees one shape. Stock quantities
//! must be JSON integers; anything else fails deserialization and is
//! reported as a bad request instead of being coerced.

use ordena_core::product::ProductRecord;
use ordena_core::types::DbId;
use serde::Deserialize;

/// A brand or category label in either of its accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LabelInput {
    Plain(String),
    Named { nombre: String },
}

impl Default for LabelInput {
    fn default() -> Self {
        LabelInput::Plain(String::new())
    }
}

impl From<LabelInput> for String {
    fn from(label: LabelInput) -> Self {
        match label {
            LabelInput::Plain(s) | LabelInput::Named { nombre: s } => s,
        }
    }
}

/// A product as posted by the console.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub brand: LabelInput,
    #[serde(default)]
    pub category: LabelInput,
    #[serde(default)]
    pub description: Option<String>,
    pub stock: i64,
    pub stock_min: i64,
    pub stock_max: i64,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<ProductInput> for ProductRecord {
    fn from(input: ProductInput) -> Self {
        ProductRecord {
            id: input.id,
            name: input.name,
            code: input.code,
            brand: input.brand.into(),
            category: input.category.into(),
            description: input.description.unwrap_or_default(),
            stock: input.stock,
            stock_min: input.stock_min,
            stock_max: input.stock_max,
            image: input.image,
        }
    }
}

/// Convert a posted inventory snapshot into core records.
pub fn into_records(inputs: Vec<ProductInput>) -> Vec<ProductRecord> {
    inputs.into_iter().map(ProductRecord::from).collect()
}
