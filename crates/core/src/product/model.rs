use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A product as edited in the inventory form or as already stored.
///
/// `id` is `None` for a product that is being created. Stock quantities are
/// signed so that a negative entry reaches the validator and is reported
/// as a field error instead of being rejected earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    pub code: String,
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub stock: i64,
    pub stock_min: i64,
    pub stock_max: i64,
    /// Opaque image reference; never inspected by the rules engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Form control a validation error is displayed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
    Name,
    Code,
    Brand,
    Category,
    Description,
    Stock,
    StockMin,
    StockMax,
    /// Synthetic field for the name + brand + category uniqueness check.
    Combination,
}

impl ProductField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Code => "code",
            Self::Brand => "brand",
            Self::Category => "category",
            Self::Description => "description",
            Self::Stock => "stock",
            Self::StockMin => "stockMin",
            Self::StockMax => "stockMax",
            Self::Combination => "combination",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_serializes_to_form_control_name() {
        for field in [
            ProductField::Name,
            ProductField::StockMin,
            ProductField::StockMax,
            ProductField::Combination,
        ] {
            assert_eq!(serde_json::to_value(field).unwrap(), json!(field.as_str()));
        }
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let record = ProductRecord {
            name: "Taladro".to_string(),
            stock_min: 2,
            stock_max: 9,
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["stockMin"], 2);
        assert_eq!(value["stockMax"], 9);
        assert!(value.get("image").is_none());
    }

    #[test]
    fn record_defaults_optional_fields_on_deserialize() {
        let record: ProductRecord = serde_json::from_value(json!({
            "name": "Taladro",
            "code": "TAL-001",
            "brand": "Bosch",
            "category": "Herramientas",
            "stock": 1,
            "stockMin": 0,
            "stockMax": 5
        }))
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.description, "");
        assert_eq!(record.image, None);
    }
}
