//! Field-level product validators.
//!
//! Each validator is independent: it inspects its own field(s), compares
//! against the existing inventory where uniqueness matters, and returns every
//! violation it finds. `exclude_id` is the identity of the record being
//! edited so that it never collides with itself.

use std::sync::LazyLock;

use regex::Regex;

use crate::product::model::{ProductField, ProductRecord};
use crate::text::{normalize_text, trimmed_len};
use crate::types::DbId;

use super::rules::{FieldViolation, ValidationResult};

/// Minimum length of a normalized product name.
pub const NAME_MIN_LEN: usize = 3;

/// Minimum length of a trimmed internal code.
pub const CODE_MIN_LEN: usize = 3;

/// Inclusive bounds on a non-empty trimmed description.
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 500;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

/// Existing records other than the one identified by `exclude_id`.
fn others(
    existing: &[ProductRecord],
    exclude_id: Option<DbId>,
) -> impl Iterator<Item = &ProductRecord> {
    existing
        .iter()
        .filter(move |p| exclude_id.is_none() || p.id != exclude_id)
}

/// Key used for case-insensitive code comparison.
///
/// Codes are trimmed and case-folded but internal whitespace is kept as is.
fn code_key(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Validate a product name: required, minimum length, unique when normalized.
///
/// A blank name yields only the "required" error. When several existing
/// records share the normalized name, the first one in iteration order is
/// named in the message.
pub fn validate_unique_name(
    name: &str,
    existing: &[ProductRecord],
    exclude_id: Option<DbId>,
) -> ValidationResult {
    let normalized = normalize_text(name);
    if normalized.is_empty() {
        return ValidationResult::from_errors(vec![FieldViolation::new(
            ProductField::Name,
            "Product name is required",
        )]);
    }

    let mut errors = Vec::new();

    if normalized.chars().count() < NAME_MIN_LEN {
        errors.push(FieldViolation::new(
            ProductField::Name,
            format!("Name must be at least {NAME_MIN_LEN} characters long"),
        ));
    }

    if let Some(duplicate) =
        others(existing, exclude_id).find(|p| normalize_text(&p.name) == normalized)
    {
        errors.push(FieldViolation::new(
            ProductField::Name,
            format!("A product named \"{}\" already exists", duplicate.name),
        ));
    }

    ValidationResult::from_errors(errors)
}

/// Validate an internal code: required, minimum length, allowed characters,
/// unique ignoring case.
///
/// A blank code yields only the "required" error.
pub fn validate_code(
    code: &str,
    existing: &[ProductRecord],
    exclude_id: Option<DbId>,
) -> ValidationResult {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return ValidationResult::from_errors(vec![FieldViolation::new(
            ProductField::Code,
            "Internal code is required",
        )]);
    }

    let mut errors = Vec::new();

    if trimmed.chars().count() < CODE_MIN_LEN {
        errors.push(FieldViolation::new(
            ProductField::Code,
            format!("Code must be at least {CODE_MIN_LEN} characters long"),
        ));
    }

    if !CODE_RE.is_match(trimmed) {
        errors.push(FieldViolation::new(
            ProductField::Code,
            "Code may only contain letters, digits, hyphens and underscores",
        ));
    }

    let key = code_key(code);
    if let Some(duplicate) = others(existing, exclude_id).find(|p| code_key(&p.code) == key) {
        errors.push(FieldViolation::new(
            ProductField::Code,
            format!("A product with code \"{}\" already exists", duplicate.code),
        ));
    }

    ValidationResult::from_errors(errors)
}

/// Validate stock quantities.
///
/// Every failing condition yields its own error, in this order: negative
/// stock, negative minimum, negative maximum, minimum above maximum, stock
/// above maximum.
pub fn validate_stock(product: &ProductRecord) -> ValidationResult {
    let mut errors = Vec::new();

    if product.stock < 0 {
        errors.push(FieldViolation::new(
            ProductField::Stock,
            "Stock cannot be negative",
        ));
    }
    if product.stock_min < 0 {
        errors.push(FieldViolation::new(
            ProductField::StockMin,
            "Minimum stock cannot be negative",
        ));
    }
    if product.stock_max < 0 {
        errors.push(FieldViolation::new(
            ProductField::StockMax,
            "Maximum stock cannot be negative",
        ));
    }
    if product.stock_min > product.stock_max {
        errors.push(FieldViolation::new(
            ProductField::StockMin,
            "Minimum stock cannot be greater than maximum stock",
        ));
    }
    if product.stock > product.stock_max {
        errors.push(FieldViolation::new(
            ProductField::Stock,
            "Initial stock cannot be greater than maximum stock",
        ));
    }

    ValidationResult::from_errors(errors)
}

/// Validate an optional description. Blank descriptions always pass.
pub fn validate_description(description: &str) -> ValidationResult {
    let len = trimmed_len(description);
    let mut errors = Vec::new();

    if len > 0 {
        if len < DESCRIPTION_MIN_LEN {
            errors.push(FieldViolation::new(
                ProductField::Description,
                format!("Description must be at least {DESCRIPTION_MIN_LEN} characters long"),
            ));
        }
        if len > DESCRIPTION_MAX_LEN {
            errors.push(FieldViolation::new(
                ProductField::Description,
                format!("Description cannot exceed {DESCRIPTION_MAX_LEN} characters"),
            ));
        }
    }

    ValidationResult::from_errors(errors)
}

/// Coarse presence check over name, code, brand, category and description.
///
/// Independent of [`super::validate_product`]: running both can report the
/// same blank field twice.
pub fn validate_required_fields(product: &ProductRecord) -> ValidationResult {
    let required = [
        (ProductField::Name, &product.name, "Product name is required"),
        (ProductField::Code, &product.code, "Internal code is required"),
        (ProductField::Brand, &product.brand, "Brand is required"),
        (ProductField::Category, &product.category, "Category is required"),
        (
            ProductField::Description,
            &product.description,
            "Description is required",
        ),
    ];

    let errors = required
        .into_iter()
        .filter(|(_, value, _)| value.trim().is_empty())
        .map(|(field, _, message)| FieldViolation::new(field, message))
        .collect();

    ValidationResult::from_errors(errors)
}

/// Reject a product whose normalized name, brand and category all match an
/// existing record.
pub fn validate_unique_combination(
    product: &ProductRecord,
    existing: &[ProductRecord],
    exclude_id: Option<DbId>,
) -> ValidationResult {
    let name = normalize_text(&product.name);
    let brand = normalize_text(&product.brand);
    let category = normalize_text(&product.category);

    let duplicate = others(existing, exclude_id).find(|p| {
        normalize_text(&p.name) == name
            && normalize_text(&p.brand) == brand
            && normalize_text(&p.category) == category
    });

    let errors = duplicate
        .map(|p| {
            FieldViolation::new(
                ProductField::Combination,
                format!(
                    "A product with the same name, brand and category already exists: \"{}\" ({} - {})",
                    p.name, p.brand, p.category
                ),
            )
        })
        .into_iter()
        .collect();

    ValidationResult::from_errors(errors)
}
