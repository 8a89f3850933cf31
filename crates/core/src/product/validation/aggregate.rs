//! Whole-record validation.

use crate::product::model::{ProductField, ProductRecord};

use super::fields::{validate_code, validate_description, validate_stock, validate_unique_name};
use super::rules::{FieldViolation, ValidationResult};

/// Validate a candidate product against the current inventory snapshot.
///
/// Validators run in a fixed order and all of them run: name, code, brand,
/// category, stock, then description when it is not blank. When
/// `is_editing` is set, `candidate.id` is excluded from every uniqueness
/// check; a candidate without an id excludes nothing.
///
/// The generic [`super::validate_required_fields`] pass and the
/// [`super::validate_unique_combination`] check are not part of this
/// aggregate.
pub fn validate_product(
    candidate: &ProductRecord,
    existing: &[ProductRecord],
    is_editing: bool,
) -> ValidationResult {
    let exclude_id = if is_editing { candidate.id } else { None };

    let mut errors = Vec::new();
    errors.extend(validate_unique_name(&candidate.name, existing, exclude_id).errors);
    errors.extend(validate_code(&candidate.code, existing, exclude_id).errors);
    errors.extend(required(ProductField::Brand, &candidate.brand, "Brand is required"));
    errors.extend(required(
        ProductField::Category,
        &candidate.category,
        "Category is required",
    ));
    errors.extend(validate_stock(candidate).errors);
    if !candidate.description.trim().is_empty() {
        errors.extend(validate_description(&candidate.description).errors);
    }

    ValidationResult::from_errors(errors)
}

fn required(field: ProductField, value: &str, message: &str) -> Option<FieldViolation> {
    value
        .trim()
        .is_empty()
        .then(|| FieldViolation::new(field, message))
}
