//! Product validation engine.
//!
//! Field-level validators plus the aggregate that runs them in a fixed
//! order. Validators never fail; every problem is reported as a
//! [`FieldViolation`] so the form can show it next to the right control.

pub mod aggregate;
pub mod fields;
pub mod rules;

pub use aggregate::validate_product;
pub use fields::{
    validate_code, validate_description, validate_required_fields, validate_stock,
    validate_unique_combination, validate_unique_name,
};
pub use rules::{FieldViolation, ValidationResult};
