//! Product records and the rules that govern them.
//!
//! - [`model`]: the product record and the form fields errors attach to.
//! - [`validation`]: hard checks that block a create or edit.
//! - [`similarity`]: soft "might be the same item" scoring.
//! - [`code`]: suggested internal codes for new products.
//! - [`stock_status`]: stock level classification.
//! - [`listing`]: inventory filtering and pagination.

pub mod code;
pub mod listing;
pub mod model;
pub mod similarity;
pub mod stock_status;
pub mod validation;

pub use model::{ProductField, ProductRecord};
