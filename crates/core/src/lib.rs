//! Ordena product rules engine.
//!
//! Pure domain logic for the inventory console: text normalization, product
//! validation, duplicate-candidate scoring and inventory listing helpers.
//! Nothing in this crate performs I/O; every function recomputes its result
//! from the arguments it is given.

pub mod error;
pub mod product;
pub mod text;
pub mod types;
