//! Ordena API server library.
//!
//! Exposes the product rules engine to the inventory console over HTTP.
//! The config, state, error handling, routes and router builder live here
//! so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod input;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
