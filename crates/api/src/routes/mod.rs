pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /products/validate                 validate a candidate (POST)
/// /products/similar                  rank possible duplicates (POST)
/// /products/suggest-code             suggest an unused code (POST)
/// /products/inventory                filter + paginate a snapshot (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", products::router())
}
