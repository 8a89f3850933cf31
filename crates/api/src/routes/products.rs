//! Route definitions for the `/products` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// POST   /validate       -> validate
/// POST   /similar        -> similar
/// POST   /suggest-code   -> suggest
/// POST   /inventory      -> inventory
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(products::validate))
        .route("/similar", post(products::similar))
        .route("/suggest-code", post(products::suggest))
        .route("/inventory", post(products::inventory))
}
