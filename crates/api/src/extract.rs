//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections use the API error envelope.
///
/// Malformed JSON, wrong content types and shape mismatches (for example a
/// string where an integer stock is expected) become `400 BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
