//! Handlers for the `/products` resource.
//!
//! Every request carries the candidate and a fresh snapshot of the existing
//! inventory; nothing is stored between calls.

use axum::extract::State;
use axum::Json;
use ordena_core::product::code::suggest_code;
use ordena_core::product::listing::{
    filter_products, page_window, paginate, InventoryFilter, Page, DEFAULT_PAGE_SIZE,
};
use ordena_core::product::similarity::{score_similar_products, SimilarProduct};
use ordena_core::product::stock_status::StockStatus;
use ordena_core::product::validation::{
    validate_product, validate_unique_combination, ValidationResult,
};
use ordena_core::product::ProductRecord;
use ordena_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::input::{into_records, LabelInput, ProductInput};
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject snapshots larger than the configured limit.
fn check_snapshot_len(state: &AppState, what: &str, len: usize) -> AppResult<()> {
    let max = state.config.max_snapshot_records;
    if len > max {
        return Err(AppError::BadRequest(format!(
            "{what} holds {len} records, the limit is {max}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Request body for `POST /products/validate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateProductRequest {
    pub candidate: ProductInput,
    #[serde(default)]
    pub existing: Vec<ProductInput>,
    #[serde(default)]
    pub is_editing: bool,
    /// Also run the name + brand + category uniqueness check.
    #[serde(default)]
    pub check_combination: bool,
}

/// POST /api/v1/products/validate
///
/// Validate a candidate product against the posted inventory snapshot.
/// Always answers 200; validity is reported in the body.
pub async fn validate(
    State(state): State<AppState>,
    AppJson(body): AppJson<ValidateProductRequest>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    check_snapshot_len(&state, "existing", body.existing.len())?;

    let candidate = ProductRecord::from(body.candidate);
    let existing = into_records(body.existing);

    let mut result = validate_product(&candidate, &existing, body.is_editing);
    if body.check_combination {
        let exclude_id = if body.is_editing { candidate.id } else { None };
        result = result.merge(validate_unique_combination(&candidate, &existing, exclude_id));
    }

    tracing::debug!(
        existing = existing.len(),
        is_editing = body.is_editing,
        errors = result.errors.len(),
        "Validated product candidate"
    );

    Ok(Json(DataResponse { data: result }))
}

// ---------------------------------------------------------------------------
// Similarity
// ---------------------------------------------------------------------------

/// Request body for `POST /products/similar`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarProductsRequest {
    pub candidate: ProductInput,
    #[serde(default)]
    pub existing: Vec<ProductInput>,
    #[serde(default)]
    pub exclude_id: Option<DbId>,
}

/// POST /api/v1/products/similar
///
/// Rank existing products that might be the same item as the candidate.
pub async fn similar(
    State(state): State<AppState>,
    AppJson(body): AppJson<SimilarProductsRequest>,
) -> AppResult<Json<DataResponse<Vec<SimilarProduct>>>> {
    check_snapshot_len(&state, "existing", body.existing.len())?;

    let candidate = ProductRecord::from(body.candidate);
    let existing = into_records(body.existing);
    let matches = score_similar_products(&candidate, &existing, body.exclude_id);

    tracing::debug!(
        existing = existing.len(),
        matches = matches.len(),
        top_score = ?matches.first().map(|m| m.score),
        "Scored similar products"
    );

    Ok(Json(DataResponse { data: matches }))
}

// ---------------------------------------------------------------------------
// Code suggestion
// ---------------------------------------------------------------------------

/// Request body for `POST /products/suggest-code`.
#[derive(Debug, Deserialize)]
pub struct SuggestCodeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: LabelInput,
    #[serde(default)]
    pub existing: Vec<ProductInput>,
}

#[derive(Debug, Serialize)]
pub struct SuggestedCode {
    pub code: String,
}

/// POST /api/v1/products/suggest-code
///
/// Suggest an unused internal code. `code` is empty when the name or
/// category is blank.
pub async fn suggest(
    State(state): State<AppState>,
    AppJson(body): AppJson<SuggestCodeRequest>,
) -> AppResult<Json<DataResponse<SuggestedCode>>> {
    check_snapshot_len(&state, "existing", body.existing.len())?;

    let category: String = body.category.into();
    let existing = into_records(body.existing);
    let code = suggest_code(&body.name, &category, &existing);

    tracing::debug!(
        existing = existing.len(),
        empty = code.is_empty(),
        "Suggested product code"
    );

    Ok(Json(DataResponse {
        data: SuggestedCode { code },
    }))
}

// ---------------------------------------------------------------------------
// Inventory listing
// ---------------------------------------------------------------------------

/// Request body for `POST /products/inventory`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRequest {
    #[serde(default)]
    pub products: Vec<ProductInput>,
    #[serde(default)]
    pub filter: InventoryFilter,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// A listed product with its stock classification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product: ProductRecord,
    pub stock_status: StockStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPage {
    #[serde(flatten)]
    pub page: Page<InventoryItem>,
    pub page_window: Vec<usize>,
}

/// POST /api/v1/products/inventory
///
/// Filter and paginate the posted inventory, classifying each product's
/// stock level.
pub async fn inventory(
    State(state): State<AppState>,
    AppJson(body): AppJson<InventoryRequest>,
) -> AppResult<Json<DataResponse<InventoryPage>>> {
    check_snapshot_len(&state, "products", body.products.len())?;

    let products = into_records(body.products);
    let items: Vec<InventoryItem> = filter_products(&products, &body.filter)
        .into_iter()
        .map(|p| InventoryItem {
            stock_status: p.stock_status(),
            product: p.clone(),
        })
        .collect();

    let page = paginate(
        &items,
        body.page.unwrap_or(1),
        body.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;
    let window = page_window(page.page, page.total_pages);

    tracing::debug!(
        total = products.len(),
        matched = page.total_items,
        page = page.page,
        "Listed inventory page"
    );

    Ok(Json(DataResponse {
        data: InventoryPage {
            page,
            page_window: window,
        },
    }))
}
