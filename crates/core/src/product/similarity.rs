//! "Possibly the same product" scoring.
//!
//! Advisory only: a match never blocks a submission by itself. Similarity
//! is driven by the name; brand and category only add to the score of a
//! record whose name is already related to the candidate's.

use serde::Serialize;

use crate::product::model::ProductRecord;
use crate::text::normalize_text;
use crate::types::DbId;

/// Score for an identical normalized name.
pub const SCORE_EXACT_NAME: u32 = 100;

/// Score when one normalized name contains the other.
pub const SCORE_PARTIAL_NAME: u32 = 50;

/// Bonus for a matching normalized brand.
pub const SCORE_SAME_BRAND: u32 = 10;

/// Bonus for a matching normalized category.
pub const SCORE_SAME_CATEGORY: u32 = 10;

/// Maximum number of similar products returned.
pub const MAX_SIMILAR_RESULTS: usize = 5;

/// An existing product together with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarProduct {
    pub product: ProductRecord,
    pub score: u32,
}

/// Normalized comparison keys of a product.
struct Keys {
    name: String,
    brand: String,
    category: String,
}

impl Keys {
    fn of(product: &ProductRecord) -> Self {
        Self {
            name: normalize_text(&product.name),
            brand: normalize_text(&product.brand),
            category: normalize_text(&product.category),
        }
    }
}

/// Score `other` against the candidate keys. `0` means "not similar".
fn score(candidate: &Keys, other: &Keys) -> u32 {
    let mut score = if other.name == candidate.name {
        SCORE_EXACT_NAME
    } else if other.name.contains(&candidate.name) || candidate.name.contains(&other.name) {
        SCORE_PARTIAL_NAME
    } else {
        return 0;
    };

    if other.brand == candidate.brand {
        score += SCORE_SAME_BRAND;
    }
    if other.category == candidate.category {
        score += SCORE_SAME_CATEGORY;
    }
    score
}

/// Rank existing products by similarity to `candidate`.
///
/// Records with no name relationship are dropped. The rest are sorted by
/// descending score, keeping inventory order on ties, and truncated to
/// [`MAX_SIMILAR_RESULTS`]. `exclude_id` removes the record being edited.
pub fn score_similar_products(
    candidate: &ProductRecord,
    existing: &[ProductRecord],
    exclude_id: Option<DbId>,
) -> Vec<SimilarProduct> {
    let keys = Keys::of(candidate);

    let mut scored: Vec<SimilarProduct> = existing
        .iter()
        .filter(|p| exclude_id.is_none() || p.id != exclude_id)
        .filter_map(|p| {
            let score = score(&keys, &Keys::of(p));
            (score > 0).then(|| SimilarProduct {
                product: p.clone(),
                score,
            })
        })
        .collect();

    // `sort_by` is stable, so equal scores keep inventory order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_SIMILAR_RESULTS);
    scored
}

/// Like [`score_similar_products`] but returns only the records.
pub fn find_similar_products(
    candidate: &ProductRecord,
    existing: &[ProductRecord],
    exclude_id: Option<DbId>,
) -> Vec<ProductRecord> {
    score_similar_products(candidate, existing, exclude_id)
        .into_iter()
        .map(|s| s.product)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::existing;

    fn drill() -> ProductRecord {
        ProductRecord {
            name: "Taladro Bosch".to_string(),
            brand: "Bosch".to_string(),
            category: "Herramientas".to_string(),
            ..Default::default()
        }
    }

    fn scores(result: &[SimilarProduct]) -> Vec<(DbId, u32)> {
        result
            .iter()
            .map(|s| (s.product.id.unwrap_or_default(), s.score))
            .collect()
    }

    #[test]
    fn brand_and_category_alone_are_not_similar() {
        let inventory = [existing(1, "Taladro Makita", "T-1", "Bosch", "Herramientas")];
        assert!(find_similar_products(&drill(), &inventory, None).is_empty());
    }

    #[test]
    fn exact_name_with_brand_and_category_scores_120() {
        let inventory = [existing(1, " taladro   BOSCH", "T-1", "bosch", "HERRAMIENTAS")];
        let result = score_similar_products(&drill(), &inventory, None);
        assert_eq!(scores(&result), [(1, 120)]);
    }

    #[test]
    fn containment_in_either_direction_scores_50() {
        let inventory = [
            existing(1, "Taladro", "T-1", "Makita", "Otros"),
            existing(2, "Taladro Bosch 500W", "T-2", "Makita", "Otros"),
        ];
        let result = score_similar_products(&drill(), &inventory, None);
        assert_eq!(scores(&result), [(1, 50), (2, 50)]);
    }

    #[test]
    fn bonuses_apply_independently() {
        let inventory = [
            existing(1, "Taladro", "T-1", "Bosch", "Otros"),
            existing(2, "Taladro", "T-2", "Makita", "Herramientas"),
        ];
        let result = score_similar_products(&drill(), &inventory, None);
        assert_eq!(scores(&result), [(1, 60), (2, 60)]);
    }

    #[test]
    fn results_sorted_descending_with_stable_ties() {
        let inventory = [
            existing(1, "Taladro", "T-1", "x", "y"),
            existing(2, "Taladro Bosch", "T-2", "x", "y"),
            existing(3, "Taladro", "T-3", "Bosch", "y"),
            existing(4, "Bosch", "T-4", "x", "y"),
            existing(5, "Taladro Bosch", "T-5", "Bosch", "Herramientas"),
        ];
        let result = score_similar_products(&drill(), &inventory, None);
        assert_eq!(scores(&result), [(5, 120), (2, 100), (3, 60), (1, 50), (4, 50)]);
    }

    #[test]
    fn truncates_to_five() {
        let inventory: Vec<_> = (1..=8)
            .map(|id| existing(id, "Taladro", &format!("T-{id}"), "x", "y"))
            .collect();
        let result = score_similar_products(&drill(), &inventory, None);
        assert_eq!(result.len(), MAX_SIMILAR_RESULTS);
        let ids: Vec<_> = result.iter().filter_map(|s| s.product.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn excluded_id_is_skipped() {
        let inventory = [
            existing(1, "Taladro Bosch", "T-1", "Bosch", "Herramientas"),
            existing(2, "Taladro", "T-2", "x", "y"),
        ];
        let result = find_similar_products(&drill(), &inventory, Some(1));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, Some(2));
    }

    #[test]
    fn zero_is_a_real_excludable_id() {
        let inventory = [
            existing(0, "Taladro Bosch", "T-0", "Bosch", "Herramientas"),
            existing(1, "Taladro", "T-1", "x", "y"),
        ];
        let result = find_similar_products(&drill(), &inventory, Some(0));
        let ids: Vec<_> = result.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, [1]);
    }

    #[test]
    fn empty_candidate_name_partially_matches_everything() {
        let blank = ProductRecord {
            name: "   ".to_string(),
            brand: "Bosch".to_string(),
            ..Default::default()
        };
        let inventory = [
            existing(1, "Taladro", "T-1", "Bosch", "y"),
            existing(2, "Sierra", "S-1", "x", "y"),
        ];
        let result = score_similar_products(&blank, &inventory, None);
        assert_eq!(scores(&result), [(1, 60), (2, 50)]);
    }

    #[test]
    fn empty_inventory_yields_nothing() {
        assert!(find_similar_products(&drill(), &[], None).is_empty());
    }
}
