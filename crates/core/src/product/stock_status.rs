//! Stock level classification for inventory listings.

use serde::{Deserialize, Serialize};

use crate::product::model::ProductRecord;

/// Where a product's stock sits relative to its configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// No units left.
    OutOfStock,
    /// Strictly below the minimum.
    Low,
    /// Strictly above the maximum.
    High,
    Normal,
}

/// Classify a stock level. Bounds are inclusive of normal stock; an empty
/// stock is reported as out of stock whatever the bounds.
pub fn classify_stock(stock: i64, stock_min: i64, stock_max: i64) -> StockStatus {
    if stock == 0 {
        StockStatus::OutOfStock
    } else if stock < stock_min {
        StockStatus::Low
    } else if stock > stock_max {
        StockStatus::High
    } else {
        StockStatus::Normal
    }
}

impl ProductRecord {
    pub fn stock_status(&self) -> StockStatus {
        classify_stock(self.stock, self.stock_min, self.stock_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stock_is_out_of_stock() {
        assert_eq!(classify_stock(0, 5, 50), StockStatus::OutOfStock);
        assert_eq!(classify_stock(0, 0, 10), StockStatus::OutOfStock);
    }

    #[test]
    fn below_minimum_is_low() {
        assert_eq!(classify_stock(4, 5, 50), StockStatus::Low);
        assert_eq!(classify_stock(1, 5, 50), StockStatus::Low);
    }

    #[test]
    fn above_maximum_is_high() {
        assert_eq!(classify_stock(51, 5, 50), StockStatus::High);
        assert_eq!(classify_stock(70, 5, 50), StockStatus::High);
    }

    #[test]
    fn bounds_themselves_are_normal() {
        assert_eq!(classify_stock(5, 5, 50), StockStatus::Normal);
        assert_eq!(classify_stock(50, 5, 50), StockStatus::Normal);
        assert_eq!(classify_stock(20, 5, 50), StockStatus::Normal);
        assert_eq!(classify_stock(10, 10, 10), StockStatus::Normal);
    }

    #[test]
    fn minimum_is_checked_before_maximum() {
        assert_eq!(classify_stock(7, 10, 5), StockStatus::Low);
    }

    #[test]
    fn record_helper_uses_its_own_bounds() {
        let record = ProductRecord {
            stock: 20,
            stock_min: 5,
            stock_max: 10,
            ..Default::default()
        };
        assert_eq!(record.stock_status(), StockStatus::High);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(StockStatus::OutOfStock).unwrap(),
            serde_json::json!("out_of_stock")
        );
    }
}
