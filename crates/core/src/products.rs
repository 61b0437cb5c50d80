//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// A single shoe line in the catalogue.
///
/// `price` is held in minor units (paise); `discount` is a percentage in
/// `0..=100`. The persisted document uses the camel-case field names the
/// dashboard API always carried (`salesHistory`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductUuid,

    /// Display name.
    pub name: String,

    /// Manufacturer brand.
    pub brand: String,

    /// Catalogue category.
    pub category: String,

    /// Base price in minor units, before any discount.
    pub price: u64,

    /// Discount percentage, `0..=100`.
    #[serde(default)]
    pub discount: Decimal,

    /// Units currently in stock.
    #[serde(default)]
    pub stock: u64,

    /// Latest known sales counter.
    #[serde(default)]
    pub sales: u64,

    /// Append-only ledger of sales-counter changes, oldest first.
    #[serde(default)]
    pub sales_history: Vec<SalesRecord>,

    /// Creation instant.
    pub created_at: Timestamp,

    /// Instant of the most recent update.
    pub updated_at: Timestamp,
}

/// Immutable snapshot appended to a product's sales ledger.
///
/// Once appended, a record is never mutated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    /// Sales counter at the time of the change.
    pub sales: u64,

    /// Price in minor units at the time of the change.
    pub price: u64,

    /// Discount percentage at the time of the change.
    #[serde(default)]
    pub discount: Decimal,

    /// Instant the snapshot was taken.
    pub timestamp: Timestamp,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: u64,
    pub discount: Decimal,
    pub stock: u64,
    pub sales: u64,
}

/// Product Update Data
///
/// An update replaces all mutable fields; the caller must resend the full
/// current value of fields it does not intend to change.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: u64,
    pub discount: Decimal,
    pub stock: u64,
    pub sales: u64,
}

impl Product {
    /// Build a freshly created product with an empty sales ledger.
    #[must_use]
    pub fn create(id: ProductUuid, new: NewProduct, now: Timestamp) -> Self {
        Self {
            id,
            name: new.name,
            brand: new.brand,
            category: new.category,
            price: new.price,
            discount: new.discount,
            stock: new.stock,
            sales: new.sales,
            sales_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reported lifetime sales for this product.
    ///
    /// The sum of ledger entries when the ledger is non-empty, otherwise the
    /// bare sales counter. Never both: a product whose ledger holds 5, 7 and
    /// 9 reports 21, regardless of the current counter value.
    #[must_use]
    pub fn total_sales(&self) -> u64 {
        if self.sales_history.is_empty() {
            self.sales
        } else {
            self.sales_history
                .iter()
                .fold(0u64, |sum, record| sum.saturating_add(record.sales))
        }
    }

    /// Whether the product has no units left in stock.
    #[must_use]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn sample(sales: u64, history: Vec<SalesRecord>) -> Product {
        Product {
            id: ProductUuid::new(),
            name: "Air Zoom".to_string(),
            brand: "Nike".to_string(),
            category: "Running".to_string(),
            price: 4999_00,
            discount: Decimal::ZERO,
            stock: 10,
            sales,
            sales_history: history,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn record(sales: u64) -> SalesRecord {
        SalesRecord {
            sales,
            price: 4999_00,
            discount: Decimal::ZERO,
            timestamp: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn total_sales_sums_ledger_when_non_empty() {
        let product = sample(99, vec![record(5), record(7), record(9)]);

        assert_eq!(product.total_sales(), 21);
    }

    #[test]
    fn total_sales_falls_back_to_counter_when_ledger_empty() {
        let product = sample(42, Vec::new());

        assert_eq!(product.total_sales(), 42);
    }

    #[test]
    fn create_starts_with_empty_ledger() {
        let new = NewProduct {
            name: "Court Vision".to_string(),
            brand: "Nike".to_string(),
            category: "Casual".to_string(),
            price: 3499_00,
            discount: Decimal::ZERO,
            stock: 5,
            sales: 3,
        };

        let product = Product::create(ProductUuid::new(), new, Timestamp::UNIX_EPOCH);

        assert!(product.sales_history.is_empty());
        assert_eq!(product.total_sales(), 3, "empty ledger falls back to counter");
    }

    #[test]
    fn out_of_stock_is_strictly_zero() {
        let mut product = sample(0, Vec::new());

        product.stock = 0;
        assert!(product.is_out_of_stock());

        product.stock = 1;
        assert!(!product.is_out_of_stock());
    }

    #[test]
    fn document_shape_uses_camel_case_field_names() -> TestResult {
        let product = sample(1, vec![record(1)]);
        let json = serde_json::to_string(&product)?;

        assert!(json.contains("\"salesHistory\""), "ledger key: {json}");
        assert!(json.contains("\"createdAt\""), "created key: {json}");
        assert!(json.contains("\"updatedAt\""), "updated key: {json}");

        Ok(())
    }

    #[test]
    fn document_round_trips_without_loss() -> TestResult {
        let product = sample(9, vec![record(2), record(3), record(4)]);
        let json = serde_json::to_string(&product)?;
        let back: Product = serde_json::from_str(&json)?;

        assert_eq!(back, product);

        Ok(())
    }
}
