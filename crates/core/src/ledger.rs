//! Sales Ledger
//!
//! Every product carries an append-only ledger of sales-counter changes.
//! Planning inspects a proposed full-record update against current state
//! and decides whether the change warrants a permanent snapshot; applying
//! replaces the mutable fields wholesale and appends the snapshot, if any.
//! The caller is responsible for making both visible atomically.

use jiff::Timestamp;

use crate::products::{Product, ProductUpdate, SalesRecord};

/// Outcome of planning an update: the fields to write, and the ledger
/// snapshot to append alongside them, when the sales counter changed.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    /// Replacement values for every mutable field.
    pub fields: ProductUpdate,

    /// Snapshot to append, present only when the sales counter changed.
    pub record: Option<SalesRecord>,
}

impl UpdatePlan {
    /// Whether applying this plan will grow the ledger.
    #[must_use]
    pub fn appends_record(&self) -> bool {
        self.record.is_some()
    }
}

/// Plan a full-record update against the product's current state.
///
/// A snapshot is keyed off change detection, not off "a sales update was
/// requested": the counter moving in either direction qualifies, while a
/// resubmission of the same figure leaves the ledger untouched even if
/// price, discount or stock change.
#[must_use]
pub fn plan_update(current: &Product, fields: ProductUpdate, now: Timestamp) -> UpdatePlan {
    let record = (fields.sales != current.sales).then(|| SalesRecord {
        sales: fields.sales,
        price: fields.price,
        discount: fields.discount,
        timestamp: now,
    });

    UpdatePlan { fields, record }
}

/// Apply a planned update in place.
///
/// Replaces all mutable fields, appends the snapshot when present, and
/// stamps `updated_at`. Existing ledger entries are never reordered,
/// rewritten or removed.
pub fn apply_update(product: &mut Product, plan: UpdatePlan, now: Timestamp) {
    let UpdatePlan { fields, record } = plan;

    product.name = fields.name;
    product.brand = fields.brand;
    product.category = fields.category;
    product.price = fields.price;
    product.discount = fields.discount;
    product.stock = fields.stock;
    product.sales = fields.sales;

    if let Some(record) = record {
        product.sales_history.push(record);
    }

    product.updated_at = now;
}
