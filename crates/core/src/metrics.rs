//! Dashboard Metrics
//!
//! Pure derivations from a product collection to the figures the dashboard
//! reports: fleet totals, grouped breakdowns, top-N rankings, the low-stock
//! list, and search filtering. Nothing here caches or mutates; every call
//! recomputes from the records it is given.

use rustc_hash::FxHashMap;

use crate::{
    bands::{DiscountBand, PriceBand},
    pricing::{self, PriceError},
    products::Product,
};

/// Number of brand groups kept before folding the rest into `Others`.
pub const TOP_BRAND_GROUPS: usize = 4;

/// Number of products shown in the top-sellers strip.
pub const TOP_SELLERS_LIMIT: usize = 8;

/// Stock level below which a product counts as low on stock.
pub const LOW_STOCK_THRESHOLD: u64 = 15;

/// Label used when a product carries no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Label used when a product carries no brand.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Label of the synthetic residual bucket in top-N rankings.
pub const OTHERS: &str = "Others";

/// Fleet-wide headline figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetTotals {
    /// Sum of reported sales across the fleet.
    pub total_sales: u64,

    /// Sum of units in stock across the fleet.
    pub total_stock: u64,

    /// Sum of final price × reported sales, in minor units.
    pub total_revenue: u64,

    /// Number of products in the catalogue.
    pub product_count: usize,
}

/// One labelled bucket of summed sales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownEntry {
    /// Bucket label.
    pub label: String,

    /// Summed reported sales of the bucket's products.
    pub sales: u64,
}

/// Compute the fleet totals for the stat cards.
///
/// Sales and stock sums saturate at `u64::MAX`; revenue uses checked
/// arithmetic since it multiplies prices by unit counts.
///
/// # Errors
///
/// Returns a [`PriceError`] if any product's revenue contribution or the
/// running total overflows.
pub fn fleet_totals(products: &[Product]) -> Result<FleetTotals, PriceError> {
    let mut totals = FleetTotals {
        total_sales: 0,
        total_stock: 0,
        total_revenue: 0,
        product_count: products.len(),
    };

    for product in products {
        let sold = product.total_sales();

        totals.total_sales = totals.total_sales.saturating_add(sold);
        totals.total_stock = totals.total_stock.saturating_add(product.stock);

        let contribution = pricing::revenue(product.price, product.discount, sold)?;
        totals.total_revenue = totals
            .total_revenue
            .checked_add(contribution)
            .ok_or(PriceError::AmountOverflow)?;
    }

    Ok(totals)
}

/// Sum reported sales per group key, preserving first-encountered order.
pub fn grouped_breakdown<F>(products: &[Product], key: F) -> Vec<BreakdownEntry>
where
    F: Fn(&Product) -> String,
{
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();
    let mut entries: Vec<BreakdownEntry> = Vec::new();

    for product in products {
        let label = key(product);
        let sales = product.total_sales();

        if let Some(&position) = positions.get(&label) {
            if let Some(entry) = entries.get_mut(position) {
                entry.sales = entry.sales.saturating_add(sales);
            }
        } else {
            positions.insert(label.clone(), entries.len());
            entries.push(BreakdownEntry { label, sales });
        }
    }

    entries
}

/// Sales per category; products without one land in "Uncategorized".
#[must_use]
pub fn sales_by_category(products: &[Product]) -> Vec<BreakdownEntry> {
    grouped_breakdown(products, |product| {
        fallback_label(&product.category, UNCATEGORIZED)
    })
}

/// Sales per brand; products without one land in "Unknown".
#[must_use]
pub fn sales_by_brand(products: &[Product]) -> Vec<BreakdownEntry> {
    grouped_breakdown(products, |product| {
        fallback_label(&product.brand, UNKNOWN_BRAND)
    })
}

/// Sales per price band, classified over the final (discounted) price.
///
/// Every band appears in the result, zero-filled when empty, in ascending
/// band order.
///
/// # Errors
///
/// Returns a [`PriceError`] if a product's final price cannot be computed.
pub fn sales_by_price_band(products: &[Product]) -> Result<Vec<BreakdownEntry>, PriceError> {
    let mut sums: FxHashMap<PriceBand, u64> = FxHashMap::default();

    for product in products {
        let final_price = pricing::final_price(product.price, product.discount)?;
        let sum = sums.entry(PriceBand::classify(final_price)).or_default();
        *sum = sum.saturating_add(product.total_sales());
    }

    Ok(band_entries(&PriceBand::ALL, &sums))
}

/// Sales per discount band. Every band appears, zero-filled when empty.
#[must_use]
pub fn sales_by_discount_band(products: &[Product]) -> Vec<BreakdownEntry> {
    let mut sums: FxHashMap<DiscountBand, u64> = FxHashMap::default();

    for product in products {
        let sum = sums.entry(DiscountBand::classify(product.discount)).or_default();
        *sum = sum.saturating_add(product.total_sales());
    }

    band_entries(&DiscountBand::ALL, &sums)
}

/// Keep the `n` biggest buckets and fold the rest into `Others`.
///
/// The output values sum exactly to the input total; ties rank in
/// first-encountered order, and the `Others` bucket is always present,
/// even when its residual is zero.
#[must_use]
pub fn top_with_overflow(entries: &[BreakdownEntry], n: usize) -> Vec<BreakdownEntry> {
    let total: u64 = entries
        .iter()
        .fold(0u64, |sum, entry| sum.saturating_add(entry.sales));

    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales));
    ranked.truncate(n);

    let kept: u64 = ranked
        .iter()
        .fold(0u64, |sum, entry| sum.saturating_add(entry.sales));

    ranked.push(BreakdownEntry {
        label: OTHERS.to_string(),
        sales: total.saturating_sub(kept),
    });

    ranked
}

/// Products ranked by reported sales, best first, capped at `limit`.
#[must_use]
pub fn top_sellers(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();

    ranked.sort_by(|a, b| b.total_sales().cmp(&a.total_sales()));
    ranked.truncate(limit);

    ranked
}

/// Products below the stock threshold, most depleted first.
///
/// The comparison is strict: a product holding exactly `threshold` units
/// does not qualify. Equal stock levels keep their input order.
#[must_use]
pub fn ranked_low_stock(products: &[Product], threshold: u64) -> Vec<&Product> {
    let mut low: Vec<&Product> = products
        .iter()
        .filter(|product| product.stock < threshold)
        .collect();

    low.sort_by_key(|product| product.stock);

    low
}

/// Case-insensitive substring filter over name, brand and category.
///
/// A blank or whitespace-only query returns every product in its original
/// order.
#[must_use]
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim();

    if query.is_empty() {
        return products.iter().collect();
    }

    let query = query.to_lowercase();

    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&query)
                || product.brand.to_lowercase().contains(&query)
                || product.category.to_lowercase().contains(&query)
        })
        .collect()
}

/// Use `fallback` when the stored label is blank.
fn fallback_label(label: &str, fallback: &str) -> String {
    let trimmed = label.trim();

    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Materialize band sums in fixed band order, zero-filling empty bands.
fn band_entries<B>(order: &[B], sums: &FxHashMap<B, u64>) -> Vec<BreakdownEntry>
where
    B: Copy + Eq + std::hash::Hash + std::fmt::Display,
{
    order
        .iter()
        .map(|band| BreakdownEntry {
            label: band.to_string(),
            sales: sums.get(band).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::products::{ProductUuid, SalesRecord};

    use super::*;

    fn product(name: &str, brand: &str, category: &str, sales: u64) -> Product {
        Product {
            id: ProductUuid::new(),
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            price: 2500_00,
            discount: Decimal::ZERO,
            stock: 10,
            sales,
            sales_history: Vec::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn fleet_totals_combine_counter_and_ledger_products() -> TestResult {
        let mut ledgered = product("Pegasus", "Nike", "Running", 100);
        ledgered.sales_history = vec![
            SalesRecord {
                sales: 5,
                price: 2500_00,
                discount: Decimal::ZERO,
                timestamp: Timestamp::UNIX_EPOCH,
            },
            SalesRecord {
                sales: 7,
                price: 2500_00,
                discount: Decimal::ZERO,
                timestamp: Timestamp::UNIX_EPOCH,
            },
        ];

        let bare = product("Samba", "Adidas", "Casual", 4);
        let totals = fleet_totals(&[ledgered, bare])?;

        // 5 + 7 from the ledger, 4 from the bare counter.
        assert_eq!(totals.total_sales, 16);
        assert_eq!(totals.total_stock, 20);
        assert_eq!(totals.product_count, 2);
        // All sales at the undiscounted ₹2500 price.
        assert_eq!(totals.total_revenue, 16 * 2500_00);

        Ok(())
    }

    #[test]
    fn breakdown_groups_in_first_encountered_order() {
        let products = vec![
            product("A", "Nike", "Running", 3),
            product("B", "Adidas", "Casual", 2),
            product("C", "Nike", "Running", 5),
        ];

        let breakdown = sales_by_brand(&products);

        assert_eq!(
            breakdown,
            vec![
                BreakdownEntry {
                    label: "Nike".to_string(),
                    sales: 8
                },
                BreakdownEntry {
                    label: "Adidas".to_string(),
                    sales: 2
                },
            ]
        );
    }

    #[test]
    fn blank_category_lands_in_uncategorized() {
        let products = vec![product("A", "Nike", "  ", 3)];
        let breakdown = sales_by_category(&products);

        assert_eq!(
            breakdown,
            vec![BreakdownEntry {
                label: UNCATEGORIZED.to_string(),
                sales: 3
            }]
        );
    }

    #[test]
    fn price_bands_use_the_discounted_price() -> TestResult {
        // ₹2500 at 25% off is ₹1875, which belongs in the lowest band.
        let mut discounted = product("A", "Nike", "Running", 6);
        discounted.discount = Decimal::from(25);

        let breakdown = sales_by_price_band(&[discounted])?;
        let lowest = breakdown.first();

        assert!(
            matches!(lowest, Some(entry) if entry.sales == 6),
            "expected the ₹0-2000 band to hold the sales: {breakdown:?}"
        );

        Ok(())
    }

    #[test]
    fn empty_bands_are_zero_filled() -> TestResult {
        let breakdown = sales_by_price_band(&[])?;

        assert_eq!(breakdown.len(), 5, "all bands present");
        assert!(breakdown.iter().all(|entry| entry.sales == 0));

        Ok(())
    }

    #[test]
    fn top_with_overflow_sums_to_the_ungrouped_total() {
        let entries = [
            BreakdownEntry { label: "A".to_string(), sales: 50 },
            BreakdownEntry { label: "B".to_string(), sales: 30 },
            BreakdownEntry { label: "C".to_string(), sales: 10 },
            BreakdownEntry { label: "D".to_string(), sales: 5 },
            BreakdownEntry { label: "E".to_string(), sales: 5 },
        ];

        let ranked = top_with_overflow(&entries, TOP_BRAND_GROUPS);
        let labels: Vec<&str> = ranked.iter().map(|entry| entry.label.as_str()).collect();
        let total: u64 = ranked.iter().map(|entry| entry.sales).sum();

        assert_eq!(labels, ["A", "B", "C", "D", OTHERS]);
        assert_eq!(total, 100);
    }

    #[test]
    fn top_with_overflow_ties_rank_first_encountered() {
        let entries = [
            BreakdownEntry { label: "D".to_string(), sales: 5 },
            BreakdownEntry { label: "E".to_string(), sales: 5 },
        ];

        let ranked = top_with_overflow(&entries, 1);
        let first = ranked.first();

        assert!(
            matches!(first, Some(entry) if entry.label == "D"),
            "stable sort keeps D ahead of E: {ranked:?}"
        );
    }

    #[test]
    fn others_bucket_is_present_even_when_empty() {
        let entries = [BreakdownEntry { label: "A".to_string(), sales: 9 }];
        let ranked = top_with_overflow(&entries, TOP_BRAND_GROUPS);
        let last = ranked.last();

        assert!(
            matches!(last, Some(entry) if entry.label == OTHERS && entry.sales == 0),
            "residual bucket always closes the ranking: {ranked:?}"
        );
    }

    #[test]
    fn low_stock_is_strict_and_ascending() {
        let stocks = [20u64, 3, 15, 0, 14];
        let products: Vec<Product> = stocks
            .iter()
            .map(|&stock| {
                let mut p = product("A", "Nike", "Running", 1);
                p.stock = stock;
                p
            })
            .collect();

        let low = ranked_low_stock(&products, LOW_STOCK_THRESHOLD);
        let levels: Vec<u64> = low.iter().map(|p| p.stock).collect();

        assert_eq!(levels, [0, 3, 14], "15 sits on the boundary and is excluded");
    }

    #[test]
    fn top_sellers_ranks_descending_and_caps() {
        let products = vec![
            product("A", "Nike", "Running", 2),
            product("B", "Adidas", "Casual", 9),
            product("C", "Puma", "Casual", 5),
        ];

        let ranked = top_sellers(&products, 2);
        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["B", "C"]);
    }

    #[test]
    fn search_blank_query_is_identity() {
        let products = vec![
            product("A", "Nike", "Running", 1),
            product("B", "Adidas", "Casual", 1),
        ];

        let found = search(&products, "   ");
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["A", "B"], "order preserved, nothing filtered");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let products = vec![
            product("Air Max", "Nike", "Running", 1),
            product("Gazelle", "Adidas", "Casual", 1),
        ];

        let by_brand = search(&products, "nik");
        let by_category = search(&products, "CASUAL");

        assert_eq!(by_brand.len(), 1);
        assert_eq!(by_category.len(), 1);
    }
}
