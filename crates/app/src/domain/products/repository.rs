//! Products Repository

use kickcraft::products::{Product, ProductUuid};

use crate::store::StoreTx;

/// Map-level operations over a store transaction.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProductsRepository;

impl ProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Every product, in stable creation order.
    pub(crate) fn list_products(&self, tx: &StoreTx<'_>) -> Vec<Product> {
        let mut products: Vec<Product> = tx.products().cloned().collect();

        products.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        products
    }

    pub(crate) fn get_product(&self, tx: &StoreTx<'_>, id: ProductUuid) -> Option<Product> {
        tx.get(id).cloned()
    }

    pub(crate) fn put_product(&self, tx: &mut StoreTx<'_>, product: Product) {
        tx.put(product);
    }

    /// Remove a product and its entire sales ledger in one step.
    pub(crate) fn delete_product(&self, tx: &mut StoreTx<'_>, id: ProductUuid) -> Option<Product> {
        tx.remove(id)
    }
}
