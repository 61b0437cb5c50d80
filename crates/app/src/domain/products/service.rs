//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use kickcraft::{
    ledger,
    products::{NewProduct, Product, ProductUpdate, ProductUuid},
};

use crate::{
    domain::products::{errors::ProductsServiceError, repository::ProductsRepository},
    store::Store,
};

/// Catalogue service backed by the JSON document store.
#[derive(Debug, Clone)]
pub struct JsonProductsService {
    store: Store,
    repository: ProductsRepository,
}

impl JsonProductsService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: ProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for JsonProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let tx = self.store.begin()?;

        Ok(self.repository.list_products(&tx))
    }

    async fn get_product(&self, id: ProductUuid) -> Result<Product, ProductsServiceError> {
        let tx = self.store.begin()?;

        self.repository
            .get_product(&tx, id)
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(&self, new: NewProduct) -> Result<Product, ProductsServiceError> {
        new.validate()?;

        let mut tx = self.store.begin()?;
        let product = Product::create(ProductUuid::new(), new, Timestamp::now());

        self.repository.put_product(&mut tx, product.clone());
        tx.commit()?;

        tracing::info!(id = %product.id, name = %product.name, "product created");

        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        update.validate()?;

        // Current state is read and the commit made under one transaction,
        // so the field replacement and any ledger append become visible
        // together, and racing counter updates serialize.
        let mut tx = self.store.begin()?;

        let mut product = self
            .repository
            .get_product(&tx, id)
            .ok_or(ProductsServiceError::NotFound)?;

        let now = Timestamp::now();
        let plan = ledger::plan_update(&product, update, now);
        let appended = plan.appends_record();

        ledger::apply_update(&mut product, plan, now);
        self.repository.put_product(&mut tx, product.clone());
        tx.commit()?;

        tracing::info!(id = %product.id, appended, "product updated");

        Ok(product)
    }

    async fn delete_product(&self, id: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.store.begin()?;

        if self.repository.delete_product(&mut tx, id).is_none() {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit()?;

        tracing::info!(%id, "product deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in stable creation order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Create a product with a store-assigned id and an empty ledger.
    async fn create_product(&self, new: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replace every mutable field of a product, appending a ledger
    /// snapshot when the sales counter changed. Callers must resend the
    /// full current value of fields they do not intend to change.
    async fn update_product(
        &self,
        id: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Delete a product together with its entire sales ledger.
    async fn delete_product(&self, id: ProductUuid) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{TestContext, new_product, update_from};

    use super::*;

    #[tokio::test]
    async fn create_product_assigns_an_id_and_empty_ledger() -> TestResult {
        let ctx = TestContext::new()?;

        let product = ctx
            .products
            .create_product(new_product("Samba OG", "Adidas", 6599_00, 8, 0))
            .await?;

        assert_eq!(product.name, "Samba OG");
        assert!(product.sales_history.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(new_product("Clifton 9", "Hoka", 11995_00, 6, 0))
            .await?;

        let fetched = ctx.products.get_product(created.id).await?;

        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_rejects_blank_name() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx
            .products
            .create_product(new_product("  ", "Adidas", 6599_00, 8, 0))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn changed_sales_counter_appends_exactly_one_record() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(new_product("Pegasus 41", "Nike", 9295_00, 24, 0))
            .await?;

        let mut update = update_from(&created);
        update.sales = 5;

        let updated = ctx.products.update_product(created.id, update).await?;

        assert_eq!(updated.sales_history.len(), 1);
        assert_eq!(updated.total_sales(), 5);

        Ok(())
    }

    #[tokio::test]
    async fn resubmitted_sales_counter_never_grows_the_ledger() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(new_product("Pegasus 41", "Nike", 9295_00, 24, 7))
            .await?;

        // Same counter, different price and stock: fields move, ledger stays.
        let mut update = update_from(&created);
        update.price = 8995_00;
        update.stock = 20;

        let updated = ctx.products.update_product(created.id, update.clone()).await?;

        assert_eq!(updated.sales_history.len(), 0);
        assert_eq!(updated.price, 8995_00);

        let again = ctx.products.update_product(created.id, update).await?;

        assert_eq!(again.sales_history.len(), 0, "verbatim resubmission");

        Ok(())
    }

    #[tokio::test]
    async fn decreasing_the_counter_also_appends() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(new_product("RS-X Efekt", "Puma", 5299_00, 3, 9))
            .await?;

        let mut update = update_from(&created);
        update.sales = 4;

        let updated = ctx.products.update_product(created.id, update).await?;

        assert_eq!(updated.sales_history.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn snapshot_records_the_incoming_price_and_discount() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(new_product("Ultraboost", "Adidas", 7999_00, 12, 0))
            .await?;

        let mut update = update_from(&created);
        update.sales = 3;
        update.price = 7499_00;
        update.discount = Decimal::from(25);

        let updated = ctx.products.update_product(created.id, update).await?;
        let record = updated.sales_history.last();

        assert!(
            matches!(
                record,
                Some(r) if r.sales == 3 && r.price == 7499_00 && r.discount == Decimal::from(25)
            ),
            "snapshot: {record:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(new_product("Samba OG", "Adidas", 6599_00, 8, 0))
            .await?;

        let result = ctx
            .products
            .update_product(ProductUuid::new(), update_from(&created))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_out_of_range_discount() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(new_product("Samba OG", "Adidas", 6599_00, 8, 0))
            .await?;

        let mut update = update_from(&created);
        update.discount = Decimal::from(250);

        let result = ctx.products.update_product(created.id, update).await;

        assert!(
            matches!(result, Err(ProductsServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_the_product_and_its_ledger() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(new_product("Old Skool", "Vans", 3999_00, 14, 0))
            .await?;

        // Grow the ledger first so the delete provably takes it along.
        let mut update = update_from(&created);
        update.sales = 2;
        ctx.products.update_product(created.id, update).await?;

        ctx.products.delete_product(created.id).await?;

        let fetched = ctx.products.get_product(created.id).await;
        assert!(
            matches!(fetched, Err(ProductsServiceError::NotFound)),
            "expected NotFound after delete, got {fetched:?}"
        );

        let listed = ctx.products.list_products().await?;
        assert!(
            !listed.iter().any(|p| p.id == created.id),
            "deleted product must never reappear in a listing"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx.products.delete_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_keeps_creation_order() -> TestResult {
        let ctx = TestContext::new()?;

        for name in ["First", "Second", "Third"] {
            ctx.products
                .create_product(new_product(name, "Nike", 2500_00, 5, 0))
                .await?;
        }

        let listed = ctx.products.list_products().await?;
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["First", "Second", "Third"]);

        Ok(())
    }
}
