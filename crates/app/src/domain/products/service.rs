//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{CategorySummary, ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .repository
            .list_products(&mut tx, category.as_deref())
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn list_categories(&self) -> Result<Vec<CategorySummary>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves active products, optionally limited to one category.
    async fn list_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single active product.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Lists categories that have active products, with their counts.
    async fn list_categories(&self) -> Result<Vec<CategorySummary>, ProductsServiceError>;

    /// Creates a new active product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_product, deactivate_product, new_product},
    };

    use super::*;

    #[tokio::test]
    async fn create_product_returns_stored_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(NewProduct {
                uuid,
                stock_quantity: 12,
                ..new_product("Robe", "spa", 45_00)
            })
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.name, "Robe");
        assert_eq!(product.price, 45_00);
        assert_eq!(product.stock_quantity, 12);
        assert!(product.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Robe", "spa", 45_00).await?;

        let result = ctx
            .products
            .create_product(NewProduct {
                uuid: product.uuid,
                ..new_product("Slippers", "spa", 10_00)
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;
        let created = create_product(&ctx, "Robe", "spa", 45_00).await?;

        let product = ctx.products.get_product(created.uuid).await?;

        assert_eq!(product.uuid, created.uuid);
        assert_eq!(product.category, "spa");

        Ok(())
    }

    #[tokio::test]
    async fn get_product_inactive_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Robe", "spa", 45_00).await?;

        deactivate_product(&ctx, product.uuid).await?;

        let result = ctx.products.get_product(product.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_filters_by_category() -> TestResult {
        let ctx = TestContext::new().await;

        let robe = create_product(&ctx, "Robe", "spa", 45_00).await?;
        let candle = create_product(&ctx, "Candle", "spa", 12_00).await?;
        let wine = create_product(&ctx, "Wine", "minibar", 30_00).await?;

        let spa = ctx.products.list_products(Some("spa".to_string())).await?;
        let spa_uuids: Vec<ProductUuid> = spa.iter().map(|p| p.uuid).collect();

        assert_eq!(spa_uuids, vec![candle.uuid, robe.uuid]);

        let all = ctx.products.list_products(None).await?;
        let all_uuids: Vec<ProductUuid> = all.iter().map(|p| p.uuid).collect();

        assert_eq!(all_uuids, vec![wine.uuid, candle.uuid, robe.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_hides_inactive() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Robe", "spa", 45_00).await?;

        deactivate_product(&ctx, product.uuid).await?;

        let products = ctx.products.list_products(None).await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_categories_counts_active_products() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "Robe", "spa", 45_00).await?;
        create_product(&ctx, "Candle", "spa", 12_00).await?;
        create_product(&ctx, "Wine", "minibar", 30_00).await?;
        let hidden = create_product(&ctx, "Chips", "snacks", 3_00).await?;

        deactivate_product(&ctx, hidden.uuid).await?;

        let categories = ctx.products.list_categories().await?;

        assert_eq!(
            categories,
            vec![
                CategorySummary {
                    category: "minibar".to_string(),
                    product_count: 1,
                },
                CategorySummary {
                    category: "spa".to_string(),
                    product_count: 2,
                },
            ]
        );

        Ok(())
    }
}
