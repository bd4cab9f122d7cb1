//! Products Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    columns::{amount_param, count_param, try_get_amount, try_get_count, try_get_timestamp},
    products::{
        data::NewProduct,
        records::{CategorySummary, ProductRecord, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: Option<&str>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(category)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CategorySummary>, sqlx::Error> {
        query_as::<Postgres, CategorySummary>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        let price = amount_param(product.price, "price")?;
        let stock_quantity = count_param(product.stock_quantity, "stock_quantity")?;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.name)
            .bind(product.description)
            .bind(price)
            .bind(product.category)
            .bind(stock_quantity)
            .bind(product.images)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            category: row.try_get("category")?,
            stock_quantity: try_get_count(row, "stock_quantity")?,
            images: row.try_get("images")?,
            is_active: row.try_get("is_active")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CategorySummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            category: row.try_get("category")?,
            product_count: try_get_amount(row, "product_count")?,
        })
    }
}
