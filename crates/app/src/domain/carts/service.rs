//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartLine,
            errors::CartsServiceError,
            records::{CartLineAdded, CartLineUuid, CartRecord},
            repositories::{PgCartCatalogRepository, PgCartLinesRepository, PricedLineRow},
        },
        customers::CustomerUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    lines_repository: PgCartLinesRepository,
    catalog_repository: PgCartCatalogRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            lines_repository: PgCartLinesRepository::new(),
            catalog_repository: PgCartCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_line(
        &self,
        customer: CustomerUuid,
        line: NewCartLine,
    ) -> Result<CartLineAdded, CartsServiceError> {
        if line.quantity == 0 || i32::try_from(line.quantity).is_err() {
            return Err(CartsServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        if !self.catalog_repository.is_listed(&mut tx, &line.item).await? {
            return Err(CartsServiceError::ItemNotFound);
        }

        let added = self
            .lines_repository
            .upsert_line(&mut tx, customer, line)
            .await?;

        tx.commit().await?;

        Ok(added)
    }

    async fn list_lines(&self, customer: CustomerUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows = self
            .lines_repository
            .list_priced_lines(&mut tx, customer)
            .await?;

        tx.commit().await?;

        let lines = rows
            .into_iter()
            .map(PricedLineRow::into_priced)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CartRecord::from_lines(lines)?)
    }

    async fn remove_line(
        &self,
        customer: CustomerUuid,
        line: CartLineUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .lines_repository
            .delete_line(&mut tx, customer, line)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn clear(&self, customer: CustomerUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let removed = self
            .lines_repository
            .delete_customer_lines(&mut tx, customer)
            .await?;

        tx.commit().await?;

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Adds an item to the customer's cart, incrementing an identical line if
    /// one exists.
    async fn add_line(
        &self,
        customer: CustomerUuid,
        line: NewCartLine,
    ) -> Result<CartLineAdded, CartsServiceError>;

    /// Lists the customer's lines priced at current catalog values.
    async fn list_lines(&self, customer: CustomerUuid) -> Result<CartRecord, CartsServiceError>;

    /// Removes one line owned by the customer.
    async fn remove_line(
        &self,
        customer: CustomerUuid,
        line: CartLineUuid,
    ) -> Result<(), CartsServiceError>;

    /// Removes every line in the customer's cart, returning how many were
    /// removed.
    async fn clear(&self, customer: CustomerUuid) -> Result<u64, CartsServiceError>;
}
