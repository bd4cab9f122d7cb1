//! Cart Catalog Repository

use sqlx::{Postgres, Transaction, query_scalar};

use crate::domain::carts::records::CartItem;

const ROOM_IS_LISTED_SQL: &str = include_str!("../sql/room_is_listed.sql");
const PRODUCT_IS_LISTED_SQL: &str = include_str!("../sql/product_is_listed.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartCatalogRepository;

impl PgCartCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Whether the item exists and can be put in a cart: rooms must be
    /// available, products active.
    pub(crate) async fn is_listed(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &CartItem,
    ) -> Result<bool, sqlx::Error> {
        let (sql, uuid) = match item {
            CartItem::Room { room, .. } => (ROOM_IS_LISTED_SQL, room.into_uuid()),
            CartItem::Product { product } => (PRODUCT_IS_LISTED_SQL, product.into_uuid()),
        };

        query_scalar(sql).bind(uuid).fetch_one(&mut **tx).await
    }
}
