//! Cart Lines Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    carts::{
        data::NewCartLine,
        records::{CartItem, CartLineAdded, CartLineRecord, CartLineUuid, PricedCartLine},
    },
    columns::{
        count_param, date_param, missing_column, try_get_amount, try_get_count, try_get_item_kind,
        try_get_stay, try_get_timestamp,
    },
    customers::CustomerUuid,
    items::ItemKind,
    pricing::PricingError,
    products::records::ProductUuid,
    rooms::records::RoomUuid,
};

const LIST_PRICED_LINES_SQL: &str = include_str!("../sql/list_priced_lines.sql");
const UPSERT_LINE_SQL: &str = include_str!("../sql/upsert_line.sql");
const DELETE_LINE_SQL: &str = include_str!("../sql/delete_line.sql");
const DELETE_CUSTOMER_LINES_SQL: &str = include_str!("../sql/delete_customer_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_priced_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<PricedLineRow>, sqlx::Error> {
        query_as::<Postgres, PricedLineRow>(LIST_PRICED_LINES_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn upsert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        line: NewCartLine,
    ) -> Result<CartLineAdded, sqlx::Error> {
        let quantity = count_param(line.quantity, "quantity")?;

        let (room, product, check_in, check_out) = match line.item {
            CartItem::Room { room, stay } => (
                Some(room.into_uuid()),
                None,
                Some(date_param(stay.check_in)),
                Some(date_param(stay.check_out)),
            ),
            CartItem::Product { product } => (None, Some(product.into_uuid()), None, None),
        };

        let row = query(UPSERT_LINE_SQL)
            .bind(line.uuid.into_uuid())
            .bind(customer.into_uuid())
            .bind(line.item.kind().as_str())
            .bind(room)
            .bind(product)
            .bind(check_in)
            .bind(check_out)
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await?;

        Ok(CartLineAdded {
            uuid: CartLineUuid::from_uuid(row.try_get("uuid")?),
            quantity: try_get_count(&row, "quantity")?,
            created: row.try_get("inserted")?,
        })
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        line: CartLineUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINE_SQL)
            .bind(line.into_uuid())
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_customer_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CUSTOMER_LINES_SQL)
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// A cart line joined with its catalog row, not yet priced.
#[derive(Debug, Clone)]
pub(crate) struct PricedLineRow {
    pub(crate) line: CartLineRecord,
    pub(crate) item_name: String,
    pub(crate) unit_price: u64,
    pub(crate) images: Vec<String>,
}

impl PricedLineRow {
    pub(crate) fn into_priced(self) -> Result<PricedCartLine, PricingError> {
        PricedCartLine::price(self.line, self.item_name, self.unit_price, self.images)
    }
}

impl<'r> FromRow<'r, PgRow> for PricedLineRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            line: CartLineRecord {
                uuid: CartLineUuid::from_uuid(row.try_get("uuid")?),
                customer: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
                item: try_get_cart_item(row)?,
                quantity: try_get_count(row, "quantity")?,
                created_at: try_get_timestamp(row, "created_at")?,
                updated_at: try_get_timestamp(row, "updated_at")?,
            },
            item_name: row.try_get("item_name")?,
            unit_price: try_get_amount(row, "unit_price")?,
            images: row.try_get("images")?,
        })
    }
}

fn try_get_cart_item(row: &PgRow) -> Result<CartItem, sqlx::Error> {
    match try_get_item_kind(row)? {
        ItemKind::Room => {
            let room: Option<Uuid> = row.try_get("room_uuid")?;

            Ok(CartItem::Room {
                room: RoomUuid::from_uuid(room.ok_or_else(|| missing_column("room_uuid"))?),
                stay: try_get_stay(row)?,
            })
        }
        ItemKind::Product => {
            let product: Option<Uuid> = row.try_get("product_uuid")?;

            Ok(CartItem::Product {
                product: ProductUuid::from_uuid(
                    product.ok_or_else(|| missing_column("product_uuid"))?,
                ),
            })
        }
    }
}
