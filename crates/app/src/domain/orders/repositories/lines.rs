//! Order Lines Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    columns::{
        amount_param, count_param, date_param, missing_column, try_get_amount, try_get_count,
        try_get_item_kind, try_get_stay, try_get_timestamp,
    },
    items::ItemKind,
    orders::records::{OrderItem, OrderLineRecord, OrderLineUuid, OrderUuid},
    products::records::ProductUuid,
    rooms::records::RoomUuid,
};

const INSERT_ORDER_LINE_SQL: &str = include_str!("../sql/insert_order_line.sql");
const LIST_ORDER_LINES_SQL: &str = include_str!("../sql/list_order_lines.sql");

/// Snapshot of a priced cart line.
#[derive(Debug, Clone)]
pub(crate) struct NewOrderLine {
    pub(crate) uuid: OrderLineUuid,
    pub(crate) item: OrderItem,
    pub(crate) item_name: String,
    pub(crate) quantity: u32,
    pub(crate) unit_price: u64,
    pub(crate) total: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderLinesRepository;

impl PgOrderLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        line: NewOrderLine,
    ) -> Result<OrderLineRecord, sqlx::Error> {
        let quantity = count_param(line.quantity, "quantity")?;
        let unit_price = amount_param(line.unit_price, "unit_price")?;
        let total = amount_param(line.total, "total_price")?;

        let (room, product, check_in, check_out, nights) = match line.item {
            OrderItem::Room { room, stay, nights } => (
                Some(room.into_uuid()),
                None,
                Some(date_param(stay.check_in)),
                Some(date_param(stay.check_out)),
                Some(count_param(nights, "nights")?),
            ),
            OrderItem::Product { product } => (None, Some(product.into_uuid()), None, None, None),
        };

        query_as::<Postgres, OrderLineRecord>(INSERT_ORDER_LINE_SQL)
            .bind(line.uuid.into_uuid())
            .bind(order.into_uuid())
            .bind(line.item.kind().as_str())
            .bind(room)
            .bind(product)
            .bind(line.item_name)
            .bind(quantity)
            .bind(unit_price)
            .bind(total)
            .bind(check_in)
            .bind(check_out)
            .bind(nights)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[Uuid],
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        query_as::<Postgres, OrderLineRecord>(LIST_ORDER_LINES_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let item = match try_get_item_kind(row)? {
            ItemKind::Room => {
                let room: Option<Uuid> = row.try_get("room_uuid")?;
                let nights: Option<i32> = row.try_get("nights")?;
                let nights = nights.ok_or_else(|| missing_column("nights"))?;

                OrderItem::Room {
                    room: RoomUuid::from_uuid(room.ok_or_else(|| missing_column("room_uuid"))?),
                    stay: try_get_stay(row)?,
                    nights: u32::try_from(nights).map_err(|e| sqlx::Error::ColumnDecode {
                        index: "nights".to_string(),
                        source: Box::new(e),
                    })?,
                }
            }
            ItemKind::Product => {
                let product: Option<Uuid> = row.try_get("product_uuid")?;

                OrderItem::Product {
                    product: ProductUuid::from_uuid(
                        product.ok_or_else(|| missing_column("product_uuid"))?,
                    ),
                }
            }
        };

        Ok(Self {
            uuid: OrderLineUuid::from_uuid(row.try_get("uuid")?),
            order: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            item,
            item_name: row.try_get("item_name")?,
            quantity: try_get_count(row, "quantity")?,
            unit_price: try_get_amount(row, "unit_price")?,
            total: try_get_amount(row, "total_price")?,
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
