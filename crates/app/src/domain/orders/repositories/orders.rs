//! Orders Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    columns::{amount_param, try_get_amount, try_get_timestamp},
    customers::CustomerUuid,
    orders::{
        data::OrderFilter,
        records::{ContactInfo, OrderRecord, OrderStatus, OrderUuid},
    },
};

const INSERT_ORDER_SQL: &str = include_str!("../sql/insert_order.sql");
const LIST_CUSTOMER_ORDERS_SQL: &str = include_str!("../sql/list_customer_orders.sql");
const GET_CUSTOMER_ORDER_SQL: &str = include_str!("../sql/get_customer_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const COUNT_ORDERS_SQL: &str = include_str!("../sql/count_orders.sql");
const LOCK_ORDER_STATUS_SQL: &str = include_str!("../sql/lock_order_status.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("../sql/update_order_status.sql");

/// Order header as written at checkout.
#[derive(Debug, Clone)]
pub(crate) struct NewOrderRow<'a> {
    pub(crate) uuid: OrderUuid,
    pub(crate) customer: CustomerUuid,
    pub(crate) order_number: &'a str,
    pub(crate) total_amount: u64,
    pub(crate) contact: &'a ContactInfo,
    pub(crate) notes: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewOrderRow<'_>,
    ) -> Result<OrderRecord, sqlx::Error> {
        let total_amount = amount_param(order.total_amount, "total_amount")?;

        query_as::<Postgres, OrderRecord>(INSERT_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.customer.into_uuid())
            .bind(order.order_number)
            .bind(total_amount)
            .bind(&order.contact.name)
            .bind(&order.contact.phone)
            .bind(order.contact.email.as_deref())
            .bind(order.notes)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_customer_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_CUSTOMER_ORDERS_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_customer_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_CUSTOMER_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(filter.status.map(OrderStatus::as_str))
            .bind(i64::from(filter.limit))
            .bind(i64::from(filter.offset))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: Option<OrderStatus>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_ORDERS_SQL)
            .bind(status.map(OrderStatus::as_str))
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }

    /// Read the current status and hold the row lock until the transaction
    /// ends.
    pub(crate) async fn lock_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderStatus, sqlx::Error> {
        let status: String = query_scalar(LOCK_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        parse_status(&status)
    }

    pub(crate) async fn update_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
        notes: Option<&str>,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .bind(notes)
            .fetch_one(&mut **tx)
            .await
    }
}

fn parse_status(status: &str) -> Result<OrderStatus, sqlx::Error> {
    status.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "status".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            customer: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            order_number: row.try_get("order_number")?,
            total_amount: try_get_amount(row, "total_amount")?,
            status: parse_status(&status)?,
            contact: ContactInfo {
                name: row.try_get("customer_name")?,
                phone: row.try_get("customer_phone")?,
                email: row.try_get("customer_email")?,
            },
            notes: row.try_get("notes")?,
            lines: Vec::new(),
            bookings: Vec::new(),
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
