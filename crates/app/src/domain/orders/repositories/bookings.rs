//! Room Bookings Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    columns::{count_param, date_param, try_get_count, try_get_stay, try_get_timestamp},
    orders::records::{
        BookingStatus, OrderLineUuid, OrderUuid, RoomBookingRecord, RoomBookingUuid,
    },
    rooms::records::RoomUuid,
    stays::StayRange,
};

const INSERT_ROOM_BOOKING_SQL: &str = include_str!("../sql/insert_room_booking.sql");
const CANCEL_ORDER_BOOKINGS_SQL: &str = include_str!("../sql/cancel_order_bookings.sql");
const LIST_ORDER_BOOKINGS_SQL: &str = include_str!("../sql/list_order_bookings.sql");

#[derive(Debug, Clone, Copy)]
pub(crate) struct NewRoomBooking {
    pub(crate) uuid: RoomBookingUuid,
    pub(crate) room: RoomUuid,
    pub(crate) order: OrderUuid,
    pub(crate) order_line: OrderLineUuid,
    pub(crate) stay: StayRange,
    pub(crate) guest_count: u32,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRoomBookingsRepository;

impl PgRoomBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: NewRoomBooking,
    ) -> Result<RoomBookingRecord, sqlx::Error> {
        let guest_count = count_param(booking.guest_count, "guest_count")?;

        query_as::<Postgres, RoomBookingRecord>(INSERT_ROOM_BOOKING_SQL)
            .bind(booking.uuid.into_uuid())
            .bind(booking.room.into_uuid())
            .bind(booking.order.into_uuid())
            .bind(booking.order_line.into_uuid())
            .bind(date_param(booking.stay.check_in))
            .bind(date_param(booking.stay.check_out))
            .bind(guest_count)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn cancel_order_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CANCEL_ORDER_BOOKINGS_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[Uuid],
    ) -> Result<Vec<RoomBookingRecord>, sqlx::Error> {
        query_as::<Postgres, RoomBookingRecord>(LIST_ORDER_BOOKINGS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RoomBookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: RoomBookingUuid::from_uuid(row.try_get("uuid")?),
            room: RoomUuid::from_uuid(row.try_get("room_uuid")?),
            order: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            order_line: OrderLineUuid::from_uuid(row.try_get("order_line_uuid")?),
            stay: try_get_stay(row)?,
            guest_count: try_get_count(row, "guest_count")?,
            status: status
                .parse::<BookingStatus>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "status".to_string(),
                    source: Box::new(e),
                })?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
