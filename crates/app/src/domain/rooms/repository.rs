//! Rooms Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    columns::{
        amount_param, count_param, date_param, try_get_amount, try_get_count, try_get_timestamp,
    },
    rooms::{
        data::NewRoom,
        records::{RoomRecord, RoomUuid},
    },
    stays::StayRange,
};

const LIST_ROOMS_SQL: &str = include_str!("sql/list_rooms.sql");
const GET_ROOM_SQL: &str = include_str!("sql/get_room.sql");
const CREATE_ROOM_SQL: &str = include_str!("sql/create_room.sql");
const COUNT_CONFLICTING_BOOKINGS_SQL: &str = include_str!("sql/count_conflicting_bookings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRoomsRepository;

impl PgRoomsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_rooms(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<RoomRecord>, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(LIST_ROOMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: RoomUuid,
    ) -> Result<RoomRecord, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(GET_ROOM_SQL)
            .bind(room.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: NewRoom,
    ) -> Result<RoomRecord, sqlx::Error> {
        let price_per_night = amount_param(room.price_per_night, "price_per_night")?;
        let max_occupancy = count_param(room.max_occupancy, "max_occupancy")?;

        query_as::<Postgres, RoomRecord>(CREATE_ROOM_SQL)
            .bind(room.uuid.into_uuid())
            .bind(room.room_number)
            .bind(room.room_type)
            .bind(room.title)
            .bind(room.description)
            .bind(price_per_night)
            .bind(max_occupancy)
            .bind(room.amenities)
            .bind(room.images)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_conflicting_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: RoomUuid,
        stay: StayRange,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_CONFLICTING_BOOKINGS_SQL)
            .bind(room.into_uuid())
            .bind(date_param(stay.check_in))
            .bind(date_param(stay.check_out))
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "conflicting_bookings".to_string(),
            source: Box::new(e),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for RoomRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RoomUuid::from_uuid(row.try_get("uuid")?),
            room_number: row.try_get("room_number")?,
            room_type: row.try_get("room_type")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            price_per_night: try_get_amount(row, "price_per_night")?,
            max_occupancy: try_get_count(row, "max_occupancy")?,
            amenities: row.try_get("amenities")?,
            images: row.try_get("images")?,
            is_available: row.try_get("is_available")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
