//! Rooms service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        rooms::{
            data::NewRoom,
            errors::RoomsServiceError,
            records::{Availability, RoomRecord, RoomUuid},
            repository::PgRoomsRepository,
        },
        stays::StayRange,
    },
};

#[derive(Debug, Clone)]
pub struct PgRoomsService {
    db: Db,
    repository: PgRoomsRepository,
}

impl PgRoomsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRoomsRepository::new(),
        }
    }
}

#[async_trait]
impl RoomsService for PgRoomsService {
    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rooms = self.repository.list_rooms(&mut tx).await?;

        tx.commit().await?;

        Ok(rooms)
    }

    async fn get_room(&self, room: RoomUuid) -> Result<RoomRecord, RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let room = self.repository.get_room(&mut tx, room).await?;

        tx.commit().await?;

        Ok(room)
    }

    async fn create_room(&self, room: NewRoom) -> Result<RoomRecord, RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_room(&mut tx, room).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn check_availability(
        &self,
        room: RoomUuid,
        stay: StayRange,
    ) -> Result<Availability, RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        // Surfaces NotFound for unknown rooms before counting.
        self.repository.get_room(&mut tx, room).await?;

        let conflicting = self
            .repository
            .count_conflicting_bookings(&mut tx, room, stay)
            .await?;

        tx.commit().await?;

        Ok(Availability::from_conflicts(room, stay, conflicting))
    }
}

#[automock]
#[async_trait]
pub trait RoomsService: Send + Sync {
    /// Lists rooms flagged as available, ordered by room number.
    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsServiceError>;

    /// Retrieve a single room, available or not.
    async fn get_room(&self, room: RoomUuid) -> Result<RoomRecord, RoomsServiceError>;

    /// Creates a room. Room numbers are unique.
    async fn create_room(&self, room: NewRoom) -> Result<RoomRecord, RoomsServiceError>;

    /// Counts active bookings overlapping the stay. Advisory only; checkout
    /// does not re-check.
    async fn check_availability(
        &self,
        room: RoomUuid,
        stay: StayRange,
    ) -> Result<Availability, RoomsServiceError>;
}
