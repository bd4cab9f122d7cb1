//! Room Records

use jiff::Timestamp;

use crate::{domain::stays::StayRange, uuids::TypedUuid};

/// Room UUID
pub type RoomUuid = TypedUuid<RoomRecord>;

/// Room Record
#[derive(Debug, Clone)]
pub struct RoomRecord {
    pub uuid: RoomUuid,
    pub room_number: String,
    pub room_type: String,
    pub title: String,
    pub description: String,

    /// Nightly rate in minor units.
    pub price_per_night: u64,

    pub max_occupancy: u32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,

    /// Advisory listing flag. Bookings never clear it.
    pub is_available: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Outcome of an availability check for one room and stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub room: RoomUuid,
    pub stay: StayRange,
    pub available: bool,

    /// Active bookings (confirmed or checked in) overlapping the stay.
    pub conflicting_bookings: u64,
}

impl Availability {
    #[must_use]
    pub fn from_conflicts(room: RoomUuid, stay: StayRange, conflicting_bookings: u64) -> Self {
        Self {
            room,
            stay,
            available: conflicting_bookings == 0,
            conflicting_bookings,
        }
    }
}
