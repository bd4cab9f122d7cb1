//! Room Data

use crate::domain::rooms::records::RoomUuid;

/// New Room Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub uuid: RoomUuid,
    pub room_number: String,
    pub room_type: String,
    pub title: String,
    pub description: String,
    pub price_per_night: u64,
    pub max_occupancy: u32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}
