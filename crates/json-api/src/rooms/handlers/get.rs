//! Get Room Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayshop_app::domain::rooms::records::RoomRecord;

use crate::{extensions::*, rooms::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoomResponse {
    /// The unique identifier of the room
    pub uuid: Uuid,

    pub room_number: String,
    pub room_type: String,
    pub title: String,
    pub description: String,

    /// Nightly rate in pence/cents
    pub price_per_night: u64,

    pub max_occupancy: u32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,

    /// Listing flag; bookings do not change it
    pub is_available: bool,

    pub created_at: String,
    pub updated_at: String,
}

impl From<RoomRecord> for RoomResponse {
    fn from(room: RoomRecord) -> Self {
        RoomResponse {
            uuid: room.uuid.into(),
            room_number: room.room_number,
            room_type: room.room_type,
            title: room.title,
            description: room.description,
            price_per_night: room.price_per_night,
            max_occupancy: room.max_occupancy,
            amenities: room.amenities,
            images: room.images,
            is_available: room.is_available,
            created_at: room.created_at.to_string(),
            updated_at: room.updated_at.to_string(),
        }
    }
}

/// Get Room Handler
///
/// Returns a room whether or not it is currently listed.
#[endpoint(
    tags("rooms"),
    summary = "Get Room",
    responses(
        (status_code = StatusCode::OK, description = "Room found"),
        (status_code = StatusCode::NOT_FOUND, description = "Room not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    room: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RoomResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let room = state
        .app
        .rooms
        .get_room(room.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(room.into()))
}
