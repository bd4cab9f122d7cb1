//! Create Room Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument as _, info, info_span};
use uuid::Uuid;

use stayshop_app::domain::rooms::{data::NewRoom, records::RoomUuid};

use crate::{extensions::*, rooms::errors::into_status_error};

/// Create Room Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRoomRequest {
    /// Must be unique across rooms
    pub room_number: String,

    pub room_type: String,
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Nightly rate in pence/cents
    pub price_per_night: u64,

    pub max_occupancy: u32,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(request: CreateRoomRequest) -> Self {
        NewRoom {
            uuid: RoomUuid::new(),
            room_number: request.room_number,
            room_type: request.room_type,
            title: request.title,
            description: request.description,
            price_per_night: request.price_per_night,
            max_occupancy: request.max_occupancy,
            amenities: request.amenities,
            images: request.images,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoomCreatedResponse {
    pub room_id: Uuid,
    pub created_at: String,
}

/// Create Room Handler
#[endpoint(
    tags("admin"),
    summary = "Create Room",
    responses(
        (status_code = StatusCode::CREATED, description = "Room created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid room payload"),
        (status_code = StatusCode::CONFLICT, description = "Room number already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRoomRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RoomCreatedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let request = json.into_inner();

    if request.room_number.trim().is_empty() || request.max_occupancy == 0 {
        return Err(StatusError::bad_request().brief("Invalid room payload"));
    }

    let room_number = request.room_number.clone();

    let room = state
        .app
        .rooms
        .create_room(request.into())
        .instrument(info_span!("rooms.create", %room_number))
        .await
        .map_err(into_status_error)?;

    info!(room = %room.uuid, %room_number, "room created");

    res.add_header(LOCATION, format!("/rooms/{}", room.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(RoomCreatedResponse {
        room_id: room.uuid.into(),
        created_at: room.created_at.to_string(),
    }))
}
