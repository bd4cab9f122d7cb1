//! Room Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, rooms::get::RoomResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoomsResponse {
    /// Listed rooms, ordered by room number
    pub rooms: Vec<RoomResponse>,

    pub count: usize,
}

/// Room Index Handler
///
/// Returns every room currently listed as available.
#[endpoint(tags("rooms"), summary = "List Rooms")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RoomsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let rooms: Vec<RoomResponse> = state
        .app
        .rooms
        .list_rooms()
        .await
        .or_500("failed to fetch rooms")?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(RoomsResponse {
        count: rooms.len(),
        rooms,
    }))
}
