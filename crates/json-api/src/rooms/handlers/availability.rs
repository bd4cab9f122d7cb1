//! Room Availability Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayshop_app::domain::rooms::records::Availability;

use crate::{extensions::*, rooms::errors::into_status_error};

/// Check Availability Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckAvailabilityRequest {
    pub room_uuid: Uuid,

    /// `YYYY-MM-DD`
    pub check_in_date: String,

    /// `YYYY-MM-DD`, exclusive
    pub check_out_date: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AvailabilityResponse {
    pub available: bool,
    pub room_uuid: Uuid,
    pub check_in_date: String,
    pub check_out_date: String,

    /// Confirmed or checked-in bookings overlapping the stay
    pub conflicting_bookings: u64,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        Self {
            available: availability.available,
            room_uuid: availability.room.into(),
            check_in_date: availability.stay.check_in.to_string(),
            check_out_date: availability.stay.check_out.to_string(),
            conflicting_bookings: availability.conflicting_bookings,
        }
    }
}

/// Check Availability Handler
///
/// Advisory only: checkout does not re-check, so two overlapping orders can
/// both succeed.
#[endpoint(
    tags("rooms"),
    summary = "Check Room Availability",
    responses(
        (status_code = StatusCode::OK, description = "Availability computed"),
        (status_code = StatusCode::NOT_FOUND, description = "Room not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckAvailabilityRequest>,
    depot: &mut Depot,
) -> Result<Json<AvailabilityResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();
    let stay = parse_stay(&request.check_in_date, &request.check_out_date)?;

    let availability = state
        .app
        .rooms
        .check_availability(request.room_uuid.into(), stay)
        .await
        .map_err(into_status_error)?;

    Ok(Json(availability.into()))
}
