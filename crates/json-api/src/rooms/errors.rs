//! Room Errors

use salvo::http::StatusError;
use tracing::error;

use stayshop_app::domain::rooms::RoomsServiceError;

pub(crate) fn into_status_error(error: RoomsServiceError) -> StatusError {
    match error {
        RoomsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Room number already exists")
        }
        RoomsServiceError::NotFound => StatusError::not_found().brief("Room not found"),
        RoomsServiceError::InvalidReference
        | RoomsServiceError::MissingRequiredData
        | RoomsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid room payload")
        }
        RoomsServiceError::Sql(source) => {
            error!("rooms storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
