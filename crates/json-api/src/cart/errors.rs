//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use stayshop_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart item already exists"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Item not found"),
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart item"),
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
