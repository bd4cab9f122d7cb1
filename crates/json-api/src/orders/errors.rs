//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use stayshop_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        OrdersServiceError::InvalidTransition { from, to } => {
            StatusError::conflict().brief(format!("Cannot change order status from {from} to {to}"))
        }
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => StatusError::bad_request().brief("Invalid order"),
        OrdersServiceError::Sql(source) => {
            error!("orders storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
