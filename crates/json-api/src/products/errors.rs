//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use stayshop_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("products storage error: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
    }
}
