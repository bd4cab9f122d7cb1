//! Remove Cart Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::{Instrument as _, info, info_span};
use uuid::Uuid;

use crate::{cart::errors::into_status_error, extensions::*};

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    security(("customer_id" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    line: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let customer = depot.customer_or_401()?;

    let line = line.into_inner();

    state
        .app
        .carts
        .remove_line(customer, line.into())
        .instrument(info_span!("cart.remove", %customer, cart_item = %line))
        .await
        .map_err(into_status_error)?;

    info!(%customer, cart_item = %line, "cart item removed");

    Ok(StatusCode::OK)
}
