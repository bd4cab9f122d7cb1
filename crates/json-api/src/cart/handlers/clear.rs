//! Clear Cart Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{cart::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartClearedResponse {
    /// Lines removed; zero when the cart was already empty
    pub removed: u64,
}

/// Clear Cart Handler
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("customer_id" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartClearedResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let customer = depot.customer_or_401()?;

    let removed = state
        .app
        .carts
        .clear(customer)
        .await
        .map_err(into_status_error)?;

    info!(%customer, removed, "cart cleared");

    Ok(Json(CartClearedResponse { removed }))
}
