//! Update Order Status Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument as _, info, info_span};
use uuid::Uuid;

use stayshop_app::domain::orders::{data::OrderStatusUpdate, records::OrderStatus};

use crate::{extensions::*, orders::errors::into_status_error};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderStatusRequest {
    /// `pending`, `confirmed`, `cancelled` or `completed`
    pub status: String,

    /// Replaces the stored notes when present
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderStatusResponse {
    pub order_id: Uuid,
    pub status: String,
}

/// Update Order Status Handler
///
/// Cancelling an order also cancels its room bookings. Orders that are
/// cancelled or completed cannot move to another status.
#[endpoint(
    tags("admin"),
    summary = "Update Order Status",
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Transition not allowed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderStatusResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let order = order.into_inner();
    let request = json.into_inner();

    let status: OrderStatus = request.status.trim().parse().or_400("invalid status")?;

    let updated = state
        .app
        .orders
        .update_status(
            order.into(),
            OrderStatusUpdate {
                status,
                notes: request.notes,
            },
        )
        .instrument(info_span!("orders.update_status", %order, %status))
        .await
        .map_err(into_status_error)?;

    info!(%order, status = %updated.status, "order status updated");

    Ok(Json(OrderStatusResponse {
        order_id: updated.uuid.into(),
        status: updated.status.to_string(),
    }))
}
