//! Checkout Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument as _, info, info_span};
use uuid::Uuid;

use stayshop_app::domain::orders::{
    data::NewOrder,
    records::{ContactInfo, OrderUuid},
};

use crate::{extensions::*, orders::errors::into_status_error};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    pub customer_name: String,
    pub customer_phone: String,

    #[serde(default)]
    pub customer_email: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl CheckoutRequest {
    fn into_new_order(self) -> Result<NewOrder, StatusError> {
        let name = self.customer_name.trim();
        let phone = self.customer_phone.trim();

        if name.is_empty() || phone.is_empty() {
            return Err(
                StatusError::bad_request().brief("customer_name and customer_phone are required")
            );
        }

        Ok(NewOrder {
            uuid: OrderUuid::new(),
            contact: ContactInfo {
                name: name.to_string(),
                phone: phone.to_string(),
                email: non_blank(self.customer_email),
            },
            notes: non_blank(self.notes),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderPlacedResponse {
    pub order_id: Uuid,

    /// Human-readable, `ORD-YYYYMMDD-XXXXXXXXXX`
    pub order_number: String,

    pub total_amount: u64,
    pub created_at: String,
}

/// Checkout Handler
///
/// Places an order for everything in the customer's cart and empties it.
/// Room lines become bookings without re-checking availability.
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    security(("customer_id" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or invalid contact details"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing customer"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderPlacedResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let customer = depot.customer_or_401()?;

    let order = json.into_inner().into_new_order()?;

    let placed = state
        .app
        .orders
        .checkout(customer, order)
        .instrument(info_span!("orders.checkout", %customer))
        .await
        .map_err(into_status_error)?;

    info!(
        %customer,
        order = %placed.uuid,
        order_number = %placed.order_number,
        "checkout completed"
    );

    res.status_code(StatusCode::CREATED);

    Ok(Json(OrderPlacedResponse {
        order_id: placed.uuid.into(),
        order_number: placed.order_number,
        total_amount: placed.total_amount,
        created_at: placed.created_at.to_string(),
    }))
}
