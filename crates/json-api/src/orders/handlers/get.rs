//! Get Order Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayshop_app::domain::orders::records::{
    OrderItem, OrderLineRecord, OrderRecord, RoomBookingRecord,
};

use crate::{extensions::*, orders::errors::into_status_error};

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,

    /// `room` or `product`
    pub item_type: String,

    pub item_id: Uuid,

    /// Name at the time of checkout
    pub item_name: String,

    pub quantity: u32,

    /// Price at the time of checkout, per night for rooms
    pub unit_price: u64,

    pub total_price: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,

    pub created_at: String,
}

impl From<OrderLineRecord> for OrderItemResponse {
    fn from(line: OrderLineRecord) -> Self {
        let item_type = line.item.kind().to_string();

        let (item_id, stay, nights) = match line.item {
            OrderItem::Room { room, stay, nights } => (room.into_uuid(), Some(stay), Some(nights)),
            OrderItem::Product { product } => (product.into_uuid(), None, None),
        };

        Self {
            uuid: line.uuid.into(),
            item_type,
            item_id,
            item_name: line.item_name,
            quantity: line.quantity,
            unit_price: line.unit_price,
            total_price: line.total,
            check_in_date: stay.map(|stay| stay.check_in.to_string()),
            check_out_date: stay.map(|stay| stay.check_out.to_string()),
            nights,
            created_at: line.created_at.to_string(),
        }
    }
}

/// Room Booking Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingResponse {
    pub uuid: Uuid,
    pub room_id: Uuid,
    pub order_item_id: Uuid,
    pub check_in_date: String,
    pub check_out_date: String,
    pub guest_count: u32,

    /// `confirmed`, `checked_in`, `checked_out` or `cancelled`
    pub status: String,
}

impl From<RoomBookingRecord> for BookingResponse {
    fn from(booking: RoomBookingRecord) -> Self {
        Self {
            uuid: booking.uuid.into(),
            room_id: booking.room.into(),
            order_item_id: booking.order_line.into(),
            check_in_date: booking.stay.check_in.to_string(),
            check_out_date: booking.stay.check_out.to_string(),
            guest_count: booking.guest_count,
            status: booking.status.as_str().to_string(),
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub order_number: String,

    /// Sum of line totals in pence/cents
    pub total_amount: u64,

    /// `pending`, `confirmed`, `cancelled` or `completed`
    pub status: String,

    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub bookings: Vec<BookingResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into(),
            order_number: order.order_number,
            total_amount: order.total_amount,
            status: order.status.to_string(),
            customer_name: order.contact.name,
            customer_phone: order.contact.phone,
            customer_email: order.contact.email,
            notes: order.notes,
            items: order.lines.into_iter().map(Into::into).collect(),
            bookings: order.bookings.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns one of the customer's orders with its lines.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("customer_id" = []))
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let customer = depot.customer_or_401()?;

    let order = state
        .app
        .orders
        .get_order(customer, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
