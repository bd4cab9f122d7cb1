//! Notification payloads.

use jiff::civil::Date;
use serde::Serialize;

use crate::domain::{
    items::ItemKind,
    orders::records::{OrderItem, OrderRecord, OrderStatus},
};

/// Body posted to the email service for a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderNotification {
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub items: Vec<NotificationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationItem {
    pub item_type: ItemKind,
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub total_price: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
}

impl OrderNotification {
    /// Whether the customer gave an email to send a confirmation to.
    #[must_use]
    pub fn has_customer_email(&self) -> bool {
        self.customer_email
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty())
    }
}

impl From<&OrderRecord> for OrderNotification {
    fn from(order: &OrderRecord) -> Self {
        Self {
            order_number: order.order_number.clone(),
            customer_name: order.contact.name.clone(),
            customer_phone: order.contact.phone.clone(),
            customer_email: order.contact.email.clone(),
            total_amount: order.total_amount,
            status: order.status,
            items: order
                .lines
                .iter()
                .map(|line| {
                    let (stay, nights) = match line.item {
                        OrderItem::Room { stay, nights, .. } => (Some(stay), Some(nights)),
                        OrderItem::Product { .. } => (None, None),
                    };

                    NotificationItem {
                        item_type: line.item.kind(),
                        item_name: line.item_name.clone(),
                        quantity: line.quantity,
                        unit_price: line.unit_price,
                        total_price: line.total,
                        check_in_date: stay.map(|stay| stay.check_in),
                        check_out_date: stay.map(|stay| stay.check_out),
                        nights,
                    }
                })
                .collect(),
        }
    }
}
