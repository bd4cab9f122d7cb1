//! Order Numbers

use jiff::civil::Date;

use crate::domain::orders::records::OrderUuid;

/// Human-facing order reference: `ORD-<yyyymmdd>-<10 hex digits>`.
///
/// The suffix comes from the random tail of the order's v7 UUID; uniqueness
/// is still enforced by the `orders.order_number` constraint.
#[must_use]
pub fn order_number(placed_on: Date, order: OrderUuid) -> String {
    let suffix = order.into_uuid().as_u128() & 0xFF_FFFF_FFFF;

    format!("ORD-{}-{suffix:010X}", placed_on.strftime("%Y%m%d"))
}
