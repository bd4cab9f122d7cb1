//! Order Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{
        customers::CustomerUuid, items::ItemKind, products::records::ProductUuid,
        rooms::records::RoomUuid, stays::StayRange,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// Room Booking UUID
pub type RoomBookingUuid = TypedUuid<RoomBookingRecord>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status `{0}`")]
pub struct UnknownStatus(pub String);

/// Order lifecycle status. `Cancelled` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Re-applying the current status is always allowed; leaving a terminal
    /// status is not.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next || !self.is_terminal()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Room booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Who to contact about an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub customer: CustomerUuid,
    pub order_number: String,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub contact: ContactInfo,
    pub notes: Option<String>,
    pub lines: Vec<OrderLineRecord>,

    /// One booking per room line.
    pub bookings: Vec<RoomBookingRecord>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// What an order line was bought as. Room lines keep the stay and the
/// nights they were billed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderItem {
    Room {
        room: RoomUuid,
        stay: StayRange,
        nights: u32,
    },
    Product {
        product: ProductUuid,
    },
}

impl OrderItem {
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Room { .. } => ItemKind::Room,
            Self::Product { .. } => ItemKind::Product,
        }
    }
}

/// Order Line Record. Name and price are snapshots taken at checkout.
#[derive(Debug, Clone)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub order: OrderUuid,
    pub item: OrderItem,
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub total: u64,
    pub created_at: Timestamp,
}

/// Room Booking Record
#[derive(Debug, Clone)]
pub struct RoomBookingRecord {
    pub uuid: RoomBookingUuid,
    pub room: RoomUuid,
    pub order: OrderUuid,
    pub order_line: OrderLineUuid,
    pub stay: StayRange,
    pub guest_count: u32,
    pub status: BookingStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Summary returned once checkout commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub total_amount: u64,
    pub created_at: Timestamp,
}

/// One page of orders plus the size of the whole filtered set.
#[derive(Debug, Clone)]
pub struct OrderPage {
    pub orders: Vec<OrderRecord>,
    pub total_count: u64,
}
