//! Order Data

use crate::domain::orders::records::{ContactInfo, OrderStatus, OrderUuid};

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub contact: ContactInfo,
    pub notes: Option<String>,
}

/// Order Status Update Data
///
/// `notes` replaces the stored notes when present and leaves them untouched
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    pub notes: Option<String>,
}

/// Filter and paging for the admin order listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub limit: u32,
    pub offset: u32,
}

impl OrderFilter {
    pub const DEFAULT_LIMIT: u32 = 50;
    pub const MAX_LIMIT: u32 = 200;

    /// Build a filter, defaulting the limit and capping it at
    /// [`Self::MAX_LIMIT`].
    #[must_use]
    pub fn new(status: Option<OrderStatus>, limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            status,
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).min(Self::MAX_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
