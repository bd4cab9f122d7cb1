//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{
        customers::CustomerUuid,
        items::ItemKind,
        pricing::{PricingError, line_total, sum_totals},
        products::records::ProductUuid,
        rooms::records::RoomUuid,
        stays::StayRange,
    },
    uuids::TypedUuid,
};

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLineRecord>;

/// What a cart line points at. Room lines always carry a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartItem {
    Room { room: RoomUuid, stay: StayRange },
    Product { product: ProductUuid },
}

impl CartItem {
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Room { .. } => ItemKind::Room,
            Self::Product { .. } => ItemKind::Product,
        }
    }

    /// Nights billed per unit; products bill as a single night.
    #[must_use]
    pub fn billable_nights(&self) -> u32 {
        match self {
            Self::Room { stay, .. } => stay.nights(),
            Self::Product { .. } => 1,
        }
    }
}

/// Cart Line Record
#[derive(Debug, Clone)]
pub struct CartLineRecord {
    pub uuid: CartLineUuid,
    pub customer: CustomerUuid,
    pub item: CartItem,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A cart line joined with the current catalog name, price and images.
#[derive(Debug, Clone)]
pub struct PricedCartLine {
    pub line: CartLineRecord,
    pub item_name: String,
    pub unit_price: u64,
    pub images: Vec<String>,
    pub total: u64,
}

impl PricedCartLine {
    /// Price a line against the catalog values it was joined with.
    ///
    /// # Errors
    ///
    /// Returns an error if the line total overflows.
    pub fn price(
        line: CartLineRecord,
        item_name: String,
        unit_price: u64,
        images: Vec<String>,
    ) -> Result<Self, PricingError> {
        let total = line_total(unit_price, line.item.billable_nights(), line.quantity)?;

        Ok(Self {
            line,
            item_name,
            unit_price,
            images,
            total,
        })
    }

    /// Nights for room lines; `None` for products.
    #[must_use]
    pub fn nights(&self) -> Option<u32> {
        match self.line.item {
            CartItem::Room { stay, .. } => Some(stay.nights()),
            CartItem::Product { .. } => None,
        }
    }
}

/// A customer's cart, newest line first.
#[derive(Debug, Clone)]
pub struct CartRecord {
    pub lines: Vec<PricedCartLine>,
    pub total_amount: u64,
}

impl CartRecord {
    /// # Errors
    ///
    /// Returns an error if the cart total overflows.
    pub fn from_lines(lines: Vec<PricedCartLine>) -> Result<Self, PricingError> {
        let total_amount = sum_totals(lines.iter().map(|line| line.total))?;

        Ok(Self {
            lines,
            total_amount,
        })
    }

    /// Number of distinct lines, not the sum of quantities.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Result of adding to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLineAdded {
    /// The new line, or the existing line that absorbed the quantity.
    pub uuid: CartLineUuid,

    pub quantity: u32,

    /// `false` when an identical line was incremented instead.
    pub created: bool,
}
