//! Cart Data

use crate::domain::carts::records::{CartItem, CartLineUuid};

/// New Cart Line Data
///
/// `uuid` is only used when no identical line exists yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartLine {
    pub uuid: CartLineUuid,
    pub item: CartItem,
    pub quantity: u32,
}
