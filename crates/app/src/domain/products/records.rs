//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,

    /// Unit price in minor units.
    pub price: u64,

    pub category: String,
    pub stock_quantity: u32,
    pub images: Vec<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Active product count for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub product_count: u64,
}
