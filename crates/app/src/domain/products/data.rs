//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub stock_quantity: u32,
    pub images: Vec<String>,
}
