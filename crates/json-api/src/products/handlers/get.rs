//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayshop_app::domain::products::records::ProductRecord;

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,
    pub description: String,

    /// The price of the product in pence/cents
    pub price: u64,

    pub category: String,
    pub stock_quantity: u32,
    pub images: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            stock_quantity: product.stock_quantity,
            images: product.images,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns an active product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
