//! Create Product Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument as _, info, info_span};
use uuid::Uuid;

use stayshop_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{extensions::*, products::errors::into_status_error};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Unit price in pence/cents
    pub price: u64,

    pub category: String,

    #[serde(default)]
    pub stock_quantity: u32,

    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            uuid: ProductUuid::new(),
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category.trim().to_string(),
            stock_quantity: request.stock_quantity,
            images: request.images,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    pub product_id: Uuid,
    pub created_at: String,
}

/// Create Product Handler
#[endpoint(
    tags("admin"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let request = json.into_inner();

    if request.name.trim().is_empty() || request.category.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Invalid product payload"));
    }

    let product = state
        .app
        .products
        .create_product(request.into())
        .instrument(info_span!("products.create"))
        .await
        .map_err(into_status_error)?;

    info!(product = %product.uuid, category = %product.category, "product created");

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        product_id: product.uuid.into(),
        created_at: product.created_at.to_string(),
    }))
}
