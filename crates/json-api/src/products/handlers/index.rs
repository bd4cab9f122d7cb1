//! Product Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::get::ProductResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Active products, by category then name
    pub products: Vec<ProductResponse>,

    pub count: usize,

    /// The category filter that was applied, if any
    pub category: Option<String>,
}

/// Product Index Handler
///
/// Returns active products, optionally limited to one category.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let category = category
        .into_inner()
        .map(|category| category.trim().to_string())
        .filter(|category| !category.is_empty());

    let products: Vec<ProductResponse> = state
        .app
        .products
        .list_products(category.clone())
        .await
        .or_500("failed to fetch products")?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ProductsResponse {
        count: products.len(),
        products,
        category,
    }))
}
