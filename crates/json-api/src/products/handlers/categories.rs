//! Product Categories Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use stayshop_app::domain::products::records::CategorySummary;

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub category: String,

    /// Active products in the category
    pub product_count: u64,
}

impl From<CategorySummary> for CategoryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            category: summary.category,
            product_count: summary.product_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<CategoryResponse>,
    pub count: usize,
}

/// Product Categories Handler
#[endpoint(tags("products"), summary = "List Product Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let categories: Vec<CategoryResponse> = state
        .app
        .products
        .list_categories()
        .await
        .or_500("failed to fetch product categories")?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(CategoriesResponse {
        count: categories.len(),
        categories,
    }))
}
