//! Add To Cart Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument as _, info, info_span};
use uuid::Uuid;

use stayshop_app::domain::{
    carts::{
        data::NewCartLine,
        records::{CartItem, CartLineUuid},
    },
    items::ItemKind,
};

use crate::{cart::errors::into_status_error, extensions::*};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    /// `room` or `product`
    pub item_type: String,

    pub item_id: Uuid,
    pub quantity: u32,

    /// Required for rooms, `YYYY-MM-DD`
    #[serde(default)]
    pub check_in_date: Option<String>,

    /// Required for rooms, `YYYY-MM-DD`, exclusive
    #[serde(default)]
    pub check_out_date: Option<String>,
}

impl AddToCartRequest {
    fn into_new_line(self) -> Result<NewCartLine, StatusError> {
        let kind: ItemKind = self.item_type.parse().or_400("invalid item_type")?;

        let item = match kind {
            ItemKind::Room => {
                let (Some(check_in), Some(check_out)) = (&self.check_in_date, &self.check_out_date)
                else {
                    return Err(StatusError::bad_request()
                        .brief("check_in_date and check_out_date are required for rooms"));
                };

                CartItem::Room {
                    room: self.item_id.into(),
                    stay: parse_stay(check_in, check_out)?,
                }
            }
            ItemKind::Product => CartItem::Product {
                product: self.item_id.into(),
            },
        };

        Ok(NewCartLine {
            uuid: CartLineUuid::new(),
            item,
            quantity: self.quantity,
        })
    }
}

/// Cart Item Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemAddedResponse {
    /// The new line, or the existing line whose quantity was increased
    pub cart_item_id: Uuid,

    /// Line quantity after the add
    pub quantity: u32,
}

/// Add To Cart Handler
///
/// Adding an item that is already in the cart for the same stay increases
/// that line's quantity instead of creating a new line.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("customer_id" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart line created"),
        (status_code = StatusCode::OK, description = "Existing cart line incremented"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemAddedResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let customer = depot.customer_or_401()?;

    let new_line = json.into_inner().into_new_line()?;
    let kind = new_line.item.kind();

    let added = state
        .app
        .carts
        .add_line(customer, new_line)
        .instrument(info_span!("cart.add", %customer, %kind))
        .await
        .map_err(into_status_error)?;

    if added.created {
        res.status_code(StatusCode::CREATED);
    }

    info!(
        %customer,
        cart_item = %added.uuid,
        quantity = added.quantity,
        created = added.created,
        "cart item added"
    );

    Ok(Json(CartItemAddedResponse {
        cart_item_id: added.uuid.into(),
        quantity: added.quantity,
    }))
}
