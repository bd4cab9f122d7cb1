//! Get Cart Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayshop_app::domain::{
    carts::records::{CartItem, CartRecord, PricedCartLine},
    items::ItemKind,
};

use crate::{cart::errors::into_status_error, extensions::*};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The cart line identifier, used to remove it
    pub uuid: Uuid,

    /// `room` or `product`
    pub item_type: String,

    pub item_id: Uuid,
    pub item_name: String,
    pub quantity: u32,

    /// Current catalog price in pence/cents, per night for rooms
    pub unit_price: u64,

    pub total_price: u64,
    pub images: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,

    pub created_at: String,
}

impl From<PricedCartLine> for CartItemResponse {
    fn from(priced: PricedCartLine) -> Self {
        let nights = priced.nights();
        let line = priced.line;

        let (item_type, item_id, stay) = match line.item {
            CartItem::Room { room, stay } => (ItemKind::Room, room.into_uuid(), Some(stay)),
            CartItem::Product { product } => (ItemKind::Product, product.into_uuid(), None),
        };

        Self {
            uuid: line.uuid.into(),
            item_type: item_type.to_string(),
            item_id,
            item_name: priced.item_name,
            quantity: line.quantity,
            unit_price: priced.unit_price,
            total_price: priced.total,
            images: priced.images,
            check_in_date: stay.map(|stay| stay.check_in.to_string()),
            check_out_date: stay.map(|stay| stay.check_out.to_string()),
            nights,
            created_at: line.created_at.to_string(),
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines, newest first
    pub cart_items: Vec<CartItemResponse>,

    /// Sum of line totals in pence/cents
    pub total_amount: u64,

    /// Number of lines
    pub item_count: usize,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        let item_count = cart.item_count();

        Self {
            cart_items: cart.lines.into_iter().map(Into::into).collect(),
            total_amount: cart.total_amount,
            item_count,
        }
    }
}

/// Get Cart Handler
///
/// Returns the customer's cart priced at current catalog prices.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("customer_id" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let customer = depot.customer_or_401()?;

    let cart = state
        .app
        .carts
        .list_lines(customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stayshop_app::domain::{
        carts::{
            CartsServiceError, MockCartsService,
            records::{CartLineRecord, CartLineUuid},
        },
        products::records::ProductUuid,
        rooms::records::RoomUuid,
        stays::StayRange,
    };

    use crate::test_helpers::{TEST_CUSTOMER_UUID, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").get(handler))
    }

    fn priced(item: CartItem, quantity: u32, unit_price: u64) -> TestResult<PricedCartLine> {
        let line = CartLineRecord {
            uuid: CartLineUuid::new(),
            customer: TEST_CUSTOMER_UUID,
            item,
            quantity,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        Ok(PricedCartLine::price(
            line,
            "Line".to_string(),
            unit_price,
            vec![],
        )?)
    }

    #[tokio::test]
    async fn test_get_returns_priced_lines_and_totals() -> TestResult {
        let room_line = priced(
            CartItem::Room {
                room: RoomUuid::new(),
                stay: StayRange::new(date(2025, 7, 1), date(2025, 7, 3)),
            },
            1,
            120_00,
        )?;
        let product_line = priced(
            CartItem::Product {
                product: ProductUuid::new(),
            },
            2,
            10_00,
        )?;

        let cart = CartRecord::from_lines(vec![room_line, product_line])?;

        let mut carts = MockCartsService::new();

        carts
            .expect_list_lines()
            .once()
            .withf(|customer| *customer == TEST_CUSTOMER_UUID)
            .return_once(move |_| Ok(cart));

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        let summary: Vec<_> = response
            .cart_items
            .iter()
            .map(|item| (item.item_type.as_str(), item.nights, item.total_price))
            .collect();

        assert_eq!(response.total_amount, 260_00);
        assert_eq!(response.item_count, 2);
        assert_eq!(
            summary,
            vec![("room", Some(2), 240_00), ("product", None, 20_00)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_empty_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_lines()
            .once()
            .return_once(|_| Ok(CartRecord::from_lines(vec![])?));

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        assert!(response.cart_items.is_empty());
        assert_eq!(response.total_amount, 0);
        assert_eq!(response.item_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_storage_error_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_lines()
            .once()
            .return_once(|_| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
