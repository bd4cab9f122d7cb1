//! Order Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, orders::get::OrderResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The customer's orders, newest first
    pub orders: Vec<OrderResponse>,

    pub count: usize,
}

/// Order Index Handler
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("customer_id" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let customer = depot.customer_or_401()?;

    let orders: Vec<OrderResponse> = state
        .app
        .orders
        .list_orders(customer)
        .await
        .or_500("failed to fetch orders")?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(OrdersResponse {
        count: orders.len(),
        orders,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stayshop_app::domain::orders::{MockOrdersService, records::OrderUuid};

    use crate::test_helpers::{TEST_CUSTOMER_UUID, make_order, orders_service};

    use super::*;

    #[tokio::test]
    async fn test_index_lists_customer_orders() -> TestResult {
        let newest = OrderUuid::new();
        let oldest = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .withf(|customer| *customer == TEST_CUSTOMER_UUID)
            .return_once(move |_| Ok(vec![make_order(newest), make_order(oldest)]));

        let service = orders_service(orders, Router::with_path("orders").get(handler));

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&service)
            .await
            .take_json()
            .await?;

        let uuids: Vec<_> = response.orders.iter().map(|order| order.uuid).collect();

        assert_eq!(response.count, 2);
        assert_eq!(uuids, vec![newest.into_uuid(), oldest.into_uuid()]);

        Ok(())
    }
}
