//! Admin Order Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stayshop_app::domain::orders::{data::OrderFilter, records::OrderStatus};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminOrdersResponse {
    /// One page of orders, newest first
    pub orders: Vec<OrderResponse>,

    /// Orders on this page
    pub count: usize,

    /// Orders matching the filter across all pages
    pub total_count: u64,

    /// The status filter that was applied, if any
    pub status: Option<String>,
}

/// Admin Order Index Handler
///
/// Lists every customer's orders, optionally filtered by status. `limit`
/// defaults to 50 and is capped at 200.
#[endpoint(
    tags("admin"),
    summary = "List All Orders",
    responses(
        (status_code = StatusCode::OK, description = "Orders listed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    limit: QueryParam<u32, false>,
    offset: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<AdminOrdersResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let status = status
        .into_inner()
        .filter(|status| !status.trim().is_empty())
        .map(|status| status.trim().parse::<OrderStatus>())
        .transpose()
        .or_400("invalid status")?;

    let filter = OrderFilter::new(status, limit.into_inner(), offset.into_inner());

    let page = state
        .app
        .orders
        .list_all_orders(filter)
        .await
        .map_err(into_status_error)?;

    let orders: Vec<OrderResponse> = page.orders.into_iter().map(Into::into).collect();

    Ok(Json(AdminOrdersResponse {
        count: orders.len(),
        orders,
        total_count: page.total_count,
        status: status.map(|status| status.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stayshop_app::domain::orders::{
        MockOrdersService,
        records::{OrderPage, OrderUuid},
    };

    use crate::test_helpers::{admin_orders_service, make_order};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        admin_orders_service(orders, Router::with_path("admin/orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_applies_status_and_paging() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_all_orders()
            .once()
            .withf(|filter| {
                *filter == OrderFilter::new(Some(OrderStatus::Pending), Some(10), Some(20))
            })
            .return_once(move |_| {
                Ok(OrderPage {
                    orders: vec![make_order(uuid)],
                    total_count: 21,
                })
            });

        let response: AdminOrdersResponse =
            TestClient::get("http://example.com/admin/orders?status=pending&limit=10&offset=20")
                .send(&make_service(orders))
                .await
                .take_json()
                .await?;

        assert_eq!(response.count, 1);
        assert_eq!(response.total_count, 21);
        assert_eq!(response.status.as_deref(), Some("pending"));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_defaults_paging_without_filter() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_all_orders()
            .once()
            .withf(|filter| *filter == OrderFilter::default())
            .return_once(|_| {
                Ok(OrderPage {
                    orders: vec![],
                    total_count: 0,
                })
            });

        let response: AdminOrdersResponse = TestClient::get("http://example.com/admin/orders")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(response.count, 0);
        assert_eq!(response.status, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_unknown_status_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_all_orders().never();

        let res = TestClient::get("http://example.com/admin/orders?status=shipped")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
