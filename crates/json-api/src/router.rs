//! App Router

use salvo::Router;

use crate::{admin, cart, customers, healthcheck, observability, orders, products, rooms};

pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("rooms")
                .get(rooms::index::handler)
                .push(Router::with_path("check-availability").post(rooms::availability::handler))
                .push(Router::with_path("{room}").get(rooms::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("categories").get(products::categories::handler))
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::new()
                .hoop(customers::middleware::handler)
                .push(
                    Router::with_path("cart")
                        .get(cart::get::handler)
                        .push(Router::with_path("add").post(cart::add::handler))
                        .push(Router::with_path("clear").delete(cart::clear::handler))
                        .push(Router::with_path("{line}").delete(cart::remove::handler)),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::index::handler)
                        .post(orders::create::handler)
                        .push(Router::with_path("{order}").get(orders::get::handler)),
                ),
        )
        .push(
            Router::with_path("admin")
                .push(
                    Router::with_path("orders")
                        .get(admin::orders::index::handler)
                        .push(Router::with_path("{order}").put(admin::orders::update::handler)),
                )
                .push(Router::with_path("rooms").post(admin::rooms::create::handler))
                .push(Router::with_path("products").post(admin::products::create::handler)),
        )
}
