//! Test context for service-level integration tests.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    database::Db,
    domain::{
        carts::PgCartsService, orders::PgOrdersService, products::PgProductsService,
        rooms::PgRoomsService,
    },
    notifications::{NotificationDispatcher, OrderNotification},
};

use super::{db::TestDb, notifier::ChannelNotifier};

pub(crate) struct TestContext {
    pub db: TestDb,
    pub rooms: PgRoomsService,
    pub products: PgProductsService,
    pub carts: PgCartsService,
    pub orders: PgOrdersService,

    /// Every notification dispatched by `orders`, in order.
    pub notifications: mpsc::UnboundedReceiver<OrderNotification>,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let (notifier, notifications) = ChannelNotifier::new();
        let dispatcher = NotificationDispatcher::new(Arc::new(notifier));

        Self {
            rooms: PgRoomsService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            orders: PgOrdersService::new(db, dispatcher),
            notifications,
            db: test_db,
        }
    }
}
