//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::{Timestamp, tz::TimeZone};
use mockall::automock;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        carts::{
            records::{CartItem, PricedCartLine},
            repositories::{PgCartLinesRepository, PricedLineRow},
        },
        customers::CustomerUuid,
        orders::{
            data::{NewOrder, OrderFilter, OrderStatusUpdate},
            errors::OrdersServiceError,
            numbers::order_number,
            records::{
                OrderItem, OrderLineUuid, OrderPage, OrderRecord, OrderStatus, OrderUuid,
                PlacedOrder, RoomBookingUuid,
            },
            repositories::{
                NewOrderLine, NewOrderRow, NewRoomBooking, PgOrderLinesRepository,
                PgOrdersRepository, PgRoomBookingsRepository,
            },
        },
        pricing::sum_totals,
    },
    notifications::{NotificationDispatcher, OrderNotification},
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    notifications: NotificationDispatcher,
    orders_repository: PgOrdersRepository,
    lines_repository: PgOrderLinesRepository,
    bookings_repository: PgRoomBookingsRepository,
    cart_lines_repository: PgCartLinesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, notifications: NotificationDispatcher) -> Self {
        Self {
            db,
            notifications,
            orders_repository: PgOrdersRepository::new(),
            lines_repository: PgOrderLinesRepository::new(),
            bookings_repository: PgRoomBookingsRepository::new(),
            cart_lines_repository: PgCartLinesRepository::new(),
        }
    }

    /// Load lines and bookings for a batch of orders.
    async fn attach_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &mut [OrderRecord],
    ) -> Result<(), sqlx::Error> {
        if orders.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let mut lines: HashMap<OrderUuid, Vec<_>> = HashMap::new();

        for line in self.lines_repository.list_lines(tx, &uuids).await? {
            lines.entry(line.order).or_default().push(line);
        }

        let mut bookings: HashMap<OrderUuid, Vec<_>> = HashMap::new();

        for booking in self.bookings_repository.list_bookings(tx, &uuids).await? {
            bookings.entry(booking.order).or_default().push(booking);
        }

        for order in orders {
            order.lines = lines.remove(&order.uuid).unwrap_or_default();
            order.bookings = bookings.remove(&order.uuid).unwrap_or_default();
        }

        Ok(())
    }
}

fn order_line_snapshot(line: PricedCartLine) -> NewOrderLine {
    let item = match line.line.item {
        CartItem::Room { room, stay } => OrderItem::Room {
            room,
            stay,
            nights: stay.nights(),
        },
        CartItem::Product { product } => OrderItem::Product { product },
    };

    NewOrderLine {
        uuid: OrderLineUuid::new(),
        item,
        item_name: line.item_name,
        quantity: line.line.quantity,
        unit_price: line.unit_price,
        total: line.total,
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn checkout(
        &self,
        customer: CustomerUuid,
        order: NewOrder,
    ) -> Result<PlacedOrder, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self
            .cart_lines_repository
            .list_priced_lines(&mut tx, customer)
            .await?
            .into_iter()
            .map(PricedLineRow::into_priced)
            .collect::<Result<Vec<_>, _>>()?;

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let total_amount = sum_totals(cart.iter().map(|line| line.total))?;
        let placed_on = Timestamp::now().to_zoned(TimeZone::UTC).date();
        let number = order_number(placed_on, order.uuid);

        let mut placed = self
            .orders_repository
            .insert_order(
                &mut tx,
                NewOrderRow {
                    uuid: order.uuid,
                    customer,
                    order_number: &number,
                    total_amount,
                    contact: &order.contact,
                    notes: order.notes.as_deref(),
                },
            )
            .await?;

        for line in cart {
            let guest_count = line.line.quantity;

            let line = self
                .lines_repository
                .insert_line(&mut tx, placed.uuid, order_line_snapshot(line))
                .await?;

            // No availability re-check: overlapping checkouts both succeed.
            if let OrderItem::Room { room, stay, .. } = line.item {
                let booking = self
                    .bookings_repository
                    .insert_booking(
                        &mut tx,
                        NewRoomBooking {
                            uuid: RoomBookingUuid::new(),
                            room,
                            order: placed.uuid,
                            order_line: line.uuid,
                            stay,
                            guest_count,
                        },
                    )
                    .await?;

                placed.bookings.push(booking);
            }

            placed.lines.push(line);
        }

        self.cart_lines_repository
            .delete_customer_lines(&mut tx, customer)
            .await?;

        tx.commit().await?;

        tracing::info!(
            order_uuid = %placed.uuid,
            order_number = %placed.order_number,
            total_amount = placed.total_amount,
            lines = placed.lines.len(),
            bookings = placed.bookings.len(),
            "order placed"
        );

        drop(
            self.notifications
                .dispatch(OrderNotification::from(&placed)),
        );

        Ok(PlacedOrder {
            uuid: placed.uuid,
            order_number: placed.order_number,
            total_amount: placed.total_amount,
            created_at: placed.created_at,
        })
    }

    async fn list_orders(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut orders = self
            .orders_repository
            .list_customer_orders(&mut tx, customer)
            .await?;

        self.attach_details(&mut tx, &mut orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self
            .orders_repository
            .get_customer_order(&mut tx, customer, order)
            .await?;

        let mut orders = [order];

        self.attach_details(&mut tx, &mut orders).await?;

        tx.commit().await?;

        let [order] = orders;

        Ok(order)
    }

    async fn list_all_orders(&self, filter: OrderFilter) -> Result<OrderPage, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut orders = self.orders_repository.list_orders(&mut tx, filter).await?;

        let total_count = self
            .orders_repository
            .count_orders(&mut tx, filter.status)
            .await?;

        self.attach_details(&mut tx, &mut orders).await?;

        tx.commit().await?;

        Ok(OrderPage {
            orders,
            total_count,
        })
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        update: OrderStatusUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let current = self
            .orders_repository
            .lock_order_status(&mut tx, order)
            .await?;

        if !current.can_transition_to(update.status) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current,
                to: update.status,
            });
        }

        let updated = self
            .orders_repository
            .update_order_status(&mut tx, order, update.status, update.notes.as_deref())
            .await?;

        if update.status == OrderStatus::Cancelled {
            let cancelled = self
                .bookings_repository
                .cancel_order_bookings(&mut tx, order)
                .await?;

            tracing::info!(order_uuid = %order, cancelled, "cancelled order bookings");
        }

        let mut orders = [updated];

        self.attach_details(&mut tx, &mut orders).await?;

        tx.commit().await?;

        let [updated] = orders;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turns the customer's cart into an order, its lines and room bookings
    /// in one transaction, then empties the cart.
    async fn checkout(
        &self,
        customer: CustomerUuid,
        order: NewOrder,
    ) -> Result<PlacedOrder, OrdersServiceError>;

    /// The customer's orders, newest first, with lines.
    async fn list_orders(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// One order owned by the customer.
    async fn get_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Every customer's orders, filtered and paged.
    async fn list_all_orders(&self, filter: OrderFilter) -> Result<OrderPage, OrdersServiceError>;

    /// Changes an order's status. Cancelling also cancels its bookings.
    async fn update_status(
        &self,
        order: OrderUuid,
        update: OrderStatusUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::CartsService,
            orders::records::{BookingStatus, ContactInfo},
            rooms::RoomsService,
            stays::StayRange,
        },
        test::{
            TestContext,
            helpers::{
                contact, create_product, create_room, new_order, place_order, product_line,
                room_line,
            },
        },
    };

    use super::*;

    #[tokio::test]
    async fn checkout_prices_rooms_and_products() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = CustomerUuid::new();
        let room = create_room(&ctx, "7", 80_00).await?;
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;

        let stay = StayRange::new(date(2025, 7, 1), date(2025, 7, 3));

        ctx.carts.add_line(customer, room_line(room.uuid, stay, 1)).await?;
        ctx.carts.add_line(customer, product_line(robe.uuid, 2)).await?;

        let placed = ctx.orders.checkout(customer, new_order()).await?;

        assert_eq!(placed.total_amount, 80_00 * 2 + 20_00);
        assert!(placed.order_number.starts_with("ORD-"));

        let order = ctx.orders.get_order(customer, placed.uuid).await?;

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.bookings.len(), 1);
        assert_eq!(
            order.lines.iter().map(|line| line.total).sum::<u64>(),
            order.total_amount
        );

        let booking = order.bookings.first().ok_or("missing booking")?;

        assert_eq!(booking.room, room.uuid);
        assert_eq!(booking.stay, stay);
        assert_eq!(booking.guest_count, 1);
        assert_eq!(booking.status, BookingStatus::Confirmed);

        let booked_line = order
            .lines
            .iter()
            .find(|line| line.uuid == booking.order_line)
            .ok_or("booking should reference its order line")?;

        assert_eq!(
            booked_line.item,
            OrderItem::Room {
                room: room.uuid,
                stay,
                nights: 2
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn checkout_empties_the_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = CustomerUuid::new();
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;

        ctx.carts.add_line(customer, product_line(robe.uuid, 1)).await?;
        ctx.orders.checkout(customer, new_order()).await?;

        assert!(ctx.carts.list_lines(customer).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn checkout_snapshots_catalog_values() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = CustomerUuid::new();
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;

        ctx.carts.add_line(customer, product_line(robe.uuid, 1)).await?;
        let placed = ctx.orders.checkout(customer, new_order()).await?;

        sqlx::query("UPDATE products SET name = 'Deluxe Robe', price = 99900 WHERE uuid = $1")
            .bind(robe.uuid.into_uuid())
            .execute(ctx.db.pool())
            .await?;

        let order = ctx.orders.get_order(customer, placed.uuid).await?;
        let line = order.lines.first().ok_or("missing line")?;

        assert_eq!(line.item_name, "Robe");
        assert_eq!(line.unit_price, 10_00);

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_checkout_fails_without_side_effects() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = CustomerUuid::new();

        let result = ctx.orders.checkout(customer, new_order()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
        assert!(ctx.orders.list_orders(customer).await?.is_empty());

        let page = ctx.orders.list_all_orders(OrderFilter::default()).await?;

        assert_eq!(page.total_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn failed_booking_rolls_back_the_whole_checkout() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = CustomerUuid::new();
        let room = create_room(&ctx, "7", 80_00).await?;
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;

        let stay = StayRange::new(date(2025, 7, 1), date(2025, 7, 3));

        ctx.carts.add_line(customer, room_line(room.uuid, stay, 1)).await?;
        ctx.carts.add_line(customer, product_line(robe.uuid, 2)).await?;

        sqlx::raw_sql(
            "CREATE FUNCTION reject_booking() RETURNS trigger AS $$ \
             BEGIN RAISE EXCEPTION 'bookings are closed'; END; \
             $$ LANGUAGE plpgsql; \
             CREATE TRIGGER reject_booking BEFORE INSERT ON room_bookings \
             FOR EACH ROW EXECUTE FUNCTION reject_booking();",
        )
        .execute(ctx.db.pool())
        .await?;

        let result = ctx.orders.checkout(customer, new_order()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::Sql(_))),
            "expected Sql, got {result:?}"
        );

        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(ctx.db.pool())
            .await?;
        let lines: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_lines")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(orders, 0);
        assert_eq!(lines, 0);
        assert_eq!(ctx.carts.list_lines(customer).await?.item_count(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_stores_contact_and_notes() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = CustomerUuid::new();
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;

        ctx.carts.add_line(customer, product_line(robe.uuid, 1)).await?;

        let placed = ctx
            .orders
            .checkout(
                customer,
                NewOrder {
                    uuid: OrderUuid::new(),
                    contact: ContactInfo {
                        name: "Grace".to_string(),
                        phone: "555-0199".to_string(),
                        email: None,
                    },
                    notes: Some("late arrival".to_string()),
                },
            )
            .await?;

        let order = ctx.orders.get_order(customer, placed.uuid).await?;

        assert_eq!(order.contact.name, "Grace");
        assert_eq!(order.contact.email, None);
        assert_eq!(order.notes.as_deref(), Some("late arrival"));

        Ok(())
    }

    #[tokio::test]
    async fn checkout_notifies_after_commit() -> TestResult {
        let mut ctx = TestContext::new().await;
        let customer = CustomerUuid::new();
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;

        ctx.carts.add_line(customer, product_line(robe.uuid, 3)).await?;

        let placed = ctx
            .orders
            .checkout(
                customer,
                NewOrder {
                    contact: contact(Some("ada@example.com")),
                    ..new_order()
                },
            )
            .await?;

        let notification = ctx
            .notifications
            .recv()
            .await
            .ok_or("expected a notification")?;

        assert_eq!(notification.order_number, placed.order_number);
        assert_eq!(notification.total_amount, 30_00);
        assert_eq!(notification.customer_email.as_deref(), Some("ada@example.com"));
        assert_eq!(notification.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn overlapping_checkouts_both_book_the_room() -> TestResult {
        let ctx = TestContext::new().await;
        let room = create_room(&ctx, "7", 80_00).await?;
        let stay = StayRange::new(date(2025, 7, 1), date(2025, 7, 3));

        place_order(&ctx, CustomerUuid::new(), room_line(room.uuid, stay, 1)).await?;
        place_order(&ctx, CustomerUuid::new(), room_line(room.uuid, stay, 1)).await?;

        let availability = ctx.rooms.check_availability(room.uuid, stay).await?;

        assert_eq!(availability.conflicting_bookings, 2);

        Ok(())
    }

    #[tokio::test]
    async fn orders_are_scoped_to_customer() -> TestResult {
        let ctx = TestContext::new().await;
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;
        let owner = CustomerUuid::new();

        let placed = place_order(&ctx, owner, product_line(robe.uuid, 1)).await?;

        let result = ctx.orders.get_order(CustomerUuid::new(), placed.uuid).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(ctx.orders.list_orders(owner).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_is_newest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;
        let customer = CustomerUuid::new();

        let first = place_order(&ctx, customer, product_line(robe.uuid, 1)).await?;
        let second = place_order(&ctx, customer, product_line(robe.uuid, 2)).await?;

        let orders = ctx.orders.list_orders(customer).await?;
        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        assert_eq!(uuids, vec![second.uuid, first.uuid]);
        assert!(orders.iter().all(|order| order.lines.len() == 1));

        Ok(())
    }

    #[tokio::test]
    async fn list_all_orders_filters_and_pages() -> TestResult {
        let ctx = TestContext::new().await;
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;

        let mut placed = Vec::new();

        for _ in 0..3 {
            placed.push(place_order(&ctx, CustomerUuid::new(), product_line(robe.uuid, 1)).await?);
        }

        let confirmed = placed.first().ok_or("missing order")?;

        ctx.orders
            .update_status(
                confirmed.uuid,
                OrderStatusUpdate {
                    status: OrderStatus::Confirmed,
                    notes: None,
                },
            )
            .await?;

        let page = ctx
            .orders
            .list_all_orders(OrderFilter::new(None, Some(2), None))
            .await?;

        assert_eq!(page.total_count, 3);
        assert_eq!(page.orders.len(), 2);

        let rest = ctx
            .orders
            .list_all_orders(OrderFilter::new(None, Some(2), Some(2)))
            .await?;

        assert_eq!(rest.orders.len(), 1);

        let pending = ctx
            .orders
            .list_all_orders(OrderFilter::new(Some(OrderStatus::Pending), None, None))
            .await?;

        assert_eq!(pending.total_count, 2);
        assert!(
            pending
                .orders
                .iter()
                .all(|order| order.status == OrderStatus::Pending)
        );

        Ok(())
    }

    #[tokio::test]
    async fn cancelling_order_cancels_bookings() -> TestResult {
        let ctx = TestContext::new().await;
        let room = create_room(&ctx, "7", 80_00).await?;
        let stay = StayRange::new(date(2025, 7, 1), date(2025, 7, 3));

        let placed = place_order(&ctx, CustomerUuid::new(), room_line(room.uuid, stay, 1)).await?;

        let cancel = OrderStatusUpdate {
            status: OrderStatus::Cancelled,
            notes: Some("guest called".to_string()),
        };

        let cancelled = ctx.orders.update_status(placed.uuid, cancel.clone()).await?;

        assert_eq!(cancelled.status, OrderStatus::Cancelled);
        assert_eq!(cancelled.notes.as_deref(), Some("guest called"));
        assert!(
            cancelled
                .bookings
                .iter()
                .all(|booking| booking.status == BookingStatus::Cancelled)
        );

        // Idempotent.
        let again = ctx.orders.update_status(placed.uuid, cancel).await?;

        assert_eq!(again.status, OrderStatus::Cancelled);

        let availability = ctx.rooms.check_availability(room.uuid, stay).await?;

        assert!(availability.available, "cancelled bookings free the room");

        Ok(())
    }

    #[tokio::test]
    async fn update_status_keeps_notes_when_omitted() -> TestResult {
        let ctx = TestContext::new().await;
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;
        let customer = CustomerUuid::new();

        ctx.carts.add_line(customer, product_line(robe.uuid, 1)).await?;

        let placed = ctx
            .orders
            .checkout(
                customer,
                NewOrder {
                    notes: Some("ring twice".to_string()),
                    ..new_order()
                },
            )
            .await?;

        let updated = ctx
            .orders
            .update_status(
                placed.uuid,
                OrderStatusUpdate {
                    status: OrderStatus::Confirmed,
                    notes: None,
                },
            )
            .await?;

        assert_eq!(updated.status, OrderStatus::Confirmed);
        assert_eq!(updated.notes.as_deref(), Some("ring twice"));

        Ok(())
    }

    #[tokio::test]
    async fn terminal_status_cannot_be_left() -> TestResult {
        let ctx = TestContext::new().await;
        let robe = create_product(&ctx, "Robe", "spa", 10_00).await?;

        let placed = place_order(&ctx, CustomerUuid::new(), product_line(robe.uuid, 1)).await?;

        ctx.orders
            .update_status(
                placed.uuid,
                OrderStatusUpdate {
                    status: OrderStatus::Completed,
                    notes: None,
                },
            )
            .await?;

        let result = ctx
            .orders
            .update_status(
                placed.uuid,
                OrderStatusUpdate {
                    status: OrderStatus::Pending,
                    notes: None,
                },
            )
            .await;

        assert!(
            matches!(
                result,
                Err(OrdersServiceError::InvalidTransition {
                    from: OrderStatus::Completed,
                    to: OrderStatus::Pending,
                })
            ),
            "expected InvalidTransition, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_status_unknown_order_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .update_status(
                OrderUuid::new(),
                OrderStatusUpdate {
                    status: OrderStatus::Confirmed,
                    notes: None,
                },
            )
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
