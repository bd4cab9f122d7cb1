//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use stayshop_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService,
        customers::CustomerUuid,
        orders::{
            MockOrdersService,
            records::{
                BookingStatus, ContactInfo, OrderItem, OrderLineRecord, OrderLineUuid,
                OrderRecord, OrderStatus, OrderUuid, RoomBookingRecord, RoomBookingUuid,
            },
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        rooms::{
            MockRoomsService,
            records::{RoomRecord, RoomUuid},
        },
        stays::StayRange,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER_UUID: CustomerUuid = CustomerUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_customer(TEST_CUSTOMER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// One mock per service. Mocks left at their defaults fail any call.
#[derive(Default)]
pub(crate) struct MockServices {
    pub(crate) rooms: MockRoomsService,
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
}

impl MockServices {
    fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            rooms: Arc::new(self.rooms),
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
        })
    }

    /// Serve `route` without a customer in the depot.
    pub(crate) fn public_service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Serve `route` as [`TEST_CUSTOMER_UUID`].
    pub(crate) fn customer_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_customer)
                .push(route),
        )
    }
}

pub(crate) fn rooms_service(rooms: MockRoomsService, route: Router) -> Service {
    MockServices {
        rooms,
        ..MockServices::default()
    }
    .public_service(route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    MockServices {
        products,
        ..MockServices::default()
    }
    .public_service(route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    MockServices {
        carts,
        ..MockServices::default()
    }
    .customer_service(route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    MockServices {
        orders,
        ..MockServices::default()
    }
    .customer_service(route)
}

/// Serve `route` with order mocks and no customer, as the admin routes run.
pub(crate) fn admin_orders_service(orders: MockOrdersService, route: Router) -> Service {
    MockServices {
        orders,
        ..MockServices::default()
    }
    .public_service(route)
}

pub(crate) fn make_room(uuid: RoomUuid) -> RoomRecord {
    RoomRecord {
        uuid,
        room_number: "101".to_string(),
        room_type: "double".to_string(),
        title: "Garden Double".to_string(),
        description: "Ground floor, garden view".to_string(),
        price_per_night: 120_00,
        max_occupancy: 2,
        amenities: vec!["wifi".to_string()],
        images: vec![],
        is_available: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Breakfast Hamper".to_string(),
        description: String::new(),
        price: 10_00,
        category: "food".to_string(),
        stock_quantity: 5,
        images: vec![],
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A pending order with one room line, its booking and one product line.
pub(crate) fn make_order(uuid: OrderUuid) -> OrderRecord {
    let stay = StayRange::new(date(2025, 7, 1), date(2025, 7, 3));
    let room = RoomUuid::new();
    let room_line = OrderLineUuid::new();

    OrderRecord {
        uuid,
        customer: TEST_CUSTOMER_UUID,
        order_number: "ORD-20250701-0000000001".to_string(),
        total_amount: 260_00,
        status: OrderStatus::Pending,
        contact: ContactInfo {
            name: "Ada Guest".to_string(),
            phone: "+441234567890".to_string(),
            email: None,
        },
        notes: None,
        lines: vec![
            OrderLineRecord {
                uuid: room_line,
                order: uuid,
                item: OrderItem::Room {
                    room,
                    stay,
                    nights: 2,
                },
                item_name: "Garden Double".to_string(),
                quantity: 1,
                unit_price: 120_00,
                total: 240_00,
                created_at: Timestamp::UNIX_EPOCH,
            },
            OrderLineRecord {
                uuid: OrderLineUuid::new(),
                order: uuid,
                item: OrderItem::Product {
                    product: ProductUuid::new(),
                },
                item_name: "Breakfast Hamper".to_string(),
                quantity: 2,
                unit_price: 10_00,
                total: 20_00,
                created_at: Timestamp::UNIX_EPOCH,
            },
        ],
        bookings: vec![RoomBookingRecord {
            uuid: RoomBookingUuid::new(),
            room,
            order: uuid,
            order_line: room_line,
            stay,
            guest_count: 1,
            status: BookingStatus::Confirmed,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
