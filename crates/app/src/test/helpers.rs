//! Test Helpers

use crate::{
    domain::{
        carts::{
            CartsService,
            data::NewCartLine,
            records::{CartItem, CartLineUuid},
        },
        customers::CustomerUuid,
        orders::{
            OrdersService,
            data::NewOrder,
            records::{ContactInfo, OrderUuid, PlacedOrder},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
        rooms::{
            RoomsService, RoomsServiceError,
            data::NewRoom,
            records::{RoomRecord, RoomUuid},
        },
        stays::StayRange,
    },
    test::TestContext,
};

pub(crate) fn new_room(room_number: &str, price_per_night: u64) -> NewRoom {
    NewRoom {
        uuid: RoomUuid::new(),
        room_number: room_number.to_string(),
        room_type: "double".to_string(),
        title: format!("Room {room_number}"),
        description: String::new(),
        price_per_night,
        max_occupancy: 2,
        amenities: Vec::new(),
        images: Vec::new(),
    }
}

pub(crate) async fn create_room(
    ctx: &TestContext,
    room_number: &str,
    price_per_night: u64,
) -> Result<RoomRecord, RoomsServiceError> {
    ctx.rooms
        .create_room(new_room(room_number, price_per_night))
        .await
}

pub(crate) fn new_product(name: &str, category: &str, price: u64) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: String::new(),
        price,
        category: category.to_string(),
        stock_quantity: 10,
        images: Vec::new(),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    category: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(new_product(name, category, price))
        .await
}

pub(crate) async fn deactivate_product(
    ctx: &TestContext,
    product: ProductUuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET is_active = false WHERE uuid = $1")
        .bind(product.into_uuid())
        .execute(ctx.db.pool())
        .await?;

    Ok(())
}

pub(crate) fn room_line(room: RoomUuid, stay: StayRange, quantity: u32) -> NewCartLine {
    NewCartLine {
        uuid: CartLineUuid::new(),
        item: CartItem::Room { room, stay },
        quantity,
    }
}

pub(crate) fn product_line(product: ProductUuid, quantity: u32) -> NewCartLine {
    NewCartLine {
        uuid: CartLineUuid::new(),
        item: CartItem::Product { product },
        quantity,
    }
}

pub(crate) fn contact(email: Option<&str>) -> ContactInfo {
    ContactInfo {
        name: "Ada Lovelace".to_string(),
        phone: "555-0100".to_string(),
        email: email.map(str::to_string),
    }
}

pub(crate) fn new_order() -> NewOrder {
    NewOrder {
        uuid: OrderUuid::new(),
        contact: contact(None),
        notes: None,
    }
}

/// Put a single line in the customer's cart and check out.
pub(crate) async fn place_order(
    ctx: &TestContext,
    customer: CustomerUuid,
    line: NewCartLine,
) -> Result<PlacedOrder, Box<dyn std::error::Error>> {
    ctx.carts.add_line(customer, line).await?;

    Ok(ctx.orders.checkout(customer, new_order()).await?)
}

/// Book a room for a fresh customer through the normal checkout path.
pub(crate) async fn book_room(
    ctx: &TestContext,
    room: RoomUuid,
    stay: StayRange,
) -> Result<PlacedOrder, Box<dyn std::error::Error>> {
    place_order(ctx, CustomerUuid::new(), room_line(room, stay, 1)).await
}
