//! Order Repositories

mod bookings;
mod lines;
mod orders;

pub(crate) use bookings::{NewRoomBooking, PgRoomBookingsRepository};
pub(crate) use lines::{NewOrderLine, PgOrderLinesRepository};
pub(crate) use orders::{NewOrderRow, PgOrdersRepository};
