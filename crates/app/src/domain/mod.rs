//! Stayshop Domain Concerns

pub mod carts;
pub(crate) mod columns;
pub mod customers;
pub mod items;
pub mod orders;
pub mod pricing;
pub mod products;
pub mod rooms;
pub mod stays;
pub(crate) mod storage;
