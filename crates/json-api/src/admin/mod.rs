//! Admin
//!
//! Catalog creation and order management. These routes carry no customer
//! identity and are not authenticated.

pub(crate) mod orders;
pub(crate) mod products;
pub(crate) mod rooms;
