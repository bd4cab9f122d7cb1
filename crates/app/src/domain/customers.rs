//! Customers

use crate::uuids::TypedUuid;

/// Marker for identifiers asserted by the caller on behalf of a customer.
///
/// There is no customers table; the identifier scopes carts and orders.
#[derive(Debug, Clone, Copy)]
pub struct Customer;

/// Customer UUID
pub type CustomerUuid = TypedUuid<Customer>;
