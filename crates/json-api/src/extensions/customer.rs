//! Customer identity in the request depot.

use salvo::prelude::{Depot, StatusError};

use stayshop_app::domain::customers::CustomerUuid;

/// The customer a request acts for, as asserted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CustomerClaims {
    pub(crate) customer: CustomerUuid,
}

pub(crate) trait CustomerExt {
    fn insert_customer(&mut self, customer: CustomerUuid);

    fn customer_or_401(&self) -> Result<CustomerUuid, StatusError>;
}

impl CustomerExt for Depot {
    fn insert_customer(&mut self, customer: CustomerUuid) {
        self.inject(CustomerClaims { customer });
    }

    fn customer_or_401(&self) -> Result<CustomerUuid, StatusError> {
        self.obtain::<CustomerClaims>()
            .map(|claims| claims.customer)
            .map_err(|_ignored| StatusError::unauthorized().brief("Missing X-Customer-Id header"))
    }
}
