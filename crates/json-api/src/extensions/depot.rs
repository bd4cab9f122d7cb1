//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

pub(crate) trait DepotExt {
    /// The shared application state, or 500 when the router was built
    /// without injecting it.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_ignored| {
            error!("application state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
