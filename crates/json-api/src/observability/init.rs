//! Observability start-up.

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Install the global subscriber and apply request logging thresholds.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    logging::init_subscriber(&config.logging)
}
