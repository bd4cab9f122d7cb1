//! Logging setup, request logging middleware and HTTP metrics.

use thiserror::Error;

mod init;
mod logging;
mod metrics;
mod request;
mod settings;

pub(crate) use init::init;
pub(crate) use metrics::metrics_handler;
pub(crate) use request::request_logging;

/// Errors raised while initialising observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
