//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::format::FmtSpan,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, logging::LoggingConfig};

use super::ObservabilityError;

pub(super) fn init_subscriber(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let span_events = if config.log_span_events {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = match config.log_format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(span_events)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_span_events(span_events)
            .boxed(),
    };

    install(fmt_layer, env_filter(config))
}

/// `RUST_LOG` directives win when they parse; otherwise the configured level
/// with the quiet targets applied.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directives()))
}

fn install(
    fmt_layer: Box<dyn Layer<Registry> + Send + Sync>,
    filter: EnvFilter,
) -> Result<(), ObservabilityError> {
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}
