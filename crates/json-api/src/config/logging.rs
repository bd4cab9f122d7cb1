//! Logging Config

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Crates that log too much at `info` and below.
const QUIET_TARGETS: [&str; 5] = ["h2", "hyper", "hyper_util", "sqlx", "reqwest"];

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Base log level when RUST_LOG holds a bare level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this are logged at `warn`
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,

    /// Log when handler and service spans close, with their busy/idle time
    #[arg(long, env = "LOG_SPAN_EVENTS", default_value_t = false)]
    pub log_span_events: bool,
}

impl LoggingConfig {
    /// Filter directives: the base level with the noisy crates held at `warn`.
    #[must_use]
    pub fn directives(&self) -> String {
        QUIET_TARGETS
            .iter()
            .fold(self.log_level.trim().to_string(), |mut directives, target| {
                directives.push_str(&format!(",{target}=warn"));
                directives
            })
    }
}
