//! Database Config

use std::time::Duration;

use clap::Args;

use stayshop_app::database::DatabaseSettings;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[arg(long, env = "DATABASE_ACQUIRE_TIMEOUT_SECONDS", default_value_t = 5)]
    pub acquire_timeout_seconds: u64,

    /// Per-statement timeout inside transactions, in milliseconds
    #[arg(long, env = "DATABASE_STATEMENT_TIMEOUT_MS", default_value_t = 5_000)]
    pub statement_timeout_ms: u64,

    /// Apply pending migrations on startup
    #[arg(long, env = "DATABASE_RUN_MIGRATIONS", default_value_t = false)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    #[must_use]
    pub fn settings(&self) -> DatabaseSettings {
        DatabaseSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_seconds),
            statement_timeout: Duration::from_millis(self.statement_timeout_ms),
        }
    }
}
