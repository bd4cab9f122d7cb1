//! Server configuration module

use clap::Parser;

use stayshop_app::context::AppSettings;

use crate::config::{
    cors::CorsConfig, db::DatabaseConfig, logging::LoggingConfig,
    notifications::NotificationsConfig, server::ServerRuntimeConfig,
};

pub(crate) mod cors;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod notifications;
pub(crate) mod server;

pub(crate) use logging::LogFormat;

/// Stayshop JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "stayshop-json", about = "Stayshop JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Order notification settings.
    #[command(flatten)]
    pub notifications: NotificationsConfig,

    /// Cross-origin settings for the storefront.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings for building the application context.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            database_url: self.database.database_url.clone(),
            database: self.database.settings(),
            run_migrations: self.database.run_migrations,
            notifications: self.notifications.notifier_config(),
        }
    }
}
