//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, DatabaseSettings, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        rooms::{PgRoomsService, RoomsService},
    },
    notifications::{
        HttpNotifierConfig, HttpOrderNotifier, NoopOrderNotifier, NotificationDispatcher,
        NotificationError, OrderNotifier,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),

    #[error("failed to build email service client")]
    Notifications(#[source] NotificationError),
}

/// Everything needed to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub database: DatabaseSettings,

    /// Apply pending migrations before serving.
    pub run_migrations: bool,

    /// `None` disables order notifications.
    pub notifications: Option<HttpNotifierConfig>,
}

#[derive(Clone)]
pub struct AppContext {
    pub rooms: Arc<dyn RoomsService>,
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context, connecting to the database.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, migrating or building the
    /// notification client fails.
    pub async fn from_settings(settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect_with(&settings.database_url, settings.database)
            .await
            .map_err(AppInitError::Database)?;

        if settings.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            tracing::info!("database migrations applied");
        }

        let notifier: Arc<dyn OrderNotifier> = match settings.notifications {
            Some(config) => {
                tracing::info!(endpoint = %config.endpoint, "order notifications enabled");

                Arc::new(HttpOrderNotifier::new(config).map_err(AppInitError::Notifications)?)
            }
            None => {
                tracing::info!("EMAIL_SERVICE_URL not set; order notifications disabled");

                Arc::new(NoopOrderNotifier)
            }
        };

        let db = Db::with_statement_timeout(pool, settings.database.statement_timeout);

        Ok(Self {
            rooms: Arc::new(PgRoomsService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(
                db,
                NotificationDispatcher::new(notifier),
            )),
        })
    }
}
