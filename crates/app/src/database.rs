//! Database connection management

use std::time::Duration;

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::MigrateError,
    postgres::PgPoolOptions,
    query,
};

/// SQL used to bound every statement run inside a transaction.
pub const SET_STATEMENT_TIMEOUT_SQL: &str = "SELECT set_config('statement_timeout', $1, true)";

/// Pool and timeout settings for a `PostgreSQL` connection.
#[derive(Debug, Clone, Copy)]
pub struct DatabaseSettings {
    /// Maximum number of pooled connections.
    pub max_connections: u32,

    /// How long to wait for a free pooled connection.
    pub acquire_timeout: Duration,

    /// Upper bound on any single statement inside a transaction.
    pub statement_timeout: Duration,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            statement_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
    statement_timeout: Duration,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_statement_timeout(pool, DatabaseSettings::default().statement_timeout)
    }

    #[must_use]
    pub fn with_statement_timeout(pool: PgPool, statement_timeout: Duration) -> Self {
        Self {
            pool,
            statement_timeout,
        }
    }

    /// Begin a transaction with the statement timeout applied.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting the timeout fails.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_STATEMENT_TIMEOUT_SQL)
            .bind(format!("{}ms", self.statement_timeout.as_millis()))
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL` with default pool settings.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    connect_with(database_url, DatabaseSettings::default()).await
}

/// Connect to `PostgreSQL` with explicit pool settings.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(
    database_url: &str,
    settings: DatabaseSettings,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await
}

/// Apply the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
