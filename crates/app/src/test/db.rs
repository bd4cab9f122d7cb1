//! Per-test databases on a shared `PostgreSQL` container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

const USER: &str = "stayshop_test";
const PASSWORD: &str = "stayshop_test_password";

/// Started once and shared by every test in the binary.
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases waiting to be dropped by the background reaper.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(USER)
        .with_tag("17-alpine")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn start_reaper() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {error}");
            }
        }
    });

    sender
}

async fn server_url(database: &str) -> String {
    let container = POSTGRES_CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

/// Names are generated, never user supplied, but they are interpolated into
/// DDL so they are still checked.
fn is_safe_database_name(name: &str) -> bool {
    (1..=63).contains(&name.len())
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    if !is_safe_database_name(name) {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&server_url("postgres").await).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database, dropped in the background once the value
/// goes out of scope.
///
/// Services commit normally; isolation comes from every test owning its own
/// database.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_QUEUE.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        DROP_QUEUE.get_or_init(start_reaper).await;

        let name = format!("stayshop_{}", Uuid::now_v7().simple());

        assert!(is_safe_database_name(&name), "bad database name {name}");

        let mut conn = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server_url(&name).await)
            .await
            .expect("Failed to create pool for test database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_generated_names() {
        assert!(is_safe_database_name(&format!(
            "stayshop_{}",
            Uuid::now_v7().simple()
        )));
    }

    #[test]
    fn rejects_unsafe_names() {
        assert!(!is_safe_database_name(""));
        assert!(!is_safe_database_name(&"a".repeat(64)));
        assert!(!is_safe_database_name("1starts_with_digit"));
        assert!(!is_safe_database_name("has-hyphen"));
        assert!(!is_safe_database_name("quote\"d"));
        assert!(!is_safe_database_name("UPPER"));
    }

    #[tokio::test]
    async fn new_database_is_migrated() {
        let test_db = TestDb::new().await;

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'public' \
               AND table_name IN ('rooms', 'products', 'cart_lines', 'orders', 'order_lines', 'room_bookings')",
        )
        .fetch_one(test_db.pool())
        .await
        .expect("Failed to count tables");

        assert_eq!(tables, 6);
    }
}
