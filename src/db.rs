//! Connection pool and schema setup for the SQLite catalog database.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;

/// Embedded migrations creating `PRODUCT` and `PRODUCT_IMAGES`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Maximum number of pooled connections.
pub const POOL_SIZE: u32 = 10;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("failed to run migrations: {0}")]
    Migration(String),
}

/// Applies per-connection pragmas when the pool opens a connection.
///
/// Concurrent image inserts share one database file, so writers wait on the
/// busy timeout instead of failing with `SQLITE_BUSY`.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;",
            BUSY_TIMEOUT.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Opens a pool of connections to the database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(POOL_SIZE)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

/// Creates any missing tables. Safe to call on every startup.
pub fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = pool
        .get()
        .map_err(|e| DbError::Migration(e.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::Migration(e.to_string()))?;
    for migration in applied {
        log::info!("Applied migration {migration}");
    }
    Ok(())
}
