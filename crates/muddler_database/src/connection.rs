//! Database connection utilities.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use muddler_error::{DatabaseError, DatabaseErrorKind};

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Establish a connection to the PostgreSQL database.
///
/// Reads the `DATABASE_URL` environment variable to determine the connection
/// string.
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub fn establish_connection() -> DatabaseResult<PgConnection> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })?;

    establish_connection_to(&database_url)
}

/// Establish a connection to an explicit database URL.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub fn establish_connection_to(database_url: &str) -> DatabaseResult<PgConnection> {
    PgConnection::establish(database_url)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))
}

/// Run all pending embedded migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub fn run_migrations(conn: &mut PgConnection) -> DatabaseResult<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|applied| {
            tracing::info!(count = applied.len(), "Applied pending migrations");
        })
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))
}
