//! Embedded schema migrations, applied at startup.

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{DbError, DbResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// ## Summary
/// Applies pending migrations over a dedicated synchronous connection. The
/// migration harness is blocking, so this runs on the blocking thread pool.
///
/// ## Errors
/// Returns an error if the connection cannot be established or a migration
/// fails to apply.
#[tracing::instrument(skip(database_url))]
pub async fn run_pending(database_url: &str) -> DbResult<()> {
    let url = database_url.to_owned();

    tokio::task::spawn_blocking(move || {
        let mut conn = diesel::PgConnection::establish(&url)
            .map_err(|err| DbError::MigrationError(err.to_string()))?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| DbError::MigrationError(err.to_string()))?;

        for version in &applied {
            tracing::info!(migration = %version, "Applied migration");
        }

        Ok(())
    })
    .await
    .map_err(|err| DbError::MigrationError(err.to_string()))?
}
