use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Initialize the database connection
///
/// Connects to the database and returns the connection.
/// Does NOT run migrations - call migrate_database() separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn init_database(
    settings: &BootstrapSettings,
) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(settings.database_url())
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", settings.database_url());

    Ok(db)
}

/// Run migrations on the database
///
/// Runs all pending migrations on the provided database connection.
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(InternalError)` - Migration failed
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
