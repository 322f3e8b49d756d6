// Common test utilities for integration tests

use std::sync::Arc;

use lostfound_backend::app_data::AppData;
use lostfound_backend::stores::ItemStore;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Creates an in-memory test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates an item store backed by a fresh in-memory database
#[allow(dead_code)]
pub async fn setup_test_store() -> (DatabaseConnection, ItemStore) {
    let db = setup_test_db().await;
    let store = ItemStore::new(db.clone());
    (db, store)
}

/// Creates app data backed by a fresh in-memory database
#[allow(dead_code)]
pub async fn setup_test_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::init(db))
}
