use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// The database connection and every store are created once in main.rs and
/// shared with the API layer through `Arc<AppData>`, so no module reaches
/// for process-wide state.
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The connection must already be established and migrated.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(db.clone()));
        tracing::debug!("Stores created");

        Self { db, item_store }
    }
}
