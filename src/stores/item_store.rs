use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use uuid::Uuid;

use crate::errors::internal::ItemError;
use crate::errors::InternalError;
use crate::types::db::item;
use crate::types::internal::item::{ItemChanges, NewItem};

/// Repository for item storage operations
///
/// Holds no state besides the shared connection handle; every method maps to
/// exactly one logical database operation.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create a new ItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persist a new item with a generated id and fresh timestamps
    pub async fn create(&self, new_item: NewItem) -> Result<item::Model, InternalError> {
        let now = Utc::now().timestamp_millis();

        let model = item::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            item_name: Set(new_item.item_name),
            description: Set(new_item.description),
            location_found: Set(new_item.location_found),
            date_found: Set(new_item.date_found),
            claimed: Set(new_item.claimed),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_item", e))
    }

    /// Fetch all items that nobody has claimed yet
    ///
    /// No ordering guarantee; callers get the rows as the database returns
    /// them.
    pub async fn find_unclaimed(&self) -> Result<Vec<item::Model>, InternalError> {
        item::Entity::find()
            .filter(item::Column::Claimed.eq(false))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_unclaimed", e))
    }

    /// Fetch a single item by id
    ///
    /// # Errors
    ///
    /// Returns `ItemError::NotFound` when no row matches. A malformed id
    /// cannot match any generated id and takes the same path.
    pub async fn find_by_id(&self, id: &str) -> Result<item::Model, InternalError> {
        item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item_by_id", e))?
            .ok_or_else(|| ItemError::NotFound(id.to_string()).into())
    }

    /// Merge the given changes into an existing item
    ///
    /// Absent fields keep their stored values; `updated_at` is refreshed on
    /// every successful call. The id is never touched.
    pub async fn update_by_id(
        &self,
        id: &str,
        changes: ItemChanges,
    ) -> Result<item::Model, InternalError> {
        let mut active = self.find_by_id(id).await?.into_active_model();

        if let Some(item_name) = changes.item_name {
            active.item_name = Set(item_name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(location_found) = changes.location_found {
            active.location_found = Set(Some(location_found));
        }
        if let Some(date_found) = changes.date_found {
            active.date_found = Set(Some(date_found));
        }
        if let Some(claimed) = changes.claimed {
            active.claimed = Set(claimed);
        }
        active.updated_at = Set(Utc::now().timestamp_millis());

        active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_item", e))
    }

    /// Delete an item by id
    ///
    /// # Errors
    ///
    /// Returns `ItemError::NotFound` when no row was deleted.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), InternalError> {
        let result = item::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(ItemError::NotFound(id.to_string()).into());
        }

        Ok(())
    }
}
