use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ItemApiError;
use crate::stores::ItemStore;
use crate::types::dto::items::{
    CreateItemRequest, CreateItemResponse, DeleteItemResponse, Item, UpdateItemRequest,
};

/// Item registry API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the shared application data
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_store: Arc::clone(&app_data.item_store),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Lost and found item management
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Register a found item
    ///
    /// Requires a non-empty itemName; returns the stored record with its
    /// generated id and timestamps
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemResponse, ItemApiError> {
        let new_item = body.0.validate()?;
        let created = self.item_store.create(new_item).await?;

        Ok(CreateItemResponse::Created(Json(created.into())))
    }

    /// List items nobody has claimed yet
    #[oai(path = "/items/unclaimed", method = "get", tag = "ApiTags::Items")]
    async fn list_unclaimed(&self) -> Result<Json<Vec<Item>>, ItemApiError> {
        let items = self.item_store.find_unclaimed().await?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Fetch a single item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<Item>, ItemApiError> {
        let item = self.item_store.find_by_id(&id.0).await?;

        Ok(Json(item.into()))
    }

    /// Update an item, e.g. to mark it as claimed
    ///
    /// Body fields are merged into the stored record; absent fields are left
    /// untouched
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<Item>, ItemApiError> {
        let changes = body.0.validate()?;
        let updated = self.item_store.update_by_id(&id.0, changes).await?;

        Ok(Json(updated.into()))
    }

    /// Remove an item from the registry
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<Json<DeleteItemResponse>, ItemApiError> {
        self.item_store.delete_by_id(&id.0).await?;

        Ok(Json(DeleteItemResponse {
            message: "Item deleted successfully".to_string(),
        }))
    }
}
