use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::types::db::item;
use crate::types::internal::item::{ItemChanges, NewItem};

/// Request model for registering a found item
///
/// Every field is optional at the parsing stage; `validate()` enforces the
/// presence rules so the caller gets a 400 instead of a parser error.
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// Name of the found item
    pub item_name: Option<String>,

    /// Optional description of the item
    pub description: Option<String>,

    /// Where the item was found
    pub location_found: Option<String>,

    /// When the item was found (YYYY-MM-DD)
    pub date_found: Option<NaiveDate>,

    /// Whether the item has already been returned to its owner
    pub claimed: Option<bool>,
}

impl CreateItemRequest {
    /// Validate the request into a typed store input
    ///
    /// `itemName` must be present and non-empty; the remaining fields fall
    /// back to their schema defaults.
    pub fn validate(self) -> Result<NewItem, ValidationError> {
        let item_name = match self.item_name {
            Some(name) if !name.is_empty() => name,
            Some(_) => return Err(ValidationError::EmptyItemName),
            None => return Err(ValidationError::MissingItemName),
        };

        Ok(NewItem {
            item_name,
            description: self.description.unwrap_or_default(),
            location_found: self.location_found,
            date_found: self.date_found,
            claimed: self.claimed.unwrap_or(false),
        })
    }
}

/// Request model for updating an item
///
/// Absent fields keep their stored values.
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    /// New name for the item
    pub item_name: Option<String>,

    /// New description for the item
    pub description: Option<String>,

    /// New location for the item
    pub location_found: Option<String>,

    /// New found date for the item (YYYY-MM-DD)
    pub date_found: Option<NaiveDate>,

    /// New claimed state, e.g. true once the owner picked the item up
    pub claimed: Option<bool>,
}

impl UpdateItemRequest {
    /// Validate the request into a typed set of changes
    ///
    /// `itemName` stays required in the sense that it cannot be blanked out.
    pub fn validate(self) -> Result<ItemChanges, ValidationError> {
        if matches!(&self.item_name, Some(name) if name.is_empty()) {
            return Err(ValidationError::EmptyItemName);
        }

        Ok(ItemChanges {
            item_name: self.item_name,
            description: self.description,
            location_found: self.location_found,
            date_found: self.date_found,
            claimed: self.claimed,
        })
    }
}

/// Response model representing an item
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub item_name: String,

    /// Description of the item
    pub description: String,

    /// Where the item was found
    pub location_found: Option<String>,

    /// When the item was found
    pub date_found: Option<NaiveDate>,

    /// Whether the item has been returned to its owner
    pub claimed: bool,

    /// Timestamp when the item was registered (ISO 8601 format)
    pub created_at: String,

    /// Timestamp of the last modification (ISO 8601 format)
    pub updated_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            item_name: model.item_name,
            description: model.description,
            location_found: model.location_found,
            date_found: model.date_found,
            claimed: model.claimed,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Response model for item deletion
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    /// Confirmation message
    pub message: String,
}

/// API response for the create endpoint
#[derive(ApiResponse)]
pub enum CreateItemResponse {
    /// Item registered
    #[oai(status = 201)]
    Created(Json<Item>),
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_create_request() -> CreateItemRequest {
        CreateItemRequest {
            item_name: None,
            description: None,
            location_found: None,
            date_found: None,
            claimed: None,
        }
    }

    #[test]
    fn test_create_without_item_name_is_rejected() {
        let result = empty_create_request().validate();
        assert_eq!(result.unwrap_err(), ValidationError::MissingItemName);
    }

    #[test]
    fn test_create_with_empty_item_name_is_rejected() {
        let mut request = empty_create_request();
        request.item_name = Some(String::new());

        let result = request.validate();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyItemName);
    }

    #[test]
    fn test_create_defaults_are_applied() {
        let mut request = empty_create_request();
        request.item_name = Some("Wallet".to_string());

        let new_item = request.validate().unwrap();
        assert_eq!(new_item.item_name, "Wallet");
        assert_eq!(new_item.description, "");
        assert_eq!(new_item.location_found, None);
        assert_eq!(new_item.claimed, false);
    }

    #[test]
    fn test_update_with_empty_item_name_is_rejected() {
        let request = UpdateItemRequest {
            item_name: Some(String::new()),
            description: None,
            location_found: None,
            date_found: None,
            claimed: Some(true),
        };

        let result = request.validate();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyItemName);
    }

    #[test]
    fn test_update_without_item_name_keeps_it_unset() {
        let request = UpdateItemRequest {
            item_name: None,
            description: None,
            location_found: None,
            date_found: None,
            claimed: Some(true),
        };

        let changes = request.validate().unwrap();
        assert_eq!(changes.item_name, None);
        assert_eq!(changes.claimed, Some(true));
    }
}
