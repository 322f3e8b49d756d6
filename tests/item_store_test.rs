mod common;

use std::time::Duration;

use chrono::NaiveDate;
use lostfound_backend::errors::internal::ItemError;
use lostfound_backend::errors::InternalError;
use lostfound_backend::types::internal::item::{ItemChanges, NewItem};

use common::setup_test_store;

fn wallet() -> NewItem {
    NewItem {
        item_name: "Wallet".to_string(),
        description: String::new(),
        location_found: Some("Library".to_string()),
        date_found: None,
        claimed: false,
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let (_db, store) = setup_test_store().await;

    let created = store.create(wallet()).await.unwrap();

    assert!(uuid::Uuid::parse_str(&created.id).is_ok());
    assert_eq!(created.item_name, "Wallet");
    assert_eq!(created.description, "");
    assert_eq!(created.location_found, Some("Library".to_string()));
    assert_eq!(created.claimed, false);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn test_find_unclaimed_filters_out_claimed_items() {
    let (_db, store) = setup_test_store().await;

    let keys = store
        .create(NewItem {
            item_name: "Keys".to_string(),
            description: String::new(),
            location_found: None,
            date_found: None,
            claimed: false,
        })
        .await
        .unwrap();
    let wallet = store.create(wallet()).await.unwrap();

    // Owner picks up the wallet
    store
        .update_by_id(
            &wallet.id,
            ItemChanges {
                claimed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let unclaimed = store.find_unclaimed().await.unwrap();
    assert_eq!(unclaimed.len(), 1);
    assert_eq!(unclaimed[0].id, keys.id);
}

#[tokio::test]
async fn test_find_by_id_returns_not_found_for_unknown_id() {
    let (_db, store) = setup_test_store().await;

    let err = store.find_by_id("no-such-id").await.unwrap_err();
    assert!(matches!(
        err,
        InternalError::Item(ItemError::NotFound(id)) if id == "no-such-id"
    ));
}

#[tokio::test]
async fn test_update_merges_only_provided_fields() {
    let (_db, store) = setup_test_store().await;

    let created = store
        .create(NewItem {
            item_name: "Umbrella".to_string(),
            description: "Black, wooden handle".to_string(),
            location_found: Some("Bus stop".to_string()),
            date_found: NaiveDate::from_ymd_opt(2026, 6, 30),
            claimed: false,
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let updated = store
        .update_by_id(
            &created.id,
            ItemChanges {
                claimed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.item_name, "Umbrella");
    assert_eq!(updated.description, "Black, wooden handle");
    assert_eq!(updated.location_found, Some("Bus stop".to_string()));
    assert_eq!(updated.date_found, NaiveDate::from_ymd_opt(2026, 6, 30));
    assert_eq!(updated.claimed, true);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_returns_not_found_for_unknown_id() {
    let (_db, store) = setup_test_store().await;

    let err = store
        .update_by_id(
            "missing",
            ItemChanges {
                claimed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, InternalError::Item(ItemError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_removes_the_item() {
    let (_db, store) = setup_test_store().await;

    let created = store.create(wallet()).await.unwrap();

    store.delete_by_id(&created.id).await.unwrap();

    let err = store.find_by_id(&created.id).await.unwrap_err();
    assert!(matches!(err, InternalError::Item(ItemError::NotFound(_))));

    // Deleting again is a not-found, not a success
    let err = store.delete_by_id(&created.id).await.unwrap_err();
    assert!(matches!(err, InternalError::Item(ItemError::NotFound(_))));
}
