//! Unassigned cattle lifecycle.

use std::collections::BTreeMap;

use tempfile::TempDir;

use herdbook_file::{FileObjects, FileStore};
use herdbook_registry::model::NewUnassignedCattle;
use herdbook_registry::Registry;

fn registry() -> (TempDir, Registry<FileStore, FileObjects>) {
    let dir = TempDir::new().unwrap();
    let registry = Registry::new(FileStore::new(dir.path()), FileObjects::new(dir.path()));
    (dir, registry)
}

fn unassigned(tag_no: &str) -> NewUnassignedCattle {
    NewUnassignedCattle {
        tag_no: tag_no.to_string(),
        breed: "Sahiwal".to_string(),
        age: 3,
        weight: 280.0,
        registered_by: "a1".to_string(),
    }
}

fn images() -> BTreeMap<String, Vec<u8>> {
    BTreeMap::from([
        ("muzzle".to_string(), b"muzzle bytes".to_vec()),
        ("side".to_string(), b"side bytes".to_vec()),
    ])
}

#[tokio::test]
async fn recorded_cattle_carries_uploaded_image_urls() {
    let (_dir, registry) = registry();

    let id = registry
        .add_unassigned_cattle(&unassigned("U1"), &images())
        .await
        .unwrap();

    let record = registry.unassigned_cattle_details(&id).await.unwrap();
    let urls = record.image_urls.unwrap();
    assert_eq!(urls.len(), 2);
    assert!(urls["muzzle"].starts_with("file://"));

    let listed = registry.unassigned_cattle().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].tag_no, "U1");
}

#[tokio::test]
async fn assignment_moves_the_record_into_the_herd() {
    let (_dir, registry) = registry();

    let id = registry
        .add_unassigned_cattle(&unassigned("U1"), &BTreeMap::new())
        .await
        .unwrap();

    let new_id = registry.assign_cattle_to_farmer(&id, "f1").await.unwrap();

    let moved = registry.cattle_details(&new_id).await.unwrap();
    assert_eq!(moved.tag_no, "U1");
    assert_eq!(moved.farmer_id, "f1");

    assert!(registry
        .unassigned_cattle_details(&id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn delete_is_safe_to_repeat() {
    let (_dir, registry) = registry();

    let id = registry
        .add_unassigned_cattle(&unassigned("U1"), &images())
        .await
        .unwrap();

    registry.delete_unassigned_cattle(&id).await.unwrap();
    registry.delete_unassigned_cattle(&id).await.unwrap();

    assert!(registry.unassigned_cattle().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_record_and_images() {
    let (_dir, registry) = registry();

    let id = registry
        .add_unassigned_cattle(&unassigned("U1"), &images())
        .await
        .unwrap();

    registry.delete_unassigned_cattle(&id).await.unwrap();

    assert!(registry
        .unassigned_cattle_details(&id)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(registry.unassigned_cattle().await.unwrap().is_empty());
}
