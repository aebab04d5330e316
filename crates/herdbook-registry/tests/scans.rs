//! Scan-request triage flow.

use std::collections::BTreeMap;

use tempfile::TempDir;

use herdbook_file::{FileObjects, FileStore};
use herdbook_registry::model::{FarmerType, NewCattle, NewFarmer, ScanStatus};
use herdbook_registry::Registry;

fn registry() -> (TempDir, Registry<FileStore, FileObjects>) {
    let dir = TempDir::new().unwrap();
    let registry = Registry::new(FileStore::new(dir.path()), FileObjects::new(dir.path()));
    (dir, registry)
}

fn farmer(agent_id: &str, phone: &str) -> NewFarmer {
    NewFarmer {
        name: "Anju".to_string(),
        phone_number: phone.to_string(),
        aadhaar_number: "1111-2222-3333".to_string(),
        village: "Kondapur".to_string(),
        agent_id: agent_id.to_string(),
        farmer_type: FarmerType::Individual,
    }
}

fn cattle(farmer_id: &str, tag_no: &str) -> NewCattle {
    NewCattle {
        tag_no: tag_no.to_string(),
        farmer_id: farmer_id.to_string(),
        breed: "Gir".to_string(),
        age: 4,
        weight: 310.0,
        registered_by: "a1".to_string(),
    }
}

#[tokio::test]
async fn submitted_request_is_pending_with_image() {
    let (_dir, registry) = registry();

    let id = registry
        .create_scan_request("a1", b"muzzle photo")
        .await
        .unwrap();

    let request = registry.scan_request(&id).await.unwrap();
    assert_eq!(request.agent_id, "a1");
    assert_eq!(request.status, ScanStatus::Pending);
    assert!(request.scan_image.starts_with("file://"));
    assert!(request.response_data.is_none());

    let pending = registry.pending_scan_requests().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, id.to_string());
}

#[tokio::test]
async fn completing_a_request_records_the_match() {
    let (_dir, registry) = registry();

    let id = registry.create_scan_request("a1", b"img").await.unwrap();
    registry
        .complete_scan_request(&id, "cattle_42")
        .await
        .unwrap();

    let request = registry.scan_request(&id).await.unwrap();
    assert_eq!(request.status, ScanStatus::Completed);
    assert_eq!(request.response_data.unwrap().cattle_id, "cattle_42");

    assert!(registry.pending_scan_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn rejected_and_unmatched_requests_leave_the_queue() {
    let (_dir, registry) = registry();

    let rejected = registry.create_scan_request("a1", b"img").await.unwrap();
    let unmatched = registry.create_scan_request("a1", b"img").await.unwrap();

    registry.reject_scan_request(&rejected).await.unwrap();
    registry.mark_scan_not_found(&unmatched).await.unwrap();

    assert_eq!(
        registry.scan_request(&rejected).await.unwrap().status,
        ScanStatus::Rejected
    );
    assert_eq!(
        registry.scan_request(&unmatched).await.unwrap().status,
        ScanStatus::NotFound
    );
    assert!(registry.pending_scan_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn scan_candidates_span_the_agents_farmers() {
    let (_dir, registry) = registry();

    let f1 = registry
        .add_farmer(&farmer("a1", "9000000001"), None)
        .await
        .unwrap();
    let f2 = registry
        .add_farmer(&farmer("a1", "9000000002"), None)
        .await
        .unwrap();
    let other = registry
        .add_farmer(&farmer("a2", "9000000003"), None)
        .await
        .unwrap();

    registry
        .add_cattle(&cattle(f1.as_str(), "T1"), &BTreeMap::new())
        .await
        .unwrap();
    registry
        .add_cattle(&cattle(f2.as_str(), "T2"), &BTreeMap::new())
        .await
        .unwrap();
    registry
        .add_cattle(&cattle(other.as_str(), "T3"), &BTreeMap::new())
        .await
        .unwrap();

    let candidates = registry.cattle_for_scan("a1").await.unwrap();
    let mut tags: Vec<_> = candidates.into_iter().map(|c| c.tag_no).collect();
    tags.sort();
    assert_eq!(tags, vec!["T1", "T2"]);
}

#[tokio::test]
async fn agent_without_farmers_has_no_candidates() {
    let (_dir, registry) = registry();

    assert!(registry.cattle_for_scan("a9").await.unwrap().is_empty());
}
