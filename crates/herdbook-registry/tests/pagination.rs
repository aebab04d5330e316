//! Paginated farmer listing behavior.

use std::collections::HashSet;

use tempfile::TempDir;

use herdbook_core::DocId;
use herdbook_file::{FileObjects, FileStore};
use herdbook_registry::model::{FarmerType, NewFarmer};
use herdbook_registry::Registry;

fn registry() -> (TempDir, Registry<FileStore, FileObjects>) {
    let dir = TempDir::new().unwrap();
    let registry = Registry::new(FileStore::new(dir.path()), FileObjects::new(dir.path()));
    (dir, registry)
}

fn farmer(agent_id: &str, n: usize) -> NewFarmer {
    NewFarmer {
        name: format!("Farmer {}", n),
        phone_number: format!("90000000{:02}", n),
        aadhaar_number: format!("1111-2222-{:04}", n),
        village: "Kondapur".to_string(),
        agent_id: agent_id.to_string(),
        farmer_type: FarmerType::Individual,
    }
}

async fn seed_farmers(
    registry: &Registry<FileStore, FileObjects>,
    agent_id: &str,
    count: usize,
) -> Vec<DocId> {
    let mut ids = Vec::new();
    for n in 0..count {
        ids.push(registry.add_farmer(&farmer(agent_id, n), None).await.unwrap());
    }
    ids
}

#[tokio::test]
async fn pages_cover_every_record_exactly_once() {
    let (_dir, registry) = registry();
    let ids = seed_farmers(&registry, "a1", 25).await;
    seed_farmers(&registry, "a2", 3).await;

    let mut seen = HashSet::new();
    let mut sizes = Vec::new();
    let mut cursor = None;
    loop {
        let page = registry.farmers_by_agent("a1", 10, cursor).await.unwrap();
        sizes.push(page.items.len());
        for farmer in &page.items {
            assert_eq!(farmer.agent_id, "a1");
            assert!(seen.insert(farmer.id.clone()), "duplicate {}", farmer.id);
        }
        if !page.has_more {
            break;
        }
        cursor = page.next_cursor;
    }

    assert_eq!(sizes, vec![10, 10, 5]);
    let expected: HashSet<_> = ids.iter().map(|id| id.to_string()).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn pages_are_newest_first() {
    let (_dir, registry) = registry();
    let ids = seed_farmers(&registry, "a1", 4).await;

    let page = registry.farmers_by_agent("a1", 10, None).await.unwrap();
    let listed: Vec<_> = page.items.iter().map(|f| f.id.clone()).collect();
    let expected: Vec<_> = ids.iter().rev().map(|id| id.to_string()).collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn exact_page_boundary_reports_no_more() {
    let (_dir, registry) = registry();
    seed_farmers(&registry, "a1", 20).await;

    let first = registry.farmers_by_agent("a1", 10, None).await.unwrap();
    assert_eq!(first.items.len(), 10);
    assert!(first.has_more);

    let second = registry
        .farmers_by_agent("a1", 10, first.next_cursor)
        .await
        .unwrap();
    assert_eq!(second.items.len(), 10);
    assert!(!second.has_more);
}

#[tokio::test]
async fn empty_listing_has_no_cursor() {
    let (_dir, registry) = registry();
    seed_farmers(&registry, "a2", 3).await;

    let page = registry.farmers_by_agent("a1", 10, None).await.unwrap();
    assert!(page.items.is_empty());
    assert!(page.next_cursor.is_none());
    assert!(!page.has_more);
}

#[tokio::test]
async fn insert_during_pagination_leaves_later_pages_intact() {
    let (_dir, registry) = registry();
    let ids = seed_farmers(&registry, "a1", 15).await;

    let first = registry.farmers_by_agent("a1", 10, None).await.unwrap();
    assert!(first.has_more);

    // A record created mid-pagination is newer than the whole result set,
    // so it lands before the first page and never shifts the remainder.
    registry.add_farmer(&farmer("a1", 99), None).await.unwrap();

    let second = registry
        .farmers_by_agent("a1", 10, first.next_cursor)
        .await
        .unwrap();
    assert_eq!(second.items.len(), 5);
    assert!(!second.has_more);

    let mut seen: HashSet<_> = first.items.iter().map(|f| f.id.clone()).collect();
    seen.extend(second.items.iter().map(|f| f.id.clone()));
    let expected: HashSet<_> = ids.iter().map(|id| id.to_string()).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn zero_page_size_is_rejected() {
    let (_dir, registry) = registry();

    let err = registry.farmers_by_agent("a1", 0, None).await.unwrap_err();
    assert!(matches!(err, herdbook_core::Error::InvalidInput(_)));
}

#[tokio::test]
async fn stale_cursor_is_reported_for_restart() {
    let (_dir, registry) = registry();
    seed_farmers(&registry, "a1", 6).await;

    let first = registry.farmers_by_agent("a1", 3, None).await.unwrap();
    let cursor = first.next_cursor.unwrap();

    // Deleting the document the cursor points at strands the cursor.
    let anchor = first.items.last().unwrap().id.clone();
    registry
        .delete_farmer(&DocId::new(anchor).unwrap())
        .await
        .unwrap();

    let err = registry
        .farmers_by_agent("a1", 3, Some(cursor))
        .await
        .unwrap_err();
    assert!(err.is_invalid_cursor());

    // Restarting from the beginning recovers.
    let page = registry.farmers_by_agent("a1", 3, None).await.unwrap();
    assert_eq!(page.items.len(), 3);
}
