//! FileStore behavior tests.

use serde_json::json;
use tempfile::TempDir;

use herdbook_core::{
    Collection, DocId, DocumentStore, FieldMap, Filter, FindQuery, OrderBy, PageCursor,
};
use herdbook_file::FileStore;

fn store() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    (dir, store)
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let (_dir, store) = store();
    let farmers = Collection::new("farmers");

    let fields = FieldMap::new().with("name", "Anju").with("agentId", "a1");
    let id = store.create(&farmers, &fields).await.unwrap();

    let doc = store.get(&farmers, &id).await.unwrap();
    assert_eq!(doc.id, id);
    assert_eq!(doc.fields.get("name"), Some(&json!("Anju")));
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let (_dir, store) = store();
    let farmers = Collection::new("farmers");

    let err = store
        .get(&farmers, &DocId::new("absent").unwrap())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn find_applies_filters() {
    let (_dir, store) = store();
    let cattle = Collection::new("cattle");

    for (tag, farmer) in [("T1", "f1"), ("T2", "f1"), ("T3", "f2")] {
        let fields = FieldMap::new().with("tagNo", tag).with("farmerId", farmer);
        store.create(&cattle, &fields).await.unwrap();
    }

    let page = store
        .find(&cattle, &FindQuery::new().filter(Filter::eq("farmerId", "f1")))
        .await
        .unwrap();
    assert_eq!(page.documents.len(), 2);

    let page = store
        .find(
            &cattle,
            &FindQuery::new().filter(Filter::is_in("farmerId", vec![json!("f1"), json!("f2")])),
        )
        .await
        .unwrap();
    assert_eq!(page.documents.len(), 3);
}

#[tokio::test]
async fn find_orders_newest_first_and_paginates() {
    let (_dir, store) = store();
    let farmers = Collection::new("farmers");

    let mut ids = Vec::new();
    for i in 0..5 {
        let fields = FieldMap::new().with("n", i);
        ids.push(store.create(&farmers, &fields).await.unwrap());
    }

    let query = FindQuery::new().order_by(OrderBy::newest_first()).limit(2);
    let first = store.find(&farmers, &query).await.unwrap();
    assert_eq!(first.documents[0].id, ids[4]);
    assert_eq!(first.documents[1].id, ids[3]);

    let second = store
        .find(&farmers, &query.clone().after(first.last.clone().unwrap()))
        .await
        .unwrap();
    assert_eq!(second.documents[0].id, ids[2]);
    assert_eq!(second.documents[1].id, ids[1]);

    let third = store
        .find(&farmers, &query.after(second.last.clone().unwrap()))
        .await
        .unwrap();
    assert_eq!(third.documents.len(), 1);
    assert_eq!(third.documents[0].id, ids[0]);
}

#[tokio::test]
async fn deleted_cursor_document_invalidates_cursor() {
    let (_dir, store) = store();
    let farmers = Collection::new("farmers");

    let first = store.create(&farmers, &FieldMap::new()).await.unwrap();
    store.create(&farmers, &FieldMap::new()).await.unwrap();

    store.delete(&farmers, &first).await.unwrap();

    let query = FindQuery::new()
        .order_by(OrderBy::newest_first())
        .after(PageCursor::new(first.as_str()));
    let err = store.find(&farmers, &query).await.unwrap_err();
    assert!(err.is_invalid_cursor());
}

#[tokio::test]
async fn set_merges_existing_fields() {
    let (_dir, store) = store();
    let farmers = Collection::new("farmers");

    let fields = FieldMap::new().with("name", "Anju").with("village", "Kondapur");
    let id = store.create(&farmers, &fields).await.unwrap();

    store
        .set(&farmers, &id, &FieldMap::new().with("village", "Medak"))
        .await
        .unwrap();

    let doc = store.get(&farmers, &id).await.unwrap();
    assert_eq!(doc.fields.get("name"), Some(&json!("Anju")));
    assert_eq!(doc.fields.get("village"), Some(&json!("Medak")));
}

#[tokio::test]
async fn set_creates_absent_document() {
    let (_dir, store) = store();
    let stats = Collection::new("custom_stats");

    let id = DocId::new("agent_1").unwrap();
    store
        .set(&stats, &id, &FieldMap::new().with("farmerCount", 7))
        .await
        .unwrap();

    let doc = store.get(&stats, &id).await.unwrap();
    assert_eq!(doc.fields.get("farmerCount"), Some(&json!(7)));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_dir, store) = store();
    let farmers = Collection::new("farmers");

    let id = store.create(&farmers, &FieldMap::new()).await.unwrap();
    store.delete(&farmers, &id).await.unwrap();
    store.delete(&farmers, &id).await.unwrap();

    assert!(store.get(&farmers, &id).await.is_err());
}

#[tokio::test]
async fn creation_timestamps_strictly_increase() {
    let (_dir, store) = store();
    let farmers = Collection::new("farmers");

    let mut previous = None;
    for _ in 0..10 {
        let id = store.create(&farmers, &FieldMap::new()).await.unwrap();
        let doc = store.get(&farmers, &id).await.unwrap();
        if let Some(previous) = previous {
            assert!(doc.created_at > previous);
        }
        previous = Some(doc.created_at);
    }
}
