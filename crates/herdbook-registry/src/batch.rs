//! Concurrent write batches with per-item outcomes.
//!
//! Batches of independent writes (dependent deletes, selection unsets) are
//! dispatched in parallel and every outcome is reported back, so callers
//! decide whether a partial failure aborts the operation or is merely
//! logged. Nothing here retries.

use futures_util::future::join_all;

use herdbook_core::{Collection, DocId, DocumentStore, FieldMap, Result};

/// The result of one write within a batch.
pub(crate) struct Outcome {
    pub id: DocId,
    pub result: Result<()>,
}

/// Delete each document concurrently.
pub(crate) async fn delete_each<S: DocumentStore>(
    store: &S,
    collection: &Collection,
    ids: impl IntoIterator<Item = DocId>,
) -> Vec<Outcome> {
    let deletes = ids.into_iter().map(|id| async move {
        let result = store.delete(collection, &id).await;
        Outcome { id, result }
    });
    join_all(deletes).await
}

/// Merge the same fields into each document concurrently.
pub(crate) async fn set_each<S: DocumentStore>(
    store: &S,
    collection: &Collection,
    ids: impl IntoIterator<Item = DocId>,
    fields: &FieldMap,
) -> Vec<Outcome> {
    let sets = ids.into_iter().map(|id| async move {
        let result = store.set(collection, &id, fields).await;
        Outcome { id, result }
    });
    join_all(sets).await
}

/// Propagate the first failure in a batch, if any.
pub(crate) fn require_all(outcomes: Vec<Outcome>) -> Result<()> {
    for outcome in outcomes {
        outcome.result?;
    }
    Ok(())
}
