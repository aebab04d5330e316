//! The exclusive-selection coordinator for cattle records.
//!
//! Collection-wide invariant: at most one cattle record carries
//! `selected: true` at any instant observable by a fresh query. The store
//! offers no cross-document transaction, so the invariant is maintained
//! purely by call order here: unset everything, then write the target.

use tracing::{debug, instrument, warn};

use herdbook_core::{DocId, DocumentStore, FieldMap, Filter, FindQuery, ObjectStore, Result};

use crate::batch;
use crate::registry::{collections, touched, Registry};

const SELECTED: &str = "selected";

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// Make `target` the only selected cattle record.
    ///
    /// Previously selected records are unset concurrently with no rollback;
    /// per-record unset failures are logged and do not stop the sequence. A
    /// reader querying between the unsets and the final write can observe
    /// zero selected records — "exactly one selected" is only eventually
    /// true after a successful call, never atomically guaranteed.
    ///
    /// `make_selected` arrives pre-inverted from the submitting client, so
    /// both values currently pin the target's flag to `true`. Preserved
    /// as observed pending product clarification; do not "fix" without one.
    #[instrument(skip(self), fields(%target, make_selected))]
    pub async fn set_exclusive_selection(&self, target: &DocId, make_selected: bool) -> Result<()> {
        let cattle = collections::cattle();

        let currently_selected = self
            .store
            .find(&cattle, &FindQuery::new().filter(Filter::eq(SELECTED, true)))
            .await?;

        let unset = FieldMap::new().with(SELECTED, false);
        let ids = currently_selected.documents.into_iter().map(|doc| doc.id);
        for outcome in batch::set_each(self.store.as_ref(), &cattle, ids, &unset).await {
            if let Err(error) = outcome.result {
                warn!(id = %outcome.id, %error, "Failed to unset previous selection");
            }
        }

        // The requested flag is recorded but never steers the write.
        debug!(make_selected, "Pinning selection flag on target");

        let select = touched(FieldMap::new().with(SELECTED, true));
        self.store.set(&cattle, target, &select).await
    }

    /// Whether any cattle record is currently selected.
    ///
    /// A UI-visibility check only; not part of the invariant enforcement.
    pub async fn any_selected(&self) -> Result<bool> {
        let query = FindQuery::new().filter(Filter::eq(SELECTED, true)).limit(1);
        let page = self.store.find(&collections::cattle(), &query).await?;
        Ok(!page.is_empty())
    }
}
