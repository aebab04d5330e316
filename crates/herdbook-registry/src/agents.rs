//! Agent operations.

use herdbook_core::{DocId, DocumentStore, FindQuery, ObjectStore, OrderBy, Result};

use crate::model::Agent;
use crate::registry::{collections, decode_all, Registry};

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// All field agents, newest first.
    pub async fn agents(&self) -> Result<Vec<Agent>> {
        let query = FindQuery::new().order_by(OrderBy::newest_first());
        let page = self.store.find(&collections::agents(), &query).await?;
        decode_all(page)
    }

    /// Fetch an agent by id.
    pub async fn agent(&self, id: &DocId) -> Result<Agent> {
        self.store.get(&collections::agents(), id).await?.decode()
    }
}
