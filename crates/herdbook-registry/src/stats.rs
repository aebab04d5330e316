//! Hand-maintained per-agent statistics.
//!
//! Stat documents are keyed by agent id rather than a generated id, so
//! writing is a merge-upsert against that id.

use std::collections::BTreeMap;

use tracing::instrument;

use herdbook_core::{DocId, DocumentStore, FieldMap, FindQuery, ObjectStore, Result};

use crate::model::AgentStats;
use crate::registry::{collections, Registry};

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// All hand-entered stats, keyed by agent id.
    pub async fn custom_stats(&self) -> Result<BTreeMap<String, AgentStats>> {
        let page = self
            .store
            .find(&collections::custom_stats(), &FindQuery::new())
            .await?;
        page.documents
            .iter()
            .map(|doc| Ok((doc.id.to_string(), doc.decode()?)))
            .collect()
    }

    /// Hand-entered stats for one agent, if any were recorded.
    pub async fn custom_stats_for(&self, agent_id: &str) -> Result<Option<AgentStats>> {
        let id = DocId::new(agent_id)?;
        match self.store.get(&collections::custom_stats(), &id).await {
            Ok(doc) => Ok(Some(doc.decode()?)),
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Record hand-entered stats for an agent, replacing previous counts.
    #[instrument(skip(self, stats), fields(agent_id))]
    pub async fn set_custom_stats(&self, agent_id: &str, stats: &AgentStats) -> Result<()> {
        let id = DocId::new(agent_id)?;
        let fields = FieldMap::from_serialize(stats)?;
        self.store
            .set(&collections::custom_stats(), &id, &fields)
            .await
    }
}
