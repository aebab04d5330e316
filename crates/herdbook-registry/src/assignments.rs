//! Enterprise-agent assignment operations.

use tracing::{debug, instrument};

use herdbook_core::{DocId, DocumentStore, FieldMap, Filter, FindQuery, ObjectStore, OrderBy, Result};

use crate::model::{Assignment, AssignmentPatch, NewAssignment};
use crate::registry::{collections, decode_all, touched, Registry};

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// Assign an agent to an enterprise.
    #[instrument(skip(self, new), fields(enterprise_id = %new.enterprise_id, agent_id = %new.agent_id))]
    pub async fn create_assignment(&self, new: &NewAssignment) -> Result<DocId> {
        let fields = FieldMap::from_serialize(new)?;
        let id = self
            .store
            .create(&collections::assignments(), &fields)
            .await?;

        debug!(%id, "Created assignment");

        Ok(id)
    }

    /// All assignments, newest first.
    pub async fn assignments(&self) -> Result<Vec<Assignment>> {
        let query = FindQuery::new().order_by(OrderBy::newest_first());
        let page = self
            .store
            .find(&collections::assignments(), &query)
            .await?;
        decode_all(page)
    }

    /// All assignments for an enterprise.
    pub async fn assignments_by_enterprise(&self, enterprise_id: &str) -> Result<Vec<Assignment>> {
        let page = self
            .find_all(
                &collections::assignments(),
                vec![Filter::eq("enterpriseId", enterprise_id)],
            )
            .await?;
        decode_all(page)
    }

    /// All assignments held by an agent.
    pub async fn assignments_by_agent(&self, agent_id: &str) -> Result<Vec<Assignment>> {
        let page = self
            .find_all(
                &collections::assignments(),
                vec![Filter::eq("agentId", agent_id)],
            )
            .await?;
        decode_all(page)
    }

    /// Apply a partial update to an assignment.
    #[instrument(skip(self, patch), fields(%id))]
    pub async fn update_assignment(&self, id: &DocId, patch: &AssignmentPatch) -> Result<()> {
        let fields = touched(FieldMap::from_serialize(patch)?);
        self.store.set(&collections::assignments(), id, &fields).await
    }

    /// Remove an assignment.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_assignment(&self, id: &DocId) -> Result<()> {
        self.store.delete(&collections::assignments(), id).await
    }
}
