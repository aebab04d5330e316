//! Enterprise operations, including the assignment cascade delete.

use tracing::{debug, instrument};

use herdbook_core::{DocId, DocumentStore, FieldMap, Filter, FindQuery, ObjectStore, OrderBy, Result};
use serde_json::Value;

use crate::batch;
use crate::model::{Enterprise, EnterprisePatch, NewEnterprise};
use crate::registry::{collections, decode_all, touched, Registry};

const ENTERPRISE: &str = "Enterprise";

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// All enterprises, newest first.
    pub async fn enterprises(&self) -> Result<Vec<Enterprise>> {
        let query = FindQuery::new()
            .filter(Filter::eq("farmerType", ENTERPRISE))
            .order_by(OrderBy::newest_first());
        let page = self.store.find(&collections::farmers(), &query).await?;
        decode_all(page)
    }

    /// Create an enterprise account.
    ///
    /// Enterprises live in the `farmers` collection, seeded with an empty
    /// agent roster and a zero herd count.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn add_enterprise(&self, new: &NewEnterprise) -> Result<DocId> {
        let fields = FieldMap::from_serialize(new)?
            .with("farmerType", ENTERPRISE)
            .with("totalCattle", 0)
            .with("assignedAgents", Value::Array(Vec::new()));
        let id = self.store.create(&collections::farmers(), &fields).await?;

        debug!(%id, "Created enterprise");

        Ok(id)
    }

    /// Apply a partial update to an enterprise.
    #[instrument(skip(self, patch), fields(%id))]
    pub async fn update_enterprise(&self, id: &DocId, patch: &EnterprisePatch) -> Result<()> {
        let fields = touched(FieldMap::from_serialize(patch)?);
        self.store.set(&collections::farmers(), id, &fields).await
    }

    /// Delete an enterprise together with every assignment that references
    /// it.
    ///
    /// Assignments go first, concurrently, and must all land before the
    /// enterprise document is removed. Safe to re-invoke.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_enterprise(&self, id: &DocId) -> Result<()> {
        let assignments = collections::assignments();

        let dependents = self
            .find_all(&assignments, vec![Filter::eq("enterpriseId", id.as_str())])
            .await?;
        let dependent_ids = dependents.documents.into_iter().map(|doc| doc.id);

        let outcomes = batch::delete_each(self.store.as_ref(), &assignments, dependent_ids).await;
        batch::require_all(outcomes)?;

        self.store.delete(&collections::farmers(), id).await?;

        debug!("Deleted enterprise and assignments");

        Ok(())
    }
}
