//! Farmer operations, including the agent-scoped paginated listing and the
//! farmer cascade delete.

use tracing::{debug, instrument, warn};

use herdbook_core::{
    DocId, DocumentStore, Error, FieldMap, Filter, FindQuery, ObjectKey, ObjectStore, PageCursor,
    Result,
};

use crate::batch;
use crate::model::{Farmer, FarmerPatch, NewFarmer};
use crate::paging::{list_page, Page};
use crate::registry::{collections, decode_all, touched, Registry};

pub(crate) fn farmer_photo_key(id: &DocId) -> Result<ObjectKey> {
    ObjectKey::new(format!("farmers/{}/profile", id))
}

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// Register a farmer, optionally uploading a profile photo.
    ///
    /// A failed photo upload is logged and does not fail the registration;
    /// the farmer simply has no `photoUrl`.
    #[instrument(skip(self, new, photo), fields(agent_id = %new.agent_id))]
    pub async fn add_farmer(&self, new: &NewFarmer, photo: Option<&[u8]>) -> Result<DocId> {
        let fields = FieldMap::from_serialize(new)?;
        let id = self.store.create(&collections::farmers(), &fields).await?;

        if let Some(bytes) = photo {
            if let Err(error) = self.attach_farmer_photo(&id, bytes).await {
                warn!(%id, %error, "Farmer photo upload failed");
            }
        }

        debug!(%id, "Registered farmer");

        Ok(id)
    }

    async fn attach_farmer_photo(&self, id: &DocId, bytes: &[u8]) -> Result<()> {
        let url = self.objects.put(&farmer_photo_key(id)?, bytes).await?;
        let fields = FieldMap::new().with("photoUrl", url.as_str());
        self.store.set(&collections::farmers(), id, &fields).await
    }

    /// List one page of an agent's farmers, newest first.
    ///
    /// Feed `next_cursor` back to continue; a cursor is only valid with the
    /// agent id that issued it. A stale cursor fails with
    /// [`Error::InvalidCursor`] — restart from the beginning (pass `None`).
    pub async fn farmers_by_agent(
        &self,
        agent_id: &str,
        page_size: u32,
        cursor: Option<PageCursor>,
    ) -> Result<Page<Farmer>> {
        let filters = [Filter::eq("agentId", agent_id)];
        list_page(
            self.store.as_ref(),
            &collections::farmers(),
            &filters,
            page_size,
            cursor,
        )
        .await?
        .decode()
    }

    /// Fetch a farmer by id.
    pub async fn farmer(&self, id: &DocId) -> Result<Farmer> {
        self.store.get(&collections::farmers(), id).await?.decode()
    }

    /// Apply a partial update to a farmer.
    #[instrument(skip(self, patch), fields(%id))]
    pub async fn update_farmer(&self, id: &DocId, patch: &FarmerPatch) -> Result<()> {
        let fields = touched(FieldMap::from_serialize(patch)?);
        self.store.set(&collections::farmers(), id, &fields).await
    }

    /// Look a farmer up by phone number.
    pub async fn farmer_by_phone(&self, phone_number: &str) -> Result<Option<Farmer>> {
        let query = FindQuery::new()
            .filter(Filter::eq("phoneNumber", phone_number))
            .limit(1);
        let page = self.store.find(&collections::farmers(), &query).await?;
        page.documents.first().map(|doc| doc.decode()).transpose()
    }

    /// Whether a farmer with this phone number is already registered.
    pub async fn farmer_exists(&self, phone_number: &str) -> Result<bool> {
        Ok(self.farmer_by_phone(phone_number).await?.is_some())
    }

    /// Delete a farmer together with every cattle record that references it.
    ///
    /// Dependents go first: all the farmer's cattle are deleted concurrently
    /// and must land before the farmer document is removed, otherwise a
    /// partial failure would orphan cattle pointing at a missing owner. The
    /// profile photo is removed last, best-effort: a missing photo is fine,
    /// any other object-store failure propagates.
    ///
    /// Safe to re-invoke after a success or a partial failure.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_farmer(&self, id: &DocId) -> Result<()> {
        let cattle = collections::cattle();

        let dependents = self
            .find_all(&cattle, vec![Filter::eq("farmerId", id.as_str())])
            .await?;
        let dependent_ids = dependents.documents.into_iter().map(|doc| doc.id);

        let outcomes = batch::delete_each(self.store.as_ref(), &cattle, dependent_ids).await;
        batch::require_all(outcomes)?;

        self.store.delete(&collections::farmers(), id).await?;

        match self.objects.delete(&farmer_photo_key(id)?).await {
            Err(Error::ObjectNotFound { .. }) => {}
            other => other?,
        }

        debug!("Deleted farmer and dependents");

        Ok(())
    }

    /// Every farmer registered under an agent, newest first (unpaginated;
    /// used by scan triage).
    pub(crate) async fn all_farmers_by_agent(&self, agent_id: &str) -> Result<Vec<Farmer>> {
        let page = self
            .find_all(
                &collections::farmers(),
                vec![Filter::eq("agentId", agent_id)],
            )
            .await?;
        decode_all(page)
    }
}
