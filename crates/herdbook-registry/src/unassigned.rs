//! Unassigned cattle: scanned in the field before an owner is known.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use herdbook_core::{
    DocId, DocumentStore, Error, FieldMap, FindQuery, ObjectKey, ObjectStore, OrderBy, Result,
};

use crate::model::{NewUnassignedCattle, UnassignedCattle};
use crate::registry::{collections, decode_all, Registry};

const IMAGE_PREFIX: &str = "unassigned_cattle";

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// Record a head of cattle with no owner yet, uploading its images.
    #[instrument(skip(self, new, images), fields(tag_no = %new.tag_no))]
    pub async fn add_unassigned_cattle(
        &self,
        new: &NewUnassignedCattle,
        images: &BTreeMap<String, Vec<u8>>,
    ) -> Result<DocId> {
        let unassigned = collections::unassigned_cattle();

        let fields = FieldMap::from_serialize(new)?;
        let id = self.store.create(&unassigned, &fields).await?;

        let urls = self.upload_images(IMAGE_PREFIX, &id, images).await;
        if !urls.is_empty() {
            let fields = FieldMap::new().with("imageUrls", Value::Object(urls));
            self.store.set(&unassigned, &id, &fields).await?;
        }

        debug!(%id, "Recorded unassigned cattle");

        Ok(id)
    }

    /// All unassigned cattle, newest first.
    pub async fn unassigned_cattle(&self) -> Result<Vec<UnassignedCattle>> {
        let query = FindQuery::new().order_by(OrderBy::newest_first());
        let page = self
            .store
            .find(&collections::unassigned_cattle(), &query)
            .await?;
        decode_all(page)
    }

    /// Fetch an unassigned cattle record by id.
    pub async fn unassigned_cattle_details(&self, id: &DocId) -> Result<UnassignedCattle> {
        self.store
            .get(&collections::unassigned_cattle(), id)
            .await?
            .decode()
    }

    /// Attach an unassigned head of cattle to a farmer.
    ///
    /// The record moves into the cattle collection under a fresh id with
    /// `farmerId` set; the unassigned original is removed only after the
    /// new record lands, so a failure part-way leaves the original intact.
    #[instrument(skip(self), fields(%id, farmer_id))]
    pub async fn assign_cattle_to_farmer(&self, id: &DocId, farmer_id: &str) -> Result<DocId> {
        let unassigned = collections::unassigned_cattle();

        let doc = self.store.get(&unassigned, id).await?;
        let fields = doc.fields.with("farmerId", farmer_id);
        let new_id = self.store.create(&collections::cattle(), &fields).await?;

        self.store.delete(&unassigned, id).await?;

        debug!(%new_id, "Assigned cattle to farmer");

        Ok(new_id)
    }

    /// Delete an unassigned cattle record along with its uploaded images.
    ///
    /// Image removal is best-effort: a failed or missing object is logged
    /// and the document is deleted regardless. An already-absent record
    /// means there is nothing to clean up, so re-invocation succeeds like
    /// the other delete paths.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_unassigned_cattle(&self, id: &DocId) -> Result<()> {
        let unassigned = collections::unassigned_cattle();

        let record: Option<UnassignedCattle> = match self.store.get(&unassigned, id).await {
            Ok(doc) => Some(doc.decode()?),
            Err(error) if error.is_not_found() => None,
            Err(error) => return Err(error),
        };

        let views = record
            .and_then(|record| record.image_urls)
            .unwrap_or_default();
        for view in views.into_keys() {
            let result = async {
                let key = ObjectKey::new(format!("{}/{}/{}", IMAGE_PREFIX, id, view))?;
                self.objects.delete(&key).await
            }
            .await;
            match result {
                Ok(()) | Err(Error::ObjectNotFound { .. }) => {}
                Err(error) => warn!(view, %error, "Failed to delete cattle image"),
            }
        }

        self.store.delete(&unassigned, id).await
    }
}
