//! Cattle operations.

use std::collections::BTreeMap;

use futures_util::future::join_all;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use herdbook_core::{
    DocId, DocumentStore, FieldMap, Filter, FindQuery, ObjectKey, ObjectStore, OrderBy, Result,
};

use crate::model::{Cattle, CattlePatch, NewCattle};
use crate::registry::{collections, decode_all, touched, Registry};

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// Register a head of cattle, uploading its images.
    ///
    /// Images are uploaded concurrently under `cattle/<id>/<view>`; a failed
    /// upload is logged and skipped while the rest proceed, and the record's
    /// `imageUrls` ends up holding only the successful ones.
    #[instrument(skip(self, new, images), fields(tag_no = %new.tag_no))]
    pub async fn add_cattle(
        &self,
        new: &NewCattle,
        images: &BTreeMap<String, Vec<u8>>,
    ) -> Result<DocId> {
        let fields = FieldMap::from_serialize(new)?;
        let id = self.store.create(&collections::cattle(), &fields).await?;

        let urls = self.upload_images("cattle", &id, images).await;
        if !urls.is_empty() {
            let fields = FieldMap::new().with("imageUrls", Value::Object(urls));
            self.store.set(&collections::cattle(), &id, &fields).await?;
        }

        debug!(%id, "Registered cattle");

        Ok(id)
    }

    /// Upload a set of keyed images under `<prefix>/<id>/<view>`, returning
    /// the URLs of the uploads that succeeded.
    pub(crate) async fn upload_images(
        &self,
        prefix: &str,
        id: &DocId,
        images: &BTreeMap<String, Vec<u8>>,
    ) -> serde_json::Map<String, Value> {
        let uploads = images.iter().map(|(view, bytes)| async move {
            let result = async {
                let key = ObjectKey::new(format!("{}/{}/{}", prefix, id, view))?;
                self.objects.put(&key, bytes).await
            }
            .await;
            (view.clone(), result)
        });

        let mut urls = serde_json::Map::new();
        for (view, result) in join_all(uploads).await {
            match result {
                Ok(url) => {
                    urls.insert(view, Value::String(url.to_string()));
                }
                Err(error) => warn!(%id, view, %error, "Image upload failed"),
            }
        }
        urls
    }

    /// All cattle owned by a farmer.
    pub async fn cattle_by_farmer(&self, farmer_id: &str) -> Result<Vec<Cattle>> {
        let page = self
            .find_all(
                &collections::cattle(),
                vec![Filter::eq("farmerId", farmer_id)],
            )
            .await?;
        decode_all(page)
    }

    /// All cattle registered by an agent, newest first.
    pub async fn cattle_by_agent(&self, agent_id: &str) -> Result<Vec<Cattle>> {
        let query = FindQuery::new()
            .filter(Filter::eq("registeredBy", agent_id))
            .order_by(OrderBy::newest_first());
        let page = self.store.find(&collections::cattle(), &query).await?;
        decode_all(page)
    }

    /// Fetch a cattle record by id.
    pub async fn cattle_details(&self, id: &DocId) -> Result<Cattle> {
        self.store.get(&collections::cattle(), id).await?.decode()
    }

    /// Apply a partial update to a cattle record.
    #[instrument(skip(self, patch), fields(%id))]
    pub async fn update_cattle(&self, id: &DocId, patch: &CattlePatch) -> Result<()> {
        let fields = touched(FieldMap::from_serialize(patch)?);
        self.store.set(&collections::cattle(), id, &fields).await
    }

    /// Delete a cattle record.
    ///
    /// Cattle have no dependent documents, so this is a plain delete.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_cattle(&self, id: &DocId) -> Result<()> {
        self.store.delete(&collections::cattle(), id).await
    }

    /// Whether a cattle record with this tag number already exists.
    pub async fn cattle_exists(&self, tag_no: &str) -> Result<bool> {
        let query = FindQuery::new().filter(Filter::eq("tagNo", tag_no)).limit(1);
        let page = self.store.find(&collections::cattle(), &query).await?;
        Ok(!page.is_empty())
    }

    /// Find cattle by tag number (scan-triage search).
    pub async fn find_cattle_by_tag(&self, tag_no: &str) -> Result<Vec<Cattle>> {
        let page = self
            .find_all(&collections::cattle(), vec![Filter::eq("tagNo", tag_no)])
            .await?;
        decode_all(page)
    }
}
