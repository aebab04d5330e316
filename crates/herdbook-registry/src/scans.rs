//! Scan-request triage.
//!
//! An agent in the field submits a muzzle photo; dashboard staff match it
//! against the herd and resolve the request one way or the other.

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, instrument};

use herdbook_core::{
    DocId, DocumentStore, FieldMap, Filter, FindQuery, ObjectKey, ObjectStore, OrderBy, Result,
};

use crate::model::{Cattle, ScanRequest, ScanResponse, ScanStatus};
use crate::registry::{collections, decode_all, touched, Registry};

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// Submit a scan request, uploading the scan image first.
    ///
    /// Unlike cattle images, the scan image is the whole point of the
    /// request, so a failed upload fails the submission.
    #[instrument(skip(self, image), fields(agent_id))]
    pub async fn create_scan_request(&self, agent_id: &str, image: &[u8]) -> Result<DocId> {
        let scan_requests = collections::scan_requests();

        let fields = FieldMap::new()
            .with("agentId", agent_id)
            .with("status", ScanStatus::Pending.as_str());
        let id = self.store.create(&scan_requests, &fields).await?;

        let key = ObjectKey::new(format!("scans/{}/image", id))?;
        let url = self.objects.put(&key, image).await?;
        let fields = FieldMap::new().with("scanImage", url.as_str());
        self.store.set(&scan_requests, &id, &fields).await?;

        debug!(%id, "Created scan request");

        Ok(id)
    }

    /// All scan requests awaiting triage, oldest first.
    pub async fn pending_scan_requests(&self) -> Result<Vec<ScanRequest>> {
        let query = FindQuery::new().filter(Filter::eq("status", ScanStatus::Pending.as_str()));
        let page = self
            .store
            .find(&collections::scan_requests(), &query)
            .await?;
        decode_all(page)
    }

    /// Fetch a scan request by id.
    pub async fn scan_request(&self, id: &DocId) -> Result<ScanRequest> {
        self.store
            .get(&collections::scan_requests(), id)
            .await?
            .decode()
    }

    /// Resolve a scan request as matched to a cattle record.
    #[instrument(skip(self), fields(%id, cattle_id))]
    pub async fn complete_scan_request(&self, id: &DocId, cattle_id: &str) -> Result<()> {
        let response = ScanResponse {
            cattle_id: cattle_id.to_string(),
            timestamp: Utc::now(),
        };
        let fields = FieldMap::new()
            .with("status", ScanStatus::Completed.as_str())
            .with(
                "responseData",
                FieldMap::from_serialize(&response)?.into_inner(),
            );
        self.set_scan_status(id, fields).await
    }

    /// Resolve a scan request as rejected.
    #[instrument(skip(self), fields(%id))]
    pub async fn reject_scan_request(&self, id: &DocId) -> Result<()> {
        let fields = FieldMap::new().with("status", ScanStatus::Rejected.as_str());
        self.set_scan_status(id, fields).await
    }

    /// Resolve a scan request as having no matching cattle.
    #[instrument(skip(self), fields(%id))]
    pub async fn mark_scan_not_found(&self, id: &DocId) -> Result<()> {
        let fields = FieldMap::new().with("status", ScanStatus::NotFound.as_str());
        self.set_scan_status(id, fields).await
    }

    async fn set_scan_status(&self, id: &DocId, fields: FieldMap) -> Result<()> {
        self.store
            .set(&collections::scan_requests(), id, &touched(fields))
            .await
    }

    /// Candidate cattle for matching an agent's scan request: every head
    /// owned by any of that agent's farmers, newest first.
    ///
    /// An agent with no farmers has no candidates; the query is skipped
    /// rather than issued with an empty owner set.
    pub async fn cattle_for_scan(&self, agent_id: &str) -> Result<Vec<Cattle>> {
        let farmers = self.all_farmers_by_agent(agent_id).await?;
        if farmers.is_empty() {
            return Ok(Vec::new());
        }

        let farmer_ids = farmers
            .into_iter()
            .map(|farmer| Value::String(farmer.id))
            .collect();
        let query = FindQuery::new()
            .filter(Filter::is_in("farmerId", farmer_ids))
            .order_by(OrderBy::newest_first());
        let page = self.store.find(&collections::cattle(), &query).await?;
        decode_all(page)
    }
}
