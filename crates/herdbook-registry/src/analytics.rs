//! Dashboard analytics computed live from the collections.

use tracing::instrument;

use herdbook_core::{DocumentStore, Filter, ObjectStore, Result};

use crate::model::{AgentPerformance, Analytics, EnterpriseBreakdown};
use crate::registry::{collections, Registry};

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// Compute the dashboard's live counts.
    ///
    /// Full collection scans, recomputed on every call. Acceptable at the
    /// dashboard's data volumes; revisit if herds grow past tens of
    /// thousands.
    #[instrument(skip(self))]
    pub async fn analytics(&self) -> Result<Analytics> {
        let total_enterprises = self
            .count(
                &collections::farmers(),
                vec![Filter::eq("farmerType", "Enterprise")],
            )
            .await?;
        // The farmers total spans the whole collection, enterprises
        // included; the enterprise total is the filtered subset of it.
        let total_farmers = self.count(&collections::farmers(), Vec::new()).await?;
        let total_agents = self.count(&collections::agents(), Vec::new()).await?;
        let total_cattle = self.count(&collections::cattle(), Vec::new()).await?;

        let mut enterprise_breakdown = Vec::new();
        for enterprise in self.enterprises().await? {
            let cattle_count = self
                .count(
                    &collections::cattle(),
                    vec![Filter::eq("farmerId", enterprise.id.as_str())],
                )
                .await?;
            enterprise_breakdown.push(EnterpriseBreakdown {
                id: enterprise.id,
                name: enterprise.name,
                cattle_count,
            });
        }

        let mut agent_performance = Vec::new();
        for agent in self.agents().await? {
            let cattle_registered = self
                .count(
                    &collections::cattle(),
                    vec![Filter::eq("registeredBy", agent.id.as_str())],
                )
                .await?;
            agent_performance.push(AgentPerformance {
                id: agent.id,
                name: agent.name,
                cattle_registered,
            });
        }

        Ok(Analytics {
            total_enterprises,
            total_agents,
            total_farmers,
            total_cattle,
            enterprise_breakdown,
            agent_performance,
        })
    }
}
