//! Hand-entered stats and computed analytics.

use std::collections::BTreeMap;

use tempfile::TempDir;

use herdbook_core::{Collection, DocumentStore, FieldMap};
use herdbook_file::{FileObjects, FileStore};
use herdbook_registry::model::{
    AgentStats, FarmerType, NewCattle, NewEnterprise, NewFarmer,
};
use herdbook_registry::Registry;

fn registry() -> (TempDir, Registry<FileStore, FileObjects>) {
    let dir = TempDir::new().unwrap();
    let registry = Registry::new(FileStore::new(dir.path()), FileObjects::new(dir.path()));
    (dir, registry)
}

#[tokio::test]
async fn stats_round_trip_per_agent() {
    let (_dir, registry) = registry();

    let stats = AgentStats {
        farmer_count: 12,
        cattle_count: 48,
    };
    registry.set_custom_stats("agent_1", &stats).await.unwrap();

    assert_eq!(
        registry.custom_stats_for("agent_1").await.unwrap(),
        Some(stats)
    );
    assert_eq!(registry.custom_stats_for("agent_2").await.unwrap(), None);

    let all = registry.custom_stats().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all["agent_1"], stats);
}

#[tokio::test]
async fn rewriting_stats_replaces_the_counts() {
    let (_dir, registry) = registry();

    registry
        .set_custom_stats(
            "agent_1",
            &AgentStats {
                farmer_count: 1,
                cattle_count: 1,
            },
        )
        .await
        .unwrap();
    registry
        .set_custom_stats(
            "agent_1",
            &AgentStats {
                farmer_count: 2,
                cattle_count: 5,
            },
        )
        .await
        .unwrap();

    assert_eq!(
        registry.custom_stats_for("agent_1").await.unwrap(),
        Some(AgentStats {
            farmer_count: 2,
            cattle_count: 5,
        })
    );
}

#[tokio::test]
async fn farmer_total_spans_the_whole_collection() {
    let (_dir, registry) = registry();

    registry
        .add_farmer(
            &NewFarmer {
                name: "Anju".to_string(),
                phone_number: "9000000001".to_string(),
                aadhaar_number: "1111-2222-3333".to_string(),
                village: "Kondapur".to_string(),
                agent_id: "a1".to_string(),
                farmer_type: FarmerType::Individual,
            },
            None,
        )
        .await
        .unwrap();
    registry
        .add_enterprise(&NewEnterprise {
            name: "Greenfields Dairy".to_string(),
            phone_number: None,
            village: None,
        })
        .await
        .unwrap();

    let analytics = registry.analytics().await.unwrap();
    assert_eq!(analytics.total_farmers, 2);
    assert_eq!(analytics.total_enterprises, 1);
}

#[tokio::test]
async fn analytics_counts_the_collections() {
    let (_dir, registry) = registry();

    // Agents are provisioned outside the registry, so seed them directly.
    let agent_id = registry
        .store()
        .create(
            &Collection::new("agents"),
            &FieldMap::new()
                .with("name", "Ravi")
                .with("phoneNumber", "9000000000")
                .with("email", "ravi@example.com")
                .with("status", "active"),
        )
        .await
        .unwrap();

    let farmer_id = registry
        .add_farmer(
            &NewFarmer {
                name: "Anju".to_string(),
                phone_number: "9000000001".to_string(),
                aadhaar_number: "1111-2222-3333".to_string(),
                village: "Kondapur".to_string(),
                agent_id: agent_id.to_string(),
                farmer_type: FarmerType::Individual,
            },
            None,
        )
        .await
        .unwrap();

    let enterprise_id = registry
        .add_enterprise(&NewEnterprise {
            name: "Greenfields Dairy".to_string(),
            phone_number: None,
            village: None,
        })
        .await
        .unwrap();

    for (owner, tag) in [
        (farmer_id.as_str(), "T1"),
        (enterprise_id.as_str(), "T2"),
        (enterprise_id.as_str(), "T3"),
    ] {
        registry
            .add_cattle(
                &NewCattle {
                    tag_no: tag.to_string(),
                    farmer_id: owner.to_string(),
                    breed: "Gir".to_string(),
                    age: 4,
                    weight: 310.0,
                    registered_by: agent_id.to_string(),
                },
                &BTreeMap::new(),
            )
            .await
            .unwrap();
    }

    let analytics = registry.analytics().await.unwrap();
    assert_eq!(analytics.total_agents, 1);
    // Enterprises live in the farmers collection and count toward both
    // totals.
    assert_eq!(analytics.total_farmers, 2);
    assert_eq!(analytics.total_enterprises, 1);
    assert_eq!(analytics.total_cattle, 3);

    assert_eq!(analytics.enterprise_breakdown.len(), 1);
    assert_eq!(analytics.enterprise_breakdown[0].cattle_count, 2);

    assert_eq!(analytics.agent_performance.len(), 1);
    assert_eq!(analytics.agent_performance[0].cattle_registered, 3);
}
