//! Cascading delete behavior.

use std::collections::BTreeMap;

use tempfile::TempDir;

use herdbook_file::{FileObjects, FileStore};
use herdbook_registry::model::{FarmerType, NewAssignment, NewCattle, NewEnterprise, NewFarmer};
use herdbook_registry::Registry;

fn registry() -> (TempDir, Registry<FileStore, FileObjects>) {
    let dir = TempDir::new().unwrap();
    let registry = Registry::new(FileStore::new(dir.path()), FileObjects::new(dir.path()));
    (dir, registry)
}

fn farmer(agent_id: &str) -> NewFarmer {
    NewFarmer {
        name: "Anju".to_string(),
        phone_number: "9000000001".to_string(),
        aadhaar_number: "1111-2222-3333".to_string(),
        village: "Kondapur".to_string(),
        agent_id: agent_id.to_string(),
        farmer_type: FarmerType::Individual,
    }
}

fn cattle(farmer_id: &str, tag_no: &str) -> NewCattle {
    NewCattle {
        tag_no: tag_no.to_string(),
        farmer_id: farmer_id.to_string(),
        breed: "Gir".to_string(),
        age: 4,
        weight: 310.0,
        registered_by: "a1".to_string(),
    }
}

#[tokio::test]
async fn deleting_a_farmer_removes_dependent_cattle_first() {
    let (_dir, registry) = registry();

    let farmer_id = registry.add_farmer(&farmer("a1"), None).await.unwrap();
    let c1 = registry
        .add_cattle(&cattle(farmer_id.as_str(), "T1"), &BTreeMap::new())
        .await
        .unwrap();
    let c2 = registry
        .add_cattle(&cattle(farmer_id.as_str(), "T2"), &BTreeMap::new())
        .await
        .unwrap();

    registry.delete_farmer(&farmer_id).await.unwrap();

    assert!(registry.farmer(&farmer_id).await.unwrap_err().is_not_found());
    assert!(registry.cattle_details(&c1).await.unwrap_err().is_not_found());
    assert!(registry.cattle_details(&c2).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn farmer_delete_removes_the_profile_photo() {
    let (_dir, registry) = registry();

    let farmer_id = registry
        .add_farmer(&farmer("a1"), Some(b"jpeg bytes"))
        .await
        .unwrap();
    let before = registry.farmer(&farmer_id).await.unwrap();
    assert!(before.photo_url.is_some());

    registry.delete_farmer(&farmer_id).await.unwrap();

    assert!(registry.farmer(&farmer_id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn farmer_delete_is_idempotent() {
    let (_dir, registry) = registry();

    let farmer_id = registry.add_farmer(&farmer("a1"), None).await.unwrap();
    registry
        .add_cattle(&cattle(farmer_id.as_str(), "T1"), &BTreeMap::new())
        .await
        .unwrap();

    registry.delete_farmer(&farmer_id).await.unwrap();
    registry.delete_farmer(&farmer_id).await.unwrap();

    assert!(registry.farmer(&farmer_id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn farmer_delete_leaves_other_farmers_cattle_alone() {
    let (_dir, registry) = registry();

    let doomed = registry.add_farmer(&farmer("a1"), None).await.unwrap();
    let survivor = registry
        .add_farmer(
            &NewFarmer {
                phone_number: "9000000002".to_string(),
                ..farmer("a1")
            },
            None,
        )
        .await
        .unwrap();

    registry
        .add_cattle(&cattle(doomed.as_str(), "T1"), &BTreeMap::new())
        .await
        .unwrap();
    let kept = registry
        .add_cattle(&cattle(survivor.as_str(), "T2"), &BTreeMap::new())
        .await
        .unwrap();

    registry.delete_farmer(&doomed).await.unwrap();

    assert_eq!(registry.cattle_details(&kept).await.unwrap().tag_no, "T2");
}

#[tokio::test]
async fn deleting_an_enterprise_removes_its_assignments() {
    let (_dir, registry) = registry();

    let enterprise_id = registry
        .add_enterprise(&NewEnterprise {
            name: "Greenfields Dairy".to_string(),
            phone_number: None,
            village: None,
        })
        .await
        .unwrap();

    for agent in ["a1", "a2"] {
        registry
            .create_assignment(&NewAssignment {
                enterprise_id: enterprise_id.to_string(),
                agent_id: agent.to_string(),
            })
            .await
            .unwrap();
    }
    registry
        .create_assignment(&NewAssignment {
            enterprise_id: "someone_else".to_string(),
            agent_id: "a3".to_string(),
        })
        .await
        .unwrap();

    registry.delete_enterprise(&enterprise_id).await.unwrap();

    assert!(registry
        .assignments_by_enterprise(enterprise_id.as_str())
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        registry
            .assignments_by_enterprise("someone_else")
            .await
            .unwrap()
            .len(),
        1
    );

    // Re-running the cascade is a no-op.
    registry.delete_enterprise(&enterprise_id).await.unwrap();
}
