use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde_json::{Value, json};
use yare::parameterized;

use crate::{
    Backup, CreateDatabaseDetails, CreateDbHomeBase, DbSystem, MaintenanceWindow, Patch,
    ResourceModel, VmClusterNetwork,
};

fn round_trip<M: ResourceModel>(raw: &Value) -> Value {
    M::from_value(raw).unwrap().to_value()
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[parameterized(
    backup = { round_trip::<Backup>, json!({"id": "b1", "type": "FULL", "timeEnded": "2024-01-01T00:00:00Z"}) },
    database = { round_trip::<CreateDatabaseDetails>, json!({"dbName": "orcl", "dbWorkload": "DSS", "freeformTags": {}}) },
    db_home = { round_trip::<CreateDbHomeBase>, json!({"displayName": "h", "source": "DATABASE"}) },
    db_system = { round_trip::<DbSystem>, json!({"nodeCount": 2, "maintenanceWindow": {"preference": "CUSTOM_PREFERENCE", "hoursOfDay": [0]}}) },
    patch = { round_trip::<Patch>, json!({"availableActions": ["APPLY"], "timeReleased": "2023-10-17T00:00:00Z"}) },
    nulls = { round_trip::<VmClusterNetwork>, json!({"displayName": null, "scans": null}) },
)]
fn test_declared_keys_survive_round_trip(convert: fn(&Value) -> Value, raw: Value) {
    assert_eq!(convert(&raw), raw);
}

#[test]
fn test_undeclared_keys_are_dropped() {
    let raw = json!({"id": "b1", "etag": "abc", "opcRequestId": "r"});
    assert_eq!(round_trip::<Backup>(&raw), json!({"id": "b1"}));
}

#[test]
fn test_output_follows_declaration_order() {
    let backup = Backup::from_value(&json!({
        "version": "19.0.0.0",
        "id": "b1",
        "shape": "VM.Standard2.1"
    }))
    .unwrap();
    insta::assert_snapshot!(
        backup.to_string(),
        @r#"{"id":"b1","shape":"VM.Standard2.1","version":"19.0.0.0"}"#
    );
}

#[test]
fn test_identity_and_structural_equality() {
    let raw = json!({"preference": "CUSTOM_PREFERENCE", "months": [{"name": "MAY"}]});
    let a = MaintenanceWindow::from_value(&raw).unwrap();
    let b = MaintenanceWindow::from_value(&raw).unwrap();
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = MaintenanceWindow::from_value(&json!({"months": [{"name": "JUNE"}]})).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_models_work_as_set_members() {
    let one = DbSystem::from_value(&json!({"id": "s1"})).unwrap();
    let same = DbSystem::from_value(&json!({"id": "s1"})).unwrap();
    let other = DbSystem::from_value(&json!({"id": "s2"})).unwrap();

    let set: HashSet<DbSystem> = [one, same, other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

fn registry_is_consistent<M: ResourceModel>() {
    let attributes = M::attributes();
    let names = M::attribute_map();
    let types = M::type_map();
    assert_eq!(names.len(), attributes.len());
    assert_eq!(types.len(), attributes.len());
    assert_eq!(M::setters().len(), attributes.len());

    let unique: HashSet<&str> = names.iter().map(|(name, _)| *name).collect();
    assert_eq!(unique.len(), names.len(), "duplicate local name in {}", M::MODEL_NAME);

    for ((name, wire), (type_name, _)) in names.iter().zip(types.iter()) {
        assert_eq!(name, type_name);
        assert!(!wire.is_empty());
        assert!(M::setters().contains_key(name));
    }
}

#[test]
fn test_registries_are_consistent() {
    registry_is_consistent::<Backup>();
    registry_is_consistent::<CreateDatabaseDetails>();
    registry_is_consistent::<CreateDbHomeBase>();
    registry_is_consistent::<DbSystem>();
    registry_is_consistent::<MaintenanceWindow>();
    registry_is_consistent::<Patch>();
    registry_is_consistent::<VmClusterNetwork>();
}

#[test]
fn test_registry_is_built_once() {
    let first = MaintenanceWindow::attributes().as_ptr();
    let second = MaintenanceWindow::attributes().as_ptr();
    assert_eq!(first, second);
}
