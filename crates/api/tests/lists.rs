#![forbid(unsafe_code)]

use capiconv_api::{v1alpha2, v1alpha3, ConversionError, Convertible};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};

fn named(name: &str) -> ObjectMeta {
    ObjectMeta { name: Some(name.into()), namespace: Some("default".into()), ..Default::default() }
}

fn cluster(name: &str, port: i64) -> v1alpha2::Cluster {
    v1alpha2::Cluster {
        metadata: named(name),
        status: v1alpha2::ClusterStatus {
            api_endpoints: vec![v1alpha2::APIEndpoint { host: format!("{name}.example.com"), port }],
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn cluster_list_keeps_order_and_envelope() {
    let src = v1alpha2::ClusterList {
        metadata: ListMeta { resource_version: Some("1200".into()), ..Default::default() },
        items: vec![cluster("c", 3), cluster("a", 1), cluster("b", 2)],
    };
    let hub = src.convert_to_hub().unwrap();
    assert_eq!(hub.metadata, src.metadata);
    let names: Vec<_> = hub.items.iter().map(|c| c.metadata.name.clone().unwrap()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
    let ports: Vec<_> = hub.items.iter().map(|c| c.spec.control_plane_endpoint.port).collect();
    assert_eq!(ports, vec![3, 1, 2]);

    let back = v1alpha2::ClusterList::convert_from_hub(&hub).unwrap();
    assert_eq!(back, src);
}

#[test]
fn list_entry_points_check_hub_type() {
    let src = v1alpha2::ClusterList::new(vec![cluster("a", 1)]);
    let mut dst = v1alpha3::ClusterList::default();
    src.convert_to(&mut dst).unwrap();
    assert_eq!(dst.len(), 1);

    let mut wrong = v1alpha3::MachineList::default();
    let err = src.convert_to(&mut wrong).unwrap_err();
    assert!(matches!(err, ConversionError::TypeMismatch { .. }), "{err}");
    assert!(wrong.is_empty());
}

#[test]
fn machine_list_downgrade_fails_without_partial_output() {
    let hub = v1alpha3::MachineList::new(vec![
        v1alpha3::Machine { metadata: named("m0"), ..Default::default() },
        v1alpha3::Machine { metadata: named("m1"), ..Default::default() },
        v1alpha3::Machine { metadata: named("m2"), ..Default::default() },
    ]);
    let mut target = v1alpha2::MachineList::new(vec![v1alpha2::Machine { metadata: named("old"), ..Default::default() }]);
    let err = target.convert_from(&hub).unwrap_err();
    assert_eq!(err.field(), Some("ClusterName"));
    assert_eq!(target.len(), 1);
    assert_eq!(target.items[0].metadata.name.as_deref(), Some("old"));
}

#[test]
fn empty_machine_list_downgrades() {
    let hub = v1alpha3::MachineList {
        metadata: ListMeta { continue_: Some("next".into()), ..Default::default() },
        items: vec![],
    };
    let out = v1alpha2::MachineList::convert_from_hub(&hub).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.metadata.continue_.as_deref(), Some("next"));
}

#[test]
fn machine_deployment_list_upgrades() {
    let src = v1alpha2::MachineDeploymentList::new(vec![
        v1alpha2::MachineDeployment { metadata: named("md-0"), ..Default::default() },
        v1alpha2::MachineDeployment { metadata: named("md-1"), ..Default::default() },
    ]);
    let hub = src.convert_to_hub().unwrap();
    assert_eq!(hub.items[1].metadata.name.as_deref(), Some("md-1"));
}
