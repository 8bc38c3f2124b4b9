#![forbid(unsafe_code)]

use capiconv_api::conversion::{CLUSTER_SPEC_FROM_HUB, CLUSTER_STATUS_FROM_HUB, CLUSTER_STATUS_TO_HUB};
use capiconv_api::{v1alpha2, v1alpha3, Convertible};
use k8s_openapi::api::core::v1::ObjectReference;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::ResourceExt;

fn meta(name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some("default".to_string()),
        uid: Some("3f1c0e1a-0000-4000-8000-000000000001".to_string()),
        labels: Some([("team".to_string(), "infra".to_string())].into_iter().collect()),
        ..Default::default()
    }
}

fn old_cluster(endpoints: Vec<(&str, i64)>) -> v1alpha2::Cluster {
    v1alpha2::Cluster {
        metadata: meta("capi-quickstart"),
        spec: v1alpha2::ClusterSpec {
            cluster_network: Some(v1alpha2::ClusterNetwork {
                pods: Some(v1alpha2::NetworkRanges { cidr_blocks: vec!["192.168.0.0/16".into()] }),
                service_domain: "cluster.local".into(),
                ..Default::default()
            }),
            infrastructure_ref: Some(ObjectReference {
                kind: Some("AWSCluster".into()),
                name: Some("capi-quickstart".into()),
                ..Default::default()
            }),
        },
        status: v1alpha2::ClusterStatus {
            api_endpoints: endpoints
                .into_iter()
                .map(|(h, p)| v1alpha2::APIEndpoint { host: h.into(), port: p })
                .collect(),
            phase: Some("Provisioned".into()),
            infrastructure_ready: true,
            control_plane_initialized: true,
            ..Default::default()
        },
    }
}

#[test]
fn first_endpoint_moves_into_spec() {
    let src = old_cluster(vec![("10.0.0.1", 6443), ("10.0.0.2", 443)]);
    let hub = src.convert_to_hub().unwrap();
    assert_eq!(hub.spec.control_plane_endpoint, v1alpha3::APIEndpoint { host: "10.0.0.1".into(), port: 6443 });
    assert_eq!(hub.metadata, src.metadata);
    assert_eq!(hub.name_any(), "capi-quickstart");
    assert_eq!(hub.spec.infrastructure_ref, src.spec.infrastructure_ref);
    assert_eq!(hub.status.phase.as_deref(), Some("Provisioned"));
    assert!(hub.status.infrastructure_ready);
}

#[test]
fn endpoint_round_trips_through_hub() {
    let src = old_cluster(vec![("h", 8443)]);
    let hub = src.convert_to_hub().unwrap();
    let back = v1alpha2::Cluster::convert_from_hub(&hub).unwrap();
    assert_eq!(back.status.api_endpoints, vec![v1alpha2::APIEndpoint { host: "h".into(), port: 8443 }]);
}

#[test]
fn no_endpoints_leave_spec_endpoint_zero() {
    let hub = old_cluster(vec![]).convert_to_hub().unwrap();
    assert!(hub.spec.control_plane_endpoint.is_zero());
    let back = v1alpha2::Cluster::convert_from_hub(&hub).unwrap();
    assert!(back.status.api_endpoints.is_empty());
}

#[test]
fn extra_endpoints_are_lost_on_round_trip() {
    let src = old_cluster(vec![("a", 1), ("b", 2)]);
    let back = v1alpha2::Cluster::convert_from_hub(&src.convert_to_hub().unwrap()).unwrap();
    assert_eq!(back.status.api_endpoints.len(), 1);
    assert_ne!(back, src);
}

#[test]
fn oversized_port_is_narrowed() {
    let hub = old_cluster(vec![("h", (1i64 << 32) + 6443)]).convert_to_hub().unwrap();
    assert_eq!(hub.spec.control_plane_endpoint.port, 6443);
}

#[test]
fn cluster_without_version_specific_fields_round_trips() {
    let src = old_cluster(vec![("h", 6443)]);
    let back = v1alpha2::Cluster::convert_from_hub(&src.convert_to_hub().unwrap()).unwrap();
    assert_eq!(back, src);
}

#[test]
fn status_error_fields_are_renamed_both_ways() {
    let src = v1alpha2::ClusterStatus {
        error_message: Some("M".into()),
        error_reason: Some("R".into()),
        ..Default::default()
    };
    let hub = CLUSTER_STATUS_TO_HUB.convert(&src).unwrap();
    assert_eq!(hub.failure_message.as_deref(), Some("M"));
    assert_eq!(hub.failure_reason.as_deref(), Some("R"));

    let back = CLUSTER_STATUS_FROM_HUB.convert(&hub).unwrap();
    assert_eq!(back.error_message.as_deref(), Some("M"));
    assert_eq!(back.error_reason.as_deref(), Some("R"));
    assert_eq!(back, src);
}

#[test]
fn newer_only_cluster_fields_are_discarded_quietly() {
    let status = v1alpha3::ClusterStatus { control_plane_ready: true, phase: Some("Provisioned".into()), ..Default::default() };
    let down = CLUSTER_STATUS_FROM_HUB.convert(&status).unwrap();
    assert_eq!(down.phase.as_deref(), Some("Provisioned"));

    let spec = v1alpha3::ClusterSpec {
        control_plane_ref: Some(ObjectReference { kind: Some("KubeadmControlPlane".into()), ..Default::default() }),
        ..Default::default()
    };
    let down = CLUSTER_SPEC_FROM_HUB.convert(&spec).unwrap();
    assert_eq!(down, v1alpha2::ClusterSpec::default());
}

#[test]
fn hub_cluster_converts_down_with_endpoint() {
    let hub = v1alpha3::Cluster {
        metadata: meta("c"),
        spec: v1alpha3::ClusterSpec {
            control_plane_endpoint: v1alpha3::APIEndpoint { host: "lb.example.com".into(), port: 443 },
            ..Default::default()
        },
        status: v1alpha3::ClusterStatus { failure_reason: Some("InvalidConfiguration".into()), ..Default::default() },
    };
    let mut old = v1alpha2::Cluster::default();
    old.convert_from(&hub).unwrap();
    assert_eq!(old.metadata, hub.metadata);
    assert_eq!(old.status.api_endpoints, vec![v1alpha2::APIEndpoint { host: "lb.example.com".into(), port: 443 }]);
    assert_eq!(old.status.error_reason.as_deref(), Some("InvalidConfiguration"));
}
