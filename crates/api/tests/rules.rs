#![forbid(unsafe_code)]

use capiconv_api::conversion::{
    BOOTSTRAP_FROM_HUB, MACHINE_DEPLOYMENT_SPEC_FROM_HUB, MACHINE_DEPLOYMENT_STATUS_FROM_HUB, MACHINE_SET_SPEC_FROM_HUB,
    MACHINE_SPEC_FROM_HUB,
};
use capiconv_api::{v1alpha3, ConversionError, FIELD_RULES};

fn failure_for(record: &str) -> ConversionError {
    let secret_only = v1alpha3::Bootstrap { data_secret_name: Some("s".into()), ..Default::default() };
    match record {
        "MachineSpec" => MACHINE_SPEC_FROM_HUB.convert(&Default::default()).unwrap_err(),
        "MachineSetSpec" => MACHINE_SET_SPEC_FROM_HUB.convert(&Default::default()).unwrap_err(),
        "MachineDeploymentSpec" => MACHINE_DEPLOYMENT_SPEC_FROM_HUB.convert(&Default::default()).unwrap_err(),
        "MachineDeploymentStatus" => MACHINE_DEPLOYMENT_STATUS_FROM_HUB.convert(&Default::default()).unwrap_err(),
        "Bootstrap" => BOOTSTRAP_FROM_HUB.convert(&secret_only).unwrap_err(),
        other => panic!("no failing converter known for {other}"),
    }
}

#[test]
fn every_failing_rule_matches_a_real_error() {
    let failing: Vec<_> = FIELD_RULES.iter().filter(|r| r.category.fails()).collect();
    assert_eq!(failing.len(), 5);
    for rule in failing {
        let err = failure_for(rule.record);
        assert_eq!(err.record(), Some(rule.record));
        assert_eq!(err.field(), Some(rule.field));
        assert!(err.to_string().contains(rule.field), "{err}");
    }
}
