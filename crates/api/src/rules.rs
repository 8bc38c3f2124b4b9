//! Ledger of every field that does not survive a plain bulk copy.
//!
//! Converting to the hub and back is not the identity: each `Discard`, `IrrecoverableRemoval`
//! and `UnsafeDowngrade` entry below marks where data is lost or refused.

use capiconv_core::{Direction, FieldRule, RuleCategory};

const fn rule(
    record: &'static str,
    field: &'static str,
    direction: Direction,
    category: RuleCategory,
    note: &'static str,
) -> FieldRule {
    FieldRule { record, field, direction, category, note }
}

use Direction::{FromHub, ToHub};
use RuleCategory::*;

pub static FIELD_RULES: &[FieldRule] = &[
    rule("Cluster", "Status.APIEndpoints", ToHub, Relocation,
        "first endpoint becomes spec.controlPlaneEndpoint; port narrowed to 32 bits; further endpoints dropped"),
    rule("Cluster", "Spec.ControlPlaneEndpoint", FromHub, Relocation,
        "non-zero endpoint becomes the only entry of status.apiEndpoints"),
    rule("ClusterStatus", "ErrorReason", ToHub, Rename, "copied to failureReason"),
    rule("ClusterStatus", "ErrorMessage", ToHub, Rename, "copied to failureMessage"),
    rule("ClusterStatus", "FailureReason", FromHub, Rename, "copied to errorReason"),
    rule("ClusterStatus", "FailureMessage", FromHub, Rename, "copied to errorMessage"),
    rule("ClusterStatus", "ControlPlaneReady", FromHub, Discard, "no v1alpha2 counterpart"),
    rule("ClusterSpec", "ControlPlaneRef", FromHub, Discard, "no v1alpha2 counterpart"),
    rule("MachineStatus", "ErrorReason", ToHub, Rename, "copied to failureReason"),
    rule("MachineStatus", "ErrorMessage", ToHub, Rename, "copied to failureMessage"),
    rule("MachineStatus", "FailureReason", FromHub, Rename, "copied to errorReason"),
    rule("MachineStatus", "FailureMessage", FromHub, Rename, "copied to errorMessage"),
    rule("MachineSetStatus", "ErrorReason", ToHub, Rename, "copied to failureReason"),
    rule("MachineSetStatus", "ErrorMessage", ToHub, Rename, "copied to failureMessage"),
    rule("MachineSetStatus", "FailureReason", FromHub, Rename, "copied to errorReason"),
    rule("MachineSetStatus", "FailureMessage", FromHub, Rename, "copied to errorMessage"),
    rule("MachineSpec", "Bootstrap.ConfigRef.APIVersion", ToHub, ConditionalEnrichment,
        "set to v1alpha3 when configRef.kind is KubeadmConfig or KubeadmConfigTemplate; applies to templates too"),
    rule("MachineSpec", "ObjectMeta", ToHub, Discard, "embedded metadata has no v1alpha3 counterpart"),
    rule("MachineSpec", "ClusterName", FromHub, IrrecoverableRemoval, "always fails"),
    rule("MachineSetSpec", "ClusterName", FromHub, IrrecoverableRemoval, "always fails"),
    rule("MachineDeploymentSpec", "ClusterName", FromHub, IrrecoverableRemoval, "always fails"),
    rule("MachineDeploymentStatus", "Phase", FromHub, IrrecoverableRemoval, "always fails"),
    rule("Bootstrap", "DataSecretName", FromHub, UnsafeDowngrade,
        "fails when data is only available by Secret reference; with inline data the reference is dropped"),
];

/// Rules matching `record` and `direction`; `None` matches everything.
pub fn rules_for(record: Option<&str>, direction: Option<Direction>) -> impl Iterator<Item = &'static FieldRule> + '_ {
    FIELD_RULES
        .iter()
        .filter(move |r| record.map_or(true, |k| r.record == k) && direction.map_or(true, |d| r.direction == d))
}
