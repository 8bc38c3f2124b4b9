//! Field reconcilers: the fix-ups the bulk copiers cannot express.
//!
//! Which fields fail and which are dropped quietly is decided per field; see
//! [`crate::rules::FIELD_RULES`] for the full ledger.

use capiconv_core::{ConvResult, ConversionError, Direction};
use tracing::trace;

use crate::{v1alpha2, v1alpha3};

/// Bootstrap config kinds whose reference is moved to the new API version on upgrade.
pub const BOOTSTRAP_TEMPLATE_KINDS: [&str; 2] = ["KubeadmConfig", "KubeadmConfigTemplate"];

/// Version written into a recognised bootstrap config reference.
pub const BOOTSTRAP_API_VERSION: &str = "v1alpha3";

fn removed(record: &'static str, field: &'static str) -> ConversionError {
    ConversionError::IrrecoverableRemoval { record, field, direction: Direction::FromHub }
}

// ---- v1alpha2 -> v1alpha3 ----

/// `status.apiEndpoints[0]` becomes `spec.controlPlaneEndpoint`.
pub(super) fn cluster_to_hub(src: &v1alpha2::Cluster, dst: &mut v1alpha3::Cluster) -> ConvResult<()> {
    if let Some(endpoint) = src.status.api_endpoints.first() {
        dst.spec.control_plane_endpoint = v1alpha3::APIEndpoint {
            host: endpoint.host.clone(),
            port: endpoint.port as i32,
        };
    }
    if src.status.api_endpoints.len() > 1 {
        trace!(dropped = src.status.api_endpoints.len() - 1, "discarding extra api endpoints");
    }
    Ok(())
}

pub(super) fn cluster_status_to_hub(src: &v1alpha2::ClusterStatus, dst: &mut v1alpha3::ClusterStatus) -> ConvResult<()> {
    dst.failure_message = src.error_message.clone();
    dst.failure_reason = src.error_reason.clone();
    Ok(())
}

pub(super) fn machine_spec_to_hub(src: &v1alpha2::MachineSpec, dst: &mut v1alpha3::MachineSpec) -> ConvResult<()> {
    if let Some(config_ref) = dst.bootstrap.config_ref.as_mut() {
        let kind = config_ref.kind.as_deref().unwrap_or_default();
        if BOOTSTRAP_TEMPLATE_KINDS.contains(&kind) {
            config_ref.api_version = Some(BOOTSTRAP_API_VERSION.to_string());
        }
    }
    if src.metadata != Default::default() {
        trace!("discarding embedded MachineSpec metadata");
    }
    Ok(())
}

pub(super) fn machine_status_to_hub(src: &v1alpha2::MachineStatus, dst: &mut v1alpha3::MachineStatus) -> ConvResult<()> {
    dst.failure_message = src.error_message.clone();
    dst.failure_reason = src.error_reason.clone();
    Ok(())
}

pub(super) fn machine_set_status_to_hub(
    src: &v1alpha2::MachineSetStatus,
    dst: &mut v1alpha3::MachineSetStatus,
) -> ConvResult<()> {
    dst.failure_message = src.error_message.clone();
    dst.failure_reason = src.error_reason.clone();
    Ok(())
}

// ---- v1alpha3 -> v1alpha2 ----

/// A non-zero `spec.controlPlaneEndpoint` becomes the only entry of `status.apiEndpoints`.
pub(super) fn cluster_from_hub(src: &v1alpha3::Cluster, dst: &mut v1alpha2::Cluster) -> ConvResult<()> {
    let endpoint = &src.spec.control_plane_endpoint;
    if !endpoint.is_zero() {
        dst.status.api_endpoints = vec![v1alpha2::APIEndpoint {
            host: endpoint.host.clone(),
            port: i64::from(endpoint.port),
        }];
    }
    Ok(())
}

pub(super) fn cluster_spec_from_hub(src: &v1alpha3::ClusterSpec, _dst: &mut v1alpha2::ClusterSpec) -> ConvResult<()> {
    if src.control_plane_ref.is_some() {
        trace!("discarding ClusterSpec controlPlaneRef");
    }
    Ok(())
}

pub(super) fn cluster_status_from_hub(src: &v1alpha3::ClusterStatus, dst: &mut v1alpha2::ClusterStatus) -> ConvResult<()> {
    if src.control_plane_ready {
        trace!("discarding ClusterStatus controlPlaneReady");
    }
    dst.error_message = src.failure_message.clone();
    dst.error_reason = src.failure_reason.clone();
    Ok(())
}

pub(super) fn machine_spec_from_hub(_src: &v1alpha3::MachineSpec) -> ConvResult<()> {
    Err(removed("MachineSpec", "ClusterName"))
}

pub(super) fn machine_set_spec_from_hub(_src: &v1alpha3::MachineSetSpec) -> ConvResult<()> {
    Err(removed("MachineSetSpec", "ClusterName"))
}

pub(super) fn machine_deployment_spec_from_hub(_src: &v1alpha3::MachineDeploymentSpec) -> ConvResult<()> {
    Err(removed("MachineDeploymentSpec", "ClusterName"))
}

pub(super) fn machine_deployment_status_from_hub(_src: &v1alpha3::MachineDeploymentStatus) -> ConvResult<()> {
    Err(removed("MachineDeploymentStatus", "Phase"))
}

/// Secret-backed bootstrap data must never be copied into the inline v1alpha2 field.
pub(super) fn bootstrap_from_hub(src: &v1alpha3::Bootstrap) -> ConvResult<()> {
    if src.data.is_none() && src.data_secret_name.is_some() {
        return Err(ConversionError::UnsafeDowngrade {
            record: "Bootstrap",
            field: "DataSecretName",
            direction: Direction::FromHub,
            reason: "bootstrap data held in a Secret reference cannot be moved to the inline field",
        });
    }
    Ok(())
}

pub(super) fn machine_status_from_hub(src: &v1alpha3::MachineStatus, dst: &mut v1alpha2::MachineStatus) -> ConvResult<()> {
    dst.error_message = src.failure_message.clone();
    dst.error_reason = src.failure_reason.clone();
    Ok(())
}

pub(super) fn machine_set_status_from_hub(
    src: &v1alpha3::MachineSetStatus,
    dst: &mut v1alpha2::MachineSetStatus,
) -> ConvResult<()> {
    dst.error_message = src.failure_message.clone();
    dst.error_reason = src.failure_reason.clone();
    Ok(())
}
