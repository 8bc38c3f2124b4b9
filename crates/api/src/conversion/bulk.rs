//! Bulk field copiers: copy every field that has an identically named and shaped counterpart.
//!
//! These know nothing about semantic differences between the versions. Fields that exist in
//! only one version, or that changed name or position, are left at their zero value here.

use capiconv_core::ConvResult;

use super::*;
use crate::{v1alpha2, v1alpha3};

// ---- v1alpha2 -> v1alpha3 ----

pub(super) fn cluster_to_hub(src: &v1alpha2::Cluster, dst: &mut v1alpha3::Cluster) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = CLUSTER_SPEC_TO_HUB.convert(&src.spec)?;
    dst.status = CLUSTER_STATUS_TO_HUB.convert(&src.status)?;
    Ok(())
}

pub(super) fn cluster_spec_to_hub(src: &v1alpha2::ClusterSpec, dst: &mut v1alpha3::ClusterSpec) -> ConvResult<()> {
    dst.cluster_network = src.cluster_network.as_ref().map(|n| v1alpha3::ClusterNetwork {
        api_server_port: n.api_server_port,
        services: n.services.as_ref().map(|r| v1alpha3::NetworkRanges { cidr_blocks: r.cidr_blocks.clone() }),
        pods: n.pods.as_ref().map(|r| v1alpha3::NetworkRanges { cidr_blocks: r.cidr_blocks.clone() }),
        service_domain: n.service_domain.clone(),
    });
    dst.infrastructure_ref = src.infrastructure_ref.clone();
    Ok(())
}

pub(super) fn cluster_status_to_hub(src: &v1alpha2::ClusterStatus, dst: &mut v1alpha3::ClusterStatus) -> ConvResult<()> {
    dst.phase = src.phase.clone();
    dst.infrastructure_ready = src.infrastructure_ready;
    dst.control_plane_initialized = src.control_plane_initialized;
    Ok(())
}

pub(super) fn machine_to_hub(src: &v1alpha2::Machine, dst: &mut v1alpha3::Machine) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = MACHINE_SPEC_TO_HUB.convert(&src.spec)?;
    dst.status = MACHINE_STATUS_TO_HUB.convert(&src.status)?;
    Ok(())
}

pub(super) fn machine_spec_to_hub(src: &v1alpha2::MachineSpec, dst: &mut v1alpha3::MachineSpec) -> ConvResult<()> {
    dst.bootstrap = BOOTSTRAP_TO_HUB.convert(&src.bootstrap)?;
    dst.infrastructure_ref = src.infrastructure_ref.clone();
    dst.version = src.version.clone();
    dst.provider_id = src.provider_id.clone();
    Ok(())
}

pub(super) fn bootstrap_to_hub(src: &v1alpha2::Bootstrap, dst: &mut v1alpha3::Bootstrap) -> ConvResult<()> {
    dst.config_ref = src.config_ref.clone();
    dst.data = src.data.clone();
    Ok(())
}

pub(super) fn machine_status_to_hub(src: &v1alpha2::MachineStatus, dst: &mut v1alpha3::MachineStatus) -> ConvResult<()> {
    dst.node_ref = src.node_ref.clone();
    dst.last_updated = src.last_updated.clone();
    dst.version = src.version.clone();
    dst.addresses = src
        .addresses
        .iter()
        .map(|a| v1alpha3::MachineAddress { address_type: a.address_type.clone(), address: a.address.clone() })
        .collect();
    dst.phase = src.phase.clone();
    dst.bootstrap_ready = src.bootstrap_ready;
    dst.infrastructure_ready = src.infrastructure_ready;
    Ok(())
}

pub(super) fn machine_template_to_hub(
    src: &v1alpha2::MachineTemplateSpec,
    dst: &mut v1alpha3::MachineTemplateSpec,
) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = MACHINE_SPEC_TO_HUB.convert(&src.spec)?;
    Ok(())
}

pub(super) fn machine_set_to_hub(src: &v1alpha2::MachineSet, dst: &mut v1alpha3::MachineSet) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = MACHINE_SET_SPEC_TO_HUB.convert(&src.spec)?;
    dst.status = MACHINE_SET_STATUS_TO_HUB.convert(&src.status)?;
    Ok(())
}

pub(super) fn machine_set_spec_to_hub(src: &v1alpha2::MachineSetSpec, dst: &mut v1alpha3::MachineSetSpec) -> ConvResult<()> {
    dst.replicas = src.replicas;
    dst.min_ready_seconds = src.min_ready_seconds;
    dst.delete_policy = src.delete_policy.clone();
    dst.selector = src.selector.clone();
    dst.template = MACHINE_TEMPLATE_TO_HUB.convert(&src.template)?;
    Ok(())
}

pub(super) fn machine_set_status_to_hub(
    src: &v1alpha2::MachineSetStatus,
    dst: &mut v1alpha3::MachineSetStatus,
) -> ConvResult<()> {
    dst.selector = src.selector.clone();
    dst.replicas = src.replicas;
    dst.fully_labeled_replicas = src.fully_labeled_replicas;
    dst.ready_replicas = src.ready_replicas;
    dst.available_replicas = src.available_replicas;
    dst.observed_generation = src.observed_generation;
    Ok(())
}

pub(super) fn machine_deployment_to_hub(
    src: &v1alpha2::MachineDeployment,
    dst: &mut v1alpha3::MachineDeployment,
) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = MACHINE_DEPLOYMENT_SPEC_TO_HUB.convert(&src.spec)?;
    dst.status = MACHINE_DEPLOYMENT_STATUS_TO_HUB.convert(&src.status)?;
    Ok(())
}

pub(super) fn machine_deployment_spec_to_hub(
    src: &v1alpha2::MachineDeploymentSpec,
    dst: &mut v1alpha3::MachineDeploymentSpec,
) -> ConvResult<()> {
    dst.replicas = src.replicas;
    dst.selector = src.selector.clone();
    dst.template = MACHINE_TEMPLATE_TO_HUB.convert(&src.template)?;
    dst.strategy = src.strategy.as_ref().map(|s| v1alpha3::MachineDeploymentStrategy {
        strategy_type: s.strategy_type.clone(),
        rolling_update: s.rolling_update.as_ref().map(|r| v1alpha3::MachineRollingUpdateDeployment {
            max_unavailable: r.max_unavailable.clone(),
            max_surge: r.max_surge.clone(),
        }),
    });
    dst.min_ready_seconds = src.min_ready_seconds;
    dst.revision_history_limit = src.revision_history_limit;
    dst.paused = src.paused;
    dst.progress_deadline_seconds = src.progress_deadline_seconds;
    Ok(())
}

pub(super) fn machine_deployment_status_to_hub(
    src: &v1alpha2::MachineDeploymentStatus,
    dst: &mut v1alpha3::MachineDeploymentStatus,
) -> ConvResult<()> {
    dst.observed_generation = src.observed_generation;
    dst.selector = src.selector.clone();
    dst.replicas = src.replicas;
    dst.updated_replicas = src.updated_replicas;
    dst.ready_replicas = src.ready_replicas;
    dst.available_replicas = src.available_replicas;
    dst.unavailable_replicas = src.unavailable_replicas;
    Ok(())
}

// ---- v1alpha3 -> v1alpha2 ----

pub(super) fn cluster_from_hub(src: &v1alpha3::Cluster, dst: &mut v1alpha2::Cluster) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = CLUSTER_SPEC_FROM_HUB.convert(&src.spec)?;
    dst.status = CLUSTER_STATUS_FROM_HUB.convert(&src.status)?;
    Ok(())
}

pub(super) fn cluster_spec_from_hub(src: &v1alpha3::ClusterSpec, dst: &mut v1alpha2::ClusterSpec) -> ConvResult<()> {
    dst.cluster_network = src.cluster_network.as_ref().map(|n| v1alpha2::ClusterNetwork {
        api_server_port: n.api_server_port,
        services: n.services.as_ref().map(|r| v1alpha2::NetworkRanges { cidr_blocks: r.cidr_blocks.clone() }),
        pods: n.pods.as_ref().map(|r| v1alpha2::NetworkRanges { cidr_blocks: r.cidr_blocks.clone() }),
        service_domain: n.service_domain.clone(),
    });
    dst.infrastructure_ref = src.infrastructure_ref.clone();
    Ok(())
}

pub(super) fn cluster_status_from_hub(src: &v1alpha3::ClusterStatus, dst: &mut v1alpha2::ClusterStatus) -> ConvResult<()> {
    dst.phase = src.phase.clone();
    dst.infrastructure_ready = src.infrastructure_ready;
    dst.control_plane_initialized = src.control_plane_initialized;
    Ok(())
}

pub(super) fn machine_from_hub(src: &v1alpha3::Machine, dst: &mut v1alpha2::Machine) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = MACHINE_SPEC_FROM_HUB.convert(&src.spec)?;
    dst.status = MACHINE_STATUS_FROM_HUB.convert(&src.status)?;
    Ok(())
}

pub(super) fn machine_spec_from_hub(src: &v1alpha3::MachineSpec, dst: &mut v1alpha2::MachineSpec) -> ConvResult<()> {
    dst.bootstrap = BOOTSTRAP_FROM_HUB.convert(&src.bootstrap)?;
    dst.infrastructure_ref = src.infrastructure_ref.clone();
    dst.version = src.version.clone();
    dst.provider_id = src.provider_id.clone();
    Ok(())
}

pub(super) fn bootstrap_from_hub(src: &v1alpha3::Bootstrap, dst: &mut v1alpha2::Bootstrap) -> ConvResult<()> {
    dst.config_ref = src.config_ref.clone();
    dst.data = src.data.clone();
    Ok(())
}

pub(super) fn machine_status_from_hub(src: &v1alpha3::MachineStatus, dst: &mut v1alpha2::MachineStatus) -> ConvResult<()> {
    dst.node_ref = src.node_ref.clone();
    dst.last_updated = src.last_updated.clone();
    dst.version = src.version.clone();
    dst.addresses = src
        .addresses
        .iter()
        .map(|a| v1alpha2::MachineAddress { address_type: a.address_type.clone(), address: a.address.clone() })
        .collect();
    dst.phase = src.phase.clone();
    dst.bootstrap_ready = src.bootstrap_ready;
    dst.infrastructure_ready = src.infrastructure_ready;
    Ok(())
}

pub(super) fn machine_template_from_hub(
    src: &v1alpha3::MachineTemplateSpec,
    dst: &mut v1alpha2::MachineTemplateSpec,
) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = MACHINE_SPEC_FROM_HUB.convert(&src.spec)?;
    Ok(())
}

pub(super) fn machine_set_from_hub(src: &v1alpha3::MachineSet, dst: &mut v1alpha2::MachineSet) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = MACHINE_SET_SPEC_FROM_HUB.convert(&src.spec)?;
    dst.status = MACHINE_SET_STATUS_FROM_HUB.convert(&src.status)?;
    Ok(())
}

pub(super) fn machine_set_spec_from_hub(
    src: &v1alpha3::MachineSetSpec,
    dst: &mut v1alpha2::MachineSetSpec,
) -> ConvResult<()> {
    dst.replicas = src.replicas;
    dst.min_ready_seconds = src.min_ready_seconds;
    dst.delete_policy = src.delete_policy.clone();
    dst.selector = src.selector.clone();
    dst.template = MACHINE_TEMPLATE_FROM_HUB.convert(&src.template)?;
    Ok(())
}

pub(super) fn machine_set_status_from_hub(
    src: &v1alpha3::MachineSetStatus,
    dst: &mut v1alpha2::MachineSetStatus,
) -> ConvResult<()> {
    dst.selector = src.selector.clone();
    dst.replicas = src.replicas;
    dst.fully_labeled_replicas = src.fully_labeled_replicas;
    dst.ready_replicas = src.ready_replicas;
    dst.available_replicas = src.available_replicas;
    dst.observed_generation = src.observed_generation;
    Ok(())
}

pub(super) fn machine_deployment_from_hub(
    src: &v1alpha3::MachineDeployment,
    dst: &mut v1alpha2::MachineDeployment,
) -> ConvResult<()> {
    dst.metadata = src.metadata.clone();
    dst.spec = MACHINE_DEPLOYMENT_SPEC_FROM_HUB.convert(&src.spec)?;
    dst.status = MACHINE_DEPLOYMENT_STATUS_FROM_HUB.convert(&src.status)?;
    Ok(())
}

pub(super) fn machine_deployment_spec_from_hub(
    src: &v1alpha3::MachineDeploymentSpec,
    dst: &mut v1alpha2::MachineDeploymentSpec,
) -> ConvResult<()> {
    dst.replicas = src.replicas;
    dst.selector = src.selector.clone();
    dst.template = MACHINE_TEMPLATE_FROM_HUB.convert(&src.template)?;
    dst.strategy = src.strategy.as_ref().map(|s| v1alpha2::MachineDeploymentStrategy {
        strategy_type: s.strategy_type.clone(),
        rolling_update: s.rolling_update.as_ref().map(|r| v1alpha2::MachineRollingUpdateDeployment {
            max_unavailable: r.max_unavailable.clone(),
            max_surge: r.max_surge.clone(),
        }),
    });
    dst.min_ready_seconds = src.min_ready_seconds;
    dst.revision_history_limit = src.revision_history_limit;
    dst.paused = src.paused;
    dst.progress_deadline_seconds = src.progress_deadline_seconds;
    Ok(())
}

pub(super) fn machine_deployment_status_from_hub(
    src: &v1alpha3::MachineDeploymentStatus,
    dst: &mut v1alpha2::MachineDeploymentStatus,
) -> ConvResult<()> {
    dst.observed_generation = src.observed_generation;
    dst.selector = src.selector.clone();
    dst.replicas = src.replicas;
    dst.updated_replicas = src.updated_replicas;
    dst.ready_replicas = src.ready_replicas;
    dst.available_replicas = src.available_replicas;
    dst.unavailable_replicas = src.unavailable_replicas;
    Ok(())
}
