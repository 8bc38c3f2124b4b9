//! Converters between `v1alpha2` and the `v1alpha3` hub.
//!
//! Every record and section pair has one [`RecordConverter`] per direction. The bulk copiers
//! in [`bulk`] copy identically shaped fields and hand nested sections to their own
//! converters; the rules in [`reconcile`] fix up what differs between the versions.

use capiconv_core::{ConvResult, Convertible, RecordConverter};

use crate::{v1alpha2, v1alpha3};

mod bulk;
mod reconcile;

pub use reconcile::{BOOTSTRAP_API_VERSION, BOOTSTRAP_TEMPLATE_KINDS};

// ---- v1alpha2 -> v1alpha3 ----

pub static CLUSTER_TO_HUB: RecordConverter<v1alpha2::Cluster, v1alpha3::Cluster> =
    RecordConverter::new("Cluster", bulk::cluster_to_hub).reconcile(reconcile::cluster_to_hub);

pub static CLUSTER_SPEC_TO_HUB: RecordConverter<v1alpha2::ClusterSpec, v1alpha3::ClusterSpec> =
    RecordConverter::new("ClusterSpec", bulk::cluster_spec_to_hub);

pub static CLUSTER_STATUS_TO_HUB: RecordConverter<v1alpha2::ClusterStatus, v1alpha3::ClusterStatus> =
    RecordConverter::new("ClusterStatus", bulk::cluster_status_to_hub).reconcile(reconcile::cluster_status_to_hub);

pub static MACHINE_TO_HUB: RecordConverter<v1alpha2::Machine, v1alpha3::Machine> =
    RecordConverter::new("Machine", bulk::machine_to_hub);

pub static MACHINE_SPEC_TO_HUB: RecordConverter<v1alpha2::MachineSpec, v1alpha3::MachineSpec> =
    RecordConverter::new("MachineSpec", bulk::machine_spec_to_hub).reconcile(reconcile::machine_spec_to_hub);

pub static MACHINE_STATUS_TO_HUB: RecordConverter<v1alpha2::MachineStatus, v1alpha3::MachineStatus> =
    RecordConverter::new("MachineStatus", bulk::machine_status_to_hub).reconcile(reconcile::machine_status_to_hub);

pub static BOOTSTRAP_TO_HUB: RecordConverter<v1alpha2::Bootstrap, v1alpha3::Bootstrap> =
    RecordConverter::new("Bootstrap", bulk::bootstrap_to_hub);

pub static MACHINE_TEMPLATE_TO_HUB: RecordConverter<v1alpha2::MachineTemplateSpec, v1alpha3::MachineTemplateSpec> =
    RecordConverter::new("MachineTemplateSpec", bulk::machine_template_to_hub);

pub static MACHINE_SET_TO_HUB: RecordConverter<v1alpha2::MachineSet, v1alpha3::MachineSet> =
    RecordConverter::new("MachineSet", bulk::machine_set_to_hub);

pub static MACHINE_SET_SPEC_TO_HUB: RecordConverter<v1alpha2::MachineSetSpec, v1alpha3::MachineSetSpec> =
    RecordConverter::new("MachineSetSpec", bulk::machine_set_spec_to_hub);

pub static MACHINE_SET_STATUS_TO_HUB: RecordConverter<v1alpha2::MachineSetStatus, v1alpha3::MachineSetStatus> =
    RecordConverter::new("MachineSetStatus", bulk::machine_set_status_to_hub).reconcile(reconcile::machine_set_status_to_hub);

pub static MACHINE_DEPLOYMENT_TO_HUB: RecordConverter<v1alpha2::MachineDeployment, v1alpha3::MachineDeployment> =
    RecordConverter::new("MachineDeployment", bulk::machine_deployment_to_hub);

pub static MACHINE_DEPLOYMENT_SPEC_TO_HUB: RecordConverter<v1alpha2::MachineDeploymentSpec, v1alpha3::MachineDeploymentSpec> =
    RecordConverter::new("MachineDeploymentSpec", bulk::machine_deployment_spec_to_hub);

pub static MACHINE_DEPLOYMENT_STATUS_TO_HUB: RecordConverter<v1alpha2::MachineDeploymentStatus, v1alpha3::MachineDeploymentStatus> =
    RecordConverter::new("MachineDeploymentStatus", bulk::machine_deployment_status_to_hub);

// ---- v1alpha3 -> v1alpha2 ----

pub static CLUSTER_FROM_HUB: RecordConverter<v1alpha3::Cluster, v1alpha2::Cluster> =
    RecordConverter::new("Cluster", bulk::cluster_from_hub).reconcile(reconcile::cluster_from_hub);

pub static CLUSTER_SPEC_FROM_HUB: RecordConverter<v1alpha3::ClusterSpec, v1alpha2::ClusterSpec> =
    RecordConverter::new("ClusterSpec", bulk::cluster_spec_from_hub).reconcile(reconcile::cluster_spec_from_hub);

pub static CLUSTER_STATUS_FROM_HUB: RecordConverter<v1alpha3::ClusterStatus, v1alpha2::ClusterStatus> =
    RecordConverter::new("ClusterStatus", bulk::cluster_status_from_hub).reconcile(reconcile::cluster_status_from_hub);

pub static MACHINE_FROM_HUB: RecordConverter<v1alpha3::Machine, v1alpha2::Machine> =
    RecordConverter::new("Machine", bulk::machine_from_hub);

pub static MACHINE_SPEC_FROM_HUB: RecordConverter<v1alpha3::MachineSpec, v1alpha2::MachineSpec> =
    RecordConverter::new("MachineSpec", bulk::machine_spec_from_hub).guard(reconcile::machine_spec_from_hub);

pub static MACHINE_STATUS_FROM_HUB: RecordConverter<v1alpha3::MachineStatus, v1alpha2::MachineStatus> =
    RecordConverter::new("MachineStatus", bulk::machine_status_from_hub).reconcile(reconcile::machine_status_from_hub);

pub static BOOTSTRAP_FROM_HUB: RecordConverter<v1alpha3::Bootstrap, v1alpha2::Bootstrap> =
    RecordConverter::new("Bootstrap", bulk::bootstrap_from_hub).guard(reconcile::bootstrap_from_hub);

pub static MACHINE_TEMPLATE_FROM_HUB: RecordConverter<v1alpha3::MachineTemplateSpec, v1alpha2::MachineTemplateSpec> =
    RecordConverter::new("MachineTemplateSpec", bulk::machine_template_from_hub);

pub static MACHINE_SET_FROM_HUB: RecordConverter<v1alpha3::MachineSet, v1alpha2::MachineSet> =
    RecordConverter::new("MachineSet", bulk::machine_set_from_hub);

pub static MACHINE_SET_SPEC_FROM_HUB: RecordConverter<v1alpha3::MachineSetSpec, v1alpha2::MachineSetSpec> =
    RecordConverter::new("MachineSetSpec", bulk::machine_set_spec_from_hub).guard(reconcile::machine_set_spec_from_hub);

pub static MACHINE_SET_STATUS_FROM_HUB: RecordConverter<v1alpha3::MachineSetStatus, v1alpha2::MachineSetStatus> =
    RecordConverter::new("MachineSetStatus", bulk::machine_set_status_from_hub).reconcile(reconcile::machine_set_status_from_hub);

pub static MACHINE_DEPLOYMENT_FROM_HUB: RecordConverter<v1alpha3::MachineDeployment, v1alpha2::MachineDeployment> =
    RecordConverter::new("MachineDeployment", bulk::machine_deployment_from_hub);

pub static MACHINE_DEPLOYMENT_SPEC_FROM_HUB: RecordConverter<v1alpha3::MachineDeploymentSpec, v1alpha2::MachineDeploymentSpec> =
    RecordConverter::new("MachineDeploymentSpec", bulk::machine_deployment_spec_from_hub)
        .guard(reconcile::machine_deployment_spec_from_hub);

pub static MACHINE_DEPLOYMENT_STATUS_FROM_HUB: RecordConverter<v1alpha3::MachineDeploymentStatus, v1alpha2::MachineDeploymentStatus> =
    RecordConverter::new("MachineDeploymentStatus", bulk::machine_deployment_status_from_hub)
        .guard(reconcile::machine_deployment_status_from_hub);

// ---- hub adapters ----

macro_rules! impl_convertible {
    ($($ty:ident => $to:ident, $from:ident;)*) => {
        $(
            impl Convertible for v1alpha2::$ty {
                type Hub = v1alpha3::$ty;

                fn convert_to_hub(&self) -> ConvResult<v1alpha3::$ty> {
                    $to.convert(self)
                }

                fn convert_from_hub(hub: &v1alpha3::$ty) -> ConvResult<Self> {
                    $from.convert(hub)
                }
            }
        )*
    };
}

impl_convertible! {
    Cluster => CLUSTER_TO_HUB, CLUSTER_FROM_HUB;
    Machine => MACHINE_TO_HUB, MACHINE_FROM_HUB;
    MachineSet => MACHINE_SET_TO_HUB, MACHINE_SET_FROM_HUB;
    MachineDeployment => MACHINE_DEPLOYMENT_TO_HUB, MACHINE_DEPLOYMENT_FROM_HUB;
}
