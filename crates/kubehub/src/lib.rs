//! capiconv kubehub: kind-keyed dispatch of untyped objects and `ConversionReview` handling.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use capiconv_api::{v1alpha2, ConversionError, Convertible};
use capiconv_core::{Direction, SchemaVersion};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

mod review;

/// Errors raised while dispatching an untyped object to its converter.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("object is missing {0}")]
    MissingField(&'static str),
    #[error("unsupported apiVersion {0}")]
    UnsupportedVersion(String),
    #[error("no converter registered for kind {0}")]
    UnknownKind(String),
    #[error("encoding {kind}: {source}")]
    Encode { kind: String, source: serde_json::Error },
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

type ObjectFn = fn(&'static str, Value) -> DispatchResult<Value>;

#[derive(Clone, Copy)]
struct KindEntry {
    to_hub: ObjectFn,
    from_hub: ObjectFn,
}

/// An object whose shape does not fit the registered record type.
fn structural(kind: &'static str, source: serde_json::Error) -> DispatchError {
    ConversionError::Structural { record: kind, detail: source.to_string() }.into()
}

fn to_hub<T>(kind: &'static str, obj: Value) -> DispatchResult<Value>
where
    T: Convertible + DeserializeOwned,
    T::Hub: Serialize,
{
    let src: T = serde_json::from_value(obj).map_err(|source| structural(kind, source))?;
    let hub = src.convert_to_hub()?;
    serde_json::to_value(&hub).map_err(|source| DispatchError::Encode { kind: kind.to_string(), source })
}

fn from_hub<T>(kind: &'static str, obj: Value) -> DispatchResult<Value>
where
    T: Convertible + Serialize,
    T::Hub: DeserializeOwned,
{
    let hub: T::Hub = serde_json::from_value(obj).map_err(|source| structural(kind, source))?;
    let out = T::convert_from_hub(&hub)?;
    serde_json::to_value(&out).map_err(|source| DispatchError::Encode { kind: kind.to_string(), source })
}

/// Converter lookup table keyed by kind name (`Cluster`, `ClusterList`, ...).
pub struct Registry {
    kinds: BTreeMap<&'static str, KindEntry>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut r = Registry::empty();
        r.register::<v1alpha2::Cluster>("Cluster");
        r.register::<v1alpha2::ClusterList>("ClusterList");
        r.register::<v1alpha2::Machine>("Machine");
        r.register::<v1alpha2::MachineList>("MachineList");
        r.register::<v1alpha2::MachineSet>("MachineSet");
        r.register::<v1alpha2::MachineSetList>("MachineSetList");
        r.register::<v1alpha2::MachineDeployment>("MachineDeployment");
        r.register::<v1alpha2::MachineDeploymentList>("MachineDeploymentList");
        r
    }
}

impl Registry {
    pub fn empty() -> Self {
        Self { kinds: BTreeMap::new() }
    }

    /// Bind a spoke type `T` to `kind`. Later registrations replace earlier ones.
    pub fn register<T>(&mut self, kind: &'static str)
    where
        T: Convertible + Serialize + DeserializeOwned,
        T::Hub: Serialize + DeserializeOwned,
    {
        self.kinds.insert(kind, KindEntry { to_hub: to_hub::<T>, from_hub: from_hub::<T> });
    }

    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    pub fn supports(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Convert one object to `desired_api_version` (bare or group-qualified).
    ///
    /// Objects already in the desired version are returned unchanged. The converted object
    /// carries the target `apiVersion` and `kind`; list items get them too.
    pub fn convert_object(&self, mut obj: Value, desired_api_version: &str) -> DispatchResult<Value> {
        let target = SchemaVersion::parse(desired_api_version)
            .ok_or_else(|| DispatchError::UnsupportedVersion(desired_api_version.to_string()))?;
        let api_version = obj
            .get("apiVersion")
            .and_then(Value::as_str)
            .ok_or(DispatchError::MissingField("apiVersion"))?;
        let source = SchemaVersion::parse(api_version)
            .ok_or_else(|| DispatchError::UnsupportedVersion(api_version.to_string()))?;
        let kind = obj
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(DispatchError::MissingField("kind"))?
            .to_string();

        let Some(direction) = Direction::between(source, target) else {
            debug!(%kind, version = %source, "object already in desired version");
            return Ok(obj);
        };
        let (&registered, entry) = self
            .kinds
            .get_key_value(kind.as_str())
            .ok_or_else(|| DispatchError::UnknownKind(kind.clone()))?;

        if let Some(map) = obj.as_object_mut() {
            map.remove("apiVersion");
            map.remove("kind");
        }
        let convert = match direction {
            Direction::ToHub => entry.to_hub,
            Direction::FromHub => entry.from_hub,
        };
        let mut out = convert(registered, obj)?;
        stamp_type(&mut out, &kind, target);
        debug!(%kind, %direction, "converted object");
        Ok(out)
    }

    /// Convert every object, failing the whole batch on the first error.
    pub fn convert_objects(&self, objects: Vec<Value>, desired_api_version: &str) -> DispatchResult<Vec<Value>> {
        objects
            .into_iter()
            .map(|o| self.convert_object(o, desired_api_version))
            .collect()
    }
}

fn stamp_type(obj: &mut Value, kind: &str, version: SchemaVersion) {
    let Some(map) = obj.as_object_mut() else { return };
    map.insert("apiVersion".into(), Value::String(version.api_version()));
    map.insert("kind".into(), Value::String(kind.to_string()));
    if let Some(item_kind) = kind.strip_suffix("List") {
        if let Some(items) = map.get_mut("items").and_then(Value::as_array_mut) {
            for item in items.iter_mut() {
                stamp_type(item, item_kind, version);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn old_cluster() -> Value {
        json!({
            "apiVersion": "cluster.x-k8s.io/v1alpha2",
            "kind": "Cluster",
            "metadata": { "name": "c", "namespace": "default", "uid": "0b6f0c51-8f6e-4d8a-9a43-4b2f5a6d0001" },
            "status": { "apiEndpoints": [ { "host": "10.0.0.1", "port": 6443 } ], "errorMessage": "M" }
        })
    }

    #[test]
    fn registers_every_kind() {
        let r = Registry::default();
        let kinds: Vec<_> = r.kinds().collect();
        assert_eq!(kinds.len(), 8);
        assert!(r.supports("MachineDeploymentList"));
        assert!(!r.supports("KubeadmConfig"));
    }

    #[test]
    fn upgrades_cluster_and_stamps_type() {
        let out = Registry::default().convert_object(old_cluster(), "cluster.x-k8s.io/v1alpha3").unwrap();
        assert_eq!(out["apiVersion"], "cluster.x-k8s.io/v1alpha3");
        assert_eq!(out["kind"], "Cluster");
        assert_eq!(out["metadata"]["uid"], "0b6f0c51-8f6e-4d8a-9a43-4b2f5a6d0001");
        assert_eq!(out["spec"]["controlPlaneEndpoint"]["port"], 6443);
        assert_eq!(out["status"]["failureMessage"], "M");
    }

    #[test]
    fn same_version_is_passthrough() {
        let obj = old_cluster();
        let out = Registry::default().convert_object(obj.clone(), "v1alpha2").unwrap();
        assert_eq!(out, obj);
    }

    #[test]
    fn downgrade_error_is_verbatim() {
        let obj = json!({ "apiVersion": "cluster.x-k8s.io/v1alpha3", "kind": "Machine", "metadata": { "name": "m" } });
        let err = Registry::default().convert_object(obj, "cluster.x-k8s.io/v1alpha2").unwrap_err();
        let direct = capiconv_api::conversion::MACHINE_SPEC_FROM_HUB.convert(&Default::default()).unwrap_err();
        assert_eq!(err.to_string(), direct.to_string());
        assert!(matches!(err, DispatchError::Conversion(ConversionError::IrrecoverableRemoval { .. })));
    }

    #[test]
    fn rejects_unknown_kind_and_version() {
        let r = Registry::default();
        let obj = json!({ "apiVersion": "cluster.x-k8s.io/v1alpha2", "kind": "KubeadmConfig" });
        assert!(matches!(r.convert_object(obj, "v1alpha3"), Err(DispatchError::UnknownKind(k)) if k == "KubeadmConfig"));
        assert!(matches!(r.convert_object(old_cluster(), "v1beta1"), Err(DispatchError::UnsupportedVersion(_))));
        let obj = json!({ "apiVersion": "infrastructure.cluster.x-k8s.io/v1alpha2", "kind": "Cluster" });
        assert!(matches!(r.convert_object(obj, "v1alpha3"), Err(DispatchError::UnsupportedVersion(_))));
        let obj = json!({ "kind": "Cluster" });
        assert!(matches!(r.convert_object(obj, "v1alpha3"), Err(DispatchError::MissingField("apiVersion"))));
    }

    #[test]
    fn malformed_object_is_structural() {
        let obj = json!({ "apiVersion": "cluster.x-k8s.io/v1alpha2", "kind": "Cluster", "status": { "apiEndpoints": "nope" } });
        let err = Registry::default().convert_object(obj, "v1alpha3").unwrap_err();
        assert!(
            matches!(err, DispatchError::Conversion(ConversionError::Structural { record: "Cluster", .. })),
            "{err}"
        );
        assert!(err.to_string().starts_with("structural incompatibility in Cluster: "), "{err}");

        let obj = json!({ "apiVersion": "cluster.x-k8s.io/v1alpha3", "kind": "MachineList", "items": [{ "spec": { "clusterName": 7 } }] });
        let err = Registry::default().convert_object(obj, "v1alpha2").unwrap_err();
        assert!(
            matches!(err, DispatchError::Conversion(ConversionError::Structural { record: "MachineList", .. })),
            "{err}"
        );
    }

    #[test]
    fn list_items_get_type_fields() {
        let list = json!({
            "apiVersion": "cluster.x-k8s.io/v1alpha2",
            "kind": "ClusterList",
            "metadata": { "resourceVersion": "7" },
            "items": [ { "metadata": { "name": "a" } }, { "metadata": { "name": "b" } } ]
        });
        let out = Registry::default().convert_object(list, "v1alpha3").unwrap();
        assert_eq!(out["kind"], "ClusterList");
        assert_eq!(out["metadata"]["resourceVersion"], "7");
        assert_eq!(out["items"][1]["metadata"]["name"], "b");
        assert_eq!(out["items"][0]["kind"], "Cluster");
        assert_eq!(out["items"][0]["apiVersion"], "cluster.x-k8s.io/v1alpha3");
    }

    #[test]
    fn batch_fails_as_a_whole() {
        let bad = json!({ "apiVersion": "cluster.x-k8s.io/v1alpha3", "kind": "MachineSet", "metadata": { "name": "ms" } });
        let err = Registry::default()
            .convert_objects(vec![old_cluster(), bad, old_cluster()], "v1alpha2")
            .unwrap_err();
        assert!(err.to_string().contains("ClusterName"));
    }
}
