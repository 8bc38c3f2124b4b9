//! capiconv core: schema versions, converters and hub traits shared by the typed API crate.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

pub mod convert;
pub mod error;
pub mod hub;
pub mod rules;

pub use convert::{convert_all, RecordConverter, RecordList};
pub use error::{ConvResult, ConversionError};
pub use hub::{downcast_hub, downcast_hub_mut, Convertible, Hub};
pub use rules::{FieldRule, RuleCategory};

/// API group shared by every record kind handled here.
pub const GROUP: &str = "cluster.x-k8s.io";

/// The two adjacent schema versions. `V1Alpha3` is the hub.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    V1Alpha2,
    V1Alpha3,
}

impl SchemaVersion {
    pub const HUB: SchemaVersion = SchemaVersion::V1Alpha3;

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::V1Alpha2 => "v1alpha2",
            SchemaVersion::V1Alpha3 => "v1alpha3",
        }
    }

    /// Full `group/version` string as it appears in `apiVersion`.
    pub fn api_version(&self) -> String {
        format!("{}/{}", GROUP, self.as_str())
    }

    /// Parse either a bare version (`v1alpha3`) or a full `apiVersion` in our group.
    pub fn parse(s: &str) -> Option<Self> {
        let version = match s.split_once('/') {
            Some((group, version)) if group == GROUP => version,
            Some(_) => return None,
            None => s,
        };
        match version {
            "v1alpha2" => Some(SchemaVersion::V1Alpha2),
            "v1alpha3" => Some(SchemaVersion::V1Alpha3),
            _ => None,
        }
    }

    pub fn is_hub(&self) -> bool {
        *self == Self::HUB
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a single conversion call. Each direction is defined independently;
/// `ToHub` followed by `FromHub` is not guaranteed to be the identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    /// v1alpha2 -> v1alpha3
    ToHub,
    /// v1alpha3 -> v1alpha2
    FromHub,
}

impl Direction {
    pub fn source(&self) -> SchemaVersion {
        match self {
            Direction::ToHub => SchemaVersion::V1Alpha2,
            Direction::FromHub => SchemaVersion::V1Alpha3,
        }
    }

    pub fn target(&self) -> SchemaVersion {
        match self {
            Direction::ToHub => SchemaVersion::V1Alpha3,
            Direction::FromHub => SchemaVersion::V1Alpha2,
        }
    }

    /// Direction needed to bring an object from `source` to `target`; `None` when they match.
    pub fn between(source: SchemaVersion, target: SchemaVersion) -> Option<Self> {
        match (source, target) {
            (SchemaVersion::V1Alpha2, SchemaVersion::V1Alpha3) => Some(Direction::ToHub),
            (SchemaVersion::V1Alpha3, SchemaVersion::V1Alpha2) => Some(Direction::FromHub),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.source(), self.target())
    }
}

pub mod prelude {
    pub use super::{
        ConvResult, ConversionError, Convertible, Direction, Hub, RecordConverter, RecordList,
        SchemaVersion, GROUP,
    };
}
