//! Conversion error taxonomy. Every variant is fatal to the call and is never retried.

use crate::Direction;

/// Errors produced by record, collection and hub conversions.
///
/// Messages are meant to be surfaced verbatim by whatever transport invoked the conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Source and destination shapes cannot be reconciled mechanically.
    ///
    /// Typed copiers never hit this; it comes from untyped objects that fail to decode
    /// into the registered record type.
    #[error("structural incompatibility in {record}: {detail}")]
    Structural { record: &'static str, detail: String },

    /// The destination version has no place for a field the source carries.
    #[error("cannot recover removed {record} field {field} when converting {direction}")]
    IrrecoverableRemoval {
        record: &'static str,
        field: &'static str,
        direction: Direction,
    },

    /// Converting would move sensitive data into a less protected shape.
    #[error("cannot convert {record} field {field} when converting {direction}: {reason}")]
    UnsafeDowngrade {
        record: &'static str,
        field: &'static str,
        direction: Direction,
        reason: &'static str,
    },

    /// The opaque argument at the hub boundary is not the expected concrete type.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl ConversionError {
    /// Field named by the error, when it names one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConversionError::IrrecoverableRemoval { field, .. }
            | ConversionError::UnsafeDowngrade { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Record type the error was raised for, when known.
    pub fn record(&self) -> Option<&'static str> {
        match self {
            ConversionError::Structural { record, .. }
            | ConversionError::IrrecoverableRemoval { record, .. }
            | ConversionError::UnsafeDowngrade { record, .. } => Some(record),
            ConversionError::TypeMismatch { .. } => None,
        }
    }
}

pub type ConvResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_field_and_direction() {
        let e = ConversionError::IrrecoverableRemoval { record: "MachineSpec", field: "ClusterName", direction: Direction::FromHub };
        assert_eq!(e.to_string(), "cannot recover removed MachineSpec field ClusterName when converting v1alpha3 to v1alpha2");
        assert_eq!(e.field(), Some("ClusterName"));
        assert_eq!(e.record(), Some("MachineSpec"));

        let e = ConversionError::TypeMismatch { expected: "a", found: "b" };
        assert_eq!(e.field(), None);
        assert_eq!(e.to_string(), "type mismatch: expected a, got b");
    }
}
