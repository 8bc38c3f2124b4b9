//! Per-field reconciliation ledger types.

use serde::Serialize;

use crate::Direction;

/// How a field differs between the two versions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RuleCategory {
    /// Same meaning, different structural position.
    Relocation,
    /// Same shape, different name.
    Rename,
    /// Destination set only when a sibling matches a known discriminator.
    ConditionalEnrichment,
    /// No counterpart in the destination; the conversion fails.
    IrrecoverableRemoval,
    /// Data would be exposed in a less protected shape; the conversion fails.
    UnsafeDowngrade,
    /// Dropped on purpose; no failure.
    Discard,
}

impl RuleCategory {
    pub fn fails(&self) -> bool {
        matches!(self, RuleCategory::IrrecoverableRemoval | RuleCategory::UnsafeDowngrade)
    }

    pub fn is_lossy(&self) -> bool {
        self.fails() || matches!(self, RuleCategory::Discard)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Relocation => "relocation",
            RuleCategory::Rename => "rename",
            RuleCategory::ConditionalEnrichment => "conditional-enrichment",
            RuleCategory::IrrecoverableRemoval => "irrecoverable-removal",
            RuleCategory::UnsafeDowngrade => "unsafe-downgrade",
            RuleCategory::Discard => "discard",
        }
    }
}

/// One semantic reconciliation between the versions, for one direction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    pub record: &'static str,
    pub field: &'static str,
    pub direction: Direction,
    pub category: RuleCategory,
    pub note: &'static str,
}
