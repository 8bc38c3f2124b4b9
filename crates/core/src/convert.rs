//! Generic record and collection converters.
//!
//! A [`RecordConverter`] binds three injected pure functions for one record type and one
//! direction: an optional guard, the bulk field copier and an optional reconciler. Nested
//! sections are converted by their own converters, called from the parent's bulk copier.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConvResult;

/// Rules that can reject a source before any field is copied.
pub type GuardFn<S> = fn(&S) -> ConvResult<()>;
/// Copies every identically shaped field from source into a zero-valued destination.
pub type BulkFn<S, D> = fn(&S, &mut D) -> ConvResult<()>;
/// Repairs fields whose meaning, location or shape differs between versions.
pub type ReconcileFn<S, D> = fn(&S, &mut D) -> ConvResult<()>;

pub struct RecordConverter<S, D> {
    record: &'static str,
    guard: Option<GuardFn<S>>,
    bulk: BulkFn<S, D>,
    reconcile: Option<ReconcileFn<S, D>>,
}

impl<S, D> Clone for RecordConverter<S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, D> Copy for RecordConverter<S, D> {}

impl<S, D> std::fmt::Debug for RecordConverter<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordConverter")
            .field("record", &self.record)
            .field("guard", &self.guard.is_some())
            .field("reconcile", &self.reconcile.is_some())
            .finish()
    }
}

impl<S, D> RecordConverter<S, D> {
    /// Converter that only runs the bulk copier.
    pub const fn new(record: &'static str, bulk: BulkFn<S, D>) -> Self {
        Self { record, guard: None, bulk, reconcile: None }
    }

    pub const fn guard(self, guard: GuardFn<S>) -> Self {
        Self { guard: Some(guard), ..self }
    }

    pub const fn reconcile(self, reconcile: ReconcileFn<S, D>) -> Self {
        Self { reconcile: Some(reconcile), ..self }
    }

    /// Name of the source record type, used in logs.
    pub fn record(&self) -> &'static str {
        self.record
    }
}

impl<S, D: Default> RecordConverter<S, D> {
    /// Run guard, bulk copy and reconciliation. The destination is only returned when every
    /// phase succeeds; on failure it is dropped and the error is returned unchanged.
    pub fn convert(&self, src: &S) -> ConvResult<D> {
        let out = self.run(src);
        if let Err(e) = &out {
            debug!(record = self.record, error = %e, "conversion failed");
        }
        out
    }

    fn run(&self, src: &S) -> ConvResult<D> {
        if let Some(guard) = self.guard {
            guard(src)?;
        }
        let mut dst = D::default();
        (self.bulk)(src, &mut dst)?;
        if let Some(reconcile) = self.reconcile {
            reconcile(src, &mut dst)?;
        }
        Ok(dst)
    }
}

/// An ordered collection of records sharing a list-level metadata envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordList<T> {
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self { metadata: ListMeta::default(), items: Vec::new() }
    }
}

impl<T> RecordList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { metadata: ListMeta::default(), items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Convert every element of `src`, preserving order. Fails fast on the first element error
/// and never returns a partially built collection.
pub fn convert_all<S, D>(
    src: &RecordList<S>,
    convert: impl Fn(&S) -> ConvResult<D>,
) -> ConvResult<RecordList<D>> {
    let mut items = Vec::with_capacity(src.items.len());
    for (idx, item) in src.items.iter().enumerate() {
        match convert(item) {
            Ok(d) => items.push(d),
            Err(e) => {
                debug!(index = idx, total = src.items.len(), "collection conversion aborted");
                return Err(e);
            }
        }
    }
    Ok(RecordList { metadata: src.metadata.clone(), items })
}
