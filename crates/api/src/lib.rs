//! Cluster API records in `v1alpha2` and `v1alpha3` and the conversions between them.
//!
//! `v1alpha3` is the hub. Every `v1alpha2` record (and list) implements
//! [`capiconv_core::Convertible`] against its `v1alpha3` counterpart; the per-field
//! differences are listed in [`rules::FIELD_RULES`].

#![forbid(unsafe_code)]

/// Implement `kube::Resource` for namespaced record types of one version.
macro_rules! impl_resource {
    ($version:expr; $($ty:ident => $kind:literal, $plural:literal;)*) => {
        $(
            impl kube::Resource for $ty {
                type DynamicType = ();
                type Scope = k8s_openapi::NamespaceResourceScope;

                fn kind(_: &()) -> std::borrow::Cow<'_, str> { $kind.into() }
                fn group(_: &()) -> std::borrow::Cow<'_, str> { capiconv_core::GROUP.into() }
                fn version(_: &()) -> std::borrow::Cow<'_, str> { $version.into() }
                fn plural(_: &()) -> std::borrow::Cow<'_, str> { $plural.into() }
                fn meta(&self) -> &k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta { &self.metadata }
                fn meta_mut(&mut self) -> &mut k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta { &mut self.metadata }
            }
        )*
    };
}

pub mod conversion;
pub mod rules;
pub mod v1alpha2;
pub mod v1alpha3;

pub use capiconv_core::{ConvResult, ConversionError, Convertible, Direction, Hub, RecordList, SchemaVersion};
pub use rules::FIELD_RULES;
