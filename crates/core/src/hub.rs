//! Hub boundary: the opaque argument check and the per-kind entry points.

use std::any::{type_name, Any};

use crate::{convert_all, ConvResult, ConversionError, RecordList};

/// A record in the hub version. Conversions between spokes are routed through it.
pub trait Hub: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn type_name(&self) -> &'static str;
}

/// Implement [`Hub`] for one or more concrete record types.
#[macro_export]
macro_rules! impl_hub {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Hub for $ty {
                fn as_any(&self) -> &dyn ::std::any::Any { self }
                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }
                fn type_name(&self) -> &'static str { ::std::any::type_name::<Self>() }
            }
        )*
    };
}

impl<T: Hub> Hub for RecordList<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

pub fn downcast_hub<T: Hub>(src: &dyn Hub) -> ConvResult<&T> {
    let found = src.type_name();
    src.as_any()
        .downcast_ref::<T>()
        .ok_or(ConversionError::TypeMismatch { expected: type_name::<T>(), found })
}

pub fn downcast_hub_mut<T: Hub>(dst: &mut dyn Hub) -> ConvResult<&mut T> {
    let found = dst.type_name();
    dst.as_any_mut()
        .downcast_mut::<T>()
        .ok_or(ConversionError::TypeMismatch { expected: type_name::<T>(), found })
}

/// A spoke-version record that converts to and from its hub counterpart.
///
/// `convert_to`/`convert_from` are the boundary entry points: they assert the concrete type
/// of the opaque hub argument and only write their target when the whole conversion succeeds.
pub trait Convertible: Sized {
    type Hub: Hub;

    fn convert_to_hub(&self) -> ConvResult<Self::Hub>;

    fn convert_from_hub(hub: &Self::Hub) -> ConvResult<Self>;

    fn convert_to(&self, dst: &mut dyn Hub) -> ConvResult<()> {
        let dst = downcast_hub_mut::<Self::Hub>(dst)?;
        *dst = self.convert_to_hub()?;
        Ok(())
    }

    fn convert_from(&mut self, src: &dyn Hub) -> ConvResult<()> {
        let src = downcast_hub::<Self::Hub>(src)?;
        *self = Self::convert_from_hub(src)?;
        Ok(())
    }
}

impl<T: Convertible> Convertible for RecordList<T> {
    type Hub = RecordList<T::Hub>;

    fn convert_to_hub(&self) -> ConvResult<Self::Hub> {
        convert_all(self, T::convert_to_hub)
    }

    fn convert_from_hub(hub: &Self::Hub) -> ConvResult<Self> {
        convert_all(hub, T::convert_from_hub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct HubThing { v: u32 }
    #[derive(Debug, Default, PartialEq)]
    struct OtherHub;
    #[derive(Debug, Default, PartialEq)]
    struct Spoke { v: u32 }

    crate::impl_hub!(HubThing, OtherHub);

    impl Convertible for Spoke {
        type Hub = HubThing;
        fn convert_to_hub(&self) -> ConvResult<HubThing> {
            Ok(HubThing { v: self.v })
        }
        fn convert_from_hub(hub: &HubThing) -> ConvResult<Self> {
            if hub.v == 0 {
                return Err(ConversionError::Structural { record: "HubThing", detail: "zero".into() });
            }
            Ok(Spoke { v: hub.v })
        }
    }

    #[test]
    fn convert_to_writes_matching_hub() {
        let mut dst = HubThing::default();
        Spoke { v: 7 }.convert_to(&mut dst).unwrap();
        assert_eq!(dst.v, 7);
    }

    #[test]
    fn convert_to_rejects_wrong_hub_type() {
        let mut dst = OtherHub;
        let err = Spoke { v: 7 }.convert_to(&mut dst).unwrap_err();
        assert!(matches!(err, ConversionError::TypeMismatch { .. }), "{err}");
        assert!(err.to_string().contains("HubThing"));
        assert!(err.to_string().contains("OtherHub"));
    }

    #[test]
    fn failed_convert_from_leaves_target_untouched() {
        let mut spoke = Spoke { v: 3 };
        assert!(spoke.convert_from(&HubThing { v: 0 }).is_err());
        assert_eq!(spoke, Spoke { v: 3 });
        spoke.convert_from(&HubThing { v: 9 }).unwrap();
        assert_eq!(spoke, Spoke { v: 9 });
    }

    #[test]
    fn lists_convert_through_blanket_impl() {
        let src = RecordList::new(vec![Spoke { v: 1 }, Spoke { v: 2 }]);
        let mut dst: RecordList<HubThing> = RecordList::default();
        src.convert_to(&mut dst).unwrap();
        assert_eq!(dst.items, vec![HubThing { v: 1 }, HubThing { v: 2 }]);

        let mut wrong = HubThing::default();
        assert!(matches!(src.convert_to(&mut wrong), Err(ConversionError::TypeMismatch { .. })));
    }
}
