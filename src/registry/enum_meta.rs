use alloc::boxed::Box;
use core::any::Any;

use serde_core::Deserializer;
use serde_core::de::DeserializeSeed;

use crate::info::{EnumWireInfo, Type, WireEnum};
use crate::serde::WireEnumDeserializer;

// -----------------------------------------------------------------------------
// EnumMeta

/// Runtime metadata for one registered enumerated wire type.
///
/// Bundles the [`EnumWireInfo`] descriptor with a type-erased deserialization
/// entry point. Internally the entry point is a function pointer captured at
/// registration; when invoked it runs the typed
/// [`WireEnumDeserializer`] and boxes the resulting constant, so a framework
/// configured once can reconstruct typed constants without naming them
/// statically.
///
/// # Examples
///
/// ```
/// use wire_enum::{WireEnum, derive::WireEnum};
/// use wire_enum::registry::EnumMeta;
///
/// #[derive(WireEnum, Debug, PartialEq)]
/// enum Color { Red, Green, Blue }
///
/// let meta = EnumMeta::of::<Color>();
///
/// let mut deserializer = serde_json::Deserializer::from_str("\"Blue\"");
/// let value = meta.deserialize(&mut deserializer).unwrap();
///
/// assert_eq!(value.downcast_ref::<Color>(), Some(&Color::Blue));
/// ```
pub struct EnumMeta {
    info: &'static EnumWireInfo,
    erased_deserialize: fn(
        deserializer: &mut dyn erased_serde::Deserializer,
    ) -> Result<Box<dyn Any>, erased_serde::Error>,
}

impl EnumMeta {
    /// Create the [`EnumMeta`] of a wire enum.
    pub fn of<T: WireEnum>() -> Self {
        Self {
            info: T::enum_info(),
            erased_deserialize: |deserializer| {
                let constant = WireEnumDeserializer::<T>::new().deserialize(deserializer)?;
                Ok(Box::new(constant))
            },
        }
    }

    /// Deserializes a constant of the registered type.
    ///
    /// The returned box holds the concrete enum value; downcast it with the
    /// target type when it is statically known.
    #[inline(always)]
    pub fn deserialize<'de, D: Deserializer<'de>>(
        &self,
        deserializer: D,
    ) -> Result<Box<dyn Any>, D::Error> {
        let mut erased = <dyn erased_serde::Deserializer>::erase(deserializer);
        (self.erased_deserialize)(&mut erased)
            .map_err(<D::Error as serde_core::de::Error>::custom)
    }

    /// Returns the descriptor of the registered type.
    #[inline(always)]
    pub const fn info(&self) -> &'static EnumWireInfo {
        self.info
    }

    /// Returns the underlying [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.info.ty()
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn type_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    /// Returns the type path.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }
}

impl core::fmt::Debug for EnumMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EnumMeta").field("info", self.info).finish()
    }
}
