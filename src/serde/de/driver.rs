use alloc::borrow::Cow;
use core::marker::PhantomData;

use serde_core::Deserializer;
use serde_core::de::DeserializeSeed;

use super::wire_visitor::WireNameVisitor;

use crate::info::{ConstantInfo, WireEnum};
use crate::registry::EnumMeta;

#[cfg(all(debug_assertions, feature = "debug"))]
use super::error_utils::CALL_SITE_STACK;
#[cfg(all(debug_assertions, feature = "debug"))]
use crate::serde::SiteFrame;

// -----------------------------------------------------------------------------
// WireEnumDeserializer

/// Deserializer for one statically known wire enum.
///
/// A [`DeserializeSeed`] the surrounding serialization framework hands to
/// its format backend wherever a field of type `T` is read. The incoming
/// value must be a string; it is matched exactly and case-sensitively
/// against `T`'s canonical wire strings.
///
/// The optional field name is the call-site binding: when set, a failed
/// match reports the field and the raw literal, both verbatim, through the
/// format's error type.
///
/// # Examples
///
/// ```
/// use serde_core::de::DeserializeSeed;
/// use wire_enum::derive::WireEnum;
/// use wire_enum::serde::WireEnumDeserializer;
///
/// #[derive(WireEnum, Debug, PartialEq)]
/// enum Color {
///     Red,
///     #[wire(rename = "VERDE")]
///     Green,
///     Blue,
/// }
///
/// let mut data = serde_json::Deserializer::from_str("\"VERDE\"");
/// let color = WireEnumDeserializer::<Color>::new()
///     .deserialize(&mut data)
///     .unwrap();
/// assert_eq!(color, Color::Green);
///
/// let mut data = serde_json::Deserializer::from_str("\"green\"");
/// let err = WireEnumDeserializer::<Color>::with_field_name("favoriteColor")
///     .deserialize(&mut data)
///     .unwrap_err();
/// assert!(err.to_string().contains("invalid value `green`"));
/// assert!(err.to_string().contains("favoriteColor"));
/// ```
pub struct WireEnumDeserializer<T: WireEnum> {
    field_name: Option<Cow<'static, str>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: WireEnum> WireEnumDeserializer<T> {
    /// Creates a seed with no field context.
    #[inline]
    pub const fn new() -> Self {
        Self {
            field_name: None,
            _marker: PhantomData,
        }
    }

    /// Creates a seed attributing failures to the given field.
    #[inline]
    pub fn with_field_name(field_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field_name: Some(field_name.into()),
            _marker: PhantomData,
        }
    }
}

impl<T: WireEnum> Default for WireEnumDeserializer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, T: WireEnum> DeserializeSeed<'de> for WireEnumDeserializer<T> {
    type Value = T;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        let info = T::enum_info();

        #[cfg(all(debug_assertions, feature = "debug"))]
        CALL_SITE_STACK.with_borrow_mut(|stack| {
            stack.push(SiteFrame {
                type_path: info.type_path(),
                field_name: self.field_name.as_deref().map(alloc::string::String::from),
            });
        });

        let result = deserializer.deserialize_str(WireNameVisitor {
            info,
            field_name: self.field_name.as_deref(),
        });

        #[cfg(all(debug_assertions, feature = "debug"))]
        CALL_SITE_STACK.with_borrow_mut(|stack| stack.pop());

        let constant = result?;
        let index = info.index_of(constant.name()).expect("valid name");
        Ok(T::from_index(index).expect("valid index"))
    }
}

// -----------------------------------------------------------------------------
// MetaEnumDeserializer

/// Deserializer for a wire enum known only through its registry metadata.
///
/// The dynamic counterpart of [`WireEnumDeserializer`]: the target type is
/// whatever [`EnumMeta`] the resolver produced for the current call site,
/// and the result is the matched [`ConstantInfo`] rather than a typed
/// constant. Use [`EnumMeta::deserialize`] when the typed value is needed
/// through the erased channel.
///
/// # Examples
///
/// ```
/// use serde_core::de::DeserializeSeed;
/// use wire_enum::derive::WireEnum;
/// use wire_enum::registry::EnumRegistry;
/// use wire_enum::serde::MetaEnumDeserializer;
///
/// #[derive(WireEnum)]
/// enum Color { Red, Green, Blue }
///
/// let mut registry = EnumRegistry::new();
/// registry.register::<Color>();
/// let meta = registry.get_with_type_name("Color").unwrap();
///
/// let mut data = serde_json::Deserializer::from_str("\"Blue\"");
/// let constant = MetaEnumDeserializer::new(meta)
///     .deserialize(&mut data)
///     .unwrap();
/// assert_eq!(constant.name(), "Blue");
/// ```
pub struct MetaEnumDeserializer<'a> {
    meta: &'a EnumMeta,
    field_name: Option<&'a str>,
}

impl<'a> MetaEnumDeserializer<'a> {
    /// Creates a seed with no field context.
    #[inline]
    pub const fn new(meta: &'a EnumMeta) -> Self {
        Self {
            meta,
            field_name: None,
        }
    }

    /// Creates a seed attributing failures to the given field.
    #[inline]
    pub const fn with_field_name(meta: &'a EnumMeta, field_name: &'a str) -> Self {
        Self {
            meta,
            field_name: Some(field_name),
        }
    }
}

impl<'de> DeserializeSeed<'de> for MetaEnumDeserializer<'_> {
    type Value = &'static ConstantInfo;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        let info = self.meta.info();

        #[cfg(all(debug_assertions, feature = "debug"))]
        CALL_SITE_STACK.with_borrow_mut(|stack| {
            stack.push(SiteFrame {
                type_path: info.type_path(),
                field_name: self.field_name.map(alloc::string::String::from),
            });
        });

        let result = deserializer.deserialize_str(WireNameVisitor {
            info,
            field_name: self.field_name,
        });

        #[cfg(all(debug_assertions, feature = "debug"))]
        CALL_SITE_STACK.with_borrow_mut(|stack| stack.pop());

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_core::de::DeserializeSeed;

    use super::{MetaEnumDeserializer, WireEnumDeserializer};
    use crate::derive::WireEnum;
    use crate::registry::EnumRegistry;

    #[derive(WireEnum, Debug, PartialEq)]
    enum Color {
        Red,
        #[wire(rename = "VERDE")]
        Green,
        Blue,
    }

    #[test]
    fn typed_seed_reads_json_strings() {
        let mut data = serde_json::Deserializer::from_str("\"Red\"");
        let color = WireEnumDeserializer::<Color>::new()
            .deserialize(&mut data)
            .unwrap();
        assert_eq!(color, Color::Red);
    }

    #[test]
    fn typed_seed_reads_ron_strings() {
        let mut data = ron::Deserializer::from_str("\"VERDE\"").unwrap();
        let color = WireEnumDeserializer::<Color>::new()
            .deserialize(&mut data)
            .unwrap();
        assert_eq!(color, Color::Green);
    }

    #[test]
    fn mismatch_surfaces_field_and_value_in_the_message() {
        let mut data = serde_json::Deserializer::from_str("\"red\"");
        let err = WireEnumDeserializer::<Color>::with_field_name("favoriteColor")
            .deserialize(&mut data)
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("invalid value `red`"), "{message}");
        assert!(message.contains("favoriteColor"), "{message}");
    }

    #[test]
    fn renamed_rust_name_is_not_accepted_on_the_wire() {
        let mut data = serde_json::Deserializer::from_str("\"Green\"");
        let result = WireEnumDeserializer::<Color>::new().deserialize(&mut data);
        assert!(result.is_err());
    }

    #[test]
    fn meta_seed_returns_the_matched_constant() {
        let mut registry = EnumRegistry::new();
        registry.register::<Color>();
        let meta = registry.get_with_type_name("Color").unwrap();

        let mut data = serde_json::Deserializer::from_str("\"Blue\"");
        let constant = MetaEnumDeserializer::new(meta)
            .deserialize(&mut data)
            .unwrap();
        assert_eq!(constant.name(), "Blue");
        assert_eq!(constant.wire_name(), "Blue");
    }

    #[test]
    fn integrates_with_serde_derive_via_deserialize_with() {
        use serde::Deserialize;

        fn color_from_wire<'de, D>(deserializer: D) -> Result<Color, D::Error>
        where
            D: serde_core::Deserializer<'de>,
        {
            WireEnumDeserializer::with_field_name("favorite_color").deserialize(deserializer)
        }

        #[derive(Deserialize, Debug)]
        struct Profile {
            #[serde(deserialize_with = "color_from_wire")]
            favorite_color: Color,
        }

        let profile: Profile = serde_json::from_str(r#"{"favorite_color":"Red"}"#).unwrap();
        assert_eq!(profile.favorite_color, Color::Red);

        let err = serde_json::from_str::<Profile>(r#"{"favorite_color":"RED"}"#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid value `RED`"), "{message}");
        assert!(message.contains("favorite_color"), "{message}");
    }

    #[test]
    fn erased_meta_deserialization_recovers_the_typed_constant() {
        let mut registry = EnumRegistry::new();
        registry.register::<Color>();
        let meta = registry.get_with_type_name("Color").unwrap();

        let mut data = serde_json::Deserializer::from_str("\"VERDE\"");
        let value = meta.deserialize(&mut data).unwrap();
        assert_eq!(value.downcast_ref::<Color>(), Some(&Color::Green));
    }
}
