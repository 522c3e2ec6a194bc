use crate::error::{EnumDeserializeError, InvalidEnumValueError};
use crate::info::{ConstantInfo, WireEnum};
use crate::matcher::{MatchResult, match_constant};
use crate::registry::EnumRegistry;
use crate::resolve::{CallSite, EnumResolver};

// -----------------------------------------------------------------------------
// EnumValueDeserializer

/// Orchestrates one deserialization attempt end to end.
///
/// Resolution and matching are delegated to [`EnumResolver`] and
/// [`match_constant`]; on a mismatch an [`InvalidEnumValueError`] is built
/// from the call site's field name and the verbatim literal. Resolution
/// failures propagate unmodified.
///
/// Stateless beyond the optional bound type: one instance is safe to reuse
/// across many calls and threads.
///
/// # Examples
///
/// ```
/// use wire_enum::{CallSite, EnumValueDeserializer};
/// use wire_enum::derive::WireEnum;
/// use wire_enum::registry::EnumRegistry;
///
/// #[derive(WireEnum)]
/// enum Color { Red, Green, Blue }
///
/// let mut registry = EnumRegistry::new();
/// registry.register::<Color>();
///
/// let deserializer = EnumValueDeserializer::new(&registry);
/// let site = CallSite::of::<Color>("favoriteColor");
///
/// let constant = deserializer.deserialize(&site, "Red").unwrap();
/// assert_eq!(constant.name(), "Red");
///
/// let err = deserializer.deserialize(&site, "red").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "invalid value `red` for field `favoriteColor`",
/// );
/// ```
pub struct EnumValueDeserializer<'a> {
    resolver: EnumResolver<'a>,
}

impl EnumValueDeserializer<'static> {
    /// Create a deserializer fixed to the type `T`, ignoring call-site type
    /// metadata.
    pub fn bound<T: WireEnum>() -> Self {
        Self {
            resolver: EnumResolver::bound::<T>(),
        }
    }
}

impl<'a> EnumValueDeserializer<'a> {
    /// Create a deserializer resolving target types from each call site.
    pub fn new(registry: &'a EnumRegistry) -> Self {
        Self {
            resolver: EnumResolver::from_registry(registry),
        }
    }

    /// Converts one wire literal at one call site into a constant.
    ///
    /// # Errors
    ///
    /// - [`EnumDeserializeError::Invalid`] when no constant of the resolved
    ///   type matches the literal. The error keeps the field name and the
    ///   literal verbatim and untruncated.
    /// - [`EnumDeserializeError::Resolution`] when the call site cannot be
    ///   mapped to a registered enumerated type.
    pub fn deserialize(
        &self,
        call_site: &CallSite,
        literal: &str,
    ) -> Result<&'static ConstantInfo, EnumDeserializeError> {
        let meta = self.resolver.resolve(call_site)?;
        match match_constant(meta.info(), literal) {
            MatchResult::Matched(constant) => Ok(constant),
            MatchResult::Unmatched(raw) => {
                Err(InvalidEnumValueError::new(call_site.field_name(), raw).into())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// deserialize_field

/// Converts one wire literal into a constant of the statically known enum
/// `T`, attributing failures to `field_name`.
///
/// The shortcut for frameworks that already resolved the target type through
/// the type system; no registry is involved.
///
/// # Examples
///
/// ```
/// use wire_enum::{deserialize_field, derive::WireEnum};
///
/// #[derive(WireEnum, Debug, PartialEq)]
/// enum Color { Red, Green, Blue }
///
/// let color: Color = deserialize_field("favoriteColor", "Red").unwrap();
/// assert_eq!(color, Color::Red);
///
/// let err = deserialize_field::<Color>("favoriteColor", "red").unwrap_err();
/// assert_eq!(err.field_name(), "favoriteColor");
/// assert_eq!(err.invalid_value(), "red");
/// ```
pub fn deserialize_field<T: WireEnum>(
    field_name: &str,
    literal: &str,
) -> Result<T, InvalidEnumValueError> {
    let info = T::enum_info();
    match match_constant(info, literal) {
        MatchResult::Matched(constant) => {
            let index = info.index_of(constant.name()).expect("valid name");
            Ok(T::from_index(index).expect("valid index"))
        }
        MatchResult::Unmatched(raw) => Err(InvalidEnumValueError::new(field_name, raw)),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{EnumValueDeserializer, deserialize_field};
    use crate::derive::WireEnum;
    use crate::error::{EnumDeserializeError, TypeResolutionError};
    use crate::registry::EnumRegistry;
    use crate::resolve::CallSite;

    #[derive(WireEnum, Debug, PartialEq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    fn registry() -> EnumRegistry {
        let mut registry = EnumRegistry::new();
        registry.register::<Color>();
        registry
    }

    #[test]
    fn matching_literal_returns_the_constant() {
        let registry = registry();
        let deserializer = EnumValueDeserializer::new(&registry);
        let site = CallSite::of::<Color>("favoriteColor");

        let constant = deserializer.deserialize(&site, "Red").unwrap();
        assert_eq!(constant.name(), "Red");
        assert_eq!(constant.wire_name(), "Red");
    }

    #[test]
    fn mismatch_carries_field_and_value() {
        let registry = registry();
        let deserializer = EnumValueDeserializer::new(&registry);
        let site = CallSite::of::<Color>("favoriteColor");

        let err = deserializer.deserialize(&site, "red").unwrap_err();
        match err {
            EnumDeserializeError::Invalid(err) => {
                assert_eq!(err.field_name(), "favoriteColor");
                assert_eq!(err.invalid_value(), "red");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn resolution_failure_propagates_unmodified() {
        let registry = registry();
        let deserializer = EnumValueDeserializer::new(&registry);

        let err = deserializer
            .deserialize(&CallSite::untyped("favoriteColor"), "Red")
            .unwrap_err();
        assert_eq!(
            err,
            EnumDeserializeError::Resolution(TypeResolutionError::MissingMetadata),
        );
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let registry = registry();
        let deserializer = EnumValueDeserializer::new(&registry);
        let site = CallSite::of::<Color>("favoriteColor");

        for _ in 0..3 {
            assert!(deserializer.deserialize(&site, "Blue").is_ok());
            assert!(deserializer.deserialize(&site, "blue").is_err());
        }
    }

    #[test]
    fn bound_deserializer_needs_no_registry() {
        let deserializer = EnumValueDeserializer::bound::<Color>();
        let constant = deserializer
            .deserialize(&CallSite::untyped("favoriteColor"), "Green")
            .unwrap();
        assert_eq!(constant.name(), "Green");
    }

    #[test]
    fn empty_enum_resolves_but_never_matches() {
        use crate::WireEnum as _;

        #[derive(WireEnum, Debug, PartialEq)]
        enum Nothing {}

        let deserializer = EnumValueDeserializer::bound::<Nothing>();
        let err = deserializer
            .deserialize(&CallSite::untyped("field"), "anything")
            .unwrap_err();
        assert!(matches!(err, EnumDeserializeError::Invalid(_)));

        assert_eq!(Nothing::from_wire(""), None);
        assert_eq!(Nothing::from_wire("anything"), None);
    }

    #[test]
    fn typed_shortcut_round_trips() {
        assert_eq!(deserialize_field("favoriteColor", "Blue"), Ok(Color::Blue));

        let err = deserialize_field::<Color>("", "nope").unwrap_err();
        assert_eq!(err.field_name(), "");
        assert_eq!(err.invalid_value(), "nope");
    }
}
