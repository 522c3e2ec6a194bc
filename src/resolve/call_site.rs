use alloc::borrow::Cow;

use crate::info::{Type, WireEnum};

// -----------------------------------------------------------------------------
// CallSite

/// One point in a structure-deserialization process where a field's value is
/// being converted.
///
/// Carries whatever metadata the surrounding serialization framework can
/// supply: an optional field name and the field's declared type, as a
/// resolved [`Type`], as a type-path string, or not at all. The core never
/// mutates a call site.
///
/// # Examples
///
/// ```
/// use wire_enum::CallSite;
/// use wire_enum::derive::WireEnum;
///
/// #[derive(WireEnum)]
/// enum Color { Red, Green, Blue }
///
/// // Full static metadata.
/// let site = CallSite::of::<Color>("favoriteColor");
/// assert_eq!(site.field_name(), "favoriteColor");
/// assert!(site.declared_type().is_some());
///
/// // Only a textual type reference, e.g. from a schema.
/// let site = CallSite::with_type_path("favoriteColor", "Color");
/// assert_eq!(site.declared_type_path(), Some("Color"));
///
/// // No type metadata at all; resolution will fail distinctly.
/// let site = CallSite::untyped("favoriteColor");
/// assert!(!site.has_type_metadata());
/// ```
#[derive(Clone, Debug)]
pub struct CallSite {
    field_name: Cow<'static, str>,
    target: SiteTarget,
}

#[derive(Clone, Debug)]
enum SiteTarget {
    Type(Type),
    Path(Cow<'static, str>),
    Unknown,
}

impl CallSite {
    /// Create a call site whose declared type is `T`.
    pub fn of<T: WireEnum>(field_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field_name: field_name.into(),
            target: SiteTarget::Type(Type::of::<T>()),
        }
    }

    /// Create a call site carrying a textual type reference.
    ///
    /// The reference is resolved against the registry first as a full
    /// [type path], then as a bare type name.
    ///
    /// [type path]: crate::info::TypePath::type_path
    pub fn with_type_path(
        field_name: impl Into<Cow<'static, str>>,
        type_path: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            target: SiteTarget::Path(type_path.into()),
        }
    }

    /// Create a call site without any type metadata.
    pub fn untyped(field_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field_name: field_name.into(),
            target: SiteTarget::Unknown,
        }
    }

    /// The field name of this call site; empty when unknown.
    #[inline]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The declared type, if the framework supplied a resolved one.
    #[inline]
    pub fn declared_type(&self) -> Option<&Type> {
        match &self.target {
            SiteTarget::Type(ty) => Some(ty),
            _ => None,
        }
    }

    /// The declared type reference, if the framework supplied a textual one.
    #[inline]
    pub fn declared_type_path(&self) -> Option<&str> {
        match &self.target {
            SiteTarget::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Returns `true` if any type metadata is available.
    #[inline]
    pub fn has_type_metadata(&self) -> bool {
        !matches!(self.target, SiteTarget::Unknown)
    }
}
