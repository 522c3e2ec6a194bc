//! Structured failures raised by the deserialization pipeline.
//!
//! Two kinds are kept strictly apart:
//!
//! - [`InvalidEnumValueError`]: a validation failure, always attributable to
//!   untrusted input. Maps to a client-error response.
//! - [`TypeResolutionError`]: a configuration/integration defect at the call
//!   site. Maps to a server-error response, or fails fast at startup when
//!   detectable earlier.
//!
//! Both propagate unmodified to the caller; this crate never builds a
//! transport response itself.

use alloc::borrow::Cow;
use alloc::string::String;
use core::{error, fmt};

// -----------------------------------------------------------------------------
// InvalidEnumValueError

/// A wire literal did not correspond to any constant of the resolved type.
///
/// Carries the offending field name (empty when the call site has no field
/// context) and the raw literal, both verbatim and untruncated. Immutable
/// once constructed; created exactly once per failed match.
///
/// # Examples
///
/// ```
/// use wire_enum::InvalidEnumValueError;
///
/// let err = InvalidEnumValueError::new("favoriteColor", "red");
/// assert_eq!(err.field_name(), "favoriteColor");
/// assert_eq!(err.invalid_value(), "red");
/// assert_eq!(err.details(), "Invalid value 'red' for field 'favoriteColor'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidEnumValueError {
    field_name: String,
    invalid_value: String,
}

impl InvalidEnumValueError {
    /// The machine-readable code of this error kind.
    pub const CODE: &'static str = "INVALID_ENUM_VALUE";

    /// Create a new [`InvalidEnumValueError`].
    ///
    /// Pass an empty `field_name` when the call site has no field context.
    pub fn new(field_name: impl Into<String>, invalid_value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            invalid_value: invalid_value.into(),
        }
    }

    /// The name of the offending field; empty when unknown.
    #[inline]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The raw literal that failed to match, unmodified.
    #[inline]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }

    /// The machine-readable error code, for response translators.
    #[inline]
    pub const fn code(&self) -> &'static str {
        Self::CODE
    }

    /// A details string combining value and field, for response translators.
    pub fn details(&self) -> String {
        alloc::format!(
            "Invalid value '{}' for field '{}'",
            self.invalid_value, self.field_name
        )
    }
}

impl fmt::Display for InvalidEnumValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_name.is_empty() {
            write!(f, "invalid value `{}`", self.invalid_value)
        } else {
            write!(
                f,
                "invalid value `{}` for field `{}`",
                self.invalid_value, self.field_name
            )
        }
    }
}

impl error::Error for InvalidEnumValueError {}

// -----------------------------------------------------------------------------
// TypeResolutionError

/// A call site could not be mapped to a registered enumerated type.
///
/// This indicates a setup defect, not bad input, and should not occur in
/// correctly configured systems. It is never converted into an
/// [`InvalidEnumValueError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeResolutionError {
    /// The call site carries no usable type metadata at all.
    MissingMetadata,
    /// The declared type has not been registered as an enumerated wire type.
    UnregisteredType { type_path: Cow<'static, str> },
    /// The declared bare type name matches multiple registered types.
    AmbiguousTypeName { type_name: Cow<'static, str> },
}

impl fmt::Display for TypeResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMetadata => {
                f.write_str("call site carries no enumerated type metadata")
            }
            Self::UnregisteredType { type_path } => {
                write!(f, "no registration found for `{type_path}`")
            }
            Self::AmbiguousTypeName { type_name } => {
                write!(f, "type name `{type_name}` matches multiple registered types")
            }
        }
    }
}

impl error::Error for TypeResolutionError {}

// -----------------------------------------------------------------------------
// EnumDeserializeError

/// An enumeration of all error outcomes of one deserialization attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnumDeserializeError {
    /// See [`InvalidEnumValueError`].
    Invalid(InvalidEnumValueError),
    /// See [`TypeResolutionError`].
    Resolution(TypeResolutionError),
}

impl fmt::Display for EnumDeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => err.fmt(f),
            Self::Resolution(err) => err.fmt(f),
        }
    }
}

impl error::Error for EnumDeserializeError {}

impl From<InvalidEnumValueError> for EnumDeserializeError {
    #[inline]
    fn from(value: InvalidEnumValueError) -> Self {
        Self::Invalid(value)
    }
}

impl From<TypeResolutionError> for EnumDeserializeError {
    #[inline]
    fn from(value: TypeResolutionError) -> Self {
        Self::Resolution(value)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::InvalidEnumValueError;

    #[test]
    fn message_keeps_field_and_value_verbatim() {
        let err = InvalidEnumValueError::new("status", "FOO");
        assert_eq!(err.field_name(), "status");
        assert_eq!(err.invalid_value(), "FOO");

        let message = alloc::string::ToString::to_string(&err);
        assert!(message.contains("status"));
        assert!(message.contains("FOO"));
    }

    #[test]
    fn empty_field_is_omitted_from_message() {
        let err = InvalidEnumValueError::new("", "FOO");
        let message = alloc::string::ToString::to_string(&err);
        assert_eq!(message, "invalid value `FOO`");
        assert_eq!(err.details(), "Invalid value 'FOO' for field ''");
    }

    #[test]
    fn code_is_stable() {
        let err = InvalidEnumValueError::new("status", "FOO");
        assert_eq!(err.code(), "INVALID_ENUM_VALUE");
    }
}
