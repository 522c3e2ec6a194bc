use crate::info::{ConstantInfo, EnumWireInfo, TypePath};
use crate::matcher::{MatchResult, match_constant};

// -----------------------------------------------------------------------------
// WireEnum

/// A static accessor connecting a Rust enum to its wire descriptor.
///
/// Automatically implemented by
/// [`#[derive(WireEnum)]`](crate::derive::WireEnum) for enums whose variants
/// are all unit variants, allowing access to the descriptor without an
/// instance of the type.
///
/// # Examples
///
/// ```
/// use wire_enum::{WireEnum, derive::WireEnum};
///
/// #[derive(WireEnum, Debug, PartialEq)]
/// enum Color {
///     Red,
///     #[wire(rename = "VERDE")]
///     Green,
///     Blue,
/// }
///
/// assert_eq!(Color::from_wire("VERDE"), Some(Color::Green));
/// assert_eq!(Color::from_wire("Green"), None);
/// assert_eq!(Color::Blue.wire_name(), "Blue");
/// ```
///
/// # Manually Impl
///
/// It is not recommended to implement manually, but
/// [`EnumInfoCell`](crate::info::EnumInfoCell) is provided to simplify it if
/// it's necessary. The implementation must keep `from_index` and
/// `constant_index` consistent with the descriptor's declaration order.
pub trait WireEnum: TypePath + Sized {
    /// A static accessor to the wire descriptor of this enum.
    ///
    /// The descriptor is built lazily on first use and reused afterwards.
    fn enum_info() -> &'static EnumWireInfo;

    /// Returns the constant at the given declaration index, if present.
    fn from_index(index: usize) -> Option<Self>;

    /// Returns the declaration index of this constant.
    fn constant_index(&self) -> usize;

    /// Returns the [`ConstantInfo`] of this constant.
    #[inline]
    fn constant_info(&self) -> &'static ConstantInfo {
        Self::enum_info()
            .constant_at(self.constant_index())
            .expect("valid index")
    }

    /// Returns the canonical wire string of this constant.
    #[inline]
    fn wire_name(&self) -> &'static str {
        self.constant_info().wire_name()
    }

    /// Converts a wire literal into a constant of this enum.
    ///
    /// Matching is exact and case-sensitive; returns `None` when the literal
    /// does not equal any constant's canonical wire string. Use
    /// [`deserialize_field`](crate::deserialize_field) when a structured,
    /// field-attributed error is needed instead.
    fn from_wire(literal: &str) -> Option<Self> {
        let info = Self::enum_info();
        match match_constant(info, literal) {
            MatchResult::Matched(constant) => {
                let index = info.index_of(constant.name()).expect("valid name");
                Self::from_index(index)
            }
            MatchResult::Unmatched(_) => None,
        }
    }
}
