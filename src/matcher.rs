use crate::info::{ConstantInfo, EnumWireInfo};

// -----------------------------------------------------------------------------
// MatchResult

/// The outcome of matching one wire literal against a descriptor.
///
/// Transient: lives for one deserialization attempt, borrowing the
/// descriptor on a match and the input literal otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult<'i, 'l> {
    /// The literal equals the canonical wire string of this constant.
    Matched(&'i ConstantInfo),
    /// No constant matched; carries the raw literal unmodified.
    Unmatched(&'l str),
}

impl<'i, 'l> MatchResult<'i, 'l> {
    /// Returns the matched constant, if any.
    #[inline]
    pub const fn constant(&self) -> Option<&'i ConstantInfo> {
        match self {
            Self::Matched(constant) => Some(constant),
            Self::Unmatched(_) => None,
        }
    }

    /// Returns `true` if a constant matched.
    #[inline]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

// -----------------------------------------------------------------------------
// match_constant

/// Maps one literal string to one constant of a known enumerated type.
///
/// Iterates the descriptor's constants in declaration order and returns the
/// first whose canonical wire string equals `literal` under exact,
/// case-sensitive string equality. No normalization (trimming, case-folding)
/// is performed; an alternate spelling must be declared as an explicit wire
/// string on the constant, not handled here.
///
/// Pure function: no side effects, deterministic for a given
/// descriptor/literal pair. A descriptor with zero constants always yields
/// [`MatchResult::Unmatched`].
///
/// # Examples
///
/// ```
/// use wire_enum::{WireEnum, match_constant, MatchResult, derive::WireEnum};
///
/// #[derive(WireEnum)]
/// enum Color { Red, Green, Blue }
///
/// let info = Color::enum_info();
///
/// assert!(match_constant(info, "Red").is_matched());
/// assert_eq!(match_constant(info, "red"), MatchResult::Unmatched("red"));
/// ```
pub fn match_constant<'i, 'l>(info: &'i EnumWireInfo, literal: &'l str) -> MatchResult<'i, 'l> {
    for constant in info.iter() {
        if constant.wire_name() == literal {
            return MatchResult::Matched(constant);
        }
    }
    MatchResult::Unmatched(literal)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{MatchResult, match_constant};
    use crate::info::{ConstantInfo, EnumWireInfo, TypePath};

    enum Sample {}

    impl TypePath for Sample {
        fn type_path() -> &'static str {
            "wire_enum::matcher::tests::Sample"
        }
        fn type_name() -> &'static str {
            "Sample"
        }
    }

    fn sample_info() -> EnumWireInfo {
        EnumWireInfo::new::<Sample>(&[
            ConstantInfo::new("Red"),
            ConstantInfo::renamed("Green", "VERDE"),
            ConstantInfo::new(""),
        ])
    }

    #[test]
    fn exact_match_returns_each_constant() {
        let info = sample_info();
        for constant in info.iter() {
            assert_eq!(
                match_constant(&info, constant.wire_name()),
                MatchResult::Matched(constant),
            );
        }
    }

    #[test]
    fn no_aliasing_for_cased_variants() {
        let info = sample_info();
        assert_eq!(match_constant(&info, "red"), MatchResult::Unmatched("red"));
        assert_eq!(match_constant(&info, "RED"), MatchResult::Unmatched("RED"));
        // The Rust-side name of a renamed constant is not a wire string.
        assert_eq!(
            match_constant(&info, "Green"),
            MatchResult::Unmatched("Green")
        );
    }

    #[test]
    fn empty_literal_matches_only_empty_wire_string() {
        let info = sample_info();
        assert_eq!(
            match_constant(&info, "").constant().map(ConstantInfo::name),
            Some("")
        );

        let without_empty =
            EnumWireInfo::new::<Sample>(&[ConstantInfo::new("Red")]);
        assert_eq!(match_constant(&without_empty, ""), MatchResult::Unmatched(""));
    }

    #[test]
    fn empty_descriptor_never_matches() {
        let info = EnumWireInfo::new::<Sample>(&[]);
        assert_eq!(match_constant(&info, "Red"), MatchResult::Unmatched("Red"));
        assert_eq!(match_constant(&info, ""), MatchResult::Unmatched(""));
    }
}
