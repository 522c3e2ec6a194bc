use core::fmt::{self, Formatter};

use serde_core::de::{Error, Visitor};

use super::error_utils::make_custom_error;

use crate::error::InvalidEnumValueError;
use crate::info::{ConstantInfo, EnumWireInfo};
use crate::matcher::{MatchResult, match_constant};

// -----------------------------------------------------------------------------
// WireNameVisitor

/// A [`Visitor`] matching one wire string against a descriptor.
pub(super) struct WireNameVisitor<'a> {
    pub info: &'static EnumWireInfo,
    pub field_name: Option<&'a str>,
}

impl<'de> Visitor<'de> for WireNameVisitor<'_> {
    type Value = &'static ConstantInfo;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "a wire string for enum `{}`",
            self.info.type_path()
        )
    }

    fn visit_str<E>(self, literal: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match match_constant(self.info, literal) {
            MatchResult::Matched(constant) => Ok(constant),
            MatchResult::Unmatched(raw) => Err(make_custom_error(InvalidEnumValueError::new(
                self.field_name.unwrap_or(""),
                raw,
            ))),
        }
    }
}
