#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `wire_enum` in
// doc testing. The derive macro always emits absolute `::wire_enum` paths, so
// an `extern self` alias is required for deriving inside this crate.
extern crate self as wire_enum;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod matcher;

pub mod error;
pub mod hash;
pub mod info;
pub mod registry;
pub mod resolve;
pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

#[cfg(feature = "auto_register")]
pub mod __macro_exports;

pub use error::{EnumDeserializeError, InvalidEnumValueError, TypeResolutionError};
pub use info::WireEnum;
pub use matcher::{MatchResult, match_constant};
pub use resolve::{CallSite, EnumResolver, EnumValueDeserializer, deserialize_field};
pub use wire_enum_derive as derive;
