//! Integration with the `serde` data model, via `serde_core`.
//!
//! The surrounding serialization framework drives these seeds; the core
//! makes no assumption about the wire format beyond "a string is available".
//!
//! ## Menu
//!
//! - [`WireEnumDeserializer`]: Typed [`DeserializeSeed`] producing a `T`.
//! - [`MetaEnumDeserializer`]: Metadata-driven seed producing the matched
//!   [`ConstantInfo`](crate::info::ConstantInfo).
//! - [`WireEnumSerializer`]: Emits the canonical wire string of a constant.
//!
//! With the `debug` feature enabled (Debug mode only), deserialization error
//! messages carry the chain of call sites that led to the failure.
//!
//! [`DeserializeSeed`]: serde_core::de::DeserializeSeed

// -----------------------------------------------------------------------------
// Modules

#[cfg(all(debug_assertions, feature = "debug"))]
mod site_stack;

mod de;
mod ser;

#[cfg(all(debug_assertions, feature = "debug"))]
pub(crate) use site_stack::{CallSiteStack, SiteFrame};

// -----------------------------------------------------------------------------
// Exports

pub use de::{MetaEnumDeserializer, WireEnumDeserializer};
pub use ser::WireEnumSerializer;
