//! Contextual type resolution and the end-to-end deserialization pipeline.
//!
//! ## Menu
//!
//! - [`CallSite`]: The binding between target-structure metadata ("field F of
//!   type T") and the enumerated type it expects. Produced by the surrounding
//!   framework; read-only here.
//! - [`EnumResolver`]: Determines which type's constants a call site should
//!   be matched against, either from a fixed binding or from the call site's
//!   own metadata.
//! - [`EnumValueDeserializer`]: Orchestrates one attempt end to end: resolve,
//!   match, and raise a structured error on mismatch.
//! - [`deserialize_field`]: The typed shortcut when the target enum is known
//!   statically.

// -----------------------------------------------------------------------------
// Modules

mod call_site;
mod deserializer;
mod resolver;

// -----------------------------------------------------------------------------
// Exports

pub use call_site::CallSite;
pub use deserializer::{EnumValueDeserializer, deserialize_field};
pub use resolver::EnumResolver;
