// -----------------------------------------------------------------------------
// Modules

mod driver;
mod error_utils;
mod wire_visitor;

// -----------------------------------------------------------------------------
// Exports

pub use driver::{MetaEnumDeserializer, WireEnumDeserializer};
