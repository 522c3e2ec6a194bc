//! Compile-time information about enumerated wire types.
//!
//! ## Menu
//!
//! - [`TypePath`]: A static accessor to type paths and names.
//! - [`Type`]: A [`TypeId`](core::any::TypeId) paired with a [`TypePathTable`].
//! - [`ConstantInfo`]: One constant of an enumerated type and its canonical
//!   wire string.
//! - [`EnumWireInfo`]: The resolved, matchable descriptor of one enumerated
//!   type.
//! - [`EnumInfoCell`]: Static storage for lazily built descriptors.
//! - [`WireEnum`]: The trait connecting a Rust enum to its descriptor.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod constant_info;
mod enum_info;
mod type_path;
mod wire_enum;

// -----------------------------------------------------------------------------
// Exports

pub use cell::EnumInfoCell;
pub use constant_info::ConstantInfo;
pub use enum_info::EnumWireInfo;
pub use type_path::{Type, TypePath, TypePathTable};
pub use wire_enum::WireEnum;
