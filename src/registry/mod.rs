//! The registry backing contextual type resolution.
//!
//! ## Menu
//!
//! - [`EnumMeta`]: Runtime metadata for one registered enum: its descriptor
//!   plus a type-erased serde entry point.
//! - [`EnumRegistry`]: The central store, append-only after startup.
//! - [`EnumRegistryArc`]: A shared, lock-guarded registry for request-serving
//!   hosts.
//!
//! ## auto_register
//!
//! See [`EnumRegistry::auto_register`].
//!
//! We use the [`inventory`] crate to collect `#[wire(auto_register)]` types;
//! not all platforms support it (although major platforms do). If it is not
//! supported, the function directly returns `false` without causing any
//! errors.

// -----------------------------------------------------------------------------
// Modules

mod enum_meta;
mod enum_registry;

// -----------------------------------------------------------------------------
// Exports

pub use enum_meta::EnumMeta;
pub use enum_registry::{EnumRegistry, EnumRegistryArc};
