//! Derive macro for the `wire_enum` crate.

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// -----------------------------------------------------------------------------
// WireEnum

/// Implement `TypePath` and `WireEnum` for an enum whose variants are all
/// unit variants.
///
/// The canonical wire string of each constant defaults to its own name and
/// can be overridden per constant. Data-carrying variants and generic enums
/// are rejected at compile time; empty enums are accepted and never match
/// any literal.
///
/// # Attributes
///
/// On the enum:
///
/// - `#[wire(type_path = "my_crate::api::Color")]`: pin a stable type path
///   that survives moving the definition. By default the path is derived
///   from the defining module.
/// - `#[wire(auto_register)]`: submit the type for collection by
///   `EnumRegistry::auto_register` (requires the `auto_register` feature).
///
/// On a variant:
///
/// - `#[wire(rename = "VERDE")]`: override the canonical wire string.
///
/// # Examples
///
/// ```ignore
/// use wire_enum::{WireEnum, derive::WireEnum};
///
/// #[derive(WireEnum, Debug, PartialEq)]
/// #[wire(auto_register)]
/// enum Color {
///     Red,
///     #[wire(rename = "VERDE")]
///     Green,
///     Blue,
/// }
///
/// assert_eq!(Color::from_wire("VERDE"), Some(Color::Green));
/// ```
#[proc_macro_derive(WireEnum, attributes(wire))]
pub fn derive_wire_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_data::WireEnumInput::parse(&input) {
        Ok(data) => impls::impl_wire_enum(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
