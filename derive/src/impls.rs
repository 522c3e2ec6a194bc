use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::WireEnumInput;

// -----------------------------------------------------------------------------
// impl_wire_enum

/// Implement full wire reflection for a unit-variant enum.
pub(crate) fn impl_wire_enum(input: &WireEnumInput) -> TokenStream {
    let auto_register_tokens = get_auto_register_impl(input);
    let type_path_tokens = impl_trait_type_path(input);
    let wire_enum_tokens = impl_trait_wire_enum(input);

    quote! {
        #auto_register_tokens

        #type_path_tokens

        #wire_enum_tokens
    }
}

// -----------------------------------------------------------------------------
// TypePath

fn impl_trait_type_path(input: &WireEnumInput) -> TokenStream {
    let ident = &input.ident;
    let ident_str = ident.to_string();

    let (type_path_fn, type_name_fn, module_path_fn) = match &input.type_path {
        Some(custom) => {
            let path = &custom.path;
            let name = &custom.name;
            let module = match &custom.module {
                Some(module) => quote!(::core::option::Option::Some(#module)),
                None => quote!(::core::option::Option::None),
            };
            (quote!(#path), quote!(#name), module)
        }
        None => (
            quote!(::core::concat!(::core::module_path!(), "::", #ident_str)),
            quote!(#ident_str),
            quote!(::core::option::Option::Some(::core::module_path!())),
        ),
    };

    quote! {
        impl ::wire_enum::info::TypePath for #ident {
            fn type_path() -> &'static str {
                #type_path_fn
            }

            fn type_name() -> &'static str {
                #type_name_fn
            }

            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path_fn
            }
        }
    }
}

// -----------------------------------------------------------------------------
// WireEnum

fn impl_trait_wire_enum(input: &WireEnumInput) -> TokenStream {
    let ident = &input.ident;

    let constant_tokens = input.constants.iter().map(|constant| {
        let name = constant.ident.to_string();
        match &constant.rename {
            Some(wire_name) => {
                quote!(::wire_enum::info::ConstantInfo::renamed(#name, #wire_name))
            }
            None => quote!(::wire_enum::info::ConstantInfo::new(#name)),
        }
    });

    let from_index_fn = if input.constants.is_empty() {
        quote! {
            let _ = index;
            ::core::option::Option::None
        }
    } else {
        let arms = input.constants.iter().enumerate().map(|(index, constant)| {
            let variant = &constant.ident;
            quote!(#index => ::core::option::Option::Some(Self::#variant),)
        });
        quote! {
            match index {
                #(#arms)*
                _ => ::core::option::Option::None,
            }
        }
    };

    let constant_index_arms = input.constants.iter().enumerate().map(|(index, constant)| {
        let variant = &constant.ident;
        quote!(Self::#variant => #index,)
    });

    quote! {
        impl ::wire_enum::WireEnum for #ident {
            fn enum_info() -> &'static ::wire_enum::info::EnumWireInfo {
                static CELL: ::wire_enum::info::EnumInfoCell =
                    ::wire_enum::info::EnumInfoCell::new();
                CELL.get_or_init(|| {
                    ::wire_enum::info::EnumWireInfo::new::<Self>(&[
                        #(#constant_tokens,)*
                    ])
                })
            }

            fn from_index(index: usize) -> ::core::option::Option<Self> {
                #from_index_fn
            }

            fn constant_index(&self) -> usize {
                match *self {
                    #(#constant_index_arms)*
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// auto_register

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
fn get_auto_register_impl(input: &WireEnumInput) -> TokenStream {
    use quote::quote_spanned;

    if let Some(span) = input.auto_register {
        let ident = &input.ident;
        quote_spanned! { span =>
            ::wire_enum::__macro_exports::auto_register::inventory::submit! {
                ::wire_enum::__macro_exports::auto_register::__AutoRegisterFunc(
                    <#ident as ::wire_enum::__macro_exports::auto_register::__RegisterType>::__register
                )
            }
        }
    } else {
        TokenStream::new()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
fn get_auto_register_impl(_: &WireEnumInput) -> TokenStream {
    TokenStream::new()
}
