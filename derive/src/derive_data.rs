use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, LitStr};

// -----------------------------------------------------------------------------
// WireEnumInput

/// The validated input of one `#[derive(WireEnum)]` invocation.
pub(crate) struct WireEnumInput {
    pub ident: Ident,
    /// Custom stable type path from `#[wire(type_path = "...")]`.
    pub type_path: Option<TypePathAttr>,
    /// Span of `#[wire(auto_register)]`, if present.
    pub auto_register: Option<Span>,
    pub constants: Vec<Constant>,
}

/// A custom type path, split into its components.
pub(crate) struct TypePathAttr {
    pub path: String,
    pub name: String,
    pub module: Option<String>,
}

/// One unit variant and its canonical wire string.
pub(crate) struct Constant {
    pub ident: Ident,
    /// `None` means the wire string is the variant's own name.
    pub rename: Option<String>,
}

impl WireEnumInput {
    pub fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                input,
                "`WireEnum` can only be derived for enums",
            ));
        };

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "`WireEnum` does not support generic enums",
            ));
        }

        let mut type_path = None;
        let mut auto_register = None;

        for attr in &input.attrs {
            if !attr.path().is_ident("wire") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    type_path = Some(parse_type_path(&lit)?);
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    auto_register = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("expected `type_path = \"...\"` or `auto_register`"))
                }
            })?;
        }

        let mut constants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    &variant.fields,
                    "`WireEnum` constants cannot carry data",
                ));
            }

            let mut rename = None;
            for attr in &variant.attrs {
                if !attr.path().is_ident("wire") {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        let lit: LitStr = meta.value()?.parse()?;
                        rename = Some(lit.value());
                        Ok(())
                    } else {
                        Err(meta.error("expected `rename = \"...\"`"))
                    }
                })?;
            }

            let wire_name = rename
                .clone()
                .unwrap_or_else(|| variant.ident.to_string());
            let duplicated = constants.iter().any(|prev: &Constant| {
                prev.rename
                    .clone()
                    .unwrap_or_else(|| prev.ident.to_string())
                    == wire_name
            });
            if duplicated {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    format!("duplicate wire string `{wire_name}`"),
                ));
            }

            constants.push(Constant {
                ident: variant.ident.clone(),
                rename,
            });
        }

        Ok(Self {
            ident: input.ident.clone(),
            type_path,
            auto_register,
            constants,
        })
    }
}

// A custom path is trusted as-is, but must be non-empty and unprefixed.
fn parse_type_path(lit: &LitStr) -> syn::Result<TypePathAttr> {
    let path = lit.value();
    if path.is_empty() || path.starts_with("::") {
        return Err(syn::Error::new_spanned(
            lit,
            "`type_path` must be a non-empty path without a leading `::`",
        ));
    }

    let (module, name) = match path.rfind("::") {
        Some(position) => (
            Some(path[..position].to_string()),
            path[position + 2..].to_string(),
        ),
        None => (None, path.clone()),
    };

    if name.is_empty() {
        return Err(syn::Error::new_spanned(
            lit,
            "`type_path` must end with a type name",
        ));
    }

    Ok(TypePathAttr { path, name, module })
}
