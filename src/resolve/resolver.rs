use alloc::borrow::Cow;
use alloc::string::ToString;

use crate::error::TypeResolutionError;
use crate::info::WireEnum;
use crate::registry::{EnumMeta, EnumRegistry};
use crate::resolve::CallSite;

// -----------------------------------------------------------------------------
// EnumResolver

/// Determines, for a given call site, which enumerated type's constants
/// should be matched.
///
/// Two bindings exist:
///
/// - [`bound`](EnumResolver::bound): fixed to one type at construction; the
///   call site is ignored. This supports direct, explicit binding and needs
///   no registry.
/// - [`from_registry`](EnumResolver::from_registry): contextual; the target
///   is derived per call from the call site's declared type metadata against
///   the registry. This is what makes the mechanism generic: one resolver
///   serves every enumerated type in the system.
///
/// Resolution is idempotent and side-effect-free; the registry acts as the
/// read-through cache, so repeated resolution at the same site does not
/// rediscover anything.
///
/// # Examples
///
/// ```
/// use wire_enum::{CallSite, EnumResolver};
/// use wire_enum::derive::WireEnum;
/// use wire_enum::registry::EnumRegistry;
///
/// #[derive(WireEnum)]
/// enum Color { Red, Green, Blue }
///
/// let mut registry = EnumRegistry::new();
/// registry.register::<Color>();
///
/// let resolver = EnumResolver::from_registry(&registry);
/// let site = CallSite::of::<Color>("favoriteColor");
///
/// let meta = resolver.resolve(&site).unwrap();
/// assert_eq!(meta.type_name(), "Color");
/// ```
pub struct EnumResolver<'a> {
    binding: Binding<'a>,
}

enum Binding<'a> {
    Fixed(EnumMeta),
    Contextual(&'a EnumRegistry),
}

impl EnumResolver<'static> {
    /// Create a resolver fixed to the type `T`.
    ///
    /// [`resolve`](EnumResolver::resolve) returns `T`'s metadata
    /// unconditionally, whatever the call site declares.
    pub fn bound<T: WireEnum>() -> Self {
        Self {
            binding: Binding::Fixed(EnumMeta::of::<T>()),
        }
    }
}

impl<'a> EnumResolver<'a> {
    /// Create a resolver deriving the target type from each call site.
    pub fn from_registry(registry: &'a EnumRegistry) -> Self {
        Self {
            binding: Binding::Contextual(registry),
        }
    }

    /// Determine the enumerated type a call site should be matched against.
    ///
    /// Fails with [`TypeResolutionError`] when the call site provides no
    /// usable type metadata. This is a configuration-time defect and should
    /// not occur in correctly set-up systems; it is reported distinctly from
    /// a user-input validation failure.
    pub fn resolve(&self, call_site: &CallSite) -> Result<&EnumMeta, TypeResolutionError> {
        let registry = match &self.binding {
            Binding::Fixed(meta) => return Ok(meta),
            Binding::Contextual(registry) => registry,
        };

        if let Some(ty) = call_site.declared_type() {
            return registry
                .get(ty.id())
                .ok_or(TypeResolutionError::UnregisteredType {
                    type_path: Cow::Borrowed(ty.path()),
                });
        }

        if let Some(reference) = call_site.declared_type_path() {
            if let Some(meta) = registry.get_with_type_path(reference) {
                return Ok(meta);
            }
            if let Some(meta) = registry.get_with_type_name(reference) {
                return Ok(meta);
            }
            if registry.is_ambiguous(reference) {
                return Err(TypeResolutionError::AmbiguousTypeName {
                    type_name: reference.to_string().into(),
                });
            }
            return Err(TypeResolutionError::UnregisteredType {
                type_path: reference.to_string().into(),
            });
        }

        Err(TypeResolutionError::MissingMetadata)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::EnumResolver;
    use crate::derive::WireEnum;
    use crate::error::TypeResolutionError;
    use crate::registry::EnumRegistry;
    use crate::resolve::CallSite;

    #[derive(WireEnum)]
    enum Status {
        Active,
        Disabled,
    }

    #[derive(WireEnum)]
    enum Unregistered {
        Lonely,
    }

    #[test]
    fn bound_resolver_ignores_the_call_site() {
        let resolver = EnumResolver::bound::<Status>();
        let site = CallSite::untyped("status");

        let meta = resolver.resolve(&site).unwrap();
        assert_eq!(meta.type_name(), "Status");
    }

    #[test]
    fn contextual_resolution_by_type_and_reference() {
        let mut registry = EnumRegistry::new();
        registry.register::<Status>();
        let resolver = EnumResolver::from_registry(&registry);

        let by_type = resolver.resolve(&CallSite::of::<Status>("status")).unwrap();
        assert_eq!(by_type.type_name(), "Status");

        let by_name = resolver
            .resolve(&CallSite::with_type_path("status", "Status"))
            .unwrap();
        assert_eq!(by_name.type_id(), by_type.type_id());
    }

    #[test]
    fn missing_metadata_is_a_resolution_error() {
        let registry = EnumRegistry::new();
        let resolver = EnumResolver::from_registry(&registry);

        let err = resolver.resolve(&CallSite::untyped("status")).unwrap_err();
        assert_eq!(err, TypeResolutionError::MissingMetadata);
    }

    #[test]
    fn unregistered_type_is_reported_with_its_path() {
        let mut registry = EnumRegistry::new();
        registry.register::<Status>();
        let resolver = EnumResolver::from_registry(&registry);

        let err = resolver
            .resolve(&CallSite::of::<Unregistered>("status"))
            .unwrap_err();
        match err {
            TypeResolutionError::UnregisteredType { type_path } => {
                assert!(type_path.ends_with("Unregistered"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn concurrent_descriptor_construction_is_safe() {
        use crate::WireEnum as _;

        // Not registered anywhere else: the first `enum_info` calls race.
        #[derive(WireEnum)]
        enum FreshRace {
            A,
            B,
        }

        let handles: alloc::vec::Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| core::ptr::from_ref(FreshRace::enum_info()) as usize)
            })
            .collect();

        let mut addresses: alloc::vec::Vec<_> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        addresses.dedup();
        assert_eq!(addresses.len(), 1);
    }

    #[test]
    fn concurrent_first_resolution_is_idempotent() {
        use std::sync::Arc;

        let registry = {
            let mut registry = EnumRegistry::new();
            registry.register::<Status>();
            Arc::new(registry)
        };

        let handles: alloc::vec::Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let resolver = EnumResolver::from_registry(&registry);
                    let site = CallSite::of::<Status>("status");
                    let meta = resolver.resolve(&site).unwrap();
                    core::ptr::from_ref(meta.info()) as usize
                })
            })
            .collect();

        let mut addresses = alloc::vec::Vec::new();
        for handle in handles {
            addresses.push(handle.join().unwrap());
        }
        // Every thread observed the same descriptor instance.
        addresses.dedup();
        assert_eq!(addresses.len(), 1);
    }
}
