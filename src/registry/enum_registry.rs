use core::any::TypeId;

use crate::hash::{FixedHashState, HashMap, HashSet, TypeIdMap};
use crate::info::WireEnum;
use crate::registry::EnumMeta;

// -----------------------------------------------------------------------------
// EnumRegistry

/// A registry of enumerated wire types.
///
/// This struct is used as the central store for enum metadata. [Registering]
/// a type generates a new [`EnumMeta`] entry in this store; the entry is then
/// resolvable by [`TypeId`], by full type path, and (when unambiguous) by
/// bare type name.
///
/// The registry is the read-through cache of contextual resolution: entries
/// are immutable once written, registration is idempotent with first-write
/// wins, and nothing is ever removed during normal operation.
///
/// # Example
///
/// ```
/// use wire_enum::derive::WireEnum;
/// use wire_enum::registry::EnumRegistry;
///
/// #[derive(WireEnum)]
/// enum Color { Red, Green, Blue }
///
/// let mut registry = EnumRegistry::new();
/// registry.register::<Color>();
///
/// let meta = registry.get_with_type_name("Color").unwrap();
/// assert_eq!(meta.info().constant_len(), 3);
/// ```
///
/// [Registering]: EnumRegistry::register
pub struct EnumRegistry {
    enum_meta_table: TypeIdMap<EnumMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for EnumRegistry {
    /// See [`EnumRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl EnumRegistry {
    /// Create an empty [`EnumRegistry`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            enum_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        meta: &EnumMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = meta.ty();
        let type_name = ty.name();

        // Check for duplicate names.
        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        // For new type, assuming that the full path cannot be duplicated.
        type_path_to_id.insert(ty.path(), ty.id());
    }

    // - If key [`TypeId`] has already exist, the function will do nothing and
    //   return `false`.
    // - If the key [`TypeId`] does not exist, the function will insert value
    //   and return `true`.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_meta: impl FnOnce() -> EnumMeta,
    ) -> bool {
        self.enum_meta_table.try_insert(type_id, || {
            let meta = get_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Attempts to register the type `T` if it has not yet been registered
    /// already.
    ///
    /// If the meta for type `T` already exists, it will not be registered
    /// again; registration is idempotent and side-effect-free on repeat.
    ///
    /// Returns `true` if the type was newly registered.
    pub fn register<T: WireEnum>(&mut self) -> bool {
        self.register_internal(TypeId::of::<T>(), EnumMeta::of::<T>)
    }

    /// Attempts to register the referenced type `T` if it has not yet been
    /// registered.
    ///
    /// See [`register`](EnumRegistry::register) for more details.
    #[inline]
    pub fn register_by_val<T: WireEnum>(&mut self, _: &T) -> bool {
        self.register::<T>()
    }

    /// Registers all types annotated with `#[wire(auto_register)]`.
    ///
    /// This method is equivalent to calling
    /// [`register`](EnumRegistry::register) for each qualifying type, and is
    /// the explicit one-line registration step performed at process start.
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration succeeded on the current
    /// platform; otherwise, `false`. Successful registrations remain `true`
    /// on subsequent calls.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it
    /// always do nothing and returns `false`.
    ///
    /// ## Platform Support
    ///
    /// Supported platforms include Linux, macOS, Windows, iOS, Android, and
    /// Web, enabled by the [`inventory`] crate. On unsupported platforms,
    /// this method becomes a no-op.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            // Reduce the cost of duplicate registrations.
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Whether the type with given [`TypeId`] has been registered in this
    /// registry.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.enum_meta_table.contains(&type_id)
    }

    /// Returns a reference to the [`EnumMeta`] of the type with the given
    /// [`TypeId`].
    ///
    /// If the specified type has not been registered, returns `None`.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&EnumMeta> {
        self.enum_meta_table.get(&type_id)
    }

    /// Returns a reference to the [`EnumMeta`] of the type with the given
    /// [type path].
    ///
    /// If no type with the given type path has been registered, returns
    /// `None`.
    ///
    /// [type path]: crate::info::TypePath::type_path
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&EnumMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns a reference to the [`EnumMeta`] of the type with the given
    /// [type name].
    ///
    /// If the type name is ambiguous, or if no type with the given name has
    /// been registered, returns `None`.
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&EnumMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the given [type name] is ambiguous, that is, it
    /// matches multiple registered types.
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns an iterator over the [`EnumMeta`]s of the registered types.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EnumMeta> {
        self.enum_meta_table.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.enum_meta_table.len()
    }
}

// -----------------------------------------------------------------------------
// EnumRegistryArc

use std::sync::{Arc, PoisonError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A shared, lock-guarded [`EnumRegistry`] for request-serving hosts.
///
/// Registration happens once at startup through [`write`]; the serving path
/// only ever takes read locks. A poisoned lock is recovered rather than
/// propagated, since registry state cannot be left partially written.
///
/// [`write`]: EnumRegistryArc::write
#[derive(Clone, Default)]
pub struct EnumRegistryArc {
    /// The wrapped [`EnumRegistry`].
    pub internal: Arc<RwLock<EnumRegistry>>,
}

impl EnumRegistryArc {
    /// Takes a read lock on the underlying [`EnumRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, EnumRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`EnumRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, EnumRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for EnumRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.internal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .type_path_to_id
            .keys()
            .fmt(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::EnumRegistry;
    use crate::derive::WireEnum;

    #[derive(WireEnum)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    mod shadow {
        use crate::derive::WireEnum;

        #[derive(WireEnum)]
        pub enum Color {
            Cyan,
        }
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = EnumRegistry::new();
        assert!(registry.register::<Color>());
        assert!(!registry.register::<Color>());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(TypeId::of::<Color>()));
    }

    #[test]
    fn lookup_by_path_and_name() {
        let mut registry = EnumRegistry::new();
        registry.register::<Color>();

        let meta = registry.get(TypeId::of::<Color>()).unwrap();
        assert_eq!(registry.get_with_type_path(meta.type_path()).unwrap().type_id(), meta.type_id());
        assert!(registry.get_with_type_name("Color").is_some());
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_collects_annotated_types() {
        #[derive(WireEnum)]
        #[wire(auto_register)]
        enum AutoColor {
            Sepia,
        }

        let mut registry = EnumRegistry::new();
        assert!(registry.auto_register());
        assert!(registry.contains(TypeId::of::<AutoColor>()));

        // Repeated calls are cheap and keep succeeding.
        assert!(registry.auto_register());
    }

    #[test]
    fn duplicate_names_become_ambiguous() {
        let mut registry = EnumRegistry::new();
        registry.register::<Color>();
        registry.register::<shadow::Color>();

        assert!(registry.is_ambiguous("Color"));
        assert!(registry.get_with_type_name("Color").is_none());

        // Full paths stay resolvable.
        assert!(registry.get_with_type_path(<Color as crate::info::TypePath>::type_path()).is_some());
        assert!(
            registry
                .get_with_type_path(<shadow::Color as crate::info::TypePath>::type_path())
                .is_some()
        );
    }
}
