use alloc::boxed::Box;
use alloc::string::String;

use crate::hash::HashMap;
use crate::info::{ConstantInfo, Type, TypePath};

// -----------------------------------------------------------------------------
// EnumWireInfo

/// The resolved, matchable descriptor of one enumerated wire type.
///
/// Holds a stable type identity and the ordered list of the type's constants
/// with their canonical wire strings.
///
/// # Invariant
///
/// Wire strings are unique within one descriptor. A duplicate is a
/// configuration-time defect and panics at construction, never at match time.
///
/// # Examples
///
/// ```
/// use wire_enum::{WireEnum, derive::WireEnum};
///
/// #[derive(WireEnum)]
/// enum Color { Red, Green, Blue }
///
/// let info = Color::enum_info();
/// assert!(info.contains_constant("Red"));
/// assert_eq!(info.index_of("Blue"), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct EnumWireInfo {
    ty: Type,
    constants: Box<[ConstantInfo]>,
    name_to_index: HashMap<&'static str, usize>,
}

impl EnumWireInfo {
    /// Creates a new [`EnumWireInfo`].
    ///
    /// The order of internal constants is fixed, depends on the input order.
    ///
    /// # Panics
    ///
    /// Panics if two constants share the same canonical wire string.
    pub fn new<TEnum: TypePath>(constants: &[ConstantInfo]) -> Self {
        for (index, constant) in constants.iter().enumerate() {
            let duplicated = constants[..index]
                .iter()
                .any(|prev| prev.wire_name() == constant.wire_name());
            if duplicated {
                panic!(
                    "duplicate wire string `{}` on enum `{}`",
                    constant.wire_name(),
                    TEnum::type_path(),
                );
            }
        }

        let name_to_index = constants
            .iter()
            .enumerate()
            .map(|(index, constant)| (constant.name(), index))
            .collect();

        Self {
            ty: Type::of::<TEnum>(),
            constants: constants.into(),
            name_to_index,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> core::any::TypeId {
        self.ty.id()
    }

    /// Returns the type path.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty.name()
    }

    /// Returns the [`ConstantInfo`] for the given constant name, if present.
    pub fn constant(&self, name: &str) -> Option<&ConstantInfo> {
        self.constants.get(*self.name_to_index.get(name)?)
    }

    /// Returns the [`ConstantInfo`] at the given index, if present.
    #[inline]
    pub fn constant_at(&self, index: usize) -> Option<&ConstantInfo> {
        self.constants.get(index)
    }

    /// Returns an iterator over the constants in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ConstantInfo> {
        self.constants.iter()
    }

    /// Returns `true` if a constant with the given name exists.
    pub fn contains_constant(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Returns the index for the given constant name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Returns the full path for a constant name, e.g. `Type::Constant`.
    #[inline]
    pub fn constant_path(&self, name: &str) -> String {
        alloc::format!("{}::{name}", self.type_path())
    }

    /// Returns the number of constants.
    #[inline]
    pub fn constant_len(&self) -> usize {
        self.constants.len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::EnumWireInfo;
    use crate::info::{ConstantInfo, TypePath};

    enum Sample {}

    impl TypePath for Sample {
        fn type_path() -> &'static str {
            "wire_enum::info::enum_info::tests::Sample"
        }
        fn type_name() -> &'static str {
            "Sample"
        }
    }

    #[test]
    fn declaration_order_is_preserved() {
        let info = EnumWireInfo::new::<Sample>(&[
            ConstantInfo::new("B"),
            ConstantInfo::new("A"),
            ConstantInfo::new("C"),
        ]);

        let names: alloc::vec::Vec<_> = info.iter().map(ConstantInfo::name).collect();
        assert_eq!(names, ["B", "A", "C"]);
        assert_eq!(info.index_of("A"), Some(1));
        assert_eq!(info.constant_at(0).unwrap().name(), "B");
        assert_eq!(info.constant_path("C"), alloc::format!("{}::C", Sample::type_path()));
    }

    #[test]
    #[should_panic(expected = "duplicate wire string")]
    fn duplicate_wire_names_panic() {
        EnumWireInfo::new::<Sample>(&[
            ConstantInfo::new("On"),
            ConstantInfo::renamed("Enabled", "On"),
        ]);
    }

    #[test]
    fn empty_descriptor_is_valid() {
        let info = EnumWireInfo::new::<Sample>(&[]);
        assert_eq!(info.constant_len(), 0);
        assert!(info.constant("anything").is_none());
    }
}
