//! Exports used by the derive macro. Not public API.

/// Plumbing behind [`EnumRegistry::auto_register`].
///
/// `#[wire(auto_register)]` submits one [`__AutoRegisterFunc`] per annotated
/// type through [`inventory`]; [`__register_types`] replays them all into a
/// registry.
///
/// [`EnumRegistry::auto_register`]: crate::registry::EnumRegistry::auto_register
pub mod auto_register {
    pub use inventory;

    use crate::WireEnum;
    use crate::info::{EnumInfoCell, EnumWireInfo, TypePath};
    use crate::registry::EnumRegistry;

    /// A registration function collected across the program.
    pub struct __AutoRegisterFunc(pub fn(&mut EnumRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Glue turning a [`WireEnum`] type into a registration function with a
    /// nameable address.
    pub trait __RegisterType: WireEnum {
        fn __register(registry: &mut EnumRegistry);
    }

    impl<T: WireEnum> __RegisterType for T {
        fn __register(registry: &mut EnumRegistry) {
            registry.register::<T>();
        }
    }

    /// Marker submitted by this crate itself; finding it registered after a
    /// run proves the platform supports distributed collection.
    pub enum __AvailFlag {}

    impl TypePath for __AvailFlag {
        fn type_path() -> &'static str {
            "wire_enum::__macro_exports::auto_register::__AvailFlag"
        }
        fn type_name() -> &'static str {
            "__AvailFlag"
        }
        fn module_path() -> Option<&'static str> {
            Some("wire_enum::__macro_exports::auto_register")
        }
    }

    impl WireEnum for __AvailFlag {
        fn enum_info() -> &'static EnumWireInfo {
            static CELL: EnumInfoCell = EnumInfoCell::new();
            CELL.get_or_init(|| EnumWireInfo::new::<Self>(&[]))
        }

        fn from_index(_: usize) -> Option<Self> {
            None
        }

        fn constant_index(&self) -> usize {
            match *self {}
        }
    }

    inventory::submit! {
        __AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register)
    }

    /// Runs every collected registration function against `registry`.
    pub fn __register_types(registry: &mut EnumRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
