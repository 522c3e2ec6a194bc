use std::sync::OnceLock;

use crate::info::EnumWireInfo;

// -----------------------------------------------------------------------------
// EnumInfoCell

/// Container for static storage of an [`EnumWireInfo`].
///
/// Internally, there is an [`OnceLock`], almost no additional expenses.
/// Concurrent first use from multiple threads is safe: descriptor
/// construction is idempotent and only one result is ever published.
///
/// This is usually used to implement [`WireEnum`](crate::WireEnum); the
/// derive emits one `static CELL` per enum.
///
/// ## Example
///
/// ```ignore
/// impl WireEnum for Color {
///     fn enum_info() -> &'static EnumWireInfo {
///         static CELL: EnumInfoCell = EnumInfoCell::new();
///         CELL.get_or_init(|| EnumWireInfo::new::<Self>(&[
///             ConstantInfo::new("Red"),
///             ConstantInfo::new("Green"),
///             ConstantInfo::new("Blue"),
///         ]))
///     }
///     // ...
/// }
/// ```
pub struct EnumInfoCell(OnceLock<EnumWireInfo>);

impl EnumInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the descriptor stored in the cell.
    ///
    /// If there is no entry found, a new one will be generated from the given
    /// function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &EnumWireInfo
    where
        F: FnOnce() -> EnumWireInfo,
    {
        self.0.get_or_init(f)
    }
}
