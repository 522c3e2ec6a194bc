use core::fmt;

// -----------------------------------------------------------------------------
// ConstantInfo

/// One constant of an enumerated wire type.
///
/// Carries the Rust-side constant name and the canonical wire string that
/// round-trips to it. By default both are the same; a constant may declare an
/// alternate wire string via [`renamed`](ConstantInfo::renamed) (the derive
/// attribute `#[wire(rename = "...")]`).
///
/// # Examples
///
/// ```
/// use wire_enum::info::ConstantInfo;
///
/// let plain = ConstantInfo::new("Red");
/// assert_eq!(plain.name(), "Red");
/// assert_eq!(plain.wire_name(), "Red");
///
/// let renamed = ConstantInfo::renamed("Green", "VERDE");
/// assert_eq!(renamed.name(), "Green");
/// assert_eq!(renamed.wire_name(), "VERDE");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ConstantInfo {
    name: &'static str,
    wire_name: &'static str,
}

impl ConstantInfo {
    /// Create a new [`ConstantInfo`] whose wire string is its own name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            wire_name: name,
        }
    }

    /// Create a new [`ConstantInfo`] with an alternate canonical wire string.
    #[inline]
    pub const fn renamed(name: &'static str, wire_name: &'static str) -> Self {
        Self { name, wire_name }
    }

    /// The name of this constant.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical wire string of this constant.
    ///
    /// Matching against incoming literals is exact and case-sensitive.
    #[inline]
    pub const fn wire_name(&self) -> &'static str {
        self.wire_name
    }
}

impl fmt::Debug for ConstantInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name == self.wire_name {
            f.write_str(self.name)
        } else {
            write!(f, "{} (wire: `{}`)", self.name, self.wire_name)
        }
    }
}
