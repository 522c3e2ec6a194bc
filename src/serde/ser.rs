use serde_core::{Serialize, Serializer};

use crate::info::WireEnum;

// -----------------------------------------------------------------------------
// WireEnumSerializer

/// Serializes a wire-enum constant as its canonical wire string.
///
/// The serialization counterpart of
/// [`WireEnumDeserializer`](crate::serde::WireEnumDeserializer): whatever
/// string this emits round-trips back to the same constant.
///
/// # Examples
///
/// ```
/// use wire_enum::derive::WireEnum;
/// use wire_enum::serde::WireEnumSerializer;
///
/// #[derive(WireEnum)]
/// enum Color {
///     Red,
///     #[wire(rename = "VERDE")]
///     Green,
/// }
///
/// let json = serde_json::to_string(&WireEnumSerializer::new(&Color::Green)).unwrap();
/// assert_eq!(json, "\"VERDE\"");
/// ```
pub struct WireEnumSerializer<'a, T: WireEnum> {
    constant: &'a T,
}

impl<'a, T: WireEnum> WireEnumSerializer<'a, T> {
    /// Creates a new [`WireEnumSerializer`].
    #[inline]
    pub const fn new(constant: &'a T) -> Self {
        Self { constant }
    }
}

impl<T: WireEnum> Serialize for WireEnumSerializer<'_, T> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.constant.wire_name())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_core::de::DeserializeSeed;

    use super::WireEnumSerializer;
    use crate::derive::WireEnum;
    use crate::serde::WireEnumDeserializer;

    #[derive(WireEnum, Debug, PartialEq)]
    enum Color {
        Red,
        #[wire(rename = "VERDE")]
        Green,
    }

    #[test]
    fn canonical_strings_round_trip() {
        for constant in [Color::Red, Color::Green] {
            let json = serde_json::to_string(&WireEnumSerializer::new(&constant)).unwrap();

            let mut data = serde_json::Deserializer::from_str(&json);
            let back = WireEnumDeserializer::<Color>::new()
                .deserialize(&mut data)
                .unwrap();
            assert_eq!(back, constant);
        }
    }
}
