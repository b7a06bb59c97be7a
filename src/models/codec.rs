// Codec module
// Two-way mapping between domain values and preference primitives

use super::preference::PreferenceValue;

/// A primitive type a preference slot can store directly.
pub trait Primitive: Sized {
    fn into_value(self) -> PreferenceValue;

    /// Extract the primitive, or `None` if the slot holds another type.
    fn from_value(value: &PreferenceValue) -> Option<Self>;
}

impl Primitive for bool {
    fn into_value(self) -> PreferenceValue {
        PreferenceValue::Bool(self)
    }

    fn from_value(value: &PreferenceValue) -> Option<Self> {
        value.as_bool()
    }
}

impl Primitive for i64 {
    fn into_value(self) -> PreferenceValue {
        PreferenceValue::Int(self)
    }

    fn from_value(value: &PreferenceValue) -> Option<Self> {
        value.as_int()
    }
}

impl Primitive for f64 {
    fn into_value(self) -> PreferenceValue {
        PreferenceValue::Double(self)
    }

    fn from_value(value: &PreferenceValue) -> Option<Self> {
        value.as_double()
    }
}

impl Primitive for String {
    fn into_value(self) -> PreferenceValue {
        PreferenceValue::Text(self)
    }

    fn from_value(value: &PreferenceValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

/// Converts a domain value to and from a storage primitive.
///
/// Decoding never fails: a codec decides for itself what a primitive it
/// cannot interpret turns into.
pub trait Codec {
    type Value;
    type Primitive: Primitive;

    fn encode(&self, value: &Self::Value) -> Self::Primitive;
    fn decode(&self, raw: Self::Primitive) -> Self::Value;
}
