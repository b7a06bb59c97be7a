use super::{ObserverId, PreferenceError, PreferenceStore, PreferenceValue};
use crate::models::codec::{Codec, Primitive};
use crate::models::color_scheme::{ColorSchemeChoice, ColorSchemeOrdinalCodec, COLOR_SCHEME_KEY};
use crate::models::instant::{Instant, InstantStringCodec};

/// Typed access to one named preference slot.
///
/// Reads never fail: an empty slot, a slot holding a different primitive
/// type, or a store error all yield the default value.
#[derive(Debug, Clone)]
pub struct PreferenceBinding<C: Codec> {
    key: String,
    default: C::Value,
    codec: C,
}

impl<C> PreferenceBinding<C>
where
    C: Codec,
    C::Value: Clone,
{
    pub fn new(key: impl Into<String>, default: C::Value, codec: C) -> Self {
        Self {
            key: key.into(),
            default,
            codec,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_value(&self) -> &C::Value {
        &self.default
    }

    pub fn get<S: PreferenceStore + ?Sized>(&self, store: &S) -> C::Value {
        match store.get(&self.key) {
            Ok(slot) => decode_slot(&self.key, &self.codec, &self.default, slot.as_ref()),
            Err(e) => {
                log::warn!("Failed to read preference '{}': {}, using default", self.key, e);
                self.default.clone()
            }
        }
    }

    pub fn set<S: PreferenceStore + ?Sized>(
        &self,
        store: &S,
        value: &C::Value,
    ) -> Result<(), PreferenceError> {
        store.set(&self.key, self.codec.encode(value).into_value())
    }

    /// Remove the stored value so reads return the default again
    pub fn reset<S: PreferenceStore + ?Sized>(&self, store: &S) -> Result<(), PreferenceError> {
        store.remove(&self.key)
    }

    /// Call `callback` with the decoded value after every change of the slot
    pub fn observe<S, F>(&self, store: &S, callback: F) -> ObserverId
    where
        S: PreferenceStore + ?Sized,
        F: Fn(C::Value) + 'static,
        C: Clone + 'static,
        C::Value: 'static,
    {
        let key = self.key.clone();
        let codec = self.codec.clone();
        let default = self.default.clone();
        store.observe(
            &self.key,
            Box::new(move |slot: Option<&PreferenceValue>| callback(decode_slot(&key, &codec, &default, slot))),
        )
    }
}

fn decode_slot<C>(key: &str, codec: &C, default: &C::Value, slot: Option<&PreferenceValue>) -> C::Value
where
    C: Codec,
    C::Value: Clone,
{
    let Some(value) = slot else {
        return default.clone();
    };

    match C::Primitive::from_value(value) {
        Some(raw) => codec.decode(raw),
        None => {
            log::warn!(
                "Preference '{}' holds a {} value, expected another type; using default",
                key,
                value.kind()
            );
            default.clone()
        }
    }
}

/// Binding for a timestamp stored as text; defaults to the reference epoch
pub fn instant_binding(key: impl Into<String>) -> PreferenceBinding<InstantStringCodec> {
    PreferenceBinding::new(key, Instant::REFERENCE, InstantStringCodec)
}

/// Binding for the persisted color scheme choice
pub fn color_scheme_binding() -> PreferenceBinding<ColorSchemeOrdinalCodec> {
    PreferenceBinding::new(COLOR_SCHEME_KEY, ColorSchemeChoice::default(), ColorSchemeOrdinalCodec)
}
