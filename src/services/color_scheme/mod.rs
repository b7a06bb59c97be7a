// Color scheme service
// Reads, writes and observes the persisted appearance choice

use anyhow::{Context, Result};

use crate::models::color_scheme::{ColorSchemeChoice, ColorSchemeOrdinalCodec};
use crate::services::preferences::{
    color_scheme_binding, ObserverId, PreferenceBinding, PreferenceStore,
};

pub struct ColorSchemeService<'a> {
    store: &'a dyn PreferenceStore,
    binding: PreferenceBinding<ColorSchemeOrdinalCodec>,
}

impl<'a> ColorSchemeService<'a> {
    pub fn new(store: &'a dyn PreferenceStore) -> Self {
        Self {
            store,
            binding: color_scheme_binding(),
        }
    }

    /// The stored choice, or `Automatic` if nothing usable is stored
    pub fn current(&self) -> ColorSchemeChoice {
        self.binding.get(self.store)
    }

    /// Persist a user selection
    pub fn select(&self, choice: ColorSchemeChoice) -> Result<()> {
        self.binding
            .set(self.store, &choice)
            .with_context(|| format!("Failed to save color scheme '{}'", choice))?;

        log::info!("Color scheme set to {}", choice);
        Ok(())
    }

    /// Register a callback for every change of the stored choice
    pub fn observe(&self, callback: impl Fn(ColorSchemeChoice) + 'static) -> ObserverId {
        self.binding.observe(self.store, callback)
    }

    pub fn unobserve(&self, id: ObserverId) -> bool {
        self.store.unobserve(id)
    }
}
