// Color scheme module
// Tri-state appearance choice: follow the system, or force light/dark

use serde::{Deserialize, Serialize};
use std::fmt;

use super::codec::Codec;

/// Preference key under which the user's choice is persisted
pub const COLOR_SCHEME_KEY: &str = "ColorSchemeAutomatic";

/// The user's appearance choice.
///
/// The discriminants are the persisted ordinals. They must never change,
/// or previously stored choices will be read back as a different scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ColorSchemeChoice {
    /// Leave the rendering mode to the system
    #[default]
    Automatic = 0,
    Light = 1,
    Dark = 2,
}

/// An explicit rendering mode applied by a consuming view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForcedMode {
    Light,
    Dark,
}

impl ColorSchemeChoice {
    /// All choices in ordinal order
    pub const ALL: [ColorSchemeChoice; 3] = [
        ColorSchemeChoice::Automatic,
        ColorSchemeChoice::Light,
        ColorSchemeChoice::Dark,
    ];

    /// Order in which the selector lists the choices
    pub const MENU_ORDER: [ColorSchemeChoice; 3] = [
        ColorSchemeChoice::Light,
        ColorSchemeChoice::Dark,
        ColorSchemeChoice::Automatic,
    ];

    pub fn ordinal(self) -> i64 {
        self as i64
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(ColorSchemeChoice::Automatic),
            1 => Some(ColorSchemeChoice::Light),
            2 => Some(ColorSchemeChoice::Dark),
            _ => None,
        }
    }

    /// Like [`ColorSchemeChoice::from_ordinal`], but an unknown ordinal
    /// (for example one written by a newer version) reads as `Automatic`.
    pub fn from_ordinal_or_default(ordinal: i64) -> Self {
        Self::from_ordinal(ordinal).unwrap_or_else(|| {
            log::warn!(
                "Unknown color scheme ordinal {}, using {}",
                ordinal,
                ColorSchemeChoice::default()
            );
            ColorSchemeChoice::default()
        })
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            ColorSchemeChoice::Automatic => "Automatic",
            ColorSchemeChoice::Light => "Light",
            ColorSchemeChoice::Dark => "Dark",
        }
    }

    /// The mode to force, or `None` to let the system decide
    pub fn preferred_mode(self) -> Option<ForcedMode> {
        match self {
            ColorSchemeChoice::Automatic => None,
            ColorSchemeChoice::Light => Some(ForcedMode::Light),
            ColorSchemeChoice::Dark => Some(ForcedMode::Dark),
        }
    }
}

impl fmt::Display for ColorSchemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stores a [`ColorSchemeChoice`] as its ordinal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSchemeOrdinalCodec;

impl Codec for ColorSchemeOrdinalCodec {
    type Value = ColorSchemeChoice;
    type Primitive = i64;

    fn encode(&self, value: &ColorSchemeChoice) -> i64 {
        value.ordinal()
    }

    fn decode(&self, raw: i64) -> ColorSchemeChoice {
        ColorSchemeChoice::from_ordinal_or_default(raw)
    }
}
