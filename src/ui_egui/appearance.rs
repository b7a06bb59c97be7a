//! Applying a [`ColorSchemeChoice`] to an egui context.
//!
//! `Light` and `Dark` force the matching [`egui::Visuals`]. `Automatic`
//! follows the operating system's mode as reported by `dark-light`; when the
//! system reports no preference the light visuals are used.

use egui::{Context, Visuals};

use crate::models::color_scheme::{ColorSchemeChoice, ForcedMode};

/// Whether `choice` renders dark given the system's current mode
pub fn resolve_dark(choice: ColorSchemeChoice, system: dark_light::Mode) -> bool {
    match choice.preferred_mode() {
        Some(ForcedMode::Dark) => true,
        Some(ForcedMode::Light) => false,
        None => matches!(system, dark_light::Mode::Dark),
    }
}

pub fn visuals_for(choice: ColorSchemeChoice, system: dark_light::Mode) -> Visuals {
    if resolve_dark(choice, system) {
        Visuals::dark()
    } else {
        Visuals::light()
    }
}

/// The system mode, queried only when `choice` defers to it
pub fn system_mode_for(choice: ColorSchemeChoice) -> dark_light::Mode {
    match choice {
        ColorSchemeChoice::Automatic => dark_light::detect(),
        _ => dark_light::Mode::Default,
    }
}

/// The dark flag to switch to, or `None` when the applied visuals already
/// match `choice` under the given system mode.
pub fn visuals_needed(
    choice: ColorSchemeChoice,
    system: dark_light::Mode,
    applied_dark: bool,
) -> Option<bool> {
    let dark = resolve_dark(choice, system);
    (dark != applied_dark).then_some(dark)
}

/// Apply the choice to the egui context, detecting the system mode if needed.
/// Returns whether dark visuals were applied.
pub fn apply_color_scheme(ctx: &Context, choice: ColorSchemeChoice) -> bool {
    let visuals = visuals_for(choice, system_mode_for(choice));
    let dark = visuals.dark_mode;
    ctx.set_visuals(visuals);

    log::debug!(
        "Applied color scheme {} ({})",
        choice,
        if dark { "dark" } else { "light" }
    );
    dark
}
