use egui::{Align, Layout, Ui};
use serde::{Deserialize, Serialize};

use crate::models::color_scheme::ColorSchemeChoice;
use crate::services::color_scheme::ColorSchemeService;

/// Half-filled circle shown on the toolbar button
const MENU_ICON: &str = "◑";

/// Where the menu button sits inside its containing toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPlacement {
    /// Wherever the containing layout puts the next widget
    #[default]
    Automatic,
    Leading,
    Trailing,
}

/// Toolbar menu for switching between light, dark and automatic appearance.
///
/// The menu holds no state of its own; it reads and writes the choice
/// through [`ColorSchemeService`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSchemeMenu {
    placement: MenuPlacement,
}

impl ColorSchemeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(placement: MenuPlacement) -> Self {
        Self { placement }
    }

    pub fn placement(&self) -> MenuPlacement {
        self.placement
    }

    /// Render the menu button. Returns the choice the user picked this frame,
    /// after it has been saved.
    pub fn show(&self, ui: &mut Ui, service: &ColorSchemeService<'_>) -> Option<ColorSchemeChoice> {
        self.show_with_choice(ui, service, service.current())
    }

    /// Like [`ColorSchemeMenu::show`], for callers that already track the
    /// current choice (for example through an observer).
    pub fn show_with_choice(
        &self,
        ui: &mut Ui,
        service: &ColorSchemeService<'_>,
        current: ColorSchemeChoice,
    ) -> Option<ColorSchemeChoice> {
        let picked = match self.placement {
            MenuPlacement::Automatic => render_menu(ui, current),
            MenuPlacement::Leading => {
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    render_menu(ui, current)
                })
                .inner
            }
            MenuPlacement::Trailing => {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    render_menu(ui, current)
                })
                .inner
            }
        };

        commit_pick(service, picked?)
    }
}

fn render_menu(ui: &mut Ui, current: ColorSchemeChoice) -> Option<ColorSchemeChoice> {
    let mut picked = None;

    ui.menu_button(MENU_ICON, |ui| {
        ui.label("Appearance");
        ui.separator();
        for choice in ColorSchemeChoice::MENU_ORDER {
            if ui.radio(current == choice, choice.label()).clicked() {
                picked = Some(choice);
                ui.close_menu();
            }
        }
    });

    picked
}

/// Save a picked choice; a failed write is logged and reported as no pick
fn commit_pick(service: &ColorSchemeService<'_>, choice: ColorSchemeChoice) -> Option<ColorSchemeChoice> {
    match service.select(choice) {
        Ok(()) => Some(choice),
        Err(e) => {
            log::warn!("{:#}", e);
            None
        }
    }
}
