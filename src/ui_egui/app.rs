use anyhow::{Context, Result};
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use super::appearance::{apply_color_scheme, system_mode_for, visuals_needed};
use super::color_scheme_menu::ColorSchemeMenu;
use crate::config::AppConfig;
use crate::models::color_scheme::ColorSchemeChoice;
use crate::models::instant::{Instant, InstantStringCodec};
use crate::services::color_scheme::ColorSchemeService;
use crate::services::database::Database;
use crate::services::preferences::{instant_binding, PreferenceBinding, SqlitePreferenceStore};

/// Preference key of the timestamp recorded at every launch
pub const LAST_OPENED_KEY: &str = "LastOpened";

/// How often `Automatic` re-checks the system mode
const SYSTEM_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Demo window: a toolbar with the appearance menu and a panel showing the
/// stored preferences.
pub struct AppearanceApp {
    store: SqlitePreferenceStore<'static>,
    menu: ColorSchemeMenu,
    /// Set by the preference observer, consumed on the next frame
    pending: Rc<Cell<Option<ColorSchemeChoice>>>,
    visuals: VisualsSync,
    dark: bool,
    previous_launch: Instant,
}

impl AppearanceApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Result<Self> {
        let database = initialize_database(&config.resolve_database_path())?;
        let store = SqlitePreferenceStore::new(database);

        let last_opened = instant_binding(LAST_OPENED_KEY);
        let previous_launch = last_opened.get(&store);
        record_launch(&store, &last_opened);

        let pending = Rc::new(Cell::new(None));
        let service = ColorSchemeService::new(&store);
        let choice = service.current();
        let sink = Rc::clone(&pending);
        service.observe(move |choice| sink.set(Some(choice)));

        let dark = apply_color_scheme(&cc.egui_ctx, choice);
        log::info!("Starting with color scheme {}", choice);

        Ok(Self {
            store,
            menu: ColorSchemeMenu::with_placement(config.toolbar_placement),
            pending,
            visuals: VisualsSync::new(choice),
            dark,
            previous_launch,
        })
    }

    fn render_toolbar(&self, ctx: &egui::Context) {
        let service = ColorSchemeService::new(&self.store);
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.label("Preferences");
                if self
                    .menu
                    .show_with_choice(ui, &service, self.visuals.choice())
                    .is_some()
                {
                    ui.ctx().request_repaint();
                }
            });
        });
    }

    fn render_summary(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Appearance");
            ui.add_space(8.0);
            egui::Grid::new("summary").num_columns(2).show(ui, |ui| {
                ui.label("Color scheme:");
                ui.label(self.visuals.choice().label());
                ui.end_row();

                ui.label("Rendering:");
                ui.label(if self.dark { "Dark" } else { "Light" });
                ui.end_row();

                ui.label("Previous launch:");
                ui.label(describe_launch(self.previous_launch));
                ui.end_row();
            });
        });
    }
}

impl eframe::App for AppearanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dark = self.visuals.sync(ctx, self.pending.take());
        self.render_toolbar(ctx);
        self.render_summary(ctx);
    }
}

/// Keeps the context's visuals in line with the stored choice.
///
/// Anything else may change the visuals (eframe's own theme following, for
/// one); every frame puts them back. `Automatic` re-reads the system mode at
/// most once per [`SYSTEM_POLL_INTERVAL`].
struct VisualsSync {
    choice: ColorSchemeChoice,
    system: dark_light::Mode,
    last_system_check: std::time::Instant,
}

impl VisualsSync {
    fn new(choice: ColorSchemeChoice) -> Self {
        Self {
            choice,
            system: system_mode_for(choice),
            last_system_check: std::time::Instant::now(),
        }
    }

    fn choice(&self) -> ColorSchemeChoice {
        self.choice
    }

    /// Returns whether the context renders dark afterwards
    fn sync(&mut self, ctx: &egui::Context, changed: Option<ColorSchemeChoice>) -> bool {
        if let Some(choice) = changed {
            self.choice = choice;
            self.system = system_mode_for(choice);
            self.last_system_check = std::time::Instant::now();
        }

        if self.choice == ColorSchemeChoice::Automatic {
            if self.last_system_check.elapsed() >= SYSTEM_POLL_INTERVAL {
                self.system = dark_light::detect();
                self.last_system_check = std::time::Instant::now();
            }
            ctx.request_repaint_after(SYSTEM_POLL_INTERVAL);
        }

        let applied_dark = ctx.style().visuals.dark_mode;
        match visuals_needed(self.choice, self.system, applied_dark) {
            Some(dark) => {
                ctx.set_visuals(if dark {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                });
                log::debug!("Re-applied color scheme {}", self.choice);
                dark
            }
            None => applied_dark,
        }
    }
}

fn initialize_database(path: &Path) -> Result<&'static Database> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    let db_path = path.to_string_lossy();
    let db = Database::new(&db_path)?;
    db.initialize_schema()?;
    log::info!("Using preference database at {}", db_path);

    // Leaked for the 'static lifetime the store needs inside the eframe app
    Ok(Box::leak(Box::new(db)))
}

fn record_launch(store: &SqlitePreferenceStore<'_>, binding: &PreferenceBinding<InstantStringCodec>) {
    if let Err(e) = binding.set(store, &Instant::now()) {
        log::warn!("Failed to record launch time: {}", e);
    }
}

/// Human-readable form of a stored launch time
pub fn describe_launch(instant: Instant) -> String {
    if instant == Instant::REFERENCE {
        return "never".to_string();
    }

    match instant.to_datetime() {
        Some(datetime) => datetime
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => format!("{} s after 2001-01-01", instant),
    }
}
