// Appearance Preferences demo
// Main entry point

use appearance_prefs::config::AppConfig;
use appearance_prefs::ui_egui::AppearanceApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Appearance Preferences");

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Appearance Preferences")
            .with_inner_size([480.0, 320.0])
            .with_min_inner_size([320.0, 200.0]),
        // The app applies the stored color scheme itself, including following
        // the system while it is `Automatic`.
        follow_system_theme: false,
        ..Default::default()
    };

    eframe::run_native(
        "Appearance Preferences",
        options,
        Box::new(move |cc| Ok(Box::new(AppearanceApp::new(cc, &config)?))),
    )
}
