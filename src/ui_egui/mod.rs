mod app;
pub mod appearance;
pub mod color_scheme_menu;

pub use app::{describe_launch, AppearanceApp, LAST_OPENED_KEY};
pub use color_scheme_menu::{ColorSchemeMenu, MenuPlacement};
