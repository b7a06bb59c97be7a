// Appearance Preferences Library
// Storable timestamps and a tri-state color scheme preference for egui apps

pub mod config;
pub mod models;
pub mod services;
pub mod ui_egui;
