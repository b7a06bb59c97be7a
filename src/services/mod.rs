// Service module exports

pub mod color_scheme;
pub mod database;
pub mod preferences;
