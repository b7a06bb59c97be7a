// Module exports for models

pub mod codec;
pub mod color_scheme;
pub mod instant;
pub mod preference;
