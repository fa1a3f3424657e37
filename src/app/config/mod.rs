//! Configuration loading and runtime settings.

mod load_config;
mod settings;

pub use load_config::{load_config, resolve_config_path};
pub use settings::Settings;
