//! Configuration file parsing for Far Away
//!
//! Supports `.faraway/config.toml`, which seeds every state container.

pub mod settings;
pub mod types;

pub use settings::{
    config_path, init_config_dir, load_settings, resolve_project_path, save_settings,
    CONFIG_FILENAME, FARAWAY_DIR,
};
pub use types::*;
