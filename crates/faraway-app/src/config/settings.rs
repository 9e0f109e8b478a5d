//! Loading and saving `.faraway/config.toml`

use std::path::{Path, PathBuf};

use faraway_core::prelude::*;

use super::types::Settings;

/// Directory holding project-local configuration
pub const FARAWAY_DIR: &str = ".faraway";

/// Settings file inside [`FARAWAY_DIR`]
pub const CONFIG_FILENAME: &str = "config.toml";

/// Full path of the settings file for a project
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(FARAWAY_DIR).join(CONFIG_FILENAME)
}

/// Resolve the project directory named on the command line
///
/// `None` means the current directory. Anything that is not an existing
/// directory is a [`Error::Config`].
pub fn resolve_project_path(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    if !path.is_dir() {
        return Err(Error::config(format!("{} is not a directory", path.display())));
    }
    Ok(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .faraway/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write settings to .faraway/config.toml, creating the directory if needed
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let dir = project_path.join(FARAWAY_DIR);
    std::fs::create_dir_all(&dir)?;

    let body = toml::to_string_pretty(settings)?;
    let content = format!("{}{}", generate_config_header(), body);
    std::fs::write(dir.join(CONFIG_FILENAME), content)
        .with_context(|| format!("writing settings to {}", dir.display()))?;

    debug!("Saved settings to {:?}", dir.join(CONFIG_FILENAME));
    Ok(())
}

/// Create .faraway/config.toml with default values
///
/// An existing file is left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let config_path = config_path(project_path);
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
        return Ok(());
    }
    save_settings(project_path, &Settings::default())?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

fn generate_config_header() -> String {
    "# Far Away configuration\n\
     #\n\
     # [packing]    items the packing list starts with (quantity 1-20)\n\
     # [steps]      one message per wizard step\n\
     # [faq]        panels for the multi-open FAQ\n\
     # [accordion]  identity = \"positional\" | \"declared\", plus its items\n\
     \n"
    .to_string()
}
