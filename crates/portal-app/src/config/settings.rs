//! Settings file loading and initialization

use std::path::{Path, PathBuf};

use portal_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "portal";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# Portal Configuration

[behavior]
initial_section = "comunicados"   # comunicados | noticias | documentos | admin

[ui]
icons = "unicode"                 # or "nerd_fonts"
recent_activity_limit = 5         # entries in "Atividade Recente"
show_images = true                # show image URLs on cards and news
notice_ticks = 60                 # ticks (50ms) a status notice stays visible

[links]
browser = ""                      # Empty = system default
"#;

/// Default settings path: `<config_dir>/portal/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file gives the defaults. A file that cannot be read or parsed
/// is logged and also gives the defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
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

/// Parse settings strictly, reporting why a file is invalid.
pub fn parse_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {:?}", config_path))?;
    toml::from_str(&content).map_err(|e| Error::config_invalid(config_path, e.to_string()))
}

/// Write a commented default config file.
///
/// An existing file is left untouched. Returns whether a file was written.
pub fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}
