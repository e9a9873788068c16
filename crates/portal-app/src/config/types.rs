//! Configuration types

use portal_core::{Section, DEFAULT_RECENT_LIMIT};
use serde::{Deserialize, Serialize};

/// Settings loaded from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub links: LinkSettings,
}

/// Startup behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Section shown on startup
    #[serde(default)]
    pub initial_section: Section,
}

/// Icon rendering mode for the TUI.
///
/// Nerd Font glyphs need a patched font in the terminal; plain Unicode
/// symbols work everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Entries in the admin "Atividade Recente" list
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,

    /// Show the image URL line on cards and in the detail view
    #[serde(default = "default_true")]
    pub show_images: bool,

    /// Ticks (50ms each) a status notice stays visible
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            recent_activity_limit: default_recent_activity_limit(),
            show_images: true,
            notice_ticks: default_notice_ticks(),
        }
    }
}

fn default_recent_activity_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_notice_ticks() -> u16 {
    60
}

fn default_true() -> bool {
    true
}

/// Document link settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkSettings {
    /// Browser command; empty uses the platform opener
    #[serde(default)]
    pub browser: String,
}
