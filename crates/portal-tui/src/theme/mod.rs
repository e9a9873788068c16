//! Centralized theme for the portal TUI.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions
//! - `icons`: Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
