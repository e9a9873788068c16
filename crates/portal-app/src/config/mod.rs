//! Configuration file parsing for the portal
//!
//! Settings live in `<config_dir>/portal/config.toml` unless a path is given
//! on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings, parse_settings};
pub use types::*;
