//! Content Portal
//!
//! A terminal portal for announcements, news and documents. The binary
//! wires CLI options into an [`portal_app::AppState`] and hands it to the
//! TUI or to headless mode.

pub mod headless;
pub mod startup;

pub use headless::run_headless;
pub use startup::{initial_state, StartupOptions};
