//! portal-app - Application state and orchestration for the content portal
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a `Message` is applied to the `AppState` by `update()`, which
//! delegates navigation transitions to the pure `navigation::reduce` function.
//! `screen::select` turns the state into the `Screen` a frontend displays.

pub mod actions;
pub mod config;
pub mod detail_scroll;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod process;
pub mod screen;
pub mod state;

// Re-export primary types
pub use detail_scroll::DetailScroll;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{reduce, NavEvent, Navigation};
pub use screen::{Affordance, Screen};
pub use state::{AppState, UiMode};
