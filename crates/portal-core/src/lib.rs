//! # portal-core - Core Domain Types
//!
//! Foundation crate for the content portal. Provides the record model, the
//! read-only content store, search matching, date parsing, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`record`, `section`)
//! - [`Record`] - A single displayable content item
//! - [`RecordRef`] - Unambiguous `(Category, id)` reference to a record
//! - [`Category`] - One of the three record collections
//! - [`Section`] - One of the four navigation destinations (three categories + admin)
//!
//! ### Content (`content`)
//! - [`ContentStore`] - The fixed, read-only collections shown by the portal
//!
//! ### Search (`search`)
//! - [`matches()`] - Case-insensitive title/description substring match
//! - [`filter()`] - Apply a query to a collection, keeping definition order
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use portal_core::prelude::*;
//! ```

pub mod content;
pub mod date;
pub mod error;
pub mod logging;
pub mod record;
pub mod search;
pub mod section;

/// Prelude for common imports used throughout all portal crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{ContentStore, DEFAULT_RECENT_LIMIT};
pub use date::{compare_desc, parse_display_date, DISPLAY_DATE_FORMAT};
pub use error::{Error, Result, ResultExt};
pub use record::{Record, RecordId, RecordRef};
pub use search::{filter, matches};
pub use section::{Category, Section};
