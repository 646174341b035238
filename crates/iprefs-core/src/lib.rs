//! # iprefs-core - Core Domain Types
//!
//! Foundation crate for the integrations preferences pane. Provides domain
//! types, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Shell`] - Closed set of supported command shells, with lenient label parsing
//! - [`CustomEditor`] - User-defined external editor (name, path, uses-shell flag)
//! - [`SuggestedEditor`] - Editor recommended when none are installed
//! - [`Platform`] - Injected platform value used for label casing
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
//! use iprefs_core::prelude::*;
//! ```

pub mod editor;
pub mod error;
pub mod logging;
pub mod platform;
pub mod shell;

/// Prelude for common imports used throughout all iprefs crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use editor::{CustomEditor, SuggestedEditor, DEFAULT_CUSTOM_EDITOR_NAME, DEFAULT_CUSTOM_EDITOR_PATH};
pub use error::{Error, Result, ResultExt};
pub use platform::Platform;
pub use shell::Shell;
