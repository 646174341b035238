//! Configuration file handling
//!
//! A single `settings.toml` holds the pane's presentation settings, the
//! editor/shell inventory and the persisted integration choices.

pub mod settings;
pub mod types;
pub mod writer;

pub use settings::{
    default_settings_path, init_settings_file, load_settings, validate_suggested_editor,
};
pub use types::*;
pub use writer::save_settings;
