//! Settings writer for settings.toml
//!
//! Writes the whole settings file back under an exclusive lock so two pane
//! instances cannot interleave their output.

use super::types::Settings;
use fs2::FileExt;
use iprefs_core::prelude::*;
use std::io::Write;
use std::path::Path;

/// Save settings to `path`
///
/// Regenerates the file with a header comment; comments from a hand-edited
/// file are not preserved.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let content = build_settings_toml(settings)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| Error::config(format!("Failed to open {:?}: {}", path, e)))?;

    // Blocks while another process holds the lock
    file.lock_exclusive()
        .map_err(|e| Error::config(format!("Failed to lock {:?}: {}", path, e)))?;

    // Truncate only once the lock is held
    file.set_len(0)
        .map_err(|e| Error::config(format!("Failed to truncate {:?}: {}", path, e)))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush {:?}: {}", path, e)))?;

    // Lock is released when file is dropped
    debug!("Saved settings to {:?}", path);
    Ok(())
}

/// Build TOML content with header
fn build_settings_toml(settings: &Settings) -> Result<String> {
    let body = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    Ok(format!("{}{}", generate_header(), body))
}

fn generate_header() -> &'static str {
    "# Integrations Preferences\n\
     # Generated by the integrations pane\n\n"
}
