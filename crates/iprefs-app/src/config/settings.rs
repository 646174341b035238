//! Settings loader for settings.toml

use super::types::Settings;
use iprefs_core::prelude::*;
use iprefs_core::SuggestedEditor;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "integrations-prefs";
const SETTINGS_FILENAME: &str = "settings.toml";

/// Default location of the settings file
///
/// `~/.config/integrations-prefs/settings.toml` on Linux, the platform
/// equivalent elsewhere.
pub fn default_settings_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| Error::config("Could not determine the user config directory"))?;
    Ok(base.join(APP_DIR).join(SETTINGS_FILENAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No settings file at {:?}, using defaults", path);
        return Settings::default();
    }

    let mut settings: Settings = match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                return Settings::default();
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            return Settings::default();
        }
    };

    if let Err(e) = validate_suggested_editor(&settings.pane.suggested_editor) {
        warn!("{}, using the default suggestion", e);
        settings.pane.suggested_editor = SuggestedEditor::default();
    }

    settings
}

/// Check that the suggested editor has a name and an http(s) install URL
pub fn validate_suggested_editor(suggestion: &SuggestedEditor) -> Result<()> {
    if suggestion.name.trim().is_empty() {
        return Err(Error::config_invalid("suggested editor has no name"));
    }

    let url = url::Url::parse(&suggestion.url).map_err(|e| {
        Error::config_invalid(format!(
            "suggested editor URL {:?} is invalid: {}",
            suggestion.url, e
        ))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::config_invalid(format!(
            "suggested editor URL must be http(s), got {:?}",
            scheme
        ))),
    }
}

/// Write a commented default settings file if none exists
///
/// Returns `true` when a file was created.
pub fn init_settings_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, generate_default_settings())
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;

    info!("Created default settings at {:?}", path);
    Ok(true)
}

fn generate_default_settings() -> String {
    let suggestion = SuggestedEditor::default();
    format!(
        r#"# Integrations Preferences
# Generated on first run; edit freely or use the pane.

[pane]
# Label style: "mac" for title case, "other" for sentence case.
# Detected from the host when left out.
# platform = "mac"

[pane.suggested_editor]
# Offered when no editors are available
name = "{name}"
url = "{url}"

[inventory]
# Installed editors and shells, as reported by discovery
available_editors = []
available_shells = []

[integrations]
# selected_external_editor = "{name}"
# selected_shell = "Terminal"

# [[integrations.external_custom_editors]]
# editor_name = "Helix"
# path = "/usr/local/bin/hx"
# uses_shell = true
"#,
        name = suggestion.name,
        url = suggestion.url,
    )
}
