//! Configuration types for the settings file

use iprefs_core::{CustomEditor, Platform, Shell, SuggestedEditor};
use serde::{Deserialize, Serialize};

/// Complete contents of `settings.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub pane: PaneSettings,

    #[serde(default)]
    pub inventory: InventorySettings,

    #[serde(default)]
    pub integrations: IntegrationsSettings,
}

/// Presentation settings for the pane itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneSettings {
    /// Label flavour; detected from the host when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Editor offered when nothing is installed
    #[serde(default)]
    pub suggested_editor: SuggestedEditor,
}

/// Editors and shells known to be installed.
///
/// Stands in for the discovery subsystems; shells are kept as raw labels so a
/// single unknown entry does not invalidate the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySettings {
    #[serde(default)]
    pub available_editors: Vec<String>,

    #[serde(default)]
    pub available_shells: Vec<String>,
}

/// The persisted choices the pane edits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_external_editor: Option<String>,

    #[serde(default)]
    pub selected_shell: Shell,

    #[serde(default)]
    pub external_custom_editors: Vec<CustomEditor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.integrations.selected_shell, Shell::default());
        assert_eq!(settings.pane.suggested_editor, SuggestedEditor::default());
    }

    #[test]
    fn test_parse_full_file() {
        let content = r#"
[pane]
platform = "mac"

[pane.suggested_editor]
name = "Zed"
url = "https://zed.dev"

[inventory]
available_editors = ["Visual Studio Code", "Zed"]
available_shells = ["Terminal", "iTerm2"]

[integrations]
selected_external_editor = "Zed"
selected_shell = "iTerm2"

[[integrations.external_custom_editors]]
editor_name = "Helix"
path = "/usr/local/bin/hx"
uses_shell = true

[[integrations.external_custom_editors]]
editor_name = "Kakoune"
path = "/usr/local/bin/kak"
"#;
        let settings: Settings = toml::from_str(content).unwrap();

        assert_eq!(settings.pane.platform, Some(Platform::Mac));
        assert_eq!(settings.pane.suggested_editor.name, "Zed");
        assert_eq!(settings.inventory.available_editors.len(), 2);
        assert_eq!(
            settings.integrations.selected_external_editor.as_deref(),
            Some("Zed")
        );
        assert_eq!(settings.integrations.selected_shell, Shell::ITerm2);
        assert_eq!(
            settings.integrations.external_custom_editors[0].uses_shell,
            Some(true)
        );
        assert_eq!(
            settings.integrations.external_custom_editors[1].uses_shell,
            None
        );
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let mut settings = Settings::default();
        settings
            .integrations
            .external_custom_editors
            .push(CustomEditor::new("Helix", "/usr/bin/hx"));

        let content = toml::to_string_pretty(&settings).unwrap();

        assert!(!content.contains("uses_shell"));
        assert!(!content.contains("selected_external_editor"));
        assert!(!content.contains("platform"));
        assert!(content.contains("editor_name = \"Helix\""));
    }

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.pane.platform = Some(Platform::Other);
        settings.inventory.available_shells = vec!["Konsole".into()];
        settings.integrations.selected_external_editor = Some("Vim".into());
        settings.integrations.selected_shell = Shell::Konsole;
        settings.integrations.external_custom_editors = vec![
            CustomEditor::new("Helix", "/usr/bin/hx").with_uses_shell_toggled(),
            CustomEditor::new("Nano", "/bin/nano"),
        ];

        let content = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&content).unwrap();

        assert_eq!(parsed, settings);
    }
}
