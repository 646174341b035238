//! External editor types

use serde::{Deserialize, Serialize};

/// Name given to a freshly added custom editor row
pub const DEFAULT_CUSTOM_EDITOR_NAME: &str = "An editor";

/// Path given to a freshly added custom editor row
pub const DEFAULT_CUSTOM_EDITOR_PATH: &str = "/path/to/editor/bin";

/// A user-defined external editor that was not auto-detected.
///
/// `uses_shell` is tri-state on purpose: the "off" state is `None`, so it is
/// left out of the serialized form entirely rather than written as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEditor {
    /// Free-form display name
    pub editor_name: String,

    /// Free-form path to the editor executable
    pub path: String,

    /// Launch the editor through the selected shell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_shell: Option<bool>,
}

impl CustomEditor {
    pub fn new(editor_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            editor_name: editor_name.into(),
            path: path.into(),
            uses_shell: None,
        }
    }

    /// The row appended by the Add action
    pub fn placeholder() -> Self {
        Self::new(DEFAULT_CUSTOM_EDITOR_NAME, DEFAULT_CUSTOM_EDITOR_PATH)
    }

    /// Whether the entry survives list filtering
    pub fn has_name(&self) -> bool {
        !self.editor_name.trim().is_empty()
    }

    pub fn uses_shell(&self) -> bool {
        self.uses_shell.unwrap_or(false)
    }

    /// Copy of this entry with a new name
    pub fn with_name(&self, editor_name: impl Into<String>) -> Self {
        Self {
            editor_name: editor_name.into(),
            ..self.clone()
        }
    }

    /// Copy of this entry with a new path
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    /// Copy of this entry with the uses-shell flag flipped.
    ///
    /// Off is `None`, never `Some(false)`.
    pub fn with_uses_shell_toggled(&self) -> Self {
        Self {
            uses_shell: if self.uses_shell() { None } else { Some(true) },
            ..self.clone()
        }
    }
}

/// Editor recommended to the user when no editors are available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedEditor {
    pub name: String,
    pub url: String,
}

impl Default for SuggestedEditor {
    fn default() -> Self {
        Self {
            name: "Visual Studio Code".to_string(),
            url: "https://code.visualstudio.com".to_string(),
        }
    }
}
