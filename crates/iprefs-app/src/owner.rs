//! Settings-backed owner of the pane
//!
//! [`PreferencesStore`] plays the part of the application settings: it
//! produces the pane's props and persists every callback to `settings.toml`.

use std::path::{Path, PathBuf};

use iprefs_core::prelude::*;
use iprefs_core::{CustomEditor, Platform, Shell, SuggestedEditor};

use crate::config::{load_settings, save_settings, Settings};
use crate::inventory::IntegrationsInventory;
use crate::notification::IntegrationsOwner;
use crate::props::IntegrationsProps;

/// Owner that keeps the selections in a settings file
#[derive(Debug)]
pub struct PreferencesStore {
    path: PathBuf,
    settings: Settings,

    /// Set by every callback, cleared by [`Self::take_changed`]
    changed: bool,

    /// Failure from the most recent save, if it failed
    last_error: Option<String>,
}

impl PreferencesStore {
    /// Load the store from `path`, falling back to defaults
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = load_settings(&path);
        Self::new(path, settings)
    }

    pub fn new(path: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            path: path.into(),
            settings,
            changed: false,
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Props for the pane: inventory lists plus the persisted choices
    pub fn props(&self) -> IntegrationsProps {
        let integrations = &self.settings.integrations;
        IntegrationsProps {
            available_editors: self.settings.inventory.available_editors(),
            selected_external_editor: integrations.selected_external_editor.clone(),
            external_custom_editors: integrations.external_custom_editors.clone(),
            available_shells: self.settings.inventory.available_shells(),
            selected_shell: integrations.selected_shell,
        }
    }

    /// Configured platform, or the host's when the file doesn't say
    pub fn platform(&self) -> Platform {
        self.settings.pane.platform.unwrap_or_else(Platform::detect)
    }

    pub fn suggested_editor(&self) -> SuggestedEditor {
        self.settings.pane.suggested_editor.clone()
    }

    /// Whether any callback arrived since the last call
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn persist(&mut self) {
        self.changed = true;
        let path = &self.path;
        let saved = save_settings(path, &self.settings)
            .with_context(|| format!("Failed to save settings to {}", path.display()));
        self.last_error = saved.err().map(|e| e.to_string());
    }
}

impl IntegrationsOwner for PreferencesStore {
    fn on_selected_editor_changed(&mut self, editor: &str) {
        info!("External editor set to {:?}", editor);
        self.settings.integrations.selected_external_editor = Some(editor.to_string());
        self.persist();
    }

    fn on_selected_shell_changed(&mut self, shell: Shell) {
        info!("Shell set to {}", shell);
        self.settings.integrations.selected_shell = shell;
        self.persist();
    }

    fn on_external_custom_editors_changed(&mut self, editors: &[CustomEditor]) {
        info!("Custom editors updated ({} entries)", editors.len());
        self.settings.integrations.external_custom_editors = editors.to_vec();
        self.persist();
    }
}
