//! Headless mode: reconcile once and report as JSON

use serde::Serialize;

use iprefs_core::prelude::*;
use iprefs_core::{CustomEditor, Platform, Shell};

use crate::message::Message;
use crate::owner::PreferencesStore;
use crate::process::process_message;
use crate::props::IntegrationsProps;
use crate::state::AppState;

/// Selections after reconciliation, as printed by `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub platform: Platform,
    pub selected_external_editor: Option<String>,
    pub selected_shell: Shell,
    pub external_custom_editors: Vec<CustomEditor>,
    /// What the owner offered, for reference
    pub available: IntegrationsProps,
}

impl Snapshot {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            platform: state.platform,
            selected_external_editor: state.integrations.selected_external_editor.clone(),
            selected_shell: state.integrations.selected_shell,
            external_custom_editors: state.integrations.external_custom_editors.clone(),
            available: state.props.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run one reconciliation against `store`, persisting any correction
pub fn run(store: &mut PreferencesStore, platform: Platform) -> Snapshot {
    let props = store.props();
    let mut state = AppState::new(props.clone(), platform, store.suggested_editor());

    process_message(&mut state, Message::PropsReceived(props), store);

    if let Some(e) = store.last_error() {
        warn!("Headless run could not save: {}", e);
    }

    Snapshot::from_state(&state)
}
