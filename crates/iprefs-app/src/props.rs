//! Props handed to the pane by its owner

use iprefs_core::{CustomEditor, Shell};
use serde::Serialize;

/// Everything the pane receives from outside.
///
/// Available lists come from discovery collaborators, selections and custom
/// editors from persisted settings. The pane never mutates props; it keeps a
/// working copy in [`crate::integrations::IntegrationsState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrationsProps {
    pub available_editors: Vec<String>,
    pub selected_external_editor: Option<String>,
    pub external_custom_editors: Vec<CustomEditor>,
    pub available_shells: Vec<Shell>,
    pub selected_shell: Shell,
}

impl IntegrationsProps {
    pub fn has_editors(&self) -> bool {
        !self.available_editors.is_empty()
    }
}
