//! Owner callbacks
//!
//! Transitions never call the owner directly. They return [`Notification`]
//! values alongside the new state, and the host delivers them with
//! [`Notification::deliver`] in the same turn.

use iprefs_core::{CustomEditor, Shell};

/// Receiver of pane changes, typically whatever persists application settings
#[cfg_attr(test, mockall::automock)]
pub trait IntegrationsOwner {
    fn on_selected_editor_changed(&mut self, editor: &str);

    fn on_selected_shell_changed(&mut self, shell: Shell);

    fn on_external_custom_editors_changed(&mut self, editors: &[CustomEditor]);
}

/// A single change to report to the owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    SelectedEditorChanged(String),
    SelectedShellChanged(Shell),
    ExternalCustomEditorsChanged(Vec<CustomEditor>),
}

impl Notification {
    /// Invoke the matching owner callback
    pub fn deliver(&self, owner: &mut dyn IntegrationsOwner) {
        match self {
            Notification::SelectedEditorChanged(editor) => {
                owner.on_selected_editor_changed(editor)
            }
            Notification::SelectedShellChanged(shell) => owner.on_selected_shell_changed(*shell),
            Notification::ExternalCustomEditorsChanged(editors) => {
                owner.on_external_custom_editors_changed(editors)
            }
        }
    }
}

/// Deliver notifications in order
pub fn deliver_all(notifications: &[Notification], owner: &mut dyn IntegrationsOwner) {
    for notification in notifications {
        tracing::debug!("Delivering {:?}", notification);
        notification.deliver(owner);
    }
}
