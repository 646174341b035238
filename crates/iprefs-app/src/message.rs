//! Message types for the application (TEA pattern)

use iprefs_core::CustomEditor;

use crate::input_key::InputKey;
use crate::props::IntegrationsProps;
use crate::signals::ShutdownSignal;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Leave the pane
    Quit,

    /// OS asked us to stop; a pending cell edit is kept, not discarded
    Shutdown(ShutdownSignal),

    /// Owner handed down new props
    PropsReceived(IntegrationsProps),

    // ─────────────────────────────────────────────────────────
    // Pane Operations
    // ─────────────────────────────────────────────────────────
    /// Pick an external editor by name
    SelectEditor(String),
    /// Pick a shell by its raw label
    SelectShell(String),
    /// Replace the whole custom editor list
    SetCustomEditors(Vec<CustomEditor>),
    RenameCustomEditor { index: usize, name: String },
    SetCustomEditorPath { index: usize, path: String },
    ToggleCustomEditorShell { index: usize },
    AddCustomEditor,
    /// Follow the "Install <editor>?" link
    OpenSuggestedEditor,

    // ─────────────────────────────────────────────────────────
    // Focus & Input Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    /// Enter/Space on the focused control
    Activate,
    EditCharInput(char),
    EditBackspace,
    EditClear,
    EditCommit,
    EditCancel,
    ChoiceNext,
    ChoicePrevious,
    ChoiceCommit,
    ChoiceCancel,

    /// Outcome of the owner's last save, `Some` carrying the failure
    OwnerStatus(Option<String>),
}
