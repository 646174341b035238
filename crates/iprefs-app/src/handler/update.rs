//! Main update function - handles state transitions (TEA pattern)

use crate::integrations;
use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, pane, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Shutdown(signal) => {
            tracing::debug!("Shutdown on {:?}", signal);
            state.phase = AppPhase::Quitting;
            // Follow-up messages still run before the loop sees Quitting
            pane::handle_edit_commit(state)
        }

        Message::PropsReceived(props) => {
            let transition = integrations::reconcile(&state.integrations, &props);
            state.props = props;
            // Rows may have appeared or vanished under an open editor
            state.view.browse();
            UpdateResult::notify(state.apply(transition))
        }

        // ─────────────────────────────────────────────────────────
        // Pane Operations
        // ─────────────────────────────────────────────────────────
        Message::SelectEditor(value) => {
            let transition = integrations::select_editor(&state.integrations, &value);
            UpdateResult::notify(state.apply(transition))
        }

        Message::SelectShell(raw) => {
            let transition = integrations::select_shell(&state.integrations, &raw);
            UpdateResult::notify(state.apply(transition))
        }

        Message::SetCustomEditors(editors) => {
            let transition = integrations::change_custom_editors(&state.integrations, editors);
            UpdateResult::notify(state.apply(transition))
        }

        Message::RenameCustomEditor { index, name } => {
            let transition = integrations::rename_custom_editor(&state.integrations, index, &name);
            UpdateResult::notify(state.apply(transition))
        }

        Message::SetCustomEditorPath { index, path } => {
            let transition =
                integrations::set_custom_editor_path(&state.integrations, index, &path);
            UpdateResult::notify(state.apply(transition))
        }

        Message::ToggleCustomEditorShell { index } => {
            let transition = integrations::toggle_custom_editor_shell(&state.integrations, index);
            UpdateResult::notify(state.apply(transition))
        }

        Message::AddCustomEditor => {
            let transition = integrations::add_custom_editor(&state.integrations);
            UpdateResult::notify(state.apply(transition))
        }

        Message::OpenSuggestedEditor => {
            UpdateResult::action(UpdateAction::OpenUrl(state.suggested_editor.url.clone()))
        }

        // ─────────────────────────────────────────────────────────
        // Focus & Input Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => pane::handle_focus_next(state),
        Message::FocusPrevious => pane::handle_focus_previous(state),
        Message::Activate => pane::handle_activate(state),
        Message::EditCharInput(c) => pane::handle_edit_char(state, c),
        Message::EditBackspace => pane::handle_edit_backspace(state),
        Message::EditClear => pane::handle_edit_clear(state),
        Message::EditCommit => pane::handle_edit_commit(state),
        Message::EditCancel | Message::ChoiceCancel => {
            state.view.browse();
            UpdateResult::none()
        }
        Message::ChoiceNext => pane::handle_choice_step(state, 1),
        Message::ChoicePrevious => pane::handle_choice_step(state, -1),
        Message::ChoiceCommit => pane::handle_choice_commit(state),

        Message::OwnerStatus(error) => {
            state.view.error = error;
            UpdateResult::none()
        }
    }
}
