//! Focus, text editing and dropdown handlers
//!
//! These only move the pane's view state around. Anything that changes the
//! selections is turned into a pane operation message and goes through the
//! transitions in [`crate::integrations`].

use crate::message::Message;
use crate::state::{AppState, CustomEditorField, FocusTarget, InputMode};

use super::UpdateResult;

/// Handle focus next message
pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    let count = state.focus_targets().len();
    state.view.focus_next(count);
    UpdateResult::none()
}

/// Handle focus previous message
pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    let count = state.focus_targets().len();
    state.view.focus_previous(count);
    UpdateResult::none()
}

/// Handle Enter/Space on the focused control
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let Some(target) = state.focused_target() else {
        return UpdateResult::none();
    };

    match target {
        FocusTarget::EditorSelect | FocusTarget::ShellSelect => {
            if state.choice_options(target).is_empty() {
                return UpdateResult::none();
            }
            let highlighted = state.selected_choice(target).unwrap_or(0);
            state.view.start_choosing(highlighted);
            UpdateResult::none()
        }
        FocusTarget::InstallSuggestion => UpdateResult::message(Message::OpenSuggestedEditor),
        FocusTarget::CustomEditor { row, field } => {
            let Some(editor) = state.integrations.external_custom_editors.get(row) else {
                return UpdateResult::none();
            };
            match field {
                CustomEditorField::Name => {
                    let name = editor.editor_name.clone();
                    state.view.start_editing(&name);
                    UpdateResult::none()
                }
                CustomEditorField::Path => {
                    let path = editor.path.clone();
                    state.view.start_editing(&path);
                    UpdateResult::none()
                }
                CustomEditorField::Terminal => {
                    UpdateResult::message(Message::ToggleCustomEditorShell { index: row })
                }
            }
        }
        FocusTarget::AddCustomEditor => UpdateResult::message(Message::AddCustomEditor),
    }
}

/// Handle character input while editing
pub fn handle_edit_char(state: &mut AppState, c: char) -> UpdateResult {
    if let InputMode::Editing { buffer } = &mut state.view.mode {
        buffer.push(c);
    }
    UpdateResult::none()
}

/// Handle backspace while editing
pub fn handle_edit_backspace(state: &mut AppState) -> UpdateResult {
    if let InputMode::Editing { buffer } = &mut state.view.mode {
        buffer.pop();
    }
    UpdateResult::none()
}

/// Handle clearing the whole edit buffer
pub fn handle_edit_clear(state: &mut AppState) -> UpdateResult {
    if let InputMode::Editing { buffer } = &mut state.view.mode {
        buffer.clear();
    }
    UpdateResult::none()
}

/// Handle committing the edit buffer into the focused cell
pub fn handle_edit_commit(state: &mut AppState) -> UpdateResult {
    let InputMode::Editing { buffer } = std::mem::take(&mut state.view.mode) else {
        return UpdateResult::none();
    };

    match state.focused_target() {
        Some(FocusTarget::CustomEditor {
            row,
            field: CustomEditorField::Name,
        }) => UpdateResult::message(Message::RenameCustomEditor {
            index: row,
            name: buffer,
        }),
        Some(FocusTarget::CustomEditor {
            row,
            field: CustomEditorField::Path,
        }) => UpdateResult::message(Message::SetCustomEditorPath {
            index: row,
            path: buffer,
        }),
        other => {
            tracing::warn!("Edit committed on non-text target {:?}", other);
            UpdateResult::none()
        }
    }
}

/// Handle moving the dropdown highlight by `delta`, wrapping
pub fn handle_choice_step(state: &mut AppState, delta: isize) -> UpdateResult {
    let Some(target) = state.focused_target() else {
        return UpdateResult::none();
    };
    let count = state.choice_options(target).len();

    if let InputMode::Choosing { highlighted } = &mut state.view.mode {
        if count > 0 {
            let next = (*highlighted as isize + delta).rem_euclid(count as isize);
            *highlighted = next as usize;
        }
    }
    UpdateResult::none()
}

/// Handle committing the highlighted dropdown option
pub fn handle_choice_commit(state: &mut AppState) -> UpdateResult {
    let Some(highlighted) = state.view.highlighted() else {
        return UpdateResult::none();
    };
    state.view.browse();

    let Some(target) = state.focused_target() else {
        return UpdateResult::none();
    };
    let Some(value) = state.choice_options(target).into_iter().nth(highlighted) else {
        return UpdateResult::none();
    };

    match target {
        FocusTarget::EditorSelect => UpdateResult::message(Message::SelectEditor(value)),
        FocusTarget::ShellSelect => UpdateResult::message(Message::SelectShell(value)),
        _ => UpdateResult::none(),
    }
}
