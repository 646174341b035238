//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::props::IntegrationsProps;
use crate::state::{AppState, CustomEditorField, FocusTarget, InputMode};
use iprefs_core::{CustomEditor, Platform, Shell, SuggestedEditor};

fn test_props() -> IntegrationsProps {
    IntegrationsProps {
        available_editors: vec!["A".into(), "B".into()],
        selected_external_editor: Some("A".into()),
        external_custom_editors: vec![CustomEditor::new("X", "/x")],
        available_shells: vec![Shell::Terminal, Shell::Kitty, Shell::Alacritty],
        selected_shell: Shell::Terminal,
    }
}

fn test_state() -> AppState {
    AppState::new(test_props(), Platform::Other, SuggestedEditor::default())
}

fn focus(state: &mut AppState, target: FocusTarget) {
    state.view.focused = state
        .focus_targets()
        .iter()
        .position(|t| *t == target)
        .unwrap();
}

/// Run a message and every follow-up message, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn key(state: &mut AppState, k: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(k))
}

fn notifications(actions: Vec<UpdateAction>) -> Vec<Notification> {
    actions
        .into_iter()
        .flat_map(|action| match action {
            UpdateAction::Notify(n) => n,
            UpdateAction::OpenUrl(_) => Vec::new(),
        })
        .collect()
}

// ─────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_browsing_keys() {
    let state = test_state();
    assert!(matches!(
        keys::handle_key(&state, InputKey::Tab),
        Some(Message::FocusNext)
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::BackTab),
        Some(Message::FocusPrevious)
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::Enter),
        Some(Message::Activate)
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::Char('a')),
        Some(Message::AddCustomEditor)
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
    assert!(keys::handle_key(&state, InputKey::Char('z')).is_none());
}

#[test]
fn test_editing_keys_do_not_quit_on_q() {
    let mut state = test_state();
    state.view.start_editing("");

    assert!(matches!(
        keys::handle_key(&state, InputKey::Char('q')),
        Some(Message::EditCharInput('q'))
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::Esc),
        Some(Message::EditCancel)
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::Delete),
        Some(Message::EditClear)
    ));
}

#[test]
fn test_choosing_keys() {
    let mut state = test_state();
    state.view.start_choosing(0);

    assert!(matches!(
        keys::handle_key(&state, InputKey::Down),
        Some(Message::ChoiceNext)
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::Up),
        Some(Message::ChoicePrevious)
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::Enter),
        Some(Message::ChoiceCommit)
    ));
}

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    let mut state = test_state();
    state.view.start_editing("abc");

    key(&mut state, InputKey::CharCtrl('c'));

    assert!(state.is_quitting());
}

// ─────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_walks_every_control_and_wraps() {
    let mut state = test_state();
    let count = state.focus_targets().len();

    for _ in 0..count {
        key(&mut state, InputKey::Tab);
    }

    assert_eq!(state.view.focused, 0);
    assert_eq!(state.focused_target(), Some(FocusTarget::EditorSelect));
}

// ─────────────────────────────────────────────────────────
// Dropdowns
// ─────────────────────────────────────────────────────────

#[test]
fn test_choose_editor_from_dropdown() {
    let mut state = test_state();

    key(&mut state, InputKey::Enter);
    assert_eq!(state.view.mode, InputMode::Choosing { highlighted: 0 });

    key(&mut state, InputKey::Down);
    let actions = key(&mut state, InputKey::Enter);

    assert!(state.view.is_browsing());
    assert_eq!(
        state.integrations.selected_external_editor.as_deref(),
        Some("B")
    );
    assert_eq!(
        notifications(actions),
        vec![Notification::SelectedEditorChanged("B".into())]
    );
}

#[test]
fn test_choose_shell_wraps_upward() {
    let mut state = test_state();
    focus(&mut state, FocusTarget::ShellSelect);

    key(&mut state, InputKey::Enter);
    key(&mut state, InputKey::Up);
    let actions = key(&mut state, InputKey::Enter);

    assert_eq!(state.integrations.selected_shell, Shell::Alacritty);
    assert_eq!(
        notifications(actions),
        vec![Notification::SelectedShellChanged(Shell::Alacritty)]
    );
}

#[test]
fn test_cancel_dropdown_keeps_selection() {
    let mut state = test_state();

    key(&mut state, InputKey::Enter);
    key(&mut state, InputKey::Down);
    let actions = key(&mut state, InputKey::Esc);

    assert!(actions.is_empty());
    assert!(state.view.is_browsing());
    assert_eq!(
        state.integrations.selected_external_editor.as_deref(),
        Some("A")
    );
}

#[test]
fn test_reselect_current_shell_still_notifies() {
    let mut state = test_state();
    focus(&mut state, FocusTarget::ShellSelect);

    key(&mut state, InputKey::Enter);
    let actions = key(&mut state, InputKey::Enter);

    assert_eq!(
        notifications(actions),
        vec![Notification::SelectedShellChanged(Shell::Terminal)]
    );
}

// ─────────────────────────────────────────────────────────
// Custom editor table
// ─────────────────────────────────────────────────────────

#[test]
fn test_edit_path_commits_replacement() {
    let mut state = test_state();
    focus(
        &mut state,
        FocusTarget::CustomEditor {
            row: 0,
            field: CustomEditorField::Path,
        },
    );

    key(&mut state, InputKey::Enter);
    key(&mut state, InputKey::Delete);
    for c in "/y".chars() {
        key(&mut state, InputKey::Char(c));
    }
    let actions = key(&mut state, InputKey::Enter);

    assert_eq!(
        notifications(actions),
        vec![Notification::ExternalCustomEditorsChanged(vec![
            CustomEditor::new("X", "/y")
        ])]
    );
}

#[test]
fn test_edit_cancel_discards_buffer() {
    let mut state = test_state();
    focus(
        &mut state,
        FocusTarget::CustomEditor {
            row: 0,
            field: CustomEditorField::Name,
        },
    );

    key(&mut state, InputKey::Enter);
    key(&mut state, InputKey::Backspace);
    let actions = key(&mut state, InputKey::Esc);

    assert!(actions.is_empty());
    assert_eq!(state.integrations.external_custom_editors[0].editor_name, "X");
}

#[test]
fn test_clearing_name_removes_row() {
    let mut state = test_state();
    focus(
        &mut state,
        FocusTarget::CustomEditor {
            row: 0,
            field: CustomEditorField::Name,
        },
    );

    key(&mut state, InputKey::Enter);
    assert_eq!(state.view.edit_buffer(), Some("X"));
    key(&mut state, InputKey::Backspace);
    assert_eq!(state.view.edit_buffer(), Some(""));
    let actions = key(&mut state, InputKey::Enter);

    assert!(state.integrations.external_custom_editors.is_empty());
    assert_eq!(
        notifications(actions),
        vec![Notification::ExternalCustomEditorsChanged(Vec::new())]
    );
    // Focus landed on a control that still exists
    assert!(state.focused_target().is_some());
}

#[test]
fn test_terminal_checkbox_toggles() {
    let mut state = test_state();
    focus(
        &mut state,
        FocusTarget::CustomEditor {
            row: 0,
            field: CustomEditorField::Terminal,
        },
    );

    key(&mut state, InputKey::Char(' '));
    assert_eq!(
        state.integrations.external_custom_editors[0].uses_shell,
        Some(true)
    );

    key(&mut state, InputKey::Char(' '));
    assert_eq!(state.integrations.external_custom_editors[0].uses_shell, None);
}

#[test]
fn test_add_button_appends_placeholder() {
    let mut state = test_state();
    focus(&mut state, FocusTarget::AddCustomEditor);

    let actions = key(&mut state, InputKey::Enter);

    assert_eq!(
        notifications(actions),
        vec![Notification::ExternalCustomEditorsChanged(vec![
            CustomEditor::new("X", "/x"),
            CustomEditor::placeholder(),
        ])]
    );
    assert_eq!(state.focus_targets().len(), 9);
}

// ─────────────────────────────────────────────────────────
// Props and suggestions
// ─────────────────────────────────────────────────────────

#[test]
fn test_props_received_reconciles() {
    let mut state = test_state();
    let props = IntegrationsProps {
        available_editors: vec!["A".into(), "B".into()],
        selected_external_editor: Some("C".into()),
        ..test_props()
    };

    let actions = run(&mut state, Message::PropsReceived(props));

    assert_eq!(
        state.integrations.selected_external_editor.as_deref(),
        Some("A")
    );
    assert_eq!(
        notifications(actions),
        vec![Notification::SelectedEditorChanged("A".into())]
    );
}

#[test]
fn test_props_received_consistent_is_silent() {
    let mut state = test_state();
    let actions = run(&mut state, Message::PropsReceived(test_props()));
    assert!(actions.is_empty());
}

#[test]
fn test_props_received_closes_open_editor() {
    let mut state = test_state();
    state.view.start_editing("half typed");

    run(&mut state, Message::PropsReceived(test_props()));

    assert!(state.view.is_browsing());
}

#[test]
fn test_install_suggestion_opens_url() {
    let props = IntegrationsProps {
        available_editors: Vec::new(),
        selected_external_editor: None,
        ..test_props()
    };
    let mut state = AppState::new(props, Platform::Mac, SuggestedEditor::default());
    assert_eq!(state.focused_target(), Some(FocusTarget::InstallSuggestion));

    let actions = key(&mut state, InputKey::Enter);

    assert_eq!(
        actions,
        vec![UpdateAction::OpenUrl("https://code.visualstudio.com".into())]
    );
}

#[test]
fn test_owner_status_sets_and_clears_error() {
    let mut state = test_state();

    run(&mut state, Message::OwnerStatus(Some("disk full".into())));
    assert_eq!(state.view.error.as_deref(), Some("disk full"));

    run(&mut state, Message::OwnerStatus(None));
    assert!(state.view.error.is_none());
}

// ─────────────────────────────────────────────────────────
// Shutdown
// ─────────────────────────────────────────────────────────

#[test]
fn test_shutdown_keeps_pending_edit() {
    let mut state = test_state();
    focus(
        &mut state,
        FocusTarget::CustomEditor {
            row: 0,
            field: CustomEditorField::Path,
        },
    );
    key(&mut state, InputKey::Enter);
    key(&mut state, InputKey::Char('2'));

    let actions = run(
        &mut state,
        Message::Shutdown(crate::signals::ShutdownSignal::Terminate),
    );

    assert!(state.is_quitting());
    assert_eq!(
        notifications(actions),
        vec![Notification::ExternalCustomEditorsChanged(vec![
            CustomEditor::new("X", "/x2")
        ])]
    );
}

#[test]
fn test_shutdown_while_browsing_only_quits() {
    let mut state = test_state();

    let actions = run(
        &mut state,
        Message::Shutdown(crate::signals::ShutdownSignal::Interrupt),
    );

    assert!(state.is_quitting());
    assert!(actions.is_empty());
}
