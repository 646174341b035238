//! Pane state and its transitions
//!
//! Every operation here is a pure function from the current state (plus an
//! input) to a [`Transition`]: the next state and the owner notifications that
//! go with it. Nothing in this module performs I/O or holds the owner.

use iprefs_core::{CustomEditor, Shell};

use crate::notification::Notification;
use crate::props::IntegrationsProps;

/// Working copy of the pane's selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationsState {
    pub selected_external_editor: Option<String>,
    pub selected_shell: Shell,
    pub external_custom_editors: Vec<CustomEditor>,
}

impl IntegrationsState {
    /// Seed state from the initial props. No reconciliation happens here.
    pub fn from_props(props: &IntegrationsProps) -> Self {
        Self {
            selected_external_editor: props.selected_external_editor.clone(),
            selected_shell: props.selected_shell,
            external_custom_editors: props.external_custom_editors.clone(),
        }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: IntegrationsState,
    pub notifications: Vec<Notification>,
}

impl Transition {
    /// Transition that leaves state untouched and reports nothing
    pub fn unchanged(state: &IntegrationsState) -> Self {
        Self {
            state: state.clone(),
            notifications: Vec::new(),
        }
    }

    fn notify(state: IntegrationsState, notification: Notification) -> Self {
        Self {
            state,
            notifications: vec![notification],
        }
    }

    /// Whether the owner has to be told about anything
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Props reconciliation
// ─────────────────────────────────────────────────────────────────────────────

/// Re-synchronize state with freshly received props.
///
/// Selections that are not among the available options fall back to the
/// first option and are reported upstream. The custom editor list is taken
/// from props as-is. The previous state is discarded entirely; props are the
/// source of truth.
pub fn reconcile(_prev: &IntegrationsState, props: &IntegrationsProps) -> Transition {
    let mut notifications = Vec::new();

    let mut selected_external_editor = props.selected_external_editor.clone();
    if let Some(first) = props.available_editors.first() {
        let found = selected_external_editor
            .as_ref()
            .is_some_and(|selected| props.available_editors.contains(selected));
        if !found {
            tracing::info!(
                "Selected editor {:?} is not available, falling back to {:?}",
                selected_external_editor,
                first
            );
            selected_external_editor = Some(first.clone());
            notifications.push(Notification::SelectedEditorChanged(first.clone()));
        }
    }

    let mut selected_shell = props.selected_shell;
    if let Some(first) = props.available_shells.first() {
        if !props.available_shells.contains(&selected_shell) {
            tracing::info!(
                "Selected shell {} is not available, falling back to {}",
                selected_shell,
                first
            );
            selected_shell = *first;
            notifications.push(Notification::SelectedShellChanged(*first));
        }
    }

    Transition {
        state: IntegrationsState {
            selected_external_editor,
            selected_shell,
            external_custom_editors: props.external_custom_editors.clone(),
        },
        notifications,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor and shell selection
// ─────────────────────────────────────────────────────────────────────────────

/// User picked an editor. An empty value is ignored.
pub fn select_editor(state: &IntegrationsState, value: &str) -> Transition {
    if value.is_empty() {
        return Transition::unchanged(state);
    }

    Transition::notify(
        IntegrationsState {
            selected_external_editor: Some(value.to_string()),
            ..state.clone()
        },
        Notification::SelectedEditorChanged(value.to_string()),
    )
}

/// User picked a shell. Unknown labels resolve to the default shell, and the
/// owner is notified even when nothing changed.
pub fn select_shell(state: &IntegrationsState, raw: &str) -> Transition {
    let shell = Shell::parse(raw);

    Transition::notify(
        IntegrationsState {
            selected_shell: shell,
            ..state.clone()
        },
        Notification::SelectedShellChanged(shell),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Custom editors
// ─────────────────────────────────────────────────────────────────────────────

/// Commit a candidate custom editor list.
///
/// Entries with a blank name are dropped here, so clearing a row's name is
/// how a row gets removed: it vanishes on the first list change after the
/// name went blank, whichever row that change came from.
pub fn change_custom_editors(state: &IntegrationsState, editors: Vec<CustomEditor>) -> Transition {
    let before = editors.len();
    let editors: Vec<CustomEditor> = editors.into_iter().filter(CustomEditor::has_name).collect();
    if editors.len() != before {
        tracing::debug!(
            "Dropped {} unnamed custom editor(s)",
            before - editors.len()
        );
    }

    Transition::notify(
        IntegrationsState {
            external_custom_editors: editors.clone(),
            ..state.clone()
        },
        Notification::ExternalCustomEditorsChanged(editors),
    )
}

/// Replace the entry at `index` and commit the resulting list.
///
/// `index` comes from a rendered row. If that row has already been filtered
/// out of the list, the list is committed unchanged.
pub fn replace_custom_editor(
    state: &IntegrationsState,
    index: usize,
    editor: CustomEditor,
) -> Transition {
    let editors = state
        .external_custom_editors
        .iter()
        .enumerate()
        .map(|(i, original)| {
            if i == index {
                editor.clone()
            } else {
                original.clone()
            }
        })
        .collect();

    change_custom_editors(state, editors)
}

/// Rename the entry at `index`
pub fn rename_custom_editor(state: &IntegrationsState, index: usize, name: &str) -> Transition {
    match state.external_custom_editors.get(index) {
        Some(editor) => replace_custom_editor(state, index, editor.with_name(name)),
        None => change_custom_editors(state, state.external_custom_editors.clone()),
    }
}

/// Change the executable path of the entry at `index`
pub fn set_custom_editor_path(state: &IntegrationsState, index: usize, path: &str) -> Transition {
    match state.external_custom_editors.get(index) {
        Some(editor) => replace_custom_editor(state, index, editor.with_path(path)),
        None => change_custom_editors(state, state.external_custom_editors.clone()),
    }
}

/// Flip the uses-shell flag of the entry at `index`
pub fn toggle_custom_editor_shell(state: &IntegrationsState, index: usize) -> Transition {
    match state.external_custom_editors.get(index) {
        Some(editor) => replace_custom_editor(state, index, editor.with_uses_shell_toggled()),
        None => change_custom_editors(state, state.external_custom_editors.clone()),
    }
}

/// Append the placeholder editor and push the list upstream
pub fn add_custom_editor(state: &IntegrationsState) -> Transition {
    let mut editors = state.external_custom_editors.clone();
    editors.push(CustomEditor::placeholder());
    change_custom_editors(state, editors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(editors: &[&str], selected: Option<&str>) -> IntegrationsProps {
        IntegrationsProps {
            available_editors: editors.iter().map(|e| e.to_string()).collect(),
            selected_external_editor: selected.map(str::to_string),
            external_custom_editors: Vec::new(),
            available_shells: vec![Shell::Terminal, Shell::ITerm2],
            selected_shell: Shell::Terminal,
        }
    }

    fn editor_notifications(t: &Transition) -> Vec<&Notification> {
        t.notifications
            .iter()
            .filter(|n| matches!(n, Notification::SelectedEditorChanged(_)))
            .collect()
    }

    // ─────────────────────────────────────────────────────────
    // reconcile
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_reconcile_stale_editor_falls_back_to_first() {
        let t = reconcile(&IntegrationsState::default(), &props(&["A", "B"], Some("C")));

        assert_eq!(t.state.selected_external_editor.as_deref(), Some("A"));
        assert_eq!(
            t.notifications,
            vec![Notification::SelectedEditorChanged("A".into())]
        );
    }

    #[test]
    fn test_reconcile_missing_editor_falls_back_to_first() {
        let t = reconcile(&IntegrationsState::default(), &props(&["A", "B"], None));

        assert_eq!(t.state.selected_external_editor.as_deref(), Some("A"));
        assert_eq!(editor_notifications(&t).len(), 1);
    }

    #[test]
    fn test_reconcile_valid_editor_is_kept_silently() {
        let t = reconcile(&IntegrationsState::default(), &props(&["A", "B"], Some("B")));

        assert_eq!(t.state.selected_external_editor.as_deref(), Some("B"));
        assert!(!t.has_notifications());
    }

    #[test]
    fn test_reconcile_no_editors_keeps_selection() {
        let t = reconcile(&IntegrationsState::default(), &props(&[], Some("Gone")));

        assert_eq!(t.state.selected_external_editor.as_deref(), Some("Gone"));
        assert!(editor_notifications(&t).is_empty());

        let t = reconcile(&IntegrationsState::default(), &props(&[], None));
        assert_eq!(t.state.selected_external_editor, None);
    }

    #[test]
    fn test_reconcile_editor_comparison_is_exact() {
        let t = reconcile(&IntegrationsState::default(), &props(&["Zed"], Some("zed")));

        assert_eq!(t.state.selected_external_editor.as_deref(), Some("Zed"));
        assert_eq!(editor_notifications(&t).len(), 1);
    }

    #[test]
    fn test_reconcile_stale_shell_falls_back_to_first() {
        let mut p = props(&["A"], Some("A"));
        p.available_shells = vec![Shell::Konsole, Shell::Xterm];
        p.selected_shell = Shell::Terminal;

        let t = reconcile(&IntegrationsState::default(), &p);

        assert_eq!(t.state.selected_shell, Shell::Konsole);
        assert_eq!(
            t.notifications,
            vec![Notification::SelectedShellChanged(Shell::Konsole)]
        );
    }

    #[test]
    fn test_reconcile_no_shells_keeps_selection() {
        let mut p = props(&["A"], Some("A"));
        p.available_shells = Vec::new();
        p.selected_shell = Shell::Wsl;

        let t = reconcile(&IntegrationsState::default(), &p);

        assert_eq!(t.state.selected_shell, Shell::Wsl);
        assert!(!t.has_notifications());
    }

    #[test]
    fn test_reconcile_both_stale_reports_editor_then_shell() {
        let mut p = props(&["A", "B"], Some("C"));
        p.available_shells = vec![Shell::Hyper];
        p.selected_shell = Shell::Warp;

        let t = reconcile(&IntegrationsState::default(), &p);

        assert_eq!(
            t.notifications,
            vec![
                Notification::SelectedEditorChanged("A".into()),
                Notification::SelectedShellChanged(Shell::Hyper),
            ]
        );
    }

    #[test]
    fn test_reconcile_replaces_custom_editors_wholesale() {
        let prev = IntegrationsState {
            external_custom_editors: vec![
                CustomEditor::new("Old", "/old"),
                CustomEditor::new("Older", "/older"),
            ],
            ..Default::default()
        };
        let mut p = props(&["A"], Some("A"));
        p.external_custom_editors = vec![CustomEditor::new("New", "/new")];

        let t = reconcile(&prev, &p);

        assert_eq!(
            t.state.external_custom_editors,
            vec![CustomEditor::new("New", "/new")]
        );
        // The list itself is never reported back by reconciliation
        assert!(!t.has_notifications());
    }

    #[test]
    fn test_reconcile_keeps_unnamed_entries_from_props() {
        let mut p = props(&["A"], Some("A"));
        p.external_custom_editors = vec![CustomEditor::new("", "/blank")];

        let t = reconcile(&IntegrationsState::default(), &p);

        assert_eq!(t.state.external_custom_editors.len(), 1);
    }

    #[test]
    fn test_from_props_does_not_reconcile() {
        let state = IntegrationsState::from_props(&props(&["A", "B"], Some("C")));
        assert_eq!(state.selected_external_editor.as_deref(), Some("C"));
    }

    // ─────────────────────────────────────────────────────────
    // selection
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_select_editor_updates_and_notifies() {
        let t = select_editor(&IntegrationsState::default(), "Sublime Text");

        assert_eq!(
            t.state.selected_external_editor.as_deref(),
            Some("Sublime Text")
        );
        assert_eq!(
            t.notifications,
            vec![Notification::SelectedEditorChanged("Sublime Text".into())]
        );
    }

    #[test]
    fn test_select_empty_editor_is_noop() {
        let state = IntegrationsState {
            selected_external_editor: Some("A".into()),
            ..Default::default()
        };

        let t = select_editor(&state, "");

        assert_eq!(t.state, state);
        assert!(!t.has_notifications());
    }

    #[test]
    fn test_select_shell_parses_label() {
        let t = select_shell(&IntegrationsState::default(), "iTerm2");

        assert_eq!(t.state.selected_shell, Shell::ITerm2);
        assert_eq!(
            t.notifications,
            vec![Notification::SelectedShellChanged(Shell::ITerm2)]
        );
    }

    #[test]
    fn test_select_unknown_shell_uses_default_and_still_notifies() {
        let state = IntegrationsState {
            selected_shell: Shell::Alacritty,
            ..Default::default()
        };

        let t = select_shell(&state, "definitely not a shell");

        assert_eq!(t.state.selected_shell, Shell::default());
        assert_eq!(
            t.notifications,
            vec![Notification::SelectedShellChanged(Shell::default())]
        );
    }

    #[test]
    fn test_select_same_shell_still_notifies() {
        let state = IntegrationsState {
            selected_shell: Shell::Kitty,
            ..Default::default()
        };

        let t = select_shell(&state, "Kitty");

        assert_eq!(t.state, state);
        assert_eq!(t.notifications.len(), 1);
    }

    // ─────────────────────────────────────────────────────────
    // custom editors
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_add_custom_editor_appends_placeholder() {
        let state = IntegrationsState {
            external_custom_editors: vec![CustomEditor::new("Helix", "/usr/bin/hx")],
            ..Default::default()
        };

        let t = add_custom_editor(&state);

        assert_eq!(t.state.external_custom_editors.len(), 2);
        assert_eq!(
            t.state.external_custom_editors[1],
            CustomEditor {
                editor_name: "An editor".into(),
                path: "/path/to/editor/bin".into(),
                uses_shell: None,
            }
        );
        assert_eq!(
            t.notifications,
            vec![Notification::ExternalCustomEditorsChanged(
                t.state.external_custom_editors.clone()
            )]
        );
    }

    #[test]
    fn test_change_custom_editors_filters_blank_names() {
        let t = change_custom_editors(
            &IntegrationsState::default(),
            vec![
                CustomEditor::new("Keep", "/keep"),
                CustomEditor::new("", "/drop"),
                CustomEditor::new("  ", "/drop-too"),
            ],
        );

        assert_eq!(
            t.state.external_custom_editors,
            vec![CustomEditor::new("Keep", "/keep")]
        );
        assert_eq!(
            t.notifications,
            vec![Notification::ExternalCustomEditorsChanged(vec![
                CustomEditor::new("Keep", "/keep")
            ])]
        );
    }

    #[test]
    fn test_replace_custom_editor_only_touches_index() {
        let state = IntegrationsState {
            external_custom_editors: vec![
                CustomEditor::new("A", "/a"),
                CustomEditor::new("B", "/b"),
                CustomEditor::new("C", "/c"),
            ],
            ..Default::default()
        };

        let t = replace_custom_editor(&state, 1, CustomEditor::new("B2", "/b2"));

        assert_eq!(
            t.state.external_custom_editors,
            vec![
                CustomEditor::new("A", "/a"),
                CustomEditor::new("B2", "/b2"),
                CustomEditor::new("C", "/c"),
            ]
        );
    }

    #[test]
    fn test_replace_out_of_range_keeps_list() {
        let state = IntegrationsState {
            external_custom_editors: vec![CustomEditor::new("A", "/a")],
            ..Default::default()
        };

        let t = replace_custom_editor(&state, 7, CustomEditor::new("Z", "/z"));

        assert_eq!(t.state.external_custom_editors, state.external_custom_editors);
    }

    #[test]
    fn test_cleared_name_then_other_row_edit_drops_row() {
        // A blank-named row that reached state through props is dropped on the
        // next edit to any row
        let state = IntegrationsState {
            external_custom_editors: vec![
                CustomEditor::new("", "/cleared"),
                CustomEditor::new("Other", "/other"),
            ],
            ..Default::default()
        };

        let t = set_custom_editor_path(&state, 1, "/other2");

        assert_eq!(
            t.notifications,
            vec![Notification::ExternalCustomEditorsChanged(vec![
                CustomEditor::new("Other", "/other2")
            ])]
        );
    }

    #[test]
    fn test_clear_name_then_edit_path_yields_empty_payload() {
        let state = IntegrationsState {
            external_custom_editors: vec![CustomEditor::new("X", "/x")],
            ..Default::default()
        };

        // The row still shows "" while the user moves on to the path field
        let cleared = rename_custom_editor(&state, 0, "");
        let displayed_row = CustomEditor::new("", "/x");
        let t = replace_custom_editor(&cleared.state, 0, displayed_row.with_path("/y"));

        assert_eq!(
            t.notifications,
            vec![Notification::ExternalCustomEditorsChanged(Vec::new())]
        );
        assert!(t.state.external_custom_editors.is_empty());
    }

    #[test]
    fn test_toggle_shell_round_trips_to_unset() {
        let state = IntegrationsState {
            external_custom_editors: vec![CustomEditor::new("X", "/x")],
            ..Default::default()
        };

        let on = toggle_custom_editor_shell(&state, 0);
        assert_eq!(on.state.external_custom_editors[0].uses_shell, Some(true));

        let off = toggle_custom_editor_shell(&on.state, 0);
        assert_eq!(off.state.external_custom_editors[0].uses_shell, None);
    }

    #[test]
    fn test_there_is_no_remove_operation_besides_clearing_the_name() {
        // Current behaviour: rows can only be removed by blanking the name
        let state = IntegrationsState {
            external_custom_editors: vec![CustomEditor::new("X", "/x")],
            ..Default::default()
        };

        let t = rename_custom_editor(&state, 0, "");

        assert!(t.state.external_custom_editors.is_empty());
    }

    #[test]
    fn test_custom_editor_changes_leave_selections_alone() {
        let state = IntegrationsState {
            selected_external_editor: Some("A".into()),
            selected_shell: Shell::Tilix,
            external_custom_editors: Vec::new(),
        };

        let t = add_custom_editor(&state);

        assert_eq!(t.state.selected_external_editor.as_deref(), Some("A"));
        assert_eq!(t.state.selected_shell, Shell::Tilix);
    }
}
