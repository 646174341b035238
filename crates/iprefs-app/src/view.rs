//! Render description of the pane
//!
//! [`PaneView::build`] turns [`AppState`] into plain data: labels already
//! resolved for the platform, focus and edit state folded into each control.
//! Front-ends draw this without looking at the state themselves.

use crate::state::{AppState, CustomEditorField, FocusTarget, InputMode};

pub const PANE_TITLE: &str = "Applications";
pub const SHELL_LABEL: &str = "Shell";
pub const ADD_BUTTON_LABEL: &str = "Add";
pub const CUSTOM_EDITOR_COLUMNS: [&str; 3] = ["Name", "Path", "Terminal"];

const HINTS_BROWSING: &str = "Tab/↑↓ move · Enter select · a add · q quit";
const HINTS_EDITING: &str = "Enter save · Del clear · Esc cancel";
const HINTS_CHOOSING: &str = "↑↓ choose · Enter confirm · Esc cancel";

/// A labelled dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub label: &'static str,
    pub options: Vec<String>,
    /// Current value as shown when closed
    pub value: String,
    pub selected: Option<usize>,
    pub focused: bool,
    /// Highlighted option while the dropdown is open
    pub open: Option<usize>,
}

/// Top section: a dropdown, or the install link when nothing is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSection {
    Select(SelectView),
    NoEditorsFound {
        label: &'static str,
        /// "Install <name>?"
        link_text: String,
        url: String,
        focused: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEditorRowView {
    pub name: String,
    pub path: String,
    pub uses_shell: bool,
    pub focused_field: Option<CustomEditorField>,
    /// Edit buffer for the focused field, shown in place of its value
    pub editing: Option<String>,
}

impl CustomEditorRowView {
    /// Text for a name or path cell, preferring the live edit buffer
    pub fn cell_text(&self, field: CustomEditorField) -> &str {
        if self.focused_field == Some(field) {
            if let Some(buffer) = &self.editing {
                return buffer;
            }
        }
        match field {
            CustomEditorField::Name => &self.name,
            CustomEditorField::Path => &self.path,
            CustomEditorField::Terminal => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEditorTableView {
    pub label: &'static str,
    pub columns: [&'static str; 3],
    pub rows: Vec<CustomEditorRowView>,
    pub add_focused: bool,
}

/// Everything a front-end needs to draw the pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView {
    pub title: &'static str,
    pub editor: EditorSection,
    pub custom_editors: CustomEditorTableView,
    pub shell: SelectView,
    pub hints: &'static str,
    pub error: Option<String>,
}

impl PaneView {
    pub fn build(state: &AppState) -> Self {
        let focused = state.focused_target();
        let is_focused = |target: FocusTarget| focused == Some(target);
        let open_for = |target: FocusTarget| match state.view.mode {
            InputMode::Choosing { highlighted } if is_focused(target) => Some(highlighted),
            _ => None,
        };

        let editor_label = state.platform.label("External Editor", "External editor");
        let editor = if state.props.has_editors() {
            EditorSection::Select(SelectView {
                label: editor_label,
                options: state.choice_options(FocusTarget::EditorSelect),
                value: state
                    .integrations
                    .selected_external_editor
                    .clone()
                    .unwrap_or_default(),
                selected: state.selected_choice(FocusTarget::EditorSelect),
                focused: is_focused(FocusTarget::EditorSelect),
                open: open_for(FocusTarget::EditorSelect),
            })
        } else {
            EditorSection::NoEditorsFound {
                label: editor_label,
                link_text: format!("Install {}?", state.suggested_editor.name),
                url: state.suggested_editor.url.clone(),
                focused: is_focused(FocusTarget::InstallSuggestion),
            }
        };

        let rows = state
            .integrations
            .external_custom_editors
            .iter()
            .enumerate()
            .map(|(row, editor)| {
                let focused_field = match focused {
                    Some(FocusTarget::CustomEditor { row: r, field }) if r == row => Some(field),
                    _ => None,
                };
                CustomEditorRowView {
                    name: editor.editor_name.clone(),
                    path: editor.path.clone(),
                    uses_shell: editor.uses_shell(),
                    focused_field,
                    editing: focused_field
                        .and_then(|_| state.view.edit_buffer())
                        .map(str::to_string),
                }
            })
            .collect();

        let custom_editors = CustomEditorTableView {
            label: state
                .platform
                .label("External Custom Editors", "External custom editors"),
            columns: CUSTOM_EDITOR_COLUMNS,
            rows,
            add_focused: is_focused(FocusTarget::AddCustomEditor),
        };

        let shell = SelectView {
            label: SHELL_LABEL,
            options: state.choice_options(FocusTarget::ShellSelect),
            value: state.integrations.selected_shell.label().to_string(),
            selected: state.selected_choice(FocusTarget::ShellSelect),
            focused: is_focused(FocusTarget::ShellSelect),
            open: open_for(FocusTarget::ShellSelect),
        };

        let hints = match state.view.mode {
            InputMode::Browsing => HINTS_BROWSING,
            InputMode::Editing { .. } => HINTS_EDITING,
            InputMode::Choosing { .. } => HINTS_CHOOSING,
        };

        Self {
            title: PANE_TITLE,
            editor,
            custom_editors,
            shell,
            hints,
            error: state.view.error.clone(),
        }
    }
}
