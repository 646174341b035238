//! Application state (Model in TEA pattern)

use iprefs_core::{Platform, SuggestedEditor};

use crate::integrations::{IntegrationsState, Transition};
use crate::notification::Notification;
use crate::props::IntegrationsProps;

/// Lifecycle of the pane process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Editable column of a custom editor row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomEditorField {
    Name,
    Path,
    /// The uses-shell checkbox
    Terminal,
}

impl CustomEditorField {
    pub const ALL: [CustomEditorField; 3] = [
        CustomEditorField::Name,
        CustomEditorField::Path,
        CustomEditorField::Terminal,
    ];
}

/// Something on the pane that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Editor dropdown (only when editors are available)
    EditorSelect,
    /// "Install <editor>?" link (only when no editors are available)
    InstallSuggestion,
    CustomEditor {
        row: usize,
        field: CustomEditorField,
    },
    AddCustomEditor,
    ShellSelect,
}

/// What keys currently do
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Moving focus between controls
    #[default]
    Browsing,
    /// Typing into a name or path cell. The buffer is shown in place of the
    /// cell value until committed, so it may be blank.
    Editing { buffer: String },
    /// A dropdown is open with `highlighted` as the candidate option
    Choosing { highlighted: usize },
}

/// Focus and interaction state of the pane, independent of its data
#[derive(Debug, Clone, Default)]
pub struct PaneViewState {
    /// Index into [`AppState::focus_targets`]
    pub focused: usize,

    pub mode: InputMode,

    /// Last error reported by the owner, shown in the footer
    pub error: Option<String>,
}

impl PaneViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus forward, wrapping
    pub fn focus_next(&mut self, count: usize) {
        if count > 0 {
            self.focused = (self.focused + 1) % count;
        }
    }

    /// Move focus backward, wrapping
    pub fn focus_previous(&mut self, count: usize) {
        if count > 0 {
            self.focused = if self.focused == 0 {
                count - 1
            } else {
                self.focused - 1
            };
        }
    }

    /// Keep focus inside a target list that may have shrunk
    pub fn clamp_focus(&mut self, count: usize) {
        if count == 0 {
            self.focused = 0;
        } else if self.focused >= count {
            self.focused = count - 1;
        }
    }

    pub fn start_editing(&mut self, initial_value: &str) {
        self.mode = InputMode::Editing {
            buffer: initial_value.to_string(),
        };
    }

    pub fn start_choosing(&mut self, highlighted: usize) {
        self.mode = InputMode::Choosing { highlighted };
    }

    /// Leave editing or choosing without committing anything
    pub fn browse(&mut self) {
        self.mode = InputMode::Browsing;
    }

    pub fn is_browsing(&self) -> bool {
        self.mode == InputMode::Browsing
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        match &self.mode {
            InputMode::Editing { buffer } => Some(buffer),
            _ => None,
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self.mode {
            InputMode::Choosing { highlighted } => Some(highlighted),
            _ => None,
        }
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Most recent props from the owner
    pub props: IntegrationsProps,

    /// Pane working copy of the selections
    pub integrations: IntegrationsState,

    pub view: PaneViewState,

    pub platform: Platform,

    pub suggested_editor: SuggestedEditor,

    pub phase: AppPhase,
}

impl AppState {
    /// Construct the pane from its initial props
    pub fn new(props: IntegrationsProps, platform: Platform, suggested_editor: SuggestedEditor) -> Self {
        Self {
            integrations: IntegrationsState::from_props(&props),
            props,
            view: PaneViewState::new(),
            platform,
            suggested_editor,
            phase: AppPhase::Running,
        }
    }

    pub fn is_quitting(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Focusable controls in display order
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let rows = self.integrations.external_custom_editors.len();
        let mut targets = Vec::with_capacity(3 + rows * CustomEditorField::ALL.len());

        targets.push(if self.props.has_editors() {
            FocusTarget::EditorSelect
        } else {
            FocusTarget::InstallSuggestion
        });

        for row in 0..rows {
            for field in CustomEditorField::ALL {
                targets.push(FocusTarget::CustomEditor { row, field });
            }
        }

        targets.push(FocusTarget::AddCustomEditor);
        targets.push(FocusTarget::ShellSelect);
        targets
    }

    pub fn focused_target(&self) -> Option<FocusTarget> {
        self.focus_targets().get(self.view.focused).copied()
    }

    /// Options of the dropdown behind `target`, as raw values
    pub fn choice_options(&self, target: FocusTarget) -> Vec<String> {
        match target {
            FocusTarget::EditorSelect => self.props.available_editors.clone(),
            FocusTarget::ShellSelect => self
                .props
                .available_shells
                .iter()
                .map(|shell| shell.label().to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Index of the currently selected value within the dropdown options
    pub fn selected_choice(&self, target: FocusTarget) -> Option<usize> {
        match target {
            FocusTarget::EditorSelect => {
                let selected = self.integrations.selected_external_editor.as_ref()?;
                self.props
                    .available_editors
                    .iter()
                    .position(|editor| editor == selected)
            }
            FocusTarget::ShellSelect => self
                .props
                .available_shells
                .iter()
                .position(|shell| *shell == self.integrations.selected_shell),
            _ => None,
        }
    }

    /// Commit a transition and hand back what the owner must hear about
    pub fn apply(&mut self, transition: Transition) -> Vec<Notification> {
        self.integrations = transition.state;
        let count = self.focus_targets().len();
        self.view.clamp_focus(count);
        transition.notifications
    }
}
