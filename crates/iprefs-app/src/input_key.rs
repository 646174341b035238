//! Abstract input key event, independent of terminal library.
//!
//! The pane logic only sees [`InputKey`]; the TUI crate converts crossterm
//! events at its boundary, so this crate never depends on crossterm.

/// Keyboard input the pane reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}
