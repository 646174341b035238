//! Key event handlers per input mode

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, InputMode};

/// Convert key events to messages based on the current input mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.view.mode {
        InputMode::Browsing => handle_key_browsing(key),
        InputMode::Editing { .. } => handle_key_editing(key),
        InputMode::Choosing { .. } => handle_key_choosing(key),
    }
}

fn handle_key_browsing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::Quit),

        InputKey::Tab | InputKey::Down | InputKey::Right | InputKey::Char('j') => {
            Some(Message::FocusNext)
        }
        InputKey::BackTab | InputKey::Up | InputKey::Left | InputKey::Char('k') => {
            Some(Message::FocusPrevious)
        }

        InputKey::Enter | InputKey::Char(' ') => Some(Message::Activate),

        // Shortcut for the Add button
        InputKey::Char('a') => Some(Message::AddCustomEditor),

        _ => None,
    }
}

/// Handle key events while typing into a name or path cell
fn handle_key_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::EditCancel),
        InputKey::Enter | InputKey::Tab => Some(Message::EditCommit),
        InputKey::Char(c) => Some(Message::EditCharInput(c)),
        InputKey::Backspace => Some(Message::EditBackspace),
        InputKey::Delete => Some(Message::EditClear),
        _ => None,
    }
}

/// Handle key events while a dropdown is open
fn handle_key_choosing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ChoiceCancel),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ChoiceCommit),
        InputKey::Down | InputKey::Char('j') => Some(Message::ChoiceNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::ChoicePrevious),
        _ => None,
    }
}
