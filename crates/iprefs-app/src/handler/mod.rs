//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per input mode
//! - `pane`: Focus, edit and dropdown handlers

pub(crate) mod keys;
pub(crate) mod pane;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::notification::Notification;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver owner callbacks, in order
    Notify(Vec<Notification>),

    /// Open a URL with the platform's default handler
    OpenUrl(String),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Notify the owner, or do nothing when there is nothing to say
    pub fn notify(notifications: Vec<Notification>) -> Self {
        if notifications.is_empty() {
            Self::none()
        } else {
            Self::action(UpdateAction::Notify(notifications))
        }
    }
}
