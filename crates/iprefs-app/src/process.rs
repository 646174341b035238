//! Message processing with owner round-trips
//!
//! Runs the TEA update loop for one incoming message. Owner notifications
//! are delivered in the same turn, after which the owner's fresh props are
//! fed back through reconciliation so the pane and the settings file never
//! drift apart.

use std::collections::VecDeque;

use iprefs_core::prelude::*;

use crate::actions::open_url;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::notification::deliver_all;
use crate::owner::PreferencesStore;
use crate::state::AppState;

/// Process a message and everything it leads to
pub fn process_message(state: &mut AppState, message: Message, owner: &mut PreferencesStore) {
    let mut queue = VecDeque::from([message]);

    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);

        if let Some(action) = result.action {
            handle_action(state, action, owner, &mut queue);
        }

        if let Some(next) = result.message {
            queue.push_back(next);
        }
    }
}

fn handle_action(
    state: &mut AppState,
    action: UpdateAction,
    owner: &mut PreferencesStore,
    queue: &mut VecDeque<Message>,
) {
    match action {
        UpdateAction::Notify(notifications) => {
            deliver_all(&notifications, owner);

            if owner.take_changed() {
                queue.push_back(Message::OwnerStatus(owner.last_error().map(str::to_string)));
                queue.push_back(Message::PropsReceived(owner.props()));
            }
        }

        UpdateAction::OpenUrl(url) => {
            if let Err(e) = open_url(&url) {
                warn!("Could not open {}: {}", url, e);
                state.view.error = Some(format!("Could not open {}", url));
            }
        }
    }
}
