//! iprefs-app - Pane state and orchestration for the integrations preferences pane
//!
//! Implements the TEA (The Elm Architecture) pattern: [`AppState`] is the
//! model, [`handler::update`] the update function, and [`view::PaneView`] the
//! render description. The selection logic itself lives in [`integrations`]
//! as pure transitions. Settings persistence and the settings-backed owner
//! live alongside so front-ends only deal with terminals.

pub mod actions;
pub mod config;
pub mod handler;
pub mod headless;
pub mod input_key;
pub mod integrations;
pub mod inventory;
pub mod message;
pub mod notification;
pub mod owner;
pub mod process;
pub mod props;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use integrations::{IntegrationsState, Transition};
pub use inventory::IntegrationsInventory;
pub use message::Message;
pub use notification::{IntegrationsOwner, Notification};
pub use owner::PreferencesStore;
pub use props::IntegrationsProps;
pub use state::AppState;
pub use view::PaneView;
