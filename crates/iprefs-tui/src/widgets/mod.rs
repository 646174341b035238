//! Custom widget components

pub mod integrations_pane;

pub use integrations_pane::IntegrationsPane;
