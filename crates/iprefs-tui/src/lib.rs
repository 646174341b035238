//! iprefs-tui - Terminal UI for the integrations preferences pane
//!
//! Renders [`iprefs_app::PaneView`] with ratatui, turns crossterm key events
//! into [`iprefs_app::InputKey`]s and drives the app's message loop.

pub mod event;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
