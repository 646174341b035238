//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use iprefs_app::message::Message;
use iprefs_app::process::process_message;
use iprefs_app::signals::spawn_signal_handler;
use iprefs_app::{AppState, PaneView, PreferencesStore};
use iprefs_core::prelude::*;
use iprefs_core::Platform;

use crate::widgets::IntegrationsPane;
use crate::{event, terminal};

/// Run the pane until the user quits or a termination signal arrives
pub async fn run(mut store: PreferencesStore, platform: Platform) -> Result<()> {
    let mut term = terminal::init()?;

    let mut state = AppState::new(store.props(), platform, store.suggested_editor());
    info!(
        "Pane started ({:?}, {} editors, {} shells)",
        platform,
        state.props.available_editors.len(),
        state.props.available_shells.len()
    );

    // Create unified message channel (for signal handler, etc.)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    spawn_signal_handler(msg_tx.clone());

    // The first props event reconciles whatever the settings file held
    msg_tx
        .send(Message::PropsReceived(store.props()))
        .await
        .map_err(|e| Error::channel_send(e.to_string()))?;

    let result = run_loop(&mut term, &mut state, &mut store, msg_rx);

    let restored = terminal::restore().context("Leaving the pane");
    info!("Pane closed");

    result.and(restored)
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    store: &mut PreferencesStore,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.is_quitting() {
        // Process external messages (from signal handler, etc.)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, store);
        }
        if state.is_quitting() {
            break;
        }

        let view = PaneView::build(state);
        terminal.draw(|frame| frame.render_widget(IntegrationsPane::new(&view), frame.area()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, store);
        }
    }

    Ok(())
}
