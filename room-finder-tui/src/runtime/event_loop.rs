use crate::api::ApiClient;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::debounce::Debouncer;
use super::views::handle_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
    debounce_delay: Duration,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let mut debouncer = Debouncer::new(debounce_delay, action_tx.clone());

    // Search the default window right away and look up data freshness.
    let _ = action_tx.send(Action::Search);
    let _ = action_tx.send(Action::LoadFreshness);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(key, app, &action_tx, &mut debouncer);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client, &action_tx, &mut debouncer);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
