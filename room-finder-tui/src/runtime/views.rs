use crate::app::{App, FocusedPane};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::action_queue::{Action, ActionTx};
use super::debounce::Debouncer;

mod form;
mod results;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(
    key: KeyEvent,
    app: &mut App,
    action_tx: &ActionTx,
    debouncer: &mut Debouncer,
) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => match app.focused {
            FocusedPane::Date | FocusedPane::StartTime | FocusedPane::EndTime => {
                form::handle_form_key(key, app, action_tx, debouncer)
            }
            FocusedPane::Buildings => results::handle_buildings_key(key, app, action_tx),
            FocusedPane::Rooms => results::handle_rooms_key(key, app, action_tx),
        },
    }
}
