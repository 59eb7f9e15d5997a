use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::super::debounce::Debouncer;
use super::enqueue_action;

pub(super) fn handle_form_key(
    key: KeyEvent,
    app: &mut App,
    action_tx: &ActionTx,
    debouncer: &mut Debouncer,
) {
    let edit = match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => app.form_clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input_char(c)
        }
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Up => app.form_step(1),
        KeyCode::Down => app.form_step(-1),
        KeyCode::Enter => {
            enqueue_action(action_tx, Action::Search);
            None
        }
        _ => None,
    };

    if let Some((field, raw)) = edit {
        debouncer.schedule(field, raw);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::action_queue::channel;
    use super::super::tests::{ctrl, press, test_app};
    use super::*;
    use crate::app::{FocusedPane, WindowField};
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(350);

    #[tokio::test(start_paused = true)]
    async fn typing_a_time_commits_after_the_delay() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        let mut debouncer = Debouncer::new(DELAY, tx.clone());
        app.focused = FocusedPane::StartTime;

        for c in "1130".chars() {
            handle_form_key(press(KeyCode::Char(c)), &mut app, &tx, &mut debouncer);
        }
        assert_eq!(app.time_window.display_value(WindowField::Start), "11:30");
        assert_eq!(app.time_window.start().to_string(), "10:00");

        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
        let action = rx.try_recv().unwrap();
        let Action::CommitTime { field, raw } = action else {
            panic!("expected a commit, got {:?}", action);
        };
        assert_eq!((field, raw.as_str()), (WindowField::Start, "11:30"));
        assert!(rx.try_recv().is_err());

        app.commit_time_edit(field, &raw);
        assert_eq!(app.time_window.start().to_string(), "11:30");
        assert_eq!(app.time_window.end().to_string(), "14:30");
    }

    #[tokio::test(start_paused = true)]
    async fn enter_queues_a_search() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        let mut debouncer = Debouncer::new(DELAY, tx.clone());

        handle_form_key(press(KeyCode::Enter), &mut app, &tx, &mut debouncer);
        assert!(matches!(rx.try_recv(), Ok(Action::Search)));
    }

    #[tokio::test(start_paused = true)]
    async fn ctrl_x_clears_the_focused_time() {
        let mut app = test_app();
        let (tx, _rx) = channel();
        let mut debouncer = Debouncer::new(DELAY, tx.clone());
        app.focused = FocusedPane::EndTime;

        handle_form_key(ctrl('x'), &mut app, &tx, &mut debouncer);
        assert_eq!(app.time_window.pending(WindowField::End), Some(""));
    }

    #[tokio::test(start_paused = true)]
    async fn arrows_step_the_focused_time() {
        let mut app = test_app();
        let (tx, _rx) = channel();
        let mut debouncer = Debouncer::new(DELAY, tx.clone());
        app.focused = FocusedPane::EndTime;

        handle_form_key(press(KeyCode::Up), &mut app, &tx, &mut debouncer);
        assert_eq!(app.time_window.display_value(WindowField::End), "13:15");
        handle_form_key(press(KeyCode::Down), &mut app, &tx, &mut debouncer);
        handle_form_key(press(KeyCode::Down), &mut app, &tx, &mut debouncer);
        assert_eq!(app.time_window.display_value(WindowField::End), "12:45");
    }
}
