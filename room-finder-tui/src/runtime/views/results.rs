use crate::app::App;
use crate::browser;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_buildings_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.results.building_focus_up(),
        KeyCode::Down | KeyCode::Char('j') => app.results.building_focus_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_building_filter(),
        KeyCode::Esc => app.results.clear_filter(),
        KeyCode::Char('r') => enqueue_action(action_tx, Action::Search),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

pub(super) fn handle_rooms_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.results.room_focus_up(),
        KeyCode::Down | KeyCode::Char('j') => app.results.room_focus_down(),
        KeyCode::Right | KeyCode::Char('n') => {
            app.results.next_page();
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.results.prev_page();
        }
        KeyCode::Enter | KeyCode::Char('o') => open_focused_room(app),
        KeyCode::Esc => app.results.clear_filter(),
        KeyCode::Char('r') => enqueue_action(action_tx, Action::Search),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn open_focused_room(app: &mut App) {
    let Some(url) = app.results.focused_room().map(|room| room.details_url()) else {
        return;
    };
    tracing::debug!(%url, "Opening room details");
    match browser::open_url(&url) {
        Ok(()) => app.set_info(format!("Opened {}", url)),
        Err(e) => {
            tracing::warn!(%url, error = %e, "Could not open room details");
            app.set_error(format!("Could not open {}: {}", url, e), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::action_queue::channel;
    use super::super::tests::{press, test_app};
    use super::*;
    use roomdb::domain::{BuildingCount, FreeRoom};
    use roomdb::SearchResults;

    fn app_with_rooms(count: u32) -> App {
        let mut app = test_app();
        let rooms: Vec<FreeRoom> = (0..count)
            .map(|i| FreeRoom {
                building: if i % 2 == 0 { "DMP" } else { "ESB" }.to_string(),
                room_number: (100 + i).to_string(),
                capacity: Some(40),
                features: None,
                earliest_booking: None,
            })
            .collect();
        let query = app.prepare_search().unwrap();
        app.apply_search_results(
            query,
            SearchResults {
                per_building: vec![
                    BuildingCount {
                        building: "DMP".to_string(),
                        free_room_count: count.div_ceil(2),
                    },
                    BuildingCount {
                        building: "ESB".to_string(),
                        free_room_count: count / 2,
                    },
                ],
                rooms,
            },
        );
        app
    }

    #[test]
    fn enter_on_building_toggles_filter() {
        let mut app = app_with_rooms(6);
        let (tx, _rx) = channel();

        handle_buildings_key(press(KeyCode::Char('j')), &mut app, &tx);
        handle_buildings_key(press(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.results.selected_building(), Some("DMP"));
        assert_eq!(app.results.filtered_count(), 3);

        handle_buildings_key(press(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.results.selected_building(), None);
    }

    #[test]
    fn esc_clears_building_filter() {
        let mut app = app_with_rooms(6);
        let (tx, _rx) = channel();

        handle_buildings_key(press(KeyCode::Down), &mut app, &tx);
        handle_buildings_key(press(KeyCode::Down), &mut app, &tx);
        handle_buildings_key(press(KeyCode::Char(' ')), &mut app, &tx);
        assert_eq!(app.results.selected_building(), Some("ESB"));

        handle_rooms_key(press(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.results.selected_building(), None);
    }

    #[test]
    fn page_keys_saturate() {
        let mut app = app_with_rooms(20);
        let (tx, _rx) = channel();

        handle_rooms_key(press(KeyCode::Char('p')), &mut app, &tx);
        assert_eq!(app.results.page(), 0);
        handle_rooms_key(press(KeyCode::Char('n')), &mut app, &tx);
        handle_rooms_key(press(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.results.page(), 1);
        assert_eq!(app.results.current_page().len(), 5);
        handle_rooms_key(press(KeyCode::Left), &mut app, &tx);
        assert_eq!(app.results.page(), 0);
    }

    #[test]
    fn r_reruns_search_and_q_quits() {
        let mut app = app_with_rooms(1);
        let (tx, mut rx) = channel();

        handle_rooms_key(press(KeyCode::Char('r')), &mut app, &tx);
        assert!(matches!(rx.try_recv(), Ok(Action::Search)));

        handle_rooms_key(press(KeyCode::Char('q')), &mut app, &tx);
        assert!(!app.running);
    }
}
