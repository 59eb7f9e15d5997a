use crate::api::ApiClient;
use crate::app::App;

use super::action_queue::{Action, ActionTx};
use super::debounce::Debouncer;

pub(super) fn run_action(
    action: Action,
    app: &mut App,
    client: &ApiClient,
    action_tx: &ActionTx,
    debouncer: &mut Debouncer,
) {
    match action {
        Action::CommitTime { field, raw } => {
            app.commit_time_edit(field, &raw);
        }
        Action::Search => {
            if app.is_loading {
                return;
            }
            // Pending text is flushed by prepare_search, the timers are moot.
            debouncer.cancel_all();
            start_search(app, client, action_tx);
        }
        Action::SearchFinished { query, result } => {
            app.is_loading = false;
            match result {
                Ok(results) => {
                    tracing::info!(
                        rooms = results.rooms.len(),
                        buildings = results.per_building.len(),
                        "Search finished"
                    );
                    app.apply_search_results(query, results);
                }
                Err(message) => {
                    tracing::warn!(error = %message, "Search failed");
                    app.set_error(message, None);
                }
            }
        }
        Action::LoadFreshness => {
            let client = client.clone();
            let tx = action_tx.clone();
            tokio::spawn(async move {
                let freshness = client.data_freshness().await;
                let _ = tx.send(Action::FreshnessLoaded(freshness));
            });
        }
        Action::FreshnessLoaded(freshness) => {
            app.freshness = Some(freshness);
        }
    }
}

fn start_search(app: &mut App, client: &ApiClient, action_tx: &ActionTx) {
    let Some(query) = app.prepare_search() else {
        tracing::debug!("Search blocked by validation");
        return;
    };

    app.is_loading = true;
    let client = client.clone();
    let tx = action_tx.clone();
    tokio::spawn(async move {
        let result = client
            .search(&query)
            .await
            .map_err(|e| format!("{:#}", e));
        let _ = tx.send(Action::SearchFinished { query, result });
    });
}

#[cfg(test)]
mod tests {
    use super::super::action_queue::channel;
    use super::*;
    use crate::app::{AllowedRange, NoticeLevel, WindowField};
    use crate::config::RoomFinderConfig;
    use std::time::Duration;
    use time::macros::datetime;

    fn test_app() -> App {
        App::new(
            &RoomFinderConfig::default(),
            AllowedRange::default(),
            datetime!(2025-10-20 10:00),
        )
    }

    #[tokio::test]
    async fn search_round_trip_fills_results() {
        let mut app = test_app();
        let client = ApiClient::dev();
        let (tx, mut rx) = channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(350), tx.clone());

        run_action(Action::Search, &mut app, &client, &tx, &mut debouncer);
        assert!(app.is_loading);

        let finished = rx.recv().await.unwrap();
        assert!(matches!(finished, Action::SearchFinished { .. }));
        run_action(finished, &mut app, &client, &tx, &mut debouncer);

        assert!(!app.is_loading);
        assert!(app.last_query.is_some());
        assert!(app.results.total_rooms() > 0);
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Info);
    }

    #[tokio::test]
    async fn search_is_ignored_while_loading() {
        let mut app = test_app();
        app.is_loading = true;
        let client = ApiClient::dev();
        let (tx, mut rx) = channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(350), tx.clone());

        run_action(Action::Search, &mut app, &client, &tx, &mut debouncer);
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn invalid_window_does_not_fetch() {
        let mut app = test_app();
        app.time_window.commit_start("22:30");
        app.time_window.commit_end("23:00");
        let client = ApiClient::dev();
        let (tx, _rx) = channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(350), tx.clone());

        run_action(Action::Search, &mut app, &client, &tx, &mut debouncer);
        assert!(!app.is_loading);
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn failed_search_keeps_previous_results() {
        let mut app = test_app();
        let client = ApiClient::dev();
        let (tx, _rx) = channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(350), tx.clone());
        let query = app.prepare_search().unwrap();
        app.apply_search_results(query, client.search(&query).await.unwrap());
        let before = app.results.total_rooms();

        app.is_loading = true;
        run_action(
            Action::SearchFinished {
                query,
                result: Err("Failed to fetch free rooms: connection refused".to_string()),
            },
            &mut app,
            &client,
            &tx,
            &mut debouncer,
        );

        assert!(!app.is_loading);
        assert_eq!(app.results.total_rooms(), before);
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.contains("connection refused"));
    }

    #[tokio::test]
    async fn stale_commit_action_is_ignored() {
        let mut app = test_app();
        let client = ApiClient::dev();
        let (tx, _rx) = channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(350), tx.clone());
        app.time_window.on_edit_end("14:00");
        app.time_window.on_edit_end("15:00");

        run_action(
            Action::CommitTime {
                field: WindowField::End,
                raw: "14:00".to_string(),
            },
            &mut app,
            &client,
            &tx,
            &mut debouncer,
        );
        assert_eq!(app.time_window.end().to_string(), "13:00");
    }
}
