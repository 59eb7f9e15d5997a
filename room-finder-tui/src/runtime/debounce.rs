use crate::app::WindowField;
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;

use super::action_queue::{Action, ActionTx};

/// One cancellable delayed commit per time input. Restarting a field aborts
/// its previous timer, so only the last edit inside the delay is committed.
pub(super) struct Debouncer {
    delay: Duration,
    action_tx: ActionTx,
    timers: HashMap<WindowField, JoinHandle<()>>,
}

impl Debouncer {
    pub(super) fn new(delay: Duration, action_tx: ActionTx) -> Self {
        Self {
            delay,
            action_tx,
            timers: HashMap::new(),
        }
    }

    pub(super) fn schedule(&mut self, field: WindowField, raw: String) {
        self.cancel(field);

        let delay = self.delay;
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::CommitTime { field, raw });
        });
        self.timers.insert(field, handle);
    }

    pub(super) fn cancel(&mut self, field: WindowField) {
        if let Some(handle) = self.timers.remove(&field) {
            handle.abort();
        }
    }

    /// Drop every pending timer, e.g. when the form is submitted and the
    /// pending text is flushed directly.
    pub(super) fn cancel_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::super::action_queue::{channel, ActionRx};
    use super::*;

    const DELAY: Duration = Duration::from_millis(350);

    fn drain(rx: &mut ActionRx) -> Vec<(WindowField, String)> {
        let mut commits = Vec::new();
        while let Ok(action) = rx.try_recv() {
            if let Action::CommitTime { field, raw } = action {
                commits.push((field, raw));
            }
        }
        commits
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_edits_commit_once_with_last_value() {
        let (tx, mut rx) = channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.schedule(WindowField::Start, "14:".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(WindowField::Start, "14:30".to_string());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(
            drain(&mut rx),
            vec![(WindowField::Start, "14:30".to_string())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fields_are_debounced_independently() {
        let (tx, mut rx) = channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.schedule(WindowField::Start, "09:00".to_string());
        debouncer.schedule(WindowField::End, "11:00".to_string());
        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;

        let mut commits = drain(&mut rx);
        commits.sort_by_key(|(field, _)| *field == WindowField::End);
        assert_eq!(
            commits,
            vec![
                (WindowField::Start, "09:00".to_string()),
                (WindowField::End, "11:00".to_string()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_drops_pending_commits() {
        let (tx, mut rx) = channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.schedule(WindowField::End, "12:00".to_string());
        debouncer.cancel_all();
        tokio::time::sleep(DELAY * 2).await;

        assert!(drain(&mut rx).is_empty());
    }
}
