use crate::app::WindowField;
use roomdb::domain::{DataFreshness, SearchQuery};
use roomdb::SearchResults;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    /// A time input's debounce delay elapsed with `raw` as its text.
    CommitTime {
        field: WindowField,
        raw: String,
    },
    Search,
    SearchFinished {
        query: SearchQuery,
        result: Result<SearchResults, String>,
    },
    LoadFreshness,
    FreshnessLoaded(DataFreshness),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
