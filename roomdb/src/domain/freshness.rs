use serde::Deserialize;
use super::{parse_timestamp, Timestamp};

/// How current the booking data behind the search is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFreshness {
    pub last_updated: Option<Timestamp>,
    pub earliest_booking_start: Option<Timestamp>,
    pub latest_booking_end: Option<Timestamp>,
}

/// A row of `get_table_last_modified`. Depending on the table's statistics
/// only some of the columns are populated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableModifiedRow {
    pub last_modified: Option<String>,
    pub last_autoanalyze: Option<String>,
    pub last_autovacuum: Option<String>,
}

impl TableModifiedRow {
    /// The best available modification time: the explicit modification
    /// stamp, falling back to the last autoanalyze and then autovacuum run.
    pub fn modified_at(&self) -> Option<Timestamp> {
        [
            &self.last_modified,
            &self.last_autoanalyze,
            &self.last_autovacuum,
        ]
        .into_iter()
        .flatten()
        .find_map(|raw| parse_timestamp(raw))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BookingStartRow {
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BookingEndRow {
    pub end_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn modified_at_prefers_explicit_stamp() {
        let row = TableModifiedRow {
            last_modified: Some("2025-10-01T08:00:00+00:00".to_string()),
            last_autoanalyze: Some("2025-10-02T08:00:00+00:00".to_string()),
            last_autovacuum: None,
        };
        assert_eq!(row.modified_at(), Some(Timestamp::Zoned(datetime!(2025-10-01 08:00 UTC))));
    }

    #[test]
    fn modified_at_falls_back_in_order() {
        let row: TableModifiedRow = serde_json::from_str(
            r#"{"last_modified":null,"last_autoanalyze":null,"last_autovacuum":"2025-09-30T23:10:00+00:00"}"#,
        )
        .unwrap();
        assert_eq!(row.modified_at(), Some(Timestamp::Zoned(datetime!(2025-09-30 23:10 UTC))));
    }

    #[test]
    fn modified_at_none_when_empty() {
        assert_eq!(TableModifiedRow::default().modified_at(), None);
    }
}
