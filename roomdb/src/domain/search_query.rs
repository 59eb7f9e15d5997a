use serde::Serialize;
use time::{Date, Time};

/// The window sent to the availability procedures: one calendar date and a
/// start/end wall-clock time on that date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery {
    pub date: Date,
    pub start: Time,
    pub end: Time,
}

/// Body of the `free_rooms_*` procedure calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowParams {
    pub p_start: String,
    pub p_end: String,
}

impl SearchQuery {
    pub fn new(date: Date, start: Time, end: Time) -> Self {
        Self { date, start, end }
    }

    pub fn as_params(&self) -> WindowParams {
        WindowParams {
            p_start: local_timestamp(self.date, self.start),
            p_end: local_timestamp(self.date, self.end),
        }
    }
}

fn local_timestamp(date: Date, time: Time) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        date.year(),
        date.month() as u8,
        date.day(),
        time.hour(),
        time.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn params_are_local_minute_timestamps() {
        let query = SearchQuery::new(date!(2025 - 03 - 04), time!(7:05), time!(10:00));
        let params = query.as_params();
        assert_eq!(params.p_start, "2025-03-04T07:05");
        assert_eq!(params.p_end, "2025-03-04T10:00");
    }

    #[test]
    fn params_serialize_with_procedure_argument_names() {
        let query = SearchQuery::new(date!(2025 - 11 - 20), time!(13:00), time!(14:30));
        let json = serde_json::to_value(query.as_params()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "p_start": "2025-11-20T13:00",
                "p_end": "2025-11-20T14:30",
            })
        );
    }
}
