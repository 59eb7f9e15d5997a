use crate::time_utils::{format_local_datetime, format_local_hm};
use roomdb::domain::Timestamp;

/// Render a partial or complete time string with a block cursor.
/// - len >= 5 ("HH:MM"): display as-is, no cursor
/// - len < 5: show typed chars + '█' + space padding to fill 5-char slot
pub fn time_input_display(s: &str) -> String {
    if s.len() >= 5 {
        format!("[{}]", s)
    } else {
        let spaces = 5 - s.len() - 1;
        format!("[{}█{}]", s, " ".repeat(spaces))
    }
}

/// Local `HH:MM` of the room's next booking, or "FREE ALL DAY" when there is
/// none.
pub fn format_earliest_booking(at: Option<Timestamp>) -> String {
    at.map(format_local_hm)
        .unwrap_or_else(|| "FREE ALL DAY".to_string())
}

/// Gap between start and end as `3h 00m`. A negative gap (end typed before
/// start) keeps its sign.
pub fn format_gap(minutes: i32) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let abs = minutes.unsigned_abs();
    format!("{}{}h {:02}m", sign, abs / 60, abs % 60)
}

pub fn format_optional_datetime(at: Option<Timestamp>) -> String {
    at.map(format_local_datetime)
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn format_booking_span(first: Option<Timestamp>, last: Option<Timestamp>) -> String {
    if first.is_none() && last.is_none() {
        return "Unknown".to_string();
    }
    let date = |at: Option<Timestamp>| {
        at.map(|dt| format_local_datetime(dt)[..10].to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    format!("{} to {}", date(first), date(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn time_input_pads_with_cursor() {
        assert_eq!(time_input_display(""), "[█    ]");
        assert_eq!(time_input_display("13:"), "[13:█ ]");
        assert_eq!(time_input_display("13:45"), "[13:45]");
    }

    #[test]
    fn gap_keeps_sign() {
        assert_eq!(format_gap(180), "3h 00m");
        assert_eq!(format_gap(95), "1h 35m");
        assert_eq!(format_gap(-60), "-1h 00m");
    }

    #[test]
    fn missing_booking_reads_free() {
        assert_eq!(format_earliest_booking(None), "FREE ALL DAY");
    }

    #[test]
    fn booking_without_offset_is_shown_as_stored() {
        assert_eq!(
            format_earliest_booking(Some(Timestamp::Local(datetime!(2025-10-20 10:00)))),
            "10:00"
        );
    }

    #[test]
    fn zoned_booking_is_converted() {
        // Tests run without a cached local offset, so local time is UTC.
        assert_eq!(
            format_earliest_booking(Some(Timestamp::Zoned(datetime!(2025-10-20 15:30 UTC)))),
            "15:30"
        );
    }

    #[test]
    fn freshness_falls_back_to_unknown() {
        assert_eq!(format_optional_datetime(None), "Unknown");
        assert_eq!(format_booking_span(None, None), "Unknown");
        assert_eq!(
            format_booking_span(Some(Timestamp::Local(datetime!(2025-09-02 08:00))), None),
            "2025-09-02 to ?"
        );
    }
}
