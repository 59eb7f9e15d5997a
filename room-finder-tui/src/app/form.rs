use super::time_of_day::TimeOfDay;
use time::macros::format_description;
use time::{Date, Duration};

/// Minutes moved by one Up/Down press on a time input.
pub const TIME_STEP_MINUTES: i32 = 15;

/// Apply one typed character to a partial `HH:MM` string and return the new
/// text. A full value is replaced by the next keystroke, a leading 3-9 is
/// read as `0X:` and the colon after the hour is inserted automatically.
pub fn time_input_push(current: &str, c: char) -> String {
    let mut next = if current.len() >= 5 {
        String::new()
    } else {
        current.to_string()
    };
    if !c.is_ascii_digit() {
        return next;
    }

    if next.is_empty() && ('3'..='9').contains(&c) {
        next.push('0');
        next.push(c);
        next.push(':');
    } else {
        next.push(c);
        if next.len() == 2 {
            next.push(':');
        }
    }
    next
}

/// Remove the last typed character. Removing the auto-inserted colon takes
/// the hour digit before it too, so the colon is never left to be typed.
pub fn time_input_backspace(current: &str) -> String {
    let mut next = current.to_string();
    if next.pop() == Some(':') {
        next.pop();
    }
    next
}

/// Step a time input by `steps` increments of [`TIME_STEP_MINUTES`], snapping
/// to the step grid first. Unparseable text steps from `fallback`.
pub fn time_input_step(current: &str, fallback: TimeOfDay, steps: i32) -> String {
    let base = TimeOfDay::parse(current).unwrap_or(fallback).minutes();
    let snapped = if steps > 0 {
        base - base.rem_euclid(TIME_STEP_MINUTES)
    } else {
        base + (TIME_STEP_MINUTES - base.rem_euclid(TIME_STEP_MINUTES)) % TIME_STEP_MINUTES
    };
    TimeOfDay::saturating_from_minutes(snapped + steps * TIME_STEP_MINUTES).to_string()
}

pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Accept only characters that can appear in `YYYY-MM-DD`, up to its length.
pub fn date_input_accepts(current: &str, c: char) -> bool {
    current.len() < 10 && (c.is_ascii_digit() || c == '-')
}

/// Move a date input by `days`. Unparseable text moves from `fallback`.
pub fn date_input_step(current: &str, fallback: Date, days: i64) -> String {
    let base = parse_date(current).unwrap_or(fallback);
    format_date(base.saturating_add(Duration::days(days)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn type_all(start: &str, keys: &str) -> String {
        keys.chars().fold(start.to_string(), |acc, c| time_input_push(&acc, c))
    }

    #[test]
    fn typing_inserts_colon_after_hour() {
        assert_eq!(type_all("", "1"), "1");
        assert_eq!(type_all("", "13"), "13:");
        assert_eq!(type_all("", "1345"), "13:45");
    }

    #[test]
    fn leading_high_digit_is_single_digit_hour() {
        assert_eq!(type_all("", "9"), "09:");
        assert_eq!(type_all("", "930"), "09:30");
    }

    #[test]
    fn full_value_is_replaced_by_next_digit() {
        assert_eq!(time_input_push("13:45", '1'), "1");
        assert_eq!(time_input_push("13:45", '8'), "08:");
    }

    #[test]
    fn non_digits_are_ignored() {
        assert_eq!(time_input_push("1", 'x'), "1");
        assert_eq!(time_input_push("12:", ':'), "12:");
    }

    #[test]
    fn backspace_removes_auto_colon() {
        assert_eq!(time_input_backspace("13:"), "1");
        assert_eq!(time_input_backspace("13:4"), "13:");
        assert_eq!(time_input_backspace(""), "");
    }

    #[test]
    fn retyping_minutes_after_backspace_parses() {
        let typed = type_all("", "1345");
        let erased = time_input_backspace(&time_input_backspace(&typed));
        assert_eq!(erased, "13:");
        let retyped = type_all(&erased, "30");
        assert_eq!(retyped, "13:30");
        assert_eq!(TimeOfDay::parse(&retyped).unwrap().minutes(), 13 * 60 + 30);
    }

    #[test]
    fn step_snaps_to_grid() {
        let fallback = TimeOfDay::parse("12:00").unwrap();
        assert_eq!(time_input_step("10:00", fallback, 1), "10:15");
        assert_eq!(time_input_step("10:07", fallback, 1), "10:15");
        assert_eq!(time_input_step("10:07", fallback, -1), "10:00");
        assert_eq!(time_input_step("10:00", fallback, -1), "09:45");
        assert_eq!(time_input_step("1", fallback, 1), "12:15");
    }

    #[test]
    fn step_stays_within_day() {
        let fallback = TimeOfDay::parse("12:00").unwrap();
        assert_eq!(time_input_step("23:50", fallback, 1), "23:59");
        assert_eq!(time_input_step("00:00", fallback, -1), "00:00");
    }

    #[test]
    fn dates_parse_and_step() {
        assert_eq!(parse_date("2025-10-20"), Some(date!(2025 - 10 - 20)));
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("20-10-2025"), None);
        assert_eq!(
            date_input_step("2025-12-31", date!(2025 - 01 - 01), 1),
            "2026-01-01"
        );
        assert_eq!(
            date_input_step("garbage", date!(2025 - 03 - 01), -1),
            "2025-02-28"
        );
    }

    #[test]
    fn date_input_filters_characters() {
        assert!(date_input_accepts("2025", '-'));
        assert!(!date_input_accepts("2025", 'a'));
        assert!(!date_input_accepts("2025-10-20", '1'));
    }
}
