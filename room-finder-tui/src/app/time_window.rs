//! Start/end time inputs for a search.
//!
//! Raw keystrokes are stored as pending text and only committed once the
//! debounce timer for that field fires. Committing a new start moves the end
//! along with it so the gap between them is kept; committing a new end
//! redefines the gap. Nothing is clamped while typing: out-of-range values are
//! only pulled into the allowed range by [`TimeWindow::prepare_for_submit`].

use std::fmt;

use thiserror::Error;

use super::time_of_day::{AllowedRange, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowField {
    Start,
    End,
}

impl fmt::Display for WindowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowField::Start => write!(f, "start"),
            WindowField::End => write!(f, "end"),
        }
    }
}

/// Which bound a value was pulled back to at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampDirection {
    TooEarly,
    TooLate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampNotice {
    pub field: WindowField,
    pub direction: ClampDirection,
    pub bound: TimeOfDay,
}

impl fmt::Display for ClampNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            ClampDirection::TooEarly => write!(
                f,
                "Time cannot be earlier than {}.",
                self.bound.to_12h_string()
            ),
            ClampDirection::TooLate => write!(
                f,
                "Time cannot be later than {}.",
                self.bound.to_12h_string()
            ),
        }
    }
}

/// A window ready to be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// Whether either endpoint was changed by clamping.
    pub was_clamped: bool,
    pub notices: Vec<ClampNotice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("End time must be after start time.")]
    EndNotAfterStart { start: TimeOfDay, end: TimeOfDay },
}

/// The value the other endpoint takes when `edited` is set to `new_value`
/// and `gap_minutes` (end minus start) is kept. The result is clamped into
/// `range`, so it never wraps past midnight.
pub fn adjust_companion(
    edited: WindowField,
    new_value: TimeOfDay,
    gap_minutes: i32,
    range: &AllowedRange,
) -> TimeOfDay {
    match edited {
        WindowField::Start => range.clamp_minutes(new_value.minutes() + gap_minutes),
        WindowField::End => range.clamp_minutes(new_value.minutes() - gap_minutes),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
    gap_minutes: i32,
    pending_start: Option<String>,
    pending_end: Option<String>,
    range: AllowedRange,
}

impl TimeWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay, range: AllowedRange) -> Self {
        Self {
            start,
            end,
            gap_minutes: end.minutes_since(start),
            pending_start: None,
            pending_end: None,
            range,
        }
    }

    /// The window a fresh session opens with: `now` (kept far enough from
    /// the end of the range for the whole gap to fit) plus `gap_minutes`.
    pub fn starting_at(now: TimeOfDay, gap_minutes: i32, range: AllowedRange) -> Self {
        let latest_start = range
            .clamp_minutes(range.end().minutes() - gap_minutes)
            .max(range.start());
        let start = now.clamp(range.start(), latest_start);
        let end = adjust_companion(WindowField::Start, start, gap_minutes, &range);
        Self {
            start,
            end,
            gap_minutes,
            pending_start: None,
            pending_end: None,
            range,
        }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn gap_minutes(&self) -> i32 {
        self.gap_minutes
    }

    pub fn range(&self) -> &AllowedRange {
        &self.range
    }

    pub fn committed(&self, field: WindowField) -> TimeOfDay {
        match field {
            WindowField::Start => self.start,
            WindowField::End => self.end,
        }
    }

    pub fn pending(&self, field: WindowField) -> Option<&str> {
        match field {
            WindowField::Start => self.pending_start.as_deref(),
            WindowField::End => self.pending_end.as_deref(),
        }
    }

    /// What the input for `field` should show: the text being typed, or the
    /// committed value.
    pub fn display_value(&self, field: WindowField) -> String {
        self.pending(field)
            .map(str::to_string)
            .unwrap_or_else(|| self.committed(field).to_string())
    }

    /// Record a raw edit. Committed values are untouched; the caller restarts
    /// the field's debounce timer.
    pub fn on_edit(&mut self, field: WindowField, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            WindowField::Start => self.pending_start = Some(raw),
            WindowField::End => self.pending_end = Some(raw),
        }
    }

    pub fn on_edit_start(&mut self, raw: impl Into<String>) {
        self.on_edit(WindowField::Start, raw);
    }

    pub fn on_edit_end(&mut self, raw: impl Into<String>) {
        self.on_edit(WindowField::End, raw);
    }

    /// Whether `raw` is still the latest edit of `field`. A timer that fired
    /// for an edit which has since been replaced must not commit.
    pub fn is_latest_edit(&self, field: WindowField, raw: &str) -> bool {
        self.pending(field) == Some(raw)
    }

    pub fn commit(&mut self, field: WindowField, raw: &str) -> bool {
        match field {
            WindowField::Start => self.commit_start(raw),
            WindowField::End => self.commit_end(raw),
        }
    }

    /// Commit a debounced start edit. Returns whether anything changed;
    /// unparseable input is dropped without touching the window.
    pub fn commit_start(&mut self, raw: &str) -> bool {
        self.pending_start = None;
        let Some(start) = TimeOfDay::parse(raw) else {
            tracing::debug!(raw, "discarding unparseable start time");
            return false;
        };

        self.start = start;
        self.end = adjust_companion(WindowField::Start, start, self.gap_minutes, &self.range);
        true
    }

    /// Commit a debounced end edit. The gap is redefined against the current
    /// start, which may itself be out of range.
    pub fn commit_end(&mut self, raw: &str) -> bool {
        self.pending_end = None;
        let Some(end) = TimeOfDay::parse(raw) else {
            tracing::debug!(raw, "discarding unparseable end time");
            return false;
        };

        self.end = end;
        self.gap_minutes = end.minutes_since(self.start);
        true
    }

    /// Commit whatever is still pending, start first. Used when a search is
    /// triggered before the timers have fired.
    pub fn flush_pending(&mut self) {
        if let Some(raw) = self.pending_start.clone() {
            self.commit_start(&raw);
        }
        if let Some(raw) = self.pending_end.clone() {
            self.commit_end(&raw);
        }
    }

    /// Clamp both endpoints into the allowed range and check the result is a
    /// non-empty window. On success the clamped values become the committed
    /// ones.
    pub fn prepare_for_submit(&mut self) -> Result<SubmitWindow, WindowError> {
        let mut notices = Vec::new();
        let start = self.clamp_with_notice(WindowField::Start, self.start, &mut notices);
        let end = self.clamp_with_notice(WindowField::End, self.end, &mut notices);

        if end <= start {
            return Err(WindowError::EndNotAfterStart { start, end });
        }

        let was_clamped = start != self.start || end != self.end;
        self.start = start;
        self.end = end;
        self.gap_minutes = end.minutes_since(start);

        Ok(SubmitWindow {
            start,
            end,
            was_clamped,
            notices,
        })
    }

    fn clamp_with_notice(
        &self,
        field: WindowField,
        value: TimeOfDay,
        notices: &mut Vec<ClampNotice>,
    ) -> TimeOfDay {
        if value < self.range.start() {
            notices.push(ClampNotice {
                field,
                direction: ClampDirection::TooEarly,
                bound: self.range.start(),
            });
        } else if value > self.range.end() {
            notices.push(ClampNotice {
                field,
                direction: ClampDirection::TooLate,
                bound: self.range.end(),
            });
        }
        self.range.clamp(value)
    }
}
