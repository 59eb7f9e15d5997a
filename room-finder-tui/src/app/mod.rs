use crate::config::RoomFinderConfig;
use roomdb::domain::{DataFreshness, SearchQuery};
use roomdb::SearchResults;
use time::PrimitiveDateTime;

pub mod form;
mod results;
mod state;
pub mod time_of_day;
pub mod time_window;

pub use results::ResultsView;
pub use state::{FocusedPane, FormField, Notice, NoticeLevel, TextInput};
pub use time_of_day::{AllowedRange, TimeOfDay};
pub use time_window::{TimeWindow, WindowField};

pub struct App {
    pub running: bool,
    pub focused: FocusedPane,

    // Search form
    pub date_input: TextInput,
    pub time_window: TimeWindow,
    pub notice: Option<Notice>,

    // Results of the last successful search
    pub results: ResultsView,
    pub last_query: Option<SearchQuery>,
    pub freshness: Option<DataFreshness>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    // Used when the date input cannot be parsed while stepping
    today: time::Date,
}

impl App {
    /// Fresh session state for local time `now`.
    pub fn new(cfg: &RoomFinderConfig, range: AllowedRange, now: PrimitiveDateTime) -> Self {
        let time_window =
            TimeWindow::starting_at(TimeOfDay::from(now.time()), cfg.default_gap_minutes, range);

        Self {
            running: true,
            focused: FocusedPane::StartTime,
            date_input: TextInput::from_str(&form::format_date(now.date())),
            time_window,
            notice: None,
            results: ResultsView::new(cfg.page_size),
            last_query: None,
            freshness: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            today: now.date(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::info(text));
    }

    pub fn set_error(&mut self, text: impl Into<String>, field: Option<FormField>) {
        self.notice = Some(Notice::error(text, field));
    }

    pub fn invalid_field(&self) -> Option<FormField> {
        self.notice.as_ref().and_then(|n| n.field)
    }

    /// Type a character into whichever form input has focus. Returns the new
    /// raw text when a time input changed, so the caller can restart its
    /// debounce timer.
    pub fn form_input_char(&mut self, c: char) -> Option<(WindowField, String)> {
        match self.focused {
            FocusedPane::Date => {
                if form::date_input_accepts(&self.date_input.value, c) {
                    self.date_input.push(c);
                }
                None
            }
            pane => {
                let field = pane.window_field()?;
                let raw = form::time_input_push(&self.time_window.display_value(field), c);
                self.time_window.on_edit(field, raw.clone());
                Some((field, raw))
            }
        }
    }

    pub fn form_backspace(&mut self) -> Option<(WindowField, String)> {
        match self.focused {
            FocusedPane::Date => {
                self.date_input.backspace();
                None
            }
            pane => {
                let field = pane.window_field()?;
                let raw = form::time_input_backspace(&self.time_window.display_value(field));
                self.time_window.on_edit(field, raw.clone());
                Some((field, raw))
            }
        }
    }

    pub fn form_clear(&mut self) -> Option<(WindowField, String)> {
        match self.focused {
            FocusedPane::Date => {
                self.date_input.clear();
                None
            }
            pane => {
                let field = pane.window_field()?;
                self.time_window.on_edit(field, String::new());
                Some((field, String::new()))
            }
        }
    }

    /// Up/Down on a form input: one day for the date, one step for times.
    pub fn form_step(&mut self, steps: i32) -> Option<(WindowField, String)> {
        match self.focused {
            FocusedPane::Date => {
                let next =
                    form::date_input_step(&self.date_input.value, self.today, steps as i64);
                self.date_input.set(&next);
                None
            }
            pane => {
                let field = pane.window_field()?;
                let raw = form::time_input_step(
                    &self.time_window.display_value(field),
                    self.time_window.committed(field),
                    steps,
                );
                self.time_window.on_edit(field, raw.clone());
                Some((field, raw))
            }
        }
    }

    /// A debounce timer fired. Stale timers (the field was edited again
    /// since) are ignored.
    pub fn commit_time_edit(&mut self, field: WindowField, raw: &str) {
        if self.time_window.is_latest_edit(field, raw) {
            self.time_window.commit(field, raw);
        }
    }

    /// Validate the form and build the query to send. Notices are updated
    /// either way; `None` means nothing may be fetched.
    pub fn prepare_search(&mut self) -> Option<SearchQuery> {
        self.time_window.flush_pending();

        let Some(date) = form::parse_date(&self.date_input.value) else {
            self.set_error("Invalid date, expected YYYY-MM-DD.", Some(FormField::Date));
            return None;
        };

        let submit = match self.time_window.prepare_for_submit() {
            Ok(submit) => submit,
            Err(e) => {
                tracing::debug!(error = ?e, "Rejected search window");
                self.set_error(e.to_string(), Some(FormField::End));
                return None;
            }
        };

        if submit.was_clamped {
            tracing::info!(
                start = %submit.start,
                end = %submit.end,
                "Search window clamped into allowed range"
            );
        }
        self.notice = submit
            .notices
            .last()
            .map(|n| Notice::warning(n.to_string(), n.field.into()));

        Some(SearchQuery::new(
            date,
            submit.start.as_time(),
            submit.end.as_time(),
        ))
    }

    pub fn apply_search_results(&mut self, query: SearchQuery, results: SearchResults) {
        self.results.replace(results);
        self.last_query = Some(query);
        if self.notice.as_ref().map(|n| n.level) != Some(NoticeLevel::Warning) {
            self.set_info(format!(
                "{} free rooms in {} buildings",
                self.results.total_rooms(),
                self.results.per_building().len()
            ));
        }
    }

    pub fn toggle_building_filter(&mut self) {
        self.results.toggle_focused_building();
    }
}
