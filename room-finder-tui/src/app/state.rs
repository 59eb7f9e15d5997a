use super::time_window::WindowField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Date,
    StartTime,
    EndTime,
    Buildings,
    Rooms,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Date => FocusedPane::StartTime,
            FocusedPane::StartTime => FocusedPane::EndTime,
            FocusedPane::EndTime => FocusedPane::Buildings,
            FocusedPane::Buildings => FocusedPane::Rooms,
            FocusedPane::Rooms => FocusedPane::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Date => FocusedPane::Rooms,
            FocusedPane::StartTime => FocusedPane::Date,
            FocusedPane::EndTime => FocusedPane::StartTime,
            FocusedPane::Buildings => FocusedPane::EndTime,
            FocusedPane::Rooms => FocusedPane::Buildings,
        }
    }

    pub fn window_field(self) -> Option<WindowField> {
        match self {
            FocusedPane::StartTime => Some(WindowField::Start),
            FocusedPane::EndTime => Some(WindowField::End),
            _ => None,
        }
    }
}

/// Form field flagged by the last notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Start,
    End,
}

impl From<WindowField> for FormField {
    fn from(field: WindowField) -> Self {
        match field {
            WindowField::Start => FormField::Start,
            WindowField::End => FormField::End,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// One line of feedback under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub field: Option<FormField>,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
            field: None,
        }
    }

    pub fn warning(text: impl Into<String>, field: FormField) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
            field: Some(field),
        }
    }

    pub fn error(text: impl Into<String>, field: Option<FormField>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
            field,
        }
    }
}

/// A single-line text input with the cursor kept at the end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
}

impl TextInput {
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn set(&mut self, s: &str) {
        self.value = s.to_string();
    }
}
