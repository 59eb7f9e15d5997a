use crate::app::{App, FocusedPane, FormField, NoticeLevel, WindowField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, TableState},
    Frame,
};

mod header;
mod results_view;
mod search_form;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + freshness
            Constraint::Length(3), // Date / start / end
            Constraint::Length(1), // Notice
            Constraint::Min(5),    // Buildings + rooms
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    header::render_header(frame, root[0], app);
    search_form::render_search_form(frame, root[1], app);
    render_notice(frame, root[2], app);
    results_view::render_results(frame, root[3], app);
    render_controls(frame, root[4], app.focused);
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };
    let color = match notice.level {
        NoticeLevel::Info => Color::Gray,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(notice.text.as_str(), Style::default().fg(color)))
            .block(Block::default().padding(Padding::horizontal(2))),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect, focused: FocusedPane) {
    let key = Style::default().fg(Color::Yellow);
    let mut spans = vec![Span::styled("Tab", key), Span::raw(": Next pane  ")];

    match focused {
        FocusedPane::Date | FocusedPane::StartTime | FocusedPane::EndTime => {
            spans.extend([
                Span::styled("↑↓", key),
                Span::raw(": Step  "),
                Span::styled("Ctrl+X", key),
                Span::raw(": Clear  "),
                Span::styled("Enter", key),
                Span::raw(": Search  "),
            ]);
        }
        FocusedPane::Buildings => {
            spans.extend([
                Span::styled("↑↓/j/k", key),
                Span::raw(": Navigate  "),
                Span::styled("Enter", key),
                Span::raw(": Filter  "),
                Span::styled("Esc", key),
                Span::raw(": All rooms  "),
                Span::styled("r", key),
                Span::raw(": Refresh  "),
                Span::styled("q", key),
                Span::raw(": Quit  "),
            ]);
        }
        FocusedPane::Rooms => {
            spans.extend([
                Span::styled("↑↓/j/k", key),
                Span::raw(": Navigate  "),
                Span::styled("←→/p/n", key),
                Span::raw(": Page  "),
                Span::styled("o", key),
                Span::raw(": Details  "),
                Span::styled("r", key),
                Span::raw(": Refresh  "),
                Span::styled("q", key),
                Span::raw(": Quit  "),
            ]);
        }
    }
    spans.extend([Span::styled("Ctrl+C", key), Span::raw(": Exit")]);

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, area);
}
