use super::*;

pub fn render_search_form(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(18),
            Constraint::Length(22),
            Constraint::Length(22),
            Constraint::Min(0),
        ])
        .split(area);

    let date_focused = app.focused == FocusedPane::Date;
    let date_text = if date_focused {
        format!("{}█", app.date_input.value)
    } else {
        app.date_input.value.clone()
    };
    let date = Paragraph::new(date_text)
        .style(Style::default().fg(Color::White))
        .block(input_block(" Date ", date_focused, field_flag(app, FormField::Date)));
    frame.render_widget(date, cols[0]);

    render_time_input(frame, cols[1], app, WindowField::Start);
    render_time_input(frame, cols[2], app, WindowField::End);

    let range = app.time_window.range();
    let hint = Paragraph::new(Span::styled(
        format!(
            "{} window | searchable {} to {}",
            widgets::format_gap(app.time_window.gap_minutes()),
            range.start().to_12h_string(),
            range.end().to_12h_string()
        ),
        Style::default().fg(Color::DarkGray),
    ))
    .block(Block::default().padding(Padding::new(1, 0, 1, 0)));
    frame.render_widget(hint, cols[3]);
}

fn render_time_input(frame: &mut Frame, area: Rect, app: &App, field: WindowField) {
    let focused = app.focused.window_field() == Some(field);
    let pending = app.time_window.pending(field).is_some();
    let value = app.time_window.display_value(field);

    let text = if focused {
        widgets::time_input_display(&value)
    } else {
        format!("[{}]", value)
    };
    // Pending text is shown as typed until its debounce delay commits it
    let style = if pending {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let committed = app.time_window.committed(field);
    let line = Line::from(vec![
        Span::styled(text, style),
        Span::styled(
            format!(" {}", committed.to_12h_string()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let title = match field {
        WindowField::Start => " Start ",
        WindowField::End => " End ",
    };
    let input = Paragraph::new(line).block(input_block(
        title,
        focused,
        field_flag(app, FormField::from(field)),
    ));
    frame.render_widget(input, area);
}

/// Level of the notice pointing at `field`, if any.
fn field_flag(app: &App, field: FormField) -> Option<NoticeLevel> {
    app.notice
        .as_ref()
        .filter(|n| n.field == Some(field))
        .map(|n| n.level)
}

fn input_block(title: &str, focused: bool, flag: Option<NoticeLevel>) -> Block<'_> {
    let border_style = match flag {
        Some(NoticeLevel::Error) => Style::default().fg(Color::Red),
        Some(NoticeLevel::Warning) => Style::default().fg(Color::Yellow),
        _ if focused => Style::default().fg(Color::Magenta),
        _ => Style::default().fg(Color::DarkGray),
    };
    let title_style = if focused {
        border_style.add_modifier(Modifier::BOLD)
    } else {
        border_style
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, title_style))
        .padding(Padding::horizontal(1))
}
