use super::*;

const LABEL: &str = " Room Finder";

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let title_width = 1 + 1 + LABEL.len() as u16 + 1;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(title_width), Constraint::Min(10)])
        .split(area);

    // Throbber spins while a search is in flight, full symbol when idle
    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        label_area,
    );

    let muted = Style::default().fg(Color::DarkGray);
    let white = Style::default().fg(Color::White);
    let freshness = app.freshness.as_ref();
    let line = Line::from(vec![
        Span::styled(" | ", muted),
        Span::styled("Updated: ", muted),
        Span::styled(
            widgets::format_optional_datetime(freshness.and_then(|f| f.last_updated)),
            white,
        ),
        Span::styled(" | ", muted),
        Span::styled("Bookings: ", muted),
        Span::styled(
            widgets::format_booking_span(
                freshness.and_then(|f| f.earliest_booking_start),
                freshness.and_then(|f| f.latest_booking_end),
            ),
            white,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), cols[1]);
}
