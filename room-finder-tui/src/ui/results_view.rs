use super::*;

pub fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(2)
        .constraints([Constraint::Length(28), Constraint::Min(40)])
        .split(area);

    render_buildings(frame, cols[0], app);
    render_rooms(frame, cols[1], app);
}

fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_buildings(frame: &mut Frame, area: Rect, app: &App) {
    let results = &app.results;
    let selected = results.selected_building();

    let header = Row::new(vec!["Building", "Free"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = results.per_building().iter().map(|row| {
        let style = if selected == Some(row.building.as_str()) {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Row::new(vec![
            Cell::from(row.building.clone()),
            Cell::from(row.free_room_count.to_string()),
        ])
        .style(style)
    });

    let focused = app.focused == FocusedPane::Buildings;
    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(6)])
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border(focused))
                .title(format!(" Buildings ({}) ", results.per_building().len()))
                .padding(Padding::horizontal(1)),
        );

    let mut state = TableState::default().with_selected(results.focused_building);
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_rooms(frame: &mut Frame, area: Rect, app: &App) {
    let results = &app.results;
    let page = results.current_page();

    let header = Row::new(vec!["Building", "Room", "Seats", "Booked at", "Features"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = page.iter().map(|room| {
        let booked = widgets::format_earliest_booking(room.earliest_booking);
        let booked_style = if room.is_free_all_day() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Row::new(vec![
            Cell::from(room.building.clone()),
            Cell::from(room.room_number.clone()),
            Cell::from(
                room.capacity
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::from(Span::styled(booked, booked_style)),
            Cell::from(Span::styled(
                room.features.clone().unwrap_or_default(),
                Style::default().fg(Color::Gray),
            )),
        ])
    });

    let title = if app.last_query.is_none() {
        format!(" {} ", results.heading())
    } else {
        format!(
            " {} | Page {}/{} ({} rooms) ",
            results.heading(),
            results.page() + 1,
            results.page_count(),
            results.filtered_count()
        )
    };

    let focused = app.focused == FocusedPane::Rooms;
    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .column_spacing(2)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(pane_border(focused))
            .title(title)
            .padding(Padding::horizontal(1)),
    );

    let mut state = TableState::default().with_selected(results.focused_room);
    frame.render_stateful_widget(table, area, &mut state);
}
