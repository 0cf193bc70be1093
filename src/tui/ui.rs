use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    draw_fruit_list(frame, columns[0], app);
    draw_selected_list(frame, columns[1], app);
    draw_summary(frame, columns[2], app);
    draw_footer(frame, chunks[2], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(area);

    let title = Paragraph::new("Fruit checklist (multi-select)")
        .block(Block::default().borders(Borders::ALL).title("Fruits"))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, parts[0]);

    let button = Paragraph::new(format!("[ {} ]", app.select_all_label()))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(button, parts[1]);
    app.select_all_area = parts[1];
}

fn draw_fruit_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .store
        .items()
        .iter()
        .map(|item| {
            let checkbox = if item.checked { "☑" } else { "☐" };
            let style = if item.checked {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let line = Line::from(vec![
                Span::styled(format!("{} ", item.id), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} {} ", checkbox, item.label), style),
                Span::raw(item.emoji.clone()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Fruit list"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default()
        .with_offset(app.navigation.scroll_offset)
        .with_selected((!app.store.is_empty()).then_some(app.navigation.cursor));

    frame.render_stateful_widget(list, area, &mut list_state);

    // ratatui adjusts the offset to keep the cursor visible; clicks need the real one.
    app.navigation.scroll_offset = list_state.offset();
    app.list_area = area;
}

fn draw_selected_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .store
        .selected()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(format!("{}. Id: {}, Emoji: {}", i + 1, entry.id, entry.emoji))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Selected fruits"));

    frame.render_widget(list, area);
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.store.summary();
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(format!("👉 Total selected: {}", summary.count), bold)),
        Line::from(""),
        Line::from(Span::styled("👉 Selected ids:", bold)),
        Line::from(Span::styled(summary.id_list, Style::default().fg(Color::Red))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Summary"))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = format!(
        "Fruits: {} | Selected: {} | ↑↓/j/k: navigate | Enter/Space: toggle | a: select all | ?: help | q: quit",
        app.store.len(),
        app.store.selected().len()
    );

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Fruit checklist - Keyboard and mouse",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move cursor",
        "  Home/End / g/G    Jump to first/last fruit",
        "",
        "SELECTION:",
        "  Enter / Space     Toggle fruit under cursor",
        "  a                 Select all (or deselect all if every fruit is checked)",
        "  Left click        Toggle clicked fruit, or press the select-all button",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
