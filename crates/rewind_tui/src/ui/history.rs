//! Game info pane: status line, key hints and the move history list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;

/// Renders the status line, the key hints and the history list.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Key hints
            Constraint::Min(3),    // History
        ])
        .split(area);

    let game = app.game();

    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let hints = Paragraph::new("1-9 play · ↑/↓ + Enter rewind · s sort · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, chunks[1]);

    let current_step = game.current_step();
    let items: Vec<ListItem> = (0..game.history().len())
        .map(|row| {
            let step = app.step_for_row(row);
            let label = match game.history()[step].coordinates() {
                Some((col, line)) => format!("Go to move #{step} ({col},{line})"),
                None => "Go to game start".to_string(),
            };
            let item = ListItem::new(label);
            if step == current_step {
                item.style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let title = if game.sort_ascending() {
        "History (oldest first)"
    } else {
        "History (newest first)"
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_symbol(">> ")
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, chunks[2], app.list_state_mut());
}
