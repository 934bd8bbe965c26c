//! Stateless frame rendering: board pane on the left, game info on the
//! right.

mod board;
mod history;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Draws the whole frame from the current app state.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(13),   // Board + info
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe — rewindable history")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(38)])
        .split(chunks[1]);

    board::render(frame, panes[0], app.game().current());
    history::render(frame, panes[1], app);
}
