//! Board grid rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rewind_tictactoe::{HistoryEntry, Player, Square};

/// Renders the viewed snapshot as a 3x3 grid. Cells in the entry's
/// winning line are highlighted.
pub fn render(frame: &mut Frame, area: Rect, entry: &HistoryEntry) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(frame, rows[0], entry, 0);
    render_separator(frame, rows[1]);
    render_row(frame, rows[2], entry, 3);
    render_separator(frame, rows[3]);
    render_row(frame, rows[4], entry, 6);
}

fn render_row(frame: &mut Frame, area: Rect, entry: &HistoryEntry, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    render_cell(frame, cols[0], entry, start);
    render_vertical_sep(frame, cols[1]);
    render_cell(frame, cols[2], entry, start + 1);
    render_vertical_sep(frame, cols[3]);
    render_cell(frame, cols[4], entry, start + 2);
}

fn render_cell(frame: &mut Frame, area: Rect, entry: &HistoryEntry, pos: usize) {
    let (symbol, base_style) = match entry.board().get(pos) {
        Some(Square::Occupied(Player::X)) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (
            format!(" {} ", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let in_win_line = entry.win().is_some_and(|win| win.contains(pos));
    let style = if in_win_line {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
