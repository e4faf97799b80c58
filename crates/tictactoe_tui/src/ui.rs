//! Stateless rendering of the session.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Board, Cell, Mark, Side};

use crate::app::{App, Phase};

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Input
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_board(frame, chunks[1], app.board());
    draw_status(frame, chunks[2], app);
    draw_input(frame, chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let marks = app.marks();
    let header = format!(
        "Tic-Tac-Toe: you play {}, the computer plays {}",
        marks.human(),
        marks.computer()
    );
    let title = Paragraph::new(header)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board) {
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

    draw_row(frame, rows[0], board, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], board, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], board, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, start: usize) {
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

    draw_cell(frame, cols[0], board, start);
    draw_vertical_separator(frame, cols[1]);
    draw_cell(frame, cols[2], board, start + 1);
    draw_vertical_separator(frame, cols[3]);
    draw_cell(frame, cols[4], board, start + 2);
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, index: usize) {
    // Empty cells show their selection number.
    let (text, style) = match board.get(index) {
        Some(Cell::Occupied(Mark::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Mark::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let cell = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.phase() {
        Phase::Playing if app.to_move() == Side::Human => format!("> {}", app.input()),
        _ => String::new(),
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your move (1-9, q quits, Ctrl+C interrupts)"),
    );
    frame.render_widget(input, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
