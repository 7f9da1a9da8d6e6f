//! Stateless UI rendering for the terminal game.

use noughts_core::{Cell, Mark, Position, ScoreTally};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::App;

const HELP: &str = "1-9 or arrows + Enter: move   r: new game   q: quit";

/// Renders the whole screen.
pub fn draw<R: Rng>(frame: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and turn
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Scores
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic-Tac-Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(app.turn_label()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    draw_board(frame, chunks[1], app);

    let message = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[2]);

    draw_scores(frame, chunks[3], app.scores());

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let board_area = center_rect(area, 41, 11);

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

    let row_areas: Vec<_> = (0..3)
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(13),
                    Constraint::Length(1),
                    Constraint::Length(13),
                    Constraint::Length(1),
                    Constraint::Length(13),
                ])
                .split(rows[row * 2])
        })
        .collect();

    for pos in Position::iter() {
        let (row, col) = (pos.row(), pos.col());
        draw_cell(frame, row_areas[row][col * 2], app, pos);
        if col < 2 {
            draw_separator(frame, row_areas[row][col * 2 + 1], "│");
        }
        if row < 2 && col == 0 {
            draw_separator(frame, rows[row * 2 + 1], &"─".repeat(41));
        }
    }
}

fn draw_cell<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>, pos: Position) {
    let index = pos.to_index();
    let cell = app.board().get(index).unwrap_or_default();

    let (symbol, mut style) = match cell {
        Cell::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::Player) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::Computer) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if app.winning_line().is_some_and(|line| line.contains(index)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the symbol in a three-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {symbol}  "), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, scores: &ScoreTally) {
    let line = Line::from(vec![
        Span::styled("You ", Style::default().fg(Color::Blue)),
        Span::raw(scores.player_wins().to_string()),
        Span::raw("   "),
        Span::styled("Computer ", Style::default().fg(Color::Red)),
        Span::raw(scores.computer_wins().to_string()),
        Span::raw("   "),
        Span::styled("Ties ", Style::default().fg(Color::Yellow)),
        Span::raw(scores.ties().to_string()),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, text: &str) {
    let sep = Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
