//! Stateless rendering of a game snapshot.

use crate::app::App;
use crate::config::TuiConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_grid::{Cell, Player, Position, Snapshot};

/// Draws title, board and status line.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Grid - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.snapshot(), app.cursor(), config);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Position,
    config: &TuiConfig,
) {
    let board_area = center_rect(area, 40, 11);
    let winning = snapshot.winning_positions();

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

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                let highlight = CellHighlight {
                    cursor: pos == cursor && !snapshot.is_terminal(),
                    winning: winning.is_some_and(|line| line.contains(&pos)),
                };
                draw_cell(frame, cols[col * 2], snapshot, pos, highlight, config);
            }
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }

        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CellHighlight {
    cursor: bool,
    winning: bool,
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    pos: Position,
    highlight: CellHighlight,
    config: &TuiConfig,
) {
    let (symbol, base_style) = cell_text(snapshot.board().cells()[pos.to_index()], pos, config);

    let style = if highlight.winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if highlight.cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn cell_text(cell: Cell, pos: Position, config: &TuiConfig) -> (String, Style) {
    match cell {
        Cell::Empty if *config.show_cell_numbers() => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => ("   ".to_string(), Style::default()),
        Cell::Marked(player) => (
            format!(" {} ", player.symbol()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3])
        .style(Style::default().fg(Color::DarkGray));
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
