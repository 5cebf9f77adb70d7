use crate::config::{DiscColor, PlayersConfig};
use crate::game::{Board, Cell, GameState, MatchStatus, WinningLine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Characters to the left of the first cell on a board line ("  ║").
const LEFT_MARGIN: u16 = 3;
const CELL_WIDTH: u16 = 3;

/// Draw the whole game screen and return the area the board occupies, so
/// mouse clicks can be mapped back to columns.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    selected_column: usize,
    message: &Option<String>,
) -> Rect {
    let board_height = game_state.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, players, chunks[0]);
    render_board(
        frame,
        game_state.board(),
        players,
        game_state.winning_line(),
        selected_column,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    chunks[1]
}

/// Map a terminal x coordinate inside the board area to a column index.
///
/// Mirrors the centering done by a center-aligned [`Paragraph`].
pub fn column_at(area: Rect, cols: usize, x: u16) -> Option<usize> {
    let line_width = board_line_width(cols);
    let offset = (area.width / 2).saturating_sub(line_width / 2);
    let first_cell = area.x + offset + LEFT_MARGIN;
    if x < first_cell {
        return None;
    }
    let col = ((x - first_cell) / CELL_WIDTH) as usize;
    (col < cols).then_some(col)
}

fn color_of(color: DiscColor) -> Color {
    match color {
        DiscColor::Red => Color::Red,
        DiscColor::Yellow => Color::Yellow,
        DiscColor::Blue => Color::Blue,
        DiscColor::Green => Color::Green,
        DiscColor::Magenta => Color::Magenta,
        DiscColor::Cyan => Color::Cyan,
        DiscColor::White => Color::White,
    }
}

fn board_line_width(cols: usize) -> u16 {
    // "  ║" + cells + " ║"
    LEFT_MARGIN + CELL_WIDTH * cols as u16 + 2
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    area: Rect,
) {
    let (status, player) = match game_state.status() {
        MatchStatus::InProgress => {
            let player = game_state.current_player();
            let name = &players.style(player).name;
            let status = format!(
                "Current Player: {name}  |  Move {}",
                game_state.move_count() + 1
            );
            (status, Some(player))
        }
        MatchStatus::Won(player) => (
            format!("Game Over  |  {} wins", players.style(player).name),
            Some(player),
        ),
        MatchStatus::Draw => ("Game Over  |  Draw".to_string(), None),
    };
    let color = player.map_or(Color::White, |p| color_of(players.style(p).color));

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    players: &PlayersConfig,
    winning_line: Option<WinningLine>,
    selected_column: usize,
    area: Rect,
) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(CELL_WIDTH as usize * cols + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            let cell = board.get(row, col).unwrap_or(Cell::Empty);
            let highlighted = winning_line.is_some_and(|line| line.contains(row, col));
            row_spans.push(cell_span(cell, players, highlighted));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn cell_span(cell: Cell, players: &PlayersConfig, highlighted: bool) -> Span<'static> {
    let player = match cell.player() {
        Some(player) => player,
        None => return Span::styled(" . ", Style::default().fg(Color::DarkGray)),
    };
    let style = Style::default().fg(color_of(players.style(player).color));
    if highlighted {
        Span::styled(" ◆ ", style.add_modifier(Modifier::BOLD))
    } else {
        Span::styled(" ● ", style)
    }
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ or 1-9: Select  |  Enter/Click: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
