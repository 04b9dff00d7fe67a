//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use timed_tictactoe::{GameEngine, GameMode, Player, Position, Square, format_clock};

/// History lines shown in the side panel.
const HISTORY_ROWS: usize = 10;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let engine = app.engine();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + side panel
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(title_text(engine))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(32)])
        .split(chunks[1]);

    draw_board(frame, middle[0], engine, app.cursor());
    draw_side_panel(frame, middle[1], engine);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(engine))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

/// Title line. Difficulty only matters with a computer opponent.
fn title_text(engine: &GameEngine) -> String {
    match engine.mode() {
        GameMode::HumanVsComputer => format!(
            "Tic Tac Toe - {} - Difficulty: {}",
            engine.mode(),
            engine.difficulty()
        ),
        GameMode::HumanVsHuman => format!("Tic Tac Toe - {}", engine.mode()),
    }
}

fn help_text(engine: &GameEngine) -> &'static str {
    match engine.mode() {
        GameMode::HumanVsComputer => {
            "Arrows+Enter or 1-9: move | R: Restart | M: Mode | D: Difficulty | Q: Quit"
        }
        GameMode::HumanVsHuman => "Arrows+Enter or 1-9: move | R: Restart | M: Mode | Q: Quit",
    }
}

fn draw_board(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: Position) {
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
            let pos = Position::ALL[row * 3 + col];
            draw_cell(frame, cols[col * 2], engine, cursor, pos);
            if col < 2 {
                let sep = Paragraph::new("\n│").style(Style::default().fg(Color::DarkGray));
                frame.render_widget(sep, cols[col * 2 + 1]);
            }
        }

        if row < 2 {
            let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: Position, pos: Position) {
    let (symbol, mut style) = match engine.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if engine.winning_line().is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == cursor && engine.is_active() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {symbol}  "), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_side_panel(frame: &mut Frame, area: Rect, engine: &GameEngine) {
    let names = engine.names();
    let scores = engine.scores();

    let clock_style = if engine.is_active() && engine.seconds_remaining() <= 5 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Time: "),
            Span::styled(format_clock(engine.seconds_remaining()), clock_style),
        ]),
        Line::from(format!("Turn: {}", names.name(engine.current_player()))),
        Line::from(""),
        Line::from(format!("{}: {}", names.name(Player::X), scores.wins_x())),
        Line::from(format!("{}: {}", names.name(Player::O), scores.wins_o())),
        Line::from(format!("Draws: {}", scores.draws())),
        Line::from(""),
        Line::from(Span::styled("History", Style::default().add_modifier(Modifier::UNDERLINED))),
    ];

    let history = engine.history();
    let skip = history.len().saturating_sub(HISTORY_ROWS);
    lines.extend(
        history
            .iter()
            .skip(skip)
            .map(|entry| Line::from(format!("{:>3}. {}", entry.game, entry))),
    );

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Session"));
    frame.render_widget(panel, area);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_shown_only_against_computer() {
        let mut engine = GameEngine::default();
        assert_eq!(title_text(&engine), "Tic Tac Toe - Player vs Player");
        assert!(!help_text(&engine).contains("Difficulty"));

        engine.set_mode(GameMode::HumanVsComputer);
        assert_eq!(
            title_text(&engine),
            "Tic Tac Toe - Player vs Computer - Difficulty: Easy"
        );
        assert!(help_text(&engine).contains("D: Difficulty"));
    }
}
