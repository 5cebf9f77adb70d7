use crate::config::AppConfig;
use crate::error::{ConfigError, GameError, MoveRejection};
use crate::game::{GameState, MatchStatus};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use tracing::{debug, info};

/// Hot-seat driver: turns key presses and clicks into columns for the match.
pub struct App {
    config: AppConfig,
    fresh: GameState,
    game_state: GameState,
    selected_column: usize,
    board_area: Rect,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let fresh = GameState::from_config(&config)?;
        Ok(App {
            selected_column: fresh.board().cols() / 2, // Start in middle
            game_state: fresh.clone(),
            fresh,
            config,
            board_area: Rect::default(),
            should_quit: false,
            message: None,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(
            rows = self.fresh.board().rows(),
            cols = self.fresh.board().cols(),
            "starting match"
        );
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let cols = self.game_state.board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < cols {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = self.fresh.clone();
                self.selected_column = cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Hovering over the board moves the selection; a left click drops
    /// into the column under the cursor
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(col) = self.column_under(mouse.column, mouse.row) else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Moved => {
                self.selected_column = col;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                self.selected_column = col;
                self.drop_piece();
            }
            _ => {}
        }
    }

    fn column_under(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.board_area;
        if y < area.y || y >= area.y + area.height {
            return None;
        }
        super::game_view::column_at(area, self.game_state.board().cols(), x)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.play(self.selected_column) {
            Ok(record) => {
                let players = &self.config.players;
                self.message = match record.status {
                    MatchStatus::Won(player) => {
                        Some(format!("{} wins!", players.style(player).name))
                    }
                    MatchStatus::Draw => Some("It's a draw!".to_string()),
                    MatchStatus::InProgress => None,
                };
            }
            Err(err) => {
                debug!(column = self.selected_column, %err, "move rejected");
                self.message = Some(
                    match err {
                        GameError::InvalidMove(MoveRejection::ColumnFull { .. }) => {
                            "Column is full!"
                        }
                        GameError::MatchOver => "Game over! Press 'r' to restart.",
                        _ => "Invalid column!",
                    }
                    .to_string(),
                );
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = super::game_view::render(
            frame,
            &self.game_state,
            &self.config.players,
            self.selected_column,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn click(app: &mut App, column: u16, row: u16) {
        mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
    }

    fn rendered_app() -> App {
        let mut app = App::new(AppConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        app
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.game_state().status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.board.cols = 2;
        assert!(matches!(
            App::new(config),
            Err(ConfigError::Game(GameError::InvalidConfiguration { rows: 6, cols: 2 }))
        ));
    }

    #[test]
    fn test_rejects_board_too_large_to_draw() {
        let mut config = AppConfig::default();
        config.board.rows = crate::config::MAX_DIMENSION + 1;
        assert!(matches!(App::new(config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_keyboard_drop() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().cell_at(5, 2), Ok(Cell::PlayerOne));
        assert_eq!(app.game_state().current_player(), Player::Two);

        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game_state().board().cell_at(5, 6), Ok(Cell::PlayerTwo));

        // Out of range digit leaves the selection alone
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.selected_column, 6);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.game_state().move_count(), 6);
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.game_state().status(), MatchStatus::Won(Player::One));
        assert_eq!(app.message(), Some("Red wins!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().move_count(), 0);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_and_click() {
        let mut app = rendered_app();
        assert_eq!(app.board_area.y, 3);
        assert_eq!(app.board_area.width, 80);
        assert!(app.board_area.height >= 10);

        // First cell of column 0 starts at x = 30 on an 80-wide screen
        click(&mut app, 31, 8);
        assert_eq!(app.game_state().board().cell_at(5, 0), Ok(Cell::PlayerOne));

        // Clicks outside the board are ignored
        click(&mut app, 2, 8);
        click(&mut app, 31, 1);
        assert_eq!(app.game_state().move_count(), 1);
    }

    #[test]
    fn test_hover_moves_selection_without_dropping() {
        let mut app = rendered_app();
        assert_eq!(app.selected_column, 3);

        mouse(&mut app, MouseEventKind::Moved, 31, 8);
        assert_eq!(app.selected_column, 0);
        mouse(&mut app, MouseEventKind::Moved, 50, 8);
        assert_eq!(app.selected_column, 6);
        assert_eq!(app.game_state().move_count(), 0);

        // Leaving the board keeps the last selection
        mouse(&mut app, MouseEventKind::Moved, 2, 8);
        mouse(&mut app, MouseEventKind::Moved, 31, 1);
        assert_eq!(app.selected_column, 6);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().cell_at(5, 6), Ok(Cell::PlayerOne));
    }
}
