//! Application state and logic.

use crate::input::{move_cursor, parse_move};
use crate::orchestrator::result_message;
use crossterm::event::KeyCode;
use tictactoe_core::{Board, Minimax, Outcome, Position, Side};
use tracing::{debug, info, instrument, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    board: Board,
    engine: Minimax,
    first: Side,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application; the engine moves at once if it opens.
    pub fn new(first: Side) -> Self {
        let mut app = Self {
            board: Board::new(),
            engine: Minimax::with_ai_mark(Side::Ai.mark()),
            first,
            cursor: Position::Center,
            status_message: String::new(),
        };
        app.start();
        app
    }

    /// Gets the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Derived game outcome.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let text = self.cursor.index().to_string();
                self.play_human(&text);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.play_human(&c.to_string()),
            _ => {}
        }
        AppAction::Continue
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.board = Board::new();
        self.cursor = Position::Center;
        self.start();
    }

    fn start(&mut self) {
        info!(first = %self.first, "Starting game");
        if self.first == Side::Ai {
            self.play_ai();
        } else {
            self.status_message = format!("Your turn ({}).", Side::Human.mark());
        }
    }

    fn play_human(&mut self, text: &str) {
        if self.board.is_terminal() {
            self.status_message = self.game_over_message();
            return;
        }

        let position = match parse_move(text, &self.board) {
            Ok(position) => position,
            Err(e) => {
                warn!(error = %e, "Rejected input");
                self.status_message = format!("Invalid move: {}. Try again.", e);
                return;
            }
        };

        if let Err(e) = self.board.make_move(position, Side::Human.mark()) {
            self.status_message = format!("Invalid move: {}. Try again.", e);
            return;
        }
        if let Some(pos) = Position::from_index(position) {
            self.cursor = pos;
        }
        info!(position, "Human moved");
        self.play_ai();
    }

    fn play_ai(&mut self) {
        if self.board.is_terminal() {
            self.status_message = self.game_over_message();
            return;
        }

        let Some(position) = self.engine.best_move(&mut self.board) else {
            self.status_message = "AI found no move.".to_string();
            return;
        };
        if let Err(e) = self.board.make_move(position, Side::Ai.mark()) {
            self.status_message = format!("AI move failed: {}", e);
            return;
        }
        info!(position, "AI moved");

        self.status_message = if self.board.is_terminal() {
            self.game_over_message()
        } else {
            let label = Position::from_index(position).map_or("?", |p| p.label());
            format!("AI played {}. Your turn ({}).", label, Side::Human.mark())
        };
    }

    fn game_over_message(&self) -> String {
        format!(
            "{}! Press 'r' to restart or 'q' to quit.",
            result_message(self.board.outcome())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, Square};

    #[test]
    fn test_ai_opens_when_first() {
        let app = App::new(Side::Ai);
        assert_eq!(app.board().occupied_count(), 1);
        assert_eq!(app.board().get(0), Some(Square::Occupied(Mark::X)));
        assert!(app.status_message().contains("Your turn"));
    }

    #[test]
    fn test_human_opens_when_first() {
        let app = App::new(Side::Human);
        assert_eq!(app.board().occupied_count(), 0);
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_digit_plays_and_ai_replies() {
        let mut app = App::new(Side::Human);
        assert_eq!(app.handle_key(KeyCode::Char('4')), AppAction::Continue);
        assert_eq!(app.board().get(4), Some(Square::Occupied(Mark::O)));
        assert_eq!(app.board().occupied_count(), 2);
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut app = App::new(Side::Human);
        app.handle_key(KeyCode::Char('4'));
        let before = *app.board();
        app.handle_key(KeyCode::Char('4'));
        assert_eq!(*app.board(), before);
        assert!(app.status_message().contains("occupied"));

        app.handle_key(KeyCode::Char('9'));
        assert_eq!(*app.board(), before);
        assert!(app.status_message().starts_with("Invalid move"));
    }

    #[test]
    fn test_cursor_then_enter() {
        let mut app = App::new(Side::Human);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.board().get(0), Some(Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_full_game_never_lost_and_restart() {
        let mut app = App::new(Side::Human);
        for _ in 0..5 {
            for digit in '0'..='8' {
                app.handle_key(KeyCode::Char(digit));
            }
        }
        assert!(app.outcome().is_over());
        assert_ne!(app.outcome(), Outcome::Win(Mark::O));
        assert!(app.status_message().contains("Press 'r'"));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.board().occupied_count(), 0);
        assert_eq!(app.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Side::Human);
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}
