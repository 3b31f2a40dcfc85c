//! Application state and key handling.
//!
//! Holds the game value and the UI-only bits around it (cursor, focus,
//! feedback). Nothing here touches the terminal, so it is tested directly.

use crate::input::move_cursor;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, MoveError, Position};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows select a history entry.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    feedback: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            feedback: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the feedback from the last rejected action, if any.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_move();
            }
            KeyCode::Char('[') => {
                let target = self.game.current_move().checked_sub(1);
                self.step_to(target);
            }
            KeyCode::Char(']') => {
                let target = self.game.current_move().checked_add(1);
                self.step_to(target);
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = c.to_digit(10) {
                    self.play(index as usize);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            _ => {}
        }
    }

    /// Plays the current player's mark at `index`.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        match self.game.try_apply_move(index) {
            Ok(next) => {
                self.game = next;
                self.selected = self.game.current_move();
                self.feedback = None;
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                    debug!(%position, status = %self.game.status(), "Move played");
                }
            }
            Err(error) => self.reject(error),
        }
    }

    /// Views history entry `move_index`.
    #[instrument(skip(self))]
    pub fn jump(&mut self, move_index: usize) {
        match self.game.try_jump_to(move_index) {
            Ok(next) => {
                self.game = next;
                self.selected = move_index;
                self.feedback = None;
            }
            Err(error) => self.reject(error),
        }
    }

    fn step_to(&mut self, target: Option<usize>) {
        match target {
            Some(move_index) => self.jump(move_index),
            None => self.feedback = Some("Already at game start".to_string()),
        }
    }

    fn reject(&mut self, error: MoveError) {
        debug!(%error, "Action rejected");
        self.feedback = Some(error.to_string());
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::reset();
        self.selected = 0;
        self.feedback = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
