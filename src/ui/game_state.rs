//! Game state management for the Renju GUI

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::board::{Board, BoardError, Move, Pos, Stone};
use crate::rules::{self, ForbiddenKind, OpeningClassification, RESTRICTED};

/// Why a move was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Game is over")]
    GameOver,
    #[error("({}, {}) is off the board", .0.row, .0.col)]
    OutOfBounds(Pos),
    #[error("{} is already occupied", .0.notation())]
    Occupied(Pos),
    #[error("{} is forbidden for Black ({})", .0.notation(), .1)]
    Forbidden(Pos, ForbiddenKind),
}

/// Display toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub show_move_numbers: bool,
    pub show_coordinates: bool,
    /// Mark every forbidden point while Black is to move
    pub mark_forbidden: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            show_move_numbers: false,
            show_coordinates: false,
            mark_forbidden: true,
        }
    }
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `Stone::Empty` for a draw
    pub winner: Stone,
    pub win_type: WinType,
    pub winning_line: Option<[Pos; 5]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    FiveInRow,
    Resignation,
    /// Board filled without a winner
    Draw,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<Move>,
    pub opening: OpeningClassification,
    pub settings: GameSettings,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    redo_stack: Vec<Move>,
}

impl GameState {
    /// New game on the standard 15x15 board
    pub fn new() -> Self {
        Self::on_board(Board::new())
    }

    /// New game on a custom-size board
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        Ok(Self::on_board(Board::with_size(size)?))
    }

    fn on_board(board: Board) -> Self {
        Self {
            board,
            current_turn: Stone::Black,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            opening: OpeningClassification::Undetermined,
            settings: GameSettings::default(),
            move_timer: MoveTimer::default(),
            message: None,
            redo_stack: Vec::new(),
        }
    }

    /// Clear the board and start over, keeping size and settings
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Stone::Black;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.redo_stack.clear();
        self.opening = OpeningClassification::Undetermined;
        self.move_timer = MoveTimer::default();
        self.message = None;
        log::debug!("game reset");
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.move_history.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Forbidden sub-rule at `pos` for the side to move.
    ///
    /// Always `None` for White, for occupied or off-board cells, and once the
    /// game is over.
    pub fn forbidden_at(&mut self, pos: Pos) -> Option<ForbiddenKind> {
        if self.game_over.is_some()
            || self.current_turn != RESTRICTED
            || !self.board.contains(pos.row as i32, pos.col as i32)
            || !self.board.is_empty(pos)
        {
            return None;
        }
        rules::forbidden_kind(&mut self.board, pos)
    }

    /// Attempt to place a stone for the side to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<Move, MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }

        if !self.board.contains(pos.row as i32, pos.col as i32) {
            return Err(MoveError::OutOfBounds(pos));
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        if self.current_turn == RESTRICTED {
            if let Some(kind) = rules::forbidden_kind(&mut self.board, pos) {
                log::warn!("rejected Black at {}: {}", pos.notation(), kind);
                return Err(MoveError::Forbidden(pos, kind));
            }
        }

        // A fresh move abandons the undone line
        self.redo_stack.clear();
        Ok(self.commit(pos))
    }

    /// Place the side to move's stone and advance the game
    fn commit(&mut self, pos: Pos) -> Move {
        let color = self.current_turn;
        self.board.place_stone(pos, color);

        let mv = Move::new(pos, color, self.move_history.len() + 1);
        self.move_history.push(mv);
        self.last_move = Some(pos);
        self.message = None;
        self.move_timer.stop();
        log::debug!("move {}: {} at {}", mv.number, color.name(), pos.notation());

        self.update_opening();

        if let Some(line) = rules::find_winning_line(&self.board, pos) {
            log::info!("{} wins with five after {} moves", color.name(), mv.number);
            self.game_over = Some(GameResult {
                winner: color,
                win_type: WinType::FiveInRow,
                winning_line: Some(line),
            });
            return mv;
        }

        if self.board.stone_count() as usize == self.board.size() * self.board.size() {
            log::info!("board full, game drawn");
            self.game_over = Some(GameResult {
                winner: Stone::Empty,
                win_type: WinType::Draw,
                winning_line: None,
            });
            return mv;
        }

        self.current_turn = color.opponent();
        self.move_timer.start();
        mv
    }

    fn update_opening(&mut self) {
        let previous = self.opening;
        self.opening = rules::classify_opening(&self.move_history);

        if self.opening != previous {
            match self.opening {
                OpeningClassification::Matched(pattern) => log::info!("opening: {}", pattern),
                OpeningClassification::Unrecognized => log::info!("opening: no named shape"),
                OpeningClassification::Undetermined => {}
            }
        }
    }

    /// Take back the last move; reopens a finished game
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.move_history.pop()?;

        self.board.remove_stone(mv.pos);
        self.current_turn = mv.stone;
        self.game_over = None;
        self.last_move = self.move_history.last().map(|m| m.pos);
        self.message = None;
        self.redo_stack.push(mv);
        self.update_opening();
        self.move_timer.start();

        log::debug!("undo move {} at {}", mv.number, mv.pos.notation());
        Some(mv)
    }

    /// Replay the most recently undone move
    pub fn redo(&mut self) -> Option<Move> {
        if self.game_over.is_some() {
            return None;
        }
        let undone = self.redo_stack.pop()?;
        debug_assert_eq!(undone.stone, self.current_turn);

        let mv = self.commit(undone.pos);
        log::debug!("redo move {} at {}", mv.number, mv.pos.notation());
        Some(mv)
    }

    /// The side to move resigns
    pub fn surrender(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        let winner = self.current_turn.opponent();
        log::info!("{} resigns, {} wins", self.current_turn.name(), winner.name());
        self.game_over = Some(GameResult {
            winner,
            win_type: WinType::Resignation,
            winning_line: None,
        });
        self.move_timer.stop();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
