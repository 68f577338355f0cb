//! GUI module for the Renju game
//!
//! Hot-seat play on top of the rule engine using egui/eframe. [`GameState`]
//! holds all game flow and is usable without a window.

mod app;
mod board_view;
pub mod game_state;
mod theme;

pub use app::RenjuApp;
pub use game_state::{GameResult, GameSettings, GameState, MoveError, WinType};
