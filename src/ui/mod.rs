//! GUI module for the checkers game
//!
//! This module provides a native Rust GUI using egui/eframe. It holds no
//! rules logic; every move goes through [`crate::rules`] and
//! [`crate::engine`].

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::CheckersApp;
pub use game_state::{GameConfig, GameState, Screen, TurnState};
pub use theme::{PieceStyle, PieceStyles};
