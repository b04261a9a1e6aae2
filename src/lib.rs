//! Checkers rules engine with a heuristic CPU opponent
//!
//! A compact checkers engine for one human against the computer:
//! - Standard 8x8 board, 12 men per side
//! - Men step diagonally forward, kings in all four diagonals
//! - Single jumps over an adjacent opponent piece (optional, never chained)
//! - Men are crowned on the far row
//! - A side with no pieces left loses; a side that cannot move forfeits
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Pieces, positions and the board grid
//! - [`rules`]: Destination enumeration, move application, game-over checks
//! - [`eval`]: Move scoring heuristic
//! - [`engine`]: CPU move selection
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use checkers::{AIEngine, Board, Owner, Pos};
//! use checkers::rules::{apply_move, check_game_over, space_available};
//!
//! let mut board = Board::new();
//!
//! // Human moves a man off the front row
//! let piece = *board.get(Pos::new(5, 0)).unwrap();
//! let dest = space_available(&board, &piece)[0];
//! apply_move(&mut board, piece.pos(), dest.pos).unwrap();
//!
//! // CPU replies
//! let mut engine = AIEngine::with_seed(1);
//! let choice = engine.choose_move(&board).unwrap();
//! apply_move(&mut board, choice.mv.from, choice.mv.to).unwrap();
//!
//! assert_eq!(check_game_over(&mut board), None);
//! assert_eq!(board.remaining(Owner::Cpu), 12);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Category, Owner, Piece, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveChoice};
pub use error::{EngineError, MoveError};
