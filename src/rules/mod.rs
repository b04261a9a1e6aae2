//! Checkers rules
//!
//! This module implements the rule set:
//! - Destination enumeration (single steps and single jumps)
//! - Move application (capture removal, promotion)
//! - Game-over detection (no pieces left, blocked side)

pub mod apply;
pub mod movegen;
pub mod status;

// Re-exports for convenient access
pub use apply::{apply_move, MoveOutcome};
pub use movegen::{has_legal_move, legal_moves, space_available, Destination, Move};
pub use status::{check_game_over, game_status, GameStatus, WinReason};
