//! Game-over detection
//!
//! A side loses when it has no pieces left. A side that still has pieces
//! but no legal move forfeits; that case is reported by [`game_status`]
//! only and never written to the board's winner.

use log::info;

use crate::board::{Board, Owner};

use super::movegen::has_legal_move;

/// How a game was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left
    NoPiecesLeft,
    /// The loser had pieces but no legal move on its turn
    Blocked,
}

/// Current status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Owner, reason: WinReason },
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    pub fn winner(&self) -> Option<Owner> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            GameStatus::InProgress => None,
        }
    }
}

/// Record a winner once a side runs out of pieces.
///
/// CPU at zero makes the human the winner; otherwise human at zero makes
/// the CPU the winner. An already recorded winner is kept when neither
/// count is zero.
pub fn check_game_over(board: &mut Board) -> Option<Owner> {
    let winner = if board.remaining(Owner::Cpu) == 0 {
        Some(Owner::Human)
    } else if board.remaining(Owner::Human) == 0 {
        Some(Owner::Cpu)
    } else {
        None
    };

    if let Some(winner) = winner {
        if board.winner != Some(winner) {
            info!("{} wins: opponent has no pieces left", winner);
        }
        board.winner = Some(winner);
    }

    board.winner
}

/// Status of the game with `to_move` about to play.
///
/// Piece exhaustion is checked first (same order as [`check_game_over`]),
/// then whether the side to move is blocked.
pub fn game_status(board: &Board, to_move: Owner) -> GameStatus {
    if board.remaining(Owner::Cpu) == 0 {
        return GameStatus::Won {
            winner: Owner::Human,
            reason: WinReason::NoPiecesLeft,
        };
    }
    if board.remaining(Owner::Human) == 0 {
        return GameStatus::Won {
            winner: Owner::Cpu,
            reason: WinReason::NoPiecesLeft,
        };
    }
    if !has_legal_move(board, to_move) {
        return GameStatus::Won {
            winner: to_move.opponent(),
            reason: WinReason::Blocked,
        };
    }
    GameStatus::InProgress
}
