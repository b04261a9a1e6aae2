//! Error types for move application and automated selection

use std::fmt;

use crate::board::{Owner, Pos};

/// Why a move request was rejected. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    EmptySquare(Pos),
    /// Destination is not among the piece's available spaces
    IllegalDestination { from: Pos, to: Pos },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare(pos) => write!(f, "no piece at {}", pos),
            MoveError::IllegalDestination { from, to } => {
                write!(f, "piece at {} cannot move to {}", from, to)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Failure of automated move selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The side has no piece with a legal move
    NoMovesAvailable(Owner),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoMovesAvailable(owner) => {
                write!(f, "{} has no legal moves", owner)
            }
        }
    }
}

impl std::error::Error for EngineError {}
