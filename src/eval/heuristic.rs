//! Heuristic score of a single move
//!
//! Only the CPU's own promotion row earns the crowning bonus. A human man
//! reaching row 0 scores nothing extra, so hints for the human side rank
//! captures only.

use crate::board::{Category, Owner, Piece, Pos};

/// Score weights for move selection
pub struct MoveScore;

impl MoveScore {
    /// CPU man reaching row 7
    pub const PROMOTION: i32 = 2;
    /// Move leaps over an opponent piece
    pub const JUMP: i32 = 1;
}

/// Score moving `piece` to `destination`.
///
/// Starts at 0, adds [`MoveScore::PROMOTION`] when a CPU man lands on its
/// promotion row and [`MoveScore::JUMP`] when both coordinate deltas are
/// even (a two-square leap rather than a single step).
#[must_use]
pub fn get_move_score(piece: &Piece, destination: Pos) -> i32 {
    let mut score = 0;

    if piece.category == Category::Man(Owner::Cpu)
        && destination.row == Owner::Cpu.promotion_row()
    {
        score += MoveScore::PROMOTION;
    }

    let delta_row = destination.row as i32 - piece.row as i32;
    let delta_col = destination.col as i32 - piece.col as i32;
    if delta_row % 2 == 0 && delta_col % 2 == 0 {
        score += MoveScore::JUMP;
    }

    score
}
