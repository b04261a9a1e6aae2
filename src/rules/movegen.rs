//! Legal destination enumeration
//!
//! Only single diagonal steps and single jumps from the piece's current
//! square are generated. Jumps are never chained and never mandatory, so
//! captures appear alongside simple moves in the same list.

use crate::board::{Board, Owner, Piece, Pos};

/// A square a piece can reach in one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    pub pos: Pos,
    /// True when the move leaps over an opponent piece
    pub is_jump: bool,
}

/// A full move: origin and destination squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub is_jump: bool,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_jump { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// List every square `piece` can move to from where it stands.
///
/// Simple steps come first, then jumps, each in the order of the
/// category's directions (forward diagonals first).
///
/// # Arguments
/// * `board` - Current board state
/// * `piece` - Piece to move; its stored coordinates are the origin
///
/// # Returns
/// Destinations tagged with whether they capture
pub fn space_available(board: &Board, piece: &Piece) -> Vec<Destination> {
    let mut available = Vec::with_capacity(8);
    let row = piece.row as i32;
    let col = piece.col as i32;
    let directions = piece.category.directions();

    for (dr, dc) in directions.clone() {
        let (r1, c1) = (row + dr as i32, col + dc as i32);
        if board.valid_pos(r1, c1) {
            available.push(Destination {
                pos: Pos::new(r1 as u8, c1 as u8),
                is_jump: false,
            });
        }
    }

    for (dr, dc) in directions {
        let (r1, c1) = (row + dr as i32, col + dc as i32);
        let (r2, c2) = (row + dr as i32 * 2, col + dc as i32 * 2);

        let jumped = match board.get_board_val(r1, c1) {
            Some(other) => other,
            None => continue,
        };

        if piece.is_opponent_of(jumped) && board.valid_pos(r2, c2) {
            available.push(Destination {
                pos: Pos::new(r2 as u8, c2 as u8),
                is_jump: true,
            });
        }
    }

    available
}

/// Every move a side can make, scanning its pieces row by row
pub fn legal_moves(board: &Board, owner: Owner) -> Vec<Move> {
    board
        .pieces(owner)
        .flat_map(|piece| {
            let from = piece.pos();
            space_available(board, piece)
                .into_iter()
                .map(move |dest| Move {
                    from,
                    to: dest.pos,
                    is_jump: dest.is_jump,
                })
        })
        .collect()
}

/// Check if a side has at least one legal move
#[inline]
pub fn has_legal_move(board: &Board, owner: Owner) -> bool {
    board
        .pieces(owner)
        .any(|piece| !space_available(board, piece).is_empty())
}
