//! Move application: capture removal and promotion

use log::{debug, trace};

use crate::board::{Board, Piece, Pos};
use crate::error::MoveError;

use super::movegen::space_available;

/// What a successful move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Pos,
    pub to: Pos,
    /// Piece removed by a jump
    pub captured: Option<Piece>,
    /// True when a man was crowned on arrival
    pub promoted: bool,
}

impl MoveOutcome {
    #[inline]
    pub fn is_jump(&self) -> bool {
        self.captured.is_some()
    }
}

/// Apply a move from `from` to `to`.
///
/// The destination is re-validated against [`space_available`] for the
/// piece on `from`. A rejected move leaves the board exactly as it was.
///
/// On success:
/// 1. A jump clears the midpoint and decrements the opponent's count
/// 2. The origin is cleared and the piece relocated
/// 3. A man reaching its promotion row is replaced by a king
pub fn apply_move(board: &mut Board, from: Pos, to: Pos) -> Result<MoveOutcome, MoveError> {
    let mut piece = *board.get(from).ok_or(MoveError::EmptySquare(from))?;

    let legal = space_available(board, &piece)
        .iter()
        .any(|dest| dest.pos == to);
    if !legal {
        trace!("rejected {} -> {}:\n{}", from, to, board);
        return Err(MoveError::IllegalDestination { from, to });
    }

    let delta_row = to.row as i32 - from.row as i32;
    let delta_col = to.col as i32 - from.col as i32;

    let mut captured = None;
    if delta_row.abs() == 2 {
        let mid = Pos::new(
            (from.row as i32 + delta_row / 2) as u8,
            (from.col as i32 + delta_col / 2) as u8,
        );
        captured = board.grid[mid.row as usize][mid.col as usize].take();
        if let Some(jumped) = captured {
            let count = board.remaining_mut(jumped.owner());
            *count = count.saturating_sub(1);
        }
    }

    board.grid[from.row as usize][from.col as usize] = None;
    piece.relocate(to.row, to.col);

    let promoted = piece.category.promotion_row() == Some(to.row);
    if promoted {
        piece = Piece::new(piece.category.promoted(), to.row, to.col);
    }

    board.grid[to.row as usize][to.col as usize] = Some(piece);

    debug!(
        "{} moved {} -> {}{}{}",
        piece.owner(),
        from,
        to,
        if captured.is_some() { " capturing" } else { "" },
        if promoted { " and was crowned" } else { "" },
    );

    Ok(MoveOutcome {
        from,
        to,
        captured,
        promoted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Category, Owner};

    fn man(owner: Owner, row: u8, col: u8) -> Piece {
        Piece::new(Category::Man(owner), row, col)
    }

    /// Opening board with one human man moved from (5,0) to (3,2)
    fn board_with_capture_ready() -> Board {
        let mut board = Board::new();
        board.remove_piece(Pos::new(5, 0));
        board.place_piece(man(Owner::Human, 3, 2));
        board
    }

    #[test]
    fn test_simple_move() {
        let mut board = Board::new();
        let outcome = apply_move(&mut board, Pos::new(2, 1), Pos::new(3, 0)).unwrap();

        assert_eq!(outcome.captured, None);
        assert!(!outcome.promoted);
        assert!(board.is_empty(Pos::new(2, 1)));
        assert_eq!(board.get(Pos::new(3, 0)), Some(&man(Owner::Cpu, 3, 0)));
        assert_eq!(board.remaining(Owner::Cpu), 12);
        assert_eq!(board.remaining(Owner::Human), 12);
    }

    #[test]
    fn test_jump_scenario() {
        let mut board = board_with_capture_ready();
        assert_eq!(board.remaining(Owner::Human), 12);

        let piece = *board.get(Pos::new(2, 1)).unwrap();
        let dests = space_available(&board, &piece);
        assert!(dests
            .iter()
            .any(|d| d.pos == Pos::new(4, 3) && d.is_jump));

        let outcome = apply_move(&mut board, Pos::new(2, 1), Pos::new(4, 3)).unwrap();
        assert_eq!(outcome.captured, Some(man(Owner::Human, 3, 2)));
        assert!(outcome.is_jump());
        assert!(board.is_empty(Pos::new(2, 1)));
        assert!(board.is_empty(Pos::new(3, 2)));
        assert_eq!(board.get(Pos::new(4, 3)), Some(&man(Owner::Cpu, 4, 3)));
        assert_eq!(board.remaining(Owner::Human), 11);
        assert_eq!(board.remaining(Owner::Cpu), 12);
        assert_eq!(board.count_pieces(Owner::Human), 11);
    }

    #[test]
    fn test_jump_in_each_direction_clears_midpoint() {
        let directions = [(1i8, 1i8), (1, -1), (-1, 1), (-1, -1)];
        for (dr, dc) in directions {
            let mut board = Board::empty();
            let origin = Pos::new(3, 3);
            board.place_piece(Piece::new(Category::King(Owner::Human), 3, 3));
            let mid = origin.offset((dr, dc), 1).unwrap();
            let land = origin.offset((dr, dc), 2).unwrap();
            board.place_piece(man(Owner::Cpu, mid.row, mid.col));

            apply_move(&mut board, origin, land).unwrap();
            assert!(board.is_empty(mid), "direction {:?}\n{}", (dr, dc), board);
            assert_eq!(board.remaining(Owner::Cpu), 0);
            assert_eq!(board.get(land).map(|p| p.pos()), Some(land));
        }
    }

    #[test]
    fn test_cpu_promotion() {
        let mut board = Board::empty();
        board.place_piece(man(Owner::Cpu, 6, 1));
        let outcome = apply_move(&mut board, Pos::new(6, 1), Pos::new(7, 2)).unwrap();

        assert!(outcome.promoted);
        assert_eq!(
            board.get(Pos::new(7, 2)),
            Some(&Piece::new(Category::King(Owner::Cpu), 7, 2))
        );
        assert_eq!(board.remaining(Owner::Cpu), 1);
    }

    #[test]
    fn test_human_promotion_by_jump() {
        let mut board = Board::empty();
        board.place_piece(man(Owner::Human, 2, 3));
        board.place_piece(man(Owner::Cpu, 1, 2));
        let outcome = apply_move(&mut board, Pos::new(2, 3), Pos::new(0, 1)).unwrap();

        assert!(outcome.promoted);
        assert!(outcome.is_jump());
        assert_eq!(
            board.get(Pos::new(0, 1)),
            Some(&Piece::new(Category::King(Owner::Human), 0, 1))
        );
        assert_eq!(board.remaining(Owner::Cpu), 0);
    }

    #[test]
    fn test_king_is_not_repromoted() {
        let mut board = Board::empty();
        board.place_piece(Piece::new(Category::King(Owner::Cpu), 6, 1));
        let outcome = apply_move(&mut board, Pos::new(6, 1), Pos::new(7, 0)).unwrap();
        assert!(!outcome.promoted);
        assert!(board.get(Pos::new(7, 0)).unwrap().is_king());
    }

    #[test]
    fn test_rejected_move_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();

        // Backwards, too far, onto own piece, sideways
        let attempts = [
            (Pos::new(2, 1), Pos::new(1, 0)),
            (Pos::new(2, 1), Pos::new(4, 3)),
            (Pos::new(1, 0), Pos::new(2, 1)),
            (Pos::new(2, 1), Pos::new(2, 3)),
        ];
        for (from, to) in attempts {
            let err = apply_move(&mut board, from, to).unwrap_err();
            assert_eq!(err, MoveError::IllegalDestination { from, to });
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_move_from_empty_square() {
        let mut board = Board::new();
        let before = board.clone();
        let err = apply_move(&mut board, Pos::new(3, 0), Pos::new(4, 1)).unwrap_err();
        assert_eq!(err, MoveError::EmptySquare(Pos::new(3, 0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_from_off_board_square() {
        let mut board = Board::new();
        let before = board.clone();
        let off = Pos { row: 8, col: 1 };
        assert_eq!(
            apply_move(&mut board, off, Pos::new(7, 0)),
            Err(MoveError::EmptySquare(off))
        );
        assert_eq!(board, before);
    }
}
