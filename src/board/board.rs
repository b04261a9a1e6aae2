//! Board structure with piece counts and winner tracking

use super::{Category, Owner, Piece, Pos, BOARD_SIZE, PIECES_PER_SIDE};

/// Game board: grid of optional pieces plus per-side counts
///
/// `cpu_remaining` / `human_remaining` always equal the number of live
/// pieces of that side on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) cpu_remaining: u8,
    pub(crate) human_remaining: u8,
    pub(crate) winner: Option<Owner>,
}

impl Board {
    /// Board set up with the standard opening
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize_game();
        board
    }

    /// Board with no pieces, for building custom positions
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            cpu_remaining: 0,
            human_remaining: 0,
            winner: None,
        }
    }

    /// Reset to the opening layout: 12 men per side on the dark squares,
    /// CPU on rows 0-2, human on rows 5-7.
    pub fn initialize_game(&mut self) {
        self.grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for owner in [Owner::Cpu, Owner::Human] {
            for row in owner.home_rows() {
                for col in 0..BOARD_SIZE as u8 {
                    if Pos::new(row, col).is_dark() {
                        self.grid[row as usize][col as usize] =
                            Some(Piece::new(Category::Man(owner), row, col));
                    }
                }
            }
        }
        self.cpu_remaining = PIECES_PER_SIDE;
        self.human_remaining = PIECES_PER_SIDE;
        self.winner = None;
    }

    /// Get piece at position; `None` when empty or off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Piece> {
        self.grid.get(pos.row as usize)?.get(pos.col as usize)?.as_ref()
    }

    /// Get piece at (row, col); `None` when empty or off the board
    #[inline]
    pub fn get_board_val(&self, row: i32, col: i32) -> Option<&Piece> {
        if self.in_bounds(row, col) {
            self.grid[row as usize][col as usize].as_ref()
        } else {
            None
        }
    }

    /// Whole grid, row-major
    #[inline]
    pub fn grid(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// On the board and unoccupied
    #[inline]
    pub fn valid_pos(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col) && self.grid[row as usize][col as usize].is_none()
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Live pieces for a side
    #[inline]
    pub fn remaining(&self, owner: Owner) -> u8 {
        match owner {
            Owner::Cpu => self.cpu_remaining,
            Owner::Human => self.human_remaining,
        }
    }

    #[inline]
    pub fn winner(&self) -> Option<Owner> {
        self.winner
    }

    /// Put a piece on the cell its coordinates name, replacing any occupant.
    /// Counts are kept in step with the grid.
    pub fn place_piece(&mut self, piece: Piece) {
        let pos = piece.pos();
        self.remove_piece(pos);
        self.grid[pos.row as usize][pos.col as usize] = Some(piece);
        *self.remaining_mut(piece.owner()) += 1;
    }

    /// Remove and return the piece at a position
    pub fn remove_piece(&mut self, pos: Pos) -> Option<Piece> {
        let removed = self.grid[pos.row as usize][pos.col as usize].take();
        if let Some(piece) = removed {
            let count = self.remaining_mut(piece.owner());
            *count = count.saturating_sub(1);
        }
        removed
    }

    #[inline]
    pub(crate) fn remaining_mut(&mut self, owner: Owner) -> &mut u8 {
        match owner {
            Owner::Cpu => &mut self.cpu_remaining,
            Owner::Human => &mut self.human_remaining,
        }
    }

    /// Iterate every piece in row-major order
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.iter().flatten().flatten()
    }

    /// Iterate a side's pieces in row-major order
    pub fn pieces(&self, owner: Owner) -> impl Iterator<Item = &Piece> + '_ {
        self.all_pieces().filter(move |p| p.owner() == owner)
    }

    /// Count a side's pieces by scanning the grid
    pub fn count_pieces(&self, owner: Owner) -> u8 {
        self.pieces(owner).count() as u8
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  01234567")?;
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{} ", row)?;
            for cell in cells {
                let ch = cell.map_or('.', |p| p.symbol());
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
