//! A single checker

use super::{Category, Owner, Pos};

/// One checker: its category and the cell it stands on.
///
/// Equality is structural over all three fields. The constructor does not
/// bounds-check coordinates; [`Board`](super::Board) keeps every stored
/// piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub category: Category,
    pub row: u8,
    pub col: u8,
}

impl Piece {
    #[inline]
    pub fn new(category: Category, row: u8, col: u8) -> Self {
        Self { category, row, col }
    }

    /// Move the piece to a new cell (no validation)
    #[inline]
    pub fn relocate(&mut self, new_row: u8, new_col: u8) {
        self.row = new_row;
        self.col = new_col;
    }

    /// Stored coordinates as a `Pos`, unchecked like `relocate`
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos { row: self.row, col: self.col }
    }

    #[inline]
    pub fn owner(&self) -> Owner {
        self.category.owner()
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.category.is_king()
    }

    /// Whether `other` belongs to the opposing side
    #[inline]
    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.owner() != other.owner()
    }

    /// Single-character form used in text dumps: `c`/`h` men, `C`/`H` kings
    pub fn symbol(&self) -> char {
        match self.category {
            Category::Man(Owner::Cpu) => 'c',
            Category::Man(Owner::Human) => 'h',
            Category::King(Owner::Cpu) => 'C',
            Category::King(Owner::Human) => 'H',
        }
    }
}
