//! Board representation for checkers

pub mod board;
pub mod piece;


// Re-exports
pub use board::Board;
pub use piece::Piece;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Men each side starts with
pub const PIECES_PER_SIDE: u8 = 12;

/// Side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Automated side: starts on rows 0-2 and moves down the board
    Cpu,
    /// Human side: starts on rows 5-7 and moves up the board
    Human,
}

impl Owner {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Owner {
        match self {
            Owner::Cpu => Owner::Human,
            Owner::Human => Owner::Cpu,
        }
    }

    /// Row delta of a forward step
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Owner::Cpu => 1,
            Owner::Human => -1,
        }
    }

    /// Row on which this side's men are crowned
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Owner::Cpu => BOARD_SIZE as u8 - 1,
            Owner::Human => 0,
        }
    }

    /// Rows this side fills at the start of a game
    pub fn home_rows(self) -> std::ops::Range<u8> {
        match self {
            Owner::Cpu => 0..3,
            Owner::Human => 5..8,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Cpu => write!(f, "CPU"),
            Owner::Human => write!(f, "Human"),
        }
    }
}

/// Piece category: man or king, tagged with its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Man(Owner),
    King(Owner),
}

impl Category {
    #[inline]
    pub fn owner(self) -> Owner {
        match self {
            Category::Man(owner) | Category::King(owner) => owner,
        }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Category::King(_))
    }

    /// Diagonal step directions as (row delta, col delta)
    ///
    /// Men only step forward; kings step in all four diagonals, forward
    /// pair first. Row deltas come from [`Owner::forward`].
    pub fn directions(self) -> impl Iterator<Item = (i8, i8)> + Clone {
        let forward = self.owner().forward();
        let rows = if self.is_king() { 2 } else { 1 };
        [forward, -forward]
            .into_iter()
            .take(rows)
            .flat_map(|dr| [(dr, -1), (dr, 1)])
    }

    /// Row that crowns this category, `None` for kings
    #[inline]
    pub fn promotion_row(self) -> Option<u8> {
        match self {
            Category::Man(owner) => Some(owner.promotion_row()),
            Category::King(_) => None,
        }
    }

    /// Category after crowning (kings stay kings)
    #[inline]
    pub fn promoted(self) -> Category {
        Category::King(self.owner())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Position offset by `steps` cells along a diagonal, if still on the board
    #[inline]
    pub fn offset(self, (dr, dc): (i8, i8), steps: i32) -> Option<Pos> {
        let row = self.row as i32 + dr as i32 * steps;
        let col = self.col as i32 + dc as i32 * steps;
        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Playable (dark) square: row + col is odd
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
