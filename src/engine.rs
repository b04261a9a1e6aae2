//! Automated opponent
//!
//! The engine does no search. It scores every legal move of its side with
//! [`get_move_score`], keeps the moves sharing the best score, and picks
//! one of them at random:
//!
//! 1. **Crowning** a man outranks everything else
//! 2. **Capturing** comes next
//! 3. Any other move is a tie broken by the random source
//!
//! Randomness comes from an injected generator so seeded games replay
//! exactly.
//!
//! # Example
//!
//! ```
//! use checkers::{AIEngine, Board};
//! use checkers::rules::apply_move;
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_seed(42);
//!
//! let choice = engine.choose_move(&board).unwrap();
//! apply_move(&mut board, choice.mv.from, choice.mv.to).unwrap();
//! ```

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Owner};
use crate::error::EngineError;
use crate::eval::get_move_score;
use crate::rules::{legal_moves, Move};

/// A selected move with the data that led to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    /// Chosen move
    pub mv: Move,
    /// Heuristic score of the chosen move (the best available)
    pub score: i32,
    /// Number of moves that shared the best score
    pub candidates: usize,
}

/// Pick a move for `owner` using the scoring heuristic.
///
/// Every piece of `owner` (men and kings) is scanned in row-major order,
/// every destination scored, and one of the highest-scoring moves chosen
/// uniformly with `rng`.
///
/// # Errors
///
/// [`EngineError::NoMovesAvailable`] when no piece of `owner` can move.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    owner: Owner,
    rng: &mut R,
) -> Result<MoveChoice, EngineError> {
    let mut best_score = i32::MIN;
    let mut best_moves: Vec<Move> = Vec::new();

    for mv in legal_moves(board, owner) {
        let Some(piece) = board.get(mv.from) else {
            continue;
        };
        let score = get_move_score(piece, mv.to);
        trace!("candidate {} scores {}", mv, score);

        if score > best_score {
            best_score = score;
            best_moves.clear();
        }
        if score == best_score {
            best_moves.push(mv);
        }
    }

    if best_moves.is_empty() {
        debug!("{} has no legal moves", owner);
        return Err(EngineError::NoMovesAvailable(owner));
    }

    let index = rng.random_range(0..best_moves.len());
    let choice = MoveChoice {
        mv: best_moves[index],
        score: best_score,
        candidates: best_moves.len(),
    };

    debug!(
        "{} chooses {} (score {}, {} tied)",
        owner, choice.mv, choice.score, choice.candidates
    );
    Ok(choice)
}

/// CPU opponent owning its random sources.
///
/// The CPU's tie-breaks and hint tie-breaks draw from separate
/// generators, so asking for hints never changes what the CPU plays.
pub struct AIEngine {
    /// Tie-breaks for the CPU's own moves
    rng: StdRng,
    /// Tie-breaks for hints
    hint_rng: StdRng,
}

impl AIEngine {
    /// Create an engine for the CPU side seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            hint_rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic engine for the CPU side.
    ///
    /// ```
    /// use checkers::{AIEngine, Board};
    ///
    /// let board = Board::new();
    /// let a = AIEngine::with_seed(7).choose_move(&board).unwrap();
    /// let b = AIEngine::with_seed(7).choose_move(&board).unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            hint_rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    /// Choose the CPU's next move.
    pub fn choose_move(&mut self, board: &Board) -> Result<MoveChoice, EngineError> {
        choose_move(board, Owner::Cpu, &mut self.rng)
    }

    /// Choose a move for any side, used for hints.
    pub fn suggest_move(&mut self, board: &Board, owner: Owner) -> Result<MoveChoice, EngineError> {
        choose_move(board, owner, &mut self.hint_rng)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Category, Piece, Pos};

    fn man(owner: Owner, row: u8, col: u8) -> Piece {
        Piece::new(Category::Man(owner), row, col)
    }

    #[test]
    fn test_opening_choice_is_legal() {
        let board = Board::new();
        let mut engine = AIEngine::with_seed(1);
        let choice = engine.choose_move(&board).unwrap();

        assert!(legal_moves(&board, Owner::Cpu).contains(&choice.mv));
        assert_eq!(choice.score, 0);
        // All seven opening moves tie
        assert_eq!(choice.candidates, 7);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        for seed in 0..20 {
            let a = AIEngine::with_seed(seed).choose_move(&board).unwrap();
            let b = AIEngine::with_seed(seed).choose_move(&board).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_seeds_cover_all_tied_moves() {
        let board = Board::new();
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            seen.insert(AIEngine::with_seed(seed).choose_move(&board).unwrap().mv);
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_prefers_jump() {
        let mut board = Board::new();
        board.remove_piece(Pos::new(5, 0));
        board.place_piece(man(Owner::Human, 3, 2));

        // (2,1) and (2,3) can both take the man on (3,2)
        for seed in 0..10 {
            let choice = AIEngine::with_seed(seed).choose_move(&board).unwrap();
            assert_eq!(choice.score, 1);
            assert_eq!(choice.candidates, 2);
            assert!(choice.mv.is_jump);
            assert!(choice.mv.to == Pos::new(4, 3) || choice.mv.to == Pos::new(4, 1));
        }
    }

    #[test]
    fn test_prefers_promotion_over_jump() {
        let mut board = Board::empty();
        board.place_piece(man(Owner::Cpu, 6, 1));
        board.place_piece(man(Owner::Cpu, 2, 1));
        board.place_piece(man(Owner::Human, 3, 2));

        let mut rng = StdRng::seed_from_u64(3);
        let choice = choose_move(&board, Owner::Cpu, &mut rng).unwrap();
        assert_eq!(choice.score, 2);
        assert_eq!(choice.mv.from, Pos::new(6, 1));
        assert_eq!(choice.mv.to.row, 7);
        // (7,0) and (7,2) both crown
        assert_eq!(choice.candidates, 2);
    }

    #[test]
    fn test_kings_are_considered() {
        let mut board = Board::empty();
        board.place_piece(Piece::new(Category::King(Owner::Cpu), 7, 0));

        let choice = AIEngine::with_seed(0).choose_move(&board).unwrap();
        assert_eq!(choice.mv.from, Pos::new(7, 0));
        assert_eq!(choice.mv.to, Pos::new(6, 1));
    }

    #[test]
    fn test_no_moves_is_an_error() {
        let mut board = Board::empty();
        board.place_piece(man(Owner::Cpu, 7, 0));
        board.place_piece(man(Owner::Human, 5, 0));

        let mut engine = AIEngine::with_seed(0);
        assert_eq!(
            engine.choose_move(&board),
            Err(EngineError::NoMovesAvailable(Owner::Cpu))
        );
        assert_eq!(
            engine.choose_move(&Board::empty()),
            Err(EngineError::NoMovesAvailable(Owner::Cpu))
        );
    }

    #[test]
    fn test_suggest_for_human() {
        let board = Board::new();
        let mut engine = AIEngine::with_seed(5);
        let choice = engine.suggest_move(&board, Owner::Human).unwrap();
        assert!(legal_moves(&board, Owner::Human).contains(&choice.mv));
    }

    #[test]
    fn test_hints_leave_cpu_choices_alone() {
        let board = Board::new();
        for seed in 0..20 {
            let mut plain = AIEngine::with_seed(seed);
            let mut hinted = AIEngine::with_seed(seed);
            for _ in 0..5 {
                hinted.suggest_move(&board, Owner::Human).unwrap();
                hinted.suggest_move(&board, Owner::Cpu).unwrap();
                assert_eq!(plain.choose_move(&board), hinted.choose_move(&board));
            }
        }
    }
}
