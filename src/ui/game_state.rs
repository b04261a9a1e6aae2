//! Game state management for the checkers GUI
//!
//! Turn flow for the human: select a piece, then a highlighted
//! destination. The CPU answers after a configurable pause; the pause is a
//! deadline polled every frame, never a sleep.

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::engine::{AIEngine, MoveChoice};
use crate::rules::{
    apply_move, check_game_over, game_status, space_available, Destination, GameStatus, Move,
    MoveOutcome, WinReason,
};
use crate::{Board, Owner, Pos};

/// Runtime settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause before the CPU plays its move
    pub cpu_delay: Duration,
    /// Seed for the CPU's tie-breaks; OS entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cpu_delay: Duration::from_millis(1000),
            seed: None,
        }
    }
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    GameOver,
}

/// Human turn progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    AwaitingSelection,
    AwaitingDestination {
        origin: Pos,
        destinations: Vec<Destination>,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub screen: Screen,
    pub current_turn: Owner,
    pub turn_state: TurnState,
    pub status: GameStatus,
    pub last_move: Option<Move>,
    pub move_history: Vec<MoveOutcome>,
    pub last_cpu_choice: Option<MoveChoice>,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,

    engine: AIEngine,
    config: GameConfig,
    /// When the pending CPU move becomes due
    cpu_due: Option<Instant>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        };

        Self {
            board: Board::new(),
            screen: Screen::Title,
            current_turn: Owner::Human,
            turn_state: TurnState::AwaitingSelection,
            status: GameStatus::InProgress,
            last_move: None,
            move_history: Vec::new(),
            last_cpu_choice: None,
            suggested_move: None,
            message: None,
            engine,
            config,
            cpu_due: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Leave the title screen and start a game
    pub fn start(&mut self) {
        self.reset();
        self.screen = Screen::Playing;
        info!("new game started");
    }

    /// Fresh board, human to move. The CPU engine keeps its random stream.
    pub fn reset(&mut self) {
        self.board.initialize_game();
        self.current_turn = Owner::Human;
        self.turn_state = TurnState::AwaitingSelection;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_history.clear();
        self.last_cpu_choice = None;
        self.suggested_move = None;
        self.message = None;
        self.cpu_due = None;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.screen == Screen::Playing && self.current_turn == Owner::Human
    }

    /// Check if it's the CPU's turn
    pub fn is_cpu_turn(&self) -> bool {
        self.screen == Screen::Playing && self.current_turn == Owner::Cpu
    }

    /// Currently selected piece, if any
    pub fn selected(&self) -> Option<Pos> {
        match &self.turn_state {
            TurnState::AwaitingDestination { origin, .. } => Some(*origin),
            TurnState::AwaitingSelection => None,
        }
    }

    /// Destinations of the selected piece
    pub fn highlighted(&self) -> &[Destination] {
        match &self.turn_state {
            TurnState::AwaitingDestination { destinations, .. } => destinations,
            TurnState::AwaitingSelection => &[],
        }
    }

    /// Handle a click on a board square during the human turn.
    ///
    /// A highlighted destination plays the move; one of the human's own
    /// pieces becomes the selection.
    pub fn click_square(&mut self, pos: Pos) -> Result<(), String> {
        if self.screen != Screen::Playing {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if let TurnState::AwaitingDestination { origin, destinations } = &self.turn_state {
            if destinations.iter().any(|d| d.pos == pos) {
                let origin = *origin;
                return self.play_human_move(origin, pos);
            }
        }

        match self.board.get(pos) {
            Some(piece) if piece.owner() == Owner::Human => {
                let destinations = space_available(&self.board, piece);
                if destinations.is_empty() {
                    self.turn_state = TurnState::AwaitingSelection;
                    return Err("That piece cannot move".to_string());
                }
                self.turn_state = TurnState::AwaitingDestination {
                    origin: pos,
                    destinations,
                };
                self.message = None;
                Ok(())
            }
            Some(_) => Err("That is not your piece".to_string()),
            None if self.selected().is_some() => Err("Cannot move there".to_string()),
            None => Err("Select one of your pieces".to_string()),
        }
    }

    fn play_human_move(&mut self, from: Pos, to: Pos) -> Result<(), String> {
        let outcome = apply_move(&mut self.board, from, to).map_err(|e| e.to_string())?;
        self.finish_move(outcome);
        Ok(())
    }

    /// Play the CPU move once its deadline has passed.
    ///
    /// Returns true when a move was made.
    pub fn poll_cpu(&mut self, now: Instant) -> bool {
        if !self.is_cpu_turn() {
            return false;
        }

        let due = *self.cpu_due.get_or_insert(now + self.config.cpu_delay);
        if now < due {
            return false;
        }
        self.cpu_due = None;

        let choice = match self.engine.choose_move(&self.board) {
            Ok(choice) => choice,
            Err(err) => {
                warn!("{}", err);
                self.message = Some(err.to_string());
                self.end_game(GameStatus::Won {
                    winner: Owner::Human,
                    reason: WinReason::Blocked,
                });
                return false;
            }
        };

        match apply_move(&mut self.board, choice.mv.from, choice.mv.to) {
            Ok(outcome) => {
                self.last_cpu_choice = Some(choice);
                self.finish_move(outcome);
                true
            }
            Err(err) => {
                warn!("CPU move rejected: {}", err);
                self.message = Some(format!("CPU error: {}", err));
                false
            }
        }
    }

    /// Time left before the CPU moves
    pub fn cpu_wait_remaining(&self, now: Instant) -> Option<Duration> {
        self.cpu_due.map(|due| due.saturating_duration_since(now))
    }

    /// Record a move, check for the end of the game and pass the turn
    fn finish_move(&mut self, outcome: MoveOutcome) {
        let mover = self.current_turn;
        info!(
            "{} played {} -> {}{}",
            mover,
            outcome.from,
            outcome.to,
            if outcome.promoted { " (crowned)" } else { "" }
        );

        self.move_history.push(outcome);
        self.last_move = Some(Move {
            from: outcome.from,
            to: outcome.to,
            is_jump: outcome.is_jump(),
        });
        self.turn_state = TurnState::AwaitingSelection;
        self.suggested_move = None;
        self.message = None;

        check_game_over(&mut self.board);
        let next = mover.opponent();
        let status = game_status(&self.board, next);
        if status.is_over() {
            self.end_game(status);
            return;
        }

        self.current_turn = next;
    }

    fn end_game(&mut self, status: GameStatus) {
        self.status = status;
        self.screen = Screen::GameOver;
        self.cpu_due = None;
        if let GameStatus::Won { winner, reason } = status {
            info!("game over: {} wins ({:?})", winner, reason);
        }
    }

    /// Ask the engine for a move hint for the human
    pub fn request_suggestion(&mut self) {
        if !self.is_human_turn() {
            return;
        }
        match self.engine.suggest_move(&self.board, Owner::Human) {
            Ok(choice) => self.suggested_move = Some(choice.mv),
            Err(err) => self.message = Some(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Category, Piece};
    use crate::rules::legal_moves;

    fn instant_config() -> GameConfig {
        GameConfig {
            cpu_delay: Duration::ZERO,
            seed: Some(1),
        }
    }

    fn playing() -> GameState {
        let mut state = GameState::new(instant_config());
        state.start();
        state
    }

    #[test]
    fn test_starts_on_title_screen() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.screen, Screen::Title);
        assert!(!state.is_human_turn());
        assert_eq!(state.config().cpu_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_select_then_move() {
        let mut state = playing();
        assert!(state.is_human_turn());

        state.click_square(Pos::new(5, 0)).unwrap();
        assert_eq!(state.selected(), Some(Pos::new(5, 0)));
        assert_eq!(state.highlighted().len(), 1);

        state.click_square(Pos::new(4, 1)).unwrap();
        assert_eq!(state.turn_state, TurnState::AwaitingSelection);
        assert!(state.is_cpu_turn());
        assert_eq!(state.move_history.len(), 1);
        assert!(state.board.get(Pos::new(4, 1)).is_some());
    }

    #[test]
    fn test_reselect_other_piece() {
        let mut state = playing();
        state.click_square(Pos::new(5, 0)).unwrap();
        state.click_square(Pos::new(5, 2)).unwrap();
        assert_eq!(state.selected(), Some(Pos::new(5, 2)));
        assert_eq!(state.highlighted().len(), 2);
    }

    #[test]
    fn test_rejected_clicks() {
        let mut state = playing();
        assert!(state.click_square(Pos::new(2, 1)).is_err()); // CPU piece
        assert!(state.click_square(Pos::new(3, 0)).is_err()); // empty
        assert!(state.click_square(Pos::new(6, 1)).is_err()); // blocked piece
        assert_eq!(state.selected(), None);

        state.click_square(Pos::new(5, 0)).unwrap();
        assert!(state.click_square(Pos::new(3, 2)).is_err()); // not highlighted
        assert_eq!(state.selected(), Some(Pos::new(5, 0)));
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_cpu_waits_for_delay() {
        let mut state = GameState::new(GameConfig {
            cpu_delay: Duration::from_millis(500),
            seed: Some(2),
        });
        state.start();
        state.click_square(Pos::new(5, 0)).unwrap();
        state.click_square(Pos::new(4, 1)).unwrap();

        let t0 = Instant::now();
        assert!(!state.poll_cpu(t0));
        assert_eq!(state.cpu_wait_remaining(t0), Some(Duration::from_millis(500)));
        assert!(!state.poll_cpu(t0 + Duration::from_millis(100)));
        assert!(state.poll_cpu(t0 + Duration::from_millis(500)));
        assert!(state.is_human_turn());
        assert_eq!(state.move_history.len(), 2);
        assert!(state.last_cpu_choice.is_some());
    }

    #[test]
    fn test_cpu_does_not_move_on_human_turn() {
        let mut state = playing();
        assert!(!state.poll_cpu(Instant::now()));
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_last_capture_ends_game() {
        let mut state = playing();
        state.board = Board::empty();
        state.board.place_piece(Piece::new(Category::Man(Owner::Human), 4, 3));
        state.board.place_piece(Piece::new(Category::Man(Owner::Cpu), 3, 2));

        state.click_square(Pos::new(4, 3)).unwrap();
        state.click_square(Pos::new(2, 1)).unwrap();

        assert_eq!(state.screen, Screen::GameOver);
        assert_eq!(state.board.winner(), Some(Owner::Human));
        assert_eq!(
            state.status,
            GameStatus::Won { winner: Owner::Human, reason: WinReason::NoPiecesLeft }
        );
        assert!(state.click_square(Pos::new(2, 1)).is_err());
    }

    #[test]
    fn test_blocked_cpu_forfeits() {
        let mut state = playing();
        state.board = Board::empty();
        state.board.place_piece(Piece::new(Category::Man(Owner::Cpu), 7, 0));
        state.board.place_piece(Piece::new(Category::Man(Owner::Human), 5, 4));

        state.click_square(Pos::new(5, 4)).unwrap();
        state.click_square(Pos::new(4, 3)).unwrap();

        assert_eq!(state.screen, Screen::GameOver);
        assert_eq!(
            state.status,
            GameStatus::Won { winner: Owner::Human, reason: WinReason::Blocked }
        );
    }

    #[test]
    fn test_full_game_with_hints_terminates() {
        let mut state = playing();
        let mut now = Instant::now();

        for _ in 0..2000 {
            if state.screen == Screen::GameOver {
                break;
            }
            if state.is_human_turn() {
                state.request_suggestion();
                let hint = state.suggested_move.expect("human has a move");
                state.click_square(hint.from).unwrap();
                state.click_square(hint.to).unwrap();
            } else {
                now += Duration::from_millis(1);
                state.poll_cpu(now);
            }
        }

        assert_eq!(state.screen, Screen::GameOver);
        assert!(matches!(state.status, GameStatus::Won { .. }));
        for owner in [Owner::Cpu, Owner::Human] {
            assert_eq!(state.board.remaining(owner), state.board.count_pieces(owner));
        }
    }

    /// Human always plays its first legal move; returns the CPU's replies
    fn cpu_replies(with_hints: bool, rounds: usize) -> Vec<MoveChoice> {
        let mut state = playing();
        let mut now = Instant::now();
        let mut replies = Vec::new();

        for _ in 0..rounds {
            if state.screen == Screen::GameOver {
                break;
            }
            if with_hints {
                state.request_suggestion();
                assert!(state.suggested_move.is_some());
            }
            let Some(mv) = legal_moves(&state.board, Owner::Human).first().copied() else {
                break;
            };
            state.click_square(mv.from).unwrap();
            state.click_square(mv.to).unwrap();

            now += Duration::from_millis(1);
            if state.poll_cpu(now) {
                replies.extend(state.last_cpu_choice);
            }
        }
        replies
    }

    #[test]
    fn test_hints_do_not_change_cpu_play() {
        let plain = cpu_replies(false, 12);
        let hinted = cpu_replies(true, 12);
        assert!(!plain.is_empty());
        assert_eq!(plain, hinted);
    }

    #[test]
    fn test_reset_clears_game() {
        let mut state = playing();
        state.click_square(Pos::new(5, 0)).unwrap();
        state.click_square(Pos::new(4, 1)).unwrap();
        state.reset();

        assert_eq!(state.board, Board::new());
        assert!(state.move_history.is_empty());
        assert_eq!(state.current_turn, Owner::Human);
        assert_eq!(state.status, GameStatus::InProgress);
    }
}
