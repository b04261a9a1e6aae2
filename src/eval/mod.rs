//! Move scoring for the automated opponent
//!
//! The CPU does no look-ahead. Each candidate move is scored on its own:
//! - Crowning a man (CPU side only)
//! - Capturing

pub mod heuristic;

pub use heuristic::{get_move_score, MoveScore};
