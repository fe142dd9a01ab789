pub mod attacks;
pub mod calculators;
pub mod checkmate;
pub mod move_gen;

use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::board::Board;
use crate::domain::coordinate::Position;
use crate::domain::models::{Move, Side};

/// Candidate squares for one piece. A chariot on a palace center has the
/// most (22), so the inline capacity is never exceeded.
pub type Destinations = SmallVec<[Position; 32]>;

/// Corrupted board state. Never the result of a player's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("no {0} general found in its palace")]
    GeneralNotFound(Side),
}

pub struct Rules;

impl Rules {
    pub fn candidate_destinations(board: &Board, origin: Position) -> Destinations {
        move_gen::candidate_destinations(board, origin)
    }

    pub fn legal_destinations(board: &Board, origin: Position) -> Result<Destinations, RulesError> {
        move_gen::legal_destinations(board, origin)
    }

    pub fn leaves_general_in_check(board: &Board, side: Side, mv: &Move) -> Result<bool, RulesError> {
        move_gen::leaves_general_in_check(board, side, mv)
    }

    pub fn is_square_attacked(board: &Board, square: Position, by_side: Side) -> bool {
        attacks::is_square_attacked(board, square, by_side)
    }

    pub fn is_in_check(board: &Board, side: Side) -> Result<bool, RulesError> {
        attacks::is_in_check(board, side)
    }

    pub fn is_in_checkmate(board: &Board, side: Side) -> Result<bool, RulesError> {
        checkmate::is_in_checkmate(board, side)
    }
}
