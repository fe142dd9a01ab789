use crate::domain::board::Board;
use crate::domain::models::{Move, Side};
use crate::domain::rules::RulesError;
use crate::domain::rules::move_gen::{candidates_for, leaves_general_in_check};

/// True when no move of `side` (pass included) ends with its General safe.
///
/// Every candidate of every piece is simulated on a board copy. The General
/// is tried first since it is the most likely escape; the answer does not
/// depend on the order.
pub fn is_in_checkmate(board: &Board, side: Side) -> Result<bool, RulesError> {
    let general_square = board.find_general(side)?;

    let mut pieces: Vec<_> = board
        .pieces(side)
        .filter(|&(pos, _)| pos != general_square)
        .collect();
    if let Some(general) = board.get(general_square) {
        pieces.insert(0, (general_square, general));
    }

    for (origin, piece) in pieces {
        for to in candidates_for(board, origin, piece) {
            if !leaves_general_in_check(board, side, &Move::new(origin, to))? {
                log::trace!(
                    "{} escapes check with {} {} -> {}",
                    side,
                    piece.kind.name(),
                    origin,
                    to
                );
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Whether `side` has any move at all that keeps its General safe.
pub fn has_escape(board: &Board, side: Side) -> Result<bool, RulesError> {
    is_in_checkmate(board, side).map(|mated| !mated)
}
