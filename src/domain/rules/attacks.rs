use crate::domain::board::Board;
use crate::domain::coordinate::Position;
use crate::domain::models::Side;
use crate::domain::rules::RulesError;
use crate::domain::rules::move_gen::candidates_for;

/// True if any piece of `by_side` has `square` among its candidate destinations.
pub fn is_square_attacked(board: &Board, square: Position, by_side: Side) -> bool {
    board
        .pieces(by_side)
        .any(|(origin, piece)| candidates_for(board, origin, piece).contains(&square))
}

/// Squares holding pieces of `by_side` that attack `square`.
pub fn attackers_of(board: &Board, square: Position, by_side: Side) -> Vec<Position> {
    board
        .pieces(by_side)
        .filter(|&(origin, piece)| candidates_for(board, origin, piece).contains(&square))
        .map(|(origin, _)| origin)
        .collect()
}

pub fn is_in_check(board: &Board, side: Side) -> Result<bool, RulesError> {
    let general = board.find_general(side)?;
    Ok(is_square_attacked(board, general, side.opponent()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PieceKind;

    fn p(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_opening_has_no_check() {
        let board = Board::standard();
        assert_eq!(is_in_check(&board, Side::Red), Ok(false));
        assert_eq!(is_in_check(&board, Side::Blue), Ok(false));
    }

    #[test]
    fn test_horse_gives_check() {
        let mut board = Board::standard();
        let horse = board.take(p("c10"));
        board.set(p("f4"), horse);
        assert_eq!(is_in_check(&board, Side::Red), Ok(true));
        assert_eq!(attackers_of(&board, p("e2"), Side::Blue), vec![p("f4")]);
    }

    #[test]
    fn test_cannon_check_needs_a_screen() {
        let mut board = Board::empty();
        board.place(p("e2"), PieceKind::General, Side::Red);
        board.place(p("e9"), PieceKind::General, Side::Blue);
        board.place(p("e6"), PieceKind::Cannon, Side::Blue);
        assert_eq!(is_in_check(&board, Side::Red), Ok(false));

        board.place(p("e4"), PieceKind::Soldier, Side::Red);
        assert_eq!(is_in_check(&board, Side::Red), Ok(true));
    }

    #[test]
    fn test_missing_general_is_an_error() {
        let board = Board::empty();
        assert_eq!(
            is_in_check(&board, Side::Blue),
            Err(RulesError::GeneralNotFound(Side::Blue))
        );
    }
}
