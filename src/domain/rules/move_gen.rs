use std::sync::LazyLock;

use crate::domain::board::Board;
use crate::domain::coordinate::{Direction, Position};
use crate::domain::models::{Move, Piece, PieceKind, Side};
use crate::domain::rules::attacks::is_in_check;
use crate::domain::rules::calculators::{self, ElephantPath, HorsePath};
use crate::domain::rules::{Destinations, RulesError};

static HORSE_PATHS: LazyLock<Vec<HorsePath>> = LazyLock::new(calculators::horse_paths);
static ELEPHANT_PATHS: LazyLock<Vec<ElephantPath>> = LazyLock::new(calculators::elephant_paths);

/// Squares the piece on `origin` could move to, ignoring self-check.
/// The origin itself is always included (a pass). Empty for an empty square.
pub fn candidate_destinations(board: &Board, origin: Position) -> Destinations {
    match board.get(origin) {
        Some(piece) => candidates_for(board, origin, piece),
        None => Destinations::new(),
    }
}

pub fn candidates_for(board: &Board, origin: Position, piece: Piece) -> Destinations {
    let mut out = Destinations::new();
    out.push(origin);
    match piece.kind {
        PieceKind::Soldier => soldier_moves(board, origin, piece.side, &mut out),
        PieceKind::Cannon => cannon_moves(board, origin, piece.side, &mut out),
        PieceKind::Chariot => chariot_moves(board, origin, piece.side, &mut out),
        PieceKind::Elephant => elephant_moves(board, origin, piece.side, &mut out),
        PieceKind::Horse => horse_moves(board, origin, piece.side, &mut out),
        PieceKind::Guard | PieceKind::General => {
            palace_piece_moves(board, origin, piece.side, &mut out)
        }
    }
    out
}

/// Candidates that do not leave `origin`'s owner in check.
pub fn legal_destinations(board: &Board, origin: Position) -> Result<Destinations, RulesError> {
    let Some(piece) = board.get(origin) else {
        return Ok(Destinations::new());
    };
    let mut legal = Destinations::new();
    for to in candidates_for(board, origin, piece) {
        if !leaves_general_in_check(board, piece.side, &Move::new(origin, to))? {
            legal.push(to);
        }
    }
    Ok(legal)
}

pub fn leaves_general_in_check(board: &Board, side: Side, mv: &Move) -> Result<bool, RulesError> {
    let hypothetical = board.with_move(mv);
    is_in_check(&hypothetical, side)
}

fn can_land(board: &Board, pos: Position, side: Side) -> bool {
    board.get(pos).is_none_or(|occupant| occupant.side != side)
}

fn soldier_moves(board: &Board, origin: Position, side: Side, out: &mut Destinations) {
    let forward = side.forward();
    for target in [
        origin.step(Direction::Left),
        origin.step(Direction::Right),
        origin.shift(forward, 0),
    ]
    .into_iter()
    .flatten()
    {
        if can_land(board, target, side) {
            out.push(target);
        }
    }

    // Forward palace diagonals, only inside the enemy palace.
    let enemy = side.opponent();
    let center = Board::palace_center(enemy);
    let corners = Board::palace_corners(Some(enemy));
    if origin != center && !corners.contains(&origin) {
        return;
    }
    for horizontal in [-1, 1] {
        if let Some(target) = origin.shift(forward, horizontal) {
            let on_diagonal = if origin == center {
                corners.contains(&target)
            } else {
                target == center
            };
            if on_diagonal && can_land(board, target, side) {
                out.push(target);
            }
        }
    }
}

fn cannon_moves(board: &Board, origin: Position, side: Side, out: &mut Destinations) {
    for dir in Direction::ALL {
        let mut jumped = false;
        let mut current = origin.step(dir);
        while let Some(square) = current {
            match board.get(square) {
                None => {
                    if jumped {
                        out.push(square);
                    }
                }
                Some(occupant) => {
                    // Cannons can neither be jumped nor captured.
                    if occupant.is(PieceKind::Cannon) {
                        break;
                    }
                    if jumped {
                        if occupant.side != side {
                            out.push(square);
                        }
                        break;
                    }
                    jumped = true;
                }
            }
            current = square.step(dir);
        }
    }

    if !Board::is_palace_corner(origin) {
        return;
    }
    let (Some(palace), Some(mirror)) = (Board::palace_of(origin), origin.mirror()) else {
        return;
    };
    match board.get(Board::palace_center(palace)) {
        Some(screen) if !screen.is(PieceKind::Cannon) => {}
        _ => return,
    }
    match board.get(mirror) {
        None => out.push(mirror),
        Some(target) if target.side != side && !target.is(PieceKind::Cannon) => out.push(mirror),
        Some(_) => {}
    }
}

fn chariot_moves(board: &Board, origin: Position, side: Side, out: &mut Destinations) {
    for dir in Direction::ALL {
        let mut current = origin.step(dir);
        while let Some(square) = current {
            match board.get(square) {
                None => out.push(square),
                Some(occupant) => {
                    if occupant.side != side {
                        out.push(square);
                    }
                    break;
                }
            }
            current = square.step(dir);
        }
    }

    let Some(palace) = Board::palace_of(origin) else {
        return;
    };
    let center = Board::palace_center(palace);
    if Board::is_palace_corner(origin) {
        if can_land(board, center, side) {
            out.push(center);
        }
        if let Some(mirror) = origin.mirror() {
            if board.is_empty(center) && can_land(board, mirror, side) {
                out.push(mirror);
            }
        }
    } else if origin == center {
        for &corner in Board::palace_corners(Some(palace)) {
            if can_land(board, corner, side) {
                out.push(corner);
            }
        }
    }
}

fn elephant_moves(board: &Board, origin: Position, side: Side, out: &mut Destinations) {
    for path in ELEPHANT_PATHS.iter() {
        let clear = |(v, h): (i8, i8)| origin.shift(v, h).is_some_and(|sq| board.is_empty(sq));
        if !clear(path.block) || !clear(path.diagonal) {
            continue;
        }
        if let Some(target) = origin.shift(path.land.0, path.land.1) {
            if can_land(board, target, side) {
                out.push(target);
            }
        }
    }
}

fn horse_moves(board: &Board, origin: Position, side: Side, out: &mut Destinations) {
    for path in HORSE_PATHS.iter() {
        let blocked = origin
            .shift(path.block.0, path.block.1)
            .is_none_or(|sq| !board.is_empty(sq));
        if blocked {
            continue;
        }
        if let Some(target) = origin.shift(path.land.0, path.land.1) {
            if can_land(board, target, side) {
                out.push(target);
            }
        }
    }
}

/// Shared by Guard and General: confined to the owner's palace.
pub fn palace_piece_moves(board: &Board, origin: Position, side: Side, out: &mut Destinations) {
    let cells = Board::palace_cells(Some(side));
    let corners = Board::palace_corners(Some(side));
    let center = Board::palace_center(side);

    for dir in Direction::ALL {
        if let Some(target) = origin.step(dir) {
            if cells.contains(&target) && can_land(board, target, side) {
                out.push(target);
            }
        }
    }

    if corners.contains(&origin) && can_land(board, center, side) {
        out.push(center);
    }
    if origin == center {
        for &corner in corners {
            if can_land(board, corner, side) {
                out.push(corner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn p(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn set(squares: &[&str]) -> FxHashSet<Position> {
        squares.iter().map(|s| p(s)).collect()
    }

    fn dests(board: &Board, origin: &str) -> FxHashSet<Position> {
        candidate_destinations(board, p(origin)).into_iter().collect()
    }

    #[test]
    fn test_empty_square_has_no_candidates() {
        assert!(candidate_destinations(&Board::empty(), p("e5")).is_empty());
    }

    #[test]
    fn test_chariot_edge() {
        let mut board = Board::empty();
        board.place(p("a1"), PieceKind::Chariot, Side::Blue);
        assert_eq!(
            dests(&board, "a1"),
            set(&[
                "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", "i1", "a2", "a3", "a4", "a5",
                "a6", "a7", "a8", "a9", "a10"
            ])
        );
    }

    #[test]
    fn test_horse_and_elephant_corners() {
        let mut board = Board::empty();
        board.place(p("a1"), PieceKind::Horse, Side::Blue);
        assert_eq!(dests(&board, "a1"), set(&["a1", "c2", "b3"]));

        let mut board = Board::empty();
        board.place(p("a1"), PieceKind::Elephant, Side::Blue);
        assert_eq!(dests(&board, "a1"), set(&["a1", "d3", "c4"]));
    }

    #[test]
    fn test_cannon_edge() {
        let mut board = Board::empty();
        board.place(p("a1"), PieceKind::Cannon, Side::Blue);
        board.place(p("a8"), PieceKind::Soldier, Side::Red);
        board.place(p("g1"), PieceKind::Soldier, Side::Blue);
        assert_eq!(dests(&board, "a1"), set(&["a1", "h1", "i1", "a9", "a10"]));
    }

    #[test]
    fn test_general_in_center_reaches_whole_palace() {
        let mut board = Board::empty();
        board.place(p("e9"), PieceKind::General, Side::Blue);
        assert_eq!(
            dests(&board, "e9"),
            set(&["e9", "d8", "e8", "f8", "d9", "f9", "d10", "e10", "f10"])
        );
    }

    #[test]
    fn test_legal_destinations_filter_self_check() {
        let mut board = Board::empty();
        board.place(p("e9"), PieceKind::General, Side::Blue);
        board.place(p("e2"), PieceKind::General, Side::Red);
        board.place(p("d1"), PieceKind::Chariot, Side::Red);
        let legal: FxHashSet<Position> = legal_destinations(&board, p("e9"))
            .unwrap()
            .into_iter()
            .collect();
        assert!(!legal.contains(&p("d9")));
        assert!(!legal.contains(&p("d8")));
        assert!(legal.contains(&p("e8")));
        assert!(legal.contains(&p("f9")));
    }
}
