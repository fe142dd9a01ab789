use janggi::domain::board::Board;
use janggi::domain::coordinate::Position;
use janggi::domain::models::{Move, PieceKind, Side};
use janggi::domain::rules::{Rules, RulesError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn p(s: &str) -> Position {
    s.parse().unwrap()
}

const KINDS: [PieceKind; 6] = [
    PieceKind::Soldier,
    PieceKind::Cannon,
    PieceKind::Chariot,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Guard,
];

/// Both Generals somewhere in their palaces plus `extra` random pieces.
fn random_board(rng: &mut StdRng, extra: usize) -> Board {
    let mut board = Board::empty();
    for side in Side::ALL {
        let square = *Board::palace_cells(Some(side)).choose(rng).unwrap();
        board.place(square, PieceKind::General, side);
    }
    let mut placed = 0;
    while placed < extra {
        let square = Position::from_index(rng.gen_range(0..90)).unwrap();
        if !board.is_empty(square) {
            continue;
        }
        let kind = *KINDS.choose(rng).unwrap();
        let side = *Side::ALL.choose(rng).unwrap();
        board.place(square, kind, side);
        placed += 1;
    }
    board
}

fn brute_force_in_check(board: &Board, side: Side) -> bool {
    let general = Position::all()
        .find(|&pos| {
            board
                .get(pos)
                .is_some_and(|piece| piece.side == side && piece.kind == PieceKind::General)
        })
        .unwrap();
    Position::all().any(|pos| match board.get(pos) {
        Some(piece) if piece.side != side => {
            Rules::candidate_destinations(board, pos).contains(&general)
        }
        _ => false,
    })
}

#[test]
fn test_horse_checks_red_general() {
    let mut board = Board::standard();
    let horse = board.take(p("c10"));
    board.set(p("f4"), horse);
    assert_eq!(Rules::is_in_check(&board, Side::Red), Ok(true));
    assert_eq!(Rules::is_in_check(&board, Side::Blue), Ok(false));
}

#[test]
fn test_missing_general_is_an_error() {
    let mut board = Board::standard();
    board.set(p("e9"), None);
    assert_eq!(
        Rules::is_in_check(&board, Side::Blue),
        Err(RulesError::GeneralNotFound(Side::Blue))
    );
    assert_eq!(
        Rules::is_in_checkmate(&board, Side::Blue),
        Err(RulesError::GeneralNotFound(Side::Blue))
    );
}

#[test]
fn test_general_outside_palace_is_not_found() {
    let mut board = Board::empty();
    board.place(p("e5"), PieceKind::General, Side::Red);
    board.place(p("e9"), PieceKind::General, Side::Blue);
    assert_eq!(board.find_general(Side::Red), Err(RulesError::GeneralNotFound(Side::Red)));
}

#[test]
fn test_check_matches_brute_force_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x6a61_6e67);
    for _ in 0..300 {
        let extra = rng.gen_range(0..24);
        let board = random_board(&mut rng, extra);
        for side in Side::ALL {
            assert_eq!(
                Rules::is_in_check(&board, side),
                Ok(brute_force_in_check(&board, side)),
                "{:?}",
                board
            );
        }
    }
}

fn between(a: Position, b: Position) -> Vec<Position> {
    if a.file() == b.file() {
        let (lo, hi) = (a.rank().min(b.rank()), a.rank().max(b.rank()));
        (lo + 1..hi).filter_map(|r| Position::new(a.file(), r)).collect()
    } else {
        let (lo, hi) = (a.file().min(b.file()), a.file().max(b.file()));
        (lo + 1..hi).filter_map(|f| Position::new(f, a.rank())).collect()
    }
}

#[test]
fn test_cannon_always_jumps_exactly_one_non_cannon() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let extra = rng.gen_range(4..30);
        let board = random_board(&mut rng, extra);
        for (origin, piece) in board.occupied() {
            if piece.kind != PieceKind::Cannon {
                continue;
            }
            for to in Rules::candidate_destinations(&board, origin) {
                if to == origin {
                    continue;
                }
                if let Some(target) = board.get(to) {
                    assert_ne!(target.kind, PieceKind::Cannon);
                    assert_ne!(target.side, piece.side);
                }

                let screens: Vec<_> = if to.file() == origin.file() || to.rank() == origin.rank() {
                    between(origin, to)
                        .into_iter()
                        .filter_map(|sq| board.get(sq))
                        .collect()
                } else {
                    // palace diagonal: the center is the only square in between
                    let palace = Board::palace_of(origin).unwrap();
                    board.get(Board::palace_center(palace)).into_iter().collect()
                };
                assert_eq!(screens.len(), 1, "{} -> {} on {:?}", origin, to, board);
                assert_ne!(screens[0].kind, PieceKind::Cannon);
            }
        }
    }
}

#[test]
fn test_legal_destinations_never_leave_general_attacked() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let extra = rng.gen_range(0..16);
        let board = random_board(&mut rng, extra);
        for (origin, piece) in board.occupied() {
            for to in Rules::legal_destinations(&board, origin).unwrap() {
                let after = board.with_move(&Move::new(origin, to));
                assert_eq!(Rules::is_in_check(&after, piece.side), Ok(false));
            }
        }
    }
}
