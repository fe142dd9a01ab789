use crate::domain::coordinate::{Position, TOTAL_CELLS};
use crate::domain::models::{Move, Piece, PieceId, PieceKind, Side};
use crate::domain::rules::RulesError;
use std::fmt;

const fn sq(file: u8, rank: u8) -> Position {
    Position::at(file, rank)
}

const RED_PALACE: [Position; 9] = [
    sq(3, 1), sq(4, 1), sq(5, 1),
    sq(3, 2), sq(4, 2), sq(5, 2),
    sq(3, 3), sq(4, 3), sq(5, 3),
];
const BLUE_PALACE: [Position; 9] = [
    sq(3, 8), sq(4, 8), sq(5, 8),
    sq(3, 9), sq(4, 9), sq(5, 9),
    sq(3, 10), sq(4, 10), sq(5, 10),
];
const PALACE: [Position; 18] = [
    sq(3, 1), sq(4, 1), sq(5, 1),
    sq(3, 2), sq(4, 2), sq(5, 2),
    sq(3, 3), sq(4, 3), sq(5, 3),
    sq(3, 8), sq(4, 8), sq(5, 8),
    sq(3, 9), sq(4, 9), sq(5, 9),
    sq(3, 10), sq(4, 10), sq(5, 10),
];

const RED_CORNERS: [Position; 4] = [sq(3, 1), sq(5, 1), sq(3, 3), sq(5, 3)];
const BLUE_CORNERS: [Position; 4] = [sq(3, 8), sq(5, 8), sq(3, 10), sq(5, 10)];
const CORNERS: [Position; 8] = [
    sq(3, 1), sq(5, 1), sq(3, 3), sq(5, 3),
    sq(3, 8), sq(5, 8), sq(3, 10), sq(5, 10),
];

const RED_CENTER: Position = sq(4, 2);
const BLUE_CENTER: Position = sq(4, 9);
const CENTERS: [Position; 2] = [RED_CENTER, BLUE_CENTER];

/// Back-rank order from file a to file i. Elephant and Horse are swapped on
/// the right-hand side (g and h files).
const BACK_RANK: [Option<PieceKind>; 9] = [
    Some(PieceKind::Chariot),
    Some(PieceKind::Elephant),
    Some(PieceKind::Horse),
    Some(PieceKind::Guard),
    None,
    Some(PieceKind::Guard),
    Some(PieceKind::Elephant),
    Some(PieceKind::Horse),
    Some(PieceKind::Chariot),
];

/// The 9x10 grid. Slots are indexed by `Position::index`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    slots: [Option<Piece>; TOTAL_CELLS],
    next_id: u16,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            slots: [None; TOTAL_CELLS],
            next_id: 0,
        }
    }

    /// Canonical opening layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for side in [Side::Red, Side::Blue] {
            let (back, cannon, soldier) = match side {
                Side::Red => (1, 3, 4),
                Side::Blue => (10, 8, 7),
            };

            for (file, kind) in BACK_RANK.iter().enumerate() {
                if let (Some(kind), Some(pos)) = (kind, Position::new(file, back)) {
                    board.place(pos, *kind, side);
                }
            }
            for file in [1, 7] {
                if let Some(pos) = Position::new(file, cannon) {
                    board.place(pos, PieceKind::Cannon, side);
                }
            }
            for file in [0, 2, 4, 6, 8] {
                if let Some(pos) = Position::new(file, soldier) {
                    board.place(pos, PieceKind::Soldier, side);
                }
            }
            board.place(Self::palace_center(side), PieceKind::General, side);
        }
        board
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.slots[pos.index()]
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.slots[pos.index()].is_none()
    }

    /// Stores `piece` at `pos`, returning whatever was there before.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.slots[pos.index()], piece)
    }

    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.slots[pos.index()].take()
    }

    /// Creates a new piece with a fresh id and puts it on `pos`.
    pub fn place(&mut self, pos: Position, kind: PieceKind, side: Side) -> Piece {
        let piece = Piece {
            id: PieceId(self.next_id),
            kind,
            side,
        };
        self.next_id += 1;
        self.slots[pos.index()] = Some(piece);
        piece
    }

    /// Moves whatever stands on `mv.from` to `mv.to` and returns the piece that
    /// was standing on `mv.to`, if any. A pass (`from == to`) captures nothing.
    pub fn apply_move(&mut self, mv: &Move) -> Option<Piece> {
        let moving = self.take(mv.from);
        self.set(mv.to, moving)
    }

    /// Independent copy with `mv` applied; the receiver is untouched.
    pub fn with_move(&self, mv: &Move) -> Board {
        let mut copy = self.clone();
        copy.apply_move(mv);
        copy
    }

    /// Occupied squares in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let piece = (*slot)?;
            Position::from_index(i).map(|pos| (pos, piece))
        })
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.side == side)
    }

    pub fn find(&self, id: PieceId) -> Option<Position> {
        self.occupied()
            .find(|(_, piece)| piece.id == id)
            .map(|(pos, _)| pos)
    }

    /// The General never leaves its palace, so only palace cells are searched.
    pub fn find_general(&self, side: Side) -> Result<Position, RulesError> {
        Self::palace_cells(Some(side))
            .iter()
            .copied()
            .find(|&pos| {
                self.get(pos)
                    .is_some_and(|p| p.side == side && p.is(PieceKind::General))
            })
            .ok_or(RulesError::GeneralNotFound(side))
    }

    pub fn palace_cells(side: Option<Side>) -> &'static [Position] {
        match side {
            Some(Side::Red) => &RED_PALACE,
            Some(Side::Blue) => &BLUE_PALACE,
            None => &PALACE,
        }
    }

    pub fn palace_corners(side: Option<Side>) -> &'static [Position] {
        match side {
            Some(Side::Red) => &RED_CORNERS,
            Some(Side::Blue) => &BLUE_CORNERS,
            None => &CORNERS,
        }
    }

    pub fn palace_centers(side: Option<Side>) -> &'static [Position] {
        match side {
            Some(Side::Red) => &CENTERS[..1],
            Some(Side::Blue) => &CENTERS[1..],
            None => &CENTERS,
        }
    }

    pub fn palace_center(side: Side) -> Position {
        match side {
            Side::Red => RED_CENTER,
            Side::Blue => BLUE_CENTER,
        }
    }

    /// Which side's palace `pos` lies in, if any.
    pub fn palace_of(pos: Position) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| Self::palace_cells(Some(side)).contains(&pos))
    }

    pub fn is_palace_corner(pos: Position) -> bool {
        CORNERS.contains(&pos)
    }

    pub fn is_palace_center(pos: Position) -> bool {
        CENTERS.contains(&pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.occupied().map(|(pos, piece)| (pos, piece.abbreviation())))
            .finish()
    }
}
