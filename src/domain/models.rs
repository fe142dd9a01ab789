use crate::domain::coordinate::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Blue];

    pub fn opponent(&self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Vertical component of a forward step. Blue advances toward rank 1.
    pub fn forward(&self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Blue => 1,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Side::Red => 'R',
            Side::Blue => 'B',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Soldier,
    Cannon,
    Chariot,
    Elephant,
    Horse,
    Guard,
    General,
}

impl PieceKind {
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Soldier => "Soldier",
            PieceKind::Cannon => "Cannon",
            PieceKind::Chariot => "Chariot",
            PieceKind::Elephant => "Elephant",
            PieceKind::Horse => "Horse",
            PieceKind::Guard => "Guard",
            PieceKind::General => "General",
        }
    }
}

/// Stable identity of a piece for the lifetime of a board and its copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub fn is(&self, kind: PieceKind) -> bool {
        self.kind == kind
    }

    /// Three-letter archetype plus side letter, e.g. `SolB`.
    pub fn abbreviation(&self) -> String {
        format!("{}{}", &self.kind.name()[..3], self.side.letter())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub fn is_pass(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Unfinished,
    RedWon,
    BlueWon,
}

impl GameState {
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Red => GameState::RedWon,
            Side::Blue => GameState::BlueWon,
        }
    }

    pub fn is_finished(&self) -> bool {
        *self != GameState::Unfinished
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameState::Unfinished => None,
            GameState::RedWon => Some(Side::Red),
            GameState::BlueWon => Some(Side::Blue),
        }
    }
}

/// One committed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
}
