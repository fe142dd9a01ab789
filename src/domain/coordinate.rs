use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const FILES: usize = 9;
pub const RANKS: usize = 10;
pub const TOTAL_CELLS: usize = FILES * RANKS;

const FILE_LETTERS: &[u8; FILES] = b"abcdefghi";

/// A square on the 9x10 board, addressed as file letter + rank ("e9").
///
/// `file` is stored zero-based (a = 0), `rank` is stored as written (1..=10).
/// Both are private so every `Position` in circulation is on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    file: u8,
    rank: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (vertical, horizontal) displacement in the `shift` convention.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("empty position")]
    Empty,
    #[error("invalid file in '{0}', expected a letter a-i")]
    BadFile(String),
    #[error("invalid rank in '{0}', expected a number 1-10")]
    BadRank(String),
}

impl Position {
    /// `file` is zero-based, `rank` is 1..=10.
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if file < FILES && (1..=RANKS).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Compile-time constructor for fixed tables. Panics on an off-board square.
    pub const fn at(file: u8, rank: u8) -> Self {
        assert!(file < FILES as u8 && rank >= 1 && rank <= RANKS as u8);
        Self { file, rank }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= TOTAL_CELLS {
            return None;
        }
        Self::new(index % FILES, index / FILES + 1)
    }

    pub fn index(self) -> usize {
        (self.rank as usize - 1) * FILES + self.file as usize
    }

    pub fn file(self) -> usize {
        self.file as usize
    }

    pub fn rank(self) -> usize {
        self.rank as usize
    }

    pub fn file_letter(self) -> char {
        FILE_LETTERS[self.file as usize] as char
    }

    /// All 90 squares, rank 1 first, files a..i within a rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..TOTAL_CELLS).filter_map(Position::from_index)
    }

    /// Positive `vertical` moves toward rank 1, positive `horizontal` toward file i.
    pub fn shift(self, vertical: i8, horizontal: i8) -> Option<Position> {
        let rank = self.rank as isize - vertical as isize;
        let file = self.file as isize + horizontal as isize;
        if rank < 1 || file < 0 {
            return None;
        }
        Position::new(file as usize, rank as usize)
    }

    pub fn step(self, direction: Direction) -> Option<Position> {
        let (vertical, horizontal) = direction.offset();
        self.shift(vertical, horizontal)
    }

    /// Diagonally opposite corner of the same palace; `None` unless `self` is
    /// one of the eight palace corners.
    pub fn mirror(self) -> Option<Position> {
        let file = match self.file_letter() {
            'd' => 5,
            'f' => 3,
            _ => return None,
        };
        let rank = match self.rank {
            1 => 3,
            3 => 1,
            8 => 10,
            10 => 8,
            _ => return None,
        };
        Position::new(file, rank)
    }
}

pub fn shift(pos: Position, vertical: i8, horizontal: i8) -> Option<Position> {
    pos.shift(vertical, horizontal)
}

pub fn shift_direction(pos: Position, direction: Direction) -> Option<Position> {
    pos.step(direction)
}

pub fn mirror(corner: Position) -> Option<Position> {
    corner.mirror()
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(PositionError::Empty)?;
        let file = FILE_LETTERS
            .iter()
            .position(|&b| b as char == letter)
            .ok_or_else(|| PositionError::BadFile(s.to_string()))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
            return Err(PositionError::BadRank(s.to_string()));
        }
        let rank = digits
            .parse::<usize>()
            .map_err(|_| PositionError::BadRank(s.to_string()))?;

        Position::new(file, rank).ok_or_else(|| PositionError::BadRank(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
