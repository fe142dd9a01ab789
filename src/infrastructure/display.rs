use crate::domain::board::Board;
use crate::domain::coordinate::{FILES, Position, RANKS};
use crate::domain::game::Game;
use crate::domain::models::{Piece, Side};
use rustc_hash::FxHashSet;
use std::fmt::{self, Write};

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_RED: &str = "\x1b[31m";
const COLOR_BLUE: &str = "\x1b[34m";
const COLOR_DIM: &str = "\x1b[90m";
const COLOR_HINT: &str = "\x1b[42m";

const CELL_WIDTH: usize = 5;

#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    pub color: bool,
    /// Squares to highlight, e.g. the legal destinations of a selected piece.
    pub highlight: FxHashSet<Position>,
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn colored() -> Self {
        Self {
            color: true,
            ..Self::default()
        }
    }
}

struct Cell<'a> {
    piece: Option<Piece>,
    in_palace: bool,
    highlighted: bool,
    options: &'a RenderOptions,
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.piece {
            Some(piece) => format!("{} ", piece.abbreviation()),
            None if self.highlighted => format!("{:^width$}", "+", width = CELL_WIDTH),
            None if self.in_palace => format!("{:^width$}", "*", width = CELL_WIDTH),
            None => " ".repeat(CELL_WIDTH),
        };
        if !self.options.color {
            return write!(f, "{}", text);
        }

        let color = match self.piece {
            Some(piece) if piece.side == Side::Red => COLOR_RED,
            Some(_) => COLOR_BLUE,
            None => COLOR_DIM,
        };
        if self.highlighted {
            write!(f, "{}{}{}{}", COLOR_HINT, color, text, COLOR_RESET)
        } else {
            write!(f, "{}{}{}", color, text, COLOR_RESET)
        }
    }
}

fn separator() -> String {
    format!("   {}", "-".repeat((CELL_WIDTH + 1) * FILES))
}

/// Fixed-width grid, rank 1 at the top, files a..i left to right.
pub fn render_board(board: &Board, options: &RenderOptions) -> String {
    let mut out = String::new();

    let mut header = String::from("   ");
    for file in 0..FILES {
        if let Some(pos) = Position::new(file, 1) {
            let _ = write!(header, " {:^width$}", pos.file_letter(), width = CELL_WIDTH);
        }
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');

    for rank in 1..=RANKS {
        let _ = write!(out, "{:<2} |", rank);
        for file in 0..FILES {
            let Some(pos) = Position::new(file, rank) else {
                continue;
            };
            let cell = Cell {
                piece: board.get(pos),
                in_palace: Board::palace_of(pos).is_some(),
                highlighted: options.highlight.contains(&pos),
                options,
            };
            let _ = write!(out, "{}|", cell);
        }
        out.push('\n');
        out.push_str(&separator());
        out.push('\n');
    }
    out
}

/// One line per side listing its lost pieces, e.g. `red lost: SolR EleR`.
pub fn render_captured(game: &Game) -> String {
    let mut out = String::new();
    for side in Side::ALL {
        let lost: Vec<String> = game
            .captured(side)
            .iter()
            .map(|piece| piece.abbreviation())
            .collect();
        let list = if lost.is_empty() {
            "-".to_string()
        } else {
            lost.join(" ")
        };
        let _ = writeln!(out, "{} lost: {}", side, list);
    }
    out
}

pub fn render_game(game: &Game, options: &RenderOptions, show_captured: bool) -> String {
    let mut out = render_board(game.board(), options);
    if show_captured {
        out.push_str(&render_captured(game));
    }
    out
}
