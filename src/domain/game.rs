use crate::domain::board::Board;
use crate::domain::coordinate::Position;
use crate::domain::models::{GameState, Move, MoveRecord, Piece, PieceId, Side};
use crate::domain::rules::{Destinations, Rules, RulesError};
use thiserror::Error;

/// Why a move was refused, in the order the checks are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the game is already over")]
    GameOver,
    #[error("there is no piece on {0}")]
    EmptySquare(Position),
    #[error("the piece on {0} does not belong to {1}")]
    NotYourPiece(Position, Side),
    #[error("{to} is not reachable from {from}")]
    Unreachable { from: Position, to: Position },
    #[error("moving {from} to {to} would leave the general in check")]
    SelfCheck { from: Position, to: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
    #[error("invariant violated: {0}")]
    Invariant(#[from] RulesError),
}

/// What a committed move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Whether the side now to move is in check.
    pub check: bool,
    pub state: GameState,
}

/// Owns the live board and decides every move: turn order, legality,
/// captures and the end of the game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Side,
    state: GameState,
    captured: [Vec<Piece>; 2],
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Side::Blue)
    }

    /// Starts from an arbitrary position. Nothing is checked about it.
    pub fn from_board(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            state: GameState::Unfinished,
            captured: [Vec::new(), Vec::new()],
            history: Vec::new(),
        }
    }

    /// Boolean move contract: `Ok(false)` for any illegal move, `Err` only
    /// when the board itself is corrupt.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<bool, RulesError> {
        match self.try_move(from, to) {
            Ok(_) => Ok(true),
            Err(GameError::Illegal(reason)) => {
                log::debug!("rejected {} -> {}: {}", from, to, reason);
                Ok(false)
            }
            Err(GameError::Invariant(err)) => {
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    pub fn try_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, GameError> {
        let piece = self.check_start(from)?;
        let mv = Move::new(from, to);

        if !Rules::candidate_destinations(&self.board, from).contains(&to) {
            return Err(IllegalMove::Unreachable { from, to }.into());
        }
        if Rules::leaves_general_in_check(&self.board, self.turn, &mv)? {
            return Err(IllegalMove::SelfCheck { from, to }.into());
        }

        Ok(self.commit(piece, mv)?)
    }

    /// Moves the side-to-move's General onto its own square.
    pub fn pass_turn(&mut self) -> Result<MoveOutcome, GameError> {
        if self.state.is_finished() {
            return Err(IllegalMove::GameOver.into());
        }
        let general = self.board.find_general(self.turn)?;
        self.try_move(general, general)
    }

    /// The first three gates: game running, square occupied, piece owned by
    /// the side to move.
    pub fn check_start(&self, from: Position) -> Result<Piece, IllegalMove> {
        if self.state.is_finished() {
            return Err(IllegalMove::GameOver);
        }
        let piece = self.board.get(from).ok_or(IllegalMove::EmptySquare(from))?;
        if piece.side != self.turn {
            return Err(IllegalMove::NotYourPiece(from, self.turn));
        }
        Ok(piece)
    }

    /// Where the piece on `from` may legally go right now.
    pub fn legal_destinations(&self, from: Position) -> Result<Destinations, GameError> {
        self.check_start(from)?;
        Ok(Rules::legal_destinations(&self.board, from)?)
    }

    fn commit(&mut self, piece: Piece, mv: Move) -> Result<MoveOutcome, RulesError> {
        let captured = self.board.apply_move(&mv);
        if let Some(victim) = captured {
            log::info!(
                "{} {} on {} captured by {}",
                victim.side,
                victim.kind.name(),
                mv.to,
                piece.side
            );
            self.captured[victim.side.index()].push(victim);
        }

        let record = MoveRecord {
            side: self.turn,
            mv,
            piece,
            captured,
        };
        self.history.push(record);
        self.turn = self.turn.opponent();

        let check = Rules::is_in_check(&self.board, self.turn)?;
        if check {
            log::info!("{} is in check", self.turn);
            if Rules::is_in_checkmate(&self.board, self.turn)? {
                self.state = GameState::won_by(record.side);
                log::info!("checkmate, {} wins", record.side);
            }
        }

        Ok(MoveOutcome {
            record,
            check,
            state: self.state,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_side(&self) -> Side {
        self.turn
    }

    pub fn is_in_check(&self, side: Side) -> Result<bool, RulesError> {
        Rules::is_in_check(&self.board, side)
    }

    pub fn is_in_checkmate(&self, side: Side) -> Result<bool, RulesError> {
        Rules::is_in_checkmate(&self.board, side)
    }

    /// Pieces of `side` that have been taken, oldest first.
    pub fn captured(&self, side: Side) -> &[Piece] {
        &self.captured[side.index()]
    }

    pub fn is_captured(&self, id: PieceId) -> bool {
        self.captured.iter().flatten().any(|piece| piece.id == id)
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
