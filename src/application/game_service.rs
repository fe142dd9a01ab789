use crate::domain::coordinate::{Position, PositionError};
use crate::domain::game::{Game, GameError, IllegalMove, MoveOutcome};
use crate::domain::models::{GameState, Side};
use crate::domain::rules::{Destinations, RulesError};
use crate::domain::services::{Command, PlayerStrategy};
use thiserror::Error;

/// Everything that can go wrong with a text command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] PositionError),
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
    #[error(transparent)]
    Invariant(#[from] RulesError),
}

impl From<GameError> for CommandError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::Illegal(reason) => CommandError::Illegal(reason),
            GameError::Invariant(err) => CommandError::Invariant(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Moved(MoveOutcome),
    Rejected(CommandError),
    Hint {
        from: Position,
        destinations: Destinations,
    },
    Reset,
    Quit,
}

pub struct GameService<'a> {
    game: Game,
    player_blue: Box<dyn PlayerStrategy + 'a>,
    player_red: Box<dyn PlayerStrategy + 'a>,
}

impl<'a> GameService<'a> {
    pub fn new(
        game: Game,
        player_blue: Box<dyn PlayerStrategy + 'a>,
        player_red: Box<dyn PlayerStrategy + 'a>,
    ) -> Self {
        GameService {
            game,
            player_blue,
            player_red,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn turn(&self) -> Side {
        self.game.current_side()
    }

    pub fn is_game_over(&self) -> Option<GameState> {
        match self.game.state() {
            GameState::Unfinished => None,
            state => Some(state),
        }
    }

    /// Parses both squares before the game sees anything.
    pub fn play(&mut self, from: &str, to: &str) -> Result<MoveOutcome, CommandError> {
        let from: Position = from.parse()?;
        let to: Position = to.parse()?;
        Ok(self.game.try_move(from, to)?)
    }

    pub fn hint(&self, square: &str) -> Result<(Position, Destinations), CommandError> {
        let from: Position = square.parse()?;
        let destinations = self.game.legal_destinations(from)?;
        Ok((from, destinations))
    }

    pub fn reset(&mut self) {
        log::info!("game reset");
        self.game = Game::new();
    }

    /// Asks the side to move for a command and carries it out.
    /// `Ok(None)` when that player has no more input.
    pub fn perform_next_move(&mut self) -> Result<Option<Turn>, RulesError> {
        let strategy = match self.game.current_side() {
            Side::Blue => &mut self.player_blue,
            Side::Red => &mut self.player_red,
        };
        let Some(command) = strategy.next_command(&self.game) else {
            return Ok(None);
        };

        let result = match command {
            Command::Move { from, to } => self.play(&from, &to).map(Turn::Moved),
            Command::Pass => self
                .game
                .pass_turn()
                .map(Turn::Moved)
                .map_err(CommandError::from),
            Command::Hint(square) => self
                .hint(&square)
                .map(|(from, destinations)| Turn::Hint { from, destinations }),
            Command::Reset => {
                self.reset();
                Ok(Turn::Reset)
            }
            Command::Quit => Ok(Turn::Quit),
        };

        match result {
            Ok(turn) => Ok(Some(turn)),
            Err(CommandError::Invariant(err)) => Err(err),
            Err(err) => {
                log::debug!("{} command rejected: {}", self.game.current_side(), err);
                self.player_mut().notify(&err.to_string());
                Ok(Some(Turn::Rejected(err)))
            }
        }
    }

    fn player_mut(&mut self) -> &mut (dyn PlayerStrategy + 'a) {
        match self.game.current_side() {
            Side::Blue => self.player_blue.as_mut(),
            Side::Red => self.player_red.as_mut(),
        }
    }
}
