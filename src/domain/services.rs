use crate::domain::game::Game;

/// A request coming from a player, still in text form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move { from: String, to: String },
    Pass,
    Hint(String),
    Reset,
    Quit,
}

pub trait PlayerStrategy {
    /// `None` means the player has nothing more to say (input closed).
    fn next_command(&mut self, game: &Game) -> Option<Command>;

    /// Feedback about the last command. Players that do not care ignore it.
    fn notify(&mut self, _message: &str) {}
}
