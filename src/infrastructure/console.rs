use crate::domain::game::Game;
use crate::domain::services::{Command, PlayerStrategy};
use std::io::{self, Write};

pub const HELP: &str = "Commands: '<from> <to>' (e.g. 'e7 e6'), 'pass', 'hint <square>', 'reset', 'quit'";

pub struct HumanConsolePlayer;

impl HumanConsolePlayer {
    pub fn new() -> Self {
        Self
    }

    /// Turns one input line into a command. Squares stay as text; the
    /// service validates them.
    pub fn parse_command(input: &str) -> Result<Command, String> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err("Please enter a command".to_string()),
            [word] => match word.to_ascii_lowercase().as_str() {
                "pass" => Ok(Command::Pass),
                "reset" => Ok(Command::Reset),
                "quit" | "exit" => Ok(Command::Quit),
                "hint" => Err("Usage: hint <square>".to_string()),
                _ => Err("Please provide two squares: From To".to_string()),
            },
            [word, square] if word.eq_ignore_ascii_case("hint") => {
                Ok(Command::Hint(square.to_string()))
            }
            [from, to] => Ok(Command::Move {
                from: from.to_string(),
                to: to.to_string(),
            }),
            _ => Err("Too many words".to_string()),
        }
    }
}

impl Default for HumanConsolePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStrategy for HumanConsolePlayer {
    fn next_command(&mut self, game: &Game) -> Option<Command> {
        loop {
            print!("{} > ", game.current_side());
            if io::stdout().flush().is_err() {
                return None;
            }

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    log::warn!("failed to read input: {}", err);
                    return None;
                }
            }

            match Self::parse_command(&input) {
                Ok(command) => return Some(command),
                Err(msg) => {
                    println!("{}", msg);
                    println!("{}", HELP);
                }
            }
        }
    }

    fn notify(&mut self, message: &str) {
        println!("Rejected: {}", message);
    }
}
