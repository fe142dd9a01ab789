use crate::application::game_service::{GameService, Turn};
use crate::config::DisplayConfig;
use crate::domain::models::GameState;
use crate::infrastructure::console::HELP;
use crate::infrastructure::display::{RenderOptions, render_board, render_game};

pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn run(mut game_service: GameService, display: &DisplayConfig) {
        let options = if display.color {
            RenderOptions::colored()
        } else {
            RenderOptions::plain()
        };

        println!("Starting Janggi...");
        println!("{}", HELP);
        Self::show(&game_service, &options, display);

        loop {
            if let Some(result) = game_service.is_game_over() {
                if let Some(winner) = result.winner() {
                    println!("Checkmate! {} wins!", winner);
                }
                break;
            }

            match game_service.game().is_in_check(game_service.turn()) {
                Ok(true) => println!("{}'s turn (in check!)", game_service.turn()),
                Ok(false) => println!("{}'s turn", game_service.turn()),
                Err(e) => {
                    log::error!("{}", e);
                    break;
                }
            }

            match game_service.perform_next_move() {
                Ok(Some(Turn::Moved(outcome))) => {
                    println!("{} played {}", outcome.record.side, outcome.record.mv);
                    if outcome.state == GameState::Unfinished && outcome.check {
                        println!("Check!");
                    }
                    Self::show(&game_service, &options, display);
                }
                Ok(Some(Turn::Hint { from, destinations })) => {
                    let list: Vec<String> = destinations.iter().map(|d| d.to_string()).collect();
                    println!("{} can reach: {}", from, list.join(" "));
                    if display.show_hints {
                        let highlighted = RenderOptions {
                            highlight: destinations.iter().copied().collect(),
                            ..options.clone()
                        };
                        println!("{}", render_board(game_service.game().board(), &highlighted));
                    }
                }
                Ok(Some(Turn::Reset)) => {
                    println!("New game.");
                    Self::show(&game_service, &options, display);
                }
                Ok(Some(Turn::Rejected(_))) => {}
                Ok(Some(Turn::Quit)) | Ok(None) => {
                    println!("Goodbye.");
                    break;
                }
                Err(e) => {
                    log::error!("{}", e);
                    println!("Error: {}", e);
                    break;
                }
            }
        }
    }

    fn show(game_service: &GameService, options: &RenderOptions, display: &DisplayConfig) {
        println!(
            "{}",
            render_game(game_service.game(), options, display.show_captured)
        );
    }
}
