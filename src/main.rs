use env_logger::{Builder, Env};
use janggi::application::game_service::GameService;
use janggi::config::AppConfig;
use janggi::domain::game::Game;
use janggi::infrastructure::console::HumanConsolePlayer;
use janggi::interface::console::ConsoleInterface;

fn main() {
    let config = AppConfig::load();
    let level = match &config {
        Ok(config) => config.log.level.clone(),
        Err(_) => "info".to_string(),
    };
    Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        AppConfig::default()
    });
    config.describe();

    let game = GameService::new(
        Game::new(),
        Box::new(HumanConsolePlayer::new()),
        Box::new(HumanConsolePlayer::new()),
    );
    ConsoleInterface::run(game, &config.display);
}
