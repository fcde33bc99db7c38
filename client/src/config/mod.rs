mod config;
mod tictactoe_lobby_config;

pub use config::get_config_manager;
pub use tictactoe_lobby_config::TicTacToeLobbyConfig;
