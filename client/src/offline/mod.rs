mod simulation_runner;
mod tictactoe_runner;

pub use simulation_runner::run_simulation;
pub use tictactoe_runner::{RunnerSettings, run_tictactoe_game};
