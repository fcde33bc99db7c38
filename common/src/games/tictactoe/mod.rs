mod board;
mod bot_controller;
mod game_state;
mod session;
mod simulation;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, get_available_moves};
pub use bot_controller::{
    BotError, BotInput, BotMove, MoveStrategy, calculate_minimax_move, calculate_move,
    calculate_random_move,
};
pub use game_state::TicTacToeGameState;
pub use session::{BOT_MARK, TicTacToeSession};
pub use simulation::{Opponent, SimulationStats, play_perfect_game, simulate_games};
pub use types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate_outcome};
