use rand::Rng;

use super::board::Board;
use super::bot_controller::{
    BotError, BotInput, calculate_minimax_move, calculate_move, calculate_random_move,
};
use super::session::BOT_MARK;
use super::types::{Difficulty, GameStatus, Mark};
use super::win_detector::evaluate_outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Random,
    Perfect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub games: u32,
    pub bot_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl SimulationStats {
    fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status.winner() {
            Some(mark) if mark == BOT_MARK => self.bot_wins += 1,
            Some(_) => self.opponent_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Share of games the bot did not lose, in `0.0..=1.0`.
    pub fn non_loss_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.bot_wins + self.draws) / f64::from(self.games)
    }
}

/// Plays `games` full games: the opponent opens as X, the bot answers as O at `difficulty`.
pub fn simulate_games<R: Rng + ?Sized>(
    difficulty: Difficulty,
    opponent: Opponent,
    games: u32,
    rng: &mut R,
) -> Result<SimulationStats, BotError> {
    let mut stats = SimulationStats::default();
    for _ in 0..games {
        let status = play_game(difficulty, opponent, rng)?;
        stats.record(status);
    }
    Ok(stats)
}

fn play_game<R: Rng + ?Sized>(
    difficulty: Difficulty,
    opponent: Opponent,
    rng: &mut R,
) -> Result<GameStatus, BotError> {
    let mut board = Board::new();
    let mut mark = Mark::X;

    loop {
        let status = evaluate_outcome(&board);
        if status.is_over() {
            return Ok(status);
        }

        let index = if mark == BOT_MARK {
            calculate_move(difficulty, &BotInput::new(board, mark), rng)?.index
        } else {
            match opponent {
                Opponent::Random => calculate_random_move(&board, rng)?,
                Opponent::Perfect => calculate_minimax_move(&BotInput::new(board, mark))?,
            }
        };

        board = board.with_mark(index, mark);
        mark = mark.opponent().ok_or(BotError::InvalidMark)?;
    }
}

/// Both sides play the minimax move from an empty board.
pub fn play_perfect_game() -> Result<GameStatus, BotError> {
    let mut board = Board::new();
    let mut mark = Mark::X;

    while !evaluate_outcome(&board).is_over() {
        let index = calculate_minimax_move(&BotInput::new(board, mark))?;
        board = board.with_mark(index, mark);
        mark = mark.opponent().ok_or(BotError::InvalidMark)?;
    }

    Ok(evaluate_outcome(&board))
}
