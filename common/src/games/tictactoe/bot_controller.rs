use rand::Rng;
use rand::seq::IndexedRandom;

use super::board::{Board, CELL_COUNT, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    BoardFull,
    GameOver(Mark),
    InvalidMark,
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::BoardFull => write!(f, "No empty cells left to play"),
            BotError::GameOver(mark) => write!(f, "Game is already won by {}", mark),
            BotError::InvalidMark => write!(f, "Bot mark must be X or O"),
        }
    }
}

impl std::error::Error for BotError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub index: usize,
    pub strategy: MoveStrategy,
}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.current_board(),
            bot_mark: state.current_mark(),
        }
    }
}

/// Rolls against `difficulty` and plays either the minimax move or a uniformly random one.
pub fn calculate_move<R: Rng + ?Sized>(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut R,
) -> Result<BotMove, BotError> {
    input.bot_mark.opponent().ok_or(BotError::InvalidMark)?;
    ensure_playable(&input.board)?;

    let roll: u8 = rng.random_range(0..Difficulty::MAX);
    if roll < difficulty.percent() {
        let index = calculate_minimax_move(input)?;
        Ok(BotMove {
            index,
            strategy: MoveStrategy::Minimax,
        })
    } else {
        let index = calculate_random_move(&input.board, rng)?;
        Ok(BotMove {
            index,
            strategy: MoveStrategy::Random,
        })
    }
}

pub fn calculate_random_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<usize, BotError> {
    get_available_moves(board)
        .choose(rng)
        .copied()
        .ok_or(BotError::BoardFull)
}

/// Full-depth minimax without pruning. Ties go to the lowest cell index.
pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, BotError> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent().ok_or(BotError::InvalidMark)?;
    ensure_playable(&input.board)?;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in empty_cells(&input.board) {
        let board = input.board.with_mark(index, bot_mark);
        let score = minimax(board, 0, false, bot_mark, opponent_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(BotError::BoardFull)
}

fn ensure_playable(board: &Board) -> Result<(), BotError> {
    if let Some(winner) = check_win(board) {
        return Err(BotError::GameOver(winner));
    }
    if board.is_full() {
        return Err(BotError::BoardFull);
    }
    Ok(())
}

fn empty_cells(board: &Board) -> impl Iterator<Item = usize> + '_ {
    (0..CELL_COUNT).filter(|&index| board.is_empty_cell(index))
}

fn minimax(
    board: Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if let Some(winner) = check_win(&board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if board.is_full() {
        return 0;
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let scores = empty_cells(&board).map(|index| {
        minimax(
            board.with_mark(index, mark),
            depth + 1,
            !is_maximizing,
            bot_mark,
            opponent_mark,
        )
    });

    let best = if is_maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}
