use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_outcome};

/// A single game with its full move history. Jumping back in history and then
/// playing a move discards the moves that followed.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    history: Vec<Board>,
    current_move: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    pub fn current_board(&self) -> Board {
        self.history[self.current_move]
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// X moves on even plies, O on odd ones.
    pub fn current_mark(&self) -> Mark {
        if self.current_move % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn status(&self) -> GameStatus {
        evaluate_outcome(&self.current_board())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.current_board())
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status().is_over() {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index + 1));
        }

        let board = self.current_board();
        if !board.is_empty_cell(index) {
            return Err(format!("Cell {} is already marked", index + 1));
        }

        let next = board.with_mark(index, self.current_mark());
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        Ok(())
    }

    pub fn jump_to(&mut self, move_number: usize) -> Result<(), String> {
        if move_number >= self.history.len() {
            return Err(format!(
                "Move #{} does not exist, history has moves 0..={}",
                move_number,
                self.history.len() - 1
            ));
        }
        self.current_move = move_number;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.history = vec![Board::new()];
        self.current_move = 0;
    }

    pub fn move_descriptions(&self) -> Vec<String> {
        let mut descriptions = vec!["Go to game start".to_string()];

        for (move_number, pair) in self.history.windows(2).enumerate() {
            let (previous, board) = (&pair[0], &pair[1]);
            let changed = (0..CELL_COUNT).find(|&index| previous.get(index) != board.get(index));
            if let Some(index) = changed {
                let (row, col) = Board::cell_to_row_col(index);
                descriptions.push(format!(
                    "Move #{}: {} at ({},{})",
                    move_number + 1,
                    board.get(index),
                    row,
                    col
                ));
            }
        }

        descriptions
    }

    pub fn status_text(&self) -> String {
        let status = self.status();
        if let Some(winner) = status.winner() {
            return format!("Winner: {}", winner);
        }
        if status == GameStatus::Draw {
            "Draw".to_string()
        } else {
            format!("Next player: {}", self.current_mark())
        }
    }
}
