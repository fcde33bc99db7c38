use super::board::Board;
use super::types::{GameStatus, Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in table order, if any.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let mark = board.get(line[0]);
        if mark == Mark::Empty {
            continue;
        }
        if board.get(line[1]) == mark && board.get(line[2]) == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn evaluate_outcome(board: &Board) -> GameStatus {
    if let Some(mark) = check_win(board) {
        return GameStatus::from_winner(mark);
    }
    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
