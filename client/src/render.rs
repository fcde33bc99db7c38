use common::games::tictactoe::{BOARD_SIZE, Mark, TicTacToeGameState};

/// Empty cells show their number so the player knows what to type.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let board = state.current_board();
    let winning_line = state.winning_line();

    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    let mark = board.get(index);
                    if mark == Mark::Empty {
                        format!(" {} ", index + 1)
                    } else if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_history(state: &TicTacToeGameState) -> String {
    state
        .move_descriptions()
        .iter()
        .enumerate()
        .map(|(move_number, description)| {
            let marker = if move_number == state.current_move() { ">" } else { " " };
            format!("{} {}. {}", marker, move_number, description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
