use common::games::tictactoe::{Board, CELL_COUNT, Difficulty, GameMode};

pub const HELP_TEXT: &str = "\
Commands:
  1-9              place a mark in that cell (numbered left to right, top to bottom)
  <row> <col>      place a mark by 1-based row and column
  history          list moves
  jump <n>         go back to move n
  restart          start a new game
  mode <pvp|pvc>   switch mode (restarts the game)
  difficulty <n>   computer plays the minimax move n% of the time
  help             show this text
  quit             leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Place(usize),
    History,
    Jump(usize),
    Restart,
    Mode(GameMode),
    Difficulty(Difficulty),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<GameCommand, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = tokens.split_first() else {
        return Err("Empty command, type 'help' for the list".to_string());
    };

    if first.chars().all(|c| c.is_ascii_digit()) {
        return parse_cell(&tokens);
    }

    let keyword = first.to_ascii_lowercase();
    match (keyword.as_str(), rest) {
        ("history" | "h", []) => Ok(GameCommand::History),
        ("restart" | "r", []) => Ok(GameCommand::Restart),
        ("help" | "?", []) => Ok(GameCommand::Help),
        ("quit" | "q" | "exit", []) => Ok(GameCommand::Quit),
        ("jump" | "j", [n]) => parse_number::<usize>(n).map(GameCommand::Jump),
        ("mode" | "m", [mode]) => mode.parse::<GameMode>().map(GameCommand::Mode),
        ("difficulty" | "d", [n]) => {
            let percent = parse_number::<u8>(n)?;
            Difficulty::new(percent).map(GameCommand::Difficulty)
        }
        ("jump" | "j" | "mode" | "m" | "difficulty" | "d", _) => {
            Err(format!("'{}' takes exactly one argument", keyword))
        }
        _ => Err(format!("Unknown command '{}', type 'help' for the list", line.trim())),
    }
}

fn parse_cell(tokens: &[&str]) -> Result<GameCommand, String> {
    match tokens {
        [cell] => {
            let cell = parse_number::<usize>(cell)?;
            if !(1..=CELL_COUNT).contains(&cell) {
                return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
            }
            Ok(GameCommand::Place(cell - 1))
        }
        [row, col] => {
            let row = parse_number::<usize>(row)?;
            let col = parse_number::<usize>(col)?;
            Board::row_col_to_cell(row, col)
                .map(GameCommand::Place)
                .ok_or_else(|| {
                    format!(
                        "Row and column must be between 1 and 3, got ({},{})",
                        row, col
                    )
                })
        }
        _ => Err("Expected a cell number or a row and a column".to_string()),
    }
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, String> {
    token
        .parse::<T>()
        .map_err(|_| format!("'{}' is not a valid number", token))
}
