use std::fmt;
use std::str::FromStr;

use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row-major 3x3 board. Cheap to copy, so searches hand copies down instead of undoing moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index] == Mark::Empty
    }

    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// 1-based (row, col) of a cell index.
    pub fn cell_to_row_col(index: usize) -> (usize, usize) {
        (index / BOARD_SIZE + 1, index % BOARD_SIZE + 1)
    }

    /// Inverse of `cell_to_row_col`; `None` when out of range.
    pub fn row_col_to_cell(row: usize, col: usize) -> Option<usize> {
        if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&col) {
            return None;
        }
        Some((row - 1) * BOARD_SIZE + (col - 1))
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' {
                continue;
            }
            let mark = Mark::from_char(c)
                .ok_or_else(|| format!("Invalid board character '{}'", c))?;
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT, count
            ));
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            let start = row * BOARD_SIZE;
            writeln!(
                f,
                "{}|{}|{}",
                self.cells[start],
                self.cells[start + 1],
                self.cells[start + 2]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_separators() {
        let board: Board = "XO. / .X. / ..O".parse().unwrap();
        assert_eq!(board.get(0), Mark::X);
        assert_eq!(board.get(1), Mark::O);
        assert_eq!(board.get(4), Mark::X);
        assert_eq!(board.get(8), Mark::O);
        assert_eq!(get_available_moves(&board).len(), 5);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO.".parse::<Board>().is_err());
        assert!("XO.XO.XO.X".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let err = "XO?......".parse::<Board>().unwrap_err();
        assert!(err.contains('?'));
    }

    #[test]
    fn test_available_moves_are_ascending_empty_cells() {
        let board: Board = "X.O.X.O..".parse().unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(4), Mark::X);
        assert!(!next.is_empty_cell(4));
        assert!(!next.is_empty_cell(9));
    }

    #[test]
    fn test_row_col_mapping() {
        assert_eq!(Board::cell_to_row_col(0), (1, 1));
        assert_eq!(Board::cell_to_row_col(5), (2, 3));
        assert_eq!(Board::row_col_to_cell(3, 3), Some(8));
        assert_eq!(Board::row_col_to_cell(0, 1), None);
        assert_eq!(Board::row_col_to_cell(2, 4), None);
    }

    #[test]
    fn test_display_renders_grid() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n-+-+-\n.|.|.\n-+-+-\n.|.|.\n");
    }
}
