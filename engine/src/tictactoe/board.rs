use super::types::{CELL_COUNT, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Reads nine cells in row-major order. `X`/`O` (any case) are marks,
    /// `.`, `_`, `-` and spaces are empty cells; `|` and newlines are ignored.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in text.chars() {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' | '-' | ' ' => Mark::Empty,
                '|' | '\n' | '\r' => continue,
                other => return Err(format!("Unexpected board character '{}'", other)),
            };
            if count == CELL_COUNT {
                return Err("Board has more than 9 cells".to_string());
            }
            cells[count] = mark;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(format!("Board has {} cells, expected 9", count));
        }
        Ok(Self { cells })
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn available_cells(&self) -> Vec<usize> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_empty() {
                moves.push(index);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.count(Mark::Empty), 9);
    }

    #[test]
    fn test_parse_board() {
        let board = Board::parse("XO.|.X.|..O").unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::O));
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.get(8), Some(Mark::O));
        assert_eq!(board.get(9), None);
        assert_eq!(board.available_cells(), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(Board::parse("XO").is_err());
        assert!(Board::parse("XOXOXOXOXO").is_err());
        assert!(Board::parse("XOXOZOXOX").is_err());
    }

    #[test]
    fn test_full_board() {
        let board = Board::parse("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert!(board.available_cells().is_empty());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
    }
}
