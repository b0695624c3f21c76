use super::board::Board;
use super::types::{Player, WinningLine};

pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new([0, 1, 2]),
    WinningLine::new([3, 4, 5]),
    WinningLine::new([6, 7, 8]),
    WinningLine::new([0, 3, 6]),
    WinningLine::new([1, 4, 7]),
    WinningLine::new([2, 5, 8]),
    WinningLine::new([0, 4, 8]),
    WinningLine::new([2, 4, 6]),
];

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|(player, _)| player)
}

/// Returns the first complete line in table order.
pub fn check_win_with_line(board: &Board) -> Option<(Player, WinningLine)> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line.cells();
        if let Some(player) = cells[a].player() {
            if cells[a] == cells[b] && cells[a] == cells[c] {
                return Some((player, line));
            }
        }
    }
    None
}

pub(crate) fn has_line(board: &Board, player: Player) -> bool {
    let cells = board.cells();
    WINNING_LINES.iter().any(|line| {
        line.cells()
            .iter()
            .all(|&index| cells[index].player() == Some(player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        let row = Board::parse("...XXX.OO").unwrap();
        assert_eq!(
            check_win_with_line(&row),
            Some((Player::X, WinningLine::new([3, 4, 5])))
        );

        let column = Board::parse("XXO.XO..O").unwrap();
        assert_eq!(
            check_win_with_line(&column),
            Some((Player::O, WinningLine::new([2, 5, 8])))
        );

        let anti_diagonal = Board::parse("XXO.O.OX.").unwrap();
        assert_eq!(
            check_win_with_line(&anti_diagonal),
            Some((Player::O, WinningLine::new([2, 4, 6])))
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::parse("XOXXOOOXX").unwrap();
        assert_eq!(check_win(&board), None);
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for index in 0..9 {
            assert!(WINNING_LINES.iter().any(|line| line.contains(index)));
        }
    }
}
