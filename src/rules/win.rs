//! Win condition checking
//!
//! A side wins as soon as its pieces fill one of the 8 lines. Lines are
//! scanned in a fixed order (rows, columns, diagonals) and the first full
//! line decides the result.

use crate::board::{Board, Piece, Pos, WIN_LINES, WIN_MASKS};

/// Find the first uniformly occupied line and its owner
pub fn find_winning_line(board: &Board) -> Option<(Piece, [Pos; 3])> {
    WIN_MASKS
        .iter()
        .zip(WIN_LINES.iter())
        .find_map(|(&mask, line)| {
            if board.white.overlap(mask) == 3 {
                Some((Piece::White, *line))
            } else if board.black.overlap(mask) == 3 {
                Some((Piece::Black, *line))
            } else {
                None
            }
        })
}

/// Check for a winner
///
/// Returns `Some(Piece)` if any line is full, `None` otherwise.
#[inline]
pub fn check_winner(board: &Board) -> Option<Piece> {
    find_winning_line(board).map(|(piece, _)| piece)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(piece: Piece, cells: &[Pos]) -> Board {
        let mut board = Board::new();
        for &pos in cells {
            board.place_stone(pos, piece);
        }
        board
    }

    #[test]
    fn test_every_line_wins_for_both_colors() {
        for line in WIN_LINES {
            for piece in [Piece::White, Piece::Black] {
                let board = board_with(piece, &line);
                assert_eq!(check_winner(&board), Some(piece), "line {:?}", line);
                assert_eq!(find_winning_line(&board), Some((piece, line)));
            }
        }
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);

        // W W B / B B W / W B W - full board, no line
        let mut board = Board::new();
        let layout = [
            Piece::White,
            Piece::White,
            Piece::Black,
            Piece::Black,
            Piece::Black,
            Piece::White,
            Piece::White,
            Piece::Black,
            Piece::White,
        ];
        for (idx, piece) in layout.into_iter().enumerate() {
            board.place_stone(Pos::from_index(idx), piece);
        }
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Piece::White, &[Pos::new(0, 0), Pos::new(1, 0)]);
        board.place_stone(Pos::new(2, 0), Piece::Black);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_decides() {
        // Two full rows: the earlier row in scan order wins.
        let mut board = board_with(Piece::Black, &WIN_LINES[2]);
        for pos in WIN_LINES[0] {
            board.place_stone(pos, Piece::White);
        }
        assert_eq!(check_winner(&board), Some(Piece::White));
    }
}
