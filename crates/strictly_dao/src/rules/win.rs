//! Win detection logic for Dao.

use super::super::{BOARD_SIZE, Board, Player, Position};
use tracing::{debug, instrument};

const LAST: i32 = BOARD_SIZE as i32 - 1;

/// Checks if `player` holds any winning shape.
///
/// A player wins with a full row, a full column, all four corners, or any
/// 2x2 block.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    full_row(board, player)
        || full_column(board, player)
        || all_corners(board, player)
        || any_square_block(board, player)
}

/// Some row is entirely `player`'s pieces.
pub fn full_row(board: &Board, player: Player) -> bool {
    let found = (0..=LAST).any(|row| {
        (0..=LAST).all(|col| board.is_owned_by(Position::new(row, col), player))
    });
    debug!(found, "Evaluated rows");
    found
}

/// Some column is entirely `player`'s pieces.
pub fn full_column(board: &Board, player: Player) -> bool {
    let found = (0..=LAST).any(|col| {
        (0..=LAST).all(|row| board.is_owned_by(Position::new(row, col), player))
    });
    debug!(found, "Evaluated columns");
    found
}

/// All four corners belong to `player`.
pub fn all_corners(board: &Board, player: Player) -> bool {
    Position::corners()
        .iter()
        .all(|corner| board.is_owned_by(*corner, player))
}

/// Some 2x2 block with top-left corner in `0..LAST` belongs to `player`.
pub fn any_square_block(board: &Board, player: Player) -> bool {
    (0..LAST).any(|row| (0..LAST).any(|col| square_block(board, Position::new(row, col), player)))
}

/// The 2x2 block anchored at `top_left` belongs to `player`.
fn square_block(board: &Board, top_left: Position, player: Player) -> bool {
    [(0, 0), (0, 1), (1, 0), (1, 1)].iter().all(|&(dr, dc)| {
        let pos = Position::new(top_left.row + dr, top_left.col + dc);
        board.is_owned_by(pos, player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn place(board: &mut Board, player: Player, cells: &[(i32, i32)]) {
        for &(row, col) in cells {
            board
                .set(Position::new(row, col), Square::Occupied(player))
                .unwrap();
        }
    }

    #[test]
    fn test_no_winner_starting_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
    }

    #[test]
    fn test_winner_row() {
        let mut board = Board::empty();
        place(&mut board, Player::One, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert!(full_row(&board, Player::One));
        assert!(has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::empty();
        place(&mut board, Player::Two, &[(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert!(full_column(&board, Player::Two));
        assert!(!full_row(&board, Player::Two));
    }

    #[test]
    fn test_winner_corners() {
        let mut board = Board::empty();
        place(&mut board, Player::One, &[(0, 0), (0, 3), (3, 0), (3, 3)]);
        assert!(all_corners(&board, Player::One));
        assert!(has_won(&board, Player::One));
    }

    #[test]
    fn test_every_square_block_wins() {
        for row in 0..3 {
            for col in 0..3 {
                let mut board = Board::empty();
                place(
                    &mut board,
                    Player::Two,
                    &[(row, col), (row, col + 1), (row + 1, col), (row + 1, col + 1)],
                );
                assert!(any_square_block(&board, Player::Two), "block at ({row},{col})");
            }
        }
    }

    #[test]
    fn test_mixed_block_does_not_win() {
        let mut board = Board::empty();
        place(&mut board, Player::One, &[(1, 1), (1, 2), (2, 1)]);
        place(&mut board, Player::Two, &[(2, 2)]);
        assert!(!has_won(&board, Player::One));
    }
}
