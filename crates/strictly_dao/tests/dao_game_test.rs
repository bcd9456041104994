//! Tests for the Dao engine through the public API.

use strictly_dao::{Board, Game, GameStatus, Move, MoveError, Player, Position, Square};

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Board with Player One on `ones`, Player Two on `twos`.
fn board(ones: &[(i32, i32)], twos: &[(i32, i32)]) -> Board {
    let mut board = Board::empty();
    for &(row, col) in ones {
        board.set(p(row, col), Square::Occupied(Player::One)).unwrap();
    }
    for &(row, col) in twos {
        board.set(p(row, col), Square::Occupied(Player::Two)).unwrap();
    }
    board
}

#[test]
fn test_is_on_board_matches_bounds() {
    for row in -3..7 {
        for col in -3..7 {
            let inside = (0..4).contains(&row) && (0..4).contains(&col);
            assert_eq!(Game::is_on_board(p(row, col)), inside);
        }
    }
}

#[test]
fn test_can_move_rejections_on_starting_board() {
    let game = Game::new();
    for from in Position::all() {
        for to in Position::all() {
            if !game.can_move(from, to) {
                continue;
            }
            assert_ne!(from, to);
            assert!(game.is_empty(to));
            assert!(!game.is_empty(from));
            assert_eq!(game.owner_of(from), Some(game.current_player()));
        }
    }
}

#[test]
fn test_every_legal_move_is_a_pure_relocation() {
    let game = Game::new();
    for from in Position::all() {
        for to in Position::all() {
            if !game.can_move(from, to) {
                continue;
            }
            let mut after = game.clone();
            let before_piece = game.board().get(from);
            after.move_piece(from, to);

            assert!(after.is_empty(from));
            assert_eq!(after.board().get(to), before_piece);
            assert_eq!(after.board().count(Player::One), 4);
            assert_eq!(after.board().count(Player::Two), 4);
            assert_ne!(after.current_player(), game.current_player());
        }
    }
}

#[test]
fn test_row_win_after_move() {
    let mut game = Game::from_board(
        board(&[(0, 0), (0, 1), (0, 2), (1, 3)], &[(3, 0), (3, 1)]),
        Player::One,
    );
    assert!(game.can_move(p(1, 3), p(0, 3)));
    game.move_piece(p(1, 3), p(0, 3));
    assert!(game.game_end());
    assert_eq!(game.status(), GameStatus::Won(Player::One));
}

#[test]
fn test_column_win_after_move() {
    let mut game = Game::from_board(
        board(&[(0, 0)], &[(0, 2), (1, 2), (2, 2), (3, 0)]),
        Player::Two,
    );
    let status = game.make_move(p(3, 0), p(3, 2)).unwrap();
    assert_eq!(status, GameStatus::Won(Player::Two));
}

#[test]
fn test_corner_win_after_move() {
    let mut game = Game::from_board(
        board(&[(0, 0), (0, 3), (3, 0), (2, 3)], &[(1, 1)]),
        Player::One,
    );
    let status = game.make_move(p(2, 3), p(3, 3)).unwrap();
    assert_eq!(status, GameStatus::Won(Player::One));
}

#[test]
fn test_square_block_win_after_move() {
    let mut game = Game::from_board(
        board(&[(1, 1), (1, 2), (2, 1), (3, 3)], &[(0, 0)]),
        Player::One,
    );
    let status = game.make_move(p(3, 3), p(2, 2)).unwrap();
    assert_eq!(status, GameStatus::Won(Player::One));
}

#[test]
fn test_corner_trap_loses_for_mover() {
    let mut game = Game::from_board(
        board(&[(0, 1), (1, 0), (2, 2)], &[(0, 0), (3, 3)]),
        Player::One,
    );
    let status = game.make_move(p(2, 2), p(1, 1)).unwrap();
    assert_eq!(status, GameStatus::Lost(Player::One));
    assert_eq!(status.winner(), Some(Player::Two));
}

#[test]
fn test_replayed_game_to_a_win() {
    let moves = [
        Move::new(Player::One, p(0, 0), p(0, 1)),
        Move::new(Player::Two, p(0, 3), p(0, 2)),
        Move::new(Player::One, p(3, 3), p(3, 1)),
        Move::new(Player::Two, p(2, 1), p(1, 0)),
        Move::new(Player::One, p(2, 2), p(2, 1)),
    ];
    let game = Game::replay(&moves).expect("Valid replay");
    assert_eq!(game.status(), GameStatus::Won(Player::One));
    assert_eq!(game.move_count(), 5);
    assert_eq!(game.history(), &moves);
}

#[test]
fn test_replayed_game_to_a_trap() {
    let moves = [
        Move::new(Player::One, p(0, 0), p(0, 1)),
        Move::new(Player::Two, p(0, 3), p(0, 2)),
        Move::new(Player::One, p(1, 1), p(1, 0)),
        Move::new(Player::Two, p(0, 2), p(0, 3)),
        Move::new(Player::One, p(2, 2), p(1, 1)),
    ];
    let game = Game::replay(&moves).expect("Valid replay");
    assert_eq!(game.status(), GameStatus::Lost(Player::One));
}

#[test]
fn test_no_moves_after_game_over() {
    let moves = [
        Move::new(Player::One, p(0, 0), p(0, 1)),
        Move::new(Player::Two, p(0, 3), p(0, 2)),
        Move::new(Player::One, p(3, 3), p(3, 1)),
        Move::new(Player::Two, p(2, 1), p(1, 0)),
        Move::new(Player::One, p(2, 2), p(2, 1)),
        Move::new(Player::Two, p(0, 2), p(0, 3)),
    ];
    assert_eq!(Game::replay(&moves), Err(MoveError::GameOver));
}

#[test]
fn test_move_error_messages() {
    let game = Game::new();
    let err = game.check_move(p(0, 1), p(0, 2)).unwrap_err();
    assert_eq!(err.to_string(), "Square (0,1) is empty");
    let err = game.check_move(p(0, 3), p(0, 2)).unwrap_err();
    assert_eq!(err.to_string(), "It's not Player 2's turn");
}

#[test]
fn test_saved_history_replays_to_same_game() {
    let mut game = Game::new();
    game.make_move(p(0, 0), p(0, 1)).unwrap();
    game.make_move(p(0, 3), p(0, 2)).unwrap();
    game.make_move(p(1, 1), p(1, 0)).unwrap();

    let saved = serde_json::to_string(game.history()).expect("Serialize history");
    let moves: Vec<Move> = serde_json::from_str(&saved).expect("Deserialize history");
    assert_eq!(Game::replay(&moves), Ok(game));
}

#[test]
fn test_replay_stops_at_first_illegal_move() {
    let moves = [
        Move::new(Player::One, p(0, 0), p(0, 1)),
        Move::new(Player::Two, p(0, 3), p(2, 0)),
        Move::new(Player::One, p(1, 1), p(1, 0)),
    ];
    assert_eq!(
        Game::replay(&moves),
        Err(MoveError::NotStraightLine {
            from: p(0, 3),
            to: p(2, 0)
        })
    );
}
