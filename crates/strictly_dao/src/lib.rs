//! Pure Dao game logic.
//!
//! Dao is played on a 4x4 board. Each player starts with four pieces, one
//! side on each diagonal, and slides a piece any distance along a row,
//! column or diagonal until it meets an obstacle or the edge. A player wins
//! by filling a row, a column, the four corners, or any 2x2 block, and
//! loses by walling in a corner they do not hold.
//!
//! # Example
//!
//! ```
//! use strictly_dao::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! let from = Position::new(0, 0);
//! let to = Position::new(0, 1);
//! assert!(game.can_move(from, to));
//! assert_eq!(game.move_piece(from, to), GameStatus::InProgress);
//! assert_eq!(game.current_player(), Player::Two);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod direction;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod selector;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, MoveContract};
pub use direction::{Direction, DirectionError};
pub use game::Game;
pub use position::Position;
pub use rules::Outcome;
pub use selector::{MoveSelector, Phase, SelectorError};
pub use types::{BOARD_SIZE, Board, GameStatus, Player, Square};
