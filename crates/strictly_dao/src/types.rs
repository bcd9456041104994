//! Core domain types for Dao.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 4;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Moves first; starts on the main diagonal.
    #[display("Player 1")]
    One,
    /// Moves second; starts on the anti-diagonal.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A square on the Dao board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a player's piece.
    Occupied(Player),
}

impl Square {
    /// The player whose piece sits here, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 4x4 Dao board.
///
/// Every cell always holds a [`Square`]; moves relocate pieces and never
/// create or destroy them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the starting board.
    ///
    /// Player One fills the main diagonal, Player Two the anti-diagonal.
    #[instrument]
    pub fn new() -> Self {
        let mut squares = [[Square::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in squares.iter_mut().enumerate() {
            for (j, square) in row.iter_mut().enumerate() {
                if i == j {
                    *square = Square::Occupied(Player::One);
                } else if i + j == BOARD_SIZE - 1 {
                    *square = Square::Occupied(Player::Two);
                }
            }
        }
        Self { squares }
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit rows.
    pub fn with_squares(squares: [[Square; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at a position, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        pos.to_indices().map(|(row, col)| self.squares[row][col])
    }

    /// Sets the square at a position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OffBoard`] if the position is outside the board.
    pub fn set(&mut self, pos: Position, square: Square) -> Result<(), MoveError> {
        let (row, col) = pos.to_indices().ok_or(MoveError::OffBoard(pos))?;
        self.squares[row][col] = square;
        Ok(())
    }

    /// Moves whatever sits at `from` to `to`, leaving `from` empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OffBoard`] and changes nothing if either position
    /// is outside the board.
    pub fn relocate(&mut self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.get(from).ok_or(MoveError::OffBoard(from))?;
        if !to.is_on_board() {
            return Err(MoveError::OffBoard(to));
        }
        self.set(from, Square::Empty)?;
        self.set(to, piece)
    }

    /// Checks if a square is empty. Off-board positions are never empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// The owner of the piece at a position.
    pub fn owner_of(&self, pos: Position) -> Option<Player> {
        self.get(pos).and_then(Square::owner)
    }

    /// Checks if `player` owns the piece at `pos`.
    pub fn is_owned_by(&self, pos: Position, player: Player) -> bool {
        self.owner_of(pos) == Some(player)
    }

    /// Number of pieces belonging to `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as rows.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one row per line, `.`/`1`/`2` per square.
///
/// The alternate form (`{:#}`) writes each square's ordinal instead:
/// `0` empty, `1` Player One, `2` Player Two.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let empty = if f.alternate() { "0" } else { "." };
        for row in &self.squares {
            let line = row
                .iter()
                .map(|square| match square {
                    Square::Empty => empty,
                    Square::Occupied(Player::One) => "1",
                    Square::Occupied(Player::Two) => "2",
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Current status of the game.
///
/// Once a game leaves `InProgress` its status never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The player completed a winning shape.
    Won(Player),
    /// The player trapped a corner they do not hold.
    Lost(Player),
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The player who takes the game, if it has ended.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(*player),
            GameStatus::Lost(player) => Some(player.opponent()),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} has won", player),
            GameStatus::Lost(player) => write!(f, "{} has lost", player),
        }
    }
}
