//! The Dao game engine.
//!
//! [`Game`] owns the board, the player to move, the move history and the
//! game status. Callers gate moves through [`Game::can_move`] (or use the
//! checked [`Game::make_move`]); [`Game::move_piece`] applies a move
//! without validation so trusted sequences can be replayed.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::direction::Direction;
use super::rules;
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Dao game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) start: Board,
    pub(crate) first_player: Player,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game on the starting board with Player One to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::One)
    }

    /// Creates a game from an arbitrary board.
    ///
    /// The board is not evaluated; the game starts in progress.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, current_player: Player) -> Self {
        info!(player = %current_player, "Game created");
        Self {
            start: board.clone(),
            board,
            first_player: current_player,
            current_player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns true if the position lies on the board.
    pub fn is_on_board(pos: Position) -> bool {
        pos.is_on_board()
    }

    /// Checks if the square is empty. Off-board squares are never empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.board.is_empty(pos)
    }

    /// The owner of the piece at `pos`, if any.
    pub fn owner_of(&self, pos: Position) -> Option<Player> {
        self.board.owner_of(pos)
    }

    /// Checks if the piece at `pos` belongs to `player`.
    pub fn is_correct_player(&self, pos: Position, player: Player) -> bool {
        self.board.is_owned_by(pos, player)
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board the game started from.
    pub fn starting_board(&self) -> &Board {
        &self.start
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has been decided.
    pub fn game_end(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    // ─────────────────────────────────────────────────────────────
    //  Legality
    // ─────────────────────────────────────────────────────────────

    /// Checks the line of movement from `from` to `to`.
    ///
    /// The move must follow one row, column or diagonal, and every square
    /// after `from` up to and including `to` must be empty.
    #[instrument(skip(self))]
    pub fn is_legal_move(&self, from: Position, to: Position) -> bool {
        self.check_path(from, to).is_ok()
    }

    fn check_path(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let (direction, length) =
            Direction::between(from, to).ok_or(MoveError::NotStraightLine { from, to })?;
        debug!(%direction, length, "Scanning path");

        match (1..=length)
            .map(|step| from.offset(direction, step))
            .find(|p| !self.board.is_empty(*p))
        {
            Some(at) => {
                debug!(%at, "Obstacle found in the path");
                Err(MoveError::Blocked { from, at })
            }
            None => Ok(()),
        }
    }

    /// Validates a move for the current player.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] that applies, checked in this order:
    /// game over, off-board squares, empty origin, wrong owner, occupied
    /// destination, bent line, blocked path.
    #[instrument(skip(self))]
    pub fn check_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        for pos in [from, to] {
            if !pos.is_on_board() {
                return Err(MoveError::OffBoard(pos));
            }
        }
        match self.board.owner_of(from) {
            None => return Err(MoveError::EmptySquare(from)),
            Some(owner) if owner != self.current_player => {
                return Err(MoveError::WrongPlayer(owner));
            }
            Some(_) => {}
        }
        if !self.board.is_empty(to) {
            return Err(MoveError::SquareOccupied(to));
        }
        self.check_path(from, to)
    }

    /// Returns true if the current player may move the piece at `from` to `to`.
    #[instrument(skip(self))]
    pub fn can_move(&self, from: Position, to: Position) -> bool {
        match self.check_move(from, to) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Application
    // ─────────────────────────────────────────────────────────────

    /// Relocates the piece at `from` to `to` without validation.
    ///
    /// Evaluates the board for the mover, records the result the first time
    /// the game ends, then passes the turn. Callers must gate with
    /// [`Game::can_move`]. An off-board position changes nothing: the board,
    /// history and turn stay as they were.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn move_piece(&mut self, from: Position, to: Position) -> GameStatus {
        let mover = self.current_player;
        if let Err(e) = self.board.relocate(from, to) {
            warn!(error = %e, "Unchecked move ignored");
            return self.status;
        }
        self.history.push(Move::new(mover, from, to));
        info!(%from, %to, "Piece moved");

        if !self.status.is_over()
            && let Some(outcome) = rules::evaluate(&self.board, mover)
        {
            self.status = outcome.into();
            info!(status = %self.status, "Game decided");
        }

        self.current_player = mover.opponent();
        debug!(next = %self.current_player, "Players changed");
        self.status
    }

    /// Validates and applies a move for the current player.
    ///
    /// Postconditions are verified in debug builds.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the move is illegal or breaks an invariant.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<GameStatus, MoveError> {
        let action = Move::new(self.current_player, from, to);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let status = self.move_piece(from, to);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(status)
    }

    /// Replays moves from the starting board.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that cannot be applied.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for action in moves {
            if action.player != game.current_player {
                return Err(MoveError::WrongPlayer(action.player));
            }
            game.make_move(action.from, action.to)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
