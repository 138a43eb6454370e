//! Common types for the rules engine: the error kind and attack results.

use thiserror::Error;

/// Result of a single attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Attack landed on empty water.
    Miss,
    /// Attack damaged a ship that is still afloat.
    Hit,
    /// Attack sank a ship, carrying its length.
    Sink(usize),
}

impl GuessResult {
    /// `true` for both `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Caller contract violations. Routine rejections (overlap, off-grid runs,
/// repeat shots, wrong phase) are reported as `false` and never land here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A ship was requested with a non-positive length.
    #[error("ship length must be positive, got {length}")]
    InvalidLength { length: usize },
    /// A coordinate lies outside the board.
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },
    /// No legal position exists for a ship of this length.
    #[error("unable to place ship of length {length}")]
    UnableToPlaceShip { length: usize },
    /// A driven match did not finish within its move budget.
    #[error("match did not finish within {limit} moves")]
    MoveLimitExceeded { limit: usize },
}

impl GameError {
    /// `true` for the argument errors that indicate a caller bug.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GameError::InvalidLength { .. } | GameError::OutOfRange { .. }
        )
    }
}
