//! Common types for Broadside: shot outcomes and errors.

use core::fmt;

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The cell held part of a ship.
    Hit,
    /// The cell was empty water.
    Miss,
    /// The cell had already been fired upon; nothing changed.
    AlreadyFired,
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        self == ShotOutcome::Hit
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Part of the ship would fall outside the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ships must be at least one cell long.
    InvalidShipSize,
    /// No free slot left for a ship during random placement.
    UnableToPlaceShip,
    /// Grid size or fleet cannot be played.
    InvalidConfig,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the board", x, y)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InvalidShipSize => write!(f, "Ship size must be at least 1"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::InvalidConfig => write!(f, "Invalid board size or fleet"),
        }
    }
}

/// Errors returned by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    /// Every coordinate has already been targeted.
    OutOfTargets,
    /// The target board rejected the shot.
    Board(BoardError),
}

impl From<BoardError> for BotError {
    fn from(err: BoardError) -> Self {
        BotError::Board(err)
    }
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::OutOfTargets => write!(f, "Bot has no targets left"),
            BotError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

/// Errors returned by the game orchestration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The action is not allowed in the current phase or turn.
    InvalidAction {
        action: &'static str,
        phase: &'static str,
    },
    Board(BoardError),
    Bot(BotError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<BotError> for GameError {
    fn from(err: BotError) -> Self {
        GameError::Bot(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidAction { action, phase } => {
                write!(f, "Cannot {} during {}", action, phase)
            }
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Bot(e) => write!(f, "Bot error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for BotError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
