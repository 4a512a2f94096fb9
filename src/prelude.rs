//! Commonly used types and utilities for ease of import.

pub use crate::{
    Action, Board, Bot, BotShot, Event, Game, GameConfig, Orientation, Phase, ShotOutcome,
    Winner,
};

#[cfg(feature = "std")]
pub use crate::console::{parse_command, render_board, render_view};
#[cfg(feature = "std")]
pub use crate::init_logging;
