//! Uniform-random opponent: every coordinate exactly once, in shuffled order.

use alloc::vec::Vec;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{BotError, ShotOutcome};
use crate::config::GameConfig;

/// A single shot taken by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BotShot {
    pub x: usize,
    pub y: usize,
    pub outcome: ShotOutcome,
}

/// Automated opponent drawing targets from a pre-shuffled list of all cells.
#[derive(Debug, Clone)]
pub struct Bot {
    remaining: Vec<(usize, usize)>,
}

impl Bot {
    /// Build the full target list for the configured grid and shuffle it.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let size = config.grid_size();
        let mut remaining: Vec<(usize, usize)> = (0..size)
            .flat_map(|x| (0..size).map(move |y| (x, y)))
            .collect();
        remaining.shuffle(rng);
        Self { remaining }
    }

    /// Number of coordinates not yet targeted.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Coordinates still to be fired, last element first.
    pub fn targets(&self) -> &[(usize, usize)] {
        &self.remaining
    }

    /// Fire at the next coordinate on `target`.
    ///
    /// The coordinate is consumed even if the board rejects it, so the bot
    /// never repeats a target.
    pub fn shoot(&mut self, target: &mut Board) -> Result<BotShot, BotError> {
        let (x, y) = self.remaining.pop().ok_or(BotError::OutOfTargets)?;
        let outcome = target.shoot(x, y)?;
        debug!("bot fired at ({}, {}): {:?}", x, y, outcome);
        Ok(BotShot { x, y, outcome })
    }
}
