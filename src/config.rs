//! Board dimensions and fleet definitions.

use alloc::vec::Vec;

use crate::common::BoardError;
use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Largest grid the terminal front end can label with column letters.
pub const MAX_GRID_SIZE: usize = 26;

/// Random samples tried per ship before falling back to a deterministic scan.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Grid size and fleet shared by both boards and the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    grid_size: usize,
    fleet: Vec<ShipType>,
}

impl GameConfig {
    /// Build a validated configuration.
    ///
    /// The grid must be between 1 and [`MAX_GRID_SIZE`] cells wide and every
    /// ship must fit on it in at least one orientation.
    pub fn new(grid_size: usize, fleet: Vec<ShipType>) -> Result<Self, BoardError> {
        if grid_size == 0 || grid_size > MAX_GRID_SIZE {
            return Err(BoardError::InvalidConfig);
        }
        if fleet.iter().any(|s| s.length() == 0 || s.length() > grid_size) {
            return Err(BoardError::InvalidConfig);
        }
        Ok(Self { grid_size, fleet })
    }

    /// Standard fleet on a board of a different size.
    pub fn with_grid_size(grid_size: usize) -> Result<Self, BoardError> {
        Self::new(grid_size, SHIPS.to_vec())
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Sum of all ship lengths in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(|s| s.length()).sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: BOARD_SIZE,
            fleet: SHIPS.to_vec(),
        }
    }
}
