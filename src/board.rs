//! Game board state: ship occupancy and shot history for one player.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{GameConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::{Cell, Grid, Shot};
use crate::ship::{Orientation, Placement, ShipType};

/// One player's grid: where the ships are and where shots have landed.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    occupancy: Grid<Cell>,
    shots: Grid<Shot>,
    fleet: Vec<ShipType>,
    placements: Vec<Placement>,
}

impl Board {
    /// Create an empty board (no ships placed, nothing fired).
    pub fn new(config: &GameConfig) -> Self {
        let size = config.grid_size();
        Board {
            occupancy: Grid::new(size),
            shots: Grid::new(size),
            fleet: config.fleet().to_vec(),
            placements: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.occupancy.size()
    }

    /// Ship occupancy of every cell.
    pub fn occupancy(&self) -> &Grid<Cell> {
        &self.occupancy
    }

    /// Shot status of every cell.
    pub fn shots(&self) -> &Grid<Shot> {
        &self.shots
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.occupancy.get(x, y)
    }

    pub fn is_fired(&self, x: usize, y: usize) -> bool {
        self.shots.get(x, y) == Some(Shot::Fired)
    }

    /// Runs accepted so far, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Fleet used by [`Board::randomize_ships`].
    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Number of cells occupied by ships.
    pub fn ship_cells(&self) -> usize {
        self.occupancy.count(Cell::Ship)
    }

    /// Number of ship cells that have been fired upon.
    pub fn hits(&self) -> usize {
        self.occupancy
            .positions(Cell::Ship)
            .filter(|&(x, y)| self.is_fired(x, y))
            .count()
    }

    /// Number of cells fired upon, hit or miss.
    pub fn shots_fired(&self) -> usize {
        self.shots.count(Shot::Fired)
    }

    /// Mark `size` cells starting at (`x`, `y`) as ship.
    ///
    /// The whole run is validated before anything is written, so a failed
    /// placement leaves the board untouched. Ships may touch; only exact cell
    /// overlap is rejected.
    pub fn place_ship(
        &mut self,
        x: usize,
        y: usize,
        size: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let placement = Placement::new(x, y, size, orientation);
        check_placement(&self.occupancy, &placement)?;
        mark_ship(&mut self.occupancy, &placement)?;
        self.placements.push(placement);
        debug!("placed {:?}", placement);
        Ok(())
    }

    /// Returns a random non-overlapping placement for a ship of `length`.
    ///
    /// Origins are sampled uniformly over the whole grid and rejected until one
    /// fits. After [`MAX_PLACEMENT_ATTEMPTS`] rejections the first free slot in
    /// row-major order is used instead.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Placement, BoardError> {
        random_placement(&self.occupancy, rng, length)
    }

    /// Clear all ships and lay out the configured fleet at random.
    ///
    /// On error the previous layout is kept. Shots are not reset.
    pub fn randomize_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let mut occupancy = self.occupancy.clone();
        occupancy.clear_all();
        let mut placements = Vec::with_capacity(self.fleet.len());
        for ship in &self.fleet {
            let placement = random_placement(&occupancy, rng, ship.length())?;
            mark_ship(&mut occupancy, &placement)?;
            trace!("{} at {:?}", ship.name(), placement);
            placements.push(placement);
        }
        self.occupancy = occupancy;
        self.placements = placements;
        debug!("randomized {} ships", self.placements.len());
        Ok(())
    }

    /// Fire at (`x`, `y`).
    ///
    /// A cell can only be fired upon once; repeats report
    /// [`ShotOutcome::AlreadyFired`] and change nothing.
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<ShotOutcome, BoardError> {
        let cell = self
            .occupancy
            .get(x, y)
            .ok_or(BoardError::OutOfBounds { x, y })?;
        if self.is_fired(x, y) {
            return Ok(ShotOutcome::AlreadyFired);
        }
        self.shots.set(x, y, Shot::Fired)?;
        Ok(match cell {
            Cell::Ship => ShotOutcome::Hit,
            Cell::Empty => ShotOutcome::Miss,
        })
    }

    /// Returns `true` when every ship cell has been fired upon.
    pub fn all_ships_sunk(&self) -> bool {
        self.occupancy
            .positions(Cell::Ship)
            .all(|(x, y)| self.is_fired(x, y))
    }
}

fn check_placement(occupancy: &Grid<Cell>, placement: &Placement) -> Result<(), BoardError> {
    if placement.length == 0 {
        return Err(BoardError::InvalidShipSize);
    }
    if !placement.fits(occupancy.size()) {
        return Err(BoardError::ShipOutOfBounds);
    }
    if placement
        .cells()
        .any(|(x, y)| occupancy.get(x, y) == Some(Cell::Ship))
    {
        return Err(BoardError::ShipOverlaps);
    }
    Ok(())
}

fn mark_ship(occupancy: &mut Grid<Cell>, placement: &Placement) -> Result<(), BoardError> {
    for (x, y) in placement.cells() {
        occupancy.set(x, y, Cell::Ship)?;
    }
    Ok(())
}

fn random_placement<R: Rng + ?Sized>(
    occupancy: &Grid<Cell>,
    rng: &mut R,
    length: usize,
) -> Result<Placement, BoardError> {
    if length == 0 {
        return Err(BoardError::InvalidShipSize);
    }
    let size = occupancy.size();
    if size == 0 {
        return Err(BoardError::UnableToPlaceShip);
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let x = rng.random_range(0..size);
        let y = rng.random_range(0..size);
        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let placement = Placement::new(x, y, length, orientation);
        if check_placement(occupancy, &placement).is_ok() {
            return Ok(placement);
        }
    }
    debug!(
        "no random slot for length {} after {} attempts, scanning",
        length, MAX_PLACEMENT_ATTEMPTS
    );
    scan_placement(occupancy, length)
}

/// First free slot in row-major order, trying horizontal before vertical.
fn scan_placement(occupancy: &Grid<Cell>, length: usize) -> Result<Placement, BoardError> {
    let size = occupancy.size();
    for y in 0..size {
        for x in 0..size {
            for orientation in Orientation::ALL {
                let placement = Placement::new(x, y, length, orientation);
                if check_placement(occupancy, &placement).is_ok() {
                    return Ok(placement);
                }
            }
        }
    }
    Err(BoardError::UnableToPlaceShip)
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  occupancy: {:?},\n  shots: {:?},\n  placements: {:?}\n}}",
            self.occupancy, self.shots, self.placements
        )
    }
}
