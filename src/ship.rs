//! Ship definitions and the straight runs of cells they occupy.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A run of `length` cells starting at (`x`, `y`).
///
/// A placement says nothing about whether it fits a particular board; see
/// [`Placement::fits`] and `Board::place_ship`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(x: usize, y: usize, length: usize, orientation: Orientation) -> Self {
        Self {
            x,
            y,
            length,
            orientation,
        }
    }

    /// Whether every cell of the run lies inside a `size`×`size` grid.
    pub fn fits(&self, size: usize) -> bool {
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (self.x, self.y),
            Orientation::Vertical => (self.y, self.x),
        };
        across < size
            && along
                .checked_add(self.length)
                .map_or(false, |end| end <= size)
    }

    /// Cells covered by the run, in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            x, y, orientation, ..
        } = *self;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
    }

    /// True if (`cx`, `cy`) is one of the run's cells.
    pub fn contains(&self, cx: usize, cy: usize) -> bool {
        self.cells().any(|c| c == (cx, cy))
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ origin: ({}, {}), length: {}, orientation: {:?} }}",
            self.x, self.y, self.length, self.orientation
        )
    }
}
