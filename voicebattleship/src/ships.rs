// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Types used for defining ships, their placements, and the fleet a player must place.
use std::fmt;

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

pub use self::{
    linear::Line,
    pool::{FleetSpec, ShipPool},
};

mod linear;
mod pool;

/// Identifies a ship within a single player's fleet. Ships are numbered in the order
/// they were placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position of this ship in its fleet's placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Direction a ship extends from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Cells extend along increasing column.
    Horizontal,
    /// Cells extend along increasing row.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Step `n` cells from `coord` along this orientation. Returns `None` only on
    /// integer overflow; bounds are the caller's concern.
    pub fn step(self, coord: Coordinate, n: usize) -> Option<Coordinate> {
        match self {
            Orientation::Horizontal => coord.col.checked_add(n).map(|col| Coordinate::new(coord.row, col)),
            Orientation::Vertical => coord.row.checked_add(n).map(|row| Coordinate::new(row, coord.col)),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Horizontal
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A requested position for a ship: where it starts, how long it is, and which way it
/// points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    pub origin: Coordinate,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
        }
    }
}

/// One segment of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipCell {
    coord: Coordinate,
    hit: bool,
}

impl ShipCell {
    /// Where this segment sits on the board.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this segment has been hit.
    pub fn hit(&self) -> bool {
        self.hit
    }
}

/// Returns true if every cell has been hit. This is the only definition of sunk.
pub fn all_hit(cells: &[ShipCell]) -> bool {
    cells.iter().all(|cell| cell.hit)
}

/// A placed ship. The cells are ordered from the origin outward.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    id: ShipId,
    orientation: Orientation,
    cells: Vec<ShipCell>,
    /// Cached result of [`all_hit`], refreshed on every hit to this ship.
    sunk: bool,
}

impl Ship {
    /// Build an undamaged ship over the given projected cells.
    pub(crate) fn new(id: ShipId, orientation: Orientation, coords: Vec<Coordinate>) -> Self {
        Self {
            id,
            orientation,
            cells: coords
                .into_iter()
                .map(|coord| ShipCell { coord, hit: false })
                .collect(),
            sunk: false,
        }
    }

    /// Get the ID of the ship.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Number of cells in this ship.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The cell the ship starts from.
    pub fn origin(&self) -> Coordinate {
        self.cells[0].coord
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The ship's cells, from the origin outward.
    pub fn cells(&self) -> &[ShipCell] {
        &self.cells
    }

    /// Get an iterator over the coordinates of this ship.
    pub fn coords(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.cells.iter().map(|cell| cell.coord)
    }

    /// Number of this ship's cells which have been hit.
    pub fn hits(&self) -> usize {
        self.cells.iter().filter(|cell| cell.hit).count()
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    /// Mark the cell at `coord` as hit and refresh the sunk flag of this ship only.
    /// Returns `None` if the ship does not cover `coord`, otherwise whether this hit
    /// is the one that sank it.
    pub(crate) fn register_hit(&mut self, coord: Coordinate) -> Option<bool> {
        let cell = self.cells.iter_mut().find(|cell| cell.coord == coord)?;
        cell.hit = true;
        let was_sunk = self.sunk;
        self.sunk = all_hit(&self.cells);
        Some(self.sunk && !was_sunk)
    }
}
