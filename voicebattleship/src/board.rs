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
//! Types that make up the game board.

use crate::ships::{Ship, ShipId};

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, InvalidCoordinate},
    dimensions::{BoardSize, MAX_HEIGHT, MAX_WIDTH},
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    setup::BoardSetup,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// How a cell should be drawn. Only the owner of a board may see [`CellClass::Ship`];
/// the opponent sees such cells as [`CellClass::Empty`] until they are hit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellClass {
    /// Open water that has not been targeted.
    Empty,
    /// An undamaged ship segment.
    Ship,
    /// A ship segment that has been hit.
    Hit,
    /// Open water that has been targeted.
    Miss,
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether this cell was targeted.
    shot: bool,

    /// The ship that occupies this cell if any.
    ship: Option<&'a Ship>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this cell has been targeted previously.
    pub fn shot(&self) -> bool {
        self.shot
    }

    /// The ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship
    }

    /// Classification as seen by the board's owner.
    pub fn class(&self) -> CellClass {
        match (self.ship.is_some(), self.shot) {
            (true, true) => CellClass::Hit,
            (true, false) => CellClass::Ship,
            (false, true) => CellClass::Miss,
            (false, false) => CellClass::Empty,
        }
    }

    /// Classification as seen by the opponent, with undamaged ships hidden.
    pub fn hidden_class(&self) -> CellClass {
        match self.class() {
            CellClass::Ship => CellClass::Empty,
            other => other,
        }
    }
}

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The shot hit the ship with the given ID and sank it.
    Sunk(ShipId),
}

impl ShotOutcome {
    /// Get the id of the ship that was hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Sunk(id) => Some(id),
        }
    }
}

/// Represents a single player's board during play, including their ships and their side
/// of the ocean. Ship positions are fixed; only hits change.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Ships in placement order, indexed by [`ShipId`].
    ships: Vec<Ship>,
}

impl Board {
    /// Get the [`BoardSize`] of this [`Board`].
    pub fn size(&self) -> &BoardSize {
        &self.grid.size
    }

    /// All ships on this board.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the ship with the specified ID if it exists.
    pub fn get_ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    /// Number of ships not yet sunk.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.sunk()).count()
    }

    /// Returns true if all of this player's ships have been sunk.
    pub fn defeated(&self) -> bool {
        self.afloat() == 0
    }

    /// Number of distinct ship cells that have been hit.
    pub fn hits_taken(&self) -> usize {
        self.ships.iter().map(Ship::hits).sum()
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn get_coord(&self, coord: Coordinate) -> Option<CellRef> {
        self.grid.get(coord).map(|cell| CellRef {
            coord,
            shot: cell.shot,
            ship: cell.ship.and_then(|id| self.get_ship(id)),
        })
    }

    /// Fire a shot at this board. A cell may be targeted once, whatever it holds. Only
    /// the ship owning the target cell is checked for sinking.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let cell = match self.grid.get_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(cell) if cell.shot => {
                return Err(ShotError::new(CannotShootReason::AlreadyTargeted, coord))
            }
            Some(cell) => cell,
        };
        cell.shot = true;
        let id = match cell.ship {
            None => return Ok(ShotOutcome::Miss),
            Some(id) => id,
        };
        Ok(match self.ships[id.index()].register_hit(coord) {
            Some(true) => ShotOutcome::Sunk(id),
            _ => ShotOutcome::Hit(id),
        })
    }
}
