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
//! Implements the setup phase of the board.
#[cfg(feature = "rng_gen")]
use rand::{seq::IteratorRandom, Rng};

use crate::{
    board::{Board, BoardSize, CannotPlaceReason, CellClass, Coordinate, Grid, PlaceError},
    ships::{FleetSpec, Line, Placement, Ship, ShipId, ShipPool},
};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow shooting.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Ships placed so far, in placement order. A ship's [`ShipId`] is its index here.
    ships: Vec<Ship>,

    /// Lengths still waiting to be placed.
    pool: ShipPool,
}

impl BoardSetup {
    /// Begin setup with an empty board of the given size and a full pool for `fleet`.
    pub fn new(size: BoardSize, fleet: &FleetSpec) -> Self {
        Self {
            grid: Grid::new(size),
            ships: Vec::with_capacity(fleet.ship_count()),
            pool: fleet.pool(),
        }
    }

    /// Get the [`BoardSize`] of this board.
    pub fn size(&self) -> &BoardSize {
        &self.grid.size
    }

    /// Checks if this board is ready to start: at least one ship placed and nothing left
    /// in the pool.
    pub fn ready(&self) -> bool {
        !self.ships.is_empty() && self.pool.is_empty()
    }

    /// Lengths still to place, shortest first.
    pub fn pending_lengths(&self) -> Vec<usize> {
        self.pool.lengths()
    }

    /// Ships placed so far.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.grid
            .get(coord)
            .and_then(|cell| cell.ship)
            .map(|id| &self.ships[id.index()])
    }

    /// Classify the cell at `coord` for display. Returns `None` if out of bounds.
    pub fn classify(&self, coord: Coordinate) -> Option<CellClass> {
        self.grid.get(coord).map(|cell| match cell.ship {
            Some(_) => CellClass::Ship,
            None => CellClass::Empty,
        })
    }

    /// Check if the given placement would be valid, without attempting to actually place
    /// the ship. On success returns the cells the ship would cover.
    pub fn check_placement(&self, placement: &Placement) -> Result<Vec<Coordinate>, CannotPlaceReason> {
        if self.pool.is_empty() {
            return Err(CannotPlaceReason::FleetComplete);
        }
        if !self.pool.contains(placement.length) {
            return Err(CannotPlaceReason::LengthUnavailable(placement.length));
        }
        let route = Line::new(placement.length)
            .project(placement.origin, placement.orientation, self.size())
            .ok_or(CannotPlaceReason::OutOfBounds)?;
        if route.iter().any(|&coord| self.grid[coord].ship.is_some()) {
            return Err(CannotPlaceReason::Overlap);
        }
        Ok(route)
    }

    /// Try to place a ship. Either every cell is claimed and one instance of the length
    /// leaves the pool, or nothing changes and the reason is returned.
    pub fn place(&mut self, placement: Placement) -> Result<&Ship, PlaceError> {
        let route = self
            .check_placement(&placement)
            .map_err(|reason| PlaceError::new(reason, placement))?;
        let id = ShipId(self.ships.len());
        // Already ensured that every position is valid and not occupied.
        for &coord in &route {
            self.grid[coord].ship = Some(id);
        }
        self.pool.take(placement.length);
        self.ships.push(Ship::new(id, placement.orientation, route));
        Ok(&self.ships[id.index()])
    }

    /// Pick a uniformly random legal placement for a ship of `length`, given the ships
    /// already on the board.
    #[cfg(feature = "rng_gen")]
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Placement, CannotPlaceReason> {
        if self.pool.is_empty() {
            return Err(CannotPlaceReason::FleetComplete);
        }
        if !self.pool.contains(length) {
            return Err(CannotPlaceReason::LengthUnavailable(length));
        }
        Line::new(length)
            .placements(self.size())
            .filter(|(_, _, route)| route.iter().all(|&coord| self.grid[coord].ship.is_none()))
            .map(|(origin, orientation, _)| Placement::new(origin, length, orientation))
            .choose(rng)
            .ok_or(CannotPlaceReason::NoRoom(length))
    }

    /// Tries to start the game. If all ships are placed, returns a [`Board`] with the
    /// current placements, otherwise returns self.
    pub fn start(self) -> Result<Board, Self> {
        if !self.ready() {
            Err(self)
        } else {
            Ok(Board {
                grid: self.grid,
                ships: self.ships,
            })
        }
    }
}
