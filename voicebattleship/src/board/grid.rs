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
//! Defines the types that make up the grid. These are shared between the board's setup
//! and playing versions.

use std::ops::{Index, IndexMut};

use crate::{
    board::{BoardSize, Coordinate},
    ships::ShipId,
};

/// A single cell in the player's grid.
#[derive(Debug, Default, Clone)]
pub(super) struct GridCell {
    /// The ID of the ship that occupies this cell, if any.
    pub(super) ship: Option<ShipId>,

    /// Whether this cell has been targeted by the opponent, hit or miss.
    pub(super) shot: bool,
}

/// Grid structure shared between [`BoardSetup`][super::BoardSetup] and
/// [`Board`][super::Board]. Cells are stored row-major.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Size of this board.
    pub(super) size: BoardSize,
    /// Cells that make up this board.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(size: BoardSize) -> Self {
        let cells = (0..size.total_size()).map(|_| Default::default()).collect();
        Self { size, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<&GridCell> {
        self.size
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut GridCell> {
        self.size
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
