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
//! Size of a rectangular board.
use std::fmt;

use crate::{board::Coordinate, game::ConfigError};

/// Columns are labelled with a single letter, so boards can be at most this wide.
pub const MAX_WIDTH: usize = 26;

/// Rows are labelled with at most two digits, so boards can be at most this tall.
pub const MAX_HEIGHT: usize = 99;

/// Width and height of a player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoardSize {
    /// Number of columns. This cooresponds to [`Coordinate::col`].
    width: usize,
    /// Number of rows. This cooresponds to [`Coordinate::row`].
    height: usize,
}

impl BoardSize {
    /// Create a [`BoardSize`] with the specified width and height. Fails if either is 0
    /// or too large to be labelled.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            Err(ConfigError::EmptyBoard { width, height })
        } else if width > MAX_WIDTH || height > MAX_HEIGHT {
            Err(ConfigError::BoardTooLarge { width, height })
        } else {
            Ok(Self { width, height })
        }
    }

    /// Get the width of this [`BoardSize`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of this [`BoardSize`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Whether the given [`Coordinate`] lies on the board.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Convert a coordinate to a row-major index, or `None` if it is out of bounds.
    pub fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.width + coord.col)
        } else {
            None
        }
    }

    /// Convert a row-major index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new(idx / self.width, idx % self.width)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |row| (0..width).map(move |col| Coordinate::new(row, col)))
    }
}

impl Default for BoardSize {
    /// The classic 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_is_row_major() {
        let size = BoardSize::new(4, 3).unwrap();
        assert_eq!(size.try_linearize(Coordinate::new(0, 0)), Some(0));
        assert_eq!(size.try_linearize(Coordinate::new(1, 0)), Some(4));
        assert_eq!(size.try_linearize(Coordinate::new(2, 3)), Some(11));
        assert_eq!(size.try_linearize(Coordinate::new(3, 0)), None);
        assert_eq!(size.try_linearize(Coordinate::new(0, 4)), None);
        assert_eq!(size.un_linearize(11), Coordinate::new(2, 3));
    }

    #[test]
    fn rejects_unlabelable_sizes() {
        assert!(BoardSize::new(0, 10).is_err());
        assert!(BoardSize::new(10, 0).is_err());
        assert!(BoardSize::new(27, 10).is_err());
        assert!(BoardSize::new(26, 99).is_ok());
    }
}
