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
use crate::{
    board::{BoardSize, Coordinate},
    ships::Orientation,
};

/// Orientations tried, in order, when enumerating placements.
static ORIENTATIONS: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length.
    pub fn new(len: usize) -> Self {
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Project this line onto the board from `start` along `dir`. Returns `None` if the
    /// line is empty or any of its cells would fall off the board.
    pub fn project(&self, start: Coordinate, dir: Orientation, size: &BoardSize) -> Option<Vec<Coordinate>> {
        if self.0 == 0 {
            return None;
        }
        let mut route = Vec::with_capacity(self.0);
        for i in 0..self.0 {
            match dir.step(start, i) {
                Some(coord) if size.contains(coord) => route.push(coord),
                _ => return None,
            }
        }
        Some(route)
    }

    /// Get an iterator over every in-bounds projection of this line on the board, in
    /// row-major order of the start cell, horizontal before vertical.
    pub fn placements<'a>(
        &'a self,
        size: &'a BoardSize,
    ) -> impl 'a + Iterator<Item = (Coordinate, Orientation, Vec<Coordinate>)> {
        (0..size.total_size())
            .map(move |idx| size.un_linearize(idx))
            .flat_map(|start| ORIENTATIONS.iter().map(move |&dir| (start, dir)))
            .filter_map(move |(start, dir)| {
                self.project(start, dir, size).map(|route| (start, dir, route))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_along_orientation() {
        let size = BoardSize::default();
        let line = Line::new(3);
        assert_eq!(
            line.project(Coordinate::new(0, 7), Orientation::Horizontal, &size),
            Some(vec![
                Coordinate::new(0, 7),
                Coordinate::new(0, 8),
                Coordinate::new(0, 9)
            ])
        );
        assert_eq!(
            line.project(Coordinate::new(7, 0), Orientation::Vertical, &size),
            Some(vec![
                Coordinate::new(7, 0),
                Coordinate::new(8, 0),
                Coordinate::new(9, 0)
            ])
        );
    }

    #[test]
    fn refuses_to_leave_the_board() {
        let size = BoardSize::default();
        let line = Line::new(3);
        assert_eq!(line.project(Coordinate::new(0, 8), Orientation::Horizontal, &size), None);
        assert_eq!(line.project(Coordinate::new(8, 0), Orientation::Vertical, &size), None);
        assert_eq!(line.project(Coordinate::new(10, 0), Orientation::Horizontal, &size), None);
        assert_eq!(Line::new(0).project(Coordinate::new(0, 0), Orientation::Vertical, &size), None);
    }

    #[test]
    fn counts_every_placement() {
        let size = BoardSize::default();
        // A length-5 line fits 6 ways per row and per column, on 10 rows and columns.
        assert_eq!(Line::new(5).placements(&size).count(), 2 * 6 * 10);
        // A single cell fits everywhere, once per orientation.
        assert_eq!(Line::new(1).placements(&size).count(), 2 * 100);
    }
}
