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
//! Fleet composition and the pool of lengths a player still has to place.

/// Lengths of the classic fleet: carrier, battleship, cruiser, submarine, destroyer.
const STANDARD_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// The ships every player must place, as a multiset of lengths.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetSpec {
    lengths: Vec<usize>,
}

impl FleetSpec {
    /// Construct a fleet from ship lengths. Validation against a board happens in
    /// [`GameConfig::new`][crate::game::GameConfig::new].
    pub fn new(lengths: Vec<usize>) -> Self {
        Self { lengths }
    }

    /// The ship lengths, in the order they were given.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of ships in a complete fleet.
    pub fn ship_count(&self) -> usize {
        self.lengths.len()
    }

    /// Number of cells a complete fleet covers. A player is defeated once this many of
    /// their cells have been hit.
    pub fn total_cells(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// A full pool of this fleet's lengths, for a player who has placed nothing yet.
    pub fn pool(&self) -> ShipPool {
        ShipPool {
            remaining: self.lengths.clone(),
        }
    }
}

impl Default for FleetSpec {
    fn default() -> Self {
        Self::new(STANDARD_FLEET.to_vec())
    }
}

/// Multiset of ship lengths not yet placed. Taking a length removes a single instance,
/// so taking a 3 from a pool with two 3s leaves one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShipPool {
    remaining: Vec<usize>,
}

impl ShipPool {
    /// Whether at least one ship of `length` is left.
    pub fn contains(&self, length: usize) -> bool {
        self.remaining.contains(&length)
    }

    /// Remove one ship of `length`. Returns false, leaving the pool unchanged, if there
    /// is none.
    pub fn take(&mut self, length: usize) -> bool {
        match self.remaining.iter().position(|&l| l == length) {
            Some(idx) => {
                self.remaining.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of ships left.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Remaining lengths, shortest first.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths = self.remaining.clone();
        lengths.sort_unstable();
        lengths
    }
}
