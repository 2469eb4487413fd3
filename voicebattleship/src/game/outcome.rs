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
use crate::game::Player;

/// A ship that went down as a result of an attack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SunkShip {
    /// Length of the ship that sank.
    pub length: usize,
    /// How many of the defender's ships are still afloat.
    pub remaining: usize,
}

/// The attack that ended the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Victory {
    pub winner: Player,
}

/// Full result of a resolved attack, returned immediately.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttackOutcome {
    /// Open water.
    Miss,
    /// A ship segment. `sunk` is set only by the hit that sank the ship, and `victory`
    /// only by the hit that brought the defender's hit count to the fleet's cell count.
    Hit {
        sunk: Option<SunkShip>,
        victory: Option<Victory>,
    },
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        match self {
            AttackOutcome::Miss => false,
            AttackOutcome::Hit { .. } => true,
        }
    }

    pub fn sunk(&self) -> Option<SunkShip> {
        match *self {
            AttackOutcome::Hit { sunk, .. } => sunk,
            AttackOutcome::Miss => None,
        }
    }

    pub fn victory(&self) -> Option<Victory> {
        match *self {
            AttackOutcome::Hit { victory, .. } => victory,
            AttackOutcome::Miss => None,
        }
    }
}
