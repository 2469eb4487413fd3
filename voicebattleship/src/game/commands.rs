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
//! The command shapes input adapters produce.
use crate::{
    board::Coordinate,
    game::{AttackOutcome, Player},
    ships::{Orientation, Placement, Ship},
};

/// Place one ship of `length` for `player`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlaceShipCommand {
    pub player: Player,
    pub origin: Coordinate,
    pub length: usize,
    pub orientation: Orientation,
}

impl PlaceShipCommand {
    pub fn new(player: Player, placement: Placement) -> Self {
        Self {
            player,
            origin: placement.origin,
            length: placement.length,
            orientation: placement.orientation,
        }
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.origin, self.length, self.orientation)
    }
}

/// Fire at `target` on the opponent of `attacker`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AttackCommand {
    pub attacker: Player,
    pub target: Coordinate,
}

/// Anything an adapter can ask of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    PlaceShip(PlaceShipCommand),
    Attack(AttackCommand),
    /// Save a complete fleet and hand setup to the next player.
    Ready { player: Player },
}

impl From<PlaceShipCommand> for Command {
    fn from(cmd: PlaceShipCommand) -> Self {
        Command::PlaceShip(cmd)
    }
}

impl From<AttackCommand> for Command {
    fn from(cmd: AttackCommand) -> Self {
        Command::Attack(cmd)
    }
}

/// Result of an accepted [`Command`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CommandOutcome {
    /// The ship as it now sits on the board.
    Placed(Ship),
    Attacked(AttackOutcome),
    Saved(Player),
}
