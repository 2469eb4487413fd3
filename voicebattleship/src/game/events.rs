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
//! Semantic events queued by a [`Game`](crate::game::Game) for renderers and announcers.
//!
//! Events say what happened, never how to phrase or draw it.
use crate::{
    board::{CellClass, Coordinate},
    game::{AttackOutcome, Player, Rejection},
    ships::{Orientation, ShipId},
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GameEvent {
    /// The player may start placing ships.
    SetupStarted(Player),

    /// A ship was placed.
    PlacementAccepted {
        player: Player,
        ship: ShipId,
        length: usize,
        origin: Coordinate,
        orientation: Orientation,
        /// Ships the player still has to place.
        remaining: usize,
    },

    PlacementRejected { player: Player, reason: Rejection },

    /// The player's last ship went down on the board. Saving is now possible.
    FleetComplete(Player),

    /// The player confirmed a complete fleet.
    FleetSaved(Player),

    SaveRejected { player: Player, reason: Rejection },

    /// Both fleets are saved. Followed by the first [`GameEvent::TurnChanged`].
    BattleStarted,

    OrientationChanged(Orientation),

    AttackResult {
        attacker: Player,
        target: Coordinate,
        outcome: AttackOutcome,
    },

    AttackRejected { attacker: Player, reason: Rejection },

    /// A cell of `owner`'s board now shows as `class` to its owner.
    CellChanged {
        owner: Player,
        coord: Coordinate,
        class: CellClass,
    },

    /// The given player attacks next.
    TurnChanged(Player),

    GameOver { winner: Player },
}
