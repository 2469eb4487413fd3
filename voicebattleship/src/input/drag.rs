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
//! Pointer-style placement: pick a ship out of a pool and drop it on a board cell.
use log::debug;
use thiserror::Error;

use crate::{
    board::Coordinate,
    game::{Game, PerPlayer, PlaceShipCommand, Player, Rejection},
    ships::Ship,
};

/// Identifies a slot within one player's pool.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SlotId(usize);

/// A draggable ship that has not been placed yet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipSlot {
    id: SlotId,
    length: usize,
}

impl ShipSlot {
    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Where a held ship was released.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DropTarget {
    /// A playable cell of `owner`'s board.
    Cell { owner: Player, coord: Coordinate },
    /// A row or column label around `owner`'s board.
    Label { owner: Player },
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum DragError {
    #[error("{player} has no ship in that slot")]
    UnknownSlot { player: Player },
    #[error("no ship is being dragged")]
    NothingHeld,
    #[error("ships for {held} cannot be dropped on {target}'s board")]
    WrongBoard { held: Player, target: Player },
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Ship pools for both players and the ship currently being dragged.
#[derive(Debug)]
pub struct DragDrop {
    slots: PerPlayer<Vec<ShipSlot>>,
    held: Option<(Player, SlotId)>,
}

impl DragDrop {
    /// One slot per ship of the game's fleet, for each player.
    pub fn new(game: &Game) -> Self {
        let slots = || -> Vec<ShipSlot> {
            game.config()
                .fleet()
                .lengths()
                .iter()
                .enumerate()
                .map(|(i, &length)| ShipSlot {
                    id: SlotId(i),
                    length,
                })
                .collect()
        };
        Self {
            slots: PerPlayer::new(slots(), slots()),
            held: None,
        }
    }

    /// Ships `player` can still drag, as of the last [`sync`][Self::sync].
    pub fn slots(&self, player: Player) -> &[ShipSlot] {
        &self.slots[player]
    }

    /// The player and length of the ship being dragged.
    pub fn held(&self) -> Option<(Player, usize)> {
        let (player, id) = self.held?;
        self.find(player, id).map(|slot| (player, slot.length))
    }

    fn find(&self, player: Player, id: SlotId) -> Option<&ShipSlot> {
        self.slots[player].iter().find(|slot| slot.id == id)
    }

    /// Match the pools to what the game still has pending. Ships placed some other way,
    /// such as by voice, take one slot of their length with them. A held ship whose slot
    /// is gone is let go.
    pub fn sync(&mut self, game: &Game) {
        for &player in &Player::ALL {
            let mut pending = game.pending_lengths(player);
            self.slots[player].retain(|slot| {
                match pending.iter().position(|&length| length == slot.length) {
                    Some(idx) => {
                        pending.swap_remove(idx);
                        true
                    }
                    None => false,
                }
            });
        }
        if let Some((player, id)) = self.held {
            if self.find(player, id).is_none() {
                debug!("{}'s held ship was placed elsewhere", player);
                self.held = None;
            }
        }
    }

    /// Start dragging a ship. Replaces anything already held.
    pub fn pick_up(
        &mut self,
        game: &Game,
        player: Player,
        id: SlotId,
    ) -> Result<usize, DragError> {
        self.sync(game);
        let length = self
            .find(player, id)
            .map(ShipSlot::length)
            .ok_or(DragError::UnknownSlot { player })?;
        self.held = Some((player, id));
        Ok(length)
    }

    /// Stop dragging without placing.
    pub fn cancel(&mut self) {
        self.held = None;
    }

    /// Release the held ship over `target`. Dropping on a label is ignored and returns
    /// `Ok(None)`. On success the ship is placed at the game's orientation and its slot
    /// leaves the pool; on any error the slot stays in the pool.
    pub fn drop_on(
        &mut self,
        game: &mut Game,
        target: DropTarget,
    ) -> Result<Option<Ship>, DragError> {
        let (player, id) = self.held.take().ok_or(DragError::NothingHeld)?;
        self.sync(game);
        let coord = match target {
            DropTarget::Label { .. } => return Ok(None),
            DropTarget::Cell { owner, .. } if owner != player => {
                return Err(DragError::WrongBoard {
                    held: player,
                    target: owner,
                })
            }
            DropTarget::Cell { coord, .. } => coord,
        };
        let length = self
            .find(player, id)
            .map(ShipSlot::length)
            .ok_or(DragError::UnknownSlot { player })?;
        let ship = game.place_ship(PlaceShipCommand {
            player,
            origin: coord,
            length,
            orientation: game.orientation(),
        })?;
        self.slots[player].retain(|slot| slot.id != id);
        Ok(Some(ship))
    }
}
