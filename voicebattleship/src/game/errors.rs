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
use thiserror::Error;

use crate::{
    board::{CannotPlaceReason, CannotShootReason, InvalidCoordinate},
    game::Player,
};

/// Why a command was refused. Every rejection leaves the game exactly as it was, so the
/// same player can simply try again.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Rejection {
    /// Text given for a coordinate was not a label on this board. Commands carry a
    /// parsed [`Coordinate`][crate::board::Coordinate], so only adapters that read labels
    /// report this.
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    /// Part of the ship, or the attack target, is off the board.
    #[error("that is off the board")]
    OutOfBounds,

    /// The ship would share a cell with one already placed.
    #[error("the ship would overlap a ship that was already placed")]
    Overlap,

    /// The whole fleet has been placed already.
    #[error("all ships have already been placed")]
    FleetComplete,

    /// No ship of this length is left to place.
    #[error("no ship of length {0} is left to place")]
    LengthUnavailable(usize),

    /// No legal position is left for a ship of this length.
    #[error("there is no room left for a ship of length {0}")]
    NoRoom(usize),

    /// Saving was requested before every ship was placed.
    #[error("{remaining} ships still need to be placed")]
    FleetIncomplete { remaining: usize },

    /// The cell was targeted before, hit or miss.
    #[error("that cell was already targeted")]
    AlreadyTargeted,

    /// Someone other than the given player is allowed to act.
    #[error("it is {expected}'s turn")]
    WrongTurn { expected: Player },

    /// Attacks are only allowed between setup and the end of the game.
    #[error("the game is not in the attacking phase")]
    NotInAttackingPhase,

    /// Placing and saving are only allowed during setup.
    #[error("the game is not in the setup phase")]
    NotInSetupPhase,
}

impl From<CannotPlaceReason> for Rejection {
    fn from(reason: CannotPlaceReason) -> Self {
        match reason {
            CannotPlaceReason::FleetComplete => Rejection::FleetComplete,
            CannotPlaceReason::LengthUnavailable(length) => Rejection::LengthUnavailable(length),
            CannotPlaceReason::OutOfBounds => Rejection::OutOfBounds,
            CannotPlaceReason::Overlap => Rejection::Overlap,
            CannotPlaceReason::NoRoom(length) => Rejection::NoRoom(length),
        }
    }
}

impl From<CannotShootReason> for Rejection {
    fn from(reason: CannotShootReason) -> Self {
        match reason {
            CannotShootReason::OutOfBounds => Rejection::OutOfBounds,
            CannotShootReason::AlreadyTargeted => Rejection::AlreadyTargeted,
        }
    }
}
