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
//! Interprets speech transcripts as game commands.
//!
//! A transcript is lower-cased and trimmed, then checked in this order:
//!
//! 1. contains `rotate`: toggle the orientation.
//! 2. contains `save`: save the setup player's fleet.
//! 3. contains `instructions` or `help`: describe what can be said now.
//! 4. otherwise it depends on the phase. During setup the player first names a ship
//!    length, then a coordinate for it. During the battle the first coordinate in the
//!    transcript is attacked. After the game every transcript gets [`VoiceReply::GameOver`].
use log::debug;

use crate::{
    board::Coordinate,
    game::{AttackCommand, AttackOutcome, Game, Phase, PhaseKind, PlaceShipCommand, Player, Rejection},
    ships::{Orientation, Ship},
};

/// Turn a spoken ship length into a number. Recognizers often hear "two" as "to" and so
/// on, so common homophones are accepted. The whole transcript must be the length.
pub fn spoken_length(text: &str) -> Option<usize> {
    match text {
        "two" | "to" | "too" => Some(2),
        "three" | "tree" => Some(3),
        "four" | "for" | "fore" => Some(4),
        "five" | "fife" => Some(5),
        digits => digits.parse().ok(),
    }
}

/// What the interpreter did with a transcript.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum VoiceReply {
    /// A ship length was chosen; a coordinate is expected next.
    LengthSelected { length: usize },
    /// The transcript was not a length that is still available.
    LengthNotAvailable { available: Vec<usize> },
    /// Nothing is left to place; the player should save.
    AllShipsPlaced,
    /// The ship went down and `remaining` ships are left to place.
    ShipPlaced { ship: Ship, remaining: usize },
    PlacementRejected(Rejection),
    Attacked {
        attacker: Player,
        target: Coordinate,
        outcome: AttackOutcome,
    },
    AttackRejected(Rejection),
    Rotated(Orientation),
    Saved(Player),
    SaveRejected(Rejection),
    /// Help for the current phase.
    Instructions {
        phase: PhaseKind,
        player: Option<Player>,
        orientation: Orientation,
        available: Vec<usize>,
    },
    GameOver { winner: Player },
}

/// What the interpreter expects to hear next.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Prompt {
    ChooseLength { player: Player, available: Vec<usize> },
    ChooseCoordinate {
        player: Player,
        length: usize,
        orientation: Orientation,
    },
    Save { player: Player },
    Attack { player: Player },
    GameOver { winner: Player },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Step {
    AwaitingLength,
    AwaitingCoordinate(usize),
}

/// Voice command interpreter. Only remembers which setup step the speaker is on; all
/// other state is read from the [`Game`].
#[derive(Debug)]
pub struct VoiceController {
    step: Step,
}

impl VoiceController {
    pub fn new() -> Self {
        Self {
            step: Step::AwaitingLength,
        }
    }

    /// The ship length picked for the next placement, if any.
    pub fn selected_length(&self) -> Option<usize> {
        match self.step {
            Step::AwaitingLength => None,
            Step::AwaitingCoordinate(length) => Some(length),
        }
    }

    /// Handle one transcript.
    pub fn handle(&mut self, game: &mut Game, transcript: &str) -> VoiceReply {
        let text = transcript.trim().to_lowercase();
        self.sync(game);
        debug!("voice transcript {:?} in {:?}", text, game.phase());

        if text.contains("rotate") {
            return VoiceReply::Rotated(game.rotate());
        }
        if text.contains("save") {
            return self.save(game);
        }
        if text.contains("instructions") || text.contains("help") {
            return Self::instructions(game);
        }
        match game.phase() {
            Phase::Setup(player) => match self.step {
                Step::AwaitingLength => self.select_length(game, player, &text),
                Step::AwaitingCoordinate(length) => self.place(game, player, length, &text),
            },
            Phase::Attacking(attacker) => Self::attack(game, attacker, &text),
            Phase::Finished { winner } => VoiceReply::GameOver { winner },
        }
    }

    /// What to ask the speaker for now.
    pub fn prompt(&self, game: &Game) -> Prompt {
        match game.phase() {
            Phase::Setup(player) => {
                let available = game.pending_lengths(player);
                match self.step {
                    _ if available.is_empty() => Prompt::Save { player },
                    Step::AwaitingCoordinate(length) if available.contains(&length) => {
                        Prompt::ChooseCoordinate {
                            player,
                            length,
                            orientation: game.orientation(),
                        }
                    }
                    _ => Prompt::ChooseLength { player, available },
                }
            }
            Phase::Attacking(player) => Prompt::Attack { player },
            Phase::Finished { winner } => Prompt::GameOver { winner },
        }
    }

    /// Forget a selected length that can no longer be placed, for example because the
    /// ship went down through another adapter.
    fn sync(&mut self, game: &Game) {
        if let Step::AwaitingCoordinate(length) = self.step {
            let still_pending = match game.phase() {
                Phase::Setup(player) => game.pending_lengths(player).contains(&length),
                _ => false,
            };
            if !still_pending {
                self.step = Step::AwaitingLength;
            }
        }
    }

    fn save(&mut self, game: &mut Game) -> VoiceReply {
        let player = match game.phase() {
            Phase::Setup(player) => player,
            _ => return VoiceReply::SaveRejected(Rejection::NotInSetupPhase),
        };
        match game.ready(player) {
            Ok(()) => {
                self.step = Step::AwaitingLength;
                VoiceReply::Saved(player)
            }
            Err(reason) => VoiceReply::SaveRejected(reason),
        }
    }

    fn instructions(game: &Game) -> VoiceReply {
        let player = match game.phase() {
            Phase::Setup(player) | Phase::Attacking(player) => Some(player),
            Phase::Finished { .. } => None,
        };
        VoiceReply::Instructions {
            phase: game.phase_kind(),
            player,
            orientation: game.orientation(),
            available: player.map(|p| game.pending_lengths(p)).unwrap_or_default(),
        }
    }

    fn select_length(&mut self, game: &Game, player: Player, text: &str) -> VoiceReply {
        let available = game.pending_lengths(player);
        if available.is_empty() {
            return VoiceReply::AllShipsPlaced;
        }
        match spoken_length(text) {
            Some(length) if available.contains(&length) => {
                self.step = Step::AwaitingCoordinate(length);
                VoiceReply::LengthSelected { length }
            }
            _ => VoiceReply::LengthNotAvailable { available },
        }
    }

    fn place(&mut self, game: &mut Game, player: Player, length: usize, text: &str) -> VoiceReply {
        // Naming a length again switches to that ship.
        if spoken_length(text).is_some() {
            return self.select_length(game, player, text);
        }
        let origin = match game.size().find_label(text) {
            Ok(origin) => origin,
            Err(err) => return VoiceReply::PlacementRejected(err.into()),
        };
        let cmd = PlaceShipCommand {
            player,
            origin,
            length,
            orientation: game.orientation(),
        };
        match game.place_ship(cmd) {
            Ok(ship) => {
                self.step = Step::AwaitingLength;
                VoiceReply::ShipPlaced {
                    ship,
                    remaining: game.pending_lengths(player).len(),
                }
            }
            // Stay on this ship so the speaker can try another coordinate or rotate.
            Err(reason) => VoiceReply::PlacementRejected(reason),
        }
    }

    fn attack(game: &mut Game, attacker: Player, text: &str) -> VoiceReply {
        let target = match game.size().find_label(text) {
            Ok(target) => target,
            Err(err) => return VoiceReply::AttackRejected(err.into()),
        };
        match game.attack(AttackCommand { attacker, target }) {
            Ok(outcome) => VoiceReply::Attacked {
                attacker,
                target,
                outcome,
            },
            Err(reason) => VoiceReply::AttackRejected(reason),
        }
    }
}

impl Default for VoiceController {
    fn default() -> Self {
        Self::new()
    }
}
