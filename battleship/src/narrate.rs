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
//! Phrasing for game events and voice replies.
//!
//! Game facts (placements, shots, turns) are narrated from [`GameEvent`]s. Voice replies
//! are only narrated when they say something the game never saw, like a misheard
//! coordinate, so nothing is announced twice.
use std::fmt;

use voicebattleship::{
    game::{AttackOutcome, GameEvent, PhaseKind, Player, Rejection},
    input::{Prompt, VoiceReply},
    ships::Orientation,
};

use crate::pacing::Pause;

/// One line to print after waiting for `pause`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Announcement {
    pub pause: Pause,
    pub text: String,
}

impl Announcement {
    fn now(text: impl Into<String>) -> Self {
        Self {
            pause: Pause::None,
            text: text.into(),
        }
    }

    fn after(pause: Pause, text: impl Into<String>) -> Self {
        Self {
            pause,
            text: text.into(),
        }
    }
}

/// Display helper that prints "Player 1" at the start of a sentence.
struct Title(Player);

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.0.number())
    }
}

/// Display helper for lists of ship lengths.
struct Lengths<'a>(&'a [usize]);

impl fmt::Display for Lengths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut lengths = self.0.iter();
        if let Some(first) = lengths.next() {
            write!(f, "{}", first)?;
            for length in lengths {
                write!(f, ", {}", length)?;
            }
        }
        Ok(())
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Turns events into announcements. Remembers whether a sinking was just announced so
/// the following turn change gets the longer pause.
#[derive(Debug, Default)]
pub struct Narrator {
    after_sink: bool,
}

impl Narrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(&mut self, event: &GameEvent) -> Vec<Announcement> {
        let text = match event {
            GameEvent::SetupStarted(player) => {
                format!("{}, place your ships.", Title(*player))
            }
            GameEvent::PlacementAccepted {
                length,
                origin,
                orientation,
                remaining,
                ..
            } => match remaining {
                // FleetComplete follows and says the rest.
                0 => format!("Placed a {}-unit ship at {}, {}.", length, origin, orientation),
                n => format!(
                    "Placed a {}-unit ship at {}, {}. {} ship{} left.",
                    length,
                    origin,
                    orientation,
                    n,
                    plural(*n)
                ),
            },
            GameEvent::PlacementRejected { reason, .. } => {
                format!("Invalid placement: {}. Try again.", reason)
            }
            GameEvent::FleetComplete(_) => "All ships placed. Say 'save' when ready.".to_owned(),
            GameEvent::FleetSaved(player) => format!("{} saved their fleet.", Title(*player)),
            GameEvent::SaveRejected { reason, .. } => match reason {
                Rejection::FleetIncomplete { remaining } => format!(
                    "Still {} ship{} to place.",
                    remaining,
                    plural(*remaining)
                ),
                other => format!("Cannot save: {}.", other),
            },
            GameEvent::BattleStarted => "Game started! Player 1 attacks first.".to_owned(),
            GameEvent::OrientationChanged(orientation) => {
                format!("Ships will now place {}ly.", orientation)
            }
            GameEvent::AttackResult { outcome, .. } => return self.attack(outcome),
            GameEvent::AttackRejected { reason, .. } => match reason {
                Rejection::AlreadyTargeted => {
                    "Already attacked there. Try another coordinate.".to_owned()
                }
                other => format!("Cannot attack: {}.", other),
            },
            GameEvent::CellChanged { .. } => return Vec::new(),
            GameEvent::TurnChanged(player) => {
                let pause = if self.after_sink {
                    Pause::Turn
                } else {
                    Pause::None
                };
                self.after_sink = false;
                return vec![Announcement::after(
                    pause,
                    format!("{}'s turn now.", Title(*player)),
                )];
            }
            GameEvent::GameOver { winner } => format!("{} wins the game!", Title(*winner)),
        };
        vec![Announcement::now(text)]
    }

    fn attack(&mut self, outcome: &AttackOutcome) -> Vec<Announcement> {
        match outcome {
            AttackOutcome::Miss => vec![Announcement::now("Miss.")],
            // The win is announced by the game over event.
            AttackOutcome::Hit {
                victory: Some(_), ..
            }
            | AttackOutcome::Hit { sunk: None, .. } => vec![Announcement::now("Hit!")],
            AttackOutcome::Hit {
                sunk: Some(sunk), ..
            } => {
                self.after_sink = true;
                vec![
                    Announcement::now("Hit!"),
                    Announcement::after(
                        Pause::Sink,
                        format!(
                            "You sunk a {}-unit ship! Opponent has {} ship{} remaining.",
                            sunk.length,
                            sunk.remaining,
                            plural(sunk.remaining)
                        ),
                    ),
                ]
            }
        }
    }

    /// Announcement for a voice reply, if the game's events do not already cover it.
    pub fn reply(&self, reply: &VoiceReply) -> Option<Announcement> {
        let text = match reply {
            VoiceReply::LengthSelected { length } => format!(
                "Ready to place {}-unit ship. Say a coordinate like 'A1' for its top left cell.",
                length
            ),
            VoiceReply::LengthNotAvailable { available } => format!(
                "Available ships: {}. Say 'instructions' for help.",
                Lengths(available)
            ),
            VoiceReply::AllShipsPlaced => {
                "All ships have been placed. Say 'save' to continue.".to_owned()
            }
            // Never reached the game, so there is no event for it.
            VoiceReply::PlacementRejected(Rejection::InvalidCoordinate(err))
            | VoiceReply::AttackRejected(Rejection::InvalidCoordinate(err)) => {
                format!("Invalid coordinates: {}. Try again.", err)
            }
            VoiceReply::Instructions {
                phase,
                player,
                orientation,
                available,
            } => instructions(*phase, *player, *orientation, available),
            // Refused before reaching the game, so there is no event for it.
            VoiceReply::SaveRejected(Rejection::NotInSetupPhase) => {
                "There is nothing to save once the battle has started.".to_owned()
            }
            VoiceReply::GameOver { winner } => {
                format!("Game over. {} won. Type quit to leave.", Title(*winner))
            }
            VoiceReply::ShipPlaced { .. }
            | VoiceReply::PlacementRejected(_)
            | VoiceReply::Attacked { .. }
            | VoiceReply::AttackRejected(_)
            | VoiceReply::Rotated(_)
            | VoiceReply::Saved(_)
            | VoiceReply::SaveRejected(_) => return None,
        };
        Some(Announcement::now(text))
    }
}

fn instructions(
    phase: PhaseKind,
    player: Option<Player>,
    orientation: Orientation,
    available: &[usize],
) -> String {
    let who = player.map_or_else(|| "Nobody".to_owned(), |p| Title(p).to_string());
    match phase {
        PhaseKind::Placing => format!(
            "Setup phase. {} is placing ships, still available: {}. First say a ship size, \
             like 'three', then a coordinate, like 'C4'. Say 'rotate' to change direction; \
             ships currently place {}ly.",
            who,
            Lengths(available),
            orientation
        ),
        PhaseKind::PlacedWaiting => format!(
            "Setup phase. {} has placed every ship. Say 'save' to continue.",
            who
        ),
        PhaseKind::Attacking => format!(
            "Attack phase. {}, say a letter and a number like 'B5' to attack the opponent's \
             board. You will hear if you hit, miss or sink a ship. Sink every enemy ship to win.",
            who
        ),
        PhaseKind::Finished => "The game is over. Type quit to leave.".to_owned(),
    }
}

/// The line shown before reading the next transcript.
pub fn prompt(prompt: &Prompt) -> String {
    match prompt {
        Prompt::ChooseLength { player, available } => {
            format!("{}: ship size ({})?", Title(*player), Lengths(available))
        }
        Prompt::ChooseCoordinate {
            player,
            length,
            orientation,
        } => format!(
            "{}: coordinate for the {}-unit ship ({})?",
            Title(*player),
            length,
            orientation
        ),
        Prompt::Save { player } => format!("{}: say 'save'.", Title(*player)),
        Prompt::Attack { player } => format!("{}: target?", Title(*player)),
        Prompt::GameOver { winner } => format!("{} won.", Title(*winner)),
    }
}
