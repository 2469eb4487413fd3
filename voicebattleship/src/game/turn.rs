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
//! The turn controller: which player may act, and what they may do.
//!
//! ```text
//! Setup(Player1) -> Setup(Player2) -> Attacking(Player1) <-> Attacking(Player2) -> Finished
//! ```
use crate::game::{Player, Rejection};

/// Where the game is, and who acts next.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// The player is placing ships.
    Setup(Player),
    /// The player is choosing a target on the opponent's board.
    Attacking(Player),
    /// Every ship of the loser has been sunk.
    Finished { winner: Player },
}

/// Coarse phase, as shown to the players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PhaseKind {
    /// Ships still need to be placed.
    Placing,
    /// The setup player has placed every ship and only has to save.
    PlacedWaiting,
    Attacking,
    Finished,
}

impl Phase {
    /// Player 1 always sets up first.
    pub fn initial() -> Self {
        Phase::Setup(Player::Player1)
    }

    /// The player currently placing ships, if the game is in setup.
    pub fn current_player(self) -> Option<Player> {
        match self {
            Phase::Setup(player) => Some(player),
            _ => None,
        }
    }

    /// The player whose turn it is to attack, if the battle is on.
    pub fn current_turn(self) -> Option<Player> {
        match self {
            Phase::Attacking(player) => Some(player),
            _ => None,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Check that `player` may place ships or save now.
    pub fn check_setup(self, player: Player) -> Result<(), Rejection> {
        match self {
            Phase::Setup(current) if current == player => Ok(()),
            Phase::Setup(expected) => Err(Rejection::WrongTurn { expected }),
            _ => Err(Rejection::NotInSetupPhase),
        }
    }

    /// Check that `attacker` may attack now.
    pub fn check_attack(self, attacker: Player) -> Result<(), Rejection> {
        match self {
            Phase::Attacking(current) if current == attacker => Ok(()),
            Phase::Attacking(expected) => Err(Rejection::WrongTurn { expected }),
            _ => Err(Rejection::NotInAttackingPhase),
        }
    }

    /// The phase after `player` saves a complete fleet. Player 2 saving starts the
    /// battle with player 1 attacking.
    pub fn after_save(self, player: Player) -> Result<Self, Rejection> {
        self.check_setup(player)?;
        Ok(match player {
            Player::Player1 => Phase::Setup(Player::Player2),
            Player::Player2 => Phase::Attacking(Player::Player1),
        })
    }

    /// The phase after a resolved attack. Only call once [`check_attack`] passed.
    ///
    /// [`check_attack`]: Phase::check_attack
    pub fn after_attack(self, victory: bool) -> Self {
        match self {
            Phase::Attacking(attacker) if victory => Phase::Finished { winner: attacker },
            Phase::Attacking(attacker) => Phase::Attacking(attacker.opponent()),
            other => other,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::initial()
    }
}
