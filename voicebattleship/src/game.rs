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
//! Implementation of the two player game as a whole.
//!
//! A [`Game`] owns both players' boards and the [`GameState`], accepts [`Command`]s from
//! the input adapters, and queues [`GameEvent`]s for whoever draws and announces the
//! game. Each command is handled to completion before the next one: it is either applied
//! entirely or rejected with a [`Rejection`] and no change.
use std::{
    collections::VecDeque,
    fmt,
    ops::{Index, IndexMut},
};

use enumflags2::BitFlags;
use log::{debug, info};
#[cfg(feature = "rng_gen")]
use rand::Rng;

use crate::{
    board::{Board, BoardSetup, BoardSize, CellClass, Coordinate, ShotOutcome},
    ships::{Orientation, Ship},
};

pub use self::{
    commands::{AttackCommand, Command, CommandOutcome, PlaceShipCommand},
    config::{ConfigError, GameConfig},
    errors::Rejection,
    events::GameEvent,
    outcome::{AttackOutcome, SunkShip, Victory},
    turn::{Phase, PhaseKind},
};

mod commands;
mod config;
mod errors;
mod events;
mod outcome;
pub mod turn;

/// One of the two players.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Player {
    Player1 = 0b01,
    Player2 = 0b10,
}

impl Player {
    /// Both players, in setup order.
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// 1 or 2.
    pub fn number(self) -> usize {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// One value for each player.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PerPlayer<T> {
    player1: T,
    player2: T,
}

impl<T> PerPlayer<T> {
    pub fn new(player1: T, player2: T) -> Self {
        Self { player1, player2 }
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &T {
        match player {
            Player::Player1 => &self.player1,
            Player::Player2 => &self.player2,
        }
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Player1 => &mut self.player1,
            Player::Player2 => &mut self.player2,
        }
    }
}

/// Turn and score keeping, independent of the boards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    phase: Phase,
    /// Orientation used for the next placement by either adapter.
    orientation: Orientation,
    /// Ship cells of each player's fleet that have been hit.
    hit_counts: PerPlayer<usize>,
    /// Players whose whole fleet is on the board.
    complete: BitFlags<Player>,
    /// Players who have saved their fleet.
    saved: BitFlags<Player>,
}

impl GameState {
    fn new() -> Self {
        Self {
            phase: Phase::initial(),
            orientation: Orientation::default(),
            hit_counts: PerPlayer::default(),
            complete: BitFlags::empty(),
            saved: BitFlags::empty(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        match self.phase {
            Phase::Setup(player) if self.complete.contains(player) => PhaseKind::PlacedWaiting,
            Phase::Setup(_) => PhaseKind::Placing,
            Phase::Attacking(_) => PhaseKind::Attacking,
            Phase::Finished { .. } => PhaseKind::Finished,
        }
    }

    /// The player placing ships, during setup.
    pub fn current_player(&self) -> Option<Player> {
        self.phase.current_player()
    }

    /// The player who attacks next, during the battle.
    pub fn current_turn(&self) -> Option<Player> {
        self.phase.current_turn()
    }

    pub fn winner(&self) -> Option<Player> {
        self.phase.winner()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of `player`'s ship cells that have been hit.
    pub fn hit_count(&self, player: Player) -> usize {
        self.hit_counts[player]
    }

    /// Whether `player` has placed every ship.
    pub fn fleet_complete(&self, player: Player) -> bool {
        self.complete.contains(player)
    }

    pub fn saved(&self, player: Player) -> bool {
        self.saved.contains(player)
    }
}

/// A single game session.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    /// A player's setup, until they save it.
    setups: PerPlayer<Option<BoardSetup>>,
    /// A player's board, once saved.
    boards: PerPlayer<Option<Board>>,
    events: VecDeque<GameEvent>,
}

impl Game {
    /// Start a new game with player 1 placing ships.
    pub fn new(config: GameConfig) -> Self {
        let setup = || Some(BoardSetup::new(*config.size(), config.fleet()));
        let setups = PerPlayer::new(setup(), setup());
        let mut events = VecDeque::new();
        events.push_back(GameEvent::SetupStarted(Player::Player1));
        info!(
            "new game on a {} board with fleet {:?}",
            config.size(),
            config.fleet().lengths()
        );
        Self {
            config,
            state: GameState::new(),
            setups,
            boards: PerPlayer::default(),
            events,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> &BoardSize {
        self.config.size()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.state.phase_kind()
    }

    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    /// `player`'s setup, if they have not saved yet.
    pub fn setup(&self, player: Player) -> Option<&BoardSetup> {
        self.setups[player].as_ref()
    }

    /// `player`'s board, once they have saved.
    pub fn board(&self, player: Player) -> Option<&Board> {
        self.boards[player].as_ref()
    }

    /// Lengths `player` still has to place, shortest first. Empty once saved.
    pub fn pending_lengths(&self, player: Player) -> Vec<usize> {
        self.setup(player)
            .map(BoardSetup::pending_lengths)
            .unwrap_or_default()
    }

    /// Classify a cell of `owner`'s board. With `reveal` false, undamaged ships are shown
    /// as empty water, which is what the opponent gets to see.
    pub fn classify(&self, owner: Player, coord: Coordinate, reveal: bool) -> Option<CellClass> {
        if let Some(board) = self.board(owner) {
            board.get_coord(coord).map(|cell| {
                if reveal {
                    cell.class()
                } else {
                    cell.hidden_class()
                }
            })
        } else {
            let class = self.setup(owner)?.classify(coord)?;
            Some(if reveal { class } else { CellClass::Empty })
        }
    }

    /// Remove and return all queued events, oldest first.
    pub fn drain_events(&mut self) -> impl '_ + Iterator<Item = GameEvent> {
        self.events.drain(..)
    }

    /// Toggle the orientation used for future placements. Allowed at any time.
    pub fn rotate(&mut self) -> Orientation {
        self.state.orientation = self.state.orientation.toggled();
        debug!("orientation is now {}", self.state.orientation);
        self.events
            .push_back(GameEvent::OrientationChanged(self.state.orientation));
        self.state.orientation
    }

    /// Apply any command.
    pub fn execute(&mut self, cmd: Command) -> Result<CommandOutcome, Rejection> {
        match cmd {
            Command::PlaceShip(cmd) => self.place_ship(cmd).map(CommandOutcome::Placed),
            Command::Attack(cmd) => self.attack(cmd).map(CommandOutcome::Attacked),
            Command::Ready { player } => self.ready(player).map(|()| CommandOutcome::Saved(player)),
        }
    }

    /// Place one ship for the player whose setup turn it is.
    pub fn place_ship(&mut self, cmd: PlaceShipCommand) -> Result<Ship, Rejection> {
        let result = self.try_place_ship(cmd);
        if let Err(ref reason) = result {
            debug!("{} could not place {:?}: {}", cmd.player, cmd, reason);
            self.events.push_back(GameEvent::PlacementRejected {
                player: cmd.player,
                reason: reason.clone(),
            });
        }
        result
    }

    fn try_place_ship(&mut self, cmd: PlaceShipCommand) -> Result<Ship, Rejection> {
        self.state.phase.check_setup(cmd.player)?;
        let setup = self.setups[cmd.player]
            .as_mut()
            .ok_or(Rejection::NotInSetupPhase)?;
        let ship = setup
            .place(cmd.placement())
            .map_err(|err| Rejection::from(err.reason()))?
            .clone();
        let remaining = setup.pending_lengths().len();
        let complete = setup.ready();

        debug!(
            "{} placed a ship of length {} at {} ({})",
            cmd.player,
            ship.len(),
            ship.origin(),
            ship.orientation()
        );
        self.events.push_back(GameEvent::PlacementAccepted {
            player: cmd.player,
            ship: ship.id(),
            length: ship.len(),
            origin: ship.origin(),
            orientation: ship.orientation(),
            remaining,
        });
        for coord in ship.coords() {
            self.events.push_back(GameEvent::CellChanged {
                owner: cmd.player,
                coord,
                class: CellClass::Ship,
            });
        }
        if complete {
            info!("{} has placed every ship", cmd.player);
            self.state.complete.insert(cmd.player);
            self.events.push_back(GameEvent::FleetComplete(cmd.player));
        }
        Ok(ship)
    }

    /// Save `player`'s complete fleet. Saving player 1 hands setup to player 2; saving
    /// player 2 starts the battle with player 1 attacking.
    pub fn ready(&mut self, player: Player) -> Result<(), Rejection> {
        let result = self.try_ready(player);
        if let Err(ref reason) = result {
            debug!("{} could not save: {}", player, reason);
            self.events.push_back(GameEvent::SaveRejected {
                player,
                reason: reason.clone(),
            });
        }
        result
    }

    fn try_ready(&mut self, player: Player) -> Result<(), Rejection> {
        let next = self.state.phase.after_save(player)?;
        let setup = self.setups[player]
            .take()
            .ok_or(Rejection::NotInSetupPhase)?;
        match setup.start() {
            Ok(board) => self.boards[player] = Some(board),
            Err(setup) => {
                let remaining = setup.pending_lengths().len();
                self.setups[player] = Some(setup);
                return Err(Rejection::FleetIncomplete { remaining });
            }
        }

        self.state.saved.insert(player);
        self.state.phase = next;
        info!("{} saved their fleet", player);
        self.events.push_back(GameEvent::FleetSaved(player));
        match next {
            Phase::Setup(next_player) => {
                self.events.push_back(GameEvent::SetupStarted(next_player));
            }
            Phase::Attacking(first) => {
                info!("battle started, {} attacks first", first);
                self.events.push_back(GameEvent::BattleStarted);
                self.events.push_back(GameEvent::TurnChanged(first));
            }
            Phase::Finished { .. } => {}
        }
        Ok(())
    }

    /// Fire at the opponent of `cmd.attacker`. The whole outcome, including any sink and
    /// victory, is returned at once.
    pub fn attack(&mut self, cmd: AttackCommand) -> Result<AttackOutcome, Rejection> {
        let result = self.try_attack(cmd);
        if let Err(ref reason) = result {
            debug!("{} could not attack {}: {}", cmd.attacker, cmd.target, reason);
            self.events.push_back(GameEvent::AttackRejected {
                attacker: cmd.attacker,
                reason: reason.clone(),
            });
        }
        result
    }

    fn try_attack(&mut self, cmd: AttackCommand) -> Result<AttackOutcome, Rejection> {
        let AttackCommand { attacker, target } = cmd;
        self.state.phase.check_attack(attacker)?;
        let defender = attacker.opponent();
        let board = self.boards[defender]
            .as_mut()
            .ok_or(Rejection::NotInAttackingPhase)?;
        let shot = board
            .shoot(target)
            .map_err(|err| Rejection::from(err.reason()))?;

        let outcome = match shot.ship() {
            None => AttackOutcome::Miss,
            Some(id) => {
                self.state.hit_counts[defender] += 1;
                let sunk = match shot {
                    ShotOutcome::Sunk(_) => Some(SunkShip {
                        length: board.get_ship(id).map_or(0, Ship::len),
                        remaining: board.afloat(),
                    }),
                    _ => None,
                };
                let victory = if self.state.hit_counts[defender] == self.config.fleet().total_cells()
                {
                    Some(Victory { winner: attacker })
                } else {
                    None
                };
                AttackOutcome::Hit { sunk, victory }
            }
        };

        debug!("{} attacked {}: {:?}", attacker, target, outcome);
        self.events.push_back(GameEvent::CellChanged {
            owner: defender,
            coord: target,
            class: if outcome.is_hit() {
                CellClass::Hit
            } else {
                CellClass::Miss
            },
        });
        self.events.push_back(GameEvent::AttackResult {
            attacker,
            target,
            outcome,
        });

        self.state.phase = self.state.phase.after_attack(outcome.victory().is_some());
        match self.state.phase {
            Phase::Finished { winner } => {
                info!("{} won", winner);
                self.events.push_back(GameEvent::GameOver { winner });
            }
            Phase::Attacking(next) => self.events.push_back(GameEvent::TurnChanged(next)),
            Phase::Setup(_) => {}
        }
        Ok(outcome)
    }

    /// Place every ship `player` still has at random legal positions, longest first, as
    /// chosen by [`BoardSetup::random_placement`]. Ships placed
    /// before a [`Rejection::NoRoom`] stay on the board. Returns how many were placed.
    #[cfg(feature = "rng_gen")]
    pub fn place_remaining_randomly<R: Rng + ?Sized>(
        &mut self,
        player: Player,
        rng: &mut R,
    ) -> Result<usize, Rejection> {
        let mut placed = 0;
        loop {
            self.state.phase.check_setup(player)?;
            let setup = self.setups[player]
                .as_ref()
                .ok_or(Rejection::NotInSetupPhase)?;
            let length = match setup.pending_lengths().last() {
                Some(&length) => length,
                None => return Ok(placed),
            };
            let placement = setup.random_placement(rng, length)?;
            self.place_ship(PlaceShipCommand::new(player, placement))?;
            placed += 1;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::FleetSpec;

    use Player::{Player1, Player2};

    fn at(label: &str) -> Coordinate {
        label.parse().unwrap()
    }

    fn place(
        game: &mut Game,
        player: Player,
        label: &str,
        length: usize,
        orientation: Orientation,
    ) -> Result<Ship, Rejection> {
        game.place_ship(PlaceShipCommand {
            player,
            origin: at(label),
            length,
            orientation,
        })
    }

    /// Classic fleet, one ship per row starting at column A: 5 on row 1, 4 on row 2, and
    /// so on.
    fn place_fleet(game: &mut Game, player: Player) {
        for (row, &length) in [5, 4, 3, 3, 2].iter().enumerate() {
            game.place_ship(PlaceShipCommand {
                player,
                origin: Coordinate::new(row, 0),
                length,
                orientation: Orientation::Horizontal,
            })
            .unwrap();
        }
    }

    fn started() -> Game {
        let mut game = Game::default();
        place_fleet(&mut game, Player1);
        game.ready(Player1).unwrap();
        place_fleet(&mut game, Player2);
        game.ready(Player2).unwrap();
        game.drain_events().for_each(drop);
        game
    }

    fn attack(game: &mut Game, attacker: Player, label: &str) -> Result<AttackOutcome, Rejection> {
        game.attack(AttackCommand {
            attacker,
            target: at(label),
        })
    }

    #[test]
    fn setup_order_and_phase_kinds() {
        let mut game = Game::default();
        assert_eq!(game.phase(), Phase::Setup(Player1));
        assert_eq!(game.phase_kind(), PhaseKind::Placing);
        assert_eq!(
            place(&mut game, Player2, "A1", 2, Orientation::Horizontal),
            Err(Rejection::WrongTurn { expected: Player1 })
        );
        assert_eq!(game.ready(Player1), Err(Rejection::FleetIncomplete { remaining: 5 }));

        place_fleet(&mut game, Player1);
        assert_eq!(game.phase_kind(), PhaseKind::PlacedWaiting);
        assert!(game.state().fleet_complete(Player1));
        game.ready(Player1).unwrap();
        assert_eq!(game.phase(), Phase::Setup(Player2));
        assert_eq!(game.phase_kind(), PhaseKind::Placing);
        assert!(game.setup(Player1).is_none());
        assert!(game.board(Player1).is_some());
        assert_eq!(
            place(&mut game, Player1, "J1", 2, Orientation::Vertical),
            Err(Rejection::WrongTurn { expected: Player2 })
        );

        place_fleet(&mut game, Player2);
        game.ready(Player2).unwrap();
        assert_eq!(game.phase(), Phase::Attacking(Player1));
        assert_eq!(game.state().current_turn(), Some(Player1));
        assert_eq!(
            place(&mut game, Player2, "J1", 2, Orientation::Vertical),
            Err(Rejection::NotInSetupPhase)
        );
    }

    #[test]
    fn no_attacks_before_battle() {
        let mut game = Game::default();
        assert_eq!(attack(&mut game, Player1, "A1"), Err(Rejection::NotInAttackingPhase));
    }

    #[test]
    fn placement_events() {
        let mut game = Game::default();
        game.drain_events().for_each(drop);
        let ship = place(&mut game, Player1, "A1", 5, Orientation::Horizontal).unwrap();
        assert_eq!(ship.len(), 5);
        assert_eq!(
            place(&mut game, Player1, "C1", 2, Orientation::Vertical),
            Err(Rejection::Overlap)
        );
        let events: Vec<_> = game.drain_events().collect();
        assert_eq!(
            events[0],
            GameEvent::PlacementAccepted {
                player: Player1,
                ship: ship.id(),
                length: 5,
                origin: at("A1"),
                orientation: Orientation::Horizontal,
                remaining: 4,
            }
        );
        let changed = events
            .iter()
            .filter(|event| matches!(event, GameEvent::CellChanged { .. }))
            .count();
        assert_eq!(changed, 5);
        assert_eq!(
            events.last(),
            Some(&GameEvent::PlacementRejected {
                player: Player1,
                reason: Rejection::Overlap
            })
        );
    }

    #[test]
    fn fleet_complete_fires_once_on_last_ship() {
        let mut game = Game::default();
        place_fleet(&mut game, Player1);
        let complete: Vec<_> = game
            .drain_events()
            .filter(|event| matches!(event, GameEvent::FleetComplete(_)))
            .collect();
        assert_eq!(complete, vec![GameEvent::FleetComplete(Player1)]);
        assert_eq!(
            place(&mut game, Player1, "A9", 2, Orientation::Horizontal),
            Err(Rejection::FleetComplete)
        );
    }

    #[test]
    fn turns_alternate_after_miss_and_hit() {
        let mut game = started();
        assert_eq!(attack(&mut game, Player1, "J10"), Ok(AttackOutcome::Miss));
        assert_eq!(game.state().current_turn(), Some(Player2));
        assert_eq!(
            attack(&mut game, Player1, "J9"),
            Err(Rejection::WrongTurn { expected: Player2 })
        );
        assert_eq!(
            attack(&mut game, Player2, "A1"),
            Ok(AttackOutcome::Hit {
                sunk: None,
                victory: None
            })
        );
        assert_eq!(game.state().hit_count(Player1), 1);
        assert_eq!(game.state().current_turn(), Some(Player1));
    }

    #[test]
    fn already_targeted_changes_nothing() {
        let mut game = started();
        attack(&mut game, Player1, "A1").unwrap();
        attack(&mut game, Player2, "J10").unwrap();
        let before = game.state().clone();
        assert_eq!(attack(&mut game, Player1, "A1"), Err(Rejection::AlreadyTargeted));
        assert_eq!(game.state(), &before);
        attack(&mut game, Player1, "B1").unwrap();
        // Targets are tracked per board: player 1 already fired at A1, player 2 has not.
        assert!(attack(&mut game, Player2, "A1").unwrap().is_hit());
        attack(&mut game, Player1, "C1").unwrap();
        assert_eq!(attack(&mut game, Player2, "J10"), Err(Rejection::AlreadyTargeted));
    }

    #[test]
    fn carrier_sinks_on_fifth_hit() {
        let mut game = started();
        for (i, label) in ["A1", "B1", "C1", "D1", "E1"].iter().enumerate() {
            let outcome = attack(&mut game, Player1, label).unwrap();
            if i < 4 {
                assert_eq!(outcome.sunk(), None);
                attack(&mut game, Player2, &format!("J{}", i + 1)).unwrap();
            } else {
                assert_eq!(
                    outcome.sunk(),
                    Some(SunkShip {
                        length: 5,
                        remaining: 4
                    })
                );
            }
        }
    }

    #[test]
    fn victory_after_every_cell_is_hit() {
        let mut game = started();
        let targets: Vec<Coordinate> = game
            .board(Player2)
            .unwrap()
            .ships()
            .iter()
            .flat_map(|ship| ship.coords().collect::<Vec<_>>())
            .collect();
        assert_eq!(targets.len(), 17);
        let mut misses = game
            .size()
            .iter_coordinates()
            .flatten()
            .filter(|coord| coord.col >= 5)
            .collect::<Vec<_>>()
            .into_iter();
        for (i, &target) in targets.iter().enumerate() {
            let outcome = game
                .attack(AttackCommand {
                    attacker: Player1,
                    target,
                })
                .unwrap();
            if i < 16 {
                assert_eq!(outcome.victory(), None);
                let miss = misses.next().unwrap();
                game.attack(AttackCommand {
                    attacker: Player2,
                    target: miss,
                })
                .unwrap();
            } else {
                assert_eq!(outcome.victory(), Some(Victory { winner: Player1 }));
            }
        }
        assert_eq!(game.state().hit_count(Player2), 17);
        assert_eq!(game.phase(), Phase::Finished { winner: Player1 });
        assert_eq!(game.phase_kind(), PhaseKind::Finished);
        assert_eq!(attack(&mut game, Player1, "J10"), Err(Rejection::NotInAttackingPhase));
        assert_eq!(attack(&mut game, Player2, "J10"), Err(Rejection::NotInAttackingPhase));
        let over = game
            .drain_events()
            .filter(|event| matches!(event, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(over, 1);
    }

    #[test]
    fn rotate_toggles_and_is_used_by_adapters() {
        let mut game = Game::default();
        assert_eq!(game.orientation(), Orientation::Horizontal);
        assert_eq!(game.rotate(), Orientation::Vertical);
        assert_eq!(game.rotate(), Orientation::Horizontal);
    }

    #[test]
    fn hidden_classification() {
        let mut game = started();
        assert_eq!(game.classify(Player2, at("A1"), true), Some(CellClass::Ship));
        assert_eq!(game.classify(Player2, at("A1"), false), Some(CellClass::Empty));
        attack(&mut game, Player1, "A1").unwrap();
        assert_eq!(game.classify(Player2, at("A1"), false), Some(CellClass::Hit));
        assert_eq!(game.classify(Player2, at("K1"), false), None);
    }

    #[test]
    fn custom_fleet_total_drives_victory() {
        let config =
            GameConfig::new(BoardSize::new(4, 4).unwrap(), FleetSpec::new(vec![2])).unwrap();
        let mut game = Game::new(config);
        place(&mut game, Player1, "A1", 2, Orientation::Horizontal).unwrap();
        game.ready(Player1).unwrap();
        place(&mut game, Player2, "D3", 2, Orientation::Vertical).unwrap();
        game.ready(Player2).unwrap();
        attack(&mut game, Player1, "D3").unwrap();
        attack(&mut game, Player2, "A4").unwrap();
        let outcome = attack(&mut game, Player1, "D4").unwrap();
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                sunk: Some(SunkShip {
                    length: 2,
                    remaining: 0
                }),
                victory: Some(Victory { winner: Player1 }),
            }
        );
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_completion_fills_remaining_pool() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(11);
        let mut game = Game::default();
        place(&mut game, Player1, "A1", 5, Orientation::Horizontal).unwrap();
        assert_eq!(game.place_remaining_randomly(Player1, &mut rng), Ok(4));
        assert_eq!(game.phase_kind(), PhaseKind::PlacedWaiting);
        assert_eq!(game.place_remaining_randomly(Player1, &mut rng), Ok(0));
        assert_eq!(
            game.place_remaining_randomly(Player2, &mut rng),
            Err(Rejection::WrongTurn { expected: Player1 })
        );
    }
}
