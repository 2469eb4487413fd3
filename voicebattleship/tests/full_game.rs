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
use voicebattleship::{
    board::{CellClass, Coordinate},
    game::{
        AttackCommand, AttackOutcome, Command, CommandOutcome, Game, GameEvent, Phase,
        PhaseKind, PlaceShipCommand, Player, Rejection, SunkShip, Victory,
    },
    input::{DragDrop, DropTarget, Listener, Prompt, ShipSlot, SlotId, VoiceController, VoiceReply},
    ships::Orientation,
};

use Player::{Player1, Player2};

fn at(label: &str) -> Coordinate {
    label.parse().unwrap()
}

/// Player 1 lays ships along rows, player 2 along columns.
fn layout(player: Player) -> Vec<PlaceShipCommand> {
    let (orientation, origins) = match player {
        Player1 => (Orientation::Horizontal, ["A1", "A3", "A5", "A7", "A9"]),
        Player2 => (Orientation::Vertical, ["B1", "D1", "F1", "H1", "J1"]),
    };
    origins
        .iter()
        .zip(&[5, 4, 3, 3, 2])
        .map(|(origin, &length)| PlaceShipCommand {
            player,
            origin: at(origin),
            length,
            orientation,
        })
        .collect()
}

fn setup_both(game: &mut Game) {
    for &player in &Player::ALL {
        for cmd in layout(player) {
            game.execute(Command::PlaceShip(cmd)).unwrap();
        }
        assert_eq!(
            game.execute(Command::Ready { player }),
            Ok(CommandOutcome::Saved(player))
        );
    }
}

#[test]
fn whole_game_through_commands() {
    let mut game = Game::default();
    setup_both(&mut game);
    assert_eq!(game.phase(), Phase::Attacking(Player1));

    let events: Vec<_> = game.drain_events().collect();
    assert_eq!(events.first(), Some(&GameEvent::SetupStarted(Player1)));
    assert!(events.contains(&GameEvent::FleetComplete(Player1)));
    assert!(events.contains(&GameEvent::FleetSaved(Player2)));
    assert_eq!(
        &events[events.len() - 2..],
        &[GameEvent::BattleStarted, GameEvent::TurnChanged(Player1)]
    );

    // Player 2's ships, in the order they were placed.
    let targets: Vec<Coordinate> = game
        .board(Player2)
        .unwrap()
        .ships()
        .iter()
        .flat_map(|ship| ship.coords().collect::<Vec<_>>())
        .collect();
    // Player 1's even rows are open water.
    let mut misses = (0..10)
        .flat_map(|col| (1..10).step_by(2).map(move |row| Coordinate::new(row, col)))
        .collect::<Vec<_>>()
        .into_iter();

    let mut sunk = Vec::new();
    for (i, &target) in targets.iter().enumerate() {
        let outcome = game
            .execute(AttackCommand {
                attacker: Player1,
                target,
            }
            .into())
            .unwrap();
        let outcome = match outcome {
            CommandOutcome::Attacked(outcome) => outcome,
            other => panic!("unexpected outcome {:?}", other),
        };
        assert!(outcome.is_hit());
        assert_eq!(game.state().hit_count(Player2), i + 1);
        if let Some(ship) = outcome.sunk() {
            sunk.push(ship);
        }
        if i + 1 < targets.len() {
            assert_eq!(outcome.victory(), None);
            assert_eq!(game.state().current_turn(), Some(Player2));
            let miss = game
                .attack(AttackCommand {
                    attacker: Player2,
                    target: misses.next().unwrap(),
                })
                .unwrap();
            assert_eq!(miss, AttackOutcome::Miss);
        } else {
            assert_eq!(outcome.victory(), Some(Victory { winner: Player1 }));
        }
    }

    assert_eq!(
        sunk,
        vec![
            SunkShip { length: 5, remaining: 4 },
            SunkShip { length: 4, remaining: 3 },
            SunkShip { length: 3, remaining: 2 },
            SunkShip { length: 3, remaining: 1 },
            SunkShip { length: 2, remaining: 0 },
        ]
    );
    assert_eq!(game.state().hit_count(Player2), 17);
    assert_eq!(game.phase_kind(), PhaseKind::Finished);
    assert_eq!(game.state().winner(), Some(Player1));
    assert!(game.board(Player2).unwrap().defeated());
    assert_eq!(
        game.attack(AttackCommand {
            attacker: Player1,
            target: at("A10"),
        }),
        Err(Rejection::NotInAttackingPhase)
    );
    let last: Vec<_> = game.drain_events().collect();
    assert_eq!(
        last.iter()
            .filter(|event| matches!(event, GameEvent::GameOver { winner: Player1 }))
            .count(),
        1
    );
    assert_eq!(
        last.last(),
        Some(&GameEvent::AttackRejected {
            attacker: Player1,
            reason: Rejection::NotInAttackingPhase
        })
    );
}

#[test]
fn carrier_sinks_on_fifth_hit_not_before() {
    let mut game = Game::default();
    setup_both(&mut game);
    let carrier = ["B1", "B2", "B3", "B4", "B5"];
    let spare = ["A2", "B2", "C2", "D2"];
    for (i, label) in carrier.iter().enumerate() {
        let outcome = game
            .attack(AttackCommand {
                attacker: Player1,
                target: at(label),
            })
            .unwrap();
        if i < 4 {
            assert_eq!(outcome.sunk(), None);
            game.attack(AttackCommand {
                attacker: Player2,
                target: at(spare[i]),
            })
            .unwrap();
        } else {
            assert_eq!(outcome.sunk().map(|ship| ship.length), Some(5));
        }
    }
}

#[test]
fn cell_changes_reach_the_renderer() {
    let mut game = Game::default();
    setup_both(&mut game);
    game.drain_events().for_each(drop);
    game.attack(AttackCommand {
        attacker: Player1,
        target: at("C3"),
    })
    .unwrap();
    let events: Vec<_> = game.drain_events().collect();
    assert_eq!(
        events[0],
        GameEvent::CellChanged {
            owner: Player2,
            coord: at("C3"),
            class: CellClass::Miss
        }
    );
    assert_eq!(events[2], GameEvent::TurnChanged(Player2));
}

#[test]
fn whole_game_by_voice() {
    let mut game = Game::default();
    let mut voice = VoiceController::new();
    let mut listener = Listener::new();
    let mut say = |game: &mut Game, transcript: &str| {
        let session = listener.press();
        listener.release();
        // Released before the result arrived: the transcript is stale.
        assert_eq!(listener.accept(session, transcript), None);
        let session = listener.start();
        let text = listener.accept(session, transcript).unwrap();
        voice.handle(game, text)
    };

    for &player in &Player::ALL {
        assert_eq!(
            say(&mut game, "save"),
            VoiceReply::SaveRejected(Rejection::FleetIncomplete { remaining: 5 })
        );
        if player == Player2 {
            assert_eq!(say(&mut game, "rotate"), VoiceReply::Rotated(Orientation::Vertical));
        }
        for cmd in layout(player) {
            let word = match cmd.length {
                2 => "to",
                3 => "tree",
                4 => "for",
                _ => "five",
            };
            assert_eq!(
                say(&mut game, word),
                VoiceReply::LengthSelected { length: cmd.length }
            );
            let spoken = format!("place it at {}", cmd.origin);
            assert!(matches!(say(&mut game, &spoken), VoiceReply::ShipPlaced { .. }));
        }
        assert_eq!(say(&mut game, "three"), VoiceReply::AllShipsPlaced);
        assert_eq!(game.phase_kind(), PhaseKind::PlacedWaiting);
        assert_eq!(say(&mut game, "Save."), VoiceReply::Saved(player));
    }
    assert_eq!(game.phase(), Phase::Attacking(Player1));

    match say(&mut game, "fire at b 1") {
        VoiceReply::Attacked {
            attacker, outcome, ..
        } => {
            assert_eq!(attacker, Player1);
            assert!(outcome.is_hit());
        }
        other => panic!("unexpected reply {:?}", other),
    }
    assert_eq!(
        say(&mut game, "b2"),
        VoiceReply::Attacked {
            attacker: Player2,
            target: at("B2"),
            outcome: AttackOutcome::Miss
        }
    );
    assert_eq!(
        say(&mut game, "B1"),
        VoiceReply::AttackRejected(Rejection::AlreadyTargeted)
    );
    assert!(matches!(
        say(&mut game, "nowhere"),
        VoiceReply::AttackRejected(Rejection::InvalidCoordinate(_))
    ));
}

#[test]
fn voice_prompts_follow_setup() {
    let mut game = Game::default();
    let mut voice = VoiceController::new();
    voice.handle(&mut game, "two");
    assert_eq!(
        voice.prompt(&game),
        Prompt::ChooseCoordinate {
            player: Player1,
            length: 2,
            orientation: Orientation::Horizontal
        }
    );
    // The same length placed some other way cancels the voice selection.
    game.place_ship(PlaceShipCommand {
        player: Player1,
        origin: at("A1"),
        length: 2,
        orientation: Orientation::Horizontal,
    })
    .unwrap();
    assert_eq!(
        voice.prompt(&game),
        Prompt::ChooseLength {
            player: Player1,
            available: vec![3, 3, 4, 5]
        }
    );
    assert_eq!(
        voice.handle(&mut game, "c3"),
        VoiceReply::LengthNotAvailable {
            available: vec![3, 3, 4, 5]
        }
    );
}

fn drag_lengths(drag: &DragDrop, player: Player) -> Vec<usize> {
    let mut lengths: Vec<usize> = drag.slots(player).iter().map(ShipSlot::length).collect();
    lengths.sort_unstable();
    lengths
}

fn drag_slot(drag: &DragDrop, player: Player, length: usize) -> SlotId {
    drag.slots(player)
        .iter()
        .find(|slot| slot.length() == length)
        .map(ShipSlot::id)
        .unwrap()
}

fn drag_onto(game: &mut Game, drag: &mut DragDrop, player: Player, length: usize, label: &str) {
    let slot = drag_slot(drag, player, length);
    assert_eq!(drag.pick_up(game, player, slot), Ok(length));
    let ship = drag
        .drop_on(game, DropTarget::Cell { owner: player, coord: at(label) })
        .unwrap()
        .unwrap();
    assert_eq!(ship.len(), length);
}

#[test]
fn voice_and_drag_share_one_pool() {
    let mut game = Game::default();
    let mut voice = VoiceController::new();
    let mut drag = DragDrop::new(&game);

    voice.handle(&mut game, "five");
    assert!(matches!(
        voice.handle(&mut game, "a1"),
        VoiceReply::ShipPlaced { remaining: 4, .. }
    ));
    drag_onto(&mut game, &mut drag, Player1, 4, "A3");
    assert_eq!(game.pending_lengths(Player1), vec![2, 3, 3]);
    assert_eq!(drag_lengths(&drag, Player1), vec![2, 3, 3]);
    assert_eq!(
        voice.prompt(&game),
        Prompt::ChooseLength {
            player: Player1,
            available: vec![2, 3, 3]
        }
    );

    // Dragging one cruiser leaves the voice selection on the other.
    voice.handle(&mut game, "three");
    drag_onto(&mut game, &mut drag, Player1, 3, "A5");
    assert_eq!(
        voice.prompt(&game),
        Prompt::ChooseCoordinate {
            player: Player1,
            length: 3,
            orientation: Orientation::Horizontal
        }
    );
    assert!(matches!(
        voice.handle(&mut game, "a7"),
        VoiceReply::ShipPlaced { remaining: 1, .. }
    ));
    drag.sync(&game);
    assert_eq!(drag_lengths(&drag, Player1), vec![2]);

    voice.handle(&mut game, "to");
    voice.handle(&mut game, "a9");
    drag.sync(&game);
    assert!(drag.slots(Player1).is_empty());
    assert_eq!(voice.prompt(&game), Prompt::Save { player: Player1 });
    assert_eq!(voice.handle(&mut game, "save"), VoiceReply::Saved(Player1));

    assert_eq!(drag_lengths(&drag, Player2), vec![2, 3, 3, 4, 5]);
    assert_eq!(
        voice.prompt(&game),
        Prompt::ChooseLength {
            player: Player2,
            available: vec![2, 3, 3, 4, 5]
        }
    );
}
