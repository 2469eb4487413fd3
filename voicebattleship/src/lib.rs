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
//! Rules engine for two-player Battleship, driven by voice transcripts or drag and drop.
//!
//! The engine is split the same way the game is played:
//!
//! * [`board`] holds a single player's grid, first as a [`BoardSetup`](board::BoardSetup)
//!   while ships are placed, then as a [`Board`](board::Board) that can be shot at.
//! * [`ships`] describes ships, their placements, and the pool of lengths left to place.
//! * [`game`] ties two boards together with the turn order, hit counting and the win
//!   condition, and queues [`GameEvent`](game::GameEvent)s for the front end.
//! * [`input`] turns transcripts and drag gestures into game commands.
//!
//! ```
//! use voicebattleship::{game::Game, input::{VoiceController, VoiceReply}};
//!
//! let mut game = Game::default();
//! let mut voice = VoiceController::new();
//! assert_eq!(voice.handle(&mut game, "three"), VoiceReply::LengthSelected { length: 3 });
//! match voice.handle(&mut game, "B5") {
//!     VoiceReply::ShipPlaced { remaining, .. } => assert_eq!(remaining, 4),
//!     other => panic!("{:?}", other),
//! }
//! ```

pub mod board;
pub mod game;
pub mod input;
pub mod ships;
