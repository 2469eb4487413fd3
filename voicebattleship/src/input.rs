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
//! Input adapters that turn user intent into [`Command`](crate::game::Command)s.
//!
//! [`voice`] interprets recognized speech transcripts, [`listener`] keeps at most one
//! listening session alive, and [`drag`] handles picking ships out of a pool and dropping
//! them on a board. None of them touch game state except through [`Game`]'s commands.
//!
//! [`Game`]: crate::game::Game

pub use self::{
    drag::{DragDrop, DragError, DropTarget, ShipSlot, SlotId},
    listener::{Listener, SessionId},
    voice::{Prompt, VoiceController, VoiceReply},
};

pub mod drag;
pub mod listener;
pub mod voice;
