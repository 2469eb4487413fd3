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
//! Push-to-talk session guard. At most one listening session is active; starting a new
//! one stops the old one, and transcripts from stopped sessions are dropped.
use log::debug;

/// Identifies one listening session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SessionId(u64);

#[derive(Debug, Default)]
pub struct Listener {
    next: u64,
    active: Option<SessionId>,
    /// Whether the talk key is held.
    pressed: bool,
}

impl Listener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session, stopping the active one first.
    pub fn start(&mut self) -> SessionId {
        if let Some(old) = self.stop() {
            debug!("stopped listening session {:?} to start a new one", old);
        }
        let id = SessionId(self.next);
        self.next += 1;
        self.active = Some(id);
        id
    }

    /// Stop the active session, if any, returning it.
    pub fn stop(&mut self) -> Option<SessionId> {
        self.active.take()
    }

    pub fn active(&self) -> Option<SessionId> {
        self.active
    }

    pub fn is_listening(&self) -> bool {
        self.active.is_some()
    }

    /// Talk key went down. Key repeat while held keeps the current session.
    pub fn press(&mut self) -> SessionId {
        match self.active {
            Some(id) if self.pressed => id,
            _ => {
                self.pressed = true;
                self.start()
            }
        }
    }

    /// Talk key came up.
    pub fn release(&mut self) -> Option<SessionId> {
        self.pressed = false;
        self.stop()
    }

    /// Hand over a transcript recognized in `session`. Returns it only if that session
    /// is still the active one; a session delivers at most one transcript.
    pub fn accept<'t>(&mut self, session: SessionId, transcript: &'t str) -> Option<&'t str> {
        if self.active == Some(session) {
            self.active = None;
            Some(transcript)
        } else {
            debug!("dropped transcript from stale session {:?}", session);
            None
        }
    }
}
