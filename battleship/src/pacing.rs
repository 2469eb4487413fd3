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
//! Delays between announcements. A sinking is announced a moment after the hit, and the
//! next turn a while after that, so players can take in what happened.
use std::{thread, time::Duration};

/// How long to wait before an announcement.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pause {
    None,
    /// Before announcing a sunk ship.
    Sink,
    /// Before announcing the turn that follows a sunk ship.
    Turn,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pacing {
    sink: Duration,
    turn: Duration,
}

impl Pacing {
    pub fn new(sink: Duration, turn: Duration) -> Self {
        Self { sink, turn }
    }

    /// Never wait.
    pub fn none() -> Self {
        Self::new(Duration::from_millis(0), Duration::from_millis(0))
    }

    pub fn delay(&self, pause: Pause) -> Duration {
        match pause {
            Pause::None => Duration::from_millis(0),
            Pause::Sink => self.sink,
            Pause::Turn => self.turn,
        }
    }

    /// Block for the delay of `pause`.
    pub fn wait(&self, pause: Pause) {
        let delay = self.delay(pause);
        if delay > Duration::from_millis(0) {
            thread::sleep(delay);
        }
    }
}

impl Default for Pacing {
    /// One second before a sinking, five more before the next turn.
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(5000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_per_pause() {
        let pacing = Pacing::default();
        assert_eq!(pacing.delay(Pause::None), Duration::from_millis(0));
        assert_eq!(pacing.delay(Pause::Sink), Duration::from_secs(1));
        assert_eq!(pacing.delay(Pause::Turn), Duration::from_secs(5));
        assert_eq!(Pacing::none().delay(Pause::Turn), Duration::from_millis(0));
    }
}
