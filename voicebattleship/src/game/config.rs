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
//! Board size and fleet composition for a game.
use thiserror::Error;

use crate::{
    board::{BoardSize, MAX_HEIGHT, MAX_WIDTH},
    ships::FleetSpec,
};

/// Reason a [`GameConfig`] was refused.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("board must have at least one row and column, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    #[error("board may be at most {}x{}, got {width}x{height}", MAX_WIDTH, MAX_HEIGHT)]
    BoardTooLarge { width: usize, height: usize },
    #[error("the fleet must contain at least one ship")]
    EmptyFleet,
    #[error("a ship of length {length} does not fit on a {size} board")]
    ShipTooLong { length: usize, size: BoardSize },
    #[error("the fleet covers {cells} cells but the board only has {available}")]
    FleetTooLarge { cells: usize, available: usize },
}

/// Configuration shared by both players.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    size: BoardSize,
    fleet: FleetSpec,
}

impl GameConfig {
    /// Check that every ship of `fleet` fits on a board of `size` on its own and that
    /// the whole fleet is not larger than the board.
    pub fn new(size: BoardSize, fleet: FleetSpec) -> Result<Self, ConfigError> {
        if fleet.ship_count() == 0 {
            return Err(ConfigError::EmptyFleet);
        }
        let longest = size.width().max(size.height());
        if let Some(&length) = fleet
            .lengths()
            .iter()
            .find(|&&length| length == 0 || length > longest)
        {
            return Err(ConfigError::ShipTooLong { length, size });
        }
        if fleet.total_cells() > size.total_size() {
            return Err(ConfigError::FleetTooLarge {
                cells: fleet.total_cells(),
                available: size.total_size(),
            });
        }
        Ok(Self { size, fleet })
    }

    pub fn size(&self) -> &BoardSize {
        &self.size
    }

    pub fn fleet(&self) -> &FleetSpec {
        &self.fleet
    }
}

impl Default for GameConfig {
    /// 10x10 board with the classic five ships.
    fn default() -> Self {
        Self {
            size: BoardSize::default(),
            fleet: FleetSpec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.size().to_string(), "10x10");
        assert_eq!(config.fleet().total_cells(), 17);
        assert_eq!(
            GameConfig::new(BoardSize::default(), FleetSpec::default()),
            Ok(config)
        );
    }

    #[test]
    fn rejects_bad_fleets() {
        let small = BoardSize::new(3, 2).unwrap();
        assert_eq!(
            GameConfig::new(small, FleetSpec::new(vec![])),
            Err(ConfigError::EmptyFleet)
        );
        assert_eq!(
            GameConfig::new(small, FleetSpec::new(vec![4])),
            Err(ConfigError::ShipTooLong { length: 4, size: small })
        );
        assert_eq!(
            GameConfig::new(small, FleetSpec::new(vec![2, 0])),
            Err(ConfigError::ShipTooLong { length: 0, size: small })
        );
        assert_eq!(
            GameConfig::new(small, FleetSpec::new(vec![3, 3, 1])),
            Err(ConfigError::FleetTooLarge { cells: 7, available: 6 })
        );
        assert!(GameConfig::new(small, FleetSpec::new(vec![3, 3])).is_ok());
    }
}
