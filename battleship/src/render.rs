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
use std::{
    fmt,
    io::{self, Write},
};

use voicebattleship::{
    board::{BoardSize, CellClass, Coordinate},
    game::{Game, Phase, Player},
};

/// Display helper that prints a cell's glyph.
struct Glyph(CellClass);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellClass::Empty => "~~",
            CellClass::Ship => "##",
            CellClass::Hit => "X",
            CellClass::Miss => "o",
        })
    }
}

/// Print the boards the acting player is allowed to see. During setup that is their own
/// board, during the battle the opponent's board with ships hidden plus their own, and
/// after the game both boards in full.
pub fn show_game(out: &mut impl Write, game: &Game) -> io::Result<()> {
    match game.phase() {
        Phase::Setup(player) => {
            writeln!(out, "Player {}'s board:", player.number())?;
            show_board(out, game, player, true)
        }
        Phase::Attacking(player) => {
            let opponent = player.opponent();
            writeln!(out, "Player {}'s waters:", opponent.number())?;
            show_board(out, game, opponent, false)?;
            writeln!(out)?;
            writeln!(out, "Player {}'s fleet:", player.number())?;
            show_board(out, game, player, true)
        }
        Phase::Finished { .. } => {
            for &player in &Player::ALL {
                writeln!(out, "Player {}'s board:", player.number())?;
                show_board(out, game, player, true)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Print one player's board, revealing undamaged ships only if `reveal` is set.
pub fn show_board(
    out: &mut impl Write,
    game: &Game,
    owner: Player,
    reveal: bool,
) -> io::Result<()> {
    let size = *game.size();
    let rows = size.iter_coordinates().map(|row| {
        row.map(|coord| {
            let class = game.classify(owner, coord, reveal);
            Glyph(class.unwrap_or(CellClass::Empty))
        })
        .collect::<Vec<_>>()
    });
    write_grid(out, &size, rows)
}

/// Print the grid with column letters across the top and row numbers down the side.
fn write_grid(
    out: &mut impl Write,
    size: &BoardSize,
    rows: impl Iterator<Item = impl IntoIterator<Item = impl fmt::Display>>,
) -> io::Result<()> {
    write!(out, "   ")?;
    for col in 0..size.width() {
        let letter = Coordinate::new(0, col).column_letter().unwrap_or('?');
        write!(out, "{:^4}", letter)?;
    }
    writeln!(out)?;
    for (i, row) in rows.enumerate() {
        write!(out, "{:>2} ", i + 1)?;
        for cell in row {
            write!(out, "{:^4}", cell)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
