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
//! Cell coordinates and their human-readable labels, like `"B5"`.
//!
//! A label is a column letter followed by a 1-based row number. Column `A` is `col` 0
//! and row `1` is `row` 0, so `"B5"` is `Coordinate { row: 4, col: 1 }`.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::board::BoardSize;

/// Matches a string that is exactly one label, surrounding whitespace allowed.
static LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?P<col>[A-Za-z])\s*(?P<row>[0-9]{1,2})\s*$").unwrap());

/// Matches the first label-looking token inside free text such as a transcript.
static LABEL_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?P<col>[A-Za-z])\s*(?P<row>[0-9]{1,2})\b").unwrap());

/// The coordinates of a cell in a player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Row of the cell, counting down from the top.
    pub row: usize,
    /// Column of the cell, counting right from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Letter used for this coordinate's column, if it has one.
    pub fn column_letter(&self) -> Option<char> {
        if self.col < 26 {
            Some(char::from(b'A' + self.col as u8))
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from a `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats the coordinate as its label, e.g. `B5`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.column_letter() {
            Some(letter) => write!(f, "{}{}", letter, self.row + 1),
            // Only reachable for hand-built coordinates past the widest board.
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Coordinate {
    type Err = InvalidCoordinate;

    /// Parse a label against the standard 10x10 board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardSize::default().parse_label(s)
    }
}

/// Reason a piece of text could not be turned into a [`Coordinate`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum InvalidCoordinate {
    /// No letter-then-number pattern was present.
    #[error("{0:?} is not a coordinate, expected a letter and a number like \"B5\"")]
    Malformed(String),
    /// The pattern was present but points outside the board.
    #[error("{label} is outside the {size} board")]
    OutOfRange { label: String, size: BoardSize },
}

impl BoardSize {
    /// Parse text that consists of exactly one label.
    pub fn parse_label(&self, text: &str) -> Result<Coordinate, InvalidCoordinate> {
        match LABEL.captures(text) {
            Some(captures) => self.from_captures(&captures),
            None => Err(InvalidCoordinate::Malformed(text.trim().to_owned())),
        }
    }

    /// Find the first label on this board in some free text and parse it. Text around
    /// the label is ignored, so `"attack b 5 please"` gives `B5`. Labels off the board are
    /// skipped; if nothing else matches, the first of them is reported as out of range.
    pub fn find_label(&self, text: &str) -> Result<Coordinate, InvalidCoordinate> {
        let mut first_err = None;
        for captures in LABEL_IN_TEXT.captures_iter(text) {
            match self.from_captures(&captures) {
                Ok(coord) => return Ok(coord),
                Err(err) => {
                    first_err.get_or_insert(err);
                }
            }
        }
        Err(first_err.unwrap_or_else(|| InvalidCoordinate::Malformed(text.trim().to_owned())))
    }

    fn from_captures(&self, captures: &Captures) -> Result<Coordinate, InvalidCoordinate> {
        let letter = captures["col"].to_ascii_uppercase();
        let number = &captures["row"];
        let out_of_range = || InvalidCoordinate::OutOfRange {
            label: format!("{}{}", letter, number),
            size: *self,
        };
        // Both groups only match ascii, so the letter is a single byte.
        let col = (letter.as_bytes()[0] - b'A') as usize;
        let row = number
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(out_of_range)?;
        let coord = Coordinate::new(row, col);
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(out_of_range())
        }
    }
}
