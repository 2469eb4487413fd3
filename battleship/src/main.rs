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
    io::{self, BufRead, Write},
    time::Duration,
};

use clap::{value_t, App, Arg, ArgMatches, ErrorKind};
use log::{debug, info};
use rand::Rng;

use voicebattleship::{
    board::BoardSize,
    game::{Game, GameConfig, GameEvent},
    input::{Listener, VoiceController},
    ships::FleetSpec,
};

use crate::{narrate::Narrator, pacing::Pacing};

mod logging;
mod narrate;
mod pacing;
mod render;

fn main() -> io::Result<()> {
    let matches = App::new("Voice Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about(
            "Two-player battleship on one terminal. Each line you type is handled like a \
             spoken command: a ship size, a coordinate such as B5, 'rotate', 'save' or \
             'help'. Also understands 'board', 'randomize' and 'quit'.",
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("COLUMNS")
                .help("number of columns, lettered from A")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("ROWS")
                .help("number of rows, numbered from 1")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("fleet")
                .long("fleet")
                .value_name("LENGTHS")
                .help("comma-separated ship lengths each player must place")
                .takes_value(true)
                .default_value("5,4,3,3,2")
                .validator(|value| parse_fleet(&value).map(drop)),
        )
        .arg(
            Arg::with_name("sink_delay_ms")
                .long("sink-delay-ms")
                .value_name("MILLIS")
                .help("pause before announcing a sunk ship")
                .takes_value(true)
                .default_value("1000"),
        )
        .arg(
            Arg::with_name("turn_delay_ms")
                .long("turn-delay-ms")
                .value_name("MILLIS")
                .help("pause before announcing the turn after a sunk ship")
                .takes_value(true)
                .default_value("5000"),
        )
        .arg(
            Arg::with_name("no_delay")
                .long("no-delay")
                .help("announce everything immediately"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log debug messages to stderr"),
        )
        .get_matches();

    logging::init_logging(matches.is_present("verbose"));
    let config = game_config(&matches);
    let pacing = pacing(&matches);

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();
    let mut session = Session::new(config, pacing);

    println!("Welcome to Voice Battleship! Say 'instructions' anytime for help.");
    session.announce_events();
    session.show()?;

    loop {
        let prompt = narrate::prompt(&session.voice.prompt(&session.game));
        let line = match input.read_input(&prompt)? {
            Some(line) => line,
            None => break,
        };
        match line.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "board" | "show" => {
                session.show()?;
                continue;
            }
            "randomize" | "random" => session.randomize(&mut rng),
            _ => session.transcript(line),
        }
        if session.announce_events() {
            session.show()?;
        }
    }
    info!("leaving the game");
    Ok(())
}

/// Build the game configuration from the arguments. Exits with a usage error if the
/// board or fleet is unusable.
fn game_config(matches: &ArgMatches) -> GameConfig {
    let width = value_t!(matches, "width", usize).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", usize).unwrap_or_else(|e| e.exit());
    let fleet = parse_fleet(matches.value_of("fleet").unwrap_or_default())
        .unwrap_or_else(|e| invalid_value(&e));
    BoardSize::new(width, height)
        .and_then(|size| GameConfig::new(size, fleet))
        .unwrap_or_else(|e| invalid_value(&e.to_string()))
}

fn invalid_value(description: &str) -> ! {
    clap::Error::with_description(description, ErrorKind::InvalidValue).exit()
}

/// Parse a comma-separated list of ship lengths.
fn parse_fleet(value: &str) -> Result<FleetSpec, String> {
    value
        .split(',')
        .map(|length| {
            length
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid ship length {:?}", length.trim()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(FleetSpec::new)
}

fn pacing(matches: &ArgMatches) -> Pacing {
    if matches.is_present("no_delay") {
        return Pacing::none();
    }
    let sink = value_t!(matches, "sink_delay_ms", u64).unwrap_or_else(|e| e.exit());
    let turn = value_t!(matches, "turn_delay_ms", u64).unwrap_or_else(|e| e.exit());
    Pacing::new(Duration::from_millis(sink), Duration::from_millis(turn))
}

/// Everything one game on the terminal needs.
struct Session {
    game: Game,
    voice: VoiceController,
    listener: Listener,
    narrator: Narrator,
    pacing: Pacing,
}

impl Session {
    fn new(config: GameConfig, pacing: Pacing) -> Self {
        Self {
            game: Game::new(config),
            voice: VoiceController::new(),
            listener: Listener::new(),
            narrator: Narrator::new(),
            pacing,
        }
    }

    /// Each typed line is one push-to-talk utterance.
    fn transcript(&mut self, line: &str) {
        let session = self.listener.start();
        if let Some(text) = self.listener.accept(session, line) {
            let reply = self.voice.handle(&mut self.game, text);
            debug!("voice reply {:?}", reply);
            if let Some(announcement) = self.narrator.reply(&reply) {
                self.pacing.wait(announcement.pause);
                println!("{}", announcement.text);
            }
        }
    }

    /// Fill the setup player's remaining pool at random.
    fn randomize(&mut self, rng: &mut impl Rng) {
        match self.game.state().current_player() {
            Some(player) => {
                if let Err(reason) = self.game.place_remaining_randomly(player, rng) {
                    println!("Could not place the remaining ships: {}.", reason);
                }
            }
            None => println!("Ships can only be placed during setup."),
        }
    }

    /// Narrate queued events. Returns true if the boards changed.
    fn announce_events(&mut self) -> bool {
        let events: Vec<GameEvent> = self.game.drain_events().collect();
        let mut redraw = false;
        for event in &events {
            redraw |= matches!(
                event,
                GameEvent::CellChanged { .. }
                    | GameEvent::SetupStarted(_)
                    | GameEvent::TurnChanged(_)
                    | GameEvent::GameOver { .. }
            );
            for announcement in self.narrator.event(event) {
                self.pacing.wait(announcement.pause);
                println!("{}", announcement.text);
            }
        }
        redraw
    }

    fn show(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out)?;
        render::show_game(&mut out, &self.game)?;
        writeln!(out)
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Print the prompt and read one trimmed line. Returns `None` at end of input.
    fn read_input(&mut self, prompt: &str) -> io::Result<Option<&str>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(self.buf.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_argument() {
        assert_eq!(parse_fleet("5, 4,3").unwrap().lengths(), &[5, 4, 3]);
        assert!(parse_fleet("5,x").is_err());
        assert!(parse_fleet("").is_err());
    }

    #[test]
    fn input_reader_stops_at_end() {
        let mut input = InputReader::new(&b"  B5 \n\nrotate"[..]);
        assert_eq!(input.read_input(">").unwrap(), Some("B5"));
        assert_eq!(input.read_input(">").unwrap(), Some(""));
        assert_eq!(input.read_input(">").unwrap(), Some("rotate"));
        assert_eq!(input.read_input(">").unwrap(), None);
    }
}
