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
use std::env;

use log::{LevelFilter, Metadata, Record};

/// Writes `LEVEL - message` lines to stderr so they never mix with the game's output.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from the `BATTLESHIP_LOG` environment variable, `warn` if unset or invalid.
/// `verbose` forces `debug`.
fn level(var: Option<String>, verbose: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    var.and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

pub fn init_logging(verbose: bool) {
    let level = level(env::var("BATTLESHIP_LOG").ok(), verbose);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_selection() {
        assert_eq!(level(None, false), LevelFilter::Warn);
        assert_eq!(level(Some("info".into()), false), LevelFilter::Info);
        assert_eq!(level(Some("TRACE".into()), false), LevelFilter::Trace);
        assert_eq!(level(Some("loud".into()), false), LevelFilter::Warn);
        assert_eq!(level(Some("error".into()), true), LevelFilter::Debug);
    }
}
