/* Description: Print which words a last-letter automaton accepts.

Copyright (C) 2024 Danny McClanahan <dmcC2@hypnicjerk.ai>
SPDX-License-Identifier: GPL-3.0-or-later

This file is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as
published by the Free Software Foundation; either version 3 of the
License, or (at your option) any later version.

This file is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>. */

//! Print which words a last-letter automaton accepts.
//!
//! Accepted words go to stdout, one per line, in the order they were given.
//! Diagnostics go to stderr through `tracing`.

use std::{
  io::{self, Write},
  process::ExitCode,
};

use clap::Parser;
use nfa_sim::{
  alphabet::RUSSIAN_LOWERCASE,
  final_letter::{DEFAULT_ACCEPT_LETTER, DEMO_WORDS},
};
use tracing::{error, info, warn};

mod config;
mod error;
mod logging;

use crate::{
  config::{LogConfig, RunConfig},
  error::CliError,
  logging::LogFormat,
};

#[derive(Debug, Parser)]
#[command(
  name = "nfa-sim",
  version,
  about = "Print the words which end in a given letter, using a nondeterministic automaton"
)]
pub struct Cli {
  /// Words to check. A built-in sample of Russian words is used if none are
  /// given.
  #[arg(value_name = "WORDS")]
  pub words: Vec<String>,

  /// Every letter a word may contain.
  #[arg(long, default_value = RUSSIAN_LOWERCASE)]
  pub alphabet: String,

  /// The letter accepted words end in.
  #[arg(long, default_value_t = DEFAULT_ACCEPT_LETTER)]
  pub accept_letter: char,

  /// Letters which lead to a non-accepting dead end when read last.
  #[arg(long, default_value = "аои")]
  pub branch_letters: String,

  /// Level for all diagnostics (error, warn, info, debug, trace).
  #[arg(long, default_value_t = tracing::Level::WARN)]
  pub log_level: tracing::Level,

  /// Level for the automaton engine only; defaults to --log-level.
  #[arg(long)]
  pub engine_log_level: Option<tracing::Level>,

  #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
  pub log_format: LogFormat,
}

impl Cli {
  pub fn words(&self) -> Vec<String> {
    if self.words.is_empty() {
      DEMO_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
      self.words.clone()
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  logging::init(&LogConfig::from_cli(&cli));

  let stdout = io::stdout();
  match run(&cli, &mut stdout.lock()) {
    Ok(n) => {
      info!(matched = n, "done");
      ExitCode::SUCCESS
    },
    Err(e) => {
      error!(%e, "aborting");
      eprintln!("error: {e}");
      ExitCode::FAILURE
    },
  }
}

/// Write every accepted word to `out`, returning how many there were.
fn run(cli: &Cli, out: &mut impl Write) -> Result<usize, CliError> {
  let config = RunConfig::from_cli(cli)?;
  let builder = config.final_letter();
  for c in builder.stray_letters() {
    warn!(letter = %c, "letter is not in the alphabet");
  }

  let nfa = builder.build();
  let mut matched = 0;
  for word in nfa.matching_words(config.words.iter()) {
    writeln!(out, "{word}")?;
    matched += 1;
  }
  out.flush()?;
  Ok(matched)
}

#[cfg(test)]
mod test {
  use super::*;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("nfa-sim").chain(args.iter().copied())).unwrap()
  }

  fn output(args: &[&str]) -> Result<String, CliError> {
    let mut out: Vec<u8> = Vec::new();
    run(&parse(args), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
  }

  #[test]
  fn defaults() {
    let cli = parse(&[]);
    assert_eq!(cli.alphabet, RUSSIAN_LOWERCASE);
    assert_eq!(cli.accept_letter, 'е');
    assert_eq!(cli.branch_letters, "аои");
    assert_eq!(cli.log_level, tracing::Level::WARN);
    assert_eq!(cli.engine_log_level, None);
    assert_eq!(cli.log_format, LogFormat::Compact);
    assert_eq!(cli.words(), DEMO_WORDS.to_vec());
  }

  #[test]
  fn demo_output() {
    assert_eq!(output(&[]).unwrap(), "большое\nбольшие\nурожае\n");
  }

  #[test]
  fn given_words_in_order() {
    assert_eq!(
      output(&["урожае", "тигр", "поле", "поле"]).unwrap(),
      "урожае\nполе\nполе\n"
    );
  }

  #[test]
  fn custom_automaton() {
    let out = output(&[
      "--alphabet",
      "ab",
      "--accept-letter",
      "b",
      "--branch-letters",
      "",
      "ab",
      "ba",
      "abc",
      "bbb",
    ])
    .unwrap();
    assert_eq!(out, "ab\nbbb\n");
  }

  #[test]
  fn empty_alphabet_is_rejected() {
    assert!(matches!(
      output(&["--alphabet", "", "слово"]),
      Err(CliError::EmptyAlphabet)
    ));
  }

  #[test]
  fn logging_flags() {
    let cli = parse(&["--log-level", "debug", "--engine-log-level", "trace", "--log-format", "json"]);
    assert_eq!(cli.log_level, tracing::Level::DEBUG);
    assert_eq!(cli.engine_log_level, Some(tracing::Level::TRACE));
    assert_eq!(cli.log_format, LogFormat::Json);

    assert!(Cli::try_parse_from(["nfa-sim", "--log-format", "xml"]).is_err());
    assert!(Cli::try_parse_from(["nfa-sim", "--accept-letter", "ab"]).is_err());
  }
}
