/* Description: Run and logging configuration assembled from the command line.

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

//! Run and logging configuration assembled from the command line.

use nfa_sim::{alphabet::Alphabet, final_letter::FinalLetter};
use tracing::Level;

use crate::{error::CliError, logging::LogFormat, Cli};

/// Tracing target of the automaton engine.
pub const ENGINE_TARGET: &str = "nfa_sim_automata";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
  pub global: Level,
  pub engine: Option<Level>,
  pub format: LogFormat,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      global: Level::WARN,
      engine: None,
      format: LogFormat::Compact,
    }
  }
}

impl LogConfig {
  pub fn from_cli(cli: &Cli) -> Self {
    Self {
      global: cli.log_level,
      engine: cli.engine_log_level,
      format: cli.log_format,
    }
  }

  pub fn level_for(&self, target: &str) -> Level {
    match target {
      ENGINE_TARGET => self.engine.unwrap_or(self.global),
      _ => self.global,
    }
  }
}

/// What to evaluate, and against which automaton.
#[derive(Debug, Clone)]
pub struct RunConfig {
  pub alphabet: Alphabet,
  pub accept_letter: char,
  pub branch_letters: Vec<char>,
  pub words: Vec<String>,
}

impl RunConfig {
  pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
    let alphabet = Alphabet::new(&cli.alphabet);
    if alphabet.is_empty() {
      return Err(CliError::EmptyAlphabet);
    }
    Ok(Self {
      alphabet,
      accept_letter: cli.accept_letter,
      branch_letters: cli.branch_letters.chars().collect(),
      words: cli.words(),
    })
  }

  pub fn final_letter(&self) -> FinalLetter {
    FinalLetter::new(self.alphabet.clone())
      .accept_letter(self.accept_letter)
      .branch_letters(self.branch_letters.iter().copied())
  }
}

#[cfg(test)]
mod test {
  use clap::Parser;

  use super::*;

  #[test]
  fn engine_level_falls_back_to_global() {
    let mut config = LogConfig::default();
    assert_eq!(config.level_for(ENGINE_TARGET), Level::WARN);
    assert_eq!(config.level_for("nfa_sim"), Level::WARN);

    config.engine = Some(Level::TRACE);
    assert_eq!(config.level_for(ENGINE_TARGET), Level::TRACE);
    assert_eq!(config.level_for("nfa_sim_cli"), Level::WARN);
  }

  #[test]
  fn run_config_from_flags() {
    let cli = Cli::parse_from(["nfa-sim", "--alphabet", "abca", "--branch-letters", "xy", "w"]);
    let config = RunConfig::from_cli(&cli).unwrap();
    assert_eq!(config.alphabet, Alphabet::new("abc"));
    assert_eq!(config.branch_letters, vec!['x', 'y']);
    assert_eq!(config.words, vec!["w".to_string()]);
    assert_eq!(config.final_letter().stray_letters().collect::<String>(), "xyе");
  }
}
