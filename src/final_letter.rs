/* Description: Automata which accept words by their last letter.

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

//! Automata which accept words by their last letter.
//!
//! The automaton has three states. [`LOOP`] reads any letter of the alphabet
//! and stays put, but may also guess that the current letter is the last
//! one: on the accept letter it can jump to [`ACCEPT`], and on any branch
//! letter to [`BRANCH`]. Neither of those has outgoing rules, so the guess
//! only survives if the input really ends there. A word is therefore accepted
//! exactly when it is spelled in the alphabet and ends with the accept letter.
//!
//! ```
//! use nfa_sim::final_letter::FinalLetter;
//!
//! let nfa = FinalLetter::default().build();
//! assert!(nfa.evaluate("урожае"));
//! assert!(!nfa.evaluate("тигр"));
//! ```

use tracing::debug;

use crate::{alphabet::Alphabet, Automaton, Rulebook, State};

pub const LOOP: State = State::new(1);
pub const BRANCH: State = State::new(2);
pub const ACCEPT: State = State::new(3);

pub const DEFAULT_ACCEPT_LETTER: char = 'е';
pub const DEFAULT_BRANCH_LETTERS: [char; 3] = ['а', 'о', 'и'];

/// Sample input, mixing words which do and do not end in `е`.
pub const DEMO_WORDS: [&str; 5] = ["большое", "тигр", "большие", "серый", "урожае"];

/// Builder for a last-letter automaton.
#[derive(Clone, Debug)]
pub struct FinalLetter {
  alphabet: Alphabet,
  accept_letter: char,
  branch_letters: Vec<char>,
}

impl Default for FinalLetter {
  fn default() -> Self { Self::new(Alphabet::russian()) }
}

impl FinalLetter {
  pub fn new(alphabet: Alphabet) -> Self {
    Self {
      alphabet,
      accept_letter: DEFAULT_ACCEPT_LETTER,
      branch_letters: DEFAULT_BRANCH_LETTERS.to_vec(),
    }
  }

  pub fn accept_letter(mut self, c: char) -> Self {
    self.accept_letter = c;
    self
  }

  pub fn branch_letters(mut self, letters: impl IntoIterator<Item=char>) -> Self {
    self.branch_letters = letters.into_iter().collect();
    self
  }

  pub fn alphabet(&self) -> &Alphabet { &self.alphabet }

  /// Accept and branch letters which the alphabet does not contain. Such
  /// letters still get their rules, but [`LOOP`] cannot read past them, so
  /// they only ever match as the last letter of a word.
  pub fn stray_letters(&self) -> impl Iterator<Item=char>+'_ {
    self
      .branch_letters
      .iter()
      .copied()
      .chain([self.accept_letter])
      .filter(|&c| !self.alphabet.contains(c))
  }

  pub fn rulebook(&self) -> Rulebook {
    let mut rulebook = Rulebook::new();
    for &c in self.branch_letters.iter() {
      rulebook.add_rule(LOOP, c, BRANCH);
    }
    rulebook.add_rule(LOOP, self.accept_letter, ACCEPT);
    for c in self.alphabet.iter() {
      rulebook.add_rule(LOOP, c, LOOP);
    }
    rulebook
  }

  pub fn build(&self) -> Automaton {
    let rulebook = self.rulebook();
    debug!(
      rules = rulebook.len(),
      alphabet = %self.alphabet,
      accept_letter = %self.accept_letter,
      "built final-letter automaton"
    );
    Automaton::new([LOOP], [ACCEPT], rulebook)
  }
}
