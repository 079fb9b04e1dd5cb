/* Description: Ordered sets of input letters.

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

//! Ordered sets of input letters.

use std::{fmt, hash::BuildHasherDefault};

use indexmap::IndexSet;
use rustc_hash::FxHasher;

/// The 33 lowercase letters of the Russian alphabet, in dictionary order.
pub const RUSSIAN_LOWERCASE: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// A set of letters which remembers the order they were first given in.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
  letters: IndexSet<char, BuildHasherDefault<FxHasher>>,
}

impl Alphabet {
  /// Collect the distinct characters of `letters`. Repeats are dropped.
  pub fn new(letters: &str) -> Self {
    Self {
      letters: letters.chars().collect(),
    }
  }

  pub fn russian() -> Self { Self::new(RUSSIAN_LOWERCASE) }

  pub fn contains(&self, c: char) -> bool { self.letters.contains(&c) }

  pub fn len(&self) -> usize { self.letters.len() }

  pub fn is_empty(&self) -> bool { self.letters.is_empty() }

  pub fn iter(&self) -> impl ExactSizeIterator<Item=char>+'_ { self.letters.iter().copied() }

  /// Whether every character of `word` is a letter of this alphabet.
  pub fn spells(&self, word: &str) -> bool { word.chars().all(|c| self.contains(c)) }
}

impl FromIterator<char> for Alphabet {
  fn from_iter<I: IntoIterator<Item=char>>(iter: I) -> Self {
    Self {
      letters: iter.into_iter().collect(),
    }
  }
}

impl fmt::Display for Alphabet {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for c in self.iter() {
      write!(f, "{c}")?;
    }
    Ok(())
  }
}

impl fmt::Debug for Alphabet {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "Alphabet({self})") }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn russian_has_33_letters() {
    let ru = Alphabet::russian();
    assert_eq!(ru.len(), 33);
    assert!(ru.contains('ё'));
    assert!(ru.contains('ы'));
    assert!(!ru.contains('a'));
    assert!(!ru.contains('Е'));
  }

  #[test]
  fn repeats_are_dropped_in_order() {
    let a = Alphabet::new("эюэя");
    assert_eq!(a.iter().collect::<String>(), "эюя");
    assert_eq!(a.to_string(), "эюя");
    assert_eq!(a, "яюэ".chars().rev().collect::<Alphabet>());
  }

  #[test]
  fn spells() {
    let ru = Alphabet::russian();
    assert!(ru.spells("урожае"));
    assert!(ru.spells(""));
    assert!(!ru.spells("tiger"));
    assert!(!ru.spells("Тигр"));
  }
}
