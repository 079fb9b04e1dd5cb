/* Description: Transition rules and their trigger symbols.

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

//! Transition rules and their trigger symbols.

use core::fmt;

use crate::state::State;

/// What a [`Rule`] fires on.
///
/// Input characters are compared by code point only; no case folding or
/// normalization is performed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Symbol {
  /// A free move, taken without consuming any input.
  Epsilon,
  Char(#[cfg_attr(test, proptest(strategy = "proptest::char::range('a', 'c')"))] char),
}

impl Symbol {
  #[inline(always)]
  pub const fn is_epsilon(&self) -> bool { matches!(self, Self::Epsilon) }
}

impl From<char> for Symbol {
  fn from(c: char) -> Self { Self::Char(c) }
}

impl fmt::Display for Symbol {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Epsilon => write!(f, "ε"),
      Self::Char(c) => write!(f, "{c}"),
    }
  }
}

/// A single transition: from `from`, reading `on`, the automaton may move to
/// `to`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rule {
  from: State,
  on: Symbol,
  to: State,
}

impl Rule {
  pub const fn new(from: State, on: Symbol, to: State) -> Self { Self { from, on, to } }

  pub const fn source(&self) -> State { self.from }

  pub const fn on(&self) -> Symbol { self.on }

  #[inline]
  pub fn matches(&self, state: State, symbol: Symbol) -> bool {
    self.from == state && self.on == symbol
  }

  pub const fn destination(&self) -> State { self.to }
}

impl fmt::Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} --{}--> {}", self.from, self.on, self.to)
  }
}
