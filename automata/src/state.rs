/* Description: State identifiers and deduplicated sets of states.

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

//! State identifiers and deduplicated sets of states.

use core::{fmt, hash::BuildHasherDefault};

use indexmap::IndexSet;
use rustc_hash::FxHasher;

use crate::alloc_types::*;

/// An opaque automaton state. States carry no payload; two states are the
/// same state iff their numbers are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct State(usize);

static_assertions::assert_eq_size!(State, usize);

impl State {
  #[inline(always)]
  pub const fn new(x: usize) -> Self { Self(x) }

  #[inline(always)]
  pub const fn as_usize(self) -> usize { self.0 }
}

impl From<usize> for State {
  fn from(x: usize) -> Self { Self(x) }
}

impl fmt::Display for State {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "q{}", self.0) }
}

type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// A set of states.
///
/// Iteration follows insertion order so that traces are reproducible, but
/// equality is plain set equality: `{1, 2} == {2, 1}`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StateSet {
  states: FxIndexSet<State>,
}

impl StateSet {
  pub fn new() -> Self { Self::default() }

  pub fn with_capacity(n: usize) -> Self {
    Self {
      states: FxIndexSet::with_capacity_and_hasher(n, Default::default()),
    }
  }

  pub fn singleton(state: State) -> Self {
    let mut set = Self::with_capacity(1);
    set.insert(state);
    set
  }

  /// Returns whether `state` was newly added.
  pub fn insert(&mut self, state: State) -> bool { self.states.insert(state) }

  /// Returns whether `state` was present.
  pub fn remove(&mut self, state: State) -> bool { self.states.shift_remove(&state) }

  pub fn contains(&self, state: State) -> bool { self.states.contains(&state) }

  pub fn len(&self) -> usize { self.states.len() }

  pub fn is_empty(&self) -> bool { self.states.is_empty() }

  pub fn iter(&self) -> impl ExactSizeIterator<Item=State>+'_ { self.states.iter().copied() }

  pub fn is_subset(&self, other: &Self) -> bool { self.states.is_subset(&other.states) }

  pub fn is_superset(&self, other: &Self) -> bool { other.is_subset(self) }

  pub fn intersects(&self, other: &Self) -> bool {
    /* Probe the larger set with the members of the smaller one. */
    let (small, large) = if self.len() <= other.len() {
      (self, other)
    } else {
      (other, self)
    };
    small.iter().any(|s| large.contains(s))
  }

  /// States of `self` which are not in `other`, in the order of `self`.
  pub fn difference<'s>(&'s self, other: &'s Self) -> impl Iterator<Item=State>+'s {
    self.states.difference(&other.states).copied()
  }

  /// Add every member of `other`, returning how many were new.
  pub fn union_with(&mut self, other: &Self) -> usize {
    let before = self.len();
    self.states.extend(other.iter());
    self.len() - before
  }

  /// The members in ascending order, e.g. for stable output.
  pub fn to_sorted_vec(&self) -> Vec<State> {
    let mut v: Vec<State> = self.iter().collect();
    v.sort_unstable();
    v
  }
}

impl FromIterator<State> for StateSet {
  fn from_iter<I: IntoIterator<Item=State>>(iter: I) -> Self {
    Self {
      states: iter.into_iter().collect(),
    }
  }
}

impl Extend<State> for StateSet {
  fn extend<I: IntoIterator<Item=State>>(&mut self, iter: I) { self.states.extend(iter); }
}

impl<const N: usize> From<[State; N]> for StateSet {
  fn from(states: [State; N]) -> Self { states.into_iter().collect() }
}

impl fmt::Debug for StateSet {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.debug_set().entries(self.iter()).finish() }
}
