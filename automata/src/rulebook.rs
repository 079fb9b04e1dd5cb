/* Description: Indexed collections of transition rules.

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

//! Indexed collections of transition rules.

use core::{fmt, hash::BuildHasherDefault};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;
use smallvec::SmallVec;
use tracing::trace;

use crate::{
  alloc_types::*,
  error::AutomatonError,
  rule::{Rule, Symbol},
  state::{State, StateSet},
};

type FxBuild = BuildHasherDefault<FxHasher>;

/// An append-only set of [`Rule`]s, indexed by `(source, symbol)`.
///
/// Several rules may share a source and symbol; that is what makes the
/// automaton nondeterministic. Adding the same rule twice is allowed and has
/// no observable effect on lookups.
#[derive(Clone, Default)]
pub struct Rulebook {
  rules: Vec<Rule>,
  /* Positions in `rules`, keyed by what they fire on. */
  index: IndexMap<(State, Symbol), SmallVec<[usize; 2]>, FxBuild>,
  /* Every state named by some rule. */
  universe: StateSet,
  alphabet: IndexSet<char, FxBuild>,
}

impl Rulebook {
  pub fn new() -> Self { Self::default() }

  pub fn add_rule(&mut self, from: State, on: impl Into<Symbol>, to: State) {
    self.add(Rule::new(from, on.into(), to));
  }

  pub fn add(&mut self, rule: Rule) {
    let position = self.rules.len();
    self.rules.push(rule);
    self
      .index
      .entry((rule.source(), rule.on()))
      .or_default()
      .push(position);
    self.universe.insert(rule.source());
    self.universe.insert(rule.destination());
    if let Symbol::Char(c) = rule.on() {
      self.alphabet.insert(c);
    }
  }

  /// All rules, in the order they were added.
  pub fn rules(&self) -> &[Rule] { &self.rules }

  pub fn len(&self) -> usize { self.rules.len() }

  pub fn is_empty(&self) -> bool { self.rules.is_empty() }

  /// Every state mentioned by a rule, as source or destination.
  pub fn states(&self) -> &StateSet { &self.universe }

  /// Input characters some rule fires on, in order of first use.
  pub fn alphabet(&self) -> impl ExactSizeIterator<Item=char>+'_ { self.alphabet.iter().copied() }

  /// The rules leaving `state` on `on`.
  pub fn rules_for(&self, state: State, on: Symbol) -> impl Iterator<Item=&Rule>+'_ {
    self
      .index
      .get(&(state, on))
      .into_iter()
      .flat_map(|positions| positions.iter())
      .map(move |&i| &self.rules[i])
      .inspect(move |rule| debug_assert!(rule.matches(state, on)))
  }

  /// The destinations of every rule leaving any member of `from` on `on`.
  ///
  /// An empty result is a dead branch, not an error.
  pub fn next_states(&self, from: &StateSet, on: Symbol) -> StateSet {
    let mut next = StateSet::new();
    for state in from.iter() {
      next.extend(self.rules_for(state, on).map(Rule::destination));
    }
    next
  }

  /// The smallest superset of `states` closed under free moves.
  ///
  /// # Panics
  ///
  /// If [`Self::try_epsilon_closure()`] fails, which would mean the closure
  /// loop itself is broken.
  pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
    match self.try_epsilon_closure(states) {
      Ok(closure) => closure,
      Err(e) => panic!("internal invariant violated: {e}"),
    }
  }

  /// Like [`Self::epsilon_closure()`], but reports a blown iteration fuse
  /// instead of panicking.
  ///
  /// Every round that does not stop adds at least one new member of
  /// [`Self::states()`] to the closure, so no more rounds than there are
  /// states can ever be needed.
  pub fn try_epsilon_closure(&self, states: &StateSet) -> Result<StateSet, AutomatonError> {
    let limit = self.universe.len();
    let mut closure = states.clone();
    let mut frontier = states.clone();
    let mut rounds: usize = 0;
    loop {
      let more = self.next_states(&frontier, Symbol::Epsilon);
      /* Compare against everything found so far, not just the input. */
      if more.is_subset(&closure) {
        trace!(rounds, closure = ?closure, "free moves settled");
        return Ok(closure);
      }
      if rounds >= limit {
        return Err(AutomatonError::ClosureDiverged { limit });
      }
      rounds += 1;
      frontier = more.difference(&closure).collect();
      closure.union_with(&frontier);
    }
  }
}

impl FromIterator<Rule> for Rulebook {
  fn from_iter<I: IntoIterator<Item=Rule>>(iter: I) -> Self {
    let mut rulebook = Self::new();
    rulebook.extend(iter);
    rulebook
  }
}

impl Extend<Rule> for Rulebook {
  fn extend<I: IntoIterator<Item=Rule>>(&mut self, iter: I) {
    for rule in iter {
      self.add(rule);
    }
  }
}

impl fmt::Debug for Rulebook {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Rulebook").field("rules", &self.rules).finish()
  }
}
