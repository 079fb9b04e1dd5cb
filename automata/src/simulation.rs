/* Description: Running words through an automaton.

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

//! Running words through an automaton.
//!
//! An [`Automaton`] is the definition: start states, accept states and a
//! [`Rulebook`]. A [`Simulation`] is one pass of one input over that
//! definition. Simulations borrow the automaton, so the definition cannot be
//! edited while any of them is alive.

use tracing::{debug, trace};

use crate::{
  rule::Symbol,
  rulebook::Rulebook,
  state::{State, StateSet},
};

/// The set of states an automaton may be in after reading some prefix of its
/// input.
///
/// Rejection is never explicit: a simulation rejects whenever
/// [`Self::is_accepting()`] is false, including once it has become stuck with
/// no current states at all.
#[derive(Clone, Debug)]
pub struct Simulation<'r> {
  current: StateSet,
  accept: &'r StateSet,
  rulebook: &'r Rulebook,
}

impl<'r> Simulation<'r> {
  /// Start from the free-move closure of `start`.
  pub fn new(start: &StateSet, accept: &'r StateSet, rulebook: &'r Rulebook) -> Self {
    Self {
      current: rulebook.epsilon_closure(start),
      accept,
      rulebook,
    }
  }

  pub fn current_states(&self) -> &StateSet { &self.current }

  /// Whether no state is left. Nothing read afterwards can change that.
  pub fn is_stuck(&self) -> bool { self.current.is_empty() }

  pub fn read_symbol(&mut self, c: char) {
    if self.is_stuck() {
      return;
    }
    let moved = self.rulebook.next_states(&self.current, Symbol::Char(c));
    self.current = self.rulebook.epsilon_closure(&moved);
    trace!(symbol = %c, current = ?self.current, "read symbol");
  }

  pub fn read_string(&mut self, s: &str) {
    for c in s.chars() {
      self.read_symbol(c);
    }
  }

  pub fn is_accepting(&self) -> bool { self.current.intersects(self.accept) }
}

/// A complete automaton definition.
#[derive(Clone, Debug, Default)]
pub struct Automaton {
  start: StateSet,
  accept: StateSet,
  rulebook: Rulebook,
}

impl Automaton {
  pub fn new(
    start: impl IntoIterator<Item=State>,
    accept: impl IntoIterator<Item=State>,
    rulebook: Rulebook,
  ) -> Self {
    Self {
      start: start.into_iter().collect(),
      accept: accept.into_iter().collect(),
      rulebook,
    }
  }

  pub fn start_states(&self) -> &StateSet { &self.start }

  pub fn accept_states(&self) -> &StateSet { &self.accept }

  pub fn rulebook(&self) -> &Rulebook { &self.rulebook }

  pub fn add_rule(&mut self, from: State, on: impl Into<Symbol>, to: State) {
    self.rulebook.add_rule(from, on, to);
  }

  /// Returns whether `state` was not already accepting.
  pub fn add_accept_state(&mut self, state: State) -> bool { self.accept.insert(state) }

  /// Returns whether `state` was accepting.
  pub fn remove_accept_state(&mut self, state: State) -> bool { self.accept.remove(state) }

  /// A new simulation positioned before the first input symbol.
  pub fn simulation(&self) -> Simulation<'_> {
    Simulation::new(&self.start, &self.accept, &self.rulebook)
  }

  /// Whether the automaton accepts `word`.
  ///
  /// Every call runs on a fresh [`Simulation`], so the result never depends
  /// on which words were evaluated before.
  pub fn evaluate(&self, word: &str) -> bool {
    let mut sim = self.simulation();
    sim.read_string(word);
    let accepted = sim.is_accepting();
    debug!(word, accepted, "evaluated word");
    accepted
  }

  /// The accepted members of `words`, in their original order.
  pub fn matching_words<'s, S, I>(&'s self, words: I) -> impl Iterator<Item=S>+'s
  where
    S: AsRef<str>+'s,
    I: IntoIterator<Item=S>+'s,
  {
    words
      .into_iter()
      .filter(move |word| self.evaluate(word.as_ref()))
  }
}

#[cfg(test)]
mod test {
  use proptest::prelude::*;

  use super::*;

  fn s(x: usize) -> State { State::new(x) }

  /// Accepts words over {a, b} whose third-to-last letter is `b`, with a
  /// free move thrown in between the last two letters' states.
  fn third_from_last_b() -> Automaton {
    let mut rb = Rulebook::new();
    rb.add_rule(s(1), 'a', s(1));
    rb.add_rule(s(1), 'b', s(1));
    rb.add_rule(s(1), 'b', s(2));
    rb.add_rule(s(2), 'a', s(3));
    rb.add_rule(s(2), 'b', s(3));
    rb.add_rule(s(3), Symbol::Epsilon, s(5));
    rb.add_rule(s(5), 'a', s(4));
    rb.add_rule(s(5), 'b', s(4));
    Automaton::new([s(1)], [s(4)], rb)
  }

  #[test]
  fn nondeterministic_acceptance() {
    let nfa = third_from_last_b();
    assert!(nfa.evaluate("bab"));
    assert!(nfa.evaluate("bbbbb"));
    assert!(nfa.evaluate("abbab"));
    assert!(!nfa.evaluate("bbabb"));
    assert!(!nfa.evaluate("ab"));
    assert!(!nfa.evaluate(""));
  }

  #[test]
  fn simulation_steps() {
    let nfa = third_from_last_b();
    let mut sim = nfa.simulation();
    assert_eq!(sim.current_states(), &StateSet::from([s(1)]));
    sim.read_symbol('b');
    assert_eq!(sim.current_states(), &StateSet::from([s(1), s(2)]));
    sim.read_symbol('b');
    assert_eq!(sim.current_states(), &StateSet::from([s(1), s(2), s(3), s(5)]));
    assert!(!sim.is_accepting());
    sim.read_symbol('a');
    assert!(sim.is_accepting());
  }

  #[test]
  fn start_states_are_closed() {
    let mut rb = Rulebook::new();
    rb.add_rule(s(0), Symbol::Epsilon, s(1));
    rb.add_rule(s(1), Symbol::Epsilon, s(2));
    let nfa = Automaton::new([s(0)], [s(2)], rb);
    assert_eq!(nfa.simulation().current_states(), &StateSet::from([s(0), s(1), s(2)]));
    assert!(nfa.evaluate(""));
  }

  #[test]
  fn unknown_symbols_get_stuck() {
    let nfa = third_from_last_b();
    let mut sim = nfa.simulation();
    sim.read_string("bz");
    assert!(sim.is_stuck());
    sim.read_string("bab");
    assert!(sim.is_stuck());
    assert!(!sim.is_accepting());
    assert!(!nfa.evaluate("bzab"));
  }

  #[test]
  fn dead_states_are_legal() {
    let mut rb = Rulebook::new();
    rb.add_rule(s(1), 'x', s(2));
    let nfa = Automaton::new([s(1), s(100)], [s(2), s(200)], rb);
    assert!(nfa.evaluate("x"));
    assert!(!nfa.evaluate("xx"));
  }

  #[test]
  fn accept_states_change_between_runs() {
    let mut nfa = third_from_last_b();
    assert!(!nfa.evaluate("b"));
    assert!(nfa.add_accept_state(s(2)));
    assert!(!nfa.add_accept_state(s(2)));
    assert!(nfa.evaluate("b"));
    assert!(nfa.remove_accept_state(s(2)));
    assert!(!nfa.remove_accept_state(s(2)));
    assert!(!nfa.evaluate("b"));
  }

  #[test]
  fn runs_do_not_leak_into_each_other() {
    let nfa = third_from_last_b();
    let words = ["bab", "a", "bbb", "", "aab", "baa"];
    let forward: Vec<bool> = words.iter().map(|w| nfa.evaluate(w)).collect();
    let mut backward: Vec<bool> = words.iter().rev().map(|w| nfa.evaluate(w)).collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(forward, vec![true, false, true, false, false, true]);
  }

  #[test]
  fn matching_words_keeps_order() {
    let nfa = third_from_last_b();
    let words = vec![
      "baa".to_string(),
      "a".to_string(),
      "bba".to_string(),
      "abb".to_string(),
    ];
    let matched: Vec<String> = nfa.matching_words(words).collect();
    assert_eq!(matched, vec!["baa".to_string(), "bba".to_string()]);

    let borrowed = ["bab", "ab"];
    assert_eq!(nfa.matching_words(borrowed.iter()).collect::<Vec<_>>(), vec![
      &"bab"
    ]);
  }

  #[test]
  fn shared_across_threads() {
    let nfa = third_from_last_b();
    let words = ["bab", "aaa", "babab", "bbbbb", "abba"];
    let expected: Vec<bool> = words.iter().map(|w| nfa.evaluate(w)).collect();
    let nfa = &nfa;
    let results: Vec<bool> = std::thread::scope(|scope| {
      let handles: Vec<_> = words
        .iter()
        .map(|w| scope.spawn(move || nfa.evaluate(w)))
        .collect();
      handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
  }

  fn arb_word() -> impl Strategy<Value=String> { "[abc]{0,8}" }

  proptest! {
    #[test]
    fn evaluation_is_deterministic(word in arb_word()) {
      let nfa = third_from_last_b();
      prop_assert_eq!(nfa.evaluate(&word), nfa.evaluate(&word));
    }

    #[test]
    fn evaluation_order_is_irrelevant(first in arb_word(), second in arb_word()) {
      let nfa = third_from_last_b();
      let a1 = nfa.evaluate(&first);
      let b1 = nfa.evaluate(&second);
      let b2 = nfa.evaluate(&second);
      let a2 = nfa.evaluate(&first);
      prop_assert_eq!((a1, b1), (a2, b2));
    }

    #[test]
    fn accept_order_is_irrelevant(
      word in arb_word(),
      accept in prop::collection::vec(0usize..6, 0..6),
    ) {
      let rules = third_from_last_b().rulebook().clone();
      let forward = Automaton::new([s(1)], accept.iter().copied().map(State::new), rules.clone());
      let backward = Automaton::new([s(1)], accept.iter().rev().copied().map(State::new), rules);
      prop_assert_eq!(forward.evaluate(&word), backward.evaluate(&word));
    }

    #[test]
    fn matches_iff_third_from_last_is_b(word in arb_word()) {
      let chars: Vec<char> = word.chars().collect();
      let expected = chars.len() >= 3
        && chars[chars.len() - 3] == 'b'
        && chars.iter().all(|&c| c != 'c');
      prop_assert_eq!(third_from_last_b().evaluate(&word), expected);
    }
  }
}
