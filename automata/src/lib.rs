/* Description: Rulebooks, free-move closure and state-set simulation for NFAs.

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

//! Rulebooks, free-move closure and state-set simulation for NFAs.
//!
//! An automaton is described by a [`Rulebook`] of [`Rule`]s, a set of start
//! states and a set of accept states. Every input word is run through its own
//! [`Simulation`], which tracks the set of states the automaton could be in:
//!
//! ```
//! use nfa_sim_automata::{Automaton, Rulebook, State, Symbol};
//!
//! let mut rulebook = Rulebook::new();
//! rulebook.add_rule(State::new(1), Symbol::Char('a'), State::new(2));
//! rulebook.add_rule(State::new(2), Symbol::Epsilon, State::new(3));
//!
//! let automaton = Automaton::new([State::new(1)], [State::new(3)], rulebook);
//! assert!(automaton.evaluate("a"));
//! assert!(!automaton.evaluate("aa"));
//! ```

#![warn(rustdoc::missing_crate_level_docs)]
// #![warn(missing_docs)]
#![deny(unsafe_code)]
/* Ensure any doctest warnings fails the doctest! */
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(not(test), no_std)]

#[cfg(not(test))]
extern crate alloc;

#[allow(unused_imports)]
mod alloc_types {
  /* no_std is enabled except for test environments, so we need to use the
   * special imports from the extern alloc crate. */
  cfg_if::cfg_if! {
    if #[cfg(test)] {
      pub use std::vec::Vec;
    } else {
      pub use ::alloc::vec::Vec;
    }
  }
}

pub mod error;
pub mod rule;
pub mod rulebook;
pub mod simulation;
pub mod state;

pub use error::AutomatonError;
pub use rule::{Rule, Symbol};
pub use rulebook::Rulebook;
pub use simulation::{Automaton, Simulation};
pub use state::{State, StateSet};

/* Evaluation borrows a rulebook read-only, so a finished automaton may be
 * shared across threads evaluating different words. */
static_assertions::assert_impl_all!(Rulebook: Send, Sync, Clone);
static_assertions::assert_impl_all!(Automaton: Send, Sync, Clone);
static_assertions::assert_impl_all!(Simulation<'static>: Send);
