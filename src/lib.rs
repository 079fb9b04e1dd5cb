/* Description: Nondeterministic finite automaton simulation with free moves.

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

//! Nondeterministic finite automaton simulation with free moves.
//!
//! The engine itself lives in [`nfa_sim_automata`] and is re-exported here.
//! This crate adds what is needed to drive it over natural-language words:
//! an [`Alphabet`](alphabet::Alphabet) and a builder for automata that look
//! at the last letter of a word.

#![warn(rustdoc::missing_crate_level_docs)]
// #![warn(missing_docs)]
#![deny(unsafe_code)]
/* Ensure any doctest warnings fails the doctest! */
#![doc(test(attr(deny(warnings))))]

pub use nfa_sim_automata::{
  Automaton, AutomatonError, Rule, Rulebook, Simulation, State, StateSet, Symbol,
};

pub mod alphabet;
pub mod final_letter;
