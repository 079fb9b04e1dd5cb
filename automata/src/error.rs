/* Description: Error types for automaton evaluation.

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

//! Error types for automaton evaluation.

use displaydoc::Display;
use thiserror::Error;

/// Failures of internal invariants while evaluating an automaton.
///
/// Unknown input symbols and unreachable states are not errors: they only
/// make a word fail to match.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonError {
  /// epsilon closure did not reach a fixed point within {limit} rounds
  ClosureDiverged { limit: usize },
}
