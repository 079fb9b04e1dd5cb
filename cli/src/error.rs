/* Description: Errors reported by the command line tool.

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

use std::io;

use displaydoc::Display;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub enum CliError {
  /// the alphabet must contain at least one letter
  EmptyAlphabet,
  /// failed to write results: {0}
  Io(#[from] io::Error),
}
