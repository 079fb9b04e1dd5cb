/* Description: Diagnostic output setup.

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

//! Diagnostic output setup.
//!
//! Everything is written to stderr; stdout only carries accepted words.

use std::io;

use tracing_subscriber::{
  filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::{LogConfig, ENGINE_TARGET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
  /// Multi-line, human readable.
  Pretty,
  /// One line per event.
  Compact,
  /// One JSON object per event.
  Json,
}

pub fn targets(config: &LogConfig) -> Targets {
  Targets::new()
    .with_default(config.global)
    .with_target(ENGINE_TARGET, config.level_for(ENGINE_TARGET))
}

fn format_layer(format: LogFormat) -> Box<dyn Layer<Registry>+Send+Sync> {
  match format {
    LogFormat::Pretty => fmt::layer()
      .pretty()
      .with_target(true)
      .with_writer(io::stderr)
      .boxed(),
    LogFormat::Compact => fmt::layer()
      .compact()
      .with_target(false)
      .without_time()
      .with_writer(io::stderr)
      .boxed(),
    LogFormat::Json => fmt::layer()
      .json()
      .with_target(true)
      .with_writer(io::stderr)
      .boxed(),
  }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(config: &LogConfig) {
  let layer = format_layer(config.format).with_filter(targets(config));
  let _ = tracing_subscriber::registry().with(layer).try_init();
}
