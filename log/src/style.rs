// Copyright (c) 2024, The ulog Developers
// Some code and concepts from:
// * BitcoinMW: https://github.com/bitcoinmw/bitcoinmw
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::constants::*;
use crate::{Level, Stream, Style};
use std::fmt::{Display, Formatter};
use ulog_deps::colored::Color;

impl Display for Style {
	fn fmt(&self, w: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			Style::Normal => write!(w, "{}0;0m", ESCAPE_PREFIX),
			Style::Bold => write!(w, "{}0;1m", ESCAPE_PREFIX),
			Style::Dim => write!(w, "{}0;2m", ESCAPE_PREFIX),
			Style::Italic => write!(w, "{}0;3m", ESCAPE_PREFIX),
			Style::Underline => write!(w, "{}0;4m", ESCAPE_PREFIX),
			Style::Blink => write!(w, "{}0;5m", ESCAPE_PREFIX),
			Style::Highlight => write!(w, "{}0;7m", ESCAPE_PREFIX),
			Style::Color(c) => write!(w, "{}0;{}m", ESCAPE_PREFIX, c.to_fg_str()),
			Style::BoldColor(c) => write!(w, "{}1;{}m", ESCAPE_PREFIX, c.to_fg_str()),
		}
	}
}

impl Level {
	/// Map a label to a level. The known labels are checked in the order `[BUG]`, `[LOG]`,
	/// `[ERROR]`, `[WARNING]`; anything else becomes [`crate::Level::Custom`].
	pub fn from_label(label: &str) -> Self {
		match label {
			BUG_LABEL => Level::Bug,
			LOG_LABEL => Level::Log,
			ERROR_LABEL => Level::Error,
			WARNING_LABEL => Level::Warning,
			_ => Level::Custom(label.to_string()),
		}
	}

	/// The label written in the level field.
	pub fn label(&self) -> &str {
		match self {
			Level::Bug => BUG_LABEL,
			Level::Log => LOG_LABEL,
			Level::Error => ERROR_LABEL,
			Level::Warning => WARNING_LABEL,
			Level::Custom(label) => label,
		}
	}

	/// The color style of the label.
	pub fn style(&self) -> Style {
		match self {
			Level::Bug => Style::BoldColor(Color::Yellow),
			Level::Log => Style::BoldColor(Color::Cyan),
			Level::Error => Style::BoldColor(Color::Red),
			Level::Warning => Style::BoldColor(Color::Magenta),
			Level::Custom(_) => Style::Normal,
		}
	}

	/// Whether the label blinks.
	pub fn blink(&self) -> bool {
		matches!(self, Level::Error | Level::Warning)
	}

	/// The stream the level macros write to.
	pub fn stream(&self) -> Stream {
		match self {
			Level::Log | Level::Custom(_) => Stream::Stdout,
			Level::Bug | Level::Error | Level::Warning => Stream::Stderr,
		}
	}
}

impl From<&str> for Level {
	fn from(label: &str) -> Self {
		Level::from_label(label)
	}
}

impl From<String> for Level {
	fn from(label: String) -> Self {
		Level::from_label(&label)
	}
}

impl Display for Level {
	fn fmt(&self, w: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(w, "{}", self.label())
	}
}
