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

use crate::constants::{BUILD_DATE, BUILD_TIME};
use crate::types::{BoundedBuffer, LineFormatter, LogConfig, LogRecord};
use crate::{Attribute, AttributeTable, LineValue, Style};
use std::borrow::Cow;
use std::fmt::Write;
use ulog_deps::chrono::Local;
use ulog_deps::colored::Color;
use ulog_err::*;

impl BoundedBuffer {
	pub(crate) fn new(max: usize) -> Self {
		Self {
			buf: String::new(),
			max,
			overflow: false,
		}
	}
}

impl Write for BoundedBuffer {
	fn write_str(&mut self, s: &str) -> std::fmt::Result {
		if self.buf.len() + s.len() > self.max {
			self.overflow = true;
			return Err(std::fmt::Error);
		}
		self.buf.push_str(s);
		Ok(())
	}
}

impl<'a> LineFormatter<'a> {
	pub(crate) fn new(config: &'a LogConfig, attrs: &'a AttributeTable) -> Self {
		Self { config, attrs }
	}

	pub(crate) fn format(&self, record: &LogRecord<'_>) -> Result<String, Error> {
		self.check_field("level label", record.level.label())?;
		self.check_field("origin file", record.origin)?;
		self.check_field("function name", record.function)?;

		let mut buffer = BoundedBuffer::new(self.config.max_line_len);
		match self.compose(&mut buffer, record) {
			Ok(_) => Ok(buffer.buf),
			Err(_) if buffer.overflow => Err(err!(
				ErrKind::CapacityExceeded,
				"composed line is longer than MaxLineLen ({} bytes)",
				self.config.max_line_len
			)),
			Err(e) => Err(e.into()),
		}
	}

	fn check_field(&self, name: &str, value: &str) -> Result<(), Error> {
		if value.len() > self.config.max_field_len {
			Err(err!(
				ErrKind::CapacityExceeded,
				"{} is {} bytes, MaxFieldLen is {}",
				name,
				value.len(),
				self.config.max_field_len
			))
		} else {
			Ok(())
		}
	}

	// date and time strings for this line
	fn timestamp(&self) -> (Cow<'static, str>, Cow<'static, str>) {
		if self.config.runtime_timestamp {
			let now = Local::now();
			(
				Cow::Owned(now.format("%b %e %Y").to_string()),
				Cow::Owned(now.format("%H:%M:%S").to_string()),
			)
		} else {
			(Cow::Borrowed(BUILD_DATE), Cow::Borrowed(BUILD_TIME))
		}
	}

	fn style(&self, w: &mut BoundedBuffer, style: Style) -> std::fmt::Result {
		if self.config.colors {
			write!(w, "{}", style)?;
		}
		Ok(())
	}

	// segments are written in a fixed order and each one is skipped when its attribute is
	// disabled
	fn compose(&self, w: &mut BoundedBuffer, record: &LogRecord<'_>) -> std::fmt::Result {
		let attrs = self.attrs;
		let (date, time) = self.timestamp();

		if attrs.is_visible(Attribute::Date) {
			self.style(w, Style::Dim)?;
			w.write_str(&date)?;
			self.style(w, Style::Normal)?;
			w.write_str(" ")?;
		}

		if attrs.is_visible(Attribute::Time) {
			self.style(w, Style::Dim)?;
			w.write_str(&time)?;
			self.style(w, Style::Normal)?;
			w.write_str(" ")?;
		}

		if attrs.is_visible(Attribute::Level) {
			let level = record.level;
			if level.blink() {
				self.style(w, Style::Blink)?;
			}
			self.style(w, level.style())?;
			w.write_str(level.label())?;
			self.style(w, Style::Normal)?;
			w.write_str(" ")?;
		}

		let show_file = attrs.is_visible(Attribute::FileName);
		let show_line = attrs.is_visible(Attribute::Line);
		match (show_file, show_line) {
			(true, true) => match record.line {
				// amounts are appended to the origin without a colon
				LineValue::Currency(_) => write!(w, "[{}{}] ", record.origin, record.line)?,
				_ => write!(w, "[{}:{}] ", record.origin, record.line)?,
			},
			(true, false) => write!(w, "[{}] ", record.origin)?,
			(false, true) => write!(w, "[{}] ", record.line)?,
			(false, false) => {}
		}

		let show_function = attrs.is_visible(Attribute::Function);
		let show_message = attrs.is_visible(Attribute::Message);

		if show_function {
			self.style(w, Style::Color(Color::Cyan))?;
			w.write_str(record.function)?;
		}

		if show_function && show_message {
			w.write_str(" ")?;
		}

		if show_message {
			self.style(w, Style::Bold)?;
			w.write_fmt(record.message)?;
			self.style(w, Style::Normal)?;
		}

		Ok(())
	}
}
