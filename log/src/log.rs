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
use crate::types::{LineFormatter, LogConfig, LogImpl, LogRecord};
use crate::{
	Attribute, AttributeTable, GlobalLogFunctions, Level, LineValue, Log, LoggerBuilder, Stream,
	StreamWriter, ULOG_GLOBAL_LOG,
};
use std::fmt::Arguments;
use std::io::{stderr, stdout, Write};
use ulog_conf::*;
use ulog_deps::dyn_clone::clone_box;
use ulog_err::*;

impl LoggerBuilder {
	/// Build a logger with the specified options. Unspecified options use their defaults.
	/// # Errors
	/// [`ulog_err::ErrKind::Configuration`] - if an option is specified more than once or a
	/// length limit is 0.
	pub fn build_logger(configs: Vec<ConfigOption>) -> Result<impl Log + Send + Sync, Error> {
		LogImpl::new(configs)
	}

	/// Same as [`crate::LoggerBuilder::build_logger`], but boxed.
	pub fn build_log(configs: Vec<ConfigOption>) -> Result<Box<dyn Log + Send + Sync>, Error> {
		Ok(Box::new(LogImpl::new(configs)?))
	}
}

impl GlobalLogFunctions {
	/// Classify `line` against `origin` and log to the specified standard stream through the
	/// global logger.
	pub fn log(
		stream: Stream,
		level: Level,
		origin: &str,
		function: &str,
		line: f64,
		message: Arguments<'_>,
	) -> Result<usize, Error> {
		match stream {
			Stream::Stdout => {
				let out = stdout();
				let mut handle = out.lock();
				Self::log_to(&mut handle, level, origin, function, line, message)
			}
			Stream::Stderr => {
				let out = stderr();
				let mut handle = out.lock();
				Self::log_to(&mut handle, level, origin, function, line, message)
			}
		}
	}

	/// Classify `line` against `origin` and log to `dest` through the global logger.
	pub fn log_to(
		dest: &mut dyn Write,
		level: Level,
		origin: &str,
		function: &str,
		line: f64,
		message: Arguments<'_>,
	) -> Result<usize, Error> {
		let line = LineValue::classify(line, origin)?;
		let mut logger = Self::snapshot()?;
		logger.log(dest, &level, origin, function, line, message)
	}

	/// Compose a line with the global logger without writing it.
	pub fn format(
		level: Level,
		origin: &str,
		function: &str,
		line: f64,
		message: Arguments<'_>,
	) -> Result<String, Error> {
		let line = LineValue::classify(line, origin)?;
		Self::snapshot()?.format(&level, origin, function, line, message)
	}

	/// Report a failed assertion on standard error. The error record is skipped when the
	/// `error!` macro is compiled out.
	pub fn assertion_failed(
		condition: &str,
		origin: &str,
		function: &str,
		line: u32,
		message: Arguments<'_>,
	) -> Result<usize, Error> {
		let out = stderr();
		let mut handle = out.lock();
		if cfg!(any(feature = "disable_error", feature = "disable_all")) {
			let text = format!("{}{})", ASSERTION_FAILED_PREFIX, condition);
			return StreamWriter::new(&mut handle).write_line(&text);
		}
		let line = LineValue::from(line);
		let mut logger = Self::snapshot()?;
		logger.log_assertion(&mut handle, condition, origin, function, line, message)
	}

	pub fn init(values: Vec<ConfigOption>) -> Result<(), Error> {
		let mut log = ULOG_GLOBAL_LOG.write()?;
		if (*log).is_some() {
			let text = "global logger has already been initialized";
			return Err(err!(ErrKind::Log, text));
		}
		(*log) = Some(LoggerBuilder::build_log(values)?);
		Ok(())
	}

	pub fn toggle_attr(attr: Attribute) -> Result<(), Error> {
		Self::with_logger(|logger| {
			logger.toggle_attr(attr);
			Ok(())
		})
	}

	pub fn is_disabled(attr: Attribute) -> Result<bool, Error> {
		Self::with_logger(|logger| Ok(logger.is_disabled(attr)))
	}

	pub fn reset_attrs() -> Result<(), Error> {
		Self::with_logger(|logger| {
			logger.reset_attrs();
			Ok(())
		})
	}

	pub fn set_log_option(option: ConfigOption) -> Result<(), Error> {
		Self::with_logger(|logger| logger.set_config_option(option))
	}

	pub fn get_log_option(option: ConfigOptionName) -> Result<ConfigOption, Error> {
		Self::with_logger(|logger| logger.get_config_option(option))
	}

	/// Reduce a `type_name` path such as `my_crate::main::{{closure}}::f` to the name of the
	/// enclosing function (`main`). Used by [`crate::function_name`].
	pub fn function_name(path: &'static str) -> &'static str {
		let path = path.strip_suffix("::f").unwrap_or(path);
		match path.rsplit("::").find(|segment| *segment != "{{closure}}") {
			Some(name) => name,
			None => path,
		}
	}

	// Copy of the global logger. Message arguments run caller code, so lines are composed
	// and written from the copy after the lock is released.
	fn snapshot() -> Result<Box<dyn Log + Send + Sync>, Error> {
		{
			let log = ULOG_GLOBAL_LOG.read()?;
			if let Some(logger) = (*log).as_ref() {
				return Ok(clone_box(&**logger));
			}
		}
		Self::with_logger(|logger| Ok(clone_box(&**logger)))
	}

	// run `f` against the global logger under the write lock, creating the logger with
	// default options if needed. `f` must not run caller code.
	fn with_logger<F, R>(f: F) -> Result<R, Error>
	where
		F: FnOnce(&mut Box<dyn Log + Send + Sync>) -> Result<R, Error>,
	{
		let mut log = ULOG_GLOBAL_LOG.write()?;
		if (*log).is_none() {
			(*log) = Some(LoggerBuilder::build_log(vec![])?);
		}
		match (*log).as_mut() {
			Some(logger) => f(logger),
			None => Err(err!(ErrKind::Log, "global logger has not been initialized")),
		}
	}
}

impl Log for LogImpl {
	fn log(
		&mut self,
		dest: &mut dyn Write,
		level: &Level,
		origin: &str,
		function: &str,
		line: LineValue,
		message: Arguments<'_>,
	) -> Result<usize, Error> {
		let text = self.format(level, origin, function, line, message)?;
		StreamWriter::new(dest).write_line(&text)
	}

	fn format(
		&self,
		level: &Level,
		origin: &str,
		function: &str,
		line: LineValue,
		message: Arguments<'_>,
	) -> Result<String, Error> {
		let record = LogRecord {
			level,
			origin,
			function,
			line,
			message,
		};
		LineFormatter::new(&self.config, &self.attrs).format(&record)
	}

	fn log_assertion(
		&mut self,
		dest: &mut dyn Write,
		condition: &str,
		origin: &str,
		function: &str,
		line: LineValue,
		message: Arguments<'_>,
	) -> Result<usize, Error> {
		let text = format!("{}{})", ASSERTION_FAILED_PREFIX, condition);
		let written = StreamWriter::new(dest).write_line(&text)?;
		Ok(written + self.log(dest, &Level::Error, origin, function, line, message)?)
	}

	fn toggle_attr(&mut self, attr: Attribute) {
		self.attrs.toggle(attr);
	}

	fn is_disabled(&self, attr: Attribute) -> bool {
		self.attrs.is_disabled(attr)
	}

	fn reset_attrs(&mut self) {
		self.attrs.reset();
	}

	fn set_config_option(&mut self, value: ConfigOption) -> Result<(), Error> {
		match value {
			DisplayColors(v) => self.config.colors = v,
			RuntimeTimestamp(v) => self.config.runtime_timestamp = v,
			MaxLineLen(v) => self.config.max_line_len = LogConfig::check_len(MaxLineLen(v))?,
			MaxFieldLen(v) => self.config.max_field_len = LogConfig::check_len(MaxFieldLen(v))?,
		}
		Ok(())
	}

	fn get_config_option(&self, option: ConfigOptionName) -> Result<ConfigOption, Error> {
		use ulog_conf::ConfigOptionName as CN;
		Ok(match option {
			CN::DisplayColors => DisplayColors(self.config.colors),
			CN::RuntimeTimestamp => RuntimeTimestamp(self.config.runtime_timestamp),
			CN::MaxLineLen => MaxLineLen(self.config.max_line_len),
			CN::MaxFieldLen => MaxFieldLen(self.config.max_field_len),
		})
	}
}

impl LogImpl {
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Result<Self, Error> {
		let config = LogConfig::new(configs)?;
		let attrs = AttributeTable::default();
		Ok(Self { config, attrs })
	}
}

impl LogConfig {
	// create the log config based on the specified data
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Result<Self, Error> {
		use ulog_conf::ConfigOptionName as CN;
		let config = ConfigBuilder::build_config(configs);
		config.check_config(
			vec![
				CN::DisplayColors,
				CN::RuntimeTimestamp,
				CN::MaxLineLen,
				CN::MaxFieldLen,
			],
			vec![],
		)?;

		let max_line_len = config.get_or_usize(&CN::MaxLineLen, DEFAULT_MAX_LINE_LEN);
		let max_field_len = config.get_or_usize(&CN::MaxFieldLen, DEFAULT_MAX_FIELD_LEN);
		Ok(Self {
			colors: config.get_or_bool(&CN::DisplayColors, true),
			runtime_timestamp: config.get_or_bool(&CN::RuntimeTimestamp, false),
			max_line_len: Self::check_len(MaxLineLen(max_line_len))?,
			max_field_len: Self::check_len(MaxFieldLen(max_field_len))?,
		})
	}

	// length limits must leave room for at least one byte
	fn check_len(option: ConfigOption) -> Result<usize, Error> {
		match option {
			MaxLineLen(0) | MaxFieldLen(0) => Err(err!(
				ErrKind::Configuration,
				"{:?} must be greater than 0",
				option.name()
			)),
			MaxLineLen(v) | MaxFieldLen(v) => Ok(v),
			_ => Err(err!(
				ErrKind::Configuration,
				"{:?} is not a length option",
				option.name()
			)),
		}
	}
}
