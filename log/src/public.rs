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

use crate::constants::ATTRIBUTE_COUNT;
use std::fmt::Arguments;
use std::io::Write;
use std::sync::{Arc, RwLock};
use ulog_conf::{ConfigOption, ConfigOptionName};
use ulog_deps::colored::Color;
use ulog_deps::dyn_clone::DynClone;
use ulog_deps::lazy_static::lazy_static;
use ulog_err::*;

/// The fields of a log line, in the order they are written. Each can be hidden or shown with
/// [`crate::Log::toggle_attr`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Attribute {
	/// The build date (or the current date with [`ulog_conf::ConfigOption::RuntimeTimestamp`])
	Date,
	/// The build time (or the current time with [`ulog_conf::ConfigOption::RuntimeTimestamp`])
	Time,
	/// The level label, for example `[LOG]`
	Level,
	/// The origin file
	FileName,
	/// The line value
	Line,
	/// The function name
	Function,
	/// The formatted message
	Message,
}

/// Visibility flags for the 7 [`crate::Attribute`]s. A set flag means the field is disabled.
/// The default table has every field visible.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct AttributeTable {
	pub(crate) disabled: [bool; ATTRIBUTE_COUNT],
}

/// Log levels. The four known levels have fixed labels and styles. Any other label is carried
/// by [`crate::Level::Custom`] and written without color or blink.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub enum Level {
	/// `[BUG]`, bold yellow
	Bug,
	/// `[LOG]`, bold cyan
	Log,
	/// `[ERROR]`, bold red, blinking
	Error,
	/// `[WARNING]`, bold magenta, blinking
	Warning,
	/// Any other label, written verbatim in the neutral style
	Custom(String),
}

/// The numeric part of the origin descriptor.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum LineValue {
	/// A line number, written without a decimal point
	Integer(i64),
	/// An amount, written with exactly 2 decimal places
	Currency(f64),
	/// Any other number, written with 6 decimal places
	Fractional(f64),
}

/// The standard streams used by the level macros.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Stream {
	/// Standard output
	Stdout,
	/// Standard error
	Stderr,
}

/// Named terminal styles. The [`std::fmt::Display`] implementation writes the escape sequence.
///```
/// use ulog_log::Style;
/// use ulog_deps::colored::Color;
///
/// let green = format!("{}Look at me, I'm green!{}", Style::Color(Color::Green), Style::Normal);
/// assert_eq!(green, "\x1B[0;32mLook at me, I'm green!\x1B[0;0m");
///```
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Style {
	/// Reset to the standard color and weight
	Normal,
	/// Standard color, bold
	Bold,
	/// Dark grey
	Dim,
	/// Italics
	Italic,
	/// Underline
	Underline,
	/// Blink
	Blink,
	/// Grey highlight
	Highlight,
	/// Foreground color
	Color(Color),
	/// Foreground color, bold
	BoldColor(Color),
}

/// Builder struct used to build [`crate::Log`] implementations.
pub struct LoggerBuilder {}

/// The [`crate::Log`] trait is the interface to a logger. Each logger owns its configuration
/// and its [`crate::AttributeTable`], so loggers do not share state. Logging can be done
/// either with an individual logger created by a call to the [`crate::logger`] macro...
///```
/// use ulog_err::*;
/// use ulog_log::*;
///
/// fn main() -> Result<(), Error> {
///     let mut logger = logger!(ulog_conf::DisplayColors(false))?;
///     let mut out: Vec<u8> = vec![];
///
///     logger.toggle_attr(Attribute::Date);
///     logger.toggle_attr(Attribute::Time);
///     logger.log(
///         &mut out,
///         &Level::Log,
///         "foo.rs",
///         "main",
///         LineValue::Integer(42),
///         format_args!("hello {}", 7),
///     )?;
///
///     assert_eq!(String::from_utf8(out)?, "[LOG] [foo.rs:42] main hello 7\n");
///     Ok(())
/// }
///```
/// ...or globally using the level macros, which write to the process-wide logger.
///```
/// use ulog_err::*;
/// use ulog_log::*;
///
/// fn main() -> Result<(), Error> {
///     log!(file!(), "this goes to stdout")?;
///     warning!(file!(), "this goes to {}", "stderr")?;
///     Ok(())
/// }
///```
pub trait Log: DynClone {
	/// Compose a line and write it, followed by a newline, to `dest`.
	/// # Input Parameters
	/// * `dest` - the stream to write to.
	/// * `level` - the [`crate::Level`] which selects the label and its style.
	/// * `origin` - the origin file.
	/// * `function` - the function name.
	/// * `line` - the [`crate::LineValue`] of the origin.
	/// * `message` - the message, usually built with [`std::format_args`].
	/// # Return
	/// The number of bytes written, including the newline.
	/// # Errors
	/// [`ulog_err::ErrKind::CapacityExceeded`] - if a field is longer than
	/// [`ulog_conf::ConfigOption::MaxFieldLen`] or the line is longer than
	/// [`ulog_conf::ConfigOption::MaxLineLen`].
	///
	/// [`ulog_err::ErrKind::IO`] - if writing to `dest` fails. The write is not retried.
	fn log(
		&mut self,
		dest: &mut dyn Write,
		level: &Level,
		origin: &str,
		function: &str,
		line: LineValue,
		message: Arguments<'_>,
	) -> Result<usize, Error>;
	/// Compose a line without writing it. The returned string has no trailing newline.
	/// # Errors
	/// [`ulog_err::ErrKind::CapacityExceeded`] - see [`crate::Log::log`].
	fn format(
		&self,
		level: &Level,
		origin: &str,
		function: &str,
		line: LineValue,
		message: Arguments<'_>,
	) -> Result<String, Error>;
	/// Write `Assertion failed: (<condition>)` followed by an [`crate::Level::Error`] record
	/// to `dest`. Returns the total number of bytes written.
	fn log_assertion(
		&mut self,
		dest: &mut dyn Write,
		condition: &str,
		origin: &str,
		function: &str,
		line: LineValue,
		message: Arguments<'_>,
	) -> Result<usize, Error>;
	/// Flip the visibility of `attr`. Toggling twice restores the original visibility.
	fn toggle_attr(&mut self, attr: Attribute);
	/// Returns true if `attr` is currently hidden.
	fn is_disabled(&self, attr: Attribute) -> bool;
	/// Make every attribute visible again.
	fn reset_attrs(&mut self);
	/// Set the specified [`ulog_conf::ConfigOption`].
	/// # Errors
	/// [`ulog_err::ErrKind::Configuration`] - if a length limit is set to 0.
	fn set_config_option(&mut self, value: ConfigOption) -> Result<(), Error>;
	/// Get the current value of the named option.
	fn get_config_option(&self, option: ConfigOptionName) -> Result<ConfigOption, Error>;
}

// used by macros
#[doc(hidden)]
pub struct GlobalLogFunctions {}

//  global logger
lazy_static! {
	#[doc(hidden)]
	pub static ref ULOG_GLOBAL_LOG: Arc<RwLock<Option<Box<dyn Log + Send + Sync>>>> = Arc::new(RwLock::new(None));
}

/// Writes composed lines to a stream.
pub struct StreamWriter<'a> {
	pub(crate) dest: &'a mut dyn Write,
}
