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

/// Expands to the name of the enclosing function as a `&'static str`. Closures report the
/// function they are defined in.
///
///```
/// use ulog_log::*;
///
/// fn compute() -> &'static str {
///     function_name!()
/// }
///
/// fn main() {
///     assert_eq!(compute(), "compute");
///     let f = || function_name!();
///     assert_eq!(f(), "main");
/// }
///```
#[macro_export]
macro_rules! function_name {
	() => {{
		fn f() {}
		fn type_name_of<T>(_: T) -> &'static str {
			std::any::type_name::<T>()
		}
		$crate::GlobalLogFunctions::function_name(type_name_of(f))
	}};
}

/// Log a line to any [`std::io::Write`] through the global logger. The level is given as a
/// label (`"[BUG]"`, `"[LOG]"`, `"[ERROR]"`, `"[WARNING]"` or any other text, which is
/// written in the neutral style) or as a [`crate::Level`]. The line value is any number; it
/// is classified with [`crate::LineValue::classify`] against the origin.
///
/// # Input Parameters
/// * `dest` - `&mut` to a [`std::io::Write`].
/// * `level` - the level label or [`crate::Level`].
/// * `origin` - the origin file. A leading `$` renders the line value as an amount.
/// * `function` - the function name.
/// * `line` - the line value.
/// * `args` - the message as with [`std::format`].
/// # Return
/// The number of bytes written including the newline.
/// # Errors
/// [`ulog_err::ErrKind::IllegalArgument`] - if `line` is NaN or infinite.
///
/// [`ulog_err::ErrKind::Overflow`] - if an integral `line` does not fit in an [`i64`].
///
/// [`ulog_err::ErrKind::CapacityExceeded`] - if a field or the line is too long.
///
/// [`ulog_err::ErrKind::IO`] - if the write fails.
/// # Examples
///```
/// use ulog_err::*;
/// use ulog_log::*;
///
/// fn main() -> Result<(), Error> {
///     let mut out: Vec<u8> = vec![];
///     let len = ulog!(&mut out, "[AUDIT]", "$invoice", "bill", 12.5, "paid by {}", "card")?;
///     assert_eq!(len, out.len());
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! ulog {
	($dest:expr, $level:expr, $origin:expr, $function:expr, $line:expr, $($args:tt)*) => {{
		$crate::GlobalLogFunctions::log_to(
			$dest,
			$crate::Level::from($level),
			$origin,
			$function,
			$line as f64,
			format_args!($($args)*),
		)
	}};
}

/// Log at the [`crate::Level::Bug`] level to standard error. The enclosing function name and
/// the source line are filled in. Returns the number of bytes written.
///```
/// use ulog_err::*;
/// use ulog_log::*;
///
/// fn main() -> Result<(), Error> {
///     bug!(file!(), "unexpected state: {}", 3)?;
///     Ok(())
/// }
///```
#[cfg(not(any(feature = "disable_bug", feature = "disable_all")))]
#[macro_export]
macro_rules! bug {
	($origin:expr, $($args:tt)*) => {{
		$crate::GlobalLogFunctions::log(
			$crate::Level::Bug.stream(),
			$crate::Level::Bug,
			$origin,
			$crate::function_name!(),
			line!() as f64,
			format_args!($($args)*),
		)
	}};
}

#[cfg(any(feature = "disable_bug", feature = "disable_all"))]
#[macro_export]
macro_rules! bug {
	($($args:tt)*) => {
		Ok::<usize, $crate::Error>(0)
	};
}

/// Log at the [`crate::Level::Log`] level to standard output. The enclosing function name and
/// the source line are filled in. Returns the number of bytes written.
///```
/// use ulog_err::*;
/// use ulog_log::*;
///
/// fn main() -> Result<(), Error> {
///     log!(file!(), "listening on port {}", 8080)?;
///     Ok(())
/// }
///```
#[cfg(not(any(feature = "disable_log", feature = "disable_all")))]
#[macro_export]
macro_rules! log {
	($origin:expr, $($args:tt)*) => {{
		$crate::GlobalLogFunctions::log(
			$crate::Level::Log.stream(),
			$crate::Level::Log,
			$origin,
			$crate::function_name!(),
			line!() as f64,
			format_args!($($args)*),
		)
	}};
}

#[cfg(any(feature = "disable_log", feature = "disable_all"))]
#[macro_export]
macro_rules! log {
	($($args:tt)*) => {
		Ok::<usize, $crate::Error>(0)
	};
}

/// Log at the [`crate::Level::Error`] level to standard error. The label blinks when colors
/// are enabled.
#[cfg(not(any(feature = "disable_error", feature = "disable_all")))]
#[macro_export]
macro_rules! error {
	($origin:expr, $($args:tt)*) => {{
		$crate::GlobalLogFunctions::log(
			$crate::Level::Error.stream(),
			$crate::Level::Error,
			$origin,
			$crate::function_name!(),
			line!() as f64,
			format_args!($($args)*),
		)
	}};
}

#[cfg(any(feature = "disable_error", feature = "disable_all"))]
#[macro_export]
macro_rules! error {
	($($args:tt)*) => {
		Ok::<usize, $crate::Error>(0)
	};
}

/// Log at the [`crate::Level::Warning`] level to standard error. The label blinks when colors
/// are enabled.
#[cfg(not(any(feature = "disable_warning", feature = "disable_all")))]
#[macro_export]
macro_rules! warning {
	($origin:expr, $($args:tt)*) => {{
		$crate::GlobalLogFunctions::log(
			$crate::Level::Warning.stream(),
			$crate::Level::Warning,
			$origin,
			$crate::function_name!(),
			line!() as f64,
			format_args!($($args)*),
		)
	}};
}

#[cfg(any(feature = "disable_warning", feature = "disable_all"))]
#[macro_export]
macro_rules! warning {
	($($args:tt)*) => {
		Ok::<usize, $crate::Error>(0)
	};
}

/// Abort the process if `cond` is false. Before aborting, `Assertion failed: (<cond>)` and an
/// [`crate::Level::Error`] record carrying the optional message are written to standard
/// error. Like [`std::debug_assert`], the condition is only evaluated when
/// `debug_assertions` are enabled.
///```
/// use ulog_log::*;
///
/// fn main() {
///     let workers = 4;
///     massert!(workers > 0, "need at least one worker, got {}", workers);
///     massert!(workers % 2 == 0);
/// }
///```
#[macro_export]
macro_rules! massert {
	($cond:expr) => {
		$crate::massert!($cond, "")
	};
	($cond:expr, $($args:tt)*) => {{
		if cfg!(debug_assertions) && !$cond {
			let _ = $crate::GlobalLogFunctions::assertion_failed(
				stringify!($cond),
				file!(),
				$crate::function_name!(),
				line!(),
				format_args!($($args)*),
			);
			std::process::abort();
		}
	}};
}

/// [`crate::massert`] that `opt` is [`Some`], with a message naming the expression.
#[macro_export]
macro_rules! massert_some {
	($opt:expr) => {
		$crate::massert!(
			($opt).is_some(),
			"['{}' was found to be None - '{}' must be Some to continue.]",
			stringify!($opt),
			stringify!($opt)
		)
	};
}

/// Flip the visibility of an attribute on the global logger. The attribute is either a
/// [`crate::Attribute`] or one of the names `DATE`, `TIME`, `LEVEL`, `FILENAME`, `LINE`,
/// `FUNCTION` and `MESSAGE`.
///```
/// use ulog_err::*;
/// use ulog_log::*;
///
/// fn main() -> Result<(), Error> {
///     toggle_attr!(FILENAME)?;
///     toggle_attr!(Attribute::Line)?;
///     // no origin segment on this line
///     log!(file!(), "quiet origin")?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! toggle_attr {
	(DATE) => {
		$crate::toggle_attr!($crate::Attribute::Date)
	};
	(TIME) => {
		$crate::toggle_attr!($crate::Attribute::Time)
	};
	(LEVEL) => {
		$crate::toggle_attr!($crate::Attribute::Level)
	};
	(FILENAME) => {
		$crate::toggle_attr!($crate::Attribute::FileName)
	};
	(LINE) => {
		$crate::toggle_attr!($crate::Attribute::Line)
	};
	(FUNCTION) => {
		$crate::toggle_attr!($crate::Attribute::Function)
	};
	(MESSAGE) => {
		$crate::toggle_attr!($crate::Attribute::Message)
	};
	($attr:expr) => {{
		$crate::GlobalLogFunctions::toggle_attr($attr)
	}};
}

/// Initialize the global logger with the specified [`ulog_conf::ConfigOption`]s. This must
/// be called before the global logger is first used, otherwise the defaults are in effect.
/// # Errors
/// [`ulog_err::ErrKind::Log`] - if the global logger was already initialized.
///
/// [`ulog_err::ErrKind::Configuration`] - if an option is specified more than once or a
/// length limit is 0.
///```
/// use ulog_err::*;
/// use ulog_log::*;
///
/// fn main() -> Result<(), Error> {
///     log_init!(DisplayColors(false), MaxLineLen(256))?;
///     log!(file!(), "plain text")?;
///     assert_eq!(get_log_option!(MaxLineLen)?, ulog_conf::MaxLineLen(256));
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! log_init {
	($($config:tt)*) => {{
		#[allow(unused_imports)]
		use $crate::ConfigOption::*;
		let v: Vec<$crate::ConfigOption> = vec![$($config)*];
		$crate::GlobalLogFunctions::init(v)
	}};
}

/// Call [`crate::Log::set_config_option`] on the global logger.
#[macro_export]
macro_rules! set_log_option {
	($option:expr) => {{
		#[allow(unused_imports)]
		use $crate::ConfigOption::*;
		$crate::GlobalLogFunctions::set_log_option($option)
	}};
}

/// Call [`crate::Log::get_config_option`] on the global logger.
#[macro_export]
macro_rules! get_log_option {
	($option:expr) => {{
		#[allow(unused_imports)]
		use $crate::ConfigOptionName::*;
		$crate::GlobalLogFunctions::get_log_option($option)
	}};
}

/// Build an independent logger. Returns `Result<impl Log + Send + Sync, Error>`.
///```
/// use ulog_err::*;
/// use ulog_log::*;
///
/// fn main() -> Result<(), Error> {
///     let mut logger = logger!(DisplayColors(false), RuntimeTimestamp(true))?;
///     logger.toggle_attr(Attribute::Function);
///     let mut out: Vec<u8> = vec![];
///     logger.log(&mut out, &Level::Warning, "a.rs", "", LineValue::Integer(1), format_args!("x"))?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! logger {
	($($config:tt)*) => {{
		#[allow(unused_imports)]
		use $crate::ConfigOption::*;
		let v: Vec<$crate::ConfigOption> = vec![$($config)*];
		$crate::LoggerBuilder::build_logger(v)
	}};
}
