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

//! Colored, level-tagged log lines. A line is composed from up to seven attributes (date,
//! time, level, file name, line, function and message), each of which can be hidden with
//! [`crate::Attribute`] toggles. The numeric line value is rendered as an integer, an amount
//! or a fractional number depending on its value and the origin file (see
//! [`crate::LineValue::classify`]).
//!
//! The wrapper macros [`crate::bug`], [`crate::log`], [`crate::error`] and [`crate::warning`]
//! write through the process-wide logger. They capture the enclosing function name and the
//! source line automatically, so only the origin and the message need to be supplied. Each
//! wrapper can be compiled out with a cargo feature (`disable_bug`, `disable_log`,
//! `disable_error`, `disable_warning` or `disable_all`). A disabled wrapper returns `Ok(0)`
//! and does not evaluate its arguments.
//!
//! # Examples
//!
//!```
//! use ulog_err::*;
//! use ulog_log::*;
//!
//! fn main() -> Result<(), Error> {
//!     let amount = 19.5;
//!     log!(file!(), "started with {} workers", 4)?; // stdout
//!     warning!(file!(), "low balance")?; // stderr
//!     ulog!(&mut std::io::stdout(), "[LOG]", "$balance", "main", amount, "ok")?;
//!     Ok(())
//! }
//!```
//!
//! The third line is rendered as an amount because the origin starts with `$`
//! (`[$balance19.50]`). With all attributes visible and colors turned off, the second line
//! looks like this:
//!
//!```text
//! Oct 16 2026 09:12:44 [WARNING] [src/main.rs:7] main low balance
//!```
//!
//! Attributes are toggled on the global logger with [`crate::toggle_attr`]:
//!
//!```
//! use ulog_err::*;
//! use ulog_log::*;
//!
//! fn main() -> Result<(), Error> {
//!     toggle_attr!(DATE)?;
//!     toggle_attr!(TIME)?;
//!     assert!(GlobalLogFunctions::is_disabled(Attribute::Date)?);
//!
//!     log!(file!(), "no timestamp on this line")?;
//!
//!     // toggling again restores the attribute
//!     toggle_attr!(Attribute::Date)?;
//!     assert!(!GlobalLogFunctions::is_disabled(Attribute::Date)?);
//!     Ok(())
//! }
//!```
//!
//! Independent loggers are built with [`crate::logger`] and write to any [`std::io::Write`]:
//!
//!```
//! use ulog_err::*;
//! use ulog_log::*;
//!
//! fn main() -> Result<(), Error> {
//!     let mut logger = logger!(ulog_conf::DisplayColors(false))?;
//!     logger.toggle_attr(Attribute::Date);
//!     logger.toggle_attr(Attribute::Time);
//!
//!     let line = LineValue::classify(3.14, "ratio.rs")?;
//!     let s = logger.format(&Level::Bug, "ratio.rs", "calc", line, format_args!("off"))?;
//!     assert_eq!(s, "[BUG] [ratio.rs:3.140000] calc off");
//!     Ok(())
//! }
//!```

mod attrs;
mod classify;
mod constants;
mod format;
mod log;
mod macros;
mod public;
mod style;
mod types;
mod writer;

pub use crate::constants::{ATTRIBUTE_COUNT, BUILD_DATE, BUILD_TIME, PKG_VERSION};
pub use crate::public::{
	Attribute, AttributeTable, GlobalLogFunctions, Level, LineValue, Log, LoggerBuilder, Stream,
	StreamWriter, Style, ULOG_GLOBAL_LOG,
};

#[doc(hidden)]
pub use ulog_conf::{ConfigOption, ConfigOptionName};
#[doc(hidden)]
pub use ulog_err::Error;
