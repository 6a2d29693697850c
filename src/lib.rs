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

//! # ulog
//!
//! Single-line, color-coded log output. Each line carries up to seven fields: the date, the
//! time, a level label, the origin file, a line value, the function name and the message.
//! Fields are hidden and shown with [`toggle_attr`]; colors, timestamps and buffer limits are
//! set with [`log_init`] or [`logger`].
//!
//! This crate re-exports the logging crate along with the error and configuration crates it
//! is built on, so a single `use ulog::*;` is all that is needed.
//!
//!```
//! use ulog::*;
//!
//! fn transfer(amount: f64) -> Result<(), Error> {
//!     // the `$` prefix renders the line value as an amount: [$transfer19.50]
//!     ulog!(&mut std::io::stdout(), "[LOG]", "$transfer", function_name!(), amount, "sent")?;
//!     Ok(())
//! }
//!
//! fn main() -> Result<(), Error> {
//!     log_init!(DisplayColors(false))?;
//!     log!(file!(), "starting")?;
//!     transfer(19.5)?;
//!     massert!(1 + 1 == 2, "arithmetic");
//!     Ok(())
//! }
//!```

pub use ulog_conf::*;
pub use ulog_err::*;
pub use ulog_log::*;
