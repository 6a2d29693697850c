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

//! Configuration crate used by the logger. Options are passed around as a list of
//! [`crate::ConfigOption`] values which are validated against an allowed and a required set
//! with [`crate::Config::check_config`].
//!
//!```
//! use ulog_conf::*;
//! use ulog_err::*;
//!
//! fn main() -> Result<(), Error> {
//!     let config = config!(DisplayColors(false), MaxLineLen(1_024));
//!     config.check_config(
//!         vec![ConfigOptionName::DisplayColors, ConfigOptionName::MaxLineLen],
//!         vec![],
//!     )?;
//!     assert_eq!(config.get_or_bool(&ConfigOptionName::DisplayColors, true), false);
//!     assert_eq!(config.get_or_usize(&ConfigOptionName::MaxFieldLen, 64), 64);
//!     Ok(())
//! }
//!```

mod config;
mod macros;
mod test;
mod types;

pub use crate::types::{Config, ConfigBuilder, ConfigOption, ConfigOptionName};
pub use crate::ConfigOption::*;
