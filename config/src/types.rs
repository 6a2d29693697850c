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

use std::collections::HashMap;
use ulog_err::Error;

/// Configuration lookup and validation.
pub trait Config {
	/// Returns the option with the specified name, if it was specified.
	fn get(&self, name: &ConfigOptionName) -> Option<ConfigOption>;
	/// Returns the boolean value of the named option or `default` if it was not specified.
	fn get_or_bool(&self, name: &ConfigOptionName, default: bool) -> bool;
	/// Returns the usize value of the named option or `default` if it was not specified.
	fn get_or_usize(&self, name: &ConfigOptionName, default: usize) -> usize;
	/// Checks that every specified option is in `allowed`, that no option is specified more
	/// than once, and that everything in `required` was specified.
	/// # Errors
	/// [`ulog_err::ErrKind::Configuration`] - if any of those checks fail.
	fn check_config(
		&self,
		allowed: Vec<ConfigOptionName>,
		required: Vec<ConfigOptionName>,
	) -> Result<(), Error>;
}

/// Names of the configuration options. Used to look up and validate [`crate::ConfigOption`]s.
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum ConfigOptionName {
	DisplayColors,
	RuntimeTimestamp,
	MaxLineLen,
	MaxFieldLen,
}

/// Configuration options.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum ConfigOption {
	/// Emit terminal escape sequences. The default is true.
	DisplayColors(bool),
	/// Use the current local time for the date and time fields instead of the build date and
	/// time. The default is false.
	RuntimeTimestamp(bool),
	/// The maximum length in bytes of a composed line (excluding the newline).
	MaxLineLen(usize),
	/// The maximum length in bytes of the level label, the origin file and the function name.
	MaxFieldLen(usize),
}

pub struct ConfigBuilder {}

#[derive(Clone, Debug)]
pub(crate) struct ConfigImpl {
	pub(crate) configs: Vec<ConfigOption>,
	pub(crate) hash: HashMap<ConfigOptionName, ConfigOption>,
}
