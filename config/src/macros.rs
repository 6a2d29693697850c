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

/// Build a [`crate::Config`] from a comma separated list of [`crate::ConfigOption`]s.
///
///```
/// use ulog_conf::*;
///
/// let config = config!(MaxFieldLen(128), DisplayColors(true));
/// assert_eq!(config.get(&ConfigOptionName::MaxFieldLen), Some(MaxFieldLen(128)));
///```
#[macro_export]
macro_rules! config {
	( $( $config:expr ),* ) => {{
		use $crate::{ConfigBuilder, ConfigOption, ConfigOption::*};
		let mut config_values: Vec<ConfigOption> = vec![];
		$(
			config_values.push($config);
		)*

		ConfigBuilder::build_config(config_values)
	}};
}
