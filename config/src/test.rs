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

#[cfg(test)]
mod test {
	use crate::{config, Config, ConfigBuilder, ConfigOption, ConfigOption::*, ConfigOptionName as CN};
	use ulog_err::*;

	#[test]
	fn test_config_basic() -> Result<(), Error> {
		let config = ConfigBuilder::build_config(vec![ConfigOption::MaxLineLen(1_000)]);
		assert_eq!(config.get(&CN::MaxLineLen), Some(ConfigOption::MaxLineLen(1_000)));

		assert_eq!(config.get(&CN::MaxFieldLen), None);

		// ok because MaxLineLen is allowed
		assert!(config.check_config(vec![CN::MaxLineLen], vec![]).is_ok());

		// err because MaxLineLen is not allowed
		assert!(config.check_config(vec![CN::MaxFieldLen], vec![]).is_err());

		// ok because MaxLineLen is allowed
		assert!(config
			.check_config(vec![CN::DisplayColors, CN::MaxLineLen], vec![])
			.is_ok());

		let config = ConfigBuilder::build_config(vec![
			ConfigOption::MaxLineLen(1_000),
			ConfigOption::MaxLineLen(100),
		]);

		// err because it's a duplicate
		let res = config.check_config(vec![CN::MaxLineLen], vec![]);
		assert!(matches!(
			res.unwrap_err().kind(),
			ErrorKind::Configuration(_)
		));

		let config = ConfigBuilder::build_config(vec![ConfigOption::MaxLineLen(100)]);

		// ok because it's both allowed and required and specified
		assert!(config
			.check_config(vec![CN::MaxLineLen], vec![CN::MaxLineLen])
			.is_ok());

		// err because MaxFieldLen is not specified and it's required
		assert!(config
			.check_config(vec![CN::MaxLineLen], vec![CN::MaxFieldLen])
			.is_err());

		Ok(())
	}

	#[test]
	fn test_config_macros() -> Result<(), Error> {
		let config = config!(RuntimeTimestamp(true), DisplayColors(false));

		assert_eq!(config.get(&CN::RuntimeTimestamp), Some(RuntimeTimestamp(true)));

		// ok because the two values set are allowed
		assert!(config
			.check_config(vec![CN::RuntimeTimestamp, CN::DisplayColors], vec![])
			.is_ok());

		// not allowed
		assert!(config.check_config(vec![CN::DisplayColors], vec![]).is_err());

		let config = config!();
		assert!(config.check_config(vec![], vec![]).is_ok());
		assert_eq!(config.get(&CN::DisplayColors), None);

		Ok(())
	}

	#[test]
	fn test_config_defaults() -> Result<(), Error> {
		let config = config!(DisplayColors(false), MaxFieldLen(12));
		assert!(!config.get_or_bool(&CN::DisplayColors, true));
		assert!(config.get_or_bool(&CN::RuntimeTimestamp, true));
		assert_eq!(config.get_or_usize(&CN::MaxFieldLen, 1_024), 12);
		assert_eq!(config.get_or_usize(&CN::MaxLineLen, 4_096), 4_096);

		// wrong type for the name falls back to the default
		assert_eq!(config.get_or_usize(&CN::DisplayColors, 7), 7);

		assert_eq!(MaxLineLen(1).name(), CN::MaxLineLen);
		assert_eq!(RuntimeTimestamp(true).name(), CN::RuntimeTimestamp);

		Ok(())
	}
}
