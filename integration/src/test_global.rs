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
	use ulog_conf::*;
	use ulog_err::*;
	use ulog_log::*;

	fn expected_len(level: Level, function: &str, message: &str) -> Result<usize, Error> {
		let line =
			GlobalLogFunctions::format(level, file!(), function, 0.0, format_args!("{}", message))?;
		Ok(line.len() + 1)
	}

	// the only test in this crate that uses the global logger
	#[test]
	fn test_level_macros() -> Result<(), Error> {
		log_init!(DisplayColors(false), MaxLineLen(512))?;

		// the line value changes with every call site, so hide it
		toggle_attr!(LINE)?;
		assert!(GlobalLogFunctions::is_disabled(Attribute::Line)?);
		let name = function_name!();
		assert_eq!(name, "test_level_macros");

		#[cfg(not(any(feature = "disable_log", feature = "disable_all")))]
		assert_eq!(log!(file!(), "{}", "to stdout")?, expected_len(Level::Log, name, "to stdout")?);
		#[cfg(not(any(feature = "disable_bug", feature = "disable_all")))]
		assert_eq!(bug!(file!(), "{}", "a bug")?, expected_len(Level::Bug, name, "a bug")?);
		#[cfg(not(any(feature = "disable_error", feature = "disable_all")))]
		assert_eq!(error!(file!(), "failed: {}", 5)?, expected_len(Level::Error, name, "failed: 5")?);
		#[cfg(not(any(feature = "disable_warning", feature = "disable_all")))]
		assert_eq!(warning!(file!(), "careful")?, expected_len(Level::Warning, name, "careful")?);

		// disabled wrappers do not evaluate their arguments
		#[cfg(feature = "disable_all")]
		{
			fn evaluated() -> u32 {
				panic!("arguments of a disabled wrapper were evaluated");
			}
			assert_eq!(log!(file!(), "{}", evaluated())?, 0);
			assert_eq!(error!(file!(), "{}", evaluated())?, 0);
		}

		toggle_attr!(LINE)?;
		toggle_attr!(DATE)?;
		toggle_attr!(TIME)?;
		toggle_attr!(FUNCTION)?;
		let line = GlobalLogFunctions::format(
			Level::from("[WARNING]"),
			"$fee",
			"charge",
			2.5,
			format_args!("rounded"),
		)?;
		assert_eq!(line, "[WARNING] [$fee2.50] rounded");

		// hiding the message as well leaves no separator
		toggle_attr!(MESSAGE)?;
		let line = GlobalLogFunctions::format(Level::Log, "a.c", "f", 1.0, format_args!("m"))?;
		assert_eq!(line, "[LOG] [a.c:1] ");
		toggle_attr!(MESSAGE)?;
		toggle_attr!(FUNCTION)?;

		// wrappers still work after options change
		set_log_option!(DisplayColors(true))?;
		let line = GlobalLogFunctions::format(Level::Log, "a.c", "f", 1.0, format_args!("m"))?;
		assert_eq!(
			line,
			"\x1B[1;36m[LOG]\x1B[0;0m [a.c:1] \x1B[0;36mf \x1B[0;1mm\x1B[0;0m"
		);
		assert_eq!(get_log_option!(DisplayColors)?, DisplayColors(true));
		assert_eq!(get_log_option!(MaxLineLen)?, MaxLineLen(512));

		assert!(log_init!().is_err());
		Ok(())
	}
}
