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
	use std::fs::{read_to_string, File};
	use std::path::PathBuf;
	use ulog_conf::*;
	use ulog_err::*;
	use ulog_log::*;
	use ulog_test::*;

	#[test]
	fn test_independent_loggers() -> Result<(), Error> {
		let test_info = test_info!()?;
		let mut path = PathBuf::from(test_info.directory());
		path.push("ledger.log");

		let mut plain = logger!(DisplayColors(false))?;
		let mut colored = logger!()?;
		plain.toggle_attr(Attribute::Date);
		plain.toggle_attr(Attribute::Time);
		colored.toggle_attr(Attribute::Date);
		colored.toggle_attr(Attribute::Time);

		// each logger owns its attribute table
		plain.toggle_attr(Attribute::Function);
		assert!(plain.is_disabled(Attribute::Function));
		assert!(!colored.is_disabled(Attribute::Function));

		let mut file = File::create(&path)?;
		let mut total = 0;
		for (amount, origin) in [(19.5, "$price"), (42.0, "main.rs"), (3.14, "calc.rs")] {
			let line = LineValue::classify(amount, origin)?;
			total += plain.log(&mut file, &Level::Log, origin, "run", line, format_args!("ok"))?;
		}
		drop(file);

		let contents = read_to_string(&path)?;
		assert_eq!(
			contents,
			"[LOG] [$price19.50] ok\n[LOG] [main.rs:42] ok\n[LOG] [calc.rs:3.140000] ok\n"
		);
		assert_eq!(total, contents.len());

		let line = colored.format(
			&Level::Custom("[TRACE]".to_string()),
			"t.rs",
			"f",
			LineValue::Integer(9),
			format_args!("x"),
		)?;
		assert_eq!(line, "\x1B[0;0m[TRACE]\x1B[0;0m [t.rs:9] \x1B[0;36mf \x1B[0;1mx\x1B[0;0m");

		let mut out: Vec<u8> = vec![];
		plain.log_assertion(
			&mut out,
			"ptr.is_some()",
			"main.rs",
			"init",
			LineValue::Integer(7),
			format_args!("missing"),
		)?;
		assert_eq!(
			String::from_utf8(out)?,
			"Assertion failed: (ptr.is_some())\n[ERROR] [main.rs:7] missing\n"
		);

		assert!(logger!(MaxFieldLen(0)).is_err());
		assert!(logger!(DisplayColors(true), DisplayColors(false)).is_err());
		Ok(())
	}
}
