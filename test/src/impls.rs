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

use crate::types::TestInfoImpl;
use crate::TestInfo;
use std::fs::{create_dir_all, remove_dir_all};
use ulog_deps::backtrace;
use ulog_deps::rand::random;
use ulog_err::Error;

impl TestInfo for TestInfoImpl {
	fn directory(&self) -> &String {
		&self.directory
	}
}

impl TestInfoImpl {
	pub(crate) fn new(preserve: bool) -> Result<Self, Error> {
		let mut directory = String::new();
		backtrace::trace(|frame| {
			backtrace::resolve_frame(frame, |symbol| {
				if let Some(name) = symbol.name() {
					directory = name.to_string();
				}
			});
			// wait until we get to the actual test function name.
			directory.starts_with("backtrace")
				|| directory.contains("ulog_test::types::TestInfoImpl")
				|| directory.contains("ulog_test::types::TestBuilder")
		});

		// tests may run in parallel so add a random suffix
		let suffix: u32 = random();
		let directory = directory.replace("::", "_");
		let directory = format!(".{}_{:08x}.ulog", directory, suffix);
		// remove the directory if it existed from a previous failed run
		let _ = remove_dir_all(&directory);
		create_dir_all(&directory)?;

		Ok(Self {
			directory,
			preserve,
		})
	}
}

impl Drop for TestInfoImpl {
	fn drop(&mut self) {
		// if we're not preserving the directory, delete it on drop.
		if !self.preserve {
			let _ = remove_dir_all(&self.directory);
		}
	}
}
